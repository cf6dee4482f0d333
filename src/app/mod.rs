pub mod adapter;
pub mod game;

pub use adapter::AdapterPlugin;
pub use game::{ConfigReport, GamePlugin};
