pub mod auto_close;
pub mod config_hot_reload;
pub mod exit;

pub use auto_close::AutoClosePlugin;
pub use config_hot_reload::{ConfigHotReloadPlugin, ConfigReloadSettings};
pub use exit::ExitOnEscapePlugin;
