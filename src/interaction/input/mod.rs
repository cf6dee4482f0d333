pub mod capture;

pub use capture::{capture_frame_input, FrameInput, MouseTracker};
