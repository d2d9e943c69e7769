pub mod input_guard;

pub use input_guard::InputGuard;
pub use sctscan_engine::utils::{preview_compact, truncate_chars};
