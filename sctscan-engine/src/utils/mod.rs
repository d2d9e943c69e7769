pub mod preview;
pub mod text;

pub use preview::preview_compact;
pub use text::{safe_lowercase, sentence_bounds, truncate_chars};
