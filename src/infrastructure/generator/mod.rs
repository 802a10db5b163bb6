//! Overlay sources
//!
//! - `GeminiGenerator`: remote model over HTTP
//! - `JsonFileOverlaySource`: a previously saved overlay JSON file

mod gemini;
mod json_file;
mod prompt;

pub use gemini::{extract_reply_text, GeminiGenerator};
pub use json_file::JsonFileOverlaySource;
pub use prompt::build_prompt;
