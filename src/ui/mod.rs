pub mod ci;
pub mod console;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod prompt;
pub mod terminal;
pub mod theme;
