//! Bundle Module
//!
//! Orchestrates a full bundle run.
//!
//! ## Structure
//!
//! - `options` - `BundleRunOptions`
//! - `result` - `BundleOutcome`
//! - `use_case` - `BundleUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use splashpack::application::{BundleRunOptions, BundleUseCase};
//!
//! let use_case = BundleUseCase::new(generator, NoEntryChooser);
//! let outcome = use_case.execute(&BundleRunOptions::new("game", "game-bundle.html"), &sink)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::BundleRunOptions;
pub use result::BundleOutcome;
pub use use_case::BundleUseCase;
