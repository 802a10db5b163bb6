//! Overlay Generator Port
//!
//! Source of overlay data for a game. The HTTP model client and the JSON file
//! source in `infrastructure::generator` implement it.

use crate::domain::entities::OverlayData;
use crate::error::GenerationError;

pub trait OverlayGenerator {
    /// Produce an overlay from the sampled game context
    fn generate(&self, context: &str) -> Result<OverlayData, GenerationError>;

    /// Short label for progress output
    fn describe(&self) -> String;

    /// Whether `generate` looks at the context at all
    fn needs_context(&self) -> bool {
        true
    }
}

impl<T: OverlayGenerator + ?Sized> OverlayGenerator for Box<T> {
    fn generate(&self, context: &str) -> Result<OverlayData, GenerationError> {
        (**self).generate(context)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn needs_context(&self) -> bool {
        (**self).needs_context()
    }
}
