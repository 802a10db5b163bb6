//! Property tests for generation context sampling.

use proptest::prelude::*;

use splashpack::domain::services::{build_context, ContextLimits};
use splashpack::{FileRegistry, UploadedFile};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The context never exceeds its total character cap.
    #[test]
    fn property_context_respects_total_cap(
        contents in proptest::collection::vec("[a-z ]{0,200}", 1..=6),
        max_files in 1usize..6,
        max_chars_per_file in 0usize..120,
        max_total_chars in 0usize..400,
    ) {
        let registry: FileRegistry = contents
            .iter()
            .enumerate()
            .map(|(i, c)| UploadedFile::from_bytes(format!("f{i}.js"), c.clone()))
            .collect();
        let limits = ContextLimits { max_files, max_chars_per_file, max_total_chars };

        let context = build_context(&registry, None, &limits);

        prop_assert!(context.chars().count() <= max_total_chars);
        prop_assert!(context.matches("--- f").count() <= max_files);
    }
}
