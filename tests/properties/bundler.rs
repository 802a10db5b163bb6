//! Property tests for the document bundler.

use proptest::prelude::*;

use splashpack::domain::services::OVERLAY_ROOT_ID;
use splashpack::{bundle, FileRegistry, OverlayData, UploadedFile};

fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 .,!?]{0,30}").unwrap()
}

/// Body fragments built from a fixed tag vocabulary
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        text().prop_map(|t| format!("<p>{t}</p>")),
        text().prop_map(|t| format!("<div class=\"box\">{t}</div>")),
        text().prop_map(|t| format!("<span>{t}</span>")),
        Just("<canvas id=\"c\"></canvas>".to_string()),
        Just("<img src=\"missing.png\">".to_string()),
        text(),
    ]
}

fn overlay() -> OverlayData {
    OverlayData::new(
        format!("<div id=\"{OVERLAY_ROOT_ID}\">Loading</div>"),
        "#x{}",
        "/* overlay-js */",
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Bundling always yields one document with the overlay injected once.
    #[test]
    fn property_overlay_injected_once(
        fragments in proptest::collection::vec(fragment(), 0..=10),
        with_shell in any::<bool>(),
    ) {
        let body = fragments.concat();
        let html = if with_shell {
            format!("<!DOCTYPE html><html><head><title>t</title></head><body>{body}</body></html>")
        } else {
            body
        };
        let entry = UploadedFile::from_bytes("index.html", html);
        let registry: FileRegistry = [entry.clone()].into_iter().collect();

        let out = bundle(&registry, &entry, &overlay()).unwrap();

        prop_assert!(out.html.starts_with("<!DOCTYPE html>\n<html"));
        prop_assert_eq!(out.html.matches("<body").count(), 1);
        prop_assert_eq!(out.html.matches("/* overlay-js */").count(), 1);
        prop_assert_eq!(out.html.matches(OVERLAY_ROOT_ID).count(), 2);
        prop_assert!(out.report.overlay_root_found);
    }

    /// PROPERTY: Inlined scripts keep their document order.
    #[test]
    fn property_script_order_preserved(
        count in 1usize..8,
        reversed_upload in any::<bool>(),
    ) {
        let tags: String = (0..count)
            .map(|i| format!("<script src=\"js/s{i}.js\"></script>"))
            .collect();
        let entry = UploadedFile::from_bytes(
            "index.html",
            format!("<html><head></head><body>{tags}</body></html>"),
        );

        let mut scripts: Vec<UploadedFile> = (0..count)
            .map(|i| UploadedFile::from_bytes(format!("s{i}.js"), format!("/* script-{i} */")))
            .collect();
        if reversed_upload {
            scripts.reverse();
        }
        let mut registry = FileRegistry::new();
        registry.add([entry.clone()]);
        registry.add(scripts);

        let out = bundle(&registry, &entry, &overlay()).unwrap();

        prop_assert_eq!(out.report.inlined_count(), count);
        let positions: Vec<usize> = (0..count)
            .map(|i| out.html.find(&format!("/* script-{i} */")).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(!out.html.contains("src=\"js/"));
    }

    /// PROPERTY: Bundling the same input twice gives the same output.
    #[test]
    fn property_bundle_deterministic(
        fragments in proptest::collection::vec(fragment(), 0..=6),
    ) {
        let entry = UploadedFile::from_bytes("index.html", fragments.concat());
        let registry: FileRegistry = [entry.clone()].into_iter().collect();

        let first = bundle(&registry, &entry, &overlay()).unwrap();
        let second = bundle(&registry, &entry, &overlay()).unwrap();
        prop_assert_eq!(first, second);
    }
}
