//! Property tests for reference resolution.

use proptest::prelude::*;

use splashpack::domain::services::{basename, is_inlinable_ref, resolve};
use splashpack::{FileRegistry, UploadedFile};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,12}").unwrap()
}

fn file_name() -> impl Strategy<Value = String> {
    (segment(), prop_oneof![Just("js"), Just("css"), Just("png")])
        .prop_map(|(stem, ext)| format!("{stem}.{ext}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Directory prefixes never affect which file a reference resolves to.
    #[test]
    fn property_resolve_ignores_directories(
        dirs in proptest::collection::vec(segment(), 0..=4),
        name in file_name(),
        dot_prefix in any::<bool>(),
    ) {
        let registry: FileRegistry = [UploadedFile::from_bytes(name.clone(), "x")]
            .into_iter()
            .collect();

        let mut reference = dirs.join("/");
        if !reference.is_empty() {
            reference.push('/');
        }
        reference.push_str(&name);
        if dot_prefix {
            reference.insert_str(0, "./");
        }

        prop_assert!(is_inlinable_ref(&reference));
        let resolved = resolve(&reference, &registry).map(|f| f.name.clone());
        prop_assert_eq!(resolved, Some(name));
    }

    /// PROPERTY: A basename never contains a separator.
    #[test]
    fn property_basename_has_no_slash(reference in "[a-z/._-]{0,40}") {
        prop_assert!(!basename(&reference).contains('/'));
        prop_assert!(reference.ends_with(basename(&reference)));
    }

    /// PROPERTY: Absolute and embedded references are never handed to the resolver.
    #[test]
    fn property_absolute_refs_are_not_inlinable(
        scheme in prop_oneof![Just("http"), Just("https"), Just("file"), Just("blob")],
        host in segment(),
        name in file_name(),
    ) {
        let absolute = format!("{scheme}://{host}/{name}");
        let protocol_relative = format!("//{host}/{name}");
        let data = format!("data:text/plain,{name}");
        prop_assert!(!is_inlinable_ref(&absolute));
        prop_assert!(!is_inlinable_ref(&protocol_relative));
        prop_assert!(!is_inlinable_ref(&data));
    }

    /// PROPERTY: A name missing from the registry never resolves.
    #[test]
    fn property_unknown_names_do_not_resolve(
        known in file_name(),
        other in file_name(),
    ) {
        prop_assume!(known != other);
        let registry: FileRegistry = [UploadedFile::from_bytes(known, "x")]
            .into_iter()
            .collect();
        let reference = format!("lib/{}", other);
        prop_assert!(resolve(&reference, &registry).is_none());
    }
}
