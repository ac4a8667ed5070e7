//! Property-based tests for path and URL helpers.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::files::canonical_path;
    use crate::url::{format_url, QueryValues};
    use proptest::prelude::*;
    use std::path::{Component, Path};

    /// Relative paths built from normal segments, `.` and `..`.
    fn relative_path() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                "[a-z0-9_]{1,8}",
                Just(".".to_string()),
                Just("..".to_string()),
            ],
            0..8,
        )
        .prop_map(|parts| parts.join("/"))
    }

    // ============================================================================
    // canonical_path property tests
    // ============================================================================

    proptest! {
        /// Property: canonical paths are absolute
        #[test]
        fn canonical_path_is_absolute(path in relative_path()) {
            let result = canonical_path(&path, "/base/dir").unwrap();
            prop_assert!(result.is_absolute());
        }

        /// Property: canonical paths contain no `.` or `..` components
        #[test]
        fn canonical_path_has_no_dot_components(path in relative_path()) {
            let result = canonical_path(&path, "/base/dir").unwrap();
            for component in result.components() {
                prop_assert!(
                    !matches!(component, Component::CurDir | Component::ParentDir),
                    "{} still contains {:?}",
                    result.display(),
                    component
                );
            }
        }

        /// Property: canonicalizing a canonical path changes nothing
        #[test]
        fn canonical_path_is_idempotent(path in relative_path()) {
            let once = canonical_path(&path, "/base/dir").unwrap();
            let twice = canonical_path(&once, "/elsewhere").unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Property: paths without `..` stay under the base
        #[test]
        fn canonical_path_without_parent_stays_under_base(segments in prop::collection::vec("[a-z0-9_]{1,8}", 0..6)) {
            let path = segments.join("/");
            let result = canonical_path(&path, "/base/dir").unwrap();
            prop_assert!(result.starts_with(Path::new("/base/dir")));
        }
    }

    // ============================================================================
    // format_url property tests
    // ============================================================================

    proptest! {
        /// Property: every path part shows up, in order, without doubled slashes
        #[test]
        fn format_url_joins_parts_in_order(parts in prop::collection::vec("/{0,2}[a-z0-9]{1,8}/{0,2}", 1..5)) {
            let url = format_url("https://example.com", &parts, &QueryValues::new(), "").unwrap();
            let expected_path: Vec<&str> = parts.iter().map(|p| p.trim_matches('/')).collect();
            prop_assert_eq!(url, format!("https://example.com/{}", expected_path.join("/")));
        }

        /// Property: the query of the result contains each new key exactly once per value
        #[test]
        fn format_url_query_keys_are_replaced(key in "[a-z]{1,6}", old in "[a-z0-9]{1,6}", new in "[a-z0-9]{1,6}") {
            let base = format!("https://example.com/?{}={}", key, old);
            let mut query = QueryValues::new();
            query.insert(key.clone(), vec![new.clone()]);

            let url = format_url::<&str>(&base, &[], &query, "").unwrap();
            prop_assert_eq!(url, format!("https://example.com/?{}={}", key, new));
        }
    }
}
