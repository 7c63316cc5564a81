//! Substring filtering of listed paths
//!
//! Matching is plain, case-insensitive containment against the whole
//! relative path, so directory segments match as well as file names.

use std::borrow::Cow;

/// Whether a query filters anything at all
#[must_use]
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Indices of the paths matching `query`, in list order
///
/// A blank query matches every path.
#[must_use]
pub fn matching_indices(paths: &[String], query: &str) -> Vec<usize> {
    if is_blank(query) {
        return (0..paths.len()).collect();
    }

    let needle = query.to_lowercase();
    paths
        .iter()
        .enumerate()
        .filter(|(_, path)| path.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Filter `paths` down to those containing `query`
///
/// A blank query returns the input slice itself, borrowed.
///
/// # Examples
///
/// ```
/// use quickswitch::switcher::filter_paths;
///
/// let files = vec!["src/main.ts".to_string(), "README.md".to_string()];
/// assert_eq!(filter_paths(&files, "MAIN").as_ref(), ["src/main.ts"]);
/// assert_eq!(filter_paths(&files, "  ").as_ref(), files.as_slice());
/// ```
#[must_use]
pub fn filter_paths<'a>(paths: &'a [String], query: &str) -> Cow<'a, [String]> {
    if is_blank(query) {
        return Cow::Borrowed(paths);
    }

    Cow::Owned(
        matching_indices(paths, query)
            .into_iter()
            .map(|idx| paths[idx].clone())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_filter_by_file_name() {
        let list = files(&["src/main.ts", "README.md"]);
        assert_eq!(filter_paths(&list, "main").as_ref(), ["src/main.ts"]);
    }

    #[test]
    fn test_blank_query_borrows_input() {
        let list = files(&["b.rs", "a.rs"]);
        for query in ["", "   ", "\t"] {
            let result = filter_paths(&list, query);
            assert!(matches!(result, Cow::Borrowed(_)));
            assert!(std::ptr::eq(result.as_ref(), list.as_slice()));
        }
    }

    #[test]
    fn test_matches_directory_segments() {
        let list = files(&["src/ui/mod.rs", "tests/ui.rs", "lib.rs"]);
        assert_eq!(
            filter_paths(&list, "UI").as_ref(),
            ["src/ui/mod.rs", "tests/ui.rs"]
        );
    }

    #[test]
    fn test_query_whitespace_is_significant_when_not_blank() {
        let list = files(&["my file.txt", "myfile.txt"]);
        assert_eq!(filter_paths(&list, "my ").as_ref(), ["my file.txt"]);
    }

    #[test]
    fn test_no_matches() {
        let list = files(&["a.rs"]);
        assert!(filter_paths(&list, "zzz").is_empty());
        assert!(matching_indices(&list, "zzz").is_empty());
    }

    proptest! {
        #[test]
        fn prop_blank_query_is_identity(
            list in prop::collection::vec("[a-zA-Z/._]{0,12}", 0..20),
            spaces in " {0,4}"
        ) {
            let result = filter_paths(&list, &spaces);
            prop_assert_eq!(result.as_ref(), list.as_slice());
        }

        #[test]
        fn prop_result_is_ordered_subsequence(
            list in prop::collection::vec("[a-cA-C/.]{0,8}", 0..30),
            query in "[a-cA-C]{1,2}"
        ) {
            let indices = matching_indices(&list, &query);
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));

            let needle = query.to_lowercase();
            for (idx, path) in list.iter().enumerate() {
                let contained = path.to_lowercase().contains(&needle);
                prop_assert_eq!(indices.contains(&idx), contained);
            }
        }
    }
}
