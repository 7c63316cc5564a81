//! Display window over the match set

/// Most matches rendered and reachable by keyboard at once
pub const MAX_RENDERED: usize = 200;

/// Split a match set into its rendered prefix and the number left out
///
/// The overflow only counts matches hidden by the cap; they are still
/// matches, just not shown.
#[must_use]
pub fn window<T>(matches: &[T]) -> (&[T], usize) {
    let shown = matches.len().min(MAX_RENDERED);
    (&matches[..shown], matches.len() - shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_set_is_not_capped() {
        let matches = [1, 2, 3];
        let (shown, overflow) = window(&matches);
        assert_eq!(shown, &[1, 2, 3]);
        assert_eq!(overflow, 0);
    }

    #[test]
    fn test_large_set_is_capped() {
        let matches: Vec<usize> = (0..250).collect();
        let (shown, overflow) = window(&matches);
        assert_eq!(shown.len(), MAX_RENDERED);
        assert_eq!(shown[0], 0);
        assert_eq!(shown[MAX_RENDERED - 1], MAX_RENDERED - 1);
        assert_eq!(overflow, 50);
    }

    #[test]
    fn test_empty_set() {
        let (shown, overflow) = window::<usize>(&[]);
        assert!(shown.is_empty());
        assert_eq!(overflow, 0);
    }

    proptest! {
        #[test]
        fn prop_window_size_and_overflow(len in 0usize..600) {
            let matches: Vec<usize> = (0..len).collect();
            let (shown, overflow) = window(&matches);
            prop_assert_eq!(shown.len(), len.min(MAX_RENDERED));
            prop_assert_eq!(shown.len() + overflow, len);
        }
    }
}
