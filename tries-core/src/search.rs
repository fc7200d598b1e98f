use crate::candidates::Candidate;

/// Indices of the candidates whose name contains `query`, ignoring case.
///
/// The result keeps the candidates' original order; an empty query keeps everything.
pub fn filter(candidates: &[Candidate], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..candidates.len()).collect();
    }
    let needle = query.to_lowercase();
    candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.name.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

/// Byte range of the first case-insensitive occurrence of `query` in `name`.
///
/// Returns `None` when there is no match or when lowercasing changes byte offsets,
/// in which case callers render the name without a match marker.
pub fn match_range(name: &str, query: &str) -> Option<std::ops::Range<usize>> {
    if query.is_empty() {
        return None;
    }
    let haystack = name.to_lowercase();
    if haystack.len() != name.len() {
        return None;
    }
    let needle = query.to_lowercase();
    let start = haystack.find(&needle)?;
    let end = start + needle.len();
    (name.is_char_boundary(start) && name.is_char_boundary(end)).then_some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn candidates(names: &[&str]) -> Vec<Candidate> {
        names
            .iter()
            .map(|name| Candidate {
                name: (*name).to_string(),
                path: PathBuf::from("/tries").join(name),
            })
            .collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let list = candidates(&["c", "a", "b"]);
        assert_eq!(filter(&list, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_substring_case_insensitive() {
        let list = candidates(&["2025-08-14-redis-connection-POOL", "thread-pool", "other"]);
        assert_eq!(filter(&list, "pool"), vec![0, 1]);
        assert_eq!(filter(&list, "POOL"), vec![0, 1]);
        assert_eq!(filter(&list, "Thread"), vec![1]);
    }

    #[test]
    fn test_no_matches() {
        let list = candidates(&["alpha", "beta"]);
        assert!(filter(&list, "gamma").is_empty());
    }

    #[test]
    fn test_not_subsequence_matching() {
        let list = candidates(&["abc"]);
        assert!(filter(&list, "ac").is_empty());
    }

    #[test]
    fn test_order_is_stable_and_deterministic() {
        let list = candidates(&["zeta-x", "alpha-x", "mid-x"]);
        let first = filter(&list, "x");
        let second = filter(&list, "x");
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_match_range() {
        assert_eq!(match_range("thread-Pool", "pool"), Some(7..11));
        assert_eq!(match_range("thread-pool", "zzz"), None);
        assert_eq!(match_range("thread-pool", ""), None);
    }
}
