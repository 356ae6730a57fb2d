/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> usize {
    usize::try_from(flag.unwrap_or(configured)).unwrap_or(usize::MAX)
}

/// Keep at most `limit` rows.
pub fn apply_limit<T>(mut rows: Vec<T>, limit: usize) -> Vec<T> {
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::{apply_limit, effective_limit};

    #[test]
    fn flag_wins_over_config() {
        assert_eq!(effective_limit(Some(5), 20), 5);
        assert_eq!(effective_limit(None, 20), 20);
    }

    #[test]
    fn apply_limit_truncates() {
        assert_eq!(apply_limit(vec![1, 2, 3], 2), vec![1, 2]);
        assert_eq!(apply_limit(vec![1], 10), vec![1]);
    }
}
