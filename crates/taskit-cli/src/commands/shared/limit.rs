/// Rows a list command prints, or `None` for all of them.
///
/// The subcommand's `--limit` beats the global `--limit`, which beats
/// `general.default_limit`. Zero at whichever level wins lifts the cap.
#[must_use]
pub fn row_limit(local: Option<u32>, global: Option<u32>, configured: u32) -> Option<usize> {
    match local.or(global).unwrap_or(configured) {
        0 => None,
        n => usize::try_from(n).ok(),
    }
}

/// Cut `rows` down to `limit`, reporting how many were dropped.
pub fn apply_limit<T>(rows: &mut Vec<T>, limit: Option<usize>) -> usize {
    let Some(limit) = limit else {
        return 0;
    };
    let dropped = rows.len().saturating_sub(limit);
    rows.truncate(limit);
    dropped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{apply_limit, row_limit};

    #[test]
    fn subcommand_limit_wins() {
        assert_eq!(row_limit(Some(5), Some(10), 50), Some(5));
        assert_eq!(row_limit(None, Some(10), 50), Some(10));
        assert_eq!(row_limit(None, None, 50), Some(50));
    }

    #[test]
    fn zero_lifts_the_cap() {
        assert_eq!(row_limit(Some(0), Some(10), 50), None);
        assert_eq!(row_limit(None, None, 0), None);
        assert_eq!(row_limit(Some(3), None, 0), Some(3));
    }

    #[test]
    fn apply_limit_counts_dropped_rows() {
        let mut rows = vec![1, 2, 3, 4];
        assert_eq!(apply_limit(&mut rows, Some(3)), 1);
        assert_eq!(rows, vec![1, 2, 3]);
        assert_eq!(apply_limit(&mut rows, None), 0);
        assert_eq!(apply_limit(&mut rows, Some(10)), 0);
        assert_eq!(rows.len(), 3);
    }
}
