//! Offset/limit page cursors.

use serde::{Deserialize, Serialize};

/// One offset/limit page request.
///
/// Pages are fetched one at a time; each fetch replaces the previous page.
/// [`PageRequest::next`] computes the cursor for the following page so the
/// caller never has to track offsets by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// The first page of the given size.
    pub fn first(limit: u64) -> Self {
        Self::new(0, limit)
    }

    /// Query parameters for this page.
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }

    /// Cursor for the page after this one, given how many entries this page
    /// returned and the total the job reported.
    ///
    /// Returns `None` once `total` is reached, or when the page came back
    /// empty (the server has nothing more to give).
    pub fn next(&self, received: usize, total: u64) -> Option<Self> {
        if received == 0 {
            return None;
        }
        let consumed = self.offset.saturating_add(received as u64);
        (consumed < total).then(|| Self::new(consumed, self.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let params = PageRequest::new(2000, 1000).query_params();
        assert_eq!(
            params,
            [("offset", "2000".to_string()), ("limit", "1000".to_string())]
        );
    }

    #[test]
    fn test_next_advances_by_received_count() {
        let first = PageRequest::first(1000);
        assert_eq!(first.next(1000, 2500), Some(PageRequest::new(1000, 1000)));
        assert_eq!(
            PageRequest::new(1000, 1000).next(1000, 2500),
            Some(PageRequest::new(2000, 1000))
        );
        assert_eq!(PageRequest::new(2000, 1000).next(500, 2500), None);
    }

    #[test]
    fn test_next_uses_received_not_limit_for_short_pages() {
        // Server returned fewer than requested although more remain.
        assert_eq!(
            PageRequest::first(100).next(40, 1000),
            Some(PageRequest::new(40, 100))
        );
    }

    #[test]
    fn test_next_stops_on_empty_page() {
        assert_eq!(PageRequest::first(100).next(0, 1000), None);
    }

    #[test]
    fn test_next_stops_at_exact_total() {
        assert_eq!(PageRequest::first(100).next(100, 100), None);
    }
}
