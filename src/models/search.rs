//! Pagination state owned by the query client.

use serde::{Deserialize, Serialize};

/// Current query and page cursor.
///
/// `current_page` starts at 1. `last_page` stays `None` until the first
/// successful fetch for the current query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
    pub current_page: u32,
    pub last_page: Option<u32>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            last_page: None,
        }
    }
}

impl SearchState {
    /// Smallest page `p` such that `p * page_size >= total_hits`
    pub fn last_page_for(total_hits: u64, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        let pages = total_hits.div_ceil(u64::from(page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Whether another page can be requested. False while `last_page` is unknown.
    pub fn has_more(&self) -> bool {
        matches!(self.last_page, Some(last) if self.current_page < last)
    }

    pub fn is_last_page(&self) -> bool {
        self.last_page == Some(self.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page_for() {
        assert_eq!(SearchState::last_page_for(0, 40), 0);
        assert_eq!(SearchState::last_page_for(1, 40), 1);
        assert_eq!(SearchState::last_page_for(40, 40), 1);
        assert_eq!(SearchState::last_page_for(41, 40), 2);
        assert_eq!(SearchState::last_page_for(85, 40), 3);
        assert_eq!(SearchState::last_page_for(500, 40), 13);
    }

    #[test]
    fn test_has_more() {
        let mut state = SearchState::default();
        assert!(!state.has_more());

        state.last_page = Some(3);
        assert!(state.has_more());
        assert!(!state.is_last_page());

        state.current_page = 3;
        assert!(!state.has_more());
        assert!(state.is_last_page());
    }
}
