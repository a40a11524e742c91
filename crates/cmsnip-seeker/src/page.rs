//! Pagination.
//!
//! List views show one [`Page`] of results at a time and report how many
//! records matched in total. The page size cycles through [`PAGE_LIMITS`].

use serde::Serialize;

use crate::error::{Result, SeekerError};

/// Page sizes offered by list views, in cycle order.
pub const PAGE_LIMITS: [usize; 5] = [5, 10, 25, 50, 100];

/// A 1-based page number and a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    number: usize,
    limit: usize,
}

impl Page {
    /// Creates a page, rejecting page 0 and a zero limit.
    pub fn new(number: usize, limit: usize) -> Result<Self> {
        if number == 0 {
            return Err(SeekerError::ZeroPage);
        }
        if limit == 0 {
            return Err(SeekerError::ZeroLimit);
        }
        Ok(Page { number, limit })
    }

    /// The 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Records per page.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of records before this page.
    pub fn skip(&self) -> usize {
        (self.number - 1).saturating_mul(self.limit)
    }

    /// Number of pages needed for `total` records.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page {
            number: 1,
            limit: PAGE_LIMITS[0],
        }
    }
}

/// Returns the page size after `current` in [`PAGE_LIMITS`].
///
/// Wraps from the largest size back to the smallest; a size not in the
/// cycle restarts it.
pub fn next_page_limit(current: usize) -> usize {
    match PAGE_LIMITS.iter().position(|&limit| limit == current) {
        Some(i) => PAGE_LIMITS[(i + 1) % PAGE_LIMITS.len()],
        None => PAGE_LIMITS[0],
    }
}

/// One page of results plus the totals a list view displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// Number of records on this page.
    pub results: usize,
    /// Number of matching records across all pages.
    pub total_count: usize,
    /// Number of pages at this page size.
    pub total_pages: usize,
    /// The 1-based page number.
    pub page: usize,
    /// Records per page.
    pub limit: usize,
}

impl<T> Paged<T> {
    /// Slices `matches` down to `page`.
    pub fn from_matches(matches: Vec<T>, page: Page) -> Self {
        let total_count = matches.len();
        let items: Vec<T> = matches
            .into_iter()
            .skip(page.skip())
            .take(page.limit())
            .collect();
        Paged {
            results: items.len(),
            items,
            total_count,
            total_pages: page.total_pages(total_count),
            page: page.number(),
            limit: page.limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero() {
        assert!(matches!(Page::new(0, 5), Err(SeekerError::ZeroPage)));
        assert!(matches!(Page::new(1, 0), Err(SeekerError::ZeroLimit)));
    }

    #[test]
    fn skip_and_total_pages() {
        let page = Page::new(3, 5).unwrap();
        assert_eq!(page.skip(), 10);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(10), 2);
        assert_eq!(page.total_pages(11), 3);
    }

    #[test]
    fn default_is_first_page_of_five() {
        assert_eq!(Page::default(), Page::new(1, 5).unwrap());
    }

    #[test]
    fn page_limit_cycle() {
        assert_eq!(next_page_limit(5), 10);
        assert_eq!(next_page_limit(10), 25);
        assert_eq!(next_page_limit(25), 50);
        assert_eq!(next_page_limit(50), 100);
        assert_eq!(next_page_limit(100), 5);
        assert_eq!(next_page_limit(7), 5);
    }

    #[test]
    fn from_matches_slices() {
        let paged = Paged::from_matches((1..=12).collect(), Page::new(3, 5).unwrap());
        assert_eq!(paged.items, vec![11, 12]);
        assert_eq!(paged.results, 2);
        assert_eq!(paged.total_count, 12);
        assert_eq!(paged.total_pages, 3);
        assert_eq!(paged.page, 3);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let paged = Paged::from_matches(vec!["a", "b"], Page::new(4, 5).unwrap());
        assert!(paged.items.is_empty());
        assert_eq!(paged.results, 0);
        assert_eq!(paged.total_count, 2);
        assert_eq!(paged.total_pages, 1);
    }
}
