//! Pagination: fixed-size, 1-indexed windows over an ordered result set
//!
//! An empty window is never a successful page: `Paginated::non_empty` turns it
//! into a `PageError`, which callers report as "not found".

use thiserror::Error;

/// Items per page for every paginated listing
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Requested page number (1-indexed)
///
/// Page 0 is representable and always yields an empty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
}

impl Pagination {
    pub fn new(page: u32) -> Self {
        Self { page }
    }

    /// Calculate SQL OFFSET value, or `None` for page 0.
    pub fn offset(&self) -> Option<u64> {
        self.page
            .checked_sub(1)
            .map(|p| u64::from(p) * u64::from(QUESTIONS_PER_PAGE))
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        QUESTIONS_PER_PAGE
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// `?page=N` query parameter
///
/// Only the first `page` pair counts. A value that is not an integer is
/// treated as absent and falls back to page 1; zero and negative pages have
/// no window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: Option<i64>,
}

impl PaginationParams {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let page = pairs
            .into_iter()
            .find(|(key, _)| key.as_ref() == "page")
            .and_then(|(_, value)| value.as_ref().trim().parse::<i64>().ok());
        Self { page }
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = params.page.unwrap_or(1);
        // non-positive pages collapse onto page 0, the empty window
        Self::new(u32::try_from(page.max(0)).unwrap_or(u32::MAX))
    }
}

/// One page of results plus the size of the whole result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
}

/// The requested window contained nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page {page} is empty ({total} items in total)")]
pub struct PageError {
    pub page: u32,
    pub total: i64,
}

impl<T> Paginated<T> {
    /// Reject an empty page.
    ///
    /// Windows cut in memory and windows cut in SQL both pass through here,
    /// so they share the same emptiness rule.
    pub fn non_empty(self) -> Result<Self, PageError> {
        if self.items.is_empty() {
            Err(PageError {
                page: self.page,
                total: self.total,
            })
        } else {
            Ok(self)
        }
    }
}

/// Slice `items[(p-1)*10 .. p*10]` out of a fully materialized result set.
///
/// The window may be empty; call [`Paginated::non_empty`] before answering.
pub fn paginate<T: Clone>(items: &[T], page: Pagination) -> Paginated<T> {
    let total = items.len() as i64;
    let window = page
        .offset()
        .and_then(|offset| usize::try_from(offset).ok())
        .filter(|&start| start < items.len())
        .map(|start| {
            let end = start
                .saturating_add(page.limit() as usize)
                .min(items.len());
            items[start..end].to_vec()
        })
        .unwrap_or_default();

    Paginated {
        items: window,
        total,
        page: page.page,
    }
}
