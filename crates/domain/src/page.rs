//! Pagination contract shared by every list query.

use serde::Serialize;

/// Page size used when the caller asks for something out of bounds.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Hard ceiling on items per page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A clamped page request. Construct with [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Clamp raw caller input into a valid request.
    ///
    /// `page < 1` becomes 1 and pages past `u32::MAX` saturate.
    /// `page_size < 1` or `> 100` becomes 10.
    #[must_use]
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = u32::try_from(page.max(1)).unwrap_or(u32::MAX);
        let page_size = u32::try_from(page_size)
            .ok()
            .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self { page, page_size }
    }

    #[must_use]
    pub fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn page_size(self) -> u32 {
        self.page_size
    }

    /// Number of rows to skip.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Number of rows to return.
    #[must_use]
    pub fn limit(self) -> u64 {
        u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the total number of matching records.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// `ceil(total / page_size)`, zero when nothing matched.
    #[must_use]
    pub fn total_pages(&self, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_clamp_page_size_above_ceiling_to_default() {
        let req = PageRequest::new(1, 500);
        assert_eq!(req.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn should_keep_page_size_at_ceiling() {
        let req = PageRequest::new(1, 100);
        assert_eq!(req.page_size(), 100);
    }

    #[test]
    fn should_clamp_page_zero_to_one() {
        let req = PageRequest::new(0, 20);
        assert_eq!(req.page(), 1);
        assert_eq!(req.page_size(), 20);
    }

    #[test]
    fn should_clamp_negative_values() {
        let req = PageRequest::new(-4, -1);
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn should_saturate_page_when_above_u32_range() {
        let req = PageRequest::new(5_000_000_000, 10);
        assert_eq!(req.page(), u32::MAX);
        assert_eq!(req.offset(), u64::from(u32::MAX - 1) * 10);
    }

    #[test]
    fn should_compute_offset_from_page_and_size() {
        let req = PageRequest::new(3, 25);
        assert_eq!(req.offset(), 50);
        assert_eq!(req.limit(), 25);
    }

    #[test]
    fn should_round_total_pages_up() {
        let page: Page<()> = Page::new(vec![], 21);
        assert_eq!(page.total_pages(10), 3);
        assert_eq!(page.total_pages(21), 1);
    }

    #[test]
    fn should_report_zero_pages_when_nothing_matched() {
        let page: Page<()> = Page::new(vec![], 0);
        assert_eq!(page.total_pages(10), 0);
    }
}
