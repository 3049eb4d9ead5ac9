//! Pure pagination over an already-filtered, already-ordered listing.
//!
//! Out-of-range page requests clamp to the nearest valid page instead of
//! erroring, and every listing has at least one page even when it is empty.

/// Posts per page when `POSTS_PER_PAGE` is not configured.
pub const DEFAULT_POSTS_PER_PAGE: usize = 10;

/// One page of a listing plus the metadata the views render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based number of the page actually served, after clamping.
    pub number: u64,
    pub total_pages: u64,
    /// Size of the whole filtered set, independent of the page size.
    pub total_items: u64,
}

/// Slice `items` into the requested 1-based page.
///
/// Requests below 1 land on the first page, requests past the end land on
/// the last page.
pub fn paginate<T>(items: Vec<T>, page_size: usize, requested_page: u64) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len() as u64;
    let total_pages = total_items.div_ceil(page_size as u64).max(1);
    let number = requested_page.clamp(1, total_pages);
    let start = (number - 1) as usize * page_size;
    let items = items.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        number,
        total_pages,
        total_items,
    }
}
