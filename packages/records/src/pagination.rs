// ABOUTME: Pagination utilities for the record listings
// ABOUTME: Page requests, derived metadata, and slice windows

use serde::{Deserialize, Serialize};

/// Page sizes selectable in the UI
pub const PAGE_SIZES: [usize; 3] = [10, 20, 50];

/// Default page size for paginated listings
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Minimum page number (1-indexed)
pub const MIN_PAGE: usize = 1;

/// A requested page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed)
    pub page: usize,

    /// Number of items per page
    pub size: usize,
}

impl PageRequest {
    pub fn new() -> Self {
        Self {
            page: MIN_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_and_size(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// Page number, normalized to at least 1
    pub fn page(&self) -> usize {
        self.page.max(MIN_PAGE)
    }

    /// Page size, normalized to at least 1
    pub fn size(&self) -> usize {
        self.size.max(1)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Total number of pages for `total_items` at `size` items per page
pub fn total_pages(total_items: usize, size: usize) -> usize {
    if total_items == 0 {
        0
    } else {
        (total_items + size - 1) / size
    }
}

/// Metadata about pagination state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Current page number (1-indexed), clamped into range
    pub page: usize,

    /// Items per page
    #[serde(rename = "pageSize")]
    pub page_size: usize,

    /// Total number of items across all pages
    #[serde(rename = "totalItems")]
    pub total_items: usize,

    /// Total number of pages
    #[serde(rename = "totalPages")]
    pub total_pages: usize,

    /// Whether there is a next page
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,

    /// Whether there is a previous page
    #[serde(rename = "hasPreviousPage")]
    pub has_previous_page: bool,
}

impl PageMeta {
    /// Create pagination metadata from a request and total item count.
    /// The page is clamped to `[1, total_pages]` (page 1 when empty).
    pub fn new(request: &PageRequest, total_items: usize) -> Self {
        let page_size = request.size();
        let total_pages = total_pages(total_items, page_size);
        let page = request.page().min(total_pages.max(MIN_PAGE));

        Self {
            page,
            page_size,
            total_items,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > MIN_PAGE,
        }
    }
}

/// The window of `items` visible on the requested page
pub fn page_slice<'a, T>(items: &'a [T], request: &PageRequest) -> &'a [T] {
    let meta = PageMeta::new(request, items.len());
    let start = (meta.page - 1) * meta.page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + meta.page_size).min(items.len());
    &items[start..end]
}
