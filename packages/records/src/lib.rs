// ABOUTME: In-memory CoT record store and list utilities for Cotdesk
// ABOUTME: Mock dataset, read/write contract, pagination, filter query codec

pub mod dataset;
pub mod pagination;
pub mod query;
pub mod store;

pub use pagination::{page_slice, PageMeta, PageRequest, DEFAULT_PAGE_SIZE, PAGE_SIZES};
pub use query::ListFilters;
pub use store::DatasetStore;
