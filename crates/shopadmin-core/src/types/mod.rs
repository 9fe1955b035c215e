//! Shared types: pagination, sorting, and the list query contract.

pub mod list;
pub mod pagination;
pub mod sorting;

pub use list::ListRequest;
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PageResponse};
pub use sorting::{SortDirection, SortableFields};
