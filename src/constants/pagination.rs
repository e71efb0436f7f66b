//! Pagination constants for the feed and dashboard listings.

/// Number of thoughts per page, shared by the public feed and the dashboard.
pub const PAGE_SIZE: u64 = 5;

/// Page number used when the request carries none (or an unparseable one).
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// How many page links to show on each side of the current page before
/// collapsing the rest into an ellipsis.
pub const PAGE_WINDOW: u64 = 2;
