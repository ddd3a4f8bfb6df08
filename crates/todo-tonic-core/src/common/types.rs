//! Pagination constants shared by the server and its clients.
//!
//! `ListTodos` treats `page_size` as a hint: non-positive values fall back
//! to [`DEFAULT_PAGE_SIZE`], and anything above the configured maximum is
//! clamped. Both bounds can be overridden at server startup; these are the
//! stock values.

/// Page size applied when a client sends `page_size <= 0`.
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Stock upper bound on the number of todos returned in a single page.
pub const MAX_PAGE_SIZE: i32 = 100;
