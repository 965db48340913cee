//! Request handler module
//!
//! Responsible for request routing dispatch: static assets first, then the
//! two fixed pages, then 404.

pub mod pages;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
