//! HTTP protocol layer module
//!
//! Response builders, MIME detection and conditional-request helpers,
//! decoupled from the routing logic that uses them.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_html_response,
    build_options_response, build_static_response,
};
