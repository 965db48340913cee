//! card-server
//!
//! A small asynchronous HTTP server for the card assignment: serves static
//! assets from a public directory and two fixed HTML pages (`/` and `/game`),
//! answering 404 for everything else.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
