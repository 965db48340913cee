//! Fixed page bodies
//!
//! The two HTML fragments the server returns for its literal routes.
//! Defined once at startup, never mutated.

/// Body served for `GET /`
pub const HOME_PAGE: &str = "<h1>Hello from Maxx Mai Card Assignment!</h1>";

/// Body served for `GET /game`
pub const GAME_PAGE: &str = "<h1>Welcome to the card game!</h1>";
