//! # govsite-site
//!
//! The site surface: a fixed page registry, a route table over it with a
//! catch-all not-found page, and [`Site::mount`] which gives a page its
//! estimator widget or simulated form.

pub mod pages;
pub mod routes;
pub mod site;

pub use pages::{Page, PageKind, NOT_FOUND, PAGES};
pub use routes::RouteTable;
pub use site::{MountedPage, Site};
