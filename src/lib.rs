//! Per-repository commit counts for a GitHub user.
//!
//! The network seam is the [`http::HttpGet`] port: production code plugs in
//! the reqwest-backed [`http::ReqwestGet`], tests plug in a scripted fake, so
//! the whole client can be exercised without touching the network.

pub mod error;
pub mod github;
pub mod http;
pub mod link;
pub mod triangle;
pub mod types;
