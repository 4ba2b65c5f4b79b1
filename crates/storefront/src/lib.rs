//! Inkzaar storefront library.
//!
//! Printing products, services and the influencer programme, served as
//! server-rendered pages. Exposed as a library so the integration tests can
//! drive the router directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
