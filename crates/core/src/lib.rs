//! Inkzaar Core - Shared types library.
//!
//! This crate provides the domain vocabulary used by the `storefront` crate
//! and its integration tests: type-safe identifiers, rupee amounts, email
//! addresses, roles and order/quotation statuses.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no async,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, money, emails, roles and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
