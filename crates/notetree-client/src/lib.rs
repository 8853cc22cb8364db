#![forbid(unsafe_code)]

//! HTTP children provider and effect driver for the notetree library
//! menu.
//!
//! [`HttpChildrenProvider`] speaks the notes service's JSON API;
//! [`MenuDriver`] owns a [`notetree_core::MenuModel`], executes the
//! fetches its update function requests on background threads, and pumps
//! completions back through it.

pub mod driver;
pub mod http;

pub use driver::MenuDriver;
pub use http::HttpChildrenProvider;
