#![forbid(unsafe_code)]

//! Core of the notetree library menu: a collapsible, lazily populated
//! navigation tree over a notes hierarchy.
//!
//! Rendered content lives in a document-less element tree ([`Fragment`]),
//! state transitions go through a single update function
//! ([`MenuModel::update`]) returning commands ([`MenuCmd`]) for the
//! side effects, and the remote children endpoint sits behind the
//! [`ChildrenProvider`] seam. Nothing in this crate performs I/O.
//!
//! # Example
//!
//! ```
//! use notetree_core::{
//!     ChildrenResponse, CurrentPage, MenuCmd, MenuConfig, MenuModel, MenuMsg, PageRef,
//! };
//!
//! let mut model = MenuModel::new(MenuConfig::new("0", false));
//! let cmd = model.init();
//! assert!(matches!(cmd, MenuCmd::Fetch(_)));
//!
//! // The driver would run the fetch; deliver its completion by hand here.
//! let response = ChildrenResponse {
//!     children: vec![PageRef::new("5", "Ideas")],
//!     current_page: CurrentPage::new("0", "Library Root", ""),
//! };
//! model.update(MenuMsg::MenuLoaded { result: Ok(response) });
//! assert_eq!(model.menu().lines(), vec!["+ Ideas"]);
//! ```

pub mod breadcrumb;
pub mod fragment;
pub mod menu;
pub mod page;
pub mod provider;
pub mod render;

pub use breadcrumb::{BackElement, resolve_back};
pub use fragment::{Expansion, Fragment, MenuEntry, NodePath, PageEntry};
pub use menu::{FetchIntent, FetchRequest, MenuCmd, MenuConfig, MenuModel, MenuMsg};
pub use page::{ChildrenResponse, CurrentPage, DataEnvelope, PageRef, ROOT_PAGE_ID};
pub use provider::{ChildrenProvider, FetchError, FetchResult};
pub use render::NodeRenderer;
