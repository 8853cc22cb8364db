//! Wire-level data model for the children-lookup endpoint.
//!
//! The notes service answers `GET /api/notes/{id}/children` with a
//! `{ "Data": ... }` envelope around [`ChildrenResponse`]. Field names on
//! the wire are PascalCase. `Children` may be omitted entirely for a leaf
//! page and decodes to an empty list; `CurrentPage` is required, and its
//! absence fails the decode like any other malformed body.

use serde::Deserialize;

/// Identifier of the root page.
///
/// The root has no parent: its back element is never navigable and its
/// `PrevID` carries no meaning.
pub const ROOT_PAGE_ID: &str = "0";

/// One child page as described by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageRef {
    /// Page identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name.
    #[serde(rename = "Name")]
    pub name: String,
}

impl PageRef {
    /// Create a page reference.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The page whose children were fetched, with its parent pointer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentPage {
    /// Page identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name.
    #[serde(rename = "Name")]
    pub name: String,
    /// Parent page id; empty at the root.
    #[serde(rename = "PrevID", default)]
    pub prev_id: String,
}

impl CurrentPage {
    /// Create a current-page record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        prev_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prev_id: prev_id.into(),
        }
    }

    /// Whether this is the root page.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.id == ROOT_PAGE_ID
    }
}

/// Body of a successful children lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChildrenResponse {
    /// Child pages in server order; omitted on the wire for leaf pages.
    #[serde(rename = "Children", default)]
    pub children: Vec<PageRef>,
    /// Context page of the lookup.
    #[serde(rename = "CurrentPage")]
    pub current_page: CurrentPage,
}

/// Top-level reply envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataEnvelope {
    /// The payload.
    #[serde(rename = "Data")]
    pub data: ChildrenResponse,
}
