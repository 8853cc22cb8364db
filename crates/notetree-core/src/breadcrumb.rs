//! Resolution of the back element shown above the menu.
//!
//! The back element reflects the context page of the most recent
//! whole-menu fetch. Its shape depends on whether that page is the root
//! and whether it is the page the user is already viewing.

use crate::fragment::Expansion;
use crate::page::{CurrentPage, ROOT_PAGE_ID};

/// Shape of the back element shown above the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackElement {
    /// Non-interactive spacer: the root page is the one being viewed.
    Spacer {
        /// Display label.
        label: String,
    },
    /// Plain, unclickable marker: the root is an ancestor of the viewed
    /// page. The root has no parent to navigate to and nothing to lazily
    /// load, so the marker carries neither link nor affordance.
    RootMarker {
        /// Display label.
        label: String,
    },
    /// A non-root context page, with a collapse-style affordance that
    /// refetches the menu one level up.
    Context {
        /// Display label.
        label: String,
        /// Link target: the context page's own view. Absent when the
        /// context page is the one already being viewed, since navigating
        /// to it would be meaningless.
        link: Option<String>,
        /// Fetch target of the `−` affordance: the context page's parent.
        up_id: String,
    },
}

impl BackElement {
    /// Display label of the element.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Spacer { label } | Self::RootMarker { label } | Self::Context { label, .. } => {
                label
            }
        }
    }

    /// Whether the element reacts to activation at all.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Context { .. })
    }

    /// Glyph of the collapse-style affordance, where the element carries
    /// one. Root elements have nothing to lazily load, so no glyph.
    #[must_use]
    pub fn affordance_glyph(&self) -> Option<&'static str> {
        match self {
            Self::Context { .. } => Some(Expansion::Expanded.glyph()),
            Self::Spacer { .. } | Self::RootMarker { .. } => None,
        }
    }
}

/// Compute the back element for a context page.
///
/// `viewed_page_id` is the page the surrounding view is displaying; it
/// distinguishes "we are at this page" from "this page is merely an
/// ancestor".
#[must_use]
pub fn resolve_back(current: &CurrentPage, viewed_page_id: &str) -> BackElement {
    if current.id == ROOT_PAGE_ID {
        if viewed_page_id == current.id {
            BackElement::Spacer {
                label: current.name.clone(),
            }
        } else {
            BackElement::RootMarker {
                label: current.name.clone(),
            }
        }
    } else {
        let link = (viewed_page_id != current.id).then(|| current.id.clone());
        BackElement::Context {
            label: current.name.clone(),
            link,
            up_id: current.prev_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_viewed_is_a_spacer() {
        let back = resolve_back(&CurrentPage::new("0", "Root", ""), "0");
        assert_eq!(
            back,
            BackElement::Spacer {
                label: "Root".into()
            }
        );
        assert!(!back.is_interactive());
        assert!(back.affordance_glyph().is_none());
        assert_eq!(back.label(), "Root");
    }

    #[test]
    fn root_as_ancestor_is_a_plain_marker() {
        let back = resolve_back(&CurrentPage::new("0", "Library Root", ""), "9");
        assert_eq!(
            back,
            BackElement::RootMarker {
                label: "Library Root".into()
            }
        );
        assert!(!back.is_interactive());
    }

    #[test]
    fn non_root_links_to_its_own_view_and_ascends_to_its_parent() {
        let back = resolve_back(&CurrentPage::new("5", "Parent", "2"), "9");
        assert_eq!(
            back,
            BackElement::Context {
                label: "Parent".into(),
                link: Some("5".into()),
                up_id: "2".into(),
            }
        );
        assert!(back.is_interactive());
        assert_eq!(back.affordance_glyph(), Some("\u{2212}"));
    }

    #[test]
    fn viewed_context_page_loses_its_link_but_keeps_the_affordance() {
        let back = resolve_back(&CurrentPage::new("5", "Parent", "2"), "5");
        assert_eq!(
            back,
            BackElement::Context {
                label: "Parent".into(),
                link: None,
                up_id: "2".into(),
            }
        );
        assert!(back.is_interactive());
        assert_eq!(back.affordance_glyph(), Some("\u{2212}"));
    }
}
