//! Pure construction of menu fragments from server child lists.

use crate::fragment::{Fragment, MenuEntry, PageEntry};
use crate::page::PageRef;

/// Builds fragments from child lists.
///
/// Output order equals input order; no sorting or deduplication is
/// performed, so duplicate ids in the input produce duplicate entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRenderer {
    logged_in: bool,
}

impl NodeRenderer {
    /// Create a renderer for the given session state.
    #[must_use]
    pub const fn new(logged_in: bool) -> Self {
        Self { logged_in }
    }

    /// Render the subtree for one expanded node.
    ///
    /// One collapsed [`PageEntry`] per child, each with an empty subtree
    /// slot. When the session is logged in, a trailing create-child entry
    /// is appended, parameterized with the *parent* node's own id.
    #[must_use]
    pub fn render(&self, parent_id: &str, children: &[PageRef]) -> Fragment {
        let mut entries = Self::child_entries(children);
        if self.logged_in {
            entries.push(MenuEntry::CreateChild {
                parent_id: parent_id.to_owned(),
            });
        }
        Fragment::from_entries(entries)
    }

    /// Render the full top-level list after a whole-menu fetch.
    ///
    /// Identical to [`render`](Self::render) except that the create-child
    /// entry is never appended at the top level.
    #[must_use]
    pub fn render_top_level(&self, children: &[PageRef]) -> Fragment {
        Fragment::from_entries(Self::child_entries(children))
    }

    fn child_entries(children: &[PageRef]) -> Vec<MenuEntry> {
        children
            .iter()
            .map(|child| MenuEntry::Page(PageEntry::new(child.id.clone(), child.name.clone())))
            .collect()
    }
}
