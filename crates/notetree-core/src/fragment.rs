//! Document-less element tree for the library menu.
//!
//! Rendered menu content is modeled as an owned tree of entries rather
//! than a live document. Controllers build a [`Fragment`] and swap it into
//! place in a single assignment, so every update is a whole-subtree
//! replacement with a crisp success/failure boundary, never an
//! incremental mutation of previously rendered content.
//!
//! Entries are addressed by [`NodePath`], a sequence of child indices from
//! the top level. A path names one specific affordance instance, so two
//! entries rendered for the same page id never share state.

/// Expansion state of one page entry.
///
/// The displayed affordance glyph is derived from this state; the state is
/// never reconstructed from a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    /// Children hidden; the subtree slot is empty.
    #[default]
    Collapsed,
    /// Children visible in the subtree slot.
    Expanded,
}

impl Expansion {
    /// Affordance glyph for this state: `+` offers expansion, `−` offers
    /// collapse.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Collapsed => "+",
            Self::Expanded => "\u{2212}",
        }
    }
}

/// One page row in the menu.
///
/// A row carries a navigable link to the page (the link target is `id`),
/// a toggle affordance, the display name, and the slot for a lazily
/// fetched subtree. The toggle and the link are distinct affordances;
/// activating the toggle never follows the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// Page id; also the link target of the row.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Expansion state, owned exclusively by this entry.
    pub state: Expansion,
    /// True while a children fetch for this entry is outstanding.
    pub pending: bool,
    /// Rendered children; empty whenever the entry is collapsed.
    pub subtree: Fragment,
}

impl PageEntry {
    /// Create a collapsed entry with an empty subtree slot.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: Expansion::Collapsed,
            pending: false,
            subtree: Fragment::empty(),
        }
    }

    /// The affordance glyph currently displayed for this entry.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        self.state.glyph()
    }
}

/// One entry in a rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// A child page row.
    Page(PageEntry),
    /// The trailing "create child page" affordance, parameterized with the
    /// parent page's own id. The consumer owns its markup and submission
    /// behavior; the menu only decides placement and the parent id.
    CreateChild {
        /// Id of the page the new child would be created under.
        parent_id: String,
    },
}

impl MenuEntry {
    /// The page entry, if this is a page row.
    #[must_use]
    pub fn as_page(&self) -> Option<&PageEntry> {
        match self {
            Self::Page(entry) => Some(entry),
            Self::CreateChild { .. } => None,
        }
    }
}

/// Address of one page entry: child indices from the top level, one per
/// nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Create a path from top-level child indices.
    #[must_use]
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    /// The index sequence.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

/// An owned, ordered sequence of menu entries: one rendered subtree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    entries: Vec<MenuEntry>,
}

impl Fragment {
    /// The empty fragment.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a fragment from entries, preserving their order.
    #[must_use]
    pub fn from_entries(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    /// The entries in render order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Number of entries at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this level has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The page entry at `path`, if the path still resolves.
    #[must_use]
    pub fn page(&self, path: &NodePath) -> Option<&PageEntry> {
        let (&last, ancestors) = path.indices().split_last()?;
        let mut level = self;
        for &idx in ancestors {
            level = &level.entries.get(idx)?.as_page()?.subtree;
        }
        level.entries.get(last)?.as_page()
    }

    /// Mutable access to the page entry at `path`.
    pub fn page_mut(&mut self, path: &NodePath) -> Option<&mut PageEntry> {
        let (&last, ancestors) = path.indices().split_last()?;
        let mut level = self;
        for &idx in ancestors {
            match level.entries.get_mut(idx)? {
                MenuEntry::Page(entry) => level = &mut entry.subtree,
                MenuEntry::CreateChild { .. } => return None,
            }
        }
        match level.entries.get_mut(last)? {
            MenuEntry::Page(entry) => Some(entry),
            MenuEntry::CreateChild { .. } => None,
        }
    }

    /// Flatten the visible tree into indented text lines.
    ///
    /// One line per entry, two spaces of indent per level, the affordance
    /// glyph before each page name. Intended for diagnostics and tests.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_lines(0, &mut out);
        out
    }

    fn collect_lines(&self, depth: usize, out: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        for entry in &self.entries {
            match entry {
                MenuEntry::Page(page) => {
                    out.push(format!("{indent}{} {}", page.glyph(), page.name));
                    page.subtree.collect_lines(depth + 1, out);
                }
                MenuEntry::CreateChild { parent_id } => {
                    out.push(format!("{indent}[new page under {parent_id}]"));
                }
            }
        }
    }
}
