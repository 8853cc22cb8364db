//! Menu controllers: the per-node toggle state machine and the whole-menu
//! replacement path.
//!
//! # Architecture
//!
//! - [`MenuModel`] owns the rendered tree and the back element
//! - [`MenuMsg`] carries user interactions and fetch completions
//! - [`MenuModel::update`] is the only state transition function; it
//!   returns a [`MenuCmd`] naming the side effects to execute
//!
//! Fetches run elsewhere; their completions re-enter [`MenuModel::update`]
//! as messages, so all tree mutation happens on the thread that owns the
//! model and the tree needs no locking.
//!
//! A fetch failure is terminal for that toggle: it is logged once and
//! swallowed, the affected region keeps its prior state, and the user
//! retries by toggling again.

use tracing::{debug, warn};

use crate::breadcrumb::{BackElement, resolve_back};
use crate::fragment::{Expansion, Fragment, NodePath};
use crate::page::ChildrenResponse;
use crate::provider::FetchResult;
use crate::render::NodeRenderer;

/// Immutable per-page-view configuration.
///
/// Established once before the menu activates; tree interactions never
/// mutate it. Navigating to a genuinely different page is a full reload
/// of the surrounding view, not a change to this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Id of the page currently being viewed.
    pub viewed_page_id: String,
    /// Whether the session is logged in; controls the create-child entry.
    pub logged_in: bool,
}

impl MenuConfig {
    /// Create a configuration.
    #[must_use]
    pub fn new(viewed_page_id: impl Into<String>, logged_in: bool) -> Self {
        Self {
            viewed_page_id: viewed_page_id.into(),
            logged_in,
        }
    }
}

/// What a fetch completion should do with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchIntent {
    /// Expand the entry at `path` with the fetched children.
    Expand {
        /// Affordance instance that requested the expansion.
        path: NodePath,
    },
    /// Replace the whole top-level menu and recompute the back element.
    ReplaceMenu,
    /// Discard the result. Issued by the back element's affordance, whose
    /// real purpose is the link.
    Peek,
}

/// One fetch for the driver to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Page whose children to look up.
    pub page_id: String,
    /// What to do with the result.
    pub intent: FetchIntent,
}

impl FetchRequest {
    /// Build the completion message delivering `result` for this request.
    #[must_use]
    pub fn complete(self, result: FetchResult<ChildrenResponse>) -> MenuMsg {
        match self.intent {
            FetchIntent::Expand { path } => MenuMsg::ChildrenLoaded { path, result },
            FetchIntent::ReplaceMenu => MenuMsg::MenuLoaded { result },
            FetchIntent::Peek => MenuMsg::PeekLoaded {
                page_id: self.page_id,
                result,
            },
        }
    }
}

/// Side effects returned from [`MenuModel::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuCmd {
    /// Nothing to do.
    #[default]
    None,
    /// Run one fetch against the children provider.
    Fetch(FetchRequest),
}

impl MenuCmd {
    /// The no-op command.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// A fetch command.
    #[must_use]
    pub fn fetch(page_id: impl Into<String>, intent: FetchIntent) -> Self {
        Self::Fetch(FetchRequest {
            page_id: page_id.into(),
            intent,
        })
    }
}

/// Messages driving the menu state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuMsg {
    /// The toggle affordance of the entry at `path` was activated.
    Toggle {
        /// Affordance instance.
        path: NodePath,
    },
    /// Completion of a per-node children fetch.
    ChildrenLoaded {
        /// Affordance instance the fetch was issued for.
        path: NodePath,
        /// Outcome of the lookup.
        result: FetchResult<ChildrenResponse>,
    },
    /// Replace the whole menu with the children of `page_id`.
    Refresh {
        /// New context page.
        page_id: String,
    },
    /// Completion of a whole-menu fetch.
    MenuLoaded {
        /// Outcome of the lookup.
        result: FetchResult<ChildrenResponse>,
    },
    /// The back element's collapse affordance was activated.
    Ascend {
        /// The context page's parent id.
        page_id: String,
    },
    /// Completion of a back-affordance fetch; always discarded.
    PeekLoaded {
        /// Page the lookup was issued for.
        page_id: String,
        /// Outcome of the lookup, dropped either way.
        result: FetchResult<ChildrenResponse>,
    },
}

/// Owner of the rendered menu: the toggle state machine plus the
/// whole-menu replacement controller.
#[derive(Debug, Clone)]
pub struct MenuModel {
    config: MenuConfig,
    renderer: NodeRenderer,
    menu: Fragment,
    back: Option<BackElement>,
    menu_pending: bool,
}

impl MenuModel {
    /// Create an empty menu for the given view.
    #[must_use]
    pub fn new(config: MenuConfig) -> Self {
        let renderer = NodeRenderer::new(config.logged_in);
        Self {
            config,
            renderer,
            menu: Fragment::empty(),
            back: None,
            menu_pending: false,
        }
    }

    /// Startup command: populate the menu for the viewed page.
    #[must_use]
    pub fn init(&mut self) -> MenuCmd {
        self.menu_pending = true;
        MenuCmd::fetch(self.config.viewed_page_id.clone(), FetchIntent::ReplaceMenu)
    }

    /// The view configuration.
    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The rendered top-level menu.
    #[must_use]
    pub fn menu(&self) -> &Fragment {
        &self.menu
    }

    /// The back element, once a whole-menu fetch has succeeded.
    #[must_use]
    pub fn back(&self) -> Option<&BackElement> {
        self.back.as_ref()
    }

    /// Apply one message and return the side effects to execute.
    pub fn update(&mut self, msg: MenuMsg) -> MenuCmd {
        match msg {
            MenuMsg::Toggle { path } => self.toggle(path),
            MenuMsg::ChildrenLoaded { path, result } => self.children_loaded(path, result),
            MenuMsg::Refresh { page_id } => self.refresh(page_id),
            MenuMsg::MenuLoaded { result } => self.menu_loaded(result),
            MenuMsg::Ascend { page_id } => MenuCmd::fetch(page_id, FetchIntent::Peek),
            MenuMsg::PeekLoaded { page_id, result } => {
                debug!(%page_id, ok = result.is_ok(), "discarding back-affordance lookup");
                MenuCmd::none()
            }
        }
    }

    fn toggle(&mut self, path: NodePath) -> MenuCmd {
        let Some(entry) = self.menu.page_mut(&path) else {
            debug!(?path, "toggle for an entry that no longer exists");
            return MenuCmd::none();
        };
        if entry.pending {
            debug!(id = %entry.id, "toggle ignored while a fetch is in flight");
            return MenuCmd::none();
        }
        match entry.state {
            // Collapse is synchronous and never fails: drop the subtree,
            // no network involved.
            Expansion::Expanded => {
                entry.subtree = Fragment::empty();
                entry.state = Expansion::Collapsed;
                MenuCmd::none()
            }
            Expansion::Collapsed => {
                entry.pending = true;
                let page_id = entry.id.clone();
                MenuCmd::fetch(page_id, FetchIntent::Expand { path })
            }
        }
    }

    fn children_loaded(
        &mut self,
        path: NodePath,
        result: FetchResult<ChildrenResponse>,
    ) -> MenuCmd {
        let renderer = self.renderer;
        let Some(entry) = self.menu.page_mut(&path) else {
            // An ancestor was replaced wholesale; the node's state died
            // with it and the completion has nothing left to apply to.
            debug!(?path, "dropping children for an entry that no longer exists");
            return MenuCmd::none();
        };
        entry.pending = false;
        match result {
            Ok(response) => {
                let subtree = renderer.render(&entry.id, &response.children);
                entry.subtree = subtree;
                entry.state = Expansion::Expanded;
            }
            Err(err) => {
                warn!(id = %entry.id, %err, "children fetch failed; node stays collapsed");
            }
        }
        MenuCmd::none()
    }

    fn refresh(&mut self, page_id: String) -> MenuCmd {
        if self.menu_pending {
            debug!(%page_id, "menu refresh ignored while one is in flight");
            return MenuCmd::none();
        }
        self.menu_pending = true;
        MenuCmd::fetch(page_id, FetchIntent::ReplaceMenu)
    }

    fn menu_loaded(&mut self, result: FetchResult<ChildrenResponse>) -> MenuCmd {
        self.menu_pending = false;
        match result {
            Ok(response) => {
                // Render both pieces first, then swap: a single wholesale
                // replacement, discarding all expanded sub-state.
                let menu = self.renderer.render_top_level(&response.children);
                let back = resolve_back(&response.current_page, &self.config.viewed_page_id);
                self.menu = menu;
                self.back = Some(back);
            }
            Err(err) => {
                warn!(%err, "menu fetch failed; keeping the previous menu");
            }
        }
        MenuCmd::none()
    }
}
