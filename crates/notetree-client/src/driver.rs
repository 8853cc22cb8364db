//! Executes menu commands and pumps fetch completions.
//!
//! [`MenuModel::update`] names its side effects as [`MenuCmd`] values;
//! the driver runs each requested fetch on a named background thread and
//! delivers the completion back into `update` over an mpsc channel. The
//! model is only ever touched from the thread that owns the driver, so
//! issuing a fetch never blocks input handling and the tree needs no
//! locking. No retries, no cancellation, no imposed timeout.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use notetree_core::menu::{FetchRequest, MenuCmd, MenuConfig, MenuModel, MenuMsg};
use notetree_core::provider::{ChildrenProvider, FetchError};
use tracing::warn;

/// Owns a [`MenuModel`] and a children provider, and shuttles fetch
/// completions between them.
pub struct MenuDriver<P> {
    model: MenuModel,
    provider: Arc<P>,
    tx: mpsc::Sender<MenuMsg>,
    rx: mpsc::Receiver<MenuMsg>,
}

impl<P> MenuDriver<P>
where
    P: ChildrenProvider + Send + Sync + 'static,
{
    /// Create a driver for a fresh menu.
    pub fn new(config: MenuConfig, provider: P) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            model: MenuModel::new(config),
            provider: Arc::new(provider),
            tx,
            rx,
        }
    }

    /// Issue the initial whole-menu fetch.
    pub fn start(&mut self) {
        let cmd = self.model.init();
        self.run_cmd(cmd);
    }

    /// The menu model, for rendering and assertions.
    #[must_use]
    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    /// Apply one message and execute whatever command it produces.
    pub fn dispatch(&mut self, msg: MenuMsg) {
        let cmd = self.model.update(msg);
        self.run_cmd(cmd);
    }

    /// Apply all queued fetch completions without blocking.
    pub fn drain(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.dispatch(msg);
        }
    }

    /// Wait up to `timeout` for one completion, then drain the rest.
    ///
    /// Returns false if nothing arrived in time.
    pub fn drain_timeout(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                self.drain();
                true
            }
            Err(_) => false,
        }
    }

    fn run_cmd(&mut self, cmd: MenuCmd) {
        match cmd {
            MenuCmd::None => {}
            MenuCmd::Fetch(request) => self.spawn_fetch(request),
        }
    }

    fn spawn_fetch(&self, request: FetchRequest) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        let fallback = request.clone();
        let spawned = thread::Builder::new()
            .name(format!("notetree-fetch-{}", request.page_id))
            .spawn(move || {
                let result = provider.fetch_children(&request.page_id);
                // A dropped receiver means the driver is gone; the
                // completion has nowhere to go.
                let _ = tx.send(request.complete(result));
            });
        if let Err(err) = spawned {
            // Deliver the failure as a completion so the pending flags
            // clear and the node stays retryable.
            warn!(%err, page_id = %fallback.page_id, "failed to spawn fetch thread");
            let _ = self
                .tx
                .send(fallback.complete(Err(FetchError::Transport(format!(
                    "spawn failed: {err}"
                )))));
        }
    }
}
