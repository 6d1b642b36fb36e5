//! Running report steps on the thread that owns the UI
//!
//! Background work holds a [`UiHandle`] and posts tasks; the UI thread owns
//! the matching [`UiLoop`] and runs them one at a time, in post order, against
//! its [`Prompter`].

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::update::prompt::Prompter;

/// Work to run on the UI thread
pub type UiTask = Box<dyn FnOnce(&dyn Prompter) + Send + 'static>;

/// Creates a connected handle/loop pair
pub fn channel() -> (UiHandle, UiLoop) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiHandle { tx }, UiLoop { rx })
}

/// Cloneable sender side used off the UI thread
#[derive(Clone)]
pub struct UiHandle {
    tx: mpsc::UnboundedSender<UiTask>,
}

impl UiHandle {
    /// Queue `task` for the UI thread. Returns `false` if the loop is gone.
    pub fn post<F>(&self, task: F) -> bool
    where
        F: FnOnce(&dyn Prompter) + Send + 'static,
    {
        let posted = self.tx.send(Box::new(task)).is_ok();
        if !posted {
            warn!("UI loop closed, dropping task");
        }
        posted
    }
}

/// Receiver side owned by the UI thread
pub struct UiLoop {
    rx: mpsc::UnboundedReceiver<UiTask>,
}

impl UiLoop {
    /// Run tasks until every [`UiHandle`] has been dropped.
    ///
    /// Blocks the calling thread; must not be called from inside an async
    /// runtime worker.
    pub fn run(mut self, prompter: &dyn Prompter) -> usize {
        let mut count = 0;
        while let Some(task) = self.rx.blocking_recv() {
            task(prompter);
            count += 1;
        }
        debug!("UI loop finished after {} tasks", count);
        count
    }

    /// Run only the tasks already queued and return how many ran.
    pub fn run_pending(&mut self, prompter: &dyn Prompter) -> usize {
        let mut count = 0;
        while let Ok(task) = self.rx.try_recv() {
            task(prompter);
            count += 1;
        }
        count
    }
}
