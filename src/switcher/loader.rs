//! Project file list loading
//!
//! A [`Loader`] hands out a [`LoadTicket`] per fetch and remembers only the
//! newest one. Completions carrying an older ticket are stale and must be
//! dropped by whoever applies them. The [`LoadWorker`] runs a [`FileLister`]
//! off the event loop and posts completions back on a channel; nothing is
//! ever interrupted, a superseded fetch simply runs to the end and is
//! ignored on arrival.

use super::error::{FetchError, FetchResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Files listed under a project root
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListResult {
    /// Project-relative paths, in the order the source produced them
    pub files: Vec<String>,
    /// Whether the source capped the list before returning it
    pub truncated: bool,
}

impl FileListResult {
    /// Create a result from a path list
    #[must_use]
    pub const fn new(files: Vec<String>, truncated: bool) -> Self {
        Self { files, truncated }
    }
}

/// Source of project file lists
pub trait FileLister: Send + Sync {
    /// List the files under `root`
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the root cannot be listed.
    fn list_project_files(&self, root: &str) -> FetchResult<FileListResult>;
}

/// Identity of one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    root: String,
}

impl LoadTicket {
    /// Generation this ticket was issued for
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Root being listed
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }
}

/// Generation bookkeeping for file list fetches
#[derive(Debug, Default)]
pub struct Loader {
    generation: u64,
    pending: Option<u64>,
}

impl Loader {
    /// Create a loader with nothing in flight
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    /// Start a fetch for `root`, superseding any fetch in flight
    pub fn begin(&mut self, root: impl Into<String>) -> LoadTicket {
        self.generation = self.generation.saturating_add(1);
        if let Some(previous) = self.pending.replace(self.generation) {
            log::debug!("load generation {previous} superseded by {}", self.generation);
        }
        LoadTicket {
            generation: self.generation,
            root: root.into(),
        }
    }

    /// Invalidate whatever is in flight
    pub fn cancel(&mut self) {
        if let Some(previous) = self.pending.take() {
            log::debug!("load generation {previous} cancelled");
        }
    }

    /// Whether `ticket` belongs to the fetch still in flight
    #[must_use]
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.pending == Some(ticket.generation)
    }

    /// Whether a fetch is in flight
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Accept the completion of `ticket`
    ///
    /// Returns `false` for stale tickets, which must then be discarded.
    pub fn settle(&mut self, ticket: &LoadTicket) -> bool {
        if self.is_current(ticket) {
            self.pending = None;
            true
        } else {
            log::debug!(
                "dropping stale load generation {} for {}",
                ticket.generation,
                ticket.root
            );
            false
        }
    }
}

/// A finished fetch on its way back to the event loop
#[derive(Debug)]
pub struct LoadCompletion {
    /// Ticket the fetch was started with
    pub ticket: LoadTicket,
    /// What the lister produced
    pub outcome: FetchResult<FileListResult>,
}

/// Runs file listings on background threads
///
/// Completions are collected with [`LoadWorker::try_recv`] from the single
/// thread that owns the switcher state.
pub struct LoadWorker {
    lister: Arc<dyn FileLister>,
    tx: Sender<LoadCompletion>,
    rx: Receiver<LoadCompletion>,
}

impl LoadWorker {
    /// Create a worker around a lister
    #[must_use]
    pub fn new(lister: Arc<dyn FileLister>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { lister, tx, rx }
    }

    /// Start listing the root named by `ticket`
    ///
    /// A lister that panics never reports back; the load then stays in
    /// flight until the root changes.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Io`] if the thread cannot be spawned.
    pub fn spawn(&self, ticket: LoadTicket) -> FetchResult<()> {
        let lister = Arc::clone(&self.lister);
        let tx = self.tx.clone();
        let name = format!("quickswitch-load-{}", ticket.generation);

        thread::Builder::new().name(name).spawn(move || {
            log::debug!("listing files under {}", ticket.root);
            let outcome = lister.list_project_files(&ticket.root);
            // The receiver is gone once the switcher shuts down
            let _ = tx.send(LoadCompletion { ticket, outcome });
        })?;

        Ok(())
    }

    /// Take the next completion without blocking
    #[must_use]
    pub fn try_recv(&self) -> Option<LoadCompletion> {
        match self.rx.try_recv() {
            Ok(completion) => Some(completion),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the next completion arrives
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Disconnected`] if no completion can arrive.
    pub fn recv(&self) -> FetchResult<LoadCompletion> {
        self.rx.recv().map_err(|_| FetchError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingLister, RecordingLister, StaticLister};

    #[test]
    fn test_begin_issues_increasing_generations() {
        let mut loader = Loader::new();
        let first = loader.begin("/a");
        let second = loader.begin("/b");
        assert!(second.generation() > first.generation());
        assert_eq!(second.root(), "/b");
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut loader = Loader::new();
        let first = loader.begin("/a");
        let second = loader.begin("/b");

        assert!(!loader.is_current(&first));
        assert!(!loader.settle(&first));
        assert!(loader.is_pending());

        assert!(loader.settle(&second));
        assert!(!loader.is_pending());
    }

    #[test]
    fn test_ticket_settles_once() {
        let mut loader = Loader::new();
        let ticket = loader.begin("/a");
        assert!(loader.settle(&ticket));
        assert!(!loader.settle(&ticket));
    }

    #[test]
    fn test_cancel_invalidates_pending() {
        let mut loader = Loader::new();
        let ticket = loader.begin("/a");
        loader.cancel();
        assert!(!loader.is_pending());
        assert!(!loader.settle(&ticket));
    }

    #[test]
    fn test_worker_posts_completion() {
        let worker = LoadWorker::new(Arc::new(StaticLister::new(&["a.rs", "b.rs"], false)));
        let mut loader = Loader::new();
        let ticket = loader.begin("/root");

        worker.spawn(ticket.clone()).unwrap();
        let completion = worker.recv().unwrap();

        assert_eq!(completion.ticket, ticket);
        let result = completion.outcome.unwrap();
        assert_eq!(result.files, vec!["a.rs", "b.rs"]);
        assert!(!result.truncated);
    }

    #[test]
    fn test_worker_posts_failure() {
        let worker = LoadWorker::new(Arc::new(FailingLister::new("disk error")));
        let mut loader = Loader::new();

        worker.spawn(loader.begin("/root")).unwrap();
        let completion = worker.recv().unwrap();

        let err = completion.outcome.unwrap_err();
        assert_eq!(err.user_message(), "disk error");
    }

    #[test]
    fn test_worker_only_latest_completion_is_current() {
        let lister = Arc::new(RecordingLister::default());
        let worker = LoadWorker::new(Arc::clone(&lister) as Arc<dyn FileLister>);
        let mut loader = Loader::new();

        let first = loader.begin("/one");
        let second = loader.begin("/two");
        worker.spawn(first).unwrap();
        worker.spawn(second).unwrap();

        let mut settled = Vec::new();
        for _ in 0..2 {
            let completion = worker.recv().unwrap();
            if loader.settle(&completion.ticket) {
                settled.push(completion.outcome.unwrap().files);
            }
        }

        assert_eq!(settled, vec![vec!["/two.txt".to_string()]]);
        let mut roots = lister.roots();
        roots.sort();
        assert_eq!(roots, ["/one", "/two"]);
    }
}
