//! Options file watcher for hot-reload support.
//!
//! Watches the directory containing the options file (editors often replace
//! files instead of writing in place) and reports changes to that one file.

use crate::error::GridResult;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use tracing::{debug, warn};

pub use crate::options::default_options_path;

/// Change to the watched options file.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

pub struct OptionsWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    path: PathBuf,
}

impl OptionsWatcher {
    /// Start watching `path`. The file itself does not need to exist yet.
    pub fn new(path: PathBuf) -> GridResult<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), "Watching options file");

        Ok(Self {
            _watcher: watcher,
            rx,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending file system events. Returns the most recent one that
    /// concerns the options file, if any.
    pub fn poll(&mut self) -> Option<OptionsEvent> {
        let mut latest = None;
        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(event) => {
                    if let Some(change) = self.classify(&event) {
                        latest = Some(change);
                    }
                }
                Err(e) => {
                    warn!("Options watcher error: {}", e);
                    latest = Some(OptionsEvent::Error(e.to_string()));
                }
            }
        }
        latest
    }

    fn classify(&self, event: &Event) -> Option<OptionsEvent> {
        let file_name = self.path.file_name()?;
        if !event.paths.iter().any(|p| p.file_name() == Some(file_name)) {
            return None;
        }
        match event.kind {
            EventKind::Create(_) => Some(OptionsEvent::Created),
            EventKind::Modify(_) => Some(OptionsEvent::Modified),
            EventKind::Remove(_) => Some(OptionsEvent::Deleted),
            _ => None,
        }
    }
}
