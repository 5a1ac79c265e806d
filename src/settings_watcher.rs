//! Settings file watcher for hot reload.
//!
//! Watches the settings file's directory (editors often replace the file
//! rather than write in place) and reports changes to the file itself.
//! Polled from the UI thread; the notify callback thread only sends.

use crate::error::SettingsResult;
pub use crate::settings::default_settings_path;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

/// A change to the watched settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> SettingsResult<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            // The receiver is gone once the watcher is dropped
            let _ = tx.send(res);
        })?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!(path = %path.display(), "Watching settings file");

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending events. Returns the latest change to the settings file,
    /// or the first watch error.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if !event.paths.iter().any(|p| p.file_name() == self.path.file_name()) {
                        continue;
                    }
                    match event.kind {
                        EventKind::Create(_) => latest = Some(SettingsEvent::Created),
                        EventKind::Modify(_) => latest = Some(SettingsEvent::Modified),
                        EventKind::Remove(_) => latest = Some(SettingsEvent::Deleted),
                        _ => {}
                    }
                }
                Ok(Err(e)) => return Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return latest,
            }
        }
    }
}
