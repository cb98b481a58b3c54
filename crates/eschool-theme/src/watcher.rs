//! File watching for the config file.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

const DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the config watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Config file was created or modified
    Changed(PathBuf),

    /// Config file was deleted
    Removed(PathBuf),
}

/// Watches a single config file.
///
/// Editors often replace files instead of writing in place, so the parent
/// directory is watched and events are filtered by file name.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Start watching `config`.
    ///
    /// Returns the watcher and a channel to receive events. Dropping the
    /// watcher closes the channel.
    pub fn new(config: &Path) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(16);

        let dir = match config.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = config.file_name().map(|n| n.to_os_string()).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("not a file path: {}", config.display()),
            )
        })?;

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(std::io::Error::other)?;

        std::thread::spawn(move || {
            forward_debounced(&sync_rx, &file_name, |event| {
                async_tx.blocking_send(event).is_ok()
            });
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Forward events for `file_name` once they stop arriving for [`DEBOUNCE`].
///
/// Only the last event of a burst is emitted, so the file is always
/// re-read after the final write. Stops when `emit` returns `false` or the
/// source channel closes.
fn forward_debounced(
    rx: &mpsc::Receiver<notify::Event>,
    file_name: &OsStr,
    mut emit: impl FnMut(WatchEvent) -> bool,
) {
    let mut pending: Option<WatchEvent> = None;

    loop {
        let received = if pending.is_some() {
            rx.recv_timeout(DEBOUNCE)
        } else {
            rx.recv().map_err(|_| RecvTimeoutError::Disconnected)
        };

        match received {
            Ok(event) => {
                let relevant = event
                    .paths
                    .iter()
                    .find(|p| p.file_name() == Some(file_name))
                    .and_then(|path| classify_event(path, &event.kind));
                if relevant.is_some() {
                    pending = relevant;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(event) = pending.take() {
                    if !emit(event) {
                        return;
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(event) = pending.take() {
                    emit(event);
                }
                return;
            }
        }
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) => Some(WatchEvent::Changed(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Removed(path.to_path_buf())),
        _ => None,
    }
}
