//! Re-check the config whenever it changes.

use std::path::Path;

use anyhow::Result;

use crate::commands::check::check;
use crate::watcher::{ConfigWatcher, WatchEvent};

/// Run the watch command until interrupted.
pub async fn run(config: &Path) -> Result<()> {
    // A broken config is reported but does not stop the watch
    if let Err(err) = check(config) {
        tracing::error!("{:#}", err);
    }

    let (_watcher, mut rx) = ConfigWatcher::new(config)?;
    tracing::info!("Watching {} for changes (Ctrl+C to stop)", config.display());

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(WatchEvent::Changed(path)) => {
                    tracing::debug!("Change detected: {}", path.display());
                    if let Err(err) = check(config) {
                        tracing::error!("{:#}", err);
                    }
                }
                Some(WatchEvent::Removed(path)) => {
                    tracing::warn!("{} was removed", path.display());
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Stopping watch");
                break;
            }
        }
    }

    Ok(())
}
