//! Theme file watching.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Watch `theme_path` and raise `needs_reload` whenever it changes.
///
/// The parent directory is watched rather than the file itself since
/// editors often save by replacing the file.
pub fn setup_theme_watcher(
    theme_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    let canonical_theme = theme_path
        .canonicalize()
        .unwrap_or_else(|_| theme_path.clone());
    let theme_filename = theme_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(error = %e, "theme watcher error");
                    return;
                }
            };

            let matches = event.paths.iter().any(|p| {
                if p.canonicalize().is_ok_and(|canonical| canonical == canonical_theme) {
                    return true;
                }
                match (&theme_filename, p.file_name()) {
                    (Some(expected), Some(name)) => name == expected,
                    _ => false,
                }
            });

            if matches {
                tracing::debug!(kind = ?event.kind, "theme file changed");
                if let Ok(mut flag) = needs_reload.lock() {
                    *flag = true;
                }
            }
        },
        config,
    );

    let mut watcher = match watcher_result {
        Ok(watcher) => watcher,
        Err(e) => {
            tracing::warn!(error = %e, "theme hot reload unavailable");
            return None;
        }
    };

    let parent = match theme_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if let Err(e) = watcher.watch(&parent, RecursiveMode::NonRecursive) {
        tracing::warn!(error = %e, dir = %parent.display(), "failed to watch theme directory");
        return None;
    }

    tracing::info!(path = %theme_path.display(), "watching theme file");
    Some(watcher)
}
