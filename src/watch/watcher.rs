//! File system watcher for the catalog file

use super::state::WatchState;
use notify::event::ModifyKind;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

/// Setup a watcher on the directory holding the catalog
///
/// The directory is watched rather than the file itself so that editors
/// that save by writing a new file and renaming it over the old one are
/// still picked up.
pub fn setup_watcher(
    state: &mut WatchState,
    tx: mpsc::Sender<String>,
) -> io::Result<RecommendedWatcher> {
    let catalog_dir = match state.catalog_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let catalog_name = state
        .catalog_path
        .file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Not a file path: {}", state.catalog_path.display()),
            )
        })?;

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res
                && should_process_event(&event, &catalog_name)
            {
                let _ = tx.send(catalog_name.to_string_lossy().to_string());
            }
        },
        Config::default(),
    )
    .map_err(io::Error::other)?;

    watcher
        .watch(&catalog_dir, RecursiveMode::NonRecursive)
        .map_err(io::Error::other)?;
    state.add_log(format!("Watching {}", state.catalog_path.display()));

    Ok(watcher)
}

/// Determine if a file system event should trigger a clash refresh
fn should_process_event(event: &notify::Event, catalog_name: &OsString) -> bool {
    let touches_catalog = event
        .paths
        .iter()
        .any(|path| path.file_name() == Some(catalog_name.as_os_str()));

    if !touches_catalog {
        return false;
    }

    // Filter for only actual content changes, not metadata
    matches!(
        event.kind,
        EventKind::Modify(ModifyKind::Data(_))
            | EventKind::Modify(ModifyKind::Name(_))
            | EventKind::Modify(ModifyKind::Any)
            | EventKind::Create(_)
            | EventKind::Remove(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, MetadataKind};

    fn event(kind: EventKind, path: &str) -> notify::Event {
        notify::Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn content_changes_to_catalog_are_processed() {
        let name = OsString::from("events.json");
        assert!(should_process_event(
            &event(
                EventKind::Modify(ModifyKind::Data(DataChange::Content)),
                "/data/events.json"
            ),
            &name
        ));
        assert!(should_process_event(
            &event(EventKind::Create(CreateKind::File), "/data/events.json"),
            &name
        ));
    }

    #[test]
    fn other_files_and_metadata_are_ignored() {
        let name = OsString::from("events.json");
        assert!(!should_process_event(
            &event(
                EventKind::Modify(ModifyKind::Data(DataChange::Content)),
                "/data/events.json.swp"
            ),
            &name
        ));
        assert!(!should_process_event(
            &event(
                EventKind::Modify(ModifyKind::Metadata(MetadataKind::AccessTime)),
                "/data/events.json"
            ),
            &name
        ));
    }
}
