use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};
use walkdir::WalkDir;

use crate::common::errors::{DomainError, ErrorContext, Result};
use crate::domain::entities::trashed_item::{EmptyTrashOutcome, TrashedItem};
use crate::domain::repositories::trash_repository::TrashRepository;
use crate::domain::services::size_service::item_size;
use crate::domain::services::trash_location::{TrashLocation, TRASHINFO_EXTENSION};
use crate::infrastructure::repositories::trash_info_parser::parse_trash_info;

/// Filesystem implementation of the trash repository on top of the XDG
/// `files/` + `info/` layout
pub struct TrashFsRepository {
    location: TrashLocation,
}

impl TrashFsRepository {
    pub fn new(location: TrashLocation) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &TrashLocation {
        &self.location
    }

    // Builds the entity for one entry of files/
    fn load_item(&self, entry: &fs::DirEntry) -> TrashedItem {
        let name = entry.file_name().to_string_lossy().into_owned();
        let payload_path = entry.path();
        let info_path = self.location.info_dir().join(format!("{}.{}", name, TRASHINFO_EXTENSION));

        // Follows symlinks, like a plain `is_dir` check on the path
        let is_dir = payload_path.is_dir();

        TrashedItem {
            info: parse_trash_info(&info_path),
            size: item_size(&payload_path),
            name,
            is_dir,
        }
    }
}

impl TrashRepository for TrashFsRepository {
    #[instrument(skip(self))]
    fn list_items(&self) -> Vec<TrashedItem> {
        let files_dir = self.location.files_dir();
        if !files_dir.exists() {
            debug!("Trash files directory does not exist: {}", files_dir.display());
            return Vec::new();
        }

        let entries = match fs::read_dir(&files_dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Cannot read trash directory {}: {}", files_dir.display(), e);
                return Vec::new();
            }
        };

        let mut items = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => items.push(self.load_item(&entry)),
                Err(e) => warn!("Skipping unreadable trash entry in {}: {}", files_dir.display(), e),
            }
        }

        debug!("Found {} entries in {}", items.len(), files_dir.display());
        items
    }

    #[instrument(skip(self))]
    fn restore_item(&self, trash_path: &str) -> Result<String> {
        let source = self.location.payload_path(trash_path)?;
        let info_file = self.location.info_path(trash_path)?;

        if !source.exists() {
            return Err(DomainError::not_found("TrashItem", "Item not found in trash").with_id(trash_path));
        }

        let original_path = parse_trash_info(&info_file).original_path;
        if original_path.is_empty() {
            return Err(DomainError::validation_error("TrashItem", "Cannot determine original path")
                .with_id(trash_path));
        }

        // Any entry counts, including a dangling symlink
        let dest = PathBuf::from(&original_path);
        if fs::symlink_metadata(&dest).is_ok() {
            return Err(DomainError::already_exists("TrashItem", original_path));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        move_path(&source, &dest)?;
        info!("Restored {} to {}", trash_path, dest.display());

        if info_file.exists() {
            if let Err(e) = fs::remove_file(&info_file) {
                warn!("Restored {} but could not remove {}: {}", trash_path, info_file.display(), e);
            }
        }

        Ok(original_path)
    }

    #[instrument(skip(self))]
    fn delete_item(&self, trash_path: &str) -> Result<()> {
        let target = self.location.payload_path(trash_path)?;
        let info_file = self.location.info_path(trash_path)?;

        if !target.exists() {
            return Err(DomainError::not_found("TrashItem", "Item not found in trash").with_id(trash_path));
        }

        remove_entry(&target)?;
        let _ = fs::remove_file(&info_file);

        info!("Permanently deleted {}", trash_path);
        Ok(())
    }

    #[instrument(skip(self))]
    fn empty_trash(&self) -> EmptyTrashOutcome {
        let mut outcome = EmptyTrashOutcome::default();

        let files_dir = self.location.files_dir();
        if files_dir.exists() {
            match read_entries(&files_dir) {
                Ok(entries) => remove_entries(&entries, &mut outcome),
                Err(e) => error!("Cannot read trash directory {}: {}", files_dir.display(), e),
            }
        }

        let info_dir = self.location.info_dir();
        if info_dir.exists() {
            for path in read_entries(&info_dir).unwrap_or_default() {
                let _ = fs::remove_file(&path);
            }
        }

        info!("Emptied trash: {} deleted, {} errors", outcome.deleted_count, outcome.errors.len());
        outcome
    }
}

// Snapshot of a directory listing so removals don't disturb iteration
fn read_entries(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        match entry {
            Ok(entry) => paths.push(entry.path()),
            Err(e) => warn!("Skipping unreadable entry in {}: {}", dir.display(), e),
        }
    }
    Ok(paths)
}

// Removes each entry independently; a failure is recorded and the rest go on
fn remove_entries(paths: &[PathBuf], outcome: &mut EmptyTrashOutcome) {
    for path in paths {
        let name = file_name_of(path);
        match remove_entry(path) {
            Ok(()) => outcome.deleted_count += 1,
            Err(e) => {
                warn!("Could not delete {} from trash: {}", name, e);
                outcome.errors.push(format!("{}: {}", name, e));
            }
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

// Removes a file, a symlink (never followed) or a whole directory tree
fn remove_entry(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Renames `source` to `dest`, copying and deleting when they live on
/// different filesystems
fn move_path(source: &Path, dest: &Path) -> Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!("Cross-device move, copying {} to {}", source.display(), dest.display());
            copy_recursively(source, dest)?;
            remove_entry(source)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn copy_recursively(source: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .with_context(|| format!("Unexpected path while copying {}", source.display()))?;
        let target = if relative.as_os_str().is_empty() {
            dest.to_path_buf()
        } else {
            dest.join(relative)
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    let pointee = fs::read_link(link)?;
    std::os::unix::fs::symlink(pointee, target)
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    fs::copy(link, target).map(|_| ())
}
