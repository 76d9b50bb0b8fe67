use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    Ok(())
}

fn same_file(source: &Path, destination: &Path) -> bool {
    if !destination.exists() {
        return false;
    }
    match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copies `source` over `destination`, keeping permissions and timestamps.
pub fn copy_file(source: &Path, destination: &Path) -> Result<()> {
    if !source.is_file() {
        return Err(Error::NotFound {
            path: source.to_path_buf(),
        });
    }
    if same_file(source, destination) {
        return Err(Error::SameFile {
            path: destination.to_path_buf(),
        });
    }
    ensure_parent_dir(destination)?;

    let mut reader = File::open(source).map_err(|e| Error::io(source, e))?;
    let metadata = reader.metadata().map_err(|e| Error::io(source, e))?;
    let mut writer = File::create(destination).map_err(|e| Error::io(destination, e))?;
    io::copy(&mut reader, &mut writer).map_err(|e| Error::io(destination, e))?;

    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    writer
        .set_permissions(metadata.permissions())
        .map_err(|e| Error::io(destination, e))?;
    writer.set_times(times).map_err(|e| Error::io(destination, e))?;

    println!("Copied {} → {}", source.display(), destination.display());
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

/// Writes `contents` to a sibling temp file, then renames it over `path`.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    let tmp = temp_sibling(path);
    if let Err(e) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::io(&tmp, e));
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        Error::io(path, e)
    })
}
