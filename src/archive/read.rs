use super::entry::ArchiveEntry;
use crate::errors::{AppError, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Check that the selected file looks like a ZIP upload.
pub fn validate_upload(path: &Path) -> Result<()> {
    let is_zip = path
        .file_name()
        .map(|n| n.to_string_lossy().ends_with(".zip"))
        .unwrap_or(false);

    if !is_zip {
        return Err(AppError::InvalidUpload {
            path: path.to_path_buf(),
            reason: "expected a .zip file".to_string(),
        });
    }

    if !path.is_file() {
        return Err(AppError::InvalidUpload {
            path: path.to_path_buf(),
            reason: "file not found".to_string(),
        });
    }

    Ok(())
}

/// Validate and decode an archive on disk into its entries, in archive order
pub fn read_entries(path: &Path) -> Result<Vec<ArchiveEntry>> {
    validate_upload(path)?;
    let file = File::open(path)?;
    read_entries_from(BufReader::new(file), path)
}

/// Decode entries from any seekable reader; `path` is only used for error messages
pub fn read_entries_from<R: Read + Seek>(reader: R, path: &Path) -> Result<Vec<ArchiveEntry>> {
    let decode_err = |source: zip::result::ZipError| AppError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut archive = zip::ZipArchive::new(reader).map_err(decode_err)?;
    let mut entries = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        // Raw access reads the header only, so encrypted members still list
        let file = archive.by_index_raw(i).map_err(decode_err)?;
        let name = file.name().replace('\\', "/");
        let is_dir = file.is_dir() || name.ends_with('/');

        entries.push(if is_dir {
            ArchiveEntry::dir(name)
        } else {
            ArchiveEntry::file(name)
        });
    }

    tracing::debug!(
        archive = %path.display(),
        entries = entries.len(),
        "decoded archive"
    );

    Ok(entries)
}
