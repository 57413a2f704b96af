//! Path resolution inside the served directory tree.
//!
//! Every request path is reduced to its non-empty segments and walked
//! segment by segment from the sandbox root, so nothing outside the root
//! is ever opened. `..` segments are rejected before touching the
//! filesystem.

use std::path::{Path, PathBuf};

use tokio::fs::File;

/// Why a path failed to resolve.
///
/// The wire response collapses all of these to the same 404; the variants
/// exist for diagnostics only.
#[derive(Debug)]
pub enum ResolveError {
    /// The path had no non-empty segments at all
    EmptyPath,
    /// A segment tried to climb out of the root
    Traversal { segment: String },
    /// An intermediate segment or the final file does not exist
    NotFound { path: PathBuf },
    /// An intermediate segment exists but is not a directory,
    /// or the final segment is not a regular file
    NotAFile { path: PathBuf },
    /// Any other filesystem error (permissions and the like)
    Io(std::io::Error),
}

/// A file located under the sandbox root, ready to stream.
#[derive(Debug)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub file: File,
    pub len: u64,
}

/// Splits a URL path on `/` and discards empty segments, so leading and
/// repeated slashes normalize away.
pub fn split_path(url_path: &str) -> Vec<&str> {
    url_path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Resolves `url_path` to a file under `root`.
///
/// Every segment but the last must exist as a directory along the descent;
/// the last must open as a regular file. The save-a-copy flow passes its
/// own `root` to re-resolve the same paths outside the HTTP flow.
pub async fn resolve(root: &Path, url_path: &str) -> Result<ResolvedFile, ResolveError> {
    let segments = split_path(url_path);

    let (file_name, dirs) = segments.split_last().ok_or(ResolveError::EmptyPath)?;

    let mut dir = root.to_path_buf();
    for segment in dirs {
        if *segment == ".." {
            return Err(ResolveError::Traversal {
                segment: segment.to_string(),
            });
        }

        dir.push(segment);
        let meta = tokio::fs::metadata(&dir).await.map_err(|e| io_error(e, &dir))?;
        if !meta.is_dir() {
            return Err(ResolveError::NotAFile { path: dir });
        }
    }

    if *file_name == ".." {
        return Err(ResolveError::Traversal {
            segment: file_name.to_string(),
        });
    }

    let path = dir.join(file_name);
    let file = File::open(&path).await.map_err(|e| io_error(e, &path))?;
    let meta = file.metadata().await.map_err(ResolveError::Io)?;
    if !meta.is_file() {
        return Err(ResolveError::NotAFile { path });
    }

    Ok(ResolvedFile {
        path,
        file,
        len: meta.len(),
    })
}

fn io_error(err: std::io::Error, path: &Path) -> ResolveError {
    match err.kind() {
        std::io::ErrorKind::NotFound => ResolveError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ResolveError::Io(err),
    }
}
