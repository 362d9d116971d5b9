//! Test fixtures shared by unit tests.
//!
//! Builds gzip-tar archives shaped like GitHub branch tarballs, and resource
//! directories on disk.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, tarball_bytes};
//!
//! let bytes = tarball_bytes(&[("agent-skills-main/.claude/skills/hello/SKILL.md", "# Hello")]);
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Gzip-tar archive holding `files` (path, contents); parent directories are implied.
#[must_use]
pub fn tarball_bytes(files: &[(&str, &str)]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (path, contents) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, path, contents.as_bytes())
            .expect("Failed to append tar entry");
    }

    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream")
}

/// Gzip-tar archive whose single entry has `raw_path` written verbatim into the header,
/// bypassing the builder's own path validation.
#[must_use]
pub fn tarball_with_raw_path(raw_path: &str, contents: &[u8]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut header = tar::Header::new_old();
    {
        let name = &mut header.as_old_mut().name;
        let bytes = raw_path.as_bytes();
        name[..bytes.len()].copy_from_slice(bytes);
    }
    header.set_size(contents.len() as u64);
    header.set_mode(0o644);
    header.set_entry_type(tar::EntryType::Regular);
    header.set_cksum();
    builder
        .append(&header, contents)
        .expect("Failed to append tar entry");

    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream")
}

/// Gzip-tar archive whose single entry is a symlink at `link_path` pointing to `target`.
#[must_use]
pub fn tarball_with_symlink(link_path: &str, target: &Path) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Symlink);
    header.set_size(0);
    header.set_mode(0o777);
    builder
        .append_link(&mut header, link_path, target)
        .expect("Failed to append symlink entry");

    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream")
}

/// Write `files` (relative path, contents) under `root`, creating parents.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, contents) in files {
        let file_path = root.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, contents).expect("Failed to write file");
    }
}

/// Sorted (relative path, contents) of every file under `root`.
#[must_use]
pub fn read_tree(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut files: Vec<(PathBuf, Vec<u8>)> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .expect("entry under root")
                .to_path_buf();
            let contents = std::fs::read(entry.path()).expect("Failed to read file");
            (relative, contents)
        })
        .collect();
    files.sort();
    files
}
