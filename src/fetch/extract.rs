//! Gzip-tar extraction with path containment

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Component, Path};

use flate2::read::GzDecoder;
use tar::Archive;

use crate::error::{AgrError, Result, extraction_failed, file_read_failed, file_write_failed};

/// Unpack every member of the gzip-tar at `archive_path` into `target`.
///
/// Members with absolute paths or `..` components abort the extraction with
/// [`AgrError::UnsafeArchivePath`]. Returns the number of members unpacked.
pub fn extract_tarball(archive_path: &Path, target: &Path) -> Result<usize> {
    let file = File::open(archive_path).map_err(|e| file_read_failed(archive_path, e))?;
    fs::create_dir_all(target).map_err(|e| file_write_failed(target, e))?;

    let mut archive = Archive::new(GzDecoder::new(BufReader::new(file)));
    let entries = archive
        .entries()
        .map_err(|e| extraction_failed(e.to_string()))?;

    let mut unpacked = 0;
    for entry in entries {
        let mut entry = entry.map_err(|e| extraction_failed(e.to_string()))?;

        // GitHub prepends a pax header carrying the commit id
        if entry.header().entry_type().is_pax_global_extensions() {
            continue;
        }

        let path = entry
            .path()
            .map_err(|e| extraction_failed(e.to_string()))?
            .into_owned();
        if !is_contained(&path) {
            return Err(AgrError::UnsafeArchivePath {
                path: path.display().to_string(),
            });
        }

        let inside = entry
            .unpack_in(target)
            .map_err(|e| extraction_failed(format!("{}: {e}", path.display())))?;
        if !inside {
            return Err(AgrError::UnsafeArchivePath {
                path: path.display().to_string(),
            });
        }
        unpacked += 1;
    }

    if unpacked == 0 {
        return Err(extraction_failed("archive contains no entries"));
    }

    tracing::debug!(entries = unpacked, target = %target.display(), "archive extracted");
    Ok(unpacked)
}

/// Relative path made only of normal components
fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, tarball_bytes, tarball_with_raw_path};

    fn write_archive(dir: &Path, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.join("repo.tar.gz");
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_extracts_nested_tree() {
        let temp = create_temp_dir();
        let archive = write_archive(
            temp.path(),
            &tarball_bytes(&[
                ("agent-skills-main/README.md", "readme"),
                ("agent-skills-main/.claude/skills/hello/SKILL.md", "# Hello"),
            ]),
        );
        let target = temp.path().join("extracted");

        let count = extract_tarball(&archive, &target).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            std::fs::read(target.join("agent-skills-main/.claude/skills/hello/SKILL.md")).unwrap(),
            b"# Hello"
        );
    }

    #[test]
    fn test_not_gzip_is_extraction_error() {
        let temp = create_temp_dir();
        let archive = write_archive(temp.path(), b"<html>not a tarball</html>");

        let err = extract_tarball(&archive, &temp.path().join("extracted")).unwrap_err();
        assert!(matches!(err, AgrError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_parent_dir_member_is_rejected() {
        let temp = create_temp_dir();
        let archive = write_archive(
            temp.path(),
            &tarball_with_raw_path("repo-main/../../escaped.txt", b"pwned"),
        );
        let target = temp.path().join("nested/extracted");

        let err = extract_tarball(&archive, &target).unwrap_err();

        assert!(matches!(err, AgrError::UnsafeArchivePath { .. }));
        assert!(!temp.path().join("escaped.txt").exists());
    }

    #[test]
    fn test_absolute_member_is_rejected() {
        let temp = create_temp_dir();
        let archive = write_archive(temp.path(), &tarball_with_raw_path("/tmp/agr-escaped.txt", b"x"));

        let err = extract_tarball(&archive, &temp.path().join("extracted")).unwrap_err();
        assert!(matches!(err, AgrError::UnsafeArchivePath { .. }));
    }

    #[test]
    fn test_missing_archive_is_read_error() {
        let temp = create_temp_dir();
        let err =
            extract_tarball(&temp.path().join("missing.tar.gz"), &temp.path().join("x")).unwrap_err();
        assert!(matches!(err, AgrError::FileReadFailed { .. }));
    }

    #[test]
    fn test_is_contained() {
        assert!(is_contained(Path::new("repo-main/.claude/skills/a/SKILL.md")));
        assert!(is_contained(Path::new("./repo-main/file")));
        assert!(!is_contained(Path::new("../file")));
        assert!(!is_contained(Path::new("repo-main/../../file")));
        assert!(!is_contained(Path::new("/etc/passwd")));
    }
}
