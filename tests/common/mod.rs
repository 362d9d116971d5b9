//! Common test utilities for agr integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// A scratch project directory, plus isolated HOME and TMPDIR for the binary under test
pub struct TestWorkspace {
    /// Temporary directory holding everything below
    pub temp: TempDir,
    /// Current directory of the binary; project installs land in `<path>/.claude/`
    pub path: PathBuf,
    /// HOME of the binary; global installs land in `<home>/.claude/`
    pub home: PathBuf,
    /// TMPDIR of the binary; must be empty again after every run
    pub tmp: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let home = temp.path().join("home");
        let tmp = temp.path().join("tmp");
        for dir in [&path, &home, &tmp] {
            std::fs::create_dir_all(dir).expect("Failed to create workspace directory");
        }
        Self {
            temp,
            path,
            home,
            tmp,
        }
    }

    /// Write a file in the project directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project directory
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project directory
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Names left behind in the isolated TMPDIR
    pub fn leftover_temp_entries(&self) -> Vec<String> {
        std::fs::read_dir(&self.tmp)
            .expect("Failed to read temp directory")
            .map(|entry| {
                entry
                    .expect("Failed to read temp entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    /// `bin` configured to run inside this workspace against `github_url`
    pub fn command(&self, bin: &str, github_url: &str) -> Command {
        let mut cmd = bin_cmd(bin);
        cmd.current_dir(&self.path)
            .env("HOME", &self.home)
            .env("TMPDIR", &self.tmp)
            .env("AGR_GITHUB_URL", github_url)
            .env_remove("RUST_LOG");
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn bin_cmd(bin: &str) -> Command {
    Command::cargo_bin(bin).expect("Failed to find binary")
}

/// Gzip-tar archive holding `files` (path, contents), shaped like a GitHub branch tarball
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

/// Serve `body` as the `main` branch tarball of `owner/repo`
pub fn mock_tarball(
    server: &mut mockito::Server,
    owner: &str,
    repo: &str,
    body: Vec<u8>,
) -> mockito::Mock {
    server
        .mock("GET", tarball_path(owner, repo).as_str())
        .with_status(200)
        .with_header("content-type", "application/x-gzip")
        .with_body(body)
        .create()
}

/// Answer 404 for the `main` branch tarball of `owner/repo`
pub fn mock_missing_repo(server: &mut mockito::Server, owner: &str, repo: &str) -> mockito::Mock {
    server
        .mock("GET", tarball_path(owner, repo).as_str())
        .with_status(404)
        .create()
}

fn tarball_path(owner: &str, repo: &str) -> String {
    format!("/{owner}/{repo}/archive/refs/heads/main.tar.gz")
}

/// Every file below `root` with its contents, relative paths sorted
pub fn read_tree(root: &Path) -> Vec<(PathBuf, String)> {
    let mut files: Vec<(PathBuf, String)> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .expect("Entry outside root")
                .to_path_buf();
            let contents =
                std::fs::read_to_string(entry.path()).expect("Failed to read installed file");
            (relative, contents)
        })
        .collect();
    files.sort();
    files
}
