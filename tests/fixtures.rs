use assert_cmd::Command;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Run ziptree with given arguments and return (stdout, stderr, success)
pub fn run_ziptree<I, S>(home: &Path, args: I) -> (String, String, bool)
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    run_ziptree_with_stdin(home, args, "")
}

/// Same as `run_ziptree`, feeding `stdin` to the process.
///
/// `home` becomes the config directory so a user's own config never leaks in.
pub fn run_ziptree_with_stdin<I, S>(home: &Path, args: I, stdin: &str) -> (String, String, bool)
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = Command::cargo_bin("ziptree").expect("ziptree binary not found");
    cmd.args(args)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .write_stdin(stdin);

    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().expect("Failed to execute ziptree");
    let stdout = String::from_utf8_lossy(&stdout).to_string();
    let stderr = String::from_utf8_lossy(&stderr).to_string();

    (stdout, stderr, status.success())
}

/// Helper to convert path to string
pub fn p<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().to_string()
}

/// Builds a zip archive inside a temp directory, entry by entry
pub struct ZipFixture {
    temp_dir: TempDir,
    entries: Vec<(String, Option<String>)>,
}

impl ZipFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
            entries: Vec::new(),
        }
    }

    /// Add a file entry with content
    pub fn file<S: Into<String>, C: Into<String>>(mut self, path: S, content: C) -> Self {
        self.entries.push((path.into(), Some(content.into())));
        self
    }

    /// Add an empty file entry
    pub fn touch<S: Into<String>>(self, path: S) -> Self {
        self.file(path, "")
    }

    /// Add an explicit directory entry
    pub fn dir<S: Into<String>>(mut self, path: S) -> Self {
        self.entries.push((path.into(), None));
        self
    }

    /// Write the archive as `name` and return (TempDir, archive path)
    pub fn build(self, name: &str) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join(name);
        let file = fs::File::create(&path).expect("create archive");
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        for (entry, content) in &self.entries {
            match content {
                Some(content) => {
                    zip.start_file(entry.as_str(), options).expect("start file");
                    zip.write_all(content.as_bytes()).expect("write entry");
                }
                None => {
                    zip.add_directory(entry.as_str(), options)
                        .expect("add directory");
                }
            }
        }
        zip.finish().expect("finish archive");

        (self.temp_dir, path)
    }
}

/// The three-entry archive used throughout: `src/a.ts`, `src/b.ts`, `README.md`
pub fn sample_project() -> (TempDir, PathBuf) {
    ZipFixture::new()
        .file("src/a.ts", "export const a = 1;")
        .file("src/b.ts", "export const b = 2;")
        .file("README.md", "# Sample")
        .build("project.zip")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_fixture() {
        let (_dir, archive) = ZipFixture::new()
            .dir("docs/")
            .touch("docs/index.md")
            .build("docs.zip");

        let file = fs::File::open(&archive).unwrap();
        let zip = zip::ZipArchive::new(file).unwrap();
        assert_eq!(zip.len(), 2);
    }
}
