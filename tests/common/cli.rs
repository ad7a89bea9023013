//! Helpers for driving the `shelf` binary in a scratch directory.

use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;

/// Temporary working directory the binary runs in.
pub struct ShelfWorkspace {
    _temp_dir: tempfile::TempDir,
    pub root: PathBuf,
}

impl ShelfWorkspace {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Default catalog file inside the workspace.
    pub fn data_file(&self) -> PathBuf {
        self.root.join("my_books.json")
    }

    pub fn read_data(&self) -> serde_json::Value {
        let text = fs::read_to_string(self.data_file()).expect("read data file");
        serde_json::from_str(&text).expect("parse data file")
    }
}

pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `shelf` with `args`, feeding `stdin` as the user's keystrokes.
pub fn run_shelf<I, S>(workspace: &ShelfWorkspace, args: I, stdin: &str, label: &str) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = Command::new(env!("CARGO_BIN_EXE_shelf"))
        .current_dir(&workspace.root)
        .args(args)
        .write_stdin(stdin.to_string())
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run shelf: {e}"));

    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
