use std::fs;
use std::path::PathBuf;
use std::process::{Output, Stdio};

use tempfile::TempDir;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Text used as plain input in most tests
pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog.\n\
    Pack my box with five dozen liquor jugs.\n\
    How vexingly quick daft zebras jump!\n";

/// Path of the `pixz` binary under test
const PIXZ: &str = env!("CARGO_BIN_EXE_pixz");

/// Builds a tarball of regular files.
pub fn tarball(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (name, data) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        builder
            .append_data(&mut header, name, *data)
            .expect("failed to append tar member");
    }
    builder.into_inner().expect("failed to finish tarball")
}

/// Temporary working directory for one test
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Creates an empty fixture
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Creates a fixture holding one file
    pub fn with_file(name: &str, data: &[u8]) -> Self {
        let fixture = Self::new();
        fixture.write_file(name, data);
        fixture
    }

    /// Writes `data` to `name` inside the fixture
    pub fn write_file(&self, name: &str, data: &[u8]) {
        fs::write(self.dir.path().join(name), data).expect("failed to write file");
    }

    /// Absolute path of `name` inside the fixture
    pub fn path(&self, name: &str) -> String {
        self.path_buf(name).to_string_lossy().into_owned()
    }

    /// Absolute path of `name` inside the fixture
    pub fn path_buf(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Whether `name` exists inside the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.path_buf(name).exists()
    }

    /// Reads `name` from the fixture
    pub fn read_file(&self, name: &str) -> Vec<u8> {
        fs::read(self.path_buf(name)).expect("failed to read file")
    }

    /// Runs `pixz` inside the fixture directory with empty stdin
    pub async fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .await
            .expect("failed to run pixz")
    }

    /// Runs `pixz` inside the fixture directory feeding `input` on stdin
    pub async fn run_with_stdin(&self, args: &[&str], input: &[u8]) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .spawn()
            .expect("failed to spawn pixz");

        let mut stdin = child.stdin.take().expect("stdin is piped");
        let input = input.to_vec();
        let writer = tokio::spawn(async move {
            // pixz may exit before reading everything
            let _ = stdin.write_all(&input).await;
        });

        let output = child
            .wait_with_output()
            .await
            .expect("failed to wait for pixz");
        writer.await.expect("stdin writer panicked");
        output
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(PIXZ);
        command
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("PIXZ_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        command
    }
}

/// Decodes stderr for assertions
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
