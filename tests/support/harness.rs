use placecheck::config::AuditConfig;
use placecheck::corpus::audit_corpus;
use placecheck::report::Report;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A temporary corpus: records go under `src/`, reports under `out/`.
pub struct CorpusHarness {
    pub dir: TempDir,
    pub src: PathBuf,
    pub dest: PathBuf,
}

impl CorpusHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let src = dir.path().join("src");
        let dest = dir.path().join("out");
        fs::create_dir_all(&src).expect("Failed to create source dir");
        Self { dir, src, dest }
    }

    /// Write `record` to `src/<rel>`, creating parent directories.
    pub fn write_record(&self, rel: &str, record: &Value) -> PathBuf {
        let content = serde_json::to_string_pretty(record).expect("Failed to serialize record");
        self.write_raw(rel, &content)
    }

    pub fn write_raw(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.src.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create record dir");
        }
        fs::write(&path, content).expect("Failed to write record");
        path
    }

    pub fn audit(&self) -> anyhow::Result<Report> {
        audit_corpus(&self.src, &AuditConfig::default())
    }

    pub fn report_path(&self) -> PathBuf {
        self.dest.join("issues.json")
    }

    pub fn read_csv(&self, kind: &str) -> String {
        let path = self.dest.join(format!("{}.csv", kind));
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run the built binary with `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_placecheck"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run placecheck")
    }
}
