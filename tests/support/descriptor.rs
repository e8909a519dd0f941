use std::path::PathBuf;

use tempfile::TempDir;

pub const APP: &str = r#"{
  "id": "/svc/api",
  "cmd": "python3 -m http.server 8080",
  "instances": 2,
  "cpus": 0.25,
  "mem": 128
}"#;

pub const TEAM: &str = r#"{
  "id": "/team",
  "apps": [{"id": "/team/a", "cmd": "run a"}],
  "groups": [
    {"id": "/team/sub", "apps": [{"id": "/team/sub/a", "cmd": "run sub"}]}
  ]
}"#;

/// A scratch directory holding descriptor and config files for one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}
