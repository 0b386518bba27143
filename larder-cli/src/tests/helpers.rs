//! Test helpers for staging CLI input files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents)
        .unwrap_or_else(|err| panic!("write {path}: {err}"));
}

/// A temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

/// Route request for two Mumbai centres listed farthest first.
pub(super) const MUMBAI_REQUEST: &str = r#"{
  "origin": { "lat": 18.9398, "lon": 72.8355 },
  "stops": [
    { "id": "CTR-B", "lat": 19.1860, "lon": 72.9756, "allocated_kg": 150 },
    { "id": "CTR-A", "lat": 19.1197, "lon": 72.8464, "allocated_kg": 200 }
  ]
}"#;

/// A week of 175 kg days for `CTR-A` ending on 2024-03-08.
pub(super) const WEEK_OF_HISTORY: &str = r#"[
  { "centre_id": "CTR-A", "date": "2024-03-02", "demand_kg": 175 },
  { "centre_id": "CTR-A", "date": "2024-03-03", "demand_kg": 175 },
  { "centre_id": "CTR-A", "date": "2024-03-04", "demand_kg": 175 },
  { "centre_id": "CTR-A", "date": "2024-03-05", "demand_kg": 175 },
  { "centre_id": "CTR-A", "date": "2024-03-06", "demand_kg": 175 },
  { "centre_id": "CTR-A", "date": "2024-03-07", "demand_kg": 175 },
  { "centre_id": "CTR-A", "date": "2024-03-08", "demand_kg": 175 }
]"#;

/// Directory entry naming `CTR-A`.
pub(super) const CENTRES: &str = r#"{
  "CTR-A": { "name": "Andheri Community Pantry", "city": "Mumbai" }
}"#;
