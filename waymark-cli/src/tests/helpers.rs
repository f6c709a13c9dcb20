//! Test helpers for writing plan requests into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use tempfile::TempDir;
use waymark_core::PointOfInterest;

use crate::plan::PlanRequestFile;

/// Write `contents` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Create a temporary directory and the request path inside it.
pub(super) fn request_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");
    (tmp, request_path)
}

/// Three places whose cheapest route is 1 -> 2 -> 3 at a cost of 2.
pub(super) fn triangle_request() -> PlanRequestFile {
    PlanRequestFile {
        places: vec![
            PointOfInterest::with_empty_tags(1, Coord { x: -0.12, y: 51.50 }),
            PointOfInterest::with_empty_tags(2, Coord { x: -0.11, y: 51.50 }),
            PointOfInterest::with_empty_tags(3, Coord { x: -0.10, y: 51.51 }),
        ],
        costs: vec![
            vec![0.0, 1.0, 10.0],
            vec![5.0, 0.0, 1.0],
            vec![2.0, 5.0, 0.0],
        ],
    }
}

/// Serialize `request` as pretty JSON at `path`.
pub(super) fn write_request(path: &Utf8Path, request: &PlanRequestFile) {
    let payload = serde_json::to_string_pretty(request).expect("serialize request");
    write_utf8(path, payload.as_bytes());
}
