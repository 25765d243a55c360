use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::AppError;

/// Fixed snapshot file name; the downstream capture step derives
/// `proposal-table.png` from it
pub const SNAPSHOT_FILE: &str = "proposal-table.html";

/// Capability for handing a rendered table off to an image-capture step
///
/// Injected at the command layer so the pricing and rendering core never
/// touches the filesystem.
pub trait Exporter {
    /// Export the rendered table markup, returning the artifact location
    fn export(&self, table_html: &str) -> Result<PathBuf, AppError>;
}

/// Writes a standalone, styled HTML snapshot document to disk for an
/// external rasterizer
pub struct HtmlSnapshotExporter {
    dir: PathBuf,
}

impl HtmlSnapshotExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Exporter for HtmlSnapshotExporter {
    fn export(&self, table_html: &str) -> Result<PathBuf, AppError> {
        let path = self.dir.join(SNAPSHOT_FILE);
        fs::write(&path, snapshot_document(table_html))?;
        info!("Wrote table snapshot to {}", path.display());
        Ok(path)
    }
}

/// Wrap table markup in a self-contained document the capture service can
/// rasterize without extra assets
fn snapshot_document(table_html: &str) -> String {
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M");
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Pricing Proposal</title>
<style>
body {{ font-family: sans-serif; margin: 24px; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid #ccc; padding: 8px 12px; text-align: left; vertical-align: top; }}
th {{ background: #f4f4f4; }}
.final-price {{ font-weight: bold; display: block; margin-top: 4px; }}
.badge {{ display: inline-block; padding: 2px 6px; margin: 2px 0; border-radius: 4px; font-size: 0.85em; }}
.badge-bulk {{ background: #e0f0ff; }}
.badge-term {{ background: #e6ffe6; }}
.badge-manual {{ background: #fff0e0; }}
.info {{ color: #666; }}
.generated {{ color: #999; font-size: 0.8em; margin-top: 12px; }}
</style>
</head>
<body>
{}
<div class="generated">Generated {}</div>
</body>
</html>
"#,
        table_html, generated
    )
}
