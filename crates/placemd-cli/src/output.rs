use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;

static UNSAFE_FILE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|\x00-\x1f]"#).expect("valid regex"));

/// Replaces characters that are not allowed in file names with `_`.
pub(crate) fn sanitize_file_name(name: &str) -> String {
    UNSAFE_FILE_CHARS_RE
        .replace_all(name.trim(), "_")
        .into_owned()
}

/// Writes `content` to `{dir}/{sanitized name}.md`, creating `dir` if needed.
///
/// An existing file is truncated and overwritten.
pub(crate) fn write_report(dir: &Path, place_name: &str, content: &str) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let path = dir.join(format!("{}.md", sanitize_file_name(place_name)));
    if path.exists() {
        tracing::warn!(path = %path.display(), "overwriting existing report");
    }
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
