use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Local};
use log::debug;

/// Source of publish/update dates for essay files, as `YYYY-MM-DD` strings.
///
/// `None` means the path has no recorded history (or the history tool is
/// missing entirely); callers fall back to [`fallback_date`].
pub(crate) trait DateSource {
    /// Date of the commit that introduced the path, following renames.
    fn first_commit_date(&self, path: &Path) -> Option<String>;
    /// Date of the most recent commit touching the path.
    fn last_commit_date(&self, path: &Path) -> Option<String>;
}

/// Resolves dates by running `git log` in a fixed working directory.
pub(crate) struct GitHistory {
    work_dir: PathBuf,
}

impl GitHistory {
    pub fn new(work_dir: PathBuf) -> Self {
        Self { work_dir }
    }

    fn log_date(&self, path: &Path, first: bool) -> Option<String> {
        let mut cmd = Command::new("git");
        cmd.arg("log").arg("--format=%aI");
        if first {
            cmd.args(["--diff-filter=A", "--follow"]);
        } else {
            cmd.arg("-1");
        }
        cmd.arg("--").arg(path);
        // Repository lookup must not depend on where the tool was invoked
        // from, so the query runs in our own directory.
        cmd.current_dir(&self.work_dir);

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                debug!("git unavailable: {e}");
                return None;
            }
        };
        if !output.status.success() {
            debug!("git log failed for {path:?}: {}", output.status);
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut lines = stdout.lines().filter(|line| !line.trim().is_empty());
        // git lists commits newest first, so the introducing commit is the
        // last line of the rename-following log.
        let line = if first { lines.last() } else { lines.next() }?;
        // %aI is ISO 8601; the first 10 characters are the calendar day.
        line.get(..10).map(str::to_string)
    }
}

impl DateSource for GitHistory {
    fn first_commit_date(&self, path: &Path) -> Option<String> {
        self.log_date(path, true)
    }

    fn last_commit_date(&self, path: &Path) -> Option<String> {
        self.log_date(path, false)
    }
}

/// Fallback for paths without history: file modification time as a local date.
pub(crate) fn fallback_date(path: &Path) -> anyhow::Result<String> {
    let mtime = std::fs::metadata(path)?.modified()?;
    let local: DateTime<Local> = mtime.into();
    Ok(local.format("%Y-%m-%d").to_string())
}
