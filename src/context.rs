use std::path::{Path, PathBuf};

/// Name of the generated manifest inside the essays directory.
pub(crate) const MANIFEST_FILE: &str = "manifest.json";

/// Paths the build works with, resolved once at startup.
#[derive(Debug)]
pub(crate) struct Context {
    /// Directory holding the essay HTML files.
    pub essays_dir: PathBuf,
    /// Output path of the generated manifest.
    pub manifest_path: PathBuf,
    /// Directory the history queries run in (the site root).
    pub work_dir: PathBuf,
}

impl Context {
    pub fn new(essays_dir: PathBuf) -> Self {
        let manifest_path = essays_dir.join(MANIFEST_FILE);
        let work_dir = match essays_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };
        Self {
            essays_dir,
            manifest_path,
            work_dir,
        }
    }
}
