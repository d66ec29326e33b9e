use derive_builder::Builder;
use std::path::PathBuf;

/// What to scan and how to walk it.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanOptions {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default)]
    pub extensions: Vec<String>,
    /// Bypass the extension filter entirely.
    #[builder(default)]
    pub include_all: bool,

    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    /// Honor .gitignore / .ignore files.
    #[builder(default)]
    pub respect_ignore_files: bool,
    #[builder(default)]
    pub skip_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: vec![],
            include_all: false,
            follow_links: false,
            max_depth: None,
            respect_ignore_files: false,
            skip_hidden: false,
        }
    }
}

impl ScanOptions {
    /// Whether a file with extension `ext` passes the filter.
    ///
    /// Exact, case-sensitive membership; no wildcard expansion.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.include_all || self.extensions.iter().any(|e| e == ext)
    }

    /// Human readable name of the filter in effect ("all" or "rs, toml").
    pub fn filter_label(&self) -> String {
        if self.include_all {
            "all".to_string()
        } else {
            self.extensions.join(", ")
        }
    }
}
