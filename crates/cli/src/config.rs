// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use linesindir_engine::config::{ScanOptions, ScanOptionsBuilder};
use std::path::PathBuf;

impl TryFrom<&Args> for ScanOptions {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        // Relative directories resolve against the working directory.
        let root = args
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let options = ScanOptionsBuilder::default()
            .root(root)
            .extensions(args.extensions.clone())
            .include_all(args.all)
            .follow_links(args.walk.follow)
            .max_depth(args.walk.max_depth)
            .respect_ignore_files(args.walk.gitignore)
            .skip_hidden(args.walk.no_hidden)
            .build()?;
        Ok(options)
    }
}
