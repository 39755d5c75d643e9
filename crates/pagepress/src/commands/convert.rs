//! `pagepress convert` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use pagepress_blocks::scan;
use pagepress_notion::{AppendChildrenRequest, BlockObject};

use crate::error::CliError;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// Scans the markdown file and writes the append-children JSON
    /// document to stdout, for offline inspection of what an upload
    /// would send.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or stdout is closed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let markdown_text = std::fs::read_to_string(&self.markdown_file)?;
        let blocks = scan(&markdown_text);
        let children: Vec<BlockObject> = blocks.iter().map(BlockObject::from).collect();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(
            &mut handle,
            &AppendChildrenRequest {
                children: &children,
            },
        )?;
        writeln!(handle)?;

        Ok(())
    }
}
