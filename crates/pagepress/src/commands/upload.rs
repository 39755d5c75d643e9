//! `pagepress upload` command implementation.

use std::path::PathBuf;

use clap::Args;
use pagepress_blocks::{Block, scan};
use pagepress_config::{CliSettings, Config};
use pagepress_notion::{BatchUploader, NotionClient, UploadConfig, UploadReport, batch_count};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the upload command.
#[derive(Args)]
pub(crate) struct UploadArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,

    /// Notion page ID to append to (default: notion.page_id from config).
    page_id: Option<String>,

    /// Notion integration token.
    #[arg(short, long, env = "NOTION_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Maximum blocks per request (default: 100, the Notion API limit).
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Scan and report without uploading anything.
    #[arg(long)]
    dry_run: bool,

    /// Path to configuration file (default: auto-discover pagepress.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl UploadArgs {
    /// Execute the upload command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete, the file cannot be
    /// read, or a batch request fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Load config with CLI overrides
        let cli_settings = CliSettings {
            api_token: self.token.clone(),
            page_id: self.page_id.clone(),
            batch_size: self.batch_size,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        config.validate()?;

        // Credentials are a precondition: fail before touching the file
        // or the network.
        let notion = config.require_notion()?;
        let page_id = notion.page_id.clone().ok_or_else(|| {
            CliError::Validation(
                "page ID required (argument or notion.page_id in pagepress.toml)".to_owned(),
            )
        })?;

        // Read and scan the markdown file
        let markdown_text = std::fs::read_to_string(&self.markdown_file)?;
        output.info(&format!("Converting {}...", self.markdown_file.display()));
        let blocks = scan(&markdown_text);
        output.info(&format!("Created {} blocks", blocks.len()));

        if self.dry_run {
            print_dry_run(&output, &blocks, config.upload.batch_size);
            return Ok(());
        }

        if blocks.is_empty() {
            output.warning("Nothing to upload.");
            return Ok(());
        }

        // Upload in batches
        let client = NotionClient::new(&notion.base_url, &notion.api_token);
        let uploader = BatchUploader::new(
            &client,
            UploadConfig {
                batch_size: config.upload.batch_size,
            },
        );

        output.info(&format!("Uploading to Notion page {page_id}..."));
        let report = uploader.upload(&page_id, &blocks)?;
        print_upload_report(&output, &report, &page_id);

        Ok(())
    }
}

fn print_dry_run(output: &Output, blocks: &[Block], batch_size: usize) {
    output.highlight("\n[DRY RUN] No upload performed.");

    let mut headings = 0;
    let mut paragraphs = 0;
    let mut bullets = 0;
    let mut code_blocks = 0;
    for block in blocks {
        match block {
            Block::Heading { .. } => headings += 1,
            Block::Paragraph { .. } => paragraphs += 1,
            Block::BulletItem { .. } => bullets += 1,
            Block::CodeBlock { .. } => code_blocks += 1,
        }
    }

    output.info(&format!("Headings: {headings}"));
    output.info(&format!("Paragraphs: {paragraphs}"));
    output.info(&format!("Bullet items: {bullets}"));
    output.info(&format!("Code blocks: {code_blocks}"));
    output.info(&format!(
        "Batches: {} (batch size {})",
        batch_count(blocks.len(), batch_size),
        batch_size
    ));
}

fn print_upload_report(output: &Output, report: &UploadReport, page_id: &str) {
    output.success("\nSuccessfully uploaded all content!");
    output.info(&format!("Blocks: {}", report.blocks));
    output.info(&format!("Batches: {}", report.batches));
    output.info(&format!(
        "View at: https://www.notion.so/{}",
        page_id.replace('-', "")
    ));
}
