//! Batch uploader for scanned blocks.
//!
//! Partitions a block sequence into bounded batches (the Notion API
//! accepts at most 100 children per append request) and sends them
//! strictly sequentially: batch k+1 is attempted only after batch k
//! succeeded. The first failure aborts the run; blocks already appended
//! stay on the page.

use pagepress_blocks::Block;
use tracing::info;

use crate::client::NotionClient;
use crate::error::{NotionError, UploadError};
use crate::types::BlockObject;

/// Maximum children per append request, imposed by the Notion API.
pub const MAX_BATCH_SIZE: usize = 100;

/// Configuration for the batch uploader.
pub struct UploadConfig {
    /// Maximum blocks per request.
    pub batch_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            batch_size: MAX_BATCH_SIZE,
        }
    }
}

/// Summary of a fully successful upload.
#[derive(Debug, PartialEq, Eq)]
pub struct UploadReport {
    /// Number of batches sent.
    pub batches: usize,
    /// Total number of blocks sent.
    pub blocks: usize,
}

/// Target for appending block batches.
///
/// Implemented by [`NotionClient`]; the indirection keeps the sequencing
/// logic testable without a network.
pub trait AppendBlocks {
    /// Append one batch of blocks to the given page.
    ///
    /// # Errors
    ///
    /// Returns an error when the append request does not succeed.
    fn append_blocks(&self, page_id: &str, children: &[BlockObject]) -> Result<(), NotionError>;
}

impl AppendBlocks for NotionClient {
    fn append_blocks(&self, page_id: &str, children: &[BlockObject]) -> Result<(), NotionError> {
        self.append_block_children(page_id, children)
    }
}

/// Uploads block sequences to a page in sequential batches.
pub struct BatchUploader<'a, C: AppendBlocks> {
    client: &'a C,
    config: UploadConfig,
}

impl<'a, C: AppendBlocks> BatchUploader<'a, C> {
    /// Create a new batch uploader.
    #[must_use]
    pub fn new(client: &'a C, config: UploadConfig) -> Self {
        Self { client, config }
    }

    /// Upload all blocks to the given page.
    ///
    /// Blocks are serialized once, partitioned into contiguous chunks of
    /// at most `batch_size` (the last chunk may be smaller), and sent one
    /// request at a time. On the first non-success response the run aborts
    /// with [`UploadError::Batch`]; remaining batches are not attempted
    /// and already-appended blocks are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Config`] when `batch_size` is zero and
    /// [`UploadError::Batch`] when an append request fails.
    pub fn upload(&self, page_id: &str, blocks: &[Block]) -> Result<UploadReport, UploadError> {
        if self.config.batch_size == 0 {
            return Err(UploadError::Config(
                "batch_size must be greater than 0".to_owned(),
            ));
        }

        let children: Vec<BlockObject> = blocks.iter().map(BlockObject::from).collect();

        let mut blocks_sent = 0;
        let mut batches = 0;
        for (index, chunk) in children.chunks(self.config.batch_size).enumerate() {
            self.client
                .append_blocks(page_id, chunk)
                .map_err(|source| UploadError::Batch {
                    batch: index + 1,
                    blocks_sent,
                    source,
                })?;
            blocks_sent += chunk.len();
            batches += 1;
            info!("Uploaded batch {} ({} blocks)", index + 1, chunk.len());
        }

        Ok(UploadReport {
            batches,
            blocks: blocks_sent,
        })
    }
}

/// Number of batches a block count splits into at the given batch size.
///
/// Zero blocks need zero requests.
#[must_use]
pub fn batch_count(blocks: usize, batch_size: usize) -> usize {
    blocks.div_ceil(batch_size.max(1))
}
