//! Notion REST API integration.
//!
//! Provides a sync HTTP client for the Notion API with bearer-token
//! authentication, the block-object wire types, and a batch uploader that
//! appends scanned blocks to a page in sequential chunks.

mod client;
mod error;
mod types;
mod uploader;

pub use client::NotionClient;
pub use error::{NotionError, UploadError};
pub use types::{AppendChildrenRequest, BlockObject};
pub use uploader::{
    AppendBlocks, BatchUploader, MAX_BATCH_SIZE, UploadConfig, UploadReport, batch_count,
};
