//! Hand-off of finished cards.
//!
//! Delivery (a chat photo message, an upload, a copy into an outbox) lives
//! behind [`ImageSink`] so rendering never depends on a transport.

use std::path::Path;

use standcard_common::error::StandcardResult;

/// Receives a rendered card and its caption.
#[async_trait::async_trait]
pub trait ImageSink: Send + Sync {
    /// Deliver the image at `path` with an HTML-formatted caption.
    async fn send_image(&self, path: &Path, caption: &str) -> StandcardResult<()>;

    /// Sink name for logs.
    fn name(&self) -> &str;
}
