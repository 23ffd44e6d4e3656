//! Console delivery of rendered cards.

use std::path::Path;

use standcard_common::error::StandcardResult;
use standcard_render_engine::delivery::ImageSink;

/// Prints the card path and caption instead of sending a chat photo.
pub struct ConsoleSink;

#[async_trait::async_trait]
impl ImageSink for ConsoleSink {
    async fn send_image(&self, path: &Path, caption: &str) -> StandcardResult<()> {
        println!("Card: {}", path.display());
        println!("Caption: {caption}");
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
