//! Card rendering and output.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use image::{ImageFormat, RgbImage};
use serde::Serialize;
use standcard_common::error::{StandcardError, StandcardResult};
use standcard_table_model::job::RenderJob;
use standcard_table_model::layout::Layout;
use standcard_table_model::record::Record;

use crate::compositor::{compose_card, CardComposition};
use crate::painter::{GlyphPainter, TextPainter};

/// Outcome of a completed render.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    /// Where the card was written.
    pub output_path: PathBuf,

    /// Rows drawn on the card.
    pub rows_drawn: usize,

    /// Rows that did not fit and were left off.
    pub rows_dropped: usize,

    /// Output dimensions in pixels.
    pub width: u32,
    pub height: u32,

    /// Painter backend used.
    pub painter: String,

    /// Completion time.
    pub rendered_at: DateTime<Utc>,
}

/// Load a template image as an owned RGB surface.
///
/// Every call decodes the file again; the file itself is never written.
pub fn load_template(path: impl AsRef<Path>) -> StandcardResult<RgbImage> {
    let path = path.as_ref();
    let image =
        image::open(path).map_err(|e| StandcardError::template_load(path, e.to_string()))?;
    Ok(image.to_rgb8())
}

/// Draw a card on a copy of `template`.
///
/// Returns the composed image together with the composition that produced
/// it. At most twenty rows are drawn.
pub fn render_card(
    template: &RgbImage,
    title: &str,
    subtitle: &str,
    records: &[Record],
    layout: &Layout,
    painter: &mut dyn TextPainter,
) -> (RgbImage, CardComposition) {
    let composition = compose_card(title, subtitle, records, layout);
    let mut canvas = template.clone();

    for command in &composition.commands {
        painter.paint(&mut canvas, command);
    }

    tracing::debug!(
        painter = painter.name(),
        commands = composition.commands.len(),
        "Painted card"
    );

    (canvas, composition)
}

/// Write an image atomically.
///
/// The image is encoded into a temporary file next to `path` and renamed
/// over it, so readers see either the previous file or the complete new one.
/// Missing parent directories are created. The format follows the
/// extension, PNG when it is missing or unknown.
pub fn save_atomic(image: &RgbImage, path: impl AsRef<Path>) -> StandcardResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);

    let mut tmp = tempfile::Builder::new()
        .prefix(".standcard-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        image
            .write_to(&mut writer, format)
            .map_err(std::io::Error::other)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Render a job with an explicit painter and write the result.
pub fn render_job_with(
    job: &RenderJob,
    template: &RgbImage,
    painter: &mut dyn TextPainter,
) -> StandcardResult<RenderReport> {
    let (image, composition) = render_card(
        template,
        job.title(),
        job.subtitle(),
        &job.records,
        &job.layout,
        painter,
    );

    save_atomic(&image, &job.output_path)?;

    let report = RenderReport {
        output_path: job.output_path.clone(),
        rows_drawn: composition.pagination.drawn(),
        rows_dropped: composition.pagination.dropped,
        width: image.width(),
        height: image.height(),
        painter: painter.name().to_string(),
        rendered_at: Utc::now(),
    };

    tracing::info!(
        output = %report.output_path.display(),
        rows = report.rows_drawn,
        dropped = report.rows_dropped,
        "Rendered standings card"
    );

    Ok(report)
}

/// Render a job end to end: load template and font, draw, write.
///
/// This is the main entry point for rendering. Fails on the first fault;
/// nothing is written unless drawing completed.
pub fn render_job(job: &RenderJob) -> StandcardResult<RenderReport> {
    tracing::info!(
        tournament = %job.tournament,
        stage = %job.stage,
        records = job.records.len(),
        "Starting render"
    );

    job.layout.validate()?;
    let template = load_template(&job.template_path)?;
    let mut painter = GlyphPainter::load(&job.font_path)?;

    render_job_with(job, &template, &mut painter)
}

/// Run [`render_job`] on the blocking thread pool.
pub async fn render_job_blocking(job: RenderJob) -> StandcardResult<RenderReport> {
    tokio::task::spawn_blocking(move || render_job(&job))
        .await
        .map_err(|e| StandcardError::Other(anyhow::anyhow!("Render task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    use crate::painter::RecordingPainter;

    fn template() -> RgbImage {
        RgbImage::from_pixel(64, 48, Rgb([20, 30, 40]))
    }

    #[test]
    fn test_render_card_does_not_mutate_template() {
        let template = template();
        let before = template.clone();
        let mut painter = RecordingPainter::new();
        let records = vec![Record::new().with("Team", "Alpha Meow")];

        let (image, composition) = render_card(
            &template,
            "Cup",
            "Final",
            &records,
            &Layout::default(),
            &mut painter,
        );

        assert_eq!(template, before);
        assert_eq!(image.dimensions(), (64, 48));
        assert_eq!(painter.commands, composition.commands);
    }

    #[test]
    fn test_save_atomic_creates_missing_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("nested").join("card.png");

        save_atomic(&template(), &path).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded, template());
        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_save_atomic_defaults_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.out");

        save_atomic(&template(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_save_atomic_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file, not a directory").unwrap();

        let err = save_atomic(&template(), blocker.join("card.png")).unwrap_err();
        assert!(matches!(err, StandcardError::Io(_)));
    }

    #[test]
    fn test_missing_template_is_template_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_template(dir.path().join("card_template.png")).unwrap_err();
        assert!(matches!(err, StandcardError::TemplateLoad { .. }));
    }

    #[test]
    fn test_undecodable_template_is_template_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card_template.png");
        std::fs::write(&path, b"not an image").unwrap();

        let err = load_template(&path).unwrap_err();
        assert!(matches!(err, StandcardError::TemplateLoad { .. }));
    }
}
