//! Render jobs.

use std::path::PathBuf;

use crate::layout::Layout;
use crate::record::Record;

/// One request to produce a standings card.
///
/// Built per request and consumed by a single render.
#[derive(Debug, Clone)]
pub struct RenderJob {
    /// Tournament name, drawn as the title.
    pub tournament: String,

    /// Organization the records were selected by.
    pub organization: String,

    /// Stage name, drawn as the subtitle.
    pub stage: String,

    /// Selected records in source order.
    pub records: Vec<Record>,

    /// Background template image.
    pub template_path: PathBuf,

    /// Font used for all text.
    pub font_path: PathBuf,

    /// Destination image. Missing parent directories are created.
    pub output_path: PathBuf,

    /// Template geometry.
    pub layout: Layout,
}

impl RenderJob {
    pub fn title(&self) -> &str {
        &self.tournament
    }

    pub fn subtitle(&self) -> &str {
        &self.stage
    }

    /// Photo caption in HTML parse mode: bold tournament, italic stage.
    pub fn caption(&self) -> String {
        format!(
            "<b>{}</b> — <i>{}</i>",
            escape_html(&self.tournament),
            escape_html(&self.stage)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(tournament: &str, stage: &str) -> RenderJob {
        RenderJob {
            tournament: tournament.to_string(),
            organization: "MEOW".to_string(),
            stage: stage.to_string(),
            records: vec![],
            template_path: PathBuf::from("card_template.png"),
            font_path: PathBuf::from("arial.ttf"),
            output_path: PathBuf::from("output/generated_card.png"),
            layout: Layout::default(),
        }
    }

    #[test]
    fn test_caption_format() {
        let job = job("WinterCup", "Group");
        assert_eq!(job.caption(), "<b>WinterCup</b> — <i>Group</i>");
        assert_eq!(job.title(), "WinterCup");
        assert_eq!(job.subtitle(), "Group");
    }

    #[test]
    fn test_caption_escapes_markup() {
        let job = job("A&B <Cup>", "Final");
        assert_eq!(job.caption(), "<b>A&amp;B &lt;Cup&gt;</b> — <i>Final</i>");
    }
}
