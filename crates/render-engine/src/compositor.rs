//! Card compositor: turns records and a layout into draw commands.
//!
//! Composition is pure. It decides what text goes where; painting and
//! encoding happen later in [`crate::render`].

use serde::Serialize;
use standcard_selector::paginate::{plan_rows, Pagination};
use standcard_table_model::layout::{Layout, Rgb, TextAnchor};
use standcard_table_model::record::{Field, Record};

/// What a piece of text represents on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextRole {
    Title,
    Subtitle,
    Cell { row: usize, field: Field },
}

/// A single text draw instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCommand {
    pub role: TextRole,
    pub text: String,
    /// Top-left of the text box in template pixels.
    pub anchor: TextAnchor,
    /// Glyph height in pixels.
    pub px: f32,
    pub color: Rgb,
}

/// Every instruction needed to draw one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardComposition {
    /// Title, subtitle, then row cells in row order.
    pub commands: Vec<TextCommand>,

    /// Row placement, including how many rows were dropped.
    pub pagination: Pagination,
}

impl CardComposition {
    /// Commands that belong to the given row index.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &TextCommand> {
        self.commands
            .iter()
            .filter(move |cmd| matches!(cmd.role, TextRole::Cell { row: r, .. } if r == row))
    }

    /// Command for a single cell, if the row was drawn.
    pub fn cell(&self, row: usize, field: Field) -> Option<&TextCommand> {
        self.commands
            .iter()
            .find(|cmd| cmd.role == TextRole::Cell { row, field })
    }
}

/// Compose the draw commands for a card.
///
/// Only the first twenty records are placed; the rest are reported in
/// [`CardComposition::pagination`].
pub fn compose_card(
    title: &str,
    subtitle: &str,
    records: &[Record],
    layout: &Layout,
) -> CardComposition {
    let pagination = plan_rows(records.len(), layout);
    let mut commands = Vec::with_capacity(2 + pagination.drawn() * Field::ALL.len());

    commands.push(TextCommand {
        role: TextRole::Title,
        text: title.to_string(),
        anchor: layout.title,
        px: layout.header_font_px,
        color: layout.text_color,
    });
    commands.push(TextCommand {
        role: TextRole::Subtitle,
        text: subtitle.to_string(),
        anchor: layout.subtitle,
        px: layout.header_font_px,
        color: layout.text_color,
    });

    for placement in &pagination.slots {
        let record = &records[placement.index];
        let column = layout.column(placement.column);

        for (field, value) in record.row_values() {
            commands.push(TextCommand {
                role: TextRole::Cell {
                    row: placement.index,
                    field,
                },
                text: value.to_string(),
                anchor: TextAnchor::new(column.x_for(field), placement.y),
                px: layout.row_font_px,
                color: layout.text_color,
            });
        }
    }

    CardComposition {
        commands,
        pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(i: usize) -> Record {
        Record::from_pairs([
            ("Team", format!("Team {i}")),
            ("WWCD", format!("{}", i % 3)),
            ("PP", format!("{}", 10 + i)),
            ("FP", format!("{}", i % 7)),
            ("TP", format!("{}", 20 + i)),
        ])
    }

    fn rows(n: usize) -> Vec<Record> {
        (0..n).map(row).collect()
    }

    #[test]
    fn test_scenario_single_row_at_left_column_top() {
        let records = vec![Record::from_pairs([
            ("Team", "Alpha Meow"),
            ("WWCD", "3"),
            ("PP", "10"),
            ("FP", "2"),
            ("TP", "15"),
        ])];
        let card = compose_card("WinterCup", "Group", &records, &Layout::default());

        let drawn: Vec<(&str, i32, i32)> = card
            .row(0)
            .map(|cmd| (cmd.text.as_str(), cmd.anchor.x, cmd.anchor.y))
            .collect();
        assert_eq!(
            drawn,
            vec![
                ("Alpha Meow", 105, 240),
                ("3", 410, 240),
                ("10", 460, 240),
                ("2", 515, 240),
                ("15", 575, 240),
            ]
        );
    }

    #[test]
    fn test_header_uses_header_font() {
        let card = compose_card("WinterCup", "Group", &[], &Layout::default());
        assert_eq!(card.commands.len(), 2);

        let title = &card.commands[0];
        assert_eq!(title.role, TextRole::Title);
        assert_eq!(title.anchor, TextAnchor::new(500, 100));
        assert_eq!(title.px, 36.0);

        let subtitle = &card.commands[1];
        assert_eq!(subtitle.text, "Group");
        assert_eq!(subtitle.anchor, TextAnchor::new(500, 150));
    }

    #[test]
    fn test_twelve_rows_use_right_column_for_overflow() {
        let card = compose_card("T", "S", &rows(12), &Layout::default());

        for i in 0..10 {
            let team = card.cell(i, Field::Team).unwrap();
            assert_eq!(team.anchor, TextAnchor::new(105, 240 + 40 * i as i32));
        }
        let r10 = card.cell(10, Field::Team).unwrap();
        assert_eq!(r10.anchor, TextAnchor::new(765, 240));
        let r11 = card.cell(11, Field::Tp).unwrap();
        assert_eq!(r11.anchor, TextAnchor::new(1230, 280));
        assert_eq!(r11.px, 22.0);
    }

    #[test]
    fn test_truncates_to_twenty_rows() {
        let card = compose_card("T", "S", &rows(25), &Layout::default());
        assert_eq!(card.commands.len(), 2 + 20 * 5);
        assert_eq!(card.pagination.dropped, 5);
        assert!(card.cell(19, Field::Team).is_some());
        assert!(card.cell(20, Field::Team).is_none());
    }

    #[test]
    fn test_missing_wwcd_draws_zero() {
        let records = vec![Record::new().with("Team", "No Wins").with("TP", "4")];
        let card = compose_card("T", "S", &records, &Layout::default());

        let wwcd = card.cell(0, Field::Wwcd).unwrap();
        assert_eq!(wwcd.text, "0");
        assert_eq!(wwcd.anchor, TextAnchor::new(410, 240));
        assert_eq!(card.cell(0, Field::Pp).unwrap().text, "0");
    }

    #[test]
    fn test_commands_serialize_for_preview() {
        let records = vec![Record::new().with("Team", "Alpha")];
        let card = compose_card("T", "S", &records, &Layout::default());
        let json = serde_json::to_value(&card.commands[2]).unwrap();
        assert_eq!(json["role"]["kind"], "cell");
        assert_eq!(json["role"]["field"], "team");
        assert_eq!(json["anchor"]["x"], 105);
    }
}
