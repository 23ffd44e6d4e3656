//! Spreadsheet link parsing.

use std::fmt;

use standcard_common::error::{StandcardError, StandcardResult};

/// A spreadsheet identified by the id embedded in its share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLink {
    id: String,
}

impl SheetLink {
    /// Extract the spreadsheet id from a link such as
    /// `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0`.
    ///
    /// The id is the text after `/d/` up to the next `/`, `?`, or `#`.
    pub fn parse(link: &str) -> StandcardResult<Self> {
        let link = link.trim();
        let (_, rest) = link
            .split_once("/d/")
            .ok_or_else(|| StandcardError::invalid_link("link has no /d/<id> segment"))?;

        let id = rest
            .split(&['/', '?', '#'][..])
            .next()
            .unwrap_or_default();

        if id.is_empty() {
            return Err(StandcardError::invalid_link("spreadsheet id is empty"));
        }

        Ok(Self { id: id.to_string() })
    }

    /// Wrap a bare spreadsheet id.
    pub fn from_id(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for SheetLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spreadsheet {}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edit_link() {
        let link =
            SheetLink::parse("https://docs.google.com/spreadsheets/d/1AbC-xyz_09/edit#gid=0")
                .unwrap();
        assert_eq!(link.id(), "1AbC-xyz_09");
    }

    #[test]
    fn test_parse_bare_link() {
        let link = SheetLink::parse("https://docs.google.com/spreadsheets/d/abc123").unwrap();
        assert_eq!(link.id(), "abc123");
    }

    #[test]
    fn test_parse_stops_at_query_and_fragment() {
        assert_eq!(
            SheetLink::parse("https://x/d/abc?usp=sharing").unwrap().id(),
            "abc"
        );
        assert_eq!(SheetLink::parse("https://x/d/abc#gid=5").unwrap().id(), "abc");
    }

    #[test]
    fn test_rejects_links_without_id() {
        for bad in [
            "https://example.com/sheet",
            "https://docs.google.com/spreadsheets/d/",
            "https://docs.google.com/spreadsheets/d//edit",
            "",
        ] {
            let err = SheetLink::parse(bad).unwrap_err();
            assert!(matches!(err, StandcardError::InvalidLink { .. }), "{bad}");
        }
    }
}
