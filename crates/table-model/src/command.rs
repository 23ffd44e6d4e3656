//! The `/reg_table` chat command.
//!
//! `/reg_table <tournament> <organization> <stage> <link>`: the first three
//! arguments are single words, the link is the trimmed rest of the message.

use standcard_common::error::{StandcardError, StandcardResult, REG_TABLE_USAGE};

/// Command keyword, without the leading slash.
pub const REG_TABLE: &str = "reg_table";

/// A parsed table registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegTableCommand {
    pub tournament: String,
    pub organization: String,
    pub stage: String,
    pub link: String,
}

impl RegTableCommand {
    /// Parse a full message such as
    /// `/reg_table WinterCup MEOW Group https://docs.google.com/spreadsheets/d/abc123`.
    ///
    /// The command may carry a bot mention (`/reg_table@standcard_bot`).
    pub fn parse(text: &str) -> StandcardResult<Self> {
        let parts = split_max(text, 5);
        if parts.len() != 5 {
            return Err(StandcardError::invalid_command(format!(
                "expected 4 arguments, got {}",
                parts.len().saturating_sub(1)
            )));
        }

        let keyword = parts[0].trim_start_matches('/');
        let keyword = keyword.split('@').next().unwrap_or_default();
        if keyword != REG_TABLE {
            return Err(StandcardError::invalid_command(format!(
                "unknown command {:?}",
                parts[0]
            )));
        }

        Ok(Self {
            tournament: parts[1].to_string(),
            organization: parts[2].to_string(),
            stage: parts[3].to_string(),
            link: parts[4].to_string(),
        })
    }
}

/// Help text for the start command.
pub fn usage() -> String {
    format!(
        "Hi! I build tournament standings cards from a Google Sheet.\n\n\
         Use the command:\n\
         {REG_TABLE_USAGE}\n\n\
         Example:\n\
         /reg_table WinterCup MEOW Group https://docs.google.com/spreadsheets/d/abc123"
    )
}

/// Split on whitespace into at most `max` parts; the last part keeps the
/// remainder with surrounding whitespace trimmed.
fn split_max(text: &str, max: usize) -> Vec<&str> {
    let mut parts = Vec::with_capacity(max);
    let mut rest = text.trim();

    while !rest.is_empty() {
        if parts.len() + 1 == max {
            parts.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                parts.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                parts.push(rest);
                break;
            }
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command() {
        let cmd = RegTableCommand::parse(
            "/reg_table WinterCup MEOW Group https://docs.google.com/spreadsheets/d/abc123",
        )
        .unwrap();
        assert_eq!(cmd.tournament, "WinterCup");
        assert_eq!(cmd.organization, "MEOW");
        assert_eq!(cmd.stage, "Group");
        assert_eq!(cmd.link, "https://docs.google.com/spreadsheets/d/abc123");
    }

    #[test]
    fn test_link_keeps_remainder() {
        let cmd = RegTableCommand::parse("/reg_table  Cup   Org\tStage   link with spaces  ").unwrap();
        assert_eq!(cmd.stage, "Stage");
        assert_eq!(cmd.link, "link with spaces");
    }

    #[test]
    fn test_bot_mention_is_accepted() {
        let cmd = RegTableCommand::parse("/reg_table@standcard_bot Cup Org Stage link").unwrap();
        assert_eq!(cmd.tournament, "Cup");
    }

    #[test]
    fn test_too_few_arguments() {
        let err = RegTableCommand::parse("/reg_table Cup Org link").unwrap_err();
        assert!(matches!(err, StandcardError::InvalidCommand { .. }));
        assert_eq!(err.user_message(), REG_TABLE_USAGE);

        assert!(RegTableCommand::parse("").is_err());
    }

    #[test]
    fn test_wrong_keyword() {
        let err = RegTableCommand::parse("/start a b c d").unwrap_err();
        assert!(matches!(err, StandcardError::InvalidCommand { .. }));
    }

    #[test]
    fn test_usage_mentions_example() {
        let text = usage();
        assert!(text.contains(REG_TABLE_USAGE));
        assert!(text.contains("/reg_table WinterCup MEOW Group"));
    }
}
