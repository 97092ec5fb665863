//! Parsing helpers for output format and sort options.

use std::str::FromStr;

use magshelf_core::{SortColumn, SortDirection, SortState};

use crate::errors::CliError;

/// Output format for list-style commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
        }
    }
}

/// Validate `--format`, rejecting it alongside `--json`.
pub fn parse_output_format(value: Option<&str>, json: bool) -> anyhow::Result<Option<OutputFormat>> {
    let format = match value {
        None => return Ok(None),
        Some("table") => OutputFormat::Table,
        Some("plain") => OutputFormat::Plain,
        Some(other) => {
            return Err(CliError::invalid_input(format!(
                "Unsupported format: {} (use table or plain)",
                other
            ))
            .into())
        }
    };
    if json {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    Ok(Some(format))
}

/// Build the sort mode for `list` from its flags.
pub fn parse_sort_state(
    sort: Option<&str>,
    desc: bool,
    chronological: bool,
) -> anyhow::Result<SortState> {
    if chronological {
        return Ok(SortState::Chronological);
    }
    let Some(name) = sort else {
        return Ok(SortState::Unsorted);
    };
    let column = SortColumn::from_str(name)?;
    let direction = if desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    Ok(SortState::Column { column, direction })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None, true).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain"), false).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv"), false).is_err());
        let err = parse_output_format(Some("table"), true).unwrap_err();
        assert!(err.to_string().contains("--json"));
    }

    #[test]
    fn test_parse_sort_state() {
        assert_eq!(parse_sort_state(None, false, false).unwrap(), SortState::Unsorted);
        assert_eq!(
            parse_sort_state(None, false, true).unwrap(),
            SortState::Chronological
        );
        assert_eq!(
            parse_sort_state(Some("Year"), true, false).unwrap(),
            SortState::Column {
                column: SortColumn::Year,
                direction: SortDirection::Desc,
            }
        );
    }

    #[test]
    fn test_unknown_sort_column_is_invalid_input() {
        let err = parse_sort_state(Some("issue"), false, false).unwrap_err();
        assert_eq!(
            crate::errors::exit_code_for(&err),
            crate::constants::exit_codes::INVALID_INPUT
        );
        assert!(err.to_string().contains("Unknown sort column 'issue'"));
    }
}
