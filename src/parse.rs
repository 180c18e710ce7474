//! Parser for the `{name|v1,v2,...}` textual series format.
//!
//! Each series is one brace-delimited group: a name, a `|` separator, and a
//! comma-separated list of float values. Whitespace between groups is
//! ignored. Parsing is strict: any stray text, unbalanced brace or
//! unparseable value fails the whole input.

use crate::error::{Error, Result};
use crate::series::DataSeries;

/// Parse one or more series groups out of `input`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for malformed text and
/// [`Error::EmptyInput`] for a group with no values.
pub fn parse_series(input: &str) -> Result<Vec<DataSeries>> {
    let mut series = Vec::new();
    let mut rest = input.trim();

    while !rest.is_empty() {
        if !rest.starts_with('{') {
            return Err(Error::InvalidInput(format!(
                "expected '{{' at '{}'",
                truncate(rest)
            )));
        }
        let Some(close) = rest.find('}') else {
            return Err(Error::InvalidInput(format!(
                "unbalanced braces at '{}'",
                truncate(rest)
            )));
        };
        series.push(parse_group(&rest[1..close])?);
        rest = rest[close + 1..].trim_start();
    }

    if series.is_empty() {
        return Err(Error::InvalidInput("no series found".to_string()));
    }
    Ok(series)
}

/// Parse the inside of one `{...}` group.
fn parse_group(group: &str) -> Result<DataSeries> {
    let Some((name, values_text)) = group.split_once('|') else {
        return Err(Error::InvalidInput(format!(
            "missing '|' separator in '{{{group}}}'"
        )));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidInput(format!(
            "missing series name in '{{{group}}}'"
        )));
    }

    if values_text.trim().is_empty() {
        return Err(Error::EmptyInput {
            name: name.to_string(),
        });
    }

    let mut values = Vec::new();
    for token in values_text.split(',') {
        let token = token.trim();
        let value: f64 = token.parse().map_err(|_| {
            Error::InvalidInput(format!("cannot parse value '{token}' in series '{name}'"))
        })?;
        values.push(value);
    }

    DataSeries::new(name, values)
}

fn truncate(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(16)
        .map_or(text.len(), |(idx, _)| idx);
    &text[..end]
}
