//! Number sequence parsing
//!
//! Accepts either a JSON array (`[3, 4, -1]`) or free text with values
//! separated by commas and/or whitespace (`3, 4 -1`). Tokens `nan`, `inf`
//! and `-inf` are accepted in the free-text form.

use crate::error::{Error, Result};

/// Parse a single value
pub fn parse_value(token: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber {
            token: token.to_string(),
        })
}

/// Parse a whole sequence from text
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_value)
        .collect()
}

/// Parse values given as separate arguments, each of which may hold several
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for arg in args {
        values.extend(parse_values(arg.as_ref())?);
    }
    Ok(values)
}
