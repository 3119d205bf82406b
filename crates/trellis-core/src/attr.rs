//! Markup attribute parsing.
//!
//! Track lists arrive from markup as comma-separated integers, e.g.
//! `"120,0,-1"`. Parsing is deliberately thin; everything interesting
//! happens once the integers are in hand.

use crate::errors::ConfigError;

/// Parse a required track-list attribute.
///
/// An absent value or any unparsable token is a configuration error naming
/// the attribute.
pub fn required(attribute: &str, value: Option<&str>) -> Result<Vec<i32>, ConfigError> {
    match value {
        Some(v) => parse(attribute, v),
        None => Err(ConfigError::MissingAttribute {
            attribute: attribute.to_string(),
        }),
    }
}

/// Parse an optional track-list attribute, defaulting to `count` zeroes.
///
/// Matches the markup convention for weights: an absent list means no track
/// takes part in distribution.
pub fn optional(
    attribute: &str,
    value: Option<&str>,
    count: usize,
) -> Result<Vec<i32>, ConfigError> {
    match value {
        Some(v) => parse(attribute, v),
        None => Ok(vec![0; count]),
    }
}

fn parse(attribute: &str, value: &str) -> Result<Vec<i32>, ConfigError> {
    value
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidTrackList {
                    attribute: attribute.to_string(),
                    token: token.to_string(),
                })
        })
        .collect()
}
