//! Sort-order parsing for the compact `field:DIRECTION` syntax.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordering direction for a single sort criterion.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Parse a direction token, case-insensitively (`ASC` / `DESC`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("ASC"),
            Self::Desc => f.write_str("DESC"),
        }
    }
}

/// One ordering criterion: a field name plus direction.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortOrder {
    /// Field the results are ordered by.
    pub field: String,
    /// Ascending or descending.
    pub direction: Direction,
}

/// Parse a sort specification like `id: ASC,name: DESC`.
///
/// Whitespace around tokens is trimmed and directions are matched
/// case-insensitively. Parsing is best effort: segments that do not split
/// into exactly `field:direction`, or whose direction is unrecognized, are
/// dropped rather than reported.
pub fn parse_sort_str(sort_str: &str) -> Vec<SortOrder> {
    sort_str.split(',').filter_map(parse_sort_segment).collect()
}

fn parse_sort_segment(segment: &str) -> Option<SortOrder> {
    let mut tokens = segment.split(':');

    let field = tokens.next()?.trim();
    let direction_raw = tokens.next()?;

    if tokens.next().is_some() {
        return None;
    }

    if field.is_empty() {
        return None;
    }

    let direction = Direction::parse(direction_raw)?;

    Some(SortOrder {
        field: field.to_owned(),
        direction,
    })
}
