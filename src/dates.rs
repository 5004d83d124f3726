// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Collection dates as deposited in ViPR FastA identifiers, e.g. `2015_06_12`, `2015_06`,
//! `2015`, or `NA`, and their rewriting to `YYYY-MM-DD` with `XX` for unknown parts.

use crate::errors::DateFixError;

/// 0-based position of the date among the identifier's '|'-separated fields.
pub const DATE_FIELD_INDEX: usize = 3;

/// No date recorded.
pub const MISSING_DATE: &str = "NA";

/// A known-bad range deposited upstream; such records are dropped like `NA`.
pub const EXCLUDED_DATE: &str = "May_2016/Dec_2017";

/// Stands in for an unknown month or day.
pub const PLACEHOLDER: &str = "XX";

/// Seed for the earliest-year accumulator.
pub const DEFAULT_MIN_YEAR: i32 = 2000;

const YEAR_LEN: usize = 4;
const FULL_DATE_LEN: usize = 10;

/// Returns the raw date field of an identifier.
pub fn date_field(id: &str) -> Result<&str, DateFixError> {
    id.split('|')
        .nth(DATE_FIELD_INDEX)
        .ok_or_else(|| DateFixError::Format {
            id: String::from(id),
            fields: id.split('|').count(),
        })
}

pub fn is_excluded(date: &str) -> bool {
    date == MISSING_DATE || date == EXCLUDED_DATE
}

/// Parses the year from the first (up to) four characters of a date.
pub fn parse_year(date: &str) -> Result<i32, DateFixError> {
    let end = date
        .char_indices()
        .nth(YEAR_LEN)
        .map_or(date.len(), |(i, _)| i);
    date[..end].parse::<i32>().map_err(|_| DateFixError::Parse {
        date: String::from(date),
    })
}

/// Rewrites a raw date to the `YYYY-MM-DD` shape.
pub fn normalize_date(date: &str) -> String {
    if date.chars().count() == YEAR_LEN {
        return format!("{}-{}-{}", date, PLACEHOLDER, PLACEHOLDER);
    }
    let mut formatted = date.replace('_', "-");
    // Year-month only: pad the day
    if formatted.chars().count() != FULL_DATE_LEN {
        formatted.push('-');
        formatted.push_str(PLACEHOLDER);
    }
    formatted
}

/// Earliest year seen so far. Never increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinYear(i32);

impl MinYear {
    pub fn new(seed: i32) -> Self {
        MinYear(seed)
    }

    pub fn observe(&mut self, year: i32) {
        self.0 = self.0.min(year);
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl Default for MinYear {
    fn default() -> Self {
        MinYear::new(DEFAULT_MIN_YEAR)
    }
}
