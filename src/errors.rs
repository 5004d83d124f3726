// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum DateFixError {
    /// Input missing or unreadable, or output unwritable.
    File {
        path: PathBuf,
        source: io::Error,
    },
    /// Identifier has too few '|'-separated fields to hold a date.
    Format { id: String, fields: usize },
    /// Leading year digits of a date are not an integer.
    Parse { date: String },
}

impl DateFixError {
    pub fn file<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        DateFixError::File {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for DateFixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFixError::File { path, source } => {
                write!(f, "File error: {}: {}", path.display(), source)
            }
            DateFixError::Format { id, fields } => write!(
                f,
                "Format error: identifier '{}' has {} '|'-separated field(s), need at least {}",
                id,
                fields,
                crate::dates::DATE_FIELD_INDEX + 1
            ),
            DateFixError::Parse { date } => {
                write!(f, "Parse error: no integer year at the start of date '{}'", date)
            }
        }
    }
}

impl error::Error for DateFixError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            DateFixError::File { source, .. } => Some(source),
            _ => None,
        }
    }
}
