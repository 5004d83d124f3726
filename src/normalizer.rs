// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::Path;

use log::{debug, info};

use crate::dates::{date_field, is_excluded, normalize_date, parse_year, MinYear};
use crate::errors::DateFixError;
use crate::seq::fasta::{read_fasta_file, write_fasta_file};
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

/// Outcome of one pass: the records to write, plus what was counted on the way.
#[derive(Debug)]
pub struct DateFixReport {
    pub records: SeqFile,
    pub records_read: usize,
    pub records_skipped: usize,
    /// Earliest year among the kept records, or the seed if none is earlier.
    pub min_year: i32,
}

impl DateFixReport {
    pub fn records_written(&self) -> usize {
        self.records.len()
    }
}

/// Rewrites the date in one record's identifier. Returns `None` for records without a usable
/// date (`NA` or the excluded range); these do not touch `min_year`.
pub fn fix_record(
    record: SeqRecord,
    min_year: &mut MinYear,
) -> Result<Option<SeqRecord>, DateFixError> {
    let date = date_field(&record.id)?;
    if is_excluded(date) {
        debug!("Skipping {} (date '{}')", record.id, date);
        return Ok(None);
    }
    min_year.observe(parse_year(date)?);

    // Textual substitution: only the first occurrence of the date text changes, even when it
    // is not the date field itself.
    let id = record.id.replacen(date, &normalize_date(date), 1);
    Ok(Some(SeqRecord {
        description: id.clone(),
        id,
        sequence: record.sequence,
    }))
}

/// Fixes every record in memory. Stops at the first bad record.
pub fn fix_records(records: SeqFile, seed: i32) -> Result<DateFixReport, DateFixError> {
    let records_read = records.len();
    let mut min_year = MinYear::new(seed);
    let mut fixed: SeqFile = Vec::with_capacity(records_read);
    for record in records {
        if let Some(rec) = fix_record(record, &mut min_year)? {
            fixed.push(rec);
        }
    }
    Ok(DateFixReport {
        records_skipped: records_read - fixed.len(),
        records: fixed,
        records_read,
        min_year: min_year.value(),
    })
}

/// Reads `in_path`, normalizes dates and writes the kept records to `out_path` in one go. Nothing
/// is written if any record fails.
pub fn fix_rsv_dates<P: AsRef<Path>, Q: AsRef<Path>>(
    in_path: P,
    out_path: Q,
    min_year: i32,
) -> Result<DateFixReport, DateFixError> {
    let seq_file = read_fasta_file(&in_path)?;
    info!(
        "Read {} record(s) from {}",
        seq_file.len(),
        in_path.as_ref().display()
    );
    let report = fix_records(seq_file, min_year)?;
    write_fasta_file(&out_path, &report.records)?;
    info!(
        "Wrote {} record(s) to {}",
        report.records_written(),
        out_path.as_ref().display()
    );
    Ok(report)
}
