// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::warn;

use crate::errors::DateFixError;
use crate::seq::file::SeqFile;
use crate::seq::record::SeqRecord;

/// Residues per sequence line on output.
pub const FASTA_LINE_WIDTH: usize = 60;

/// Splits a header (without the '>') into identifier and description.
pub fn parse_header(hdr: &str) -> (String, String) {
    let description = hdr.trim_end();
    let id = description.split_whitespace().next().unwrap_or("");
    (String::from(id), String::from(description))
}

pub fn read_fasta<R: BufRead>(reader: R) -> io::Result<SeqFile> {
    let mut result: SeqFile = Vec::new();
    let mut current_record: Option<SeqRecord> = None;
    let mut stray_lines = 0;

    for line in reader.lines() {
        let l = line?;
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some(record) = current_record.take() {
                result.push(record);
            }
            let (id, description) = parse_header(hdr);
            current_record = Some(SeqRecord {
                id,
                description,
                sequence: String::new(),
            });
        } else if let Some(record) = current_record.as_mut() {
            record
                .sequence
                .extend(l.chars().filter(|c| !c.is_whitespace()));
        } else if !l.trim().is_empty() {
            stray_lines += 1;
        }
    }
    if let Some(record) = current_record {
        result.push(record);
    }
    if stray_lines > 0 {
        warn!("Ignored {} line(s) before the first FastA header", stray_lines);
    }
    Ok(result)
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<SeqFile, DateFixError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DateFixError::file(path, e))?;
    read_fasta(BufReader::new(file)).map_err(|e| DateFixError::file(path, e))
}

fn header_line(record: &SeqRecord) -> String {
    let desc = record.description.as_str();
    if desc.is_empty() {
        record.id.clone()
    } else if desc.split_whitespace().next() == Some(record.id.as_str()) {
        String::from(desc)
    } else {
        format!("{} {}", record.id, desc)
    }
}

/// Splits `seq` into lines of at most `width` characters (not bytes).
fn wrap_chars(seq: &str, width: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (n, (i, _)) in seq.char_indices().enumerate() {
        if n > 0 && n % width == 0 {
            lines.push(&seq[start..i]);
            start = i;
        }
    }
    if start < seq.len() {
        lines.push(&seq[start..]);
    }
    lines
}

pub fn write_fasta<W: Write>(writer: &mut W, records: &[SeqRecord]) -> io::Result<()> {
    for record in records {
        writeln!(writer, ">{}", header_line(record))?;
        for line in wrap_chars(&record.sequence, FASTA_LINE_WIDTH) {
            writeln!(writer, "{}", line)?;
        }
    }
    Ok(())
}

pub fn write_fasta_file<P: AsRef<Path>>(
    path: P,
    records: &[SeqRecord],
) -> Result<(), DateFixError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DateFixError::file(path, e))?;
    let mut writer = BufWriter::new(file);
    write_fasta(&mut writer, records)
        .and_then(|_| writer.flush())
        .map_err(|e| DateFixError::file(path, e))
}
