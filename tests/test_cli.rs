// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use std::process::Command;

use crate::common::utils;

fn vipr_dates() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vipr-dates"))
}

#[test]
fn success_exits_zero() {
    let out = utils::temp_out("cli-ok");
    let status = vipr_dates()
        .arg("--in_fasta")
        .arg("tests/data/vipr_sample.fasta")
        .arg("--out_fasta")
        .arg(&out)
        .status()
        .expect("run binary");
    assert!(status.success());
    let text = utils::read_text(&out);
    assert_eq!(
        utils::headers(&text),
        vec![
            "gi|1001|gb|2015-06-12|RSV/A|USA",
            "gi|1002|gb|2015-06-XX|RSV/A|USA",
            "gi|1004|gb|1987-XX-XX|RSV/B|USA",
            "gi|1006|gb|2003-02-XX|RSV/B|ARG",
        ]
    );
    std::fs::remove_file(&out).ok();
}

#[test]
fn missing_out_fasta_is_usage_error() {
    let output = vipr_dates()
        .arg("--in_fasta")
        .arg("tests/data/vipr_sample.fasta")
        .output()
        .expect("run binary");
    // clap usage errors exit with 2
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--out_fasta"));
}

#[test]
fn malformed_input_exits_nonzero() {
    let out = utils::temp_out("cli-malformed");
    let status = vipr_dates()
        .arg("--in_fasta")
        .arg("tests/data/malformed.fasta")
        .arg("--out_fasta")
        .arg(&out)
        .status()
        .expect("run binary");
    assert!(!status.success());
    assert!(!out.exists());
}

#[test]
fn missing_input_exits_nonzero() {
    let out = utils::temp_out("cli-missing");
    let status = vipr_dates()
        .arg("--in_fasta")
        .arg("tests/data/no-such-file.fasta")
        .arg("--out_fasta")
        .arg(&out)
        .status()
        .expect("run binary");
    assert!(!status.success());
}

#[test]
fn unwritable_output_exits_nonzero() {
    let out = std::env::temp_dir()
        .join("vipr-dates-no-such-dir")
        .join("cli-out.fasta");
    let status = vipr_dates()
        .arg("--in_fasta")
        .arg("tests/data/vipr_sample.fasta")
        .arg("--out_fasta")
        .arg(&out)
        .status()
        .expect("run binary");
    assert!(!status.success());
    assert!(!out.exists());
}
