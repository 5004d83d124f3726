// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

/// A fresh output path under the system temp dir; any stale file there is removed first.
#[allow(dead_code)]
pub fn temp_out(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("vipr-dates-{}-{}.fasta", std::process::id(), name));
    std::fs::remove_file(&path).ok();
    path
}

#[allow(dead_code)]
pub fn read_text(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read output")
}

/// Headers (without '>') of a FastA text, in order.
#[allow(dead_code)]
pub fn headers(text: &str) -> Vec<&str> {
    text.lines().filter_map(|l| l.strip_prefix('>')).collect()
}
