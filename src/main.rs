// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use vipr_dates::errors::DateFixError;

fn main() -> Result<(), DateFixError> {
    vipr_dates::run()
}
