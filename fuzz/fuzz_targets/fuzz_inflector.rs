// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;
use themekit::services::inflector::{pluralize, singularize};

fuzz_target!(|data: &[u8]| {
    if let Ok(word) = std::str::from_utf8(data) {
        // `$` catch-all: the English tables always produce a plural
        assert!(pluralize(word).is_ok());
        let _ = singularize(word);
    }
});
