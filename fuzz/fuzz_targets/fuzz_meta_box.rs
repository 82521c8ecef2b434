// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use libfuzzer_sys::fuzz_target;
use themekit::domain::{Field, InputKind, MetaBox};
use themekit::services::form::{FormContext, MemoryMetaStore, MetaStore};
use themekit::services::meta_box::MetaBoxRenderer;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = std::str::from_utf8(data) else {
        return;
    };

    let meta_box = MetaBox::new(
        "Fuzz Box",
        "fuzz",
        vec![
            Field::new("text", InputKind::Text),
            Field::new(
                "choice",
                InputKind::Select {
                    options: vec![value.to_string()],
                },
            ),
            Field::new("upload", InputKind::File),
        ],
    );

    let mut store = MemoryMetaStore::new();
    for name in meta_box.field_names() {
        store.update(1, &name, value);
    }

    let renderer = MetaBoxRenderer::new().unwrap();
    let mut form = FormContext::new();
    let html = renderer.render(&meta_box, 1, &store, &mut form).unwrap();
    assert!(!html.contains("<script"));
});
