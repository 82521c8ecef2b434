// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod helpers;

use themekit::domain::{Field, InputKind, MetaBox, is_image_url};
use themekit::services::form::{FormContext, MemoryMetaStore, MetaStore, Submission};
use themekit::services::meta_box::MetaBoxRenderer;

use helpers::movie_info_box;

fn render(meta_box: &MetaBox, store: &MemoryMetaStore) -> (String, FormContext) {
    let renderer = MetaBoxRenderer::new().unwrap();
    let mut form = FormContext::new();
    let html = renderer.render(meta_box, 1, store, &mut form).unwrap();
    (html, form)
}

fn single(field: Field) -> MetaBox {
    MetaBox::new("Movie Info", "movie", vec![field])
}

// ─── Naming ──────────────────────────────────────────────────────────────────

#[test]
fn ids_derive_from_title_and_label() {
    let meta_box = movie_info_box();
    assert_eq!(meta_box.id, "movie_info");
    assert_eq!(meta_box.post_type, "movie");
    assert_eq!(meta_box.context, "normal");
    assert_eq!(meta_box.priority, "default");
    assert_eq!(
        meta_box.field_names(),
        vec![
            "movie_info_name",
            "movie_info_rating",
            "movie_info_review",
            "movie_info_featured",
            "movie_info_profile_image",
        ]
    );
}

#[test]
fn image_detection_by_extension() {
    assert!(is_image_url("https://example.com/poster.jpg"));
    assert!(is_image_url("/uploads/POSTER.PNG"));
    assert!(is_image_url("a.jpeg"));
    assert!(!is_image_url("https://example.com/script.pdf"));
    assert!(!is_image_url(""));
}

// ─── Rendering ───────────────────────────────────────────────────────────────

#[test]
fn renders_empty_text_field() {
    let (html, _) = render(&single(Field::new("rating", InputKind::Text)), &MemoryMetaStore::new());
    assert_eq!(
        html,
        "<p>\n    <label>Rating:</label>\n    \
         <input type='text' name='movie_info_rating' value='' class='widefat' />\n</p>\n"
    );
}

#[test]
fn renders_stored_values() {
    let mut store = MemoryMetaStore::new();
    store.update(1, "movie_info_review", "Two thumbs up");
    store.update(1, "movie_info_name", "Alien");

    let (html, _) = render(&movie_info_box(), &store);
    assert!(html.contains("<input type='text' name='movie_info_name' value='Alien' class='widefat' />"));
    assert!(html.contains(
        "<textarea name='movie_info_review' class='widefat' rows='10'>Two thumbs up</textarea>"
    ));
    assert!(html.contains("<label>Profile Image:</label>"));
    assert!(html.contains("<input type='file' name='movie_info_profile_image' id='movie_info_profile_image' />"));
}

#[test]
fn stored_values_are_per_post() {
    let mut store = MemoryMetaStore::new();
    store.update(2, "movie_info_rating", "Alien");

    let (html, _) = render(&single(Field::new("rating", InputKind::Text)), &store);
    assert!(html.contains("value=''"));
}

#[test]
fn checkbox_checked_only_with_value() {
    let field = Field::new("featured", InputKind::Checkbox);

    let (html, _) = render(&single(field.clone()), &MemoryMetaStore::new());
    assert!(html.contains("<input type='checkbox' name='movie_info_featured' value='featured' />"));

    let mut store = MemoryMetaStore::new();
    store.update(1, "movie_info_featured", "featured");
    let (html, _) = render(&single(field), &store);
    insta::assert_snapshot!(
        html.lines().nth(2).unwrap().trim(),
        @"<input type='checkbox' name='movie_info_featured' value='featured' checked />"
    );
}

#[test]
fn select_marks_stored_option() {
    let mut store = MemoryMetaStore::new();
    store.update(1, "movie_info_rating", "PG");

    let (html, _) = render(&movie_info_box(), &store);
    assert!(html.contains("<select name='movie_info_rating' class='widefat'>"));
    assert!(html.contains("<option value='G'>G</option>"));
    assert!(html.contains("<option value='PG' selected='selected'>PG</option>"));
    assert!(html.contains("<option value='R'>R</option>"));
    assert_eq!(html.matches("selected='selected'").count(), 1);
}

#[test]
fn file_preview_image_or_link() {
    let field = Field::new("Profile Image", InputKind::File);

    let mut store = MemoryMetaStore::new();
    store.update(1, "movie_info_profile_image", "https://example.com/poster.jpg");
    let (html, _) = render(&single(field.clone()), &store);
    assert!(html.contains(
        "<p><img src='https://example.com/poster.jpg' alt='' style='max-width: 400px;' /></p>"
    ));

    let mut store = MemoryMetaStore::new();
    store.update(1, "movie_info_profile_image", "https://example.com/press.pdf");
    let (html, _) = render(&single(field.clone()), &store);
    assert!(html.contains(
        "<p><a href='https://example.com/press.pdf'>https://example.com/press.pdf</a></p>"
    ));

    let (html, _) = render(&single(field), &MemoryMetaStore::new());
    assert!(!html.contains("<img"));
    assert!(!html.contains("<a "));
}

#[test]
fn stored_values_are_escaped() {
    let mut store = MemoryMetaStore::new();
    store.update(1, "movie_info_rating", "<script>alert('x')</script>");

    let (html, _) = render(&single(Field::new("rating", InputKind::Text)), &store);
    assert!(!html.contains("<script>"));
    assert!(html.contains("value='&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;'"));
}

// ─── Form context and saving ─────────────────────────────────────────────────

#[test]
fn render_records_field_names_once() {
    let renderer = MetaBoxRenderer::new().unwrap();
    let store = MemoryMetaStore::new();
    let mut form = FormContext::new();
    let meta_box = movie_info_box();

    renderer.render(&meta_box, 1, &store, &mut form).unwrap();
    renderer.render(&meta_box, 1, &store, &mut form).unwrap();

    assert_eq!(form.names(), meta_box.field_names());
    assert!(form.fields().last().unwrap().is_file);
}

#[test]
fn save_writes_submitted_values() {
    let (_, form) = render(&movie_info_box(), &MemoryMetaStore::new());
    let mut store = MemoryMetaStore::new();
    let submission = Submission::new()
        .with_value("movie_info_name", "Alien")
        .with_value("movie_info_rating", "R")
        .with_value("movie_info_featured", "featured")
        .with_value("unrelated", "ignored");

    let written = form.save(&submission, 9, &mut store);

    // every field except the file input
    assert_eq!(written, 4);
    assert_eq!(store.get(9, "movie_info_name").as_deref(), Some("Alien"));
    assert_eq!(store.get(9, "movie_info_rating").as_deref(), Some("R"));
    assert_eq!(store.get(9, "movie_info_featured").as_deref(), Some("featured"));
    assert_eq!(store.get(9, "unrelated"), None);
    assert_eq!(store.get(9, "movie_info_profile_image"), None);
}

#[test]
fn save_clears_missing_fields() {
    let (_, form) = render(&movie_info_box(), &MemoryMetaStore::new());
    let mut store = MemoryMetaStore::new();
    store.update(9, "movie_info_featured", "featured");
    store.update(9, "movie_info_profile_image", "https://example.com/poster.jpg");

    form.save(&Submission::new(), 9, &mut store);

    // unchecked checkbox is not posted at all
    assert_eq!(store.get(9, "movie_info_featured").as_deref(), Some(""));
    assert_eq!(store.get(9, "movie_info_review").as_deref(), Some(""));
    assert_eq!(
        store.get(9, "movie_info_profile_image").as_deref(),
        Some("https://example.com/poster.jpg")
    );
}

#[test]
fn autosave_is_ignored() {
    let (_, form) = render(&movie_info_box(), &MemoryMetaStore::new());
    let mut store = MemoryMetaStore::new();

    let submission = Submission::new()
        .with_value("movie_info_name", "Alien")
        .autosave();
    assert_eq!(form.save(&submission, 9, &mut store), 0);
    assert!(store.is_empty());
}

#[test]
fn empty_context_saves_nothing() {
    let mut store = MemoryMetaStore::new();
    let submission = Submission::new().with_value("movie_info_name", "Alien");
    assert!(FormContext::new().is_empty());
    assert_eq!(FormContext::new().save(&submission, 9, &mut store), 0);
    assert_eq!(store.len(), 0);
}
