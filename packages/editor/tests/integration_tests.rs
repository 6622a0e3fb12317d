//! Integration tests for the engine facade

use mailforge_editor::{
    BlockContent, BlockPatch, EmailEngine, InitialContent, Modifiers, SettingsPatch, UploadTarget,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

fn init_tracing() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

#[test]
fn test_engine_lifecycle() -> anyhow::Result<()> {
    init_tracing();
    let mut engine = EmailEngine::new("campaign-1");

    assert!(engine.blocks().is_empty());
    assert!(!engine.can_undo());

    let id = engine.add_block("button", 0)?;
    assert_eq!(engine.blocks().len(), 1);
    assert_eq!(engine.selected_id(), Some(id.as_str()));
    assert!(engine.can_undo());

    let html = engine.html();
    assert!(html.contains("Kliknij tutaj"));
    assert!(html.contains("#ec4899"));
    Ok(())
}

#[test]
fn test_initial_html_starts_empty() {
    init_tracing();
    let engine = EmailEngine::from_initial(
        "campaign-1",
        InitialContent::Html("<p>stare treści</p>".to_string()),
    );

    // HTML is not parsed back into blocks; the wrapper is still complete.
    assert!(engine.blocks().is_empty());
    assert!(engine.html().contains("<!DOCTYPE html>"));
}

#[test]
fn test_callbacks_fire_after_each_commit() {
    init_tracing();
    let mut engine = EmailEngine::new("campaign-1");

    let htmls: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let block_counts: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));

    let htmls_sink = Rc::clone(&htmls);
    engine.set_on_change(move |html| htmls_sink.borrow_mut().push(html.to_string()));
    let counts_sink = Rc::clone(&block_counts);
    engine.set_on_blocks_change(move |blocks| counts_sink.borrow_mut().push(blocks.len()));

    engine.add_block("text", 0).unwrap();
    engine.add_block("button", 1).unwrap();
    engine.undo();

    assert_eq!(block_counts.borrow().as_slice(), &[1, 2, 1]);
    assert_eq!(htmls.borrow().len(), 3);
    assert!(htmls.borrow()[1].contains("Kliknij tutaj"));
    assert!(!htmls.borrow()[2].contains("Kliknij tutaj"));
}

#[test]
fn test_live_edits_do_not_notify_until_commit() {
    init_tracing();
    let mut engine = EmailEngine::new("campaign-1");
    let id = engine.add_block("button", 0).unwrap();

    let notifications = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&notifications);
    engine.set_on_change(move |_| *sink.borrow_mut() += 1);

    // Slider-style burst of live edits.
    for radius in [2.0, 4.0, 6.0, 8.0] {
        engine.update_block(&id, BlockPatch::BorderRadius(radius));
    }
    assert_eq!(*notifications.borrow(), 0);

    engine.commit();
    assert_eq!(*notifications.borrow(), 1);

    // One snapshot for the whole burst.
    engine.undo();
    assert_eq!(engine.blocks()[0].style.border_radius, 0.0);
}

#[test]
fn test_undo_redo_are_exact_inverses() {
    init_tracing();
    let mut engine = EmailEngine::new("campaign-1");
    engine.add_block("text", 0).unwrap();

    let before = engine.blocks().to_vec();
    engine.add_block("divider", 1).unwrap();
    let after = engine.blocks().to_vec();

    assert!(engine.undo());
    assert_eq!(engine.blocks(), before.as_slice());

    assert!(engine.redo());
    assert_eq!(engine.blocks(), after.as_slice());

    // Boundaries are no-ops.
    assert!(!engine.redo());
    engine.undo();
    engine.undo();
    assert!(!engine.undo());
}

#[test]
fn test_ids_stay_unique_across_add_duplicate_paste() {
    init_tracing();
    let mut engine = EmailEngine::new("campaign-1");

    let a = engine.add_block("text", 0).unwrap();
    let b = engine.add_block("button", 1).unwrap();
    engine.duplicate_block(&a).unwrap();
    engine.copy_block(&b);
    engine.paste().unwrap();
    engine.paste().unwrap();
    engine.undo();
    engine.add_block("spacer", 0).unwrap();

    let mut ids: Vec<&str> = engine.blocks().iter().map(|b| b.id.as_str()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_paste_inserts_after_selection_and_repeats() {
    init_tracing();
    let mut engine = EmailEngine::new("campaign-1");
    let a = engine.add_block("text", 0).unwrap();
    engine.add_block("divider", 1).unwrap();

    engine.copy_block(&a);
    engine.select(Some(a.as_str()));

    let first = engine.paste().unwrap();
    assert_eq!(engine.blocks()[1].id, first);
    assert_eq!(engine.selected_id(), Some(first.as_str()));

    // Slot survives; pasting again duplicates the same source.
    let second = engine.paste().unwrap();
    assert_ne!(first, second);
    assert_eq!(engine.blocks()[2].id, second);
    assert_eq!(engine.blocks().len(), 4);
}

#[test]
fn test_keyboard_surface() {
    init_tracing();
    let mut engine = EmailEngine::new("campaign-1");
    let id = engine.add_block("button", 0).unwrap();

    // Alt+Down / Alt+Up move the selection.
    engine.add_block("text", 1).unwrap();
    engine.select(Some(id.as_str()));
    assert!(engine.handle_key("ArrowDown", Modifiers::ALT));
    assert_eq!(engine.blocks()[1].id, id);
    assert!(engine.handle_key("ArrowUp", Modifiers::ALT));
    assert_eq!(engine.blocks()[0].id, id);

    // Ctrl+D duplicates, Ctrl+Z undoes it.
    assert!(engine.handle_key("d", Modifiers::CTRL));
    assert_eq!(engine.blocks().len(), 3);
    assert!(engine.handle_key("z", Modifiers::CTRL));
    assert_eq!(engine.blocks().len(), 2);

    // Escape clears selection, Delete then does nothing.
    assert!(engine.handle_key("Escape", Modifiers::NONE));
    assert_eq!(engine.selected_id(), None);
    assert!(engine.handle_key("Delete", Modifiers::NONE));
    assert_eq!(engine.blocks().len(), 2);

    // With a selection, Delete removes.
    let id = engine.blocks()[0].id.clone();
    engine.select(Some(id.as_str()));
    assert!(engine.handle_key("Backspace", Modifiers::NONE));
    assert_eq!(engine.blocks().len(), 1);
}

#[test]
fn test_text_edit_session_is_exclusive() {
    init_tracing();
    let mut engine = EmailEngine::new("campaign-1");
    let a = engine.add_block("text", 0).unwrap();
    let b = engine.add_block("heading", 1).unwrap();

    assert!(engine.begin_text_edit(&a));
    engine.update_draft("<p>Nowa treść</p>");

    // Switching blocks commits and closes the first session.
    assert!(engine.begin_text_edit(&b));
    assert_eq!(engine.edit_session().unwrap().block_id, b);
    match &engine.blocks()[0].content {
        BlockContent::Text { html } => assert_eq!(html, "<p>Nowa treść</p>"),
        other => panic!("expected text, got {:?}", other),
    }

    // Escape while editing closes the session and consumes the key.
    engine.update_draft("Nowy tytuł");
    assert!(engine.handle_key("Escape", Modifiers::NONE));
    assert!(engine.edit_session().is_none());
    match &engine.blocks()[1].content {
        BlockContent::Heading { html, .. } => assert_eq!(html, "Nowy tytuł"),
        other => panic!("expected heading, got {:?}", other),
    }

    // Other keys while editing belong to the text field.
    engine.begin_text_edit(&a);
    assert!(!engine.handle_key("Delete", Modifiers::NONE));
    assert_eq!(engine.blocks().len(), 2);
}

#[test]
fn test_upload_completion_paths() {
    init_tracing();
    let mut engine = EmailEngine::new("campaign-1");
    let id = engine.add_block("image", 0).unwrap();

    // Success writes through the ordinary update + commit path.
    engine
        .finish_upload(&id, UploadTarget::ImageSrc, Ok("https://cdn.example.com/a.jpg".into()))
        .unwrap();
    match &engine.blocks()[0].content {
        BlockContent::Image { src, .. } => assert_eq!(src, "https://cdn.example.com/a.jpg"),
        other => panic!("expected image, got {:?}", other),
    }
    assert!(engine.undo());

    // Failure is surfaced and the field stays unchanged.
    let err = engine
        .finish_upload(&id, UploadTarget::ImageSrc, Err("przekroczono limit".into()))
        .unwrap_err();
    assert!(err.to_string().contains("przekroczono limit"));
    match &engine.blocks()[0].content {
        BlockContent::Image { src, .. } => assert_eq!(src, ""),
        other => panic!("expected image, got {:?}", other),
    }

    // A late completion for a deleted block no-ops instead of recreating it.
    engine.remove_block(&id);
    engine
        .finish_upload(&id, UploadTarget::ImageSrc, Ok("https://cdn.example.com/b.jpg".into()))
        .unwrap();
    assert!(engine.blocks().is_empty());
}

#[test]
fn test_settings_update_reaches_document() {
    init_tracing();
    let mut engine = EmailEngine::new("campaign-1");

    let htmls: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&htmls);
    engine.set_on_change(move |html| sink.borrow_mut().push(html.to_string()));

    engine.update_settings(SettingsPatch::ContentWidth(720));
    engine.update_settings(SettingsPatch::FontFamily("Georgia, serif".to_string()));

    assert_eq!(engine.settings().content_width, 720);
    assert_eq!(htmls.borrow().len(), 2);
    assert!(htmls.borrow()[1].contains("max-width: 720px"));
    assert!(htmls.borrow()[1].contains("Georgia, serif"));
}
