use crate::{serialize_block, serialize_document};
use mailforge_blocks::{
    Block, BlockContent, BlockRegistry, BlockStyle, EmailSettings, Shadow, ShadowDirection,
};

fn block(kind: &str) -> Block {
    let (content, style) = BlockRegistry::default_block(kind).unwrap();
    Block::new(format!("test-{}", kind), content, style)
}

#[test]
fn test_empty_document_is_still_complete() {
    let html = serialize_document(&[], &EmailSettings::default());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<body"));
    assert!(html.contains("<table"));
    assert!(html.contains("max-width: 600px"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_document_is_deterministic() {
    let blocks = vec![block("header"), block("text"), block("button")];
    let settings = EmailSettings::default();

    let first = serialize_document(&blocks, &settings);
    let second = serialize_document(&blocks, &settings);
    assert_eq!(first, second);

    // Separately constructed equal inputs too, not just repeated calls.
    let rebuilt = vec![block("header"), block("text"), block("button")];
    assert_eq!(first, serialize_document(&rebuilt, &settings));
}

#[test]
fn test_default_button_renders_as_anchor() {
    let html = serialize_block(&block("button"));

    println!("Generated HTML:\n{}", html);

    assert!(html.contains("<a href=\"#\""));
    assert!(html.contains("Kliknij tutaj"));
    assert!(html.contains("background-color: #ec4899"));
    assert!(!html.contains("<button"));
}

#[test]
fn test_columns_use_a_table_not_flex() {
    let html = serialize_block(&block("columns"));

    assert!(html.contains("<table"));
    assert!(html.contains("<td width=\"50%\""));
    assert!(html.contains("Lewa kolumna"));
    assert!(html.contains("Prawa kolumna"));
    assert!(!html.contains("display: flex"));
    assert!(!html.contains("display: grid"));
}

#[test]
fn test_empty_image_gets_placeholder() {
    let html = serialize_block(&block("image"));
    assert!(html.contains("placehold.co"));
    assert!(!html.contains("src=\"\""));
}

#[test]
fn test_image_with_source_and_link() {
    let mut b = block("image");
    b.content = BlockContent::Image {
        src: "https://example.com/photo.jpg".to_string(),
        alt: "Zdjęcie".to_string(),
        link_url: "https://example.com".to_string(),
        width_pct: 80,
    };

    let html = serialize_block(&b);
    assert!(html.contains("src=\"https://example.com/photo.jpg\""));
    assert!(html.contains("<a href=\"https://example.com\">"));
    assert!(html.contains("width: 80%"));
    assert!(!html.contains("placehold.co"));
}

#[test]
fn test_video_without_thumbnail_degrades() {
    let html = serialize_block(&block("video"));
    assert!(html.contains("placehold.co"));
}

#[test]
fn test_social_fixed_order_and_omission() {
    let mut b = block("social");
    b.content = BlockContent::Social {
        facebook: String::new(),
        instagram: "https://instagram.com/parafia".to_string(),
        youtube: "https://youtube.com/@parafia".to_string(),
        twitter: String::new(),
    };

    let html = serialize_block(&b);
    let instagram = html.find("instagram.com").unwrap();
    let youtube = html.find("youtube.com").unwrap();
    assert!(instagram < youtube);
    assert!(!html.contains("Facebook"));
    assert!(!html.contains("Twitter"));
}

#[test]
fn test_social_with_no_links_emits_placeholder() {
    let html = serialize_block(&block("social"));
    assert!(html.contains("Brak skonfigurowanych linków"));
}

#[test]
fn test_unknown_kind_emits_visible_placeholder() {
    let b = Block::new(
        "test-unknown",
        BlockContent::Unknown {
            kind: "countdown".to_string(),
        },
        BlockStyle::default(),
    );

    let html = serialize_block(&b);
    assert!(html.contains("[unknown block: countdown]"));

    // And the document as a whole still serializes.
    let doc = serialize_document(&[b], &EmailSettings::default());
    assert!(doc.contains("[unknown block: countdown]"));
}

#[test]
fn test_plain_text_fields_are_escaped() {
    let mut b = block("button");
    b.content = BlockContent::Button {
        label: "Kup <teraz> & oszczędź".to_string(),
        url: "#".to_string(),
        color: "#ec4899".to_string(),
        text_color: "#ffffff".to_string(),
    };

    let html = serialize_block(&b);
    assert!(html.contains("Kup &lt;teraz&gt; &amp; oszczędź"));
}

#[test]
fn test_rich_text_passes_through() {
    let mut b = block("text");
    b.content = BlockContent::Text {
        html: "<p>Witamy <strong>serdecznie</strong></p>".to_string(),
    };

    let html = serialize_block(&b);
    assert!(html.contains("<strong>serdecznie</strong>"));
}

#[test]
fn test_block_style_reaches_fragment() {
    let mut b = block("text");
    b.style.background.set_color("#fef3c7");
    b.style.shadow = Shadow {
        enabled: true,
        offset_y: 6.0,
        direction: ShadowDirection::Bottom,
        ..Shadow::default()
    };

    let html = serialize_block(&b);
    assert!(html.contains("background-color: #fef3c7"));
    assert!(html.contains("box-shadow: 0px 6px"));
}

#[test]
fn test_document_has_mso_conditional() {
    let html = serialize_document(&[], &EmailSettings::default());
    assert!(html.contains("<!--[if mso]>"));
    assert!(html.contains("<![endif]-->"));
    assert!(html.contains("border-collapse: collapse"));
}

#[test]
fn test_settings_flow_into_wrapper() {
    let settings = EmailSettings {
        background_color: "#111827".to_string(),
        content_background: "#1f2937".to_string(),
        content_width: 720,
        font_family: "Georgia, serif".to_string(),
    };

    let html = serialize_document(&[block("text")], &settings);
    assert!(html.contains("background-color: #111827"));
    assert!(html.contains("max-width: 720px"));
    assert!(html.contains("font-family: Georgia, serif"));
}

#[test]
fn test_footer_carries_unsubscribe_merge_tag() {
    let html = serialize_block(&block("footer"));
    assert!(html.contains("{{unsubscribe_url}}"));
    assert!(html.contains("Wypisz się"));
}
