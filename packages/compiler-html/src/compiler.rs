use mailforge_blocks::{Block, BlockContent, EmailSettings};
use mailforge_style::{clamp_px, px, resolve_style};
use tracing::warn;

/// Fallback art for image blocks without a source, so the document never
/// contains a broken `<img>`.
const IMAGE_PLACEHOLDER: &str = "https://placehold.co/600x300/e5e7eb/9ca3af?text=Obraz";
const VIDEO_PLACEHOLDER: &str = "https://placehold.co/600x338/1f2937/9ca3af?text=Film";

/// Merge tag the sending layer substitutes per recipient.
const UNSUBSCRIBE_MERGE_TAG: &str = "{{unsubscribe_url}}";

const ICON_FACEBOOK: &str = "https://cdn-icons-png.flaticon.com/32/733/733547.png";
const ICON_INSTAGRAM: &str = "https://cdn-icons-png.flaticon.com/32/2111/2111463.png";
const ICON_YOUTUBE: &str = "https://cdn-icons-png.flaticon.com/32/1384/1384060.png";
const ICON_TWITTER: &str = "https://cdn-icons-png.flaticon.com/32/733/733579.png";

struct Context {
    depth: usize,
    buffer: String,
}

impl Context {
    fn new() -> Self {
        Self {
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str("  ");
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn into_output(self) -> String {
        self.buffer
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serialize one block to an HTML fragment.
///
/// Dispatches on the content kind; unrecognized kinds emit a visible
/// placeholder rather than panicking or dropping the block. Rich-text
/// fields pass through as markup, plain-text fields are escaped.
pub fn serialize_block(block: &Block) -> String {
    let inner = match &block.content {
        BlockContent::Header { title, subtitle } => serialize_header(title, subtitle),
        BlockContent::Text { html } => html.clone(),
        BlockContent::Heading { html, level } => {
            let level = (*level).clamp(1, 6);
            format!("<h{} style=\"margin: 0;\">{}</h{}>", level, html, level)
        }
        BlockContent::Image {
            src,
            alt,
            link_url,
            width_pct,
        } => serialize_image(src, alt, link_url, *width_pct),
        BlockContent::Button {
            label,
            url,
            color,
            text_color,
        } => serialize_button(label, url, color, text_color),
        BlockContent::Divider { color, thickness } => format!(
            "<hr style=\"border: none; border-top: {} solid {}; margin: 0;\" />",
            px(clamp_px(*thickness)),
            color
        ),
        BlockContent::Spacer { height } => {
            let height = px(clamp_px(*height));
            format!(
                "<div style=\"height: {}; line-height: {}; font-size: 0;\">&nbsp;</div>",
                height, height
            )
        }
        BlockContent::Columns {
            left_html,
            right_html,
            gap,
        } => serialize_columns(left_html, right_html, *gap),
        BlockContent::Quote {
            html,
            cite,
            accent_color,
        } => serialize_quote(html, cite, accent_color),
        BlockContent::List { items, ordered } => serialize_list(items, *ordered),
        BlockContent::Video {
            video_url,
            thumbnail_url,
        } => serialize_video(video_url, thumbnail_url),
        BlockContent::Social {
            facebook,
            instagram,
            youtube,
            twitter,
        } => serialize_social(facebook, instagram, youtube, twitter),
        BlockContent::Footer {
            html,
            unsubscribe_label,
        } => serialize_footer(html, unsubscribe_label),
        BlockContent::Unknown { kind } => {
            warn!(kind = %kind, block_id = %block.id, "serializing unknown block kind as placeholder");
            format!(
                "<div style=\"padding: 16px; border: 1px dashed #d1d5db; color: #9ca3af; \
                 font-size: 12px; font-family: monospace; text-align: center;\">\
                 [unknown block: {}]</div>",
                escape_html(kind)
            )
        }
    };

    format!(
        "<div style=\"{}\">{}</div>",
        resolve_style(&block.style).to_inline_css(),
        inner
    )
}

fn serialize_header(title: &str, subtitle: &str) -> String {
    let mut out = format!(
        "<h1 style=\"margin: 0; font-size: 28px; line-height: 1.2;\">{}</h1>",
        escape_html(title)
    );
    if !subtitle.is_empty() {
        out.push_str(&format!(
            "<p style=\"margin: 8px 0 0; font-size: 16px; color: #6b7280;\">{}</p>",
            escape_html(subtitle)
        ));
    }
    out
}

fn serialize_image(src: &str, alt: &str, link_url: &str, width_pct: u8) -> String {
    let src = if src.is_empty() { IMAGE_PLACEHOLDER } else { src };
    let width = width_pct.clamp(1, 100);
    let img = format!(
        "<img src=\"{}\" alt=\"{}\" style=\"width: {}%; max-width: 100%; height: auto;\" />",
        escape_html(src),
        escape_html(alt),
        width
    );
    if link_url.is_empty() {
        img
    } else {
        format!("<a href=\"{}\">{}</a>", escape_html(link_url), img)
    }
}

// Anchor styled as a button: `<button>` and other form controls are
// stripped by many email clients.
fn serialize_button(label: &str, url: &str, color: &str, text_color: &str) -> String {
    format!(
        "<a href=\"{}\" style=\"display: inline-block; padding: 12px 32px; \
         background-color: {}; color: {}; text-decoration: none; font-weight: bold; \
         border-radius: 6px;\">{}</a>",
        escape_html(url),
        color,
        text_color,
        escape_html(label)
    )
}

// Two `<td>` cells, never flex/grid: CSS column layout is unreliable in
// email rendering engines.
fn serialize_columns(left_html: &str, right_html: &str, gap: f64) -> String {
    let half_gap = px(clamp_px(gap) / 2.0);
    format!(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" \
         border=\"0\"><tr>\
         <td width=\"50%\" valign=\"top\" style=\"padding-right: {};\">{}</td>\
         <td width=\"50%\" valign=\"top\" style=\"padding-left: {};\">{}</td>\
         </tr></table>",
        half_gap, left_html, half_gap, right_html
    )
}

fn serialize_quote(html: &str, cite: &str, accent_color: &str) -> String {
    let mut out = format!(
        "<blockquote style=\"margin: 0; padding: 12px 20px; border-left: 4px solid {}; \
         font-style: italic;\">{}",
        accent_color, html
    );
    if !cite.is_empty() {
        out.push_str(&format!(
            "<cite style=\"display: block; margin-top: 8px; font-size: 13px; \
             font-style: normal; color: #6b7280;\">&mdash; {}</cite>",
            escape_html(cite)
        ));
    }
    out.push_str("</blockquote>");
    out
}

fn serialize_list(items: &[String], ordered: bool) -> String {
    let tag = if ordered { "ol" } else { "ul" };
    let mut out = format!("<{} style=\"margin: 0; padding-left: 24px;\">", tag);
    for item in items {
        out.push_str(&format!(
            "<li style=\"margin: 4px 0;\">{}</li>",
            escape_html(item)
        ));
    }
    out.push_str(&format!("</{}>", tag));
    out
}

fn serialize_video(video_url: &str, thumbnail_url: &str) -> String {
    let thumbnail = if thumbnail_url.is_empty() {
        VIDEO_PLACEHOLDER
    } else {
        thumbnail_url
    };
    let img = format!(
        "<img src=\"{}\" alt=\"Film\" style=\"width: 100%; max-width: 100%; height: auto; \
         border-radius: 4px;\" />",
        escape_html(thumbnail)
    );
    if video_url.is_empty() {
        img
    } else {
        format!("<a href=\"{}\">{}</a>", escape_html(video_url), img)
    }
}

// Fixed network order; unset networks are omitted entirely.
fn serialize_social(facebook: &str, instagram: &str, youtube: &str, twitter: &str) -> String {
    let networks = [
        ("Facebook", ICON_FACEBOOK, facebook),
        ("Instagram", ICON_INSTAGRAM, instagram),
        ("YouTube", ICON_YOUTUBE, youtube),
        ("Twitter", ICON_TWITTER, twitter),
    ];

    let mut out = String::new();
    for (name, icon, url) in networks {
        if url.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "<a href=\"{}\" style=\"display: inline-block; margin: 0 6px;\">\
             <img src=\"{}\" alt=\"{}\" width=\"32\" height=\"32\" style=\"border: 0;\" /></a>",
            escape_html(url),
            icon,
            name
        ));
    }

    if out.is_empty() {
        return "<p style=\"margin: 0; font-size: 12px; color: #9ca3af;\">\
                Brak skonfigurowanych linków</p>"
            .to_string();
    }
    out
}

fn serialize_footer(html: &str, unsubscribe_label: &str) -> String {
    format!(
        "<div style=\"font-size: 12px; color: #6b7280;\">{}\
         <p style=\"margin: 8px 0 0;\"><a href=\"{}\" style=\"color: #6b7280; \
         text-decoration: underline;\">{}</a></p></div>",
        html,
        UNSUBSCRIBE_MERGE_TAG,
        escape_html(unsubscribe_label)
    )
}

/// Serialize the whole document: outer 100%-width centering table, inner
/// fixed-max-width content table, cosmetic `<style>` rules, and an
/// MSO-conditional block correcting Outlook table spacing. The full wrapper
/// is emitted even for an empty block list.
pub fn serialize_document(blocks: &[Block], settings: &EmailSettings) -> String {
    let mut ctx = Context::new();

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\" />");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />");
    ctx.add_line("<title></title>");
    ctx.add_line("<!--[if mso]>");
    ctx.add_line("<style type=\"text/css\">");
    ctx.add_line("table { border-collapse: collapse; }");
    ctx.add_line("td { mso-line-height-rule: exactly; }");
    ctx.add_line("</style>");
    ctx.add_line("<![endif]-->");
    // Cosmetic rules only; every layout-critical rule is inlined.
    ctx.add_line("<style type=\"text/css\">");
    ctx.indent();
    ctx.add_line("body { margin: 0; padding: 0; }");
    ctx.add_line("img { border: 0; line-height: 100%; vertical-align: middle; }");
    ctx.add_line("p { margin: 0 0 12px; }");
    ctx.add_line("p:last-child { margin-bottom: 0; }");
    ctx.dedent();
    ctx.add_line("</style>");
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line(&format!(
        "<body style=\"margin: 0; padding: 0; background-color: {};\">",
        settings.background_color
    ));
    ctx.indent();

    ctx.add_line(&format!(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" \
         border=\"0\" style=\"background-color: {};\">",
        settings.background_color
    ));
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();
    ctx.add_line("<td align=\"center\" style=\"padding: 24px 12px;\">");
    ctx.indent();

    ctx.add_line(&format!(
        "<table role=\"presentation\" width=\"{}\" cellpadding=\"0\" cellspacing=\"0\" \
         border=\"0\" style=\"width: 100%; max-width: {}px; background-color: {}; \
         font-family: {};\">",
        settings.content_width,
        settings.content_width,
        settings.content_background,
        settings.font_family
    ));
    ctx.indent();
    ctx.add_line("<tr>");
    ctx.indent();
    ctx.add_line("<td>");
    ctx.indent();

    for block in blocks {
        ctx.add_line(&serialize_block(block));
    }

    ctx.dedent();
    ctx.add_line("</td>");
    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");

    ctx.dedent();
    ctx.add_line("</td>");
    ctx.dedent();
    ctx.add_line("</tr>");
    ctx.dedent();
    ctx.add_line("</table>");

    ctx.dedent();
    ctx.add_line("</body>");
    ctx.dedent();
    ctx.add_line("</html>");

    ctx.into_output()
}
