//! # Style Resolver
//!
//! `resolve_style` maps a block's style fields to presentation CSS.
//!
//! Resolution order: alignment → padding/margin → background (gradient >
//! image > color, first non-empty wins) → opacity → border-radius → border →
//! box-shadow. The shadow-direction mapping must stay exactly as existing
//! visual templates expect it, including the 4px blur floor on the
//! two-layer directions.

use crate::spacing::{clamp_px, px, spacing_css};
use mailforge_blocks::{BlockStyle, GradientKind, Shadow, ShadowDirection};
use serde::Serialize;

/// Ordered CSS declarations for one block.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResolvedStyle {
    declarations: Vec<(String, String)>,
}

impl ResolvedStyle {
    fn push(&mut self, property: &str, value: impl Into<String>) {
        self.declarations.push((property.to_string(), value.into()));
    }

    pub fn declarations(&self) -> &[(String, String)] {
        &self.declarations
    }

    /// Value of the first declaration for `property`, if any.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Render as an inline `style` attribute value.
    pub fn to_inline_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{}: {}", p, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Resolve a block style to presentation CSS. Pure and total: malformed
/// numeric values clamp, nothing errors.
pub fn resolve_style(style: &BlockStyle) -> ResolvedStyle {
    let mut out = ResolvedStyle::default();

    out.push("text-align", style.align.as_css());
    out.push("padding", spacing_css(&style.padding));
    out.push("margin", spacing_css(&style.margin));

    // First non-empty alternative wins: gradient, then image, then color.
    let bg = &style.background;
    if let Some(gradient) = &bg.gradient {
        let value = match gradient.kind {
            GradientKind::Linear => format!(
                "linear-gradient({}deg, {}, {})",
                gradient.angle, gradient.from, gradient.to
            ),
            GradientKind::Radial => {
                format!("radial-gradient(circle, {}, {})", gradient.from, gradient.to)
            }
        };
        out.push("background", value);
    } else if !bg.image.is_empty() {
        out.push("background-image", format!("url('{}')", bg.image));
        out.push("background-size", "cover");
        out.push("background-position", "center");
        out.push("background-repeat", "no-repeat");
    } else if !bg.color.is_empty() && bg.color != "transparent" {
        out.push("background-color", bg.color.clone());
    }

    if bg.opacity < 100 {
        out.push("opacity", format!("{}", f64::from(bg.opacity) / 100.0));
    }

    let radius = clamp_px(style.border_radius);
    if radius > 0.0 {
        out.push("border-radius", px(radius));
    }

    let border = &style.border;
    if border.is_visible() {
        let width = clamp_px(border.width);
        let shorthand = format!("{} {} {}", px(width), border.style.as_css(), border.color);
        if border.sides.all() {
            out.push("border", shorthand);
        } else {
            if border.sides.top {
                out.push("border-top", shorthand.clone());
            }
            if border.sides.right {
                out.push("border-right", shorthand.clone());
            }
            if border.sides.bottom {
                out.push("border-bottom", shorthand.clone());
            }
            if border.sides.left {
                out.push("border-left", shorthand);
            }
        }
    }

    if style.shadow.enabled {
        out.push("box-shadow", shadow_css(&style.shadow));
    }

    out
}

/// Render the box-shadow value for a shadow spec.
///
/// `all` honors both offsets as configured. The four edge directions zero
/// the orthogonal axis and force the sign of the remaining one.
/// `horizontal`/`vertical` emit two mirrored layers with blur floored at
/// 4px so the effect stays visible at small blur settings.
pub fn shadow_css(shadow: &Shadow) -> String {
    let blur = clamp_px(shadow.blur);
    let layers: Vec<(f64, f64, f64)> = match shadow.direction {
        ShadowDirection::All => vec![(shadow.offset_x, shadow.offset_y, blur)],
        ShadowDirection::Bottom => vec![(0.0, shadow.offset_y.abs(), blur)],
        ShadowDirection::Top => vec![(0.0, -shadow.offset_y.abs(), blur)],
        ShadowDirection::Right => vec![(shadow.offset_x.abs(), 0.0, blur)],
        ShadowDirection::Left => vec![(-shadow.offset_x.abs(), 0.0, blur)],
        ShadowDirection::Horizontal => {
            let blur = blur.max(4.0);
            let x = shadow.offset_x.abs();
            vec![(x, 0.0, blur), (-x, 0.0, blur)]
        }
        ShadowDirection::Vertical => {
            let blur = blur.max(4.0);
            let y = shadow.offset_y.abs();
            vec![(0.0, y, blur), (0.0, -y, blur)]
        }
    };

    let spread = clamp_px(shadow.spread);
    let inset = if shadow.inset { "inset " } else { "" };
    layers
        .into_iter()
        .map(|(x, y, blur)| {
            format!(
                "{}{} {} {} {} {}",
                inset,
                px(x),
                px(y),
                px(blur),
                px(spread),
                shadow.color
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
