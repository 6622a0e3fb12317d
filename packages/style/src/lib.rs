//! # Mailforge Style
//!
//! Pure style resolution: block style fields → ordered CSS declarations.
//!
//! Used both by the live canvas preview and by the HTML compiler, so the
//! same block always looks the same in the editor and in the recipient's
//! inbox. Resolution is total (malformed values clamp instead of erroring)
//! and deterministic: declarations come out in a fixed order, never from a
//! map with unstable iteration.

mod resolver;
mod spacing;

pub use resolver::{resolve_style, ResolvedStyle};
pub use spacing::{clamp_px, px, spacing_css};
