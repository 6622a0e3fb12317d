//! # Mailforge HTML Compiler
//!
//! Pure serialization of a block list + email settings into a complete,
//! email-client-safe HTML document. Structural layout is tables only
//! (flex/grid are unreliable across email clients) and every layout-critical
//! rule is inlined. Serialization is total (unknown kinds degrade to a
//! visible placeholder) and deterministic: identical inputs produce
//! byte-identical documents across calls and process restarts.

mod compiler;

#[cfg(test)]
mod tests;

pub use compiler::{serialize_block, serialize_document};
