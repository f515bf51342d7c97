//! # Content Formatting
//!
//! Converts the restricted markdown-like content format into structured
//! blocks. The format has three constructs:
//!
//! - `## Heading` lines
//! - `- item` lines, coalesced into one list per run
//! - any other non-empty line, which becomes its own paragraph
//!
//! There is no nesting, no inline markup and no escaping.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line becomes a
//!    `LineClass` by prefix test
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the pending
//!    list and emits `KeyedBlock`s in input order
//!
//! Formatting is total and deterministic: any input produces a block list,
//! and equal inputs produce equal lists including keys.

pub mod builder;
pub mod classify;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{ContentLineClassifier, LineClass, trim_content};
pub use types::{BlockKey, FormattedBlock, KeyedBlock};

/// Formats restricted-markdown content into keyed blocks.
pub fn format(raw: &str) -> Vec<KeyedBlock> {
    let classifier = ContentLineClassifier;
    let mut builder = BlockBuilder::new();

    let trimmed = trim_content(raw);
    if trimmed.is_empty() {
        return vec![];
    }

    for (index, line) in trimmed.split('\n').enumerate() {
        builder.push(index, classifier.classify(line));
    }

    builder.finish()
}

/// Formats content and drops the keys.
pub fn format_blocks(raw: &str) -> Vec<FormattedBlock> {
    format(raw).into_iter().map(|keyed| keyed.block).collect()
}
