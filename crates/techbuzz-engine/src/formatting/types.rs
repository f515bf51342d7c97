use std::fmt;

/// One structured block of formatted content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedBlock {
    /// A section heading (`## ` line).
    Heading(String),
    /// A single line of body text.
    Paragraph(String),
    /// A run of `- ` lines, coalesced in order.
    List(Vec<String>),
}

impl FormattedBlock {
    /// Short element-style tag used when building render keys.
    pub fn tag(&self) -> &'static str {
        match self {
            FormattedBlock::Heading(_) => "h2",
            FormattedBlock::Paragraph(_) => "p",
            FormattedBlock::List(_) => "ul",
        }
    }
}

/// Position that emitted a block.
///
/// Keys come from line indices of the trimmed input, so the same input always
/// produces the same keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKey {
    /// Emitted while processing the line at this index.
    Line(usize),
    /// List flushed after the last line.
    Final,
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKey::Line(index) => write!(f, "{index}"),
            BlockKey::Final => f.write_str("final"),
        }
    }
}

/// A block together with its stable position key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedBlock {
    pub key: BlockKey,
    pub block: FormattedBlock,
}

impl KeyedBlock {
    /// Key unique within one formatting pass, e.g. `h2-0`, `ul-4`, `ul-final`.
    pub fn render_key(&self) -> String {
        format!("{}-{}", self.block.tag(), self.key)
    }
}
