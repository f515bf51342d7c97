use super::{
    classify::LineClass,
    types::{BlockKey, FormattedBlock, KeyedBlock},
};

/// Phase 2 of formatting: turns classified lines into blocks.
///
/// The only cross-line state is the pending list accumulator.
pub struct BlockBuilder {
    list_items: Vec<String>,
    out: Vec<KeyedBlock>,
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            list_items: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, index: usize, class: LineClass<'_>) {
        match class {
            LineClass::Heading(text) => {
                self.flush_list(BlockKey::Line(index));
                self.emit(index, FormattedBlock::Heading(text.to_string()));
            }
            LineClass::ListItem(text) => self.list_items.push(text.to_string()),
            LineClass::Text(text) => {
                self.flush_list(BlockKey::Line(index));
                self.emit(index, FormattedBlock::Paragraph(text.to_string()));
            }
            LineClass::Blank => {}
        }
    }

    pub fn finish(mut self) -> Vec<KeyedBlock> {
        // EOF flush
        self.flush_list(BlockKey::Final);
        self.out
    }

    fn emit(&mut self, index: usize, block: FormattedBlock) {
        self.out.push(KeyedBlock {
            key: BlockKey::Line(index),
            block,
        });
    }

    fn flush_list(&mut self, key: BlockKey) {
        if self.list_items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.list_items);
        self.out.push(KeyedBlock {
            key,
            block: FormattedBlock::List(items),
        });
    }
}
