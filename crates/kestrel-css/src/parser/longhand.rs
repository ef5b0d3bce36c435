//! Parsers that set exactly the property they were invoked for.

use crate::error::ParseResult;
use crate::style::{ComputedValue, PropertyName};
use crate::tokenizer::TokenStream;

use super::{ChangeSet, PropertyParser};

/// Reads a complete value for one longhand.
pub(super) type ValueReader = fn(&mut TokenStream<'_>) -> ParseResult<ComputedValue>;

/// One value grammar shared by several similarly shaped longhands.
///
/// `margin-top` through `margin-left` are served by a single instance; the
/// declared name picks the slot that gets written.
pub struct LonghandParser {
    names: &'static [PropertyName],
    read: ValueReader,
}

impl LonghandParser {
    pub(super) const fn new(names: &'static [PropertyName], read: ValueReader) -> Self {
        Self { names, read }
    }
}

impl PropertyParser for LonghandParser {
    fn names(&self) -> &'static [PropertyName] {
        self.names
    }

    fn parse(&self, name: PropertyName, stream: &mut TokenStream<'_>) -> ParseResult<ChangeSet> {
        let value = (self.read)(stream)?;
        Ok(vec![(name, value)])
    }
}
