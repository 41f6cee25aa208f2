use std::{borrow::Cow, marker::PhantomData};

use crate::{
    ContentLineParser, LineReader, ParserError,
    component::{Component, ComponentMut},
    parser::BytesLines,
};

/// Iterator over the top-level components of an input, e.g. every `VCALENDAR` of a file.
pub struct ComponentParser<'a, C: Component, I: Iterator<Item = Cow<'a, [u8]>>> {
    line_parser: ContentLineParser<'a, I>,
    _t: PhantomData<C>,
}

impl<'a, C: Component> ComponentParser<'a, C, BytesLines<'a>> {
    /// Return a new `ComponentParser` reading from a byte slice.
    pub fn from_slice(slice: &'a [u8]) -> Self {
        let line_reader = LineReader::from_slice(slice);
        ComponentParser::new(ContentLineParser::new(line_reader))
    }
}

impl<'a, C: Component, I: Iterator<Item = Cow<'a, [u8]>>> ComponentParser<'a, C, I> {
    pub fn new(line_parser: ContentLineParser<'a, I>) -> Self {
        ComponentParser {
            line_parser,
            _t: Default::default(),
        }
    }

    /// Read the next line and check if it's a valid component start.
    #[inline]
    fn check_header(&mut self) -> Result<Option<String>, ParserError> {
        let line = match self.line_parser.next() {
            Some(val) => val?,
            None => return Ok(None),
        };

        let name = line.value_str().to_uppercase();
        if line.name != "BEGIN" || !C::NAMES.contains(&name.as_str()) || !line.params.is_empty()
        {
            return Err(ParserError::MissingHeader);
        }

        Ok(Some(name))
    }

    /// Consume the whole input, failing on the first error.
    ///
    /// Unlike iterating, an input without any component is an error.
    pub fn collect_all(self) -> Result<Vec<<C::Unverified as ComponentMut>::Verified>, ParserError> {
        let items = self.collect::<Result<Vec<_>, _>>()?;
        if items.is_empty() {
            return Err(ParserError::EmptyInput);
        }
        Ok(items)
    }
}

impl<'a, C: Component, I: Iterator<Item = Cow<'a, [u8]>>> Iterator for ComponentParser<'a, C, I> {
    type Item = Result<<C::Unverified as ComponentMut>::Verified, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = match self.check_header() {
            Ok(name) => name?,
            Err(err) => return Some(Err(err)),
        };

        let mut comp = C::Unverified::new(&name);
        let result = match comp.parse(&mut self.line_parser) {
            Ok(_) => comp.build(),
            Err(err) => Err(err),
        };

        Some(result)
    }
}
