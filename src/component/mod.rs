mod calendar;
pub use calendar::{IcalCalendar, IcalCalendarBuilder};
mod event;
pub use event::{IcalEvent, IcalEventBuilder};
mod generic;
pub use generic::IcalComponent;

use crate::ParserError;
use crate::parser::{ContentLine, ContentLineParser};
use std::borrow::Cow;

/// An immutable interface for an Ical component.
/// This is also implemented by verified components
pub trait Component: Clone {
    const NAMES: &[&str];

    fn get_comp_name(&self) -> &str {
        assert_eq!(
            Self::NAMES.len(),
            1,
            "Default implementation only applicable for fixed component name"
        );
        Self::NAMES[0]
    }

    type Unverified: ComponentMut;

    fn get_properties(&self) -> &Vec<ContentLine>;

    fn get_property<'c>(&'c self, name: &str) -> Option<&'c ContentLine> {
        self.get_properties().iter().find(|p| p.name == name)
    }

    fn get_named_properties<'c>(&'c self, name: &'c str) -> impl Iterator<Item = &'c ContentLine> {
        self.get_properties().iter().filter(move |p| p.name == name)
    }
}

/// A mutable interface for an Ical component.
///
/// It takes a `ContentLineParser` and fills the component with. It's also able to create
/// sub-components such as the alarms of an event.
pub trait ComponentMut: Component + Sized {
    type Verified: Component<Unverified = Self>;

    /// Create an empty component from the value of its `BEGIN` line.
    fn new(name: &str) -> Self;

    /// Add the given sub component.
    fn add_sub_component<'a, T: Iterator<Item = Cow<'a, [u8]>>>(
        &mut self,
        name: &str,
        line_parser: &mut ContentLineParser<'a, T>,
    ) -> Result<(), ParserError>;

    fn get_properties_mut(&mut self) -> &mut Vec<ContentLine>;

    /// Add the given property.
    #[inline]
    fn add_content_line(&mut self, property: ContentLine) {
        self.get_properties_mut().push(property);
    }

    fn build(self) -> Result<Self::Verified, ParserError>;

    /// Parse the content from `line_parser` and fill the component with.
    ///
    /// Stops after the `END` line matching this component.
    fn parse<'a, T: Iterator<Item = Cow<'a, [u8]>>>(
        &mut self,
        line_parser: &mut ContentLineParser<'a, T>,
    ) -> Result<(), ParserError> {
        loop {
            let line = line_parser.next().ok_or(ParserError::NotComplete)??;

            match line.name.as_ref() {
                "END" => {
                    let found = line.value_str().to_uppercase();
                    if found != self.get_comp_name() {
                        return Err(ParserError::MismatchedEnd {
                            expected: self.get_comp_name().to_owned(),
                            found,
                        });
                    }
                    break;
                }
                "BEGIN" => {
                    let name = line.value_str().to_uppercase();
                    self.add_sub_component(&name, line_parser)?;
                }
                _ => self.add_content_line(line),
            };
        }
        Ok(())
    }
}
