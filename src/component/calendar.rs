use std::borrow::Cow;

use crate::{
    ContentLineParser,
    component::{Component, ComponentMut, IcalComponent, IcalEvent, IcalEventBuilder},
    parser::{ContentLine, ParserError},
};

/// A VCALENDAR object.
///
/// Events are kept in the order they appear, every other component ends up in `components`.
#[derive(Debug, Clone)]
pub struct IcalCalendar {
    pub properties: Vec<ContentLine>,
    pub events: Vec<IcalEvent>,
    pub components: Vec<IcalComponent>,
}

#[derive(Debug, Clone, Default)]
pub struct IcalCalendarBuilder {
    pub properties: Vec<ContentLine>,
    pub events: Vec<IcalEventBuilder>,
    pub components: Vec<IcalComponent>,
}

impl Component for IcalCalendar {
    const NAMES: &[&str] = &["VCALENDAR"];
    type Unverified = IcalCalendarBuilder;

    fn get_properties(&self) -> &Vec<ContentLine> {
        &self.properties
    }
}

impl Component for IcalCalendarBuilder {
    const NAMES: &[&str] = &["VCALENDAR"];
    type Unverified = IcalCalendarBuilder;

    fn get_properties(&self) -> &Vec<ContentLine> {
        &self.properties
    }
}

impl ComponentMut for IcalCalendarBuilder {
    type Verified = IcalCalendar;

    fn new(_name: &str) -> Self {
        Self::default()
    }

    fn get_properties_mut(&mut self) -> &mut Vec<ContentLine> {
        &mut self.properties
    }

    fn add_sub_component<'a, I: Iterator<Item = Cow<'a, [u8]>>>(
        &mut self,
        name: &str,
        line_parser: &mut ContentLineParser<'a, I>,
    ) -> Result<(), ParserError> {
        match name {
            "VEVENT" => {
                let mut event = IcalEventBuilder::new(name);
                event.parse(line_parser)?;
                self.events.push(event);
            }
            _ => {
                let mut comp = IcalComponent::new(name);
                comp.parse(line_parser)?;
                self.components.push(comp);
            }
        };

        Ok(())
    }

    fn build(self) -> Result<IcalCalendar, ParserError> {
        Ok(IcalCalendar {
            properties: self.properties,
            events: self
                .events
                .into_iter()
                .map(ComponentMut::build)
                .collect::<Result<Vec<_>, _>>()?,
            components: self.components,
        })
    }
}
