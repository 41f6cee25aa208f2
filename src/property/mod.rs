use crate::{
    component::Component,
    parser::{ICalProperty, ParserError, property},
    types::{CalAddress, CalDateOrDateTime},
};

pub use crate::parser::{ContentLine, ContentLineParams};

pub trait GetProperty: Component {
    fn safe_get_all<T: ICalProperty>(&self) -> Result<Vec<T>, ParserError> {
        self.get_named_properties(T::NAME)
            .map(T::parse_prop)
            .collect::<Result<Vec<_>, _>>()
    }

    fn safe_get_optional<T: ICalProperty>(&self) -> Result<Option<T>, ParserError> {
        let mut props = self.get_named_properties(T::NAME);
        let Some(prop) = props.next() else {
            return Ok(None);
        };
        if props.next().is_some() {
            return Err(ParserError::PropertyConflict(T::NAME));
        }
        T::parse_prop(prop).map(Some)
    }

    fn safe_get_required<T: ICalProperty>(&self) -> Result<T, ParserError> {
        self.safe_get_optional()?
            .ok_or(ParserError::MissingProperty(T::NAME))
    }

    fn has_prop<T: ICalProperty>(&self) -> bool {
        self.get_property(T::NAME).is_some()
    }
}

impl<C: Component> GetProperty for C {}

property!("UID", "TEXT", IcalUIDProperty, String);
property!("SUMMARY", "TEXT", IcalSUMMARYProperty, String);
property!("DESCRIPTION", "TEXT", IcalDESCRIPTIONProperty, String);
property!("LOCATION", "TEXT", IcalLOCATIONProperty, String);
property!("ATTENDEE", "CAL-ADDRESS", IcalATTENDEEProperty, CalAddress);

property!("DTSTART", "DATE-TIME", IcalDTSTARTProperty, CalDateOrDateTime);
property!("DTEND", "DATE-TIME", IcalDTENDProperty, CalDateOrDateTime);
property!("DURATION", "DURATION", IcalDURATIONProperty, chrono::Duration);
