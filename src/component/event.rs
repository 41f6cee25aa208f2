use std::borrow::Cow;

use crate::{
    ContentLineParser,
    component::{Component, ComponentMut, IcalComponent},
    parser::{ContentLine, ICalProperty, ParserError},
    property::{
        GetProperty, IcalATTENDEEProperty, IcalDESCRIPTIONProperty, IcalDTENDProperty,
        IcalDTSTARTProperty, IcalDURATIONProperty, IcalLOCATIONProperty, IcalSUMMARYProperty,
        IcalUIDProperty,
    },
    types::{CalAddress, CalDateOrDateTime},
};

/// A VEVENT with its text fields and attendees resolved.
///
/// The time span is resolved lazily through [`IcalEvent::start`] and [`IcalEvent::end`], so
/// that a broken timestamp only affects the events someone actually looks at.
#[derive(Debug, Clone)]
pub struct IcalEvent {
    uid: Option<String>,
    summary: Option<String>,
    description: Option<String>,
    location: Option<String>,
    attendees: Vec<CalAddress>,
    pub properties: Vec<ContentLine>,
    pub alarms: Vec<IcalComponent>,
}

#[derive(Debug, Clone, Default)]
pub struct IcalEventBuilder {
    pub properties: Vec<ContentLine>,
    pub alarms: Vec<IcalComponent>,
}

impl IcalEvent {
    pub fn get_uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn get_summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn get_location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Attendee identifiers in the order they appear, empty if there are none.
    pub fn attendee_identifiers(&self) -> Vec<&str> {
        self.attendees.iter().map(CalAddress::identifier).collect()
    }

    pub fn start(&self) -> Result<CalDateOrDateTime, ParserError> {
        let IcalDTSTARTProperty(dtstart, _) = self.safe_get_required()?;
        Ok(dtstart)
    }

    /// DTEND, or DTSTART + DURATION if the event specifies a duration instead.
    pub fn end(&self) -> Result<CalDateOrDateTime, ParserError> {
        let dtend = self.safe_get_optional::<IcalDTENDProperty>()?;
        let duration = self.safe_get_optional::<IcalDURATIONProperty>()?;
        match (dtend, duration) {
            (Some(_), Some(_)) => Err(ParserError::PropertyConflict(
                "both DTEND and DURATION are defined",
            )),
            (Some(IcalDTENDProperty(dtend, _)), None) => Ok(dtend),
            (None, Some(IcalDURATIONProperty(duration, _))) => {
                Ok(self.start()?.checked_add(duration)?)
            }
            (None, None) => Err(ParserError::MissingProperty(IcalDTENDProperty::NAME)),
        }
    }
}

impl Component for IcalEvent {
    const NAMES: &[&str] = &["VEVENT"];
    type Unverified = IcalEventBuilder;

    fn get_properties(&self) -> &Vec<ContentLine> {
        &self.properties
    }
}

impl Component for IcalEventBuilder {
    const NAMES: &[&str] = &["VEVENT"];
    type Unverified = IcalEventBuilder;

    fn get_properties(&self) -> &Vec<ContentLine> {
        &self.properties
    }
}

impl ComponentMut for IcalEventBuilder {
    type Verified = IcalEvent;

    fn new(_name: &str) -> Self {
        Self::default()
    }

    fn get_properties_mut(&mut self) -> &mut Vec<ContentLine> {
        &mut self.properties
    }

    #[inline]
    fn add_sub_component<'a, I: Iterator<Item = Cow<'a, [u8]>>>(
        &mut self,
        name: &str,
        line_parser: &mut ContentLineParser<'a, I>,
    ) -> Result<(), ParserError> {
        // VALARM, or any X- component
        let mut sub = IcalComponent::new(name);
        sub.parse(line_parser)?;
        self.alarms.push(sub);
        Ok(())
    }

    fn build(self) -> Result<IcalEvent, ParserError> {
        // OPTIONAL, but ONLY ONCE. UID is required by RFC 5545 but missing ones are tolerated.
        let uid = self.safe_get_optional::<IcalUIDProperty>()?;
        let summary = self.safe_get_optional::<IcalSUMMARYProperty>()?;
        let description = self.safe_get_optional::<IcalDESCRIPTIONProperty>()?;
        let location = self.safe_get_optional::<IcalLOCATIONProperty>()?;

        // OPTIONAL, MULTIPLE ALLOWED
        let attendees = self
            .safe_get_all::<IcalATTENDEEProperty>()?
            .into_iter()
            .map(|IcalATTENDEEProperty(address, _)| address)
            .collect();

        Ok(IcalEvent {
            uid: uid.map(|IcalUIDProperty(uid, _)| uid),
            summary: summary.map(|IcalSUMMARYProperty(summary, _)| summary),
            description: description.map(|IcalDESCRIPTIONProperty(description, _)| description),
            location: location.map(|IcalLOCATIONProperty(location, _)| location),
            attendees,
            properties: self.properties,
            alarms: self.alarms,
        })
    }
}
