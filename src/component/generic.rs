use std::borrow::Cow;

use crate::{
    ContentLineParser, ParserError,
    component::{Component, ComponentMut},
    parser::ContentLine,
};

/// Any component the extractor does not look into (VTIMEZONE, VTODO, VALARM, X-...).
///
/// It is parsed so that its `BEGIN`/`END` nesting is checked, and kept as-is.
#[derive(Debug, Clone, Default)]
pub struct IcalComponent {
    pub name: String,
    pub properties: Vec<ContentLine>,
    pub components: Vec<IcalComponent>,
}

impl Component for IcalComponent {
    const NAMES: &[&str] = &[];
    type Unverified = IcalComponent;

    fn get_comp_name(&self) -> &str {
        &self.name
    }

    fn get_properties(&self) -> &Vec<ContentLine> {
        &self.properties
    }
}

impl ComponentMut for IcalComponent {
    type Verified = IcalComponent;

    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    fn get_properties_mut(&mut self) -> &mut Vec<ContentLine> {
        &mut self.properties
    }

    fn add_sub_component<'a, I: Iterator<Item = Cow<'a, [u8]>>>(
        &mut self,
        name: &str,
        line_parser: &mut ContentLineParser<'a, I>,
    ) -> Result<(), ParserError> {
        let mut sub = IcalComponent::new(name);
        sub.parse(line_parser)?;
        self.components.push(sub);
        Ok(())
    }

    fn build(self) -> Result<Self, ParserError> {
        Ok(self)
    }
}
