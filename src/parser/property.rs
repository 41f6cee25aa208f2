use crate::{
    ParserError,
    parser::ContentLine,
    types::{CalAddress, CalDateOrDateTime, parse_duration, unescape_text},
};

/// Parse the value of a content line into a typed value.
pub trait ParseProp: Sized {
    fn parse_prop(prop: &ContentLine, default_type: &'static str) -> Result<Self, ParserError>;
}

impl ParseProp for String {
    fn parse_prop(prop: &ContentLine, _default_type: &'static str) -> Result<Self, ParserError> {
        Ok(unescape_text(prop.value_str()))
    }
}

impl ParseProp for CalDateOrDateTime {
    fn parse_prop(prop: &ContentLine, default_type: &'static str) -> Result<Self, ParserError> {
        let value_type = prop
            .params
            .get_value_type()
            .unwrap_or(default_type)
            .to_ascii_uppercase();
        match value_type.as_str() {
            "DATE" => Ok(Self::parse_date(prop.value_str())?),
            "DATE-TIME" => Ok(Self::parse_datetime(prop.value_str())?),
            other => Err(ParserError::InvalidPropertyType(
                default_type,
                other.to_owned(),
            )),
        }
    }
}

impl ParseProp for chrono::Duration {
    fn parse_prop(prop: &ContentLine, _default_type: &'static str) -> Result<Self, ParserError> {
        Ok(parse_duration(prop.value_str())?)
    }
}

impl ParseProp for CalAddress {
    fn parse_prop(prop: &ContentLine, _default_type: &'static str) -> Result<Self, ParserError> {
        Ok(CalAddress::new(prop.value_str()))
    }
}

pub trait ICalProperty: Sized {
    const NAME: &'static str;
    const DEFAULT_TYPE: &'static str;

    fn parse_prop(prop: &ContentLine) -> Result<Self, ParserError>;
}

macro_rules! property {
    ($name:literal, $default_type:literal, $prop:ty) => {
        impl crate::parser::ICalProperty for $prop {
            const NAME: &'static str = $name;
            const DEFAULT_TYPE: &'static str = $default_type;

            #[inline]
            fn parse_prop(
                prop: &crate::parser::ContentLine,
            ) -> Result<Self, crate::parser::ParserError> {
                Ok(Self(
                    crate::parser::ParseProp::parse_prop(prop, $default_type)?,
                    prop.params.clone(),
                ))
            }
        }
    };

    ($name:literal, $default_type:literal, $prop:ident, $inner:ty) => {
        #[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
        pub struct $prop(pub $inner, pub crate::parser::ContentLineParams);
        crate::parser::property!($name, $default_type, $prop);
    };
}

pub(crate) use property;
