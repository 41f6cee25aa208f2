mod error;
pub use error::ParserError;

mod line;
pub use line::{BytesLines, Line, LineError, LineReader};

mod content_line;
pub use content_line::{ContentLine, ContentLineError, ContentLineParams, ContentLineParser};

mod property;
pub(crate) use property::property;
pub use property::{ICalProperty, ParseProp};

mod component;
pub use component::ComponentParser;

use crate::component::IcalCalendar;

/// Reader returning `IcalCalendar` objects from a byte slice.
pub type IcalParser<'a, I> = ComponentParser<'a, IcalCalendar, I>;
