use derive_more::{Display, From};

/// A CAL-ADDRESS value, usually a `mailto:` URI.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub struct CalAddress(String);

impl CalAddress {
    pub fn new(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// The address with its URI scheme removed, `mailto:jane@example.com` becomes
    /// `jane@example.com`. A value without a scheme is returned unchanged.
    pub fn identifier(&self) -> &str {
        match self.0.split_once(':') {
            Some((_scheme, rest)) => rest,
            None => &self.0,
        }
    }
}
