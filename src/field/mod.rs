//! Typed SDP fields.
//!
//! Each line of a description is `<tag>=<value>`. Every recognized tag has a
//! struct implementing [`SdpField`], which parses the value substring and
//! renders it back. [`Field`] is the closed union over all of them and
//! [`FieldFactory`] dispatches a raw line to the right parser.

mod attribute;
mod bandwidth;
mod connection;
mod factory;
mod key;
mod media;
mod origin;
mod text;
mod time;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

pub use attribute::AttributeField;
pub use bandwidth::BandwidthField;
pub use connection::ConnectionField;
pub use factory::FieldFactory;
pub use key::KeyField;
pub use media::MediaField;
pub use origin::OriginField;
pub use text::{EmailField, InfoField, PhoneField, SessionNameField, UriField, VersionField};
pub use time::{RepeatField, TimeField, TimeZoneAdjustment, TimeZoneField};

use crate::error::FieldError;
use crate::ntp::is_canonical_decimal;

/// A single typed SDP field
pub trait SdpField: Sized {
    /// Leading tag character
    const TAG: char;

    /// Human-readable field name used in error messages
    const NAME: &'static str;

    /// Parse the value substring (everything after `<tag>=`).
    ///
    /// # Errors
    ///
    /// Returns [`FieldError`] if the value does not match the field grammar.
    fn parse_value(value: &str) -> Result<Self, FieldError>;

    /// Render the value substring
    fn value(&self) -> String;

    /// Render the complete line without terminator
    fn to_line(&self) -> String {
        format!("{}={}", Self::TAG, self.value())
    }

    /// Check that the rendered value parses back to this field.
    ///
    /// Constructors take their parts verbatim, so a part containing a space,
    /// a separator or a line break produces a field whose line reads back
    /// differently (or not at all).
    ///
    /// # Errors
    ///
    /// Returns the parse error of the rendered value, or
    /// [`FieldError::Syntax`] if it parses to a different field.
    fn validate(&self) -> Result<(), FieldError>
    where
        Self: PartialEq,
    {
        let value = self.value();
        if Self::parse_value(&value)? == *self {
            Ok(())
        } else {
            Err(FieldError::syntax(
                Self::NAME,
                format!("{value:?} does not read back as the same field"),
            ))
        }
    }
}

/// Implements `Display` (full line) and `FromStr` (value only) for fields
macro_rules! impl_field_traits {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(
                        f,
                        "{}={}",
                        <$ty as $crate::field::SdpField>::TAG,
                        <$ty as $crate::field::SdpField>::value(self)
                    )
                }
            }

            impl std::str::FromStr for $ty {
                type Err = $crate::error::FieldError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as $crate::field::SdpField>::parse_value(s)
                }
            }
        )+
    };
}
pub(crate) use impl_field_traits;

/// Any recognized SDP field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// `v=`
    Version(VersionField),
    /// `o=`
    Origin(OriginField),
    /// `s=`
    SessionName(SessionNameField),
    /// `i=`
    Info(InfoField),
    /// `u=`
    Uri(UriField),
    /// `e=`
    Email(EmailField),
    /// `p=`
    Phone(PhoneField),
    /// `c=`
    Connection(ConnectionField),
    /// `b=`
    Bandwidth(BandwidthField),
    /// `t=`
    Time(TimeField),
    /// `r=`
    Repeat(RepeatField),
    /// `z=`
    TimeZone(TimeZoneField),
    /// `k=`
    Key(KeyField),
    /// `a=`
    Attribute(AttributeField),
    /// `m=`
    Media(MediaField),
}

impl Field {
    /// Leading tag of this field
    #[must_use]
    pub fn tag(&self) -> char {
        match self {
            Self::Version(_) => VersionField::TAG,
            Self::Origin(_) => OriginField::TAG,
            Self::SessionName(_) => SessionNameField::TAG,
            Self::Info(_) => InfoField::TAG,
            Self::Uri(_) => UriField::TAG,
            Self::Email(_) => EmailField::TAG,
            Self::Phone(_) => PhoneField::TAG,
            Self::Connection(_) => ConnectionField::TAG,
            Self::Bandwidth(_) => BandwidthField::TAG,
            Self::Time(_) => TimeField::TAG,
            Self::Repeat(_) => RepeatField::TAG,
            Self::TimeZone(_) => TimeZoneField::TAG,
            Self::Key(_) => KeyField::TAG,
            Self::Attribute(_) => AttributeField::TAG,
            Self::Media(_) => MediaField::TAG,
        }
    }

    /// Rendered value substring
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Version(f) => f.value(),
            Self::Origin(f) => f.value(),
            Self::SessionName(f) => f.value(),
            Self::Info(f) => f.value(),
            Self::Uri(f) => f.value(),
            Self::Email(f) => f.value(),
            Self::Phone(f) => f.value(),
            Self::Connection(f) => f.value(),
            Self::Bandwidth(f) => f.value(),
            Self::Time(f) => f.value(),
            Self::Repeat(f) => f.value(),
            Self::TimeZone(f) => f.value(),
            Self::Key(f) => f.value(),
            Self::Attribute(f) => f.value(),
            Self::Media(f) => f.value(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag(), self.value())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldFactory::create(s)
    }
}

/// Split a value into exactly-single-space separated tokens.
///
/// Empty tokens (from doubled, leading or trailing spaces) are rejected so
/// that rendering with single spaces reproduces the input.
pub(crate) fn split_tokens<'a>(
    value: &'a str,
    field: &'static str,
) -> Result<Vec<&'a str>, FieldError> {
    if value.is_empty() {
        return Err(FieldError::syntax(field, "empty value"));
    }
    check_text(value, field)?;
    let tokens: Vec<&str> = value.split(' ').collect();
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(FieldError::syntax(field, format!("stray whitespace in {value:?}")));
    }
    Ok(tokens)
}

/// Validate a field that may be absent
pub(crate) fn validate_optional<F: SdpField + PartialEq>(
    field: Option<&F>,
) -> Result<(), FieldError> {
    field.map_or(Ok(()), |f| f.validate())
}

/// Reject line breaks inside a value
pub(crate) fn check_text(value: &str, field: &'static str) -> Result<(), FieldError> {
    if value.contains(['\r', '\n']) {
        return Err(FieldError::syntax(field, "line break inside value"));
    }
    Ok(())
}

/// Parse an unsigned decimal number, rejecting signs, leading zeros and
/// other decorations.
pub(crate) fn parse_number<T: FromStr>(
    token: &str,
    field: &'static str,
    what: &str,
) -> Result<T, FieldError> {
    if !is_canonical_decimal(token) {
        return Err(FieldError::syntax(field, format!("invalid {what} {token:?}")));
    }
    token
        .parse()
        .map_err(|_| FieldError::syntax(field, format!("{what} {token:?} out of range")))
}
