use super::{
    AttributeField, BandwidthField, ConnectionField, EmailField, Field, InfoField, KeyField,
    MediaField, OriginField, PhoneField, RepeatField, SdpField, SessionNameField, TimeField,
    TimeZoneField, UriField, VersionField,
};
use crate::error::FieldError;

/// Maps a line's leading tag to the matching field parser
pub struct FieldFactory;

impl FieldFactory {
    /// Every tag the factory recognizes
    pub const TAGS: [char; 15] = [
        'v', 'o', 's', 'i', 'u', 'e', 'p', 'c', 'b', 't', 'r', 'z', 'k', 'a', 'm',
    ];

    /// Parse a complete `<tag>=<value>` line.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NoSuchField`] for an unrecognized tag,
    /// [`FieldError::Malformed`] if the tag is not followed by `=`, or the
    /// field's own error if its value does not parse.
    pub fn create(line: &str) -> Result<Field, FieldError> {
        let (tag, value) = Self::split(line)?;
        Self::create_from_value(tag, value)
    }

    /// Split a line into its tag and value substring
    ///
    /// # Errors
    ///
    /// See [`FieldFactory::create`].
    pub fn split(line: &str) -> Result<(char, &str), FieldError> {
        let mut chars = line.chars();
        let tag = chars
            .next()
            .ok_or_else(|| FieldError::Malformed(line.to_string()))?;
        if !Self::is_known(tag) {
            return Err(FieldError::NoSuchField(tag));
        }
        chars
            .as_str()
            .strip_prefix('=')
            .map(|value| (tag, value))
            .ok_or_else(|| FieldError::Malformed(line.to_string()))
    }

    /// Dispatch an already split value to the parser for `tag`
    ///
    /// # Errors
    ///
    /// See [`FieldFactory::create`].
    pub fn create_from_value(tag: char, value: &str) -> Result<Field, FieldError> {
        let field = match tag {
            'v' => Field::Version(VersionField::parse_value(value)?),
            'o' => Field::Origin(OriginField::parse_value(value)?),
            's' => Field::SessionName(SessionNameField::parse_value(value)?),
            'i' => Field::Info(InfoField::parse_value(value)?),
            'u' => Field::Uri(UriField::parse_value(value)?),
            'e' => Field::Email(EmailField::parse_value(value)?),
            'p' => Field::Phone(PhoneField::parse_value(value)?),
            'c' => Field::Connection(ConnectionField::parse_value(value)?),
            'b' => Field::Bandwidth(BandwidthField::parse_value(value)?),
            't' => Field::Time(TimeField::parse_value(value)?),
            'r' => Field::Repeat(RepeatField::parse_value(value)?),
            'z' => Field::TimeZone(TimeZoneField::parse_value(value)?),
            'k' => Field::Key(KeyField::parse_value(value)?),
            'a' => Field::Attribute(AttributeField::parse_value(value)?),
            'm' => Field::Media(MediaField::parse_value(value)?),
            other => return Err(FieldError::NoSuchField(other)),
        };
        Ok(field)
    }

    /// Whether `tag` names a recognized field
    #[must_use]
    pub fn is_known(tag: char) -> bool {
        Self::TAGS.contains(&tag)
    }

    /// Leading tag of a raw line without validating it
    #[must_use]
    pub fn peek_tag(line: &str) -> Option<char> {
        line.chars().next()
    }
}
