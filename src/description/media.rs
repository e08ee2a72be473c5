use std::fmt;
use std::str::FromStr;

use crate::error::{FieldError, SdpError};
use crate::field::{
    AttributeField, BandwidthField, ConnectionField, InfoField, KeyField, MediaField, SdpField, validate_optional,
};
use crate::lines::LINE_TERMINATOR;
use crate::parser::SdpParser;

/// An `m=` line and the media-level lines that follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescription {
    pub(crate) media: MediaField,
    pub(crate) info: Option<InfoField>,
    pub(crate) connection: Option<ConnectionField>,
    pub(crate) bandwidth: Option<BandwidthField>,
    pub(crate) key: Option<KeyField>,
    pub(crate) attributes: Vec<AttributeField>,
}

impl MediaDescription {
    /// Create a media description with no media-level fields
    #[must_use]
    pub fn new(media: MediaField) -> Self {
        Self {
            media,
            info: None,
            connection: None,
            bandwidth: None,
            key: None,
            attributes: Vec::new(),
        }
    }

    /// The media line
    #[must_use]
    pub fn media(&self) -> &MediaField {
        &self.media
    }

    /// Replace the media line
    pub fn set_media(&mut self, media: MediaField) {
        self.media = media;
    }

    /// Media title (`i=`)
    #[must_use]
    pub fn info(&self) -> Option<&InfoField> {
        self.info.as_ref()
    }

    /// Replace the media title
    pub fn set_info(&mut self, info: Option<InfoField>) {
        self.info = info;
    }

    /// Media-level connection data (`c=`)
    #[must_use]
    pub fn connection(&self) -> Option<&ConnectionField> {
        self.connection.as_ref()
    }

    /// Replace the connection data
    pub fn set_connection(&mut self, connection: Option<ConnectionField>) {
        self.connection = connection;
    }

    /// Media-level bandwidth (`b=`)
    #[must_use]
    pub fn bandwidth(&self) -> Option<&BandwidthField> {
        self.bandwidth.as_ref()
    }

    /// Replace the bandwidth
    pub fn set_bandwidth(&mut self, bandwidth: Option<BandwidthField>) {
        self.bandwidth = bandwidth;
    }

    /// Media-level encryption key (`k=`)
    #[must_use]
    pub fn key(&self) -> Option<&KeyField> {
        self.key.as_ref()
    }

    /// Replace the encryption key
    pub fn set_key(&mut self, key: Option<KeyField>) {
        self.key = key;
    }

    /// Media-level attributes in declaration order
    #[must_use]
    pub fn attributes(&self) -> &[AttributeField] {
        &self.attributes
    }

    /// Replace all attributes
    pub fn set_attributes(&mut self, attributes: Vec<AttributeField>) {
        self.attributes = attributes;
    }

    /// Append an attribute
    pub fn push_attribute(&mut self, attribute: AttributeField) {
        self.attributes.push(attribute);
    }

    /// Value of the first attribute named `name`
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name() == name)?
            .attribute_value()
    }

    /// Whether a property or value attribute named `name` is present
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name() == name)
    }

    /// Whether any media-level line follows the `m=` line
    #[must_use]
    pub fn has_sub_fields(&self) -> bool {
        self.info.is_some()
            || self.connection.is_some()
            || self.bandwidth.is_some()
            || self.key.is_some()
            || !self.attributes.is_empty()
    }

    /// Check that every line reads back as the same field
    pub(crate) fn validate(&self) -> Result<(), FieldError> {
        self.media.validate()?;
        validate_optional(self.info.as_ref())?;
        validate_optional(self.connection.as_ref())?;
        validate_optional(self.bandwidth.as_ref())?;
        validate_optional(self.key.as_ref())?;
        self.attributes.iter().try_for_each(|a| a.validate())
    }
}

impl fmt::Display for MediaDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.media)?;
        if let Some(info) = self.info.as_ref().filter(|i| !i.is_empty()) {
            write!(f, "{LINE_TERMINATOR}{info}")?;
        }
        if let Some(connection) = &self.connection {
            write!(f, "{LINE_TERMINATOR}{connection}")?;
        }
        if let Some(bandwidth) = &self.bandwidth {
            write!(f, "{LINE_TERMINATOR}{bandwidth}")?;
        }
        if let Some(key) = &self.key {
            write!(f, "{LINE_TERMINATOR}{key}")?;
        }
        for attribute in &self.attributes {
            write!(f, "{LINE_TERMINATOR}{attribute}")?;
        }
        Ok(())
    }
}

impl FromStr for MediaDescription {
    type Err = SdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SdpParser::new().parse_media_description(s)
    }
}
