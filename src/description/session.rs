use std::fmt;
use std::str::FromStr;

use super::{MediaDescription, TimeDescription};
use crate::error::SdpError;
use crate::field::{
    AttributeField, BandwidthField, ConnectionField, EmailField, InfoField, KeyField,
    OriginField, PhoneField, SdpField, SessionNameField, TimeZoneField, UriField, VersionField,
    validate_optional,
};
use crate::lines::LINE_TERMINATOR;
use crate::parser::SdpParser;

/// A complete SDP session description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDescription {
    pub(crate) version: VersionField,
    pub(crate) origin: OriginField,
    pub(crate) name: SessionNameField,
    pub(crate) info: Option<InfoField>,
    pub(crate) uri: Option<UriField>,
    pub(crate) email: Option<EmailField>,
    pub(crate) phone: Option<PhoneField>,
    pub(crate) connection: Option<ConnectionField>,
    pub(crate) bandwidth: Option<BandwidthField>,
    pub(crate) times: Vec<TimeDescription>,
    pub(crate) time_zones: Vec<TimeZoneField>,
    pub(crate) key: Option<KeyField>,
    pub(crate) attributes: Vec<AttributeField>,
    pub(crate) media: Vec<MediaDescription>,
}

impl SessionDescription {
    /// Create a session from its mandatory values (version 0).
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::MandatoryValue`] if the origin has an empty
    /// component, the session name is empty, or `times` is empty, and
    /// [`SdpError::InvalidValue`] if a value would not render as a
    /// parsable line.
    pub fn new(
        origin: OriginField,
        name: SessionNameField,
        times: Vec<TimeDescription>,
    ) -> Result<Self, SdpError> {
        check_origin(&origin)?;
        check_name(&name)?;
        check_times(&times)?;

        Ok(Self::assemble(VersionField::default(), origin, name, times))
    }

    /// Session with only the mandatory fields set, skipping validation
    pub(crate) fn assemble(
        version: VersionField,
        origin: OriginField,
        name: SessionNameField,
        times: Vec<TimeDescription>,
    ) -> Self {
        Self {
            version,
            origin,
            name,
            info: None,
            uri: None,
            email: None,
            phone: None,
            connection: None,
            bandwidth: None,
            times,
            time_zones: Vec::new(),
            key: None,
            attributes: Vec::new(),
            media: Vec::new(),
        }
    }

    /// Protocol version (`v=`)
    #[must_use]
    pub fn version(&self) -> VersionField {
        self.version
    }

    /// Replace the protocol version
    pub fn set_version(&mut self, version: VersionField) {
        self.version = version;
    }

    /// Originator (`o=`)
    #[must_use]
    pub fn origin(&self) -> &OriginField {
        &self.origin
    }

    /// Replace the originator
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::MandatoryValue`] if a component is empty and
    /// [`SdpError::InvalidValue`] if one holds a space or line break.
    pub fn set_origin(&mut self, origin: OriginField) -> Result<(), SdpError> {
        check_origin(&origin)?;
        self.origin = origin;
        Ok(())
    }

    /// Session name (`s=`)
    #[must_use]
    pub fn name(&self) -> &SessionNameField {
        &self.name
    }

    /// Replace the session name
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::MandatoryValue`] if the name is empty and
    /// [`SdpError::InvalidValue`] if it holds a line break.
    pub fn set_name(&mut self, name: SessionNameField) -> Result<(), SdpError> {
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Session information (`i=`)
    #[must_use]
    pub fn info(&self) -> Option<&InfoField> {
        self.info.as_ref()
    }

    /// Replace the session information
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::InvalidValue`] if the value would not read back.
    pub fn set_info(&mut self, info: Option<InfoField>) -> Result<(), SdpError> {
        validate_optional(info.as_ref()).map_err(SdpError::InvalidValue)?;
        self.info = info;
        Ok(())
    }

    /// Description URI (`u=`)
    #[must_use]
    pub fn uri(&self) -> Option<&UriField> {
        self.uri.as_ref()
    }

    /// Replace the description URI
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::InvalidValue`] if the value would not read back.
    pub fn set_uri(&mut self, uri: Option<UriField>) -> Result<(), SdpError> {
        validate_optional(uri.as_ref()).map_err(SdpError::InvalidValue)?;
        self.uri = uri;
        Ok(())
    }

    /// Contact e-mail (`e=`)
    #[must_use]
    pub fn email(&self) -> Option<&EmailField> {
        self.email.as_ref()
    }

    /// Replace the contact e-mail
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::InvalidValue`] if the value would not read back.
    pub fn set_email(&mut self, email: Option<EmailField>) -> Result<(), SdpError> {
        validate_optional(email.as_ref()).map_err(SdpError::InvalidValue)?;
        self.email = email;
        Ok(())
    }

    /// Contact phone (`p=`)
    #[must_use]
    pub fn phone(&self) -> Option<&PhoneField> {
        self.phone.as_ref()
    }

    /// Replace the contact phone
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::InvalidValue`] if the value would not read back.
    pub fn set_phone(&mut self, phone: Option<PhoneField>) -> Result<(), SdpError> {
        validate_optional(phone.as_ref()).map_err(SdpError::InvalidValue)?;
        self.phone = phone;
        Ok(())
    }

    /// Session-level connection data (`c=`)
    #[must_use]
    pub fn connection(&self) -> Option<&ConnectionField> {
        self.connection.as_ref()
    }

    /// Replace the session-level connection data
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::InvalidValue`] if the value would not read back.
    pub fn set_connection(&mut self, connection: Option<ConnectionField>) -> Result<(), SdpError> {
        validate_optional(connection.as_ref()).map_err(SdpError::InvalidValue)?;
        self.connection = connection;
        Ok(())
    }

    /// Session-level bandwidth (`b=`)
    #[must_use]
    pub fn bandwidth(&self) -> Option<&BandwidthField> {
        self.bandwidth.as_ref()
    }

    /// Replace the session-level bandwidth
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::InvalidValue`] if the value would not read back.
    pub fn set_bandwidth(&mut self, bandwidth: Option<BandwidthField>) -> Result<(), SdpError> {
        validate_optional(bandwidth.as_ref()).map_err(SdpError::InvalidValue)?;
        self.bandwidth = bandwidth;
        Ok(())
    }

    /// Time descriptions (never empty)
    #[must_use]
    pub fn times(&self) -> &[TimeDescription] {
        &self.times
    }

    /// Replace the time descriptions
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::MandatoryValue`] if `times` is empty and
    /// [`SdpError::InvalidValue`] if a line would not read back.
    pub fn set_times(&mut self, times: Vec<TimeDescription>) -> Result<(), SdpError> {
        check_times(&times)?;
        self.times = times;
        Ok(())
    }

    /// Time zone adjustments (`z=`) in declaration order
    #[must_use]
    pub fn time_zones(&self) -> &[TimeZoneField] {
        &self.time_zones
    }

    /// Replace the time zone adjustments
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::InvalidValue`] if a line would not read back.
    pub fn set_time_zones(&mut self, time_zones: Vec<TimeZoneField>) -> Result<(), SdpError> {
        time_zones
            .iter()
            .try_for_each(|z| z.validate())
            .map_err(SdpError::InvalidValue)?;
        self.time_zones = time_zones;
        Ok(())
    }

    /// Session-level encryption key (`k=`)
    #[must_use]
    pub fn key(&self) -> Option<&KeyField> {
        self.key.as_ref()
    }

    /// Replace the session-level encryption key
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::InvalidValue`] if the value would not read back.
    pub fn set_key(&mut self, key: Option<KeyField>) -> Result<(), SdpError> {
        validate_optional(key.as_ref()).map_err(SdpError::InvalidValue)?;
        self.key = key;
        Ok(())
    }

    /// Session-level attributes (`a=`) in declaration order
    #[must_use]
    pub fn attributes(&self) -> &[AttributeField] {
        &self.attributes
    }

    /// Replace the session-level attributes
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::InvalidValue`] if an attribute would not read
    /// back, e.g. a name containing `:`.
    pub fn set_attributes(&mut self, attributes: Vec<AttributeField>) -> Result<(), SdpError> {
        attributes
            .iter()
            .try_for_each(|a| a.validate())
            .map_err(SdpError::InvalidValue)?;
        self.attributes = attributes;
        Ok(())
    }

    /// Value of the first session-level attribute named `name`
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name() == name)?
            .attribute_value()
    }

    /// Media descriptions in declaration order
    #[must_use]
    pub fn media(&self) -> &[MediaDescription] {
        &self.media
    }

    /// Replace the media descriptions
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::InvalidValue`] if a media-level line would not
    /// read back.
    pub fn set_media(&mut self, media: Vec<MediaDescription>) -> Result<(), SdpError> {
        media
            .iter()
            .try_for_each(MediaDescription::validate)
            .map_err(SdpError::InvalidValue)?;
        self.media = media;
        Ok(())
    }

    /// Number of media descriptions
    #[must_use]
    pub fn media_count(&self) -> usize {
        self.media.len()
    }

    /// First media description of the given type (e.g. "audio")
    #[must_use]
    pub fn find_media(&self, media_type: &str) -> Option<&MediaDescription> {
        self.media.iter().find(|m| m.media().media() == media_type)
    }

    /// Render to SDP text in canonical field order
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn check_origin(origin: &OriginField) -> Result<(), SdpError> {
    if !origin.is_complete() {
        return Err(SdpError::MandatoryValue("originator"));
    }
    origin.validate().map_err(SdpError::InvalidValue)
}

fn check_name(name: &SessionNameField) -> Result<(), SdpError> {
    if name.is_empty() {
        return Err(SdpError::MandatoryValue("session name"));
    }
    name.validate().map_err(SdpError::InvalidValue)
}

fn check_times(times: &[TimeDescription]) -> Result<(), SdpError> {
    if times.is_empty() {
        return Err(SdpError::MandatoryValue("time description"));
    }
    times
        .iter()
        .try_for_each(TimeDescription::validate)
        .map_err(SdpError::InvalidValue)
}

/// Write `field` followed by a terminator unless its value renders empty
fn write_optional<F: SdpField + fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    field: Option<&F>,
) -> fmt::Result {
    match field {
        Some(field) if !field.value().is_empty() => write!(f, "{field}{LINE_TERMINATOR}"),
        _ => Ok(()),
    }
}

impl fmt::Display for SessionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{LINE_TERMINATOR}", self.version)?;
        write!(f, "{}{LINE_TERMINATOR}", self.origin)?;
        write!(f, "{}{LINE_TERMINATOR}", self.name)?;

        write_optional(f, self.info.as_ref())?;
        write_optional(f, self.uri.as_ref())?;
        write_optional(f, self.email.as_ref())?;
        write_optional(f, self.phone.as_ref())?;
        write_optional(f, self.connection.as_ref())?;
        write_optional(f, self.bandwidth.as_ref())?;

        for time in &self.times {
            write!(f, "{time}{LINE_TERMINATOR}")?;
        }
        for zone in &self.time_zones {
            write!(f, "{zone}{LINE_TERMINATOR}")?;
        }
        write_optional(f, self.key.as_ref())?;
        for attribute in &self.attributes {
            write!(f, "{attribute}{LINE_TERMINATOR}")?;
        }
        for media in &self.media {
            write!(f, "{media}{LINE_TERMINATOR}")?;
        }
        Ok(())
    }
}

impl FromStr for SessionDescription {
    type Err = SdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SdpParser::new().parse(s)
    }
}
