use std::time::Duration;

use crate::description::{MediaDescription, SessionDescription, TimeDescription};
use crate::error::{Result, SdpError};
use crate::field::{
    AttributeField, BandwidthField, ConnectionField, EmailField, InfoField, KeyField, MediaField,
    OriginField, PhoneField, RepeatField, SessionNameField, TimeField, TimeZoneAdjustment,
    TimeZoneField, UriField,
};
use crate::ntp::NtpTime;

/// Builder for SDP session descriptions.
///
/// Media-level setters apply to the most recently started media section.
/// Fallible steps (empty format lists, repeats without a time block, ...)
/// are recorded and reported by [`SdpBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct SdpBuilder {
    origin: Option<OriginField>,
    name: Option<SessionNameField>,
    info: Option<InfoField>,
    uri: Option<UriField>,
    email: Option<EmailField>,
    phone: Option<PhoneField>,
    connection: Option<ConnectionField>,
    bandwidth: Option<BandwidthField>,
    times: Vec<TimeDescription>,
    time_zones: Vec<TimeZoneField>,
    key: Option<KeyField>,
    attributes: Vec<AttributeField>,
    media: Vec<MediaDescription>,
    error: Option<SdpError>,
}

fn address_type(addr: &str) -> &'static str {
    if addr.contains(':') { "IP6" } else { "IP4" }
}

impl SdpBuilder {
    /// Create a new SDP builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, err: SdpError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn current_media(&mut self) -> Option<&mut MediaDescription> {
        let media = self.media.last_mut();
        if media.is_none() && self.error.is_none() {
            self.error = Some(SdpError::MandatoryValue("media description"));
        }
        media
    }

    /// Set origin with `IN` network type and an address type derived from
    /// `addr`
    #[must_use]
    pub fn origin(
        mut self,
        username: &str,
        session_id: &str,
        session_version: &str,
        addr: &str,
    ) -> Self {
        self.origin = Some(OriginField::new(
            username,
            session_id,
            session_version,
            "IN",
            address_type(addr),
            addr,
        ));
        self
    }

    /// Set session name
    #[must_use]
    pub fn session_name(mut self, name: &str) -> Self {
        self.name = Some(SessionNameField::new(name));
        self
    }

    /// Set session information
    #[must_use]
    pub fn info(mut self, info: &str) -> Self {
        self.info = Some(InfoField::new(info));
        self
    }

    /// Set description URI
    #[must_use]
    pub fn uri(mut self, uri: &str) -> Self {
        self.uri = Some(UriField::new(uri));
        self
    }

    /// Set contact e-mail
    #[must_use]
    pub fn email(mut self, email: &str) -> Self {
        self.email = Some(EmailField::new(email));
        self
    }

    /// Set contact phone
    #[must_use]
    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = Some(PhoneField::new(phone));
        self
    }

    /// Set session-level connection info
    #[must_use]
    pub fn connection(mut self, addr: &str) -> Self {
        self.connection = Some(ConnectionField::internet(addr));
        self
    }

    /// Set session-level bandwidth
    #[must_use]
    pub fn bandwidth(mut self, modifier: &str, bandwidth: u64) -> Self {
        self.bandwidth = Some(BandwidthField::new(modifier, bandwidth));
        self
    }

    /// Start a time block (`0, 0` for permanent sessions)
    #[must_use]
    pub fn timing(mut self, start: NtpTime, stop: NtpTime) -> Self {
        self.times
            .push(TimeDescription::new(TimeField::new(start, stop)));
        self
    }

    /// Add a repeat schedule to the current time block
    #[must_use]
    pub fn repeat(mut self, interval: Duration, active: Duration, offsets: &[Duration]) -> Self {
        let repeat = match RepeatField::new(interval, active, offsets.to_vec()) {
            Ok(repeat) => repeat,
            Err(err) => {
                self.fail(SdpError::InvalidValue(err));
                return self;
            }
        };
        match self.times.last_mut() {
            Some(time) => time.push_repeat(repeat),
            None => self.fail(SdpError::MandatoryValue("time description")),
        }
        self
    }

    /// Add a `z=` line from `(adjustment time, offset seconds)` pairs
    #[must_use]
    pub fn time_zone(mut self, adjustments: &[(NtpTime, i64)]) -> Self {
        let adjustments = adjustments
            .iter()
            .map(|&(time, offset)| TimeZoneAdjustment::new(time, offset))
            .collect();
        match TimeZoneField::new(adjustments) {
            Ok(zone) => self.time_zones.push(zone),
            Err(err) => self.fail(SdpError::InvalidValue(err)),
        }
        self
    }

    /// Set session-level encryption key
    #[must_use]
    pub fn key(mut self, method: &str, key: Option<&str>) -> Self {
        self.key = Some(KeyField::new(method, key.map(String::from)));
        self
    }

    /// Add session-level attribute
    #[must_use]
    pub fn attribute(mut self, name: &str, value: Option<&str>) -> Self {
        self.attributes.push(attribute(name, value));
        self
    }

    /// Start a media section
    #[must_use]
    pub fn media(mut self, media_type: &str, port: u16, protocol: &str, formats: &[&str]) -> Self {
        let formats = formats.iter().map(ToString::to_string).collect();
        match MediaField::new(media_type, port, protocol, formats) {
            Ok(media) => self.media.push(MediaDescription::new(media)),
            Err(err) => self.fail(SdpError::InvalidValue(err)),
        }
        self
    }

    /// Set connection info of the current media section
    #[must_use]
    pub fn media_connection(mut self, addr: &str) -> Self {
        if let Some(media) = self.current_media() {
            media.set_connection(Some(ConnectionField::internet(addr)));
        }
        self
    }

    /// Set bandwidth of the current media section
    #[must_use]
    pub fn media_bandwidth(mut self, modifier: &str, bandwidth: u64) -> Self {
        if let Some(media) = self.current_media() {
            media.set_bandwidth(Some(BandwidthField::new(modifier, bandwidth)));
        }
        self
    }

    /// Add media-level attribute
    #[must_use]
    pub fn media_attribute(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(media) = self.current_media() {
            media.push_attribute(attribute(name, value));
        }
        self
    }

    /// Build the SDP
    ///
    /// # Errors
    ///
    /// Returns [`SdpError::MandatoryValue`] if the origin, session name or
    /// time block is missing, and [`SdpError::InvalidValue`] if a value would
    /// not render as a parsable line. An invalid earlier step is reported
    /// first.
    pub fn build(self) -> Result<SessionDescription> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let origin = self
            .origin
            .ok_or(SdpError::MandatoryValue("originator"))?;
        let name = self.name.ok_or(SdpError::MandatoryValue("session name"))?;

        let mut sdp = SessionDescription::new(origin, name, self.times)?;
        sdp.set_info(self.info)?;
        sdp.set_uri(self.uri)?;
        sdp.set_email(self.email)?;
        sdp.set_phone(self.phone)?;
        sdp.set_connection(self.connection)?;
        sdp.set_bandwidth(self.bandwidth)?;
        sdp.set_time_zones(self.time_zones)?;
        sdp.set_key(self.key)?;
        sdp.set_attributes(self.attributes)?;
        sdp.set_media(self.media)?;
        Ok(sdp)
    }

    /// Build and encode as string
    ///
    /// # Errors
    ///
    /// See [`SdpBuilder::build`].
    pub fn encode(self) -> Result<String> {
        self.build().map(|sdp| sdp.render())
    }
}

fn attribute(name: &str, value: Option<&str>) -> AttributeField {
    match value {
        Some(value) => AttributeField::new(name, value),
        None => AttributeField::property(name),
    }
}
