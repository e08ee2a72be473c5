use super::{SdpField, impl_field_traits, parse_number, split_tokens};
use crate::error::FieldError;

/// Media announcement (`m=<media> <port>[/<count>] <proto> <fmt> ...`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaField {
    media: String,
    port: u16,
    port_count: Option<u16>,
    protocol: String,
    formats: Vec<String>,
}

impl MediaField {
    /// Create a media field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Syntax`] when `formats` is empty or a component
    /// would not render as a single token.
    pub fn new(
        media: impl Into<String>,
        port: u16,
        protocol: impl Into<String>,
        formats: Vec<String>,
    ) -> Result<Self, FieldError> {
        let field = Self::from_parts(media.into(), port, protocol.into(), formats)?;
        field.validate()?;
        Ok(field)
    }

    fn from_parts(
        media: String,
        port: u16,
        protocol: String,
        formats: Vec<String>,
    ) -> Result<Self, FieldError> {
        if formats.is_empty() {
            return Err(FieldError::syntax(Self::NAME, "at least one format required"));
        }
        Ok(Self {
            media,
            port,
            port_count: None,
            protocol,
            formats,
        })
    }

    /// Set the number of consecutive ports (`<port>/<count>`)
    #[must_use]
    pub fn with_port_count(mut self, count: u16) -> Self {
        self.port_count = Some(count);
        self
    }

    /// Media type (audio, video, text, application, message)
    #[must_use]
    pub fn media(&self) -> &str {
        &self.media
    }

    /// Transport port
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Number of ports, if given
    #[must_use]
    pub fn port_count(&self) -> Option<u16> {
        self.port_count
    }

    /// Transport protocol (RTP/AVP, udp, ...)
    #[must_use]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Media format descriptions (payload types for RTP)
    #[must_use]
    pub fn formats(&self) -> &[String] {
        &self.formats
    }
}

impl SdpField for MediaField {
    const TAG: char = 'm';
    const NAME: &'static str = "media";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        let parts = split_tokens(value, Self::NAME)?;
        let [media, port, protocol, formats @ ..] = parts.as_slice() else {
            return Err(FieldError::syntax(
                Self::NAME,
                format!("expected at least 4 tokens, found {}", parts.len()),
            ));
        };

        let (port, port_count) = match port.split_once('/') {
            Some((port, count)) => (port, Some(parse_number(count, Self::NAME, "port count")?)),
            None => (*port, None),
        };
        let port = parse_number(port, Self::NAME, "port")?;

        let field = Self::from_parts(
            (*media).to_string(),
            port,
            (*protocol).to_string(),
            formats.iter().map(ToString::to_string).collect(),
        )?;
        Ok(Self { port_count, ..field })
    }

    fn value(&self) -> String {
        let port = match self.port_count {
            Some(count) => format!("{}/{count}", self.port),
            None => self.port.to_string(),
        };
        format!(
            "{} {port} {} {}",
            self.media,
            self.protocol,
            self.formats.join(" ")
        )
    }
}

impl_field_traits!(MediaField);
