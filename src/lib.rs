//! # sdp-session
//!
//! Parsing, modelling and rendering of SDP session descriptions
//! (RFC 4566 line grammar).
//!
//! ## Features
//!
//! - Typed fields for every `<tag>=<value>` line
//! - Session, time and media block aggregation with line-indexed errors
//! - Canonical rendering that reproduces parsed input
//! - NTP time and compact duration conversions
//!
//! ## Example
//!
//! ```rust
//! use sdp_session::SessionDescription;
//!
//! # fn example() -> Result<(), sdp_session::SdpError> {
//! let text = "v=0\r\n\
//!             o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n\
//!             s=SDP Seminar\r\n\
//!             t=2873397496 2873404696\r\n\
//!             m=audio 49170 RTP/AVP 0\r\n";
//!
//! let sdp: SessionDescription = text.parse()?;
//! assert_eq!(sdp.media_count(), 1);
//! assert_eq!(sdp.render(), text);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Descriptions**: [`SessionDescription`], [`TimeDescription`],
//!   [`MediaDescription`]
//! - **Parsing**: [`SdpParser`] configured by [`ParserConfig`]
//! - **Fields**: one type per line tag, unified by [`Field`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Public modules
/// Error types
pub mod error;
/// NTP time and duration encoding
pub mod ntp;

pub mod config;
pub mod description;
pub mod field;
pub mod lines;
pub mod parser;

mod builder;

#[cfg(test)]
mod builder_tests;
#[cfg(test)]
mod parser_proptest;

// Re-exports
pub use builder::SdpBuilder;
pub use config::{DuplicatePolicy, ParserConfig, ParserConfigBuilder, TimeFolding};
pub use description::{MediaDescription, SessionDescription, TimeDescription, TimeLine};
pub use error::{FieldError, Result, SdpError, TimeEncodingError};
pub use field::{
    AttributeField, BandwidthField, ConnectionField, EmailField, Field, FieldFactory, InfoField,
    KeyField, MediaField, OriginField, PhoneField, RepeatField, SdpField, SessionNameField,
    TimeField, TimeZoneAdjustment, TimeZoneField, UriField, VersionField,
};
pub use ntp::NtpTime;
pub use parser::SdpParser;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a session description with the default configuration
///
/// # Errors
///
/// See [`SdpParser::parse`].
pub fn parse(text: &str) -> Result<SessionDescription> {
    SdpParser::new().parse(text)
}

/// Render a session description in canonical field order
#[must_use]
pub fn render(sdp: &SessionDescription) -> String {
    sdp.render()
}

/// Prelude for common imports
///
/// Convenient re-exports
pub mod prelude {
    pub use crate::{
        Field, MediaDescription, NtpTime, ParserConfig, SdpBuilder, SdpError, SdpField,
        SdpParser, SessionDescription, TimeDescription, parse, render,
    };
}
