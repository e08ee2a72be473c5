//! NTP time and duration encodings used by `t=`, `r=` and `z=` fields.
//!
//! SDP carries absolute times as decimal seconds since the NTP epoch
//! (1900-01-01 00:00:00 UTC). The value `0` is reserved: as a start time it
//! marks a permanent session, as a stop time an unbounded one. It is never
//! converted into a calendar date.
//!
//! Durations are decimal seconds, optionally written in a compact form with
//! a single unit suffix (`d`, `h`, `m`, `s`). Rendering always produces plain
//! seconds.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::TimeEncodingError;

/// NTP epoch offset from Unix epoch (seconds from 1900 to 1970)
pub const NTP_UNIX_OFFSET: u64 = 2_208_988_800;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Absolute time as whole seconds since the NTP epoch.
///
/// Every non-zero value held by this type is representable as a
/// [`SystemTime`] on the current platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NtpTime(u64);

impl NtpTime {
    /// The zero sentinel (permanent start / unbounded stop).
    pub const ZERO: Self = Self(0);

    /// Create from raw NTP seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimeEncodingError::OutOfRange`] if the value cannot be
    /// represented as a calendar instant.
    pub fn from_seconds(seconds: u64) -> Result<Self, TimeEncodingError> {
        if seconds == 0 {
            return Ok(Self::ZERO);
        }
        calendar_instant(seconds)
            .map(|_| Self(seconds))
            .ok_or_else(|| TimeEncodingError::OutOfRange(seconds.to_string()))
    }

    /// Convert an instant to NTP seconds, truncating to whole seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimeEncodingError::BeforeEpoch`] for instants at or before
    /// the NTP epoch; the epoch itself would collide with the zero sentinel.
    pub fn from_system_time(time: SystemTime) -> Result<Self, TimeEncodingError> {
        let seconds = match time.duration_since(UNIX_EPOCH) {
            Ok(since) => since
                .as_secs()
                .checked_add(NTP_UNIX_OFFSET)
                .ok_or_else(|| TimeEncodingError::OutOfRange(format!("{time:?}")))?,
            Err(before) => {
                let before = before.duration();
                // floor towards the past for sub-second remainders
                let back = before.as_secs() + u64::from(before.subsec_nanos() > 0);
                NTP_UNIX_OFFSET
                    .checked_sub(back)
                    .ok_or(TimeEncodingError::BeforeEpoch)?
            }
        };

        if seconds == 0 {
            return Err(TimeEncodingError::BeforeEpoch);
        }
        Self::from_seconds(seconds)
    }

    /// Current wall-clock time, or [`NtpTime::ZERO`] if the clock is unusable.
    #[must_use]
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now()).unwrap_or(Self::ZERO)
    }

    /// Parse a decimal NTP token.
    ///
    /// # Errors
    ///
    /// Returns [`TimeEncodingError::InvalidTime`] for non-decimal tokens or a
    /// redundant leading zero, and [`TimeEncodingError::OutOfRange`] for values
    /// that do not fit.
    pub fn parse(token: &str) -> Result<Self, TimeEncodingError> {
        if !is_canonical_decimal(token) {
            return Err(TimeEncodingError::InvalidTime(token.to_string()));
        }
        let seconds = token
            .parse::<u64>()
            .map_err(|_| TimeEncodingError::OutOfRange(token.to_string()))?;
        Self::from_seconds(seconds)
    }

    /// Raw NTP seconds
    #[must_use]
    pub fn as_seconds(self) -> u64 {
        self.0
    }

    /// Whether this is the zero sentinel
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Calendar instant, `None` for the zero sentinel
    #[must_use]
    pub fn to_system_time(self) -> Option<SystemTime> {
        if self.is_zero() {
            return None;
        }
        calendar_instant(self.0)
    }
}

impl fmt::Display for NtpTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NtpTime {
    type Err = TimeEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<SystemTime> for NtpTime {
    type Error = TimeEncodingError;

    fn try_from(time: SystemTime) -> Result<Self, Self::Error> {
        Self::from_system_time(time)
    }
}

fn calendar_instant(seconds: u64) -> Option<SystemTime> {
    if seconds >= NTP_UNIX_OFFSET {
        UNIX_EPOCH.checked_add(Duration::from_secs(seconds - NTP_UNIX_OFFSET))
    } else {
        UNIX_EPOCH.checked_sub(Duration::from_secs(NTP_UNIX_OFFSET - seconds))
    }
}

fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Decimal digits without a redundant leading zero, so the value renders back
/// to the same token
pub(crate) fn is_canonical_decimal(token: &str) -> bool {
    is_decimal(token) && (token.len() == 1 || !token.starts_with('0'))
}

/// Parse a duration token.
///
/// A bare integer is taken as seconds and must not carry a leading zero.
/// Only when the token is not a bare integer is the compact `<int><d|h|m|s>`
/// form tried.
///
/// # Errors
///
/// Returns [`TimeEncodingError::InvalidDuration`] when neither form matches
/// and [`TimeEncodingError::DurationOverflow`] when the value overflows.
pub fn parse_duration(token: &str) -> Result<Duration, TimeEncodingError> {
    if is_decimal(token) {
        if !is_canonical_decimal(token) {
            return Err(TimeEncodingError::InvalidDuration(token.to_string()));
        }
        return token
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| TimeEncodingError::DurationOverflow(token.to_string()));
    }

    let invalid = || TimeEncodingError::InvalidDuration(token.to_string());
    let (unit_at, unit) = token.char_indices().next_back().ok_or_else(invalid)?;
    let multiplier = match unit {
        'd' => SECS_PER_DAY,
        'h' => SECS_PER_HOUR,
        'm' => SECS_PER_MINUTE,
        's' => 1,
        _ => return Err(invalid()),
    };

    let digits = &token[..unit_at];
    if !is_decimal(digits) {
        return Err(invalid());
    }

    digits
        .parse::<u64>()
        .ok()
        .and_then(|value| value.checked_mul(multiplier))
        .map(Duration::from_secs)
        .ok_or_else(|| TimeEncodingError::DurationOverflow(token.to_string()))
}

/// Render a duration as whole seconds.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    duration.as_secs().to_string()
}

/// Parse a signed duration token (`z=` offsets), e.g. `-1h` or `3600`.
///
/// # Errors
///
/// Same as [`parse_duration`], plus overflow of the signed range.
pub fn parse_offset(token: &str) -> Result<i64, TimeEncodingError> {
    let (negative, magnitude) = match token.strip_prefix('-') {
        Some("0") => return Err(TimeEncodingError::InvalidDuration(token.to_string())),
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let seconds = parse_duration(magnitude)?.as_secs();
    let seconds = i64::try_from(seconds)
        .map_err(|_| TimeEncodingError::DurationOverflow(token.to_string()))?;
    Ok(if negative { -seconds } else { seconds })
}

/// Render a signed offset as whole seconds.
#[must_use]
pub fn format_offset(seconds: i64) -> String {
    seconds.to_string()
}
