use std::fmt;
use std::time::{Duration, SystemTime};

use super::{SdpField, impl_field_traits, split_tokens};
use crate::error::{FieldError, TimeEncodingError};
use crate::ntp::{self, NtpTime};

/// Session start and stop times (`t=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeField {
    start: NtpTime,
    stop: NtpTime,
}

impl TimeField {
    /// Create a time field from NTP times
    #[must_use]
    pub fn new(start: NtpTime, stop: NtpTime) -> Self {
        Self { start, stop }
    }

    /// Create a time field from calendar instants; `None` maps to the zero
    /// sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`TimeEncodingError`] if an instant precedes the NTP epoch.
    pub fn from_system_times(
        start: Option<SystemTime>,
        stop: Option<SystemTime>,
    ) -> Result<Self, TimeEncodingError> {
        let convert = |t: Option<SystemTime>| t.map_or(Ok(NtpTime::ZERO), NtpTime::from_system_time);
        Ok(Self::new(convert(start)?, convert(stop)?))
    }

    /// A permanent, unbounded session (`t=0 0`)
    #[must_use]
    pub fn permanent() -> Self {
        Self::default()
    }

    /// Start time
    #[must_use]
    pub fn start(&self) -> NtpTime {
        self.start
    }

    /// Stop time
    #[must_use]
    pub fn stop(&self) -> NtpTime {
        self.stop
    }

    /// Start as a calendar instant, `None` when permanent
    #[must_use]
    pub fn start_time(&self) -> Option<SystemTime> {
        self.start.to_system_time()
    }

    /// Stop as a calendar instant, `None` when unbounded
    #[must_use]
    pub fn stop_time(&self) -> Option<SystemTime> {
        self.stop.to_system_time()
    }

    /// Start time is zero
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.start.is_zero()
    }

    /// Stop time is zero
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.stop.is_zero()
    }
}

impl SdpField for TimeField {
    const TAG: char = 't';
    const NAME: &'static str = "time";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        let parts = split_tokens(value, Self::NAME)?;
        let [start, stop] = parts.as_slice() else {
            return Err(FieldError::syntax(
                Self::NAME,
                format!("expected 2 tokens, found {}", parts.len()),
            ));
        };
        Ok(Self::new(NtpTime::parse(start)?, NtpTime::parse(stop)?))
    }

    fn value(&self) -> String {
        format!("{} {}", self.start, self.stop)
    }
}

/// Repeat schedule for the preceding time field (`r=`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepeatField {
    interval: Duration,
    active_duration: Duration,
    offsets: Vec<Duration>,
}

impl RepeatField {
    /// Create a repeat field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Syntax`] when `offsets` is empty.
    pub fn new(
        interval: Duration,
        active_duration: Duration,
        offsets: Vec<Duration>,
    ) -> Result<Self, FieldError> {
        if offsets.is_empty() {
            return Err(FieldError::syntax(Self::NAME, "at least one offset required"));
        }
        Ok(Self {
            interval,
            active_duration,
            offsets,
        })
    }

    /// Repeat interval
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Active duration of each repetition
    #[must_use]
    pub fn active_duration(&self) -> Duration {
        self.active_duration
    }

    /// Offsets from the start time
    #[must_use]
    pub fn offsets(&self) -> &[Duration] {
        &self.offsets
    }
}

impl SdpField for RepeatField {
    const TAG: char = 'r';
    const NAME: &'static str = "repeat";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        let parts = split_tokens(value, Self::NAME)?;
        let [interval, active_duration, offsets @ ..] = parts.as_slice() else {
            return Err(FieldError::syntax(
                Self::NAME,
                format!("expected at least 3 tokens, found {}", parts.len()),
            ));
        };
        let offsets = offsets
            .iter()
            .map(|offset| ntp::parse_duration(offset))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(
            ntp::parse_duration(interval)?,
            ntp::parse_duration(active_duration)?,
            offsets,
        )
    }

    fn value(&self) -> String {
        let mut parts = vec![
            ntp::format_duration(self.interval),
            ntp::format_duration(self.active_duration),
        ];
        parts.extend(self.offsets.iter().copied().map(ntp::format_duration));
        parts.join(" ")
    }
}

/// One adjustment of a `z=` line: from `adjustment_time` on, repeat
/// calculations are shifted by `offset` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeZoneAdjustment {
    adjustment_time: NtpTime,
    offset: i64,
}

impl TimeZoneAdjustment {
    /// Create an adjustment
    #[must_use]
    pub fn new(adjustment_time: NtpTime, offset: i64) -> Self {
        Self {
            adjustment_time,
            offset,
        }
    }

    /// Parse an adjustment from its two tokens
    ///
    /// # Errors
    ///
    /// Returns [`TimeEncodingError`] if either token fails to convert.
    pub fn parse(time: &str, offset: &str) -> Result<Self, TimeEncodingError> {
        Ok(Self::new(NtpTime::parse(time)?, ntp::parse_offset(offset)?))
    }

    /// Time at which the adjustment takes effect
    #[must_use]
    pub fn adjustment_time(&self) -> NtpTime {
        self.adjustment_time
    }

    /// Replace the adjustment time
    pub fn set_adjustment_time(&mut self, adjustment_time: NtpTime) {
        self.adjustment_time = adjustment_time;
    }

    /// Offset in seconds relative to the base time
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Replace the offset
    pub fn set_offset(&mut self, offset: i64) {
        self.offset = offset;
    }
}

impl fmt::Display for TimeZoneAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.adjustment_time,
            ntp::format_offset(self.offset)
        )
    }
}

/// Time zone adjustments (`z=`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeZoneField {
    adjustments: Vec<TimeZoneAdjustment>,
}

impl TimeZoneField {
    /// Create a time zone field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Syntax`] when `adjustments` is empty.
    pub fn new(adjustments: Vec<TimeZoneAdjustment>) -> Result<Self, FieldError> {
        if adjustments.is_empty() {
            return Err(FieldError::syntax(
                Self::NAME,
                "at least one adjustment required",
            ));
        }
        Ok(Self { adjustments })
    }

    /// Adjustments in declaration order
    #[must_use]
    pub fn adjustments(&self) -> &[TimeZoneAdjustment] {
        &self.adjustments
    }
}

impl SdpField for TimeZoneField {
    const TAG: char = 'z';
    const NAME: &'static str = "time zone";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        let parts = split_tokens(value, Self::NAME)?;
        if parts.len() % 2 != 0 {
            return Err(FieldError::syntax(
                Self::NAME,
                format!("expected time/offset pairs, found {} tokens", parts.len()),
            ));
        }

        let adjustments = parts
            .chunks_exact(2)
            .map(|pair| TimeZoneAdjustment::parse(pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(adjustments)
    }

    fn value(&self) -> String {
        self.adjustments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl_field_traits!(TimeField, RepeatField, TimeZoneField);
