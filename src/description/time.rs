use std::fmt;
use std::str::FromStr;

use crate::error::{FieldError, SdpError};
use crate::field::{RepeatField, SdpField, TimeField};
use crate::lines::LINE_TERMINATOR;
use crate::parser::SdpParser;

/// A line inside a time block after its leading `t=` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeLine {
    /// `r=` repeat schedule
    Repeat(RepeatField),
    /// Additional `t=` line folded into the block
    Time(TimeField),
}

impl fmt::Display for TimeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repeat(repeat) => write!(f, "{repeat}"),
            Self::Time(time) => write!(f, "{time}"),
        }
    }
}

/// A `t=` line and the `r=` lines that apply to it.
///
/// With [`TimeFolding::Compatible`](crate::TimeFolding::Compatible) a block
/// can also contain further `t=` lines that immediately followed; they are
/// kept in position so the block renders back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeDescription {
    time: TimeField,
    tail: Vec<TimeLine>,
}

impl TimeDescription {
    /// Create a time description without repeats
    #[must_use]
    pub fn new(time: TimeField) -> Self {
        Self {
            time,
            tail: Vec::new(),
        }
    }

    /// Add a repeat schedule
    #[must_use]
    pub fn with_repeat(mut self, repeat: RepeatField) -> Self {
        self.push_repeat(repeat);
        self
    }

    /// Append a repeat schedule
    pub fn push_repeat(&mut self, repeat: RepeatField) {
        self.tail.push(TimeLine::Repeat(repeat));
    }

    pub(crate) fn push_folded_time(&mut self, time: TimeField) {
        self.tail.push(TimeLine::Time(time));
    }

    /// The leading time field
    #[must_use]
    pub fn time(&self) -> &TimeField {
        &self.time
    }

    /// Repeat schedules in declaration order
    pub fn repeats(&self) -> impl Iterator<Item = &RepeatField> {
        self.tail.iter().filter_map(|line| match line {
            TimeLine::Repeat(repeat) => Some(repeat),
            TimeLine::Time(_) => None,
        })
    }

    /// Additional `t=` lines folded into this block
    pub fn folded_times(&self) -> impl Iterator<Item = &TimeField> {
        self.tail.iter().filter_map(|line| match line {
            TimeLine::Time(time) => Some(time),
            TimeLine::Repeat(_) => None,
        })
    }

    /// Lines following the leading `t=` line, in order
    #[must_use]
    pub fn tail(&self) -> &[TimeLine] {
        &self.tail
    }

    /// Number of lines in the block
    #[must_use]
    pub fn line_count(&self) -> usize {
        1 + self.tail.len()
    }

    /// Check that every line reads back as the same field
    pub(crate) fn validate(&self) -> Result<(), FieldError> {
        self.time.validate()?;
        self.tail.iter().try_for_each(|line| match line {
            TimeLine::Repeat(repeat) => repeat.validate(),
            TimeLine::Time(time) => time.validate(),
        })
    }
}

impl fmt::Display for TimeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)?;
        for line in &self.tail {
            write!(f, "{LINE_TERMINATOR}{line}")?;
        }
        Ok(())
    }
}

impl FromStr for TimeDescription {
    type Err = SdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SdpParser::new().parse_time_description(s)
    }
}
