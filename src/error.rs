use thiserror::Error;

/// Errors produced while converting NTP times and durations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeEncodingError {
    /// Token is not an unsigned decimal integer
    #[error("invalid NTP time: {0:?}")]
    InvalidTime(String),

    /// NTP value cannot be represented as a calendar instant on this platform
    #[error("NTP time {0} is out of range")]
    OutOfRange(String),

    /// Instant lies before the NTP epoch (1900-01-01)
    #[error("instant precedes the NTP epoch")]
    BeforeEpoch,

    /// Token is neither integer seconds nor `<int><d|h|m|s>`
    #[error("invalid duration: {0:?}")]
    InvalidDuration(String),

    /// Duration overflows the 64-bit seconds encoding
    #[error("duration {0:?} overflows")]
    DurationOverflow(String),
}

/// Errors produced while parsing the value of a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Leading tag is not one of the recognized field letters
    #[error("no such field: {0:?}")]
    NoSuchField(char),

    /// Line is not of the form `<tag>=<value>`
    #[error("malformed line: {0:?}")]
    Malformed(String),

    /// Value does not match the sub-grammar of its field
    #[error("invalid {field} field: {reason}")]
    Syntax {
        /// Field name
        field: &'static str,
        /// Description of the mismatch
        reason: String,
    },

    /// Embedded time or duration token failed to convert
    #[error(transparent)]
    Time(#[from] TimeEncodingError),
}

impl FieldError {
    pub(crate) fn syntax(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Syntax {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors returned by session description parsing and construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdpError {
    /// Missing or misordered mandatory lines, misplaced fields, empty body.
    ///
    /// A recognized tag in a scope that does not allow it (`r=` outside a
    /// time block, `z=` inside a media block) is reported here rather than
    /// as [`SdpError::UnknownField`].
    #[error("structural error at line {line}: {reason}")]
    Structural {
        /// Index of the offending line
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// Leading tag is not one of the recognized field letters
    #[error("unknown field {tag:?} at line {line}")]
    UnknownField {
        /// Index of the offending line
        line: usize,
        /// The unrecognized tag
        tag: char,
    },

    /// A field value does not match its sub-grammar
    #[error("syntax error at line {line}: {source}")]
    FieldSyntax {
        /// Index of the offending line
        line: usize,
        /// Underlying field error
        #[source]
        source: FieldError,
    },

    /// Mandatory value empty on the direct construction path
    #[error("mandatory value missing: {0}")]
    MandatoryValue(&'static str),

    /// NTP time or duration token out of range or unparsable
    #[error("time encoding error at line {line}: {source}")]
    TimeEncoding {
        /// Index of the offending line
        line: usize,
        /// Underlying conversion error
        #[source]
        source: TimeEncodingError,
    },

    /// Value on the direct construction path would not render as a
    /// parsable line
    #[error("invalid value: {0}")]
    InvalidValue(#[source] FieldError),
}

impl SdpError {
    /// Index of the line that caused the error, if the error came from text
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Structural { line, .. }
            | Self::UnknownField { line, .. }
            | Self::FieldSyntax { line, .. }
            | Self::TimeEncoding { line, .. } => Some(*line),
            Self::MandatoryValue(_) | Self::InvalidValue(_) => None,
        }
    }

    pub(crate) fn structural(line: usize, reason: impl Into<String>) -> Self {
        Self::Structural {
            line,
            reason: reason.into(),
        }
    }

    /// Attach a line index to a field-level error
    pub(crate) fn at_line(line: usize, err: FieldError) -> Self {
        match err {
            FieldError::NoSuchField(tag) => Self::UnknownField { line, tag },
            FieldError::Time(source) => Self::TimeEncoding { line, source },
            other => Self::FieldSyntax {
                line,
                source: other,
            },
        }
    }
}

/// Result type alias for SDP operations
pub type Result<T> = std::result::Result<T, SdpError>;
