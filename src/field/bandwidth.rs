use super::{SdpField, check_text, impl_field_traits, parse_number};
use crate::error::FieldError;

/// Proposed bandwidth (`b=<modifier>:<kbps>`).
///
/// The modifier is usually `CT` (conference total) or `AS` (application
/// specific).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BandwidthField {
    modifier: String,
    bandwidth: u64,
}

impl BandwidthField {
    /// Create a bandwidth field from a modifier and a value in kbps
    #[must_use]
    pub fn new(modifier: impl Into<String>, bandwidth: u64) -> Self {
        Self {
            modifier: modifier.into(),
            bandwidth,
        }
    }

    /// Bandwidth modifier
    #[must_use]
    pub fn modifier(&self) -> &str {
        &self.modifier
    }

    /// Bandwidth in kilobits per second
    #[must_use]
    pub fn bandwidth(&self) -> u64 {
        self.bandwidth
    }
}

impl SdpField for BandwidthField {
    const TAG: char = 'b';
    const NAME: &'static str = "bandwidth";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        check_text(value, Self::NAME)?;
        let (modifier, bandwidth) = value
            .split_once(':')
            .ok_or_else(|| FieldError::syntax(Self::NAME, format!("missing ':' in {value:?}")))?;
        if modifier.is_empty() {
            return Err(FieldError::syntax(Self::NAME, "empty modifier"));
        }
        let bandwidth = parse_number(bandwidth, Self::NAME, "bandwidth")?;
        Ok(Self::new(modifier, bandwidth))
    }

    fn value(&self) -> String {
        format!("{}:{}", self.modifier, self.bandwidth)
    }
}

impl_field_traits!(BandwidthField);
