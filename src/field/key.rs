use super::{SdpField, check_text, impl_field_traits};
use crate::error::FieldError;

/// Encryption key (`k=<method>[:<key-data>]`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyField {
    method: String,
    key: Option<String>,
}

impl KeyField {
    /// Create a key field
    #[must_use]
    pub fn new(method: impl Into<String>, key: Option<String>) -> Self {
        Self {
            method: method.into(),
            key,
        }
    }

    /// Key method (`clear`, `base64`, `uri`, `prompt`)
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Key data, absent for `prompt`
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl SdpField for KeyField {
    const TAG: char = 'k';
    const NAME: &'static str = "key";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        check_text(value, Self::NAME)?;
        let (method, key) = match value.split_once(':') {
            Some((method, key)) => (method, Some(key.to_string())),
            None => (value, None),
        };
        if method.is_empty() {
            return Err(FieldError::syntax(Self::NAME, "empty key method"));
        }
        Ok(Self::new(method, key))
    }

    fn value(&self) -> String {
        match &self.key {
            Some(key) => format!("{}:{key}", self.method),
            None => self.method.clone(),
        }
    }
}

impl_field_traits!(KeyField);
