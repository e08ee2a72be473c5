use super::{SdpField, check_text, impl_field_traits};
use crate::error::FieldError;

/// Attribute (`a=<name>` or `a=<name>:<value>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AttributeField {
    name: String,
    value: Option<String>,
}

impl AttributeField {
    /// Create a value attribute
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create a property attribute (no value), e.g. `recvonly`
    #[must_use]
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Attribute name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value, `None` for property attributes
    #[must_use]
    pub fn attribute_value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl SdpField for AttributeField {
    const TAG: char = 'a';
    const NAME: &'static str = "attribute";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        check_text(value, Self::NAME)?;
        let attribute = match value.split_once(':') {
            Some((name, value)) => Self::new(name, value),
            None => Self::property(value),
        };
        if attribute.name.is_empty() {
            return Err(FieldError::syntax(Self::NAME, "empty attribute name"));
        }
        Ok(attribute)
    }

    fn value(&self) -> String {
        match &self.value {
            Some(value) => format!("{}:{value}", self.name),
            None => self.name.clone(),
        }
    }
}

impl_field_traits!(AttributeField);
