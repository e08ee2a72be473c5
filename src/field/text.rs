use super::{SdpField, check_text, impl_field_traits, parse_number};
use crate::error::FieldError;

/// Protocol version (`v=`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VersionField {
    version: u32,
}

impl VersionField {
    /// Create a version field
    #[must_use]
    pub fn new(version: u32) -> Self {
        Self { version }
    }

    /// Version number (0 for RFC 4566 descriptions)
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }
}

impl SdpField for VersionField {
    const TAG: char = 'v';
    const NAME: &'static str = "version";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        parse_number(value, Self::NAME, "version").map(Self::new)
    }

    fn value(&self) -> String {
        self.version.to_string()
    }
}

/// Session name (`s=`).
///
/// Parsing rejects an empty name; the direct constructor accepts anything and
/// emptiness is checked when the session is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SessionNameField {
    name: String,
}

impl SessionNameField {
    /// Create a session name field
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Session name text
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl SdpField for SessionNameField {
    const TAG: char = 's';
    const NAME: &'static str = "session name";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        if value.is_empty() {
            return Err(FieldError::syntax(Self::NAME, "empty session name"));
        }
        check_text(value, Self::NAME)?;
        Ok(Self::new(value))
    }

    fn value(&self) -> String {
        self.name.clone()
    }
}

/// Defines a field carrying uninterpreted text
macro_rules! text_field {
    ($(#[$doc:meta])* $name:ident, $tag:literal, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name {
            text: String,
        }

        impl $name {
            /// Create the field from its text
            #[must_use]
            pub fn new(text: impl Into<String>) -> Self {
                Self { text: text.into() }
            }

            /// Field text
            #[must_use]
            pub fn text(&self) -> &str {
                &self.text
            }

            /// Whether the text is empty
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.text.is_empty()
            }
        }

        impl SdpField for $name {
            const TAG: char = $tag;
            const NAME: &'static str = $label;

            fn parse_value(value: &str) -> Result<Self, FieldError> {
                check_text(value, Self::NAME)?;
                Ok(Self::new(value))
            }

            fn value(&self) -> String {
                self.text.clone()
            }
        }
    };
}

text_field!(
    /// Session or media information (`i=`)
    InfoField,
    'i',
    "information"
);
text_field!(
    /// URI of additional session information (`u=`)
    UriField,
    'u',
    "uri"
);
text_field!(
    /// Contact e-mail address (`e=`)
    EmailField,
    'e',
    "email"
);
text_field!(
    /// Contact phone number (`p=`)
    PhoneField,
    'p',
    "phone"
);

impl_field_traits!(
    VersionField,
    SessionNameField,
    InfoField,
    UriField,
    EmailField,
    PhoneField
);
