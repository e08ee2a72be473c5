use super::{SdpField, impl_field_traits, split_tokens};
use crate::error::FieldError;

/// Originator and session identifier (`o=`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OriginField {
    username: String,
    session_id: String,
    session_version: String,
    net_type: String,
    addr_type: String,
    address: String,
}

impl OriginField {
    /// Create an origin field from its six components
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        session_id: impl Into<String>,
        session_version: impl Into<String>,
        net_type: impl Into<String>,
        addr_type: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            session_id: session_id.into(),
            session_version: session_version.into(),
            net_type: net_type.into(),
            addr_type: addr_type.into(),
            address: address.into(),
        }
    }

    /// Username (`-` when the host has no user ids)
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Session id
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Session version
    #[must_use]
    pub fn session_version(&self) -> &str {
        &self.session_version
    }

    /// Network type (usually "IN")
    #[must_use]
    pub fn net_type(&self) -> &str {
        &self.net_type
    }

    /// Address type (usually "IP4" or "IP6")
    #[must_use]
    pub fn addr_type(&self) -> &str {
        &self.addr_type
    }

    /// Unicast address of the originating host
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Whether every component is present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            &self.username,
            &self.session_id,
            &self.session_version,
            &self.net_type,
            &self.addr_type,
            &self.address,
        ]
        .iter()
        .all(|part| !part.is_empty())
    }
}

impl SdpField for OriginField {
    const TAG: char = 'o';
    const NAME: &'static str = "origin";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        let parts = split_tokens(value, Self::NAME)?;
        let [username, session_id, session_version, net_type, addr_type, address] =
            parts.as_slice()
        else {
            return Err(FieldError::syntax(
                Self::NAME,
                format!("expected 6 tokens, found {}", parts.len()),
            ));
        };

        Ok(Self::new(
            *username,
            *session_id,
            *session_version,
            *net_type,
            *addr_type,
            *address,
        ))
    }

    fn value(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.username,
            self.session_id,
            self.session_version,
            self.net_type,
            self.addr_type,
            self.address
        )
    }
}

impl_field_traits!(OriginField);
