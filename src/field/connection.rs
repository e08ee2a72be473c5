use super::{SdpField, impl_field_traits, split_tokens};
use crate::error::FieldError;

/// Connection data (`c=`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ConnectionField {
    net_type: String,
    addr_type: String,
    address: String,
}

impl ConnectionField {
    /// Create a connection field
    #[must_use]
    pub fn new(
        net_type: impl Into<String>,
        addr_type: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            net_type: net_type.into(),
            addr_type: addr_type.into(),
            address: address.into(),
        }
    }

    /// Internet connection, guessing the address type from the address
    #[must_use]
    pub fn internet(address: &str) -> Self {
        let addr_type = if address.contains(':') { "IP6" } else { "IP4" };
        Self::new("IN", addr_type, address)
    }

    /// Network type
    #[must_use]
    pub fn net_type(&self) -> &str {
        &self.net_type
    }

    /// Address type
    #[must_use]
    pub fn addr_type(&self) -> &str {
        &self.addr_type
    }

    /// Connection address, possibly with `/ttl` and `/count` suffixes
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Address without any `/ttl` or `/count` suffix
    #[must_use]
    pub fn base_address(&self) -> &str {
        self.address
            .split_once('/')
            .map_or(self.address.as_str(), |(base, _)| base)
    }
}

impl SdpField for ConnectionField {
    const TAG: char = 'c';
    const NAME: &'static str = "connection";

    fn parse_value(value: &str) -> Result<Self, FieldError> {
        let parts = split_tokens(value, Self::NAME)?;
        let [net_type, addr_type, address] = parts.as_slice() else {
            return Err(FieldError::syntax(
                Self::NAME,
                format!("expected 3 tokens, found {}", parts.len()),
            ));
        };
        Ok(Self::new(*net_type, *addr_type, *address))
    }

    fn value(&self) -> String {
        format!("{} {} {}", self.net_type, self.addr_type, self.address)
    }
}

impl_field_traits!(ConnectionField);
