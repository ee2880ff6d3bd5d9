use std::fmt;

use thiserror::Error;

/// Host of the messaging service that receives booking requests.
pub const MESSAGING_DOMAIN: &str = "wa.me";

/// Clinic contact on the messaging service, country code first, digits only.
pub const CLINIC_CONTACT: &str = "919457888496";

const _: () = assert!(
    is_valid_contact(CLINIC_CONTACT),
    "CLINIC_CONTACT must be a non-empty string of digits"
);

/// Height reserved for the fixed navigation bar when scrolling to a section.
pub const NAV_OFFSET: f64 = 80.0;

/// Vertical offset past which the navigation bar switches to its scrolled style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_DURATION_MS: u32 = 1000;
pub const REVEAL_EASING: &str = "cubic-bezier(0.23, 1, 0.32, 1)";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("destination contact is empty")]
    EmptyContact,
    #[error("destination contact contains non-digit character {0:?}")]
    NonDigitContact(char),
}

pub const fn is_valid_contact(contact: &str) -> bool {
    let bytes = contact.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return false;
        }
        i += 1;
    }
    true
}

/// A validated messaging contact id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactId(String);

impl ContactId {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::EmptyContact);
        }
        if let Some(c) = raw.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ConfigError::NonDigitContact(c));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn clinic() -> Result<Self, ConfigError> {
        Self::parse(CLINIC_CONTACT)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clinic_contact_is_valid() {
        assert_eq!(ContactId::clinic().unwrap().to_string(), CLINIC_CONTACT);
    }

    #[test]
    fn rejects_empty_contact() {
        assert_eq!(ContactId::parse("  "), Err(ConfigError::EmptyContact));
        assert!(!is_valid_contact(""));
    }

    #[test]
    fn rejects_formatted_numbers() {
        assert_eq!(
            ContactId::parse("+91 94578"),
            Err(ConfigError::NonDigitContact('+'))
        );
        assert!(!is_valid_contact("91-945"));
    }
}
