//! Address classification result types.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Legacy classful address bands.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    #[serde(rename = "D (Multicast)")]
    D,
    #[serde(rename = "E (Experimental)")]
    E,
}

impl AddressClass {
    /// Display label, e.g. "D (Multicast)".
    pub fn label(&self) -> &'static str {
        match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D (Multicast)",
            AddressClass::E => "E (Experimental)",
        }
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether an address sits in one of the RFC 1918 private blocks.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Private,
    Public,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Scope::Private => f.write_str("Private"),
            Scope::Public => f.write_str("Public"),
        }
    }
}

/// A syntactically valid address with its derived properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedAddress {
    /// The address exactly as it was given.
    pub address: String,
    pub octets: [u8; 4],
    pub address_class: AddressClass,
    pub scope: Scope,
    /// Four 8-bit groups joined by '.'.
    pub binary_representation: String,
}

impl ClassifiedAddress {
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }
}

/// Outcome of classifying a candidate address string.
///
/// Invalid input is a value, not an error: the reason is meant to be shown
/// to whoever typed the address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressClassification {
    Invalid { reason: String },
    Valid(ClassifiedAddress),
}

impl AddressClassification {
    pub fn is_valid(&self) -> bool {
        matches!(self, AddressClassification::Valid(_))
    }

    /// Convert into a `Result` for callers that want to use `?`.
    pub fn into_result(self) -> Result<ClassifiedAddress, crate::TutorError> {
        match self {
            AddressClassification::Valid(address) => Ok(address),
            AddressClassification::Invalid { reason } => {
                Err(crate::TutorError::InvalidAddressFormat(reason))
            }
        }
    }
}

impl Serialize for AddressClassification {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AddressClassification::Invalid { reason } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("valid", &false)?;
                map.serialize_entry("reason", reason)?;
                map.end()
            }
            AddressClassification::Valid(a) => {
                let mut map = serializer.serialize_map(Some(6))?;
                map.serialize_entry("valid", &true)?;
                map.serialize_entry("address", &a.address)?;
                map.serialize_entry("octets", &a.octets)?;
                map.serialize_entry("class", &a.address_class)?;
                map.serialize_entry("type", &a.scope)?;
                map.serialize_entry("binary", &a.binary_representation)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClassifiedAddress {
        ClassifiedAddress {
            address: "10.0.0.1".to_string(),
            octets: [10, 0, 0, 1],
            address_class: AddressClass::A,
            scope: Scope::Private,
            binary_representation: "00001010.00000000.00000000.00000001".to_string(),
        }
    }

    #[test]
    fn test_class_labels() {
        assert_eq!(AddressClass::C.to_string(), "C");
        assert_eq!(AddressClass::D.to_string(), "D (Multicast)");
        assert_eq!(AddressClass::E.label(), "E (Experimental)");
    }

    #[test]
    fn test_serialize_invalid() {
        let c = AddressClassification::Invalid {
            reason: "IP address must have exactly 4 octets.".to_string(),
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["reason"], "IP address must have exactly 4 octets.");
    }

    #[test]
    fn test_serialize_valid() {
        let json = serde_json::to_value(AddressClassification::Valid(sample())).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["address"], "10.0.0.1");
        assert!(json.get("ip").is_none());
        assert_eq!(json["class"], "A");
        assert_eq!(json["type"], "Private");
        assert_eq!(json["octets"][3], 1);
    }

    #[test]
    fn test_into_result() {
        let ok = AddressClassification::Valid(sample()).into_result().unwrap();
        assert_eq!(ok.addr(), Ipv4Addr::new(10, 0, 0, 1));

        let err = AddressClassification::Invalid {
            reason: "Octet 2 is invalid. Must be 0-255.".to_string(),
        }
        .into_result()
        .unwrap_err();
        assert_eq!(err.to_string(), "Octet 2 is invalid. Must be 0-255.");
    }
}
