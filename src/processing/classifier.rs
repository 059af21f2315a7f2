//! IPv4 address validation and classful classification.

use super::binary::to_binary8;
use crate::models::{dotted, AddressClass, AddressClassification, ClassifiedAddress, Scope};

/// Validate a dotted-decimal candidate and classify it.
///
/// The whole string must consist of exactly four '.'-separated segments of
/// ASCII digits, each in 0-255. The first failure decides the reason; there
/// is no partial result.
///
/// # Examples
/// ```
/// use subnet_tutor::classify;
/// let result = classify("192.168.1.1").into_result().unwrap();
/// assert_eq!(result.address_class.label(), "C");
/// assert_eq!(result.scope.to_string(), "Private");
/// ```
pub fn classify(candidate: &str) -> AddressClassification {
    let octets = match parse_octets(candidate) {
        Ok(octets) => octets,
        Err(reason) => {
            log::debug!("classify({candidate:?}) invalid: {reason}");
            return AddressClassification::Invalid { reason };
        }
    };

    let binary: Vec<String> = octets.iter().map(|o| to_binary8(*o)).collect();
    let classified = ClassifiedAddress {
        address: candidate.to_string(),
        octets,
        address_class: address_class(octets[0]),
        scope: scope(&octets),
        binary_representation: dotted(&binary),
    };
    log::debug!(
        "classify({candidate}) class={} scope={}",
        classified.address_class,
        classified.scope
    );
    AddressClassification::Valid(classified)
}

fn parse_octets(candidate: &str) -> Result<[u8; 4], String> {
    let segments: Vec<&str> = candidate.split('.').collect();
    if segments.len() != 4 {
        return Err("IP address must have exactly 4 octets.".to_string());
    }

    let mut octets = [0u8; 4];
    for (i, segment) in segments.iter().enumerate() {
        octets[i] = parse_segment(segment)
            .ok_or_else(|| format!("Octet {} is invalid. Must be 0-255.", i + 1))?;
    }
    Ok(octets)
}

fn parse_segment(segment: &str) -> Option<u8> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // overlong digit runs fail here as well as values above 255
    segment.parse::<u8>().ok()
}

/// Classful band of an address by its first octet.
///
/// 0 and 127 belong to no band in this table and fall through to E.
pub fn address_class(first_octet: u8) -> AddressClass {
    match first_octet {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        _ => AddressClass::E,
    }
}

/// Private if inside 10/8, 172.16/12 or 192.168/16.
pub fn scope(octets: &[u8; 4]) -> Scope {
    match octets {
        [10, ..] | [172, 16..=31, ..] | [192, 168, ..] => Scope::Private,
        _ => Scope::Public,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(candidate: &str) -> ClassifiedAddress {
        classify(candidate)
            .into_result()
            .unwrap_or_else(|e| panic!("{candidate} should be valid: {e}"))
    }

    fn reason(candidate: &str) -> String {
        match classify(candidate) {
            AddressClassification::Invalid { reason } => reason,
            AddressClassification::Valid(v) => panic!("{candidate} should be invalid: {v:?}"),
        }
    }

    #[test]
    fn test_classify_private_class_c() {
        let a = valid("192.168.1.1");
        assert_eq!(a.address, "192.168.1.1");
        assert_eq!(a.octets, [192, 168, 1, 1]);
        assert_eq!(a.address_class, AddressClass::C);
        assert_eq!(a.scope, Scope::Private);
        assert_eq!(
            a.binary_representation,
            "11000000.10101000.00000001.00000001"
        );
    }

    #[test]
    fn test_classify_public_class_a() {
        let a = valid("8.8.8.8");
        assert_eq!(a.address_class, AddressClass::A);
        assert_eq!(a.scope, Scope::Public);
    }

    #[test]
    fn test_octet_count() {
        assert_eq!(reason("1.2.3"), "IP address must have exactly 4 octets.");
        assert_eq!(reason("1.2.3.4.5"), "IP address must have exactly 4 octets.");
        assert_eq!(reason(""), "IP address must have exactly 4 octets.");
    }

    #[test]
    fn test_octet_range() {
        let r = reason("256.1.1.1");
        assert!(r.contains("Octet 1"), "{r}");
        assert!(r.contains("0-255"), "{r}");
        assert_eq!(reason("1.2.3.999"), "Octet 4 is invalid. Must be 0-255.");
    }

    #[test]
    fn test_non_numeric_octets() {
        assert_eq!(reason("1.x.3.4"), "Octet 2 is invalid. Must be 0-255.");
        assert_eq!(reason("1..3.4"), "Octet 2 is invalid. Must be 0-255.");
        assert_eq!(reason("1.2.-3.4"), "Octet 3 is invalid. Must be 0-255.");
        assert_eq!(reason("1.2.+3.4"), "Octet 3 is invalid. Must be 0-255.");
        assert_eq!(reason("1.2.3.4 "), "Octet 4 is invalid. Must be 0-255.");
        assert_eq!(
            reason("1.2.3.99999999999999999999"),
            "Octet 4 is invalid. Must be 0-255."
        );
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(reason("300.x.3.4"), "Octet 1 is invalid. Must be 0-255.");
    }

    #[test]
    fn test_leading_zeros_accepted() {
        let a = valid("010.001.000.255");
        assert_eq!(a.octets, [10, 1, 0, 255]);
        assert_eq!(a.address, "010.001.000.255");
        assert_eq!(a.scope, Scope::Private);
    }

    #[test]
    fn test_address_class_bands() {
        assert_eq!(address_class(1), AddressClass::A);
        assert_eq!(address_class(126), AddressClass::A);
        assert_eq!(address_class(128), AddressClass::B);
        assert_eq!(address_class(191), AddressClass::B);
        assert_eq!(address_class(192), AddressClass::C);
        assert_eq!(address_class(223), AddressClass::C);
        assert_eq!(address_class(224), AddressClass::D);
        assert_eq!(address_class(239), AddressClass::D);
        assert_eq!(address_class(240), AddressClass::E);
        assert_eq!(address_class(255), AddressClass::E);
    }

    #[test]
    fn test_address_class_unbanded() {
        assert_eq!(address_class(0), AddressClass::E);
        assert_eq!(address_class(127), AddressClass::E);
        assert_eq!(valid("127.0.0.1").address_class.label(), "E (Experimental)");
    }

    #[test]
    fn test_scope_ranges() {
        assert_eq!(scope(&[10, 200, 3, 4]), Scope::Private);
        assert_eq!(scope(&[172, 15, 0, 1]), Scope::Public);
        assert_eq!(scope(&[172, 16, 0, 1]), Scope::Private);
        assert_eq!(scope(&[172, 31, 255, 255]), Scope::Private);
        assert_eq!(scope(&[172, 32, 0, 1]), Scope::Public);
        assert_eq!(scope(&[192, 168, 0, 0]), Scope::Private);
        assert_eq!(scope(&[192, 169, 0, 0]), Scope::Public);
        assert_eq!(scope(&[11, 0, 0, 0]), Scope::Public);
    }
}
