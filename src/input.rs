//! Pre-checks applied to raw user input before it reaches the calculators.
//!
//! The calculators assume in-range values; everything typed by a user goes
//! through here first.

use crate::TutorError;

/// Parse a trimmed, non-empty run of ASCII digits.
fn parse_digits(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Parse a host count of 1 or more.
///
/// # Errors
/// * [`TutorError::InvalidHostCount`] for empty, non-numeric or zero input
/// * [`TutorError::HostCountTooLarge`] when the value does not fit in `u32`
pub fn parse_host_count(raw: &str) -> Result<u32, TutorError> {
    let hosts = parse_digits(raw)
        .filter(|h| *h >= 1)
        .ok_or_else(|| TutorError::InvalidHostCount(raw.to_string()))?;
    u32::try_from(hosts).map_err(|_| TutorError::HostCountTooLarge(hosts))
}

/// Parse a single octet, 0-255.
pub fn parse_octet(raw: &str) -> Result<u8, TutorError> {
    parse_digits(raw)
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| TutorError::InvalidOctet(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_count() {
        assert_eq!(parse_host_count("5"), Ok(5));
        assert_eq!(parse_host_count(" 254\n"), Ok(254));
        assert_eq!(parse_host_count("4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn test_parse_host_count_rejects() {
        for raw in ["", "  ", "0", "-3", "abc", "12abc", "1.5", "+4"] {
            assert_eq!(
                parse_host_count(raw),
                Err(TutorError::InvalidHostCount(raw.to_string())),
                "input {raw:?}"
            );
        }
        assert_eq!(
            parse_host_count("4294967296"),
            Err(TutorError::HostCountTooLarge(4294967296))
        );
        // beyond u64 is just garbage
        assert!(matches!(
            parse_host_count("99999999999999999999999"),
            Err(TutorError::InvalidHostCount(_))
        ));
    }

    #[test]
    fn test_parse_host_count_message() {
        let err = parse_host_count("zero").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a valid number of hosts (1 or greater)."
        );
    }

    #[test]
    fn test_parse_octet() {
        assert_eq!(parse_octet("0"), Ok(0));
        assert_eq!(parse_octet("255"), Ok(255));
        assert_eq!(parse_octet(" 170 "), Ok(170));
        assert_eq!(
            parse_octet("256"),
            Err(TutorError::InvalidOctet("256".to_string()))
        );
        assert!(parse_octet("-1").is_err());
        assert!(parse_octet("").is_err());
        assert_eq!(
            parse_octet("x").unwrap_err().to_string(),
            "Enter a number between 0 and 255"
        );
    }
}
