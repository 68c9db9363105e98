use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// 2 to 50 letters, decimal digits, whitespace, hyphens or underscores
static TRACKING_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{Nd}\s_-]{2,50}$").expect("tracking field pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingField {
    ShipperKey,
    Number,
}

impl fmt::Display for TrackingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingField::ShipperKey => f.write_str("shipper"),
            TrackingField::Number => f.write_str("tracking number"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackingError {
    #[error(
        "invalid {field}: expected 2 to 50 letters, digits, spaces, hyphens or underscores"
    )]
    InvalidFormat { field: TrackingField },
}

pub fn is_valid_field(value: &str) -> bool {
    TRACKING_FIELD.is_match(value)
}

/// Check a shipper key and tracking number before they are written
///
/// Both must pass. The first offending field is reported.
pub fn validate(shipper_key: &str, number: &str) -> Result<(), TrackingError> {
    if !is_valid_field(shipper_key) {
        return Err(TrackingError::InvalidFormat {
            field: TrackingField::ShipperKey,
        });
    }

    if !is_valid_field(number) {
        return Err(TrackingError::InvalidFormat {
            field: TrackingField::Number,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_typical_values() {
        assert!(validate("UPS", "1Z999AA10123456784").is_ok());
        assert!(validate("fedex_express_0", "7489 2215 0042").is_ok());
        assert!(validate("la-poste", "6A12345678901").is_ok());
        assert!(validate("deutsche_post", "JJD0001").is_ok());
    }

    #[test]
    fn test_accepts_unicode_letters_and_digits() {
        assert!(validate("почта_россии", "RA644000001RU").is_ok());
        assert!(validate("ヤマト運輸", "１２３４５６").is_ok());
    }

    #[test]
    fn test_rejects_too_short() {
        let err = validate("U", "1Z9").unwrap_err();
        assert_eq!(
            err,
            TrackingError::InvalidFormat {
                field: TrackingField::ShipperKey
            }
        );
    }

    #[test]
    fn test_rejects_empty_number() {
        let err = validate("UPS", "").unwrap_err();
        assert_eq!(
            err,
            TrackingError::InvalidFormat {
                field: TrackingField::Number
            }
        );
    }

    #[test]
    fn test_length_bounds_count_characters() {
        let fifty = "é".repeat(50);
        let fifty_one = "é".repeat(51);

        assert!(is_valid_field("ab"));
        assert!(is_valid_field(&fifty));
        assert!(!is_valid_field(&fifty_one));
    }

    #[test]
    fn test_rejects_punctuation() {
        for value in ["ups.com", "1Z/999", "<b>UPS</b>", "ups&co", "track?n=1"] {
            assert!(!is_valid_field(value), "accepted {value:?}");
        }
    }

    #[test]
    fn test_error_message_names_field() {
        let err = validate("UPS", "#").unwrap_err();
        assert!(err.to_string().starts_with("invalid tracking number"));
    }
}
