//! Monetary input type for API boundary enforcement

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Strict format decimal - validates format during deserialization
///
/// Accepts only JSON strings so the format is fully under our control:
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects negative numbers
/// - Rejects empty strings
/// - Rejects scientific notation
///
/// Business validation (positivity, currency scale) happens later in the
/// transfer engine.
#[derive(Debug, Clone, Copy, ToSchema)]
#[schema(value_type = String, example = "40.00")]
pub struct StrictAmount(Decimal);

impl StrictAmount {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }

    /// Create from Decimal (for testing)
    #[cfg(test)]
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }
}

impl std::ops::Deref for StrictAmount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for StrictAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        // Only accept JSON strings for strict format control
        // JSON numbers bypass our format validation, so we reject them
        let s = String::deserialize(deserializer)?;

        if s.is_empty() {
            return Err(D::Error::custom("Amount cannot be empty"));
        }

        // Reject .5 format (must be 0.5)
        if s.starts_with('.') {
            return Err(D::Error::custom("Invalid format: use 0.5 not .5"));
        }

        // Reject 5. format (must be 5.0 or 5)
        if s.ends_with('.') {
            return Err(D::Error::custom("Invalid format: use 5.0 not 5."));
        }

        // Reject scientific notation (1.5e8, 1E10, etc.)
        if s.contains('e') || s.contains('E') {
            return Err(D::Error::custom(
                "Invalid format: scientific notation not allowed",
            ));
        }

        // Reject + prefix (should be implicit)
        if s.starts_with('+') {
            return Err(D::Error::custom("Invalid format: + prefix not allowed"));
        }

        let d = Decimal::from_str(&s)
            .map_err(|e| D::Error::custom(format!("Invalid decimal: {}", e)))?;

        if d.is_sign_negative() {
            return Err(D::Error::custom("Amount cannot be negative"));
        }

        Ok(StrictAmount(d))
    }
}

impl Serialize for StrictAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as string to preserve precision
        serializer.serialize_str(&self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<StrictAmount, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_valid_amounts() {
        assert_eq!(parse(r#""40.00""#).unwrap().inner(), Decimal::new(4000, 2));
        assert_eq!(parse(r#""0.5""#).unwrap().inner(), Decimal::new(5, 1));
        assert_eq!(parse(r#""100""#).unwrap().inner(), Decimal::from(100));
    }

    #[test]
    fn test_rejects_json_numbers() {
        assert!(parse("40.0").is_err());
        assert!(parse("100").is_err());
    }

    #[test]
    fn test_rejects_malformed_strings() {
        assert!(parse(r#""""#).is_err());
        assert!(parse(r#"".5""#).is_err());
        assert!(parse(r#""5.""#).is_err());
        assert!(parse(r#""1.5e8""#).is_err());
        assert!(parse(r#""1E2""#).is_err());
        assert!(parse(r#""+5""#).is_err());
        assert!(parse(r#""abc""#).is_err());
    }

    #[test]
    fn test_rejects_negative() {
        assert!(parse(r#""-1.00""#).is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let amount = parse(r#""40.00""#).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), r#""40.00""#);
    }
}
