//! Wallet data model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Wallet classification governing transfer-initiation eligibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WalletType {
    User = 1,
    Merchant = 2,
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletType::User => write!(f, "user"),
            WalletType::Merchant => write!(f, "merchant"),
        }
    }
}

impl FromStr for WalletType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(WalletType::User),
            "merchant" => Ok(WalletType::Merchant),
            _ => Err(format!("Invalid wallet type: {}", s)),
        }
    }
}

impl TryFrom<i16> for WalletType {
    type Error = String;

    fn try_from(val: i16) -> Result<Self, Self::Error> {
        match val {
            1 => Ok(WalletType::User),
            2 => Ok(WalletType::Merchant),
            other => Err(format!("Invalid wallet type id: {}", other)),
        }
    }
}

impl From<WalletType> for i16 {
    fn from(val: WalletType) -> i16 {
        val as i16
    }
}

/// An account holding a monetary balance
///
/// The credential hash is loaded for the registration uniqueness flow but is
/// never serialized into API responses.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Wallet {
    pub wallet_id: i64,
    pub full_name: String,
    pub nif: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[schema(value_type = String, example = "100.00")]
    pub balance: Decimal,
    #[sqlx(rename = "wallet_type_id", try_from = "i16")]
    pub wallet_type: WalletType,
}

impl Wallet {
    /// Add to the balance. No validation here: the transfer engine checks
    /// every precondition before mutating.
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Subtract from the balance. Sufficiency is the caller's invariant.
    pub fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
    }

    /// Only user wallets may initiate transfers; merchants can only receive.
    pub fn can_initiate_transfers(&self) -> bool {
        self.wallet_type == WalletType::User
    }

    pub fn has_balance_for(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(wallet_type: WalletType, balance: &str) -> Wallet {
        Wallet {
            wallet_id: 1,
            full_name: "Test Holder".to_string(),
            nif: "12345678900".to_string(),
            email: "holder@example.com".to_string(),
            password_hash: "$argon2id$test".to_string(),
            balance: balance.parse().unwrap(),
            wallet_type,
        }
    }

    #[test]
    fn test_wallet_type_conversions() {
        assert_eq!(WalletType::try_from(1i16), Ok(WalletType::User));
        assert_eq!(WalletType::try_from(2i16), Ok(WalletType::Merchant));
        assert!(WalletType::try_from(3i16).is_err());

        assert_eq!("user".parse::<WalletType>(), Ok(WalletType::User));
        assert_eq!("MERCHANT".parse::<WalletType>(), Ok(WalletType::Merchant));
        assert!("admin".parse::<WalletType>().is_err());

        assert_eq!(i16::from(WalletType::Merchant), 2);
    }

    #[test]
    fn test_wallet_type_serde_lowercase() {
        assert_eq!(serde_json::to_string(&WalletType::User).unwrap(), "\"user\"");
        let parsed: WalletType = serde_json::from_str("\"merchant\"").unwrap();
        assert_eq!(parsed, WalletType::Merchant);
    }

    #[test]
    fn test_credit_debit_exact_decimal_arithmetic() {
        let mut w = wallet(WalletType::User, "0.00");
        w.credit("0.10".parse().unwrap());
        w.credit("0.20".parse().unwrap());
        // Would be 0.30000000000000004 with binary floats
        assert_eq!(w.balance, "0.30".parse::<Decimal>().unwrap());

        w.debit("0.30".parse().unwrap());
        assert_eq!(w.balance, Decimal::ZERO);
    }

    #[test]
    fn test_only_user_wallets_initiate_transfers() {
        assert!(wallet(WalletType::User, "0.00").can_initiate_transfers());
        assert!(!wallet(WalletType::Merchant, "1000.00").can_initiate_transfers());
    }

    #[test]
    fn test_has_balance_for_boundary() {
        let w = wallet(WalletType::User, "100.00");
        assert!(w.has_balance_for("100.00".parse().unwrap()));
        assert!(w.has_balance_for("99.99".parse().unwrap()));
        assert!(!w.has_balance_for("100.01".parse().unwrap()));
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let w = wallet(WalletType::User, "10.00");
        let json = serde_json::to_string(&w).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2"));
    }
}
