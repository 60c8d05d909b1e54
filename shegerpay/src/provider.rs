//! Payment rails supported by the verification API.
//!
//! A transaction reference alone is usually enough to tell which rail it went
//! through: Commercial Bank of Ethiopia references start with `FT`, anything
//! else is treated as a Telebirr receipt. See [`Provider::detect`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseProviderError;

/// A payment rail a transaction can be verified against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Commercial Bank of Ethiopia.
    Cbe,
    /// Telebirr mobile money.
    Telebirr,
    /// Generic bank transfer, optionally narrowed with a sub-provider.
    BankTransfer,
}

impl Provider {
    /// All providers, in wire order.
    pub const ALL: [Self; 3] = [Self::Cbe, Self::Telebirr, Self::BankTransfer];

    /// Guesses the provider from a transaction reference.
    ///
    /// References starting with `FT` (any case) are CBE; everything else,
    /// including empty strings, is Telebirr.
    #[must_use]
    pub fn detect(transaction_id: &str) -> Self {
        let is_cbe = transaction_id
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("FT"));
        if is_cbe { Self::Cbe } else { Self::Telebirr }
    }

    /// Returns the wire name (`"cbe"`, `"telebirr"`, `"bank_transfer"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cbe => "cbe",
            Self::Telebirr => "telebirr",
            Self::BankTransfer => "bank_transfer",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseProviderError(s.to_owned()))
    }
}
