/*
[INPUT]:  Minor-unit integers or major-unit decimals plus a currency
[OUTPUT]: Validated Money values and their wire encodings
[POS]:    Data layer - currency amounts
[UPDATE]: When adding currencies or changing precision rules
*/

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currencies accepted by the ioka API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Kzt,
    Usd,
    Eur,
    Rub,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Kzt => "KZT",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Rub => "RUB",
        }
    }

    /// Number of decimal places carried by the minor unit
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::Kzt | Currency::Usd | Currency::Eur | Currency::Rub => 2,
        }
    }

    /// How many minor units make one major unit
    pub fn minor_factor(&self) -> u64 {
        10u64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors raised while constructing a [`Money`] value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Amounts must never be negative
    #[error("amount must not be negative, got {amount}")]
    Negative { amount: String },

    /// More decimal places than the currency supports
    #[error("{value} has more than {decimal_places} decimal places allowed for {currency}")]
    Precision {
        value: String,
        currency: Currency,
        decimal_places: u32,
    },

    /// Value does not fit into the minor-unit range
    #[error("amount {value} is out of range")]
    Overflow { value: String },
}

/// A non-negative amount of money held in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyWire", into = "MoneyWire")]
pub struct Money {
    // invariant: minors <= i64::MAX
    minors: u64,
    currency: Currency,
}

impl Money {
    /// Build from minor units (tiyn, cents)
    pub fn from_minor(amount: i64, currency: Currency) -> Result<Self, MoneyError> {
        let minors = u64::try_from(amount).map_err(|_| MoneyError::Negative {
            amount: amount.to_string(),
        })?;
        Ok(Self { minors, currency })
    }

    /// Build from major units, e.g. `15.50` USD
    pub fn from_major(value: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::Negative {
                amount: value.to_string(),
            });
        }

        let decimal_places = currency.decimal_places();
        if value.normalize().scale() > decimal_places {
            return Err(MoneyError::Precision {
                value: value.to_string(),
                currency,
                decimal_places,
            });
        }

        let minors = value
            .checked_mul(Decimal::from(currency.minor_factor()))
            .and_then(|scaled| scaled.to_i64())
            .ok_or_else(|| MoneyError::Overflow {
                value: value.to_string(),
            })?;

        Self::from_minor(minors, currency)
    }

    /// Tenge amount in tiyn
    pub fn kzt(minors: i64) -> Result<Self, MoneyError> {
        Self::from_minor(minors, Currency::Kzt)
    }

    pub fn minors(&self) -> u64 {
        self.minors
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Amount in major units with the currency's scale, e.g. `1500.00`
    pub fn major(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.minors), self.currency.decimal_places())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.major(), self.currency)
    }
}

/// Flat `{"amount": .., "currency": ..}` shape used in API responses
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct MoneyWire {
    amount: i64,
    // Accounts omit the currency; the API settles them in tenge.
    #[serde(default)]
    currency: Currency,
}

impl TryFrom<MoneyWire> for Money {
    type Error = MoneyError;

    fn try_from(wire: MoneyWire) -> Result<Self, Self::Error> {
        Money::from_minor(wire.amount, wire.currency)
    }
}

impl From<Money> for MoneyWire {
    fn from(money: Money) -> Self {
        Self {
            amount: money.minors as i64,
            currency: money.currency,
        }
    }
}

/// Request bodies carry only the integer minor amount
pub(crate) mod serde_minors {
    use super::Money;
    use serde::Serializer;

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(money.minors())
    }
}
