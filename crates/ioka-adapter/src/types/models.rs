/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{
    AccountStatus, CaptureMethod, CustomerStatus, EventName, OrderStatus, PayerType, PaymentStatus,
    RefundStatus,
};
use super::money::Money;
use crate::http::{IokaError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub shop_id: String,
    pub status: OrderStatus,
    #[serde(with = "serde_helpers::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(flatten)]
    pub amount: Money,
    #[serde(default)]
    pub capture_method: CaptureMethod,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub extra_info: Option<serde_json::Value>,
    #[serde(default)]
    pub mcc: Option<String>,
    #[serde(default)]
    pub acquirer: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub card_id: Option<String>,
    #[serde(default)]
    pub attempts: Option<u32>,
    #[serde(default)]
    pub checkout_url: Option<String>,
    #[serde(default)]
    pub payments: Option<Vec<Payment>>,
}

impl Order {
    /// Resolve the amount to capture, defaulting to the whole order.
    ///
    /// Rejects amounts in another currency or above the order amount.
    pub fn capture_amount(&self, amount: Option<Money>) -> Result<Money> {
        let amount = amount.unwrap_or(self.amount);
        if amount.currency() != self.amount.currency() {
            return Err(IokaError::InvalidArgument(format!(
                "cannot capture {amount} from an order in {}",
                self.amount.currency()
            )));
        }
        if amount.minors() > self.amount.minors() {
            return Err(IokaError::InvalidArgument(format!(
                "cannot capture more than {}",
                self.amount
            )));
        }
        Ok(amount)
    }
}

/// Returned by order creation together with the order itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub order: Order,
    pub order_access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    #[serde(default)]
    pub shop_id: Option<String>,
    pub order_id: String,
    pub status: PaymentStatus,
    #[serde(with = "serde_helpers::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub approved_amount: u64,
    #[serde(default)]
    pub captured_amount: u64,
    #[serde(default)]
    pub refunded_amount: u64,
    #[serde(default)]
    pub processing_fee: Decimal,
    #[serde(default)]
    pub payer: Option<Payer>,
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
    #[serde(default)]
    pub acquirer: Option<Acquirer>,
    #[serde(default)]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payer {
    #[serde(rename = "type")]
    pub payer_type: PayerType,
    #[serde(default)]
    pub pan_masked: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub holder: Option<String>,
    #[serde(default)]
    pub payment_system: Option<String>,
    #[serde(default)]
    pub emitter: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub card_id: Option<String>,
}

/// Error attached to a declined payment or refund
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acquirer {
    pub name: String,
    #[serde(default)]
    pub reference: Option<String>,
}

/// Follow-up the payer must complete, e.g. a 3-D Secure page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    pub payment_id: String,
    pub order_id: String,
    pub status: RefundStatus,
    #[serde(default, with = "serde_helpers::timestamp_option")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
    #[serde(default)]
    pub acquirer: Option<Acquirer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: EventName,
    #[serde(with = "serde_helpers::timestamp")]
    pub created_at: NaiveDateTime,
    pub order_id: String,
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub refund_id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub md: Option<String>,
    #[serde(default)]
    pub pa_req: Option<String>,
    #[serde(default)]
    pub acs_url: Option<String>,
    #[serde(default)]
    pub term_url: Option<String>,
    #[serde(default)]
    pub action_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResource {
    pub id: String,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub shop_id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub status: AccountStatus,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub amount: Money,
    #[serde(default)]
    pub resources: Option<Vec<AccountResource>>,
    #[serde(with = "serde_helpers::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(with = "serde_helpers::timestamp")]
    pub created_at: NaiveDateTime,
    pub status: CustomerStatus,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub accounts: Option<Vec<Account>>,
    #[serde(default)]
    pub checkout_url: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

pub(crate) mod serde_helpers {
    use chrono::{DateTime, NaiveDateTime};

    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    /// Accepts the API's naive timestamps and RFC 3339 strings (normalised to UTC)
    pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        let raw = raw.trim();
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .or_else(|err| DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_utc()).map_err(|_| err))
    }

    pub fn format_timestamp(value: &NaiveDateTime) -> String {
        value.format(TIMESTAMP_FORMAT).to_string()
    }

    pub mod timestamp {
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = String::deserialize(deserializer)?;
            super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
        }

        pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&super::format_timestamp(value))
        }
    }

    pub mod timestamp_option {
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) if !raw.trim().is_empty() => super::parse_timestamp(&raw)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                _ => Ok(None),
            }
        }

        pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => serializer.serialize_str(&super::format_timestamp(value)),
                None => serializer.serialize_none(),
            }
        }
    }
}
