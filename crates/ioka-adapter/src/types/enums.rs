/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Unpaid,
    OnHold,
    Paid,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    RequiresAction,
    Approved,
    Captured,
    Cancelled,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    Pending,
    Approved,
    Declined,
}

/// When the funds of an order are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureMethod {
    /// Captured immediately after authorization
    #[default]
    Auto,
    /// Held until an explicit capture call
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayerType {
    Card,
    CardNoCvc,
    CardWithBinding,
    Binding,
    ApplePay,
    GooglePay,
    Masterpass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerStatus {
    Pending,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Pending,
    Accepted,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateCategory {
    Daily,
    Monthly,
    Quarterly,
    Yearly,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmountCategory {
    Fixed,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventName {
    OrderCreated,
    PaymentCreated,
    RefundCreated,
    InstallmentCreated,
    SplitCreated,
    OrderOnHold,
    OrderPaid,
    OrderExpired,
    PaymentDeclined,
    PaymentActionRequired,
    PaymentApproved,
    PaymentCaptured,
    CaptureDeclined,
    PaymentCancelled,
    CancelDeclined,
    RefundApproved,
    RefundDeclined,
    SplitApproved,
    SplitDeclined,
    SplitRefundApproved,
    SplitRefundDeclined,
    CheckApproved,
    CheckDeclined,
    OtpSent,
    SendOtpDeclined,
    OtpConfirmed,
    ConfirmOtpDeclined,
    InstallmentActionRequired,
    InstallmentIssued,
    InstallmentRejected,
    InstallmentDeclined,
}

/// Fiscal receipt tax flag, sent as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaxType {
    #[default]
    Without,
    With,
}

impl From<TaxType> for u8 {
    fn from(tax_type: TaxType) -> Self {
        match tax_type {
            TaxType::Without => 0,
            TaxType::With => 100,
        }
    }
}

impl TryFrom<u8> for TaxType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaxType::Without),
            100 => Ok(TaxType::With),
            other => Err(format!("unknown tax type {other}")),
        }
    }
}
