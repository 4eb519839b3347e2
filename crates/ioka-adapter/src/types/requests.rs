/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs and query filters
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::NaiveDateTime;
use serde::Serialize;

use super::enums::{
    AmountCategory, CaptureMethod, CustomerStatus, DateCategory, PaymentStatus, TaxType,
};
use super::models::serde_helpers;
use super::money::{Money, serde_minors};
use crate::http::{IokaError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderRequest {
    #[serde(with = "serde_minors")]
    pub amount: Money,
    pub capture_method: CaptureMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::timestamp_option"
    )]
    pub due_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl CreateOrderRequest {
    /// Order for `amount` with automatic capture and no optional fields
    pub fn new(amount: Money) -> Self {
        Self {
            amount,
            capture_method: CaptureMethod::default(),
            external_id: None,
            description: None,
            mcc: None,
            extra_info: None,
            attempts: None,
            due_date: None,
            customer_id: None,
            card_id: None,
            back_url: None,
            success_url: None,
            failure_url: None,
            template: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptureOrderRequest {
    #[serde(with = "serde_minors")]
    pub amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CancelOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateOrderRequest {
    #[serde(with = "serde_minors")]
    pub amount: Money,
}

/// Portion of a split refund charged to one account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefundRule {
    pub account_id: String,
    #[serde(with = "serde_minors")]
    pub amount: Money,
}

/// Fiscal receipt line attached to a refund
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckPosition {
    pub name: String,
    #[serde(with = "serde_minors")]
    pub amount: Money,
    pub count: u32,
    pub section: u32,
    pub tax_percent: u32,
    pub tax_type: TaxType,
    pub tax_amount: u64,
    pub unit_code: u32,
}

impl CheckPosition {
    /// Position without tax, zero tax amount and unit code 0
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        count: u32,
        section: u32,
        tax_percent: u32,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            count,
            section,
            tax_percent,
            tax_type: TaxType::default(),
            tax_amount: 0,
            unit_code: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRefundRequest {
    #[serde(with = "serde_minors")]
    pub amount: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RefundRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<CheckPosition>>,
}

impl CreateRefundRequest {
    pub fn new(amount: Money) -> Self {
        Self {
            amount,
            reason: None,
            rules: None,
            positions: None,
        }
    }
}

/// Query string pairs in the order they are sent
pub type QueryPairs = Vec<(&'static str, String)>;

/// Paging and date window shared by every list endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub from_dt: Option<NaiveDateTime>,
    pub to_dt: Option<NaiveDateTime>,
    pub date_category: Option<DateCategory>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            from_dt: None,
            to_dt: None,
            date_category: None,
        }
    }
}

impl Pagination {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(IokaError::InvalidArgument("page starts at 1".to_string()));
        }
        if self.limit == 0 {
            return Err(IokaError::InvalidArgument(
                "limit must be at least 1".to_string(),
            ));
        }
        if let (Some(from), Some(to)) = (self.from_dt, self.to_dt) {
            if from > to {
                return Err(IokaError::InvalidArgument(format!(
                    "from_dt {from} is after to_dt {to}"
                )));
            }
        }
        Ok(())
    }

    fn push_pairs(&self, pairs: &mut QueryPairs) -> Result<()> {
        self.validate()?;
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        push_opt(pairs, "from_dt", self.from_dt.as_ref().map(serde_helpers::format_timestamp));
        push_opt(pairs, "to_dt", self.to_dt.as_ref().map(serde_helpers::format_timestamp));
        push_opt(pairs, "date_category", wire_value(self.date_category.as_ref())?);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub pagination: Pagination,
    pub amount_category: Option<AmountCategory>,
    pub fixed_amount: Option<Money>,
    pub min_amount: Option<Money>,
    pub max_amount: Option<Money>,
}

impl OrderFilter {
    pub fn query_pairs(&self) -> Result<QueryPairs> {
        if let (Some(min), Some(max)) = (self.min_amount, self.max_amount) {
            if min.minors() > max.minors() {
                return Err(IokaError::InvalidArgument(format!(
                    "min_amount {min} exceeds max_amount {max}"
                )));
            }
        }

        let mut pairs = QueryPairs::new();
        self.pagination.push_pairs(&mut pairs)?;
        push_opt(&mut pairs, "amount_category", wire_value(self.amount_category.as_ref())?);
        push_opt(&mut pairs, "fixed_amount", self.fixed_amount.map(|m| m.minors().to_string()));
        push_opt(&mut pairs, "min_amount", self.min_amount.map(|m| m.minors().to_string()));
        push_opt(&mut pairs, "max_amount", self.max_amount.map(|m| m.minors().to_string()));
        Ok(pairs)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentFilter {
    pub pagination: Pagination,
    pub external_id: Option<String>,
    pub payment_id: Option<String>,
    pub pan_first6: Option<String>,
    pub pan_last4: Option<String>,
    pub payer_email: Option<String>,
    pub payer_phone: Option<String>,
    pub customer_id: Option<String>,
    pub payment_status: Option<PaymentStatus>,
    pub payment_system: Option<String>,
}

impl PaymentFilter {
    pub fn query_pairs(&self) -> Result<QueryPairs> {
        let mut pairs = QueryPairs::new();
        self.pagination.push_pairs(&mut pairs)?;
        push_opt(&mut pairs, "external_id", self.external_id.clone());
        push_opt(&mut pairs, "payment_id", self.payment_id.clone());
        push_opt(&mut pairs, "pan_first6", self.pan_first6.clone());
        push_opt(&mut pairs, "pan_last4", self.pan_last4.clone());
        push_opt(&mut pairs, "payer_email", self.payer_email.clone());
        push_opt(&mut pairs, "payer_phone", self.payer_phone.clone());
        push_opt(&mut pairs, "customer_id", self.customer_id.clone());
        push_opt(&mut pairs, "payment_status", wire_value(self.payment_status.as_ref())?);
        push_opt(&mut pairs, "payment_system", self.payment_system.clone());
        Ok(pairs)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerFilter {
    pub pagination: Pagination,
    pub customer_id: Option<String>,
    pub external_id: Option<String>,
    pub status: Option<CustomerStatus>,
}

impl CustomerFilter {
    pub fn query_pairs(&self) -> Result<QueryPairs> {
        let mut pairs = QueryPairs::new();
        self.pagination.push_pairs(&mut pairs)?;
        push_opt(&mut pairs, "customer_id", self.customer_id.clone());
        push_opt(&mut pairs, "external_id", self.external_id.clone());
        push_opt(&mut pairs, "status", wire_value(self.status.as_ref())?);
        Ok(pairs)
    }
}

fn push_opt(pairs: &mut QueryPairs, key: &'static str, value: Option<String>) {
    if let Some(value) = value {
        pairs.push((key, value));
    }
}

/// Wire string of a unit enum, e.g. `DateCategory::Monthly` -> `MONTHLY`
fn wire_value<T: Serialize>(value: Option<&T>) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };
    match serde_json::to_value(value)? {
        serde_json::Value::String(raw) => Ok(Some(raw)),
        other => Ok(Some(other.to_string())),
    }
}
