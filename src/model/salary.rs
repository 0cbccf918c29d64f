use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Payment status frozen into a record at creation time.
///
/// Wire and storage strings match the legacy API ("Fully Paid" etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "Fully Paid")]
    FullyPaid,
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
    #[serde(rename = "Pending")]
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::FullyPaid => "Fully Paid",
            PaymentStatus::PartiallyPaid => "Partially Paid",
            PaymentStatus::Pending => "Pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Fully Paid" => Some(PaymentStatus::FullyPaid),
            "Partially Paid" => Some(PaymentStatus::PartiallyPaid),
            "Pending" => Some(PaymentStatus::Pending),
            _ => None,
        }
    }
}

/// Computes the derived pair `(remaining_salary, payment_status)`.
///
/// Called exactly once per record, at creation; the result is stored and
/// never recomputed. Rule: remaining <= 0 means fully paid, a positive
/// remainder with any advance means partially paid, otherwise pending.
pub fn derive_payment(total_salary: f64, advance_amount: f64) -> (f64, PaymentStatus) {
    let remaining = total_salary - advance_amount;

    let status = if remaining <= 0.0 {
        PaymentStatus::FullyPaid
    } else if advance_amount > 0.0 {
        PaymentStatus::PartiallyPaid
    } else {
        PaymentStatus::Pending
    };

    (remaining, status)
}

/// A record as handed to the store: validated input plus derived fields,
/// before the store assigns `record_key` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewSalaryRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub period: String,
    pub total_salary: f64,
    pub advance_amount: f64,
    pub remaining_salary: f64,
    pub payment_status: PaymentStatus,
    pub payment_date: NaiveDate,
}

/// A persisted salary record. `record_key` addresses the record for
/// deletion; `id` is the caller-supplied employee identifier and is not
/// unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub record_key: String,
    #[serde(rename = "id")]
    pub employee_id: String,
    pub employee_name: String,
    pub period: String,
    pub total_salary: f64,
    pub advance_amount: f64,
    pub remaining_salary: f64,
    pub payment_status: PaymentStatus,
    pub payment_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
