use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::ValidationError;

/// Raw request body for `POST /salary/add`.
///
/// Earlier clients of this API used several spellings for the same fields
/// (`employee` vs `employeeName`, `month` vs `monthYear`, `total` vs
/// `totalSalary`), so the aliases are absorbed here at the boundary and the
/// rest of the crate only sees the canonical names.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInput {
    #[serde(alias = "employeeID")]
    pub id: Option<String>,

    #[serde(alias = "employee")]
    pub employee_name: Option<String>,

    #[serde(alias = "month", alias = "monthYear")]
    pub period: Option<String>,

    #[serde(alias = "total")]
    pub total_salary: Option<f64>,

    #[serde(alias = "advance")]
    pub advance_amount: Option<f64>,

    pub payment_date: Option<NaiveDate>,
}

/// Input that has passed every structural and business-rule check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSalary {
    pub employee_id: String,
    pub employee_name: String,
    pub period: String,
    pub total_salary: f64,
    pub advance_amount: f64,
    pub payment_date: NaiveDate,
}

fn required_text(
    value: &Option<String>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Checks one add-request before anything is persisted. Pure: no state is
/// touched, the first violation found is returned.
///
/// The cross-field rule `advance <= total` is the one guard protecting the
/// ledger from a negative remainder ever being derived.
pub fn validate(input: SalaryInput) -> Result<ValidatedSalary, ValidationError> {
    let employee_id = required_text(&input.id, "id")?;
    let employee_name = required_text(&input.employee_name, "employeeName")?;
    let period = required_text(&input.period, "period")?;

    let total_salary = input
        .total_salary
        .ok_or(ValidationError::MissingField("totalSalary"))?;
    if !total_salary.is_finite() || total_salary < 0.0 {
        return Err(ValidationError::InvalidAmount);
    }

    let advance_amount = input.advance_amount.unwrap_or(0.0);
    if !advance_amount.is_finite() || advance_amount < 0.0 {
        return Err(ValidationError::InvalidAmount);
    }

    if advance_amount > total_salary {
        return Err(ValidationError::AdvanceExceedsTotal);
    }

    let payment_date = input
        .payment_date
        .ok_or(ValidationError::MissingField("paymentDate"))?;

    Ok(ValidatedSalary {
        employee_id,
        employee_name,
        period,
        total_salary,
        advance_amount,
        payment_date,
    })
}
