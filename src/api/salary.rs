use actix_web::{HttpResponse, Responder, error::ErrorInternalServerError, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

use crate::model::salary::{NewSalaryRecord, derive_payment};
use crate::query::{filter_records, summarize};
use crate::repo::SalaryStore;
use crate::validate::{SalaryInput, validate};

#[derive(Debug, Deserialize)]
pub struct SalaryQuery {
    pub search: Option<String>,
}

/// POST /salary/add — validate, derive, persist.
pub async fn add_salary(
    store: web::Data<dyn SalaryStore>,
    payload: web::Json<SalaryInput>,
) -> actix_web::Result<impl Responder> {
    let validated = match validate(payload.into_inner()) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, "Rejected salary record");
            return Ok(HttpResponse::BadRequest().json(json!({
                "message": e.to_string()
            })));
        }
    };

    let (remaining_salary, payment_status) =
        derive_payment(validated.total_salary, validated.advance_amount);

    let record = NewSalaryRecord {
        employee_id: validated.employee_id,
        employee_name: validated.employee_name,
        period: validated.period,
        total_salary: validated.total_salary,
        advance_amount: validated.advance_amount,
        remaining_salary,
        payment_status,
        payment_date: validated.payment_date,
    };

    let stored = store.insert(record).await.map_err(|e| {
        error!(error = %e, "Failed to insert salary record");
        ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Created().json(stored))
}

/// GET /salary/get — full ledger newest-first, optionally narrowed by
/// `?search=` on employee name or id.
pub async fn list_salaries(
    store: web::Data<dyn SalaryStore>,
    query: web::Query<SalaryQuery>,
) -> actix_web::Result<impl Responder> {
    let records = store.find_all().await.map_err(|e| {
        error!(error = %e, "Failed to fetch salary records");
        ErrorInternalServerError("Internal Server Error")
    })?;

    let records = filter_records(&records, query.search.as_deref().unwrap_or(""));

    Ok(HttpResponse::Ok().json(records))
}

/// GET /salary/summary — totals over the (optionally filtered) ledger.
pub async fn summary(
    store: web::Data<dyn SalaryStore>,
    query: web::Query<SalaryQuery>,
) -> actix_web::Result<impl Responder> {
    let records = store.find_all().await.map_err(|e| {
        error!(error = %e, "Failed to fetch salary records for summary");
        ErrorInternalServerError("Internal Server Error")
    })?;

    let records = filter_records(&records, query.search.as_deref().unwrap_or(""));

    Ok(HttpResponse::Ok().json(summarize(&records)))
}

/// DELETE /salary/delete/{record_key} — succeeds whether or not the key
/// exists; the delete contract is idempotent.
pub async fn delete_salary(
    store: web::Data<dyn SalaryStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let record_key = path.into_inner();

    store.delete_by_key(&record_key).await.map_err(|e| {
        error!(error = %e, record_key, "Failed to delete salary record");
        ErrorInternalServerError("Internal Server Error")
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Deleted successfully"
    })))
}
