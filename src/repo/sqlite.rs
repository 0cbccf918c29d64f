use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::errors::StorageError;
use crate::model::salary::{NewSalaryRecord, PaymentStatus, SalaryRecord};
use crate::repo::SalaryStore;

/// SQLite-backed ledger. `seq` is a monotonic insertion counter used only
/// to break `created_at` ties so listing stays newest-first.
pub struct SqliteSalaryStore {
    pool: SqlitePool,
}

impl SqliteSalaryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SalaryRow {
    record_key: String,
    employee_id: String,
    employee_name: String,
    period: String,
    total_salary: f64,
    advance_amount: f64,
    remaining_salary: f64,
    payment_status: String,
    payment_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl TryFrom<SalaryRow> for SalaryRecord {
    type Error = StorageError;

    fn try_from(row: SalaryRow) -> Result<Self, Self::Error> {
        let payment_status = PaymentStatus::parse(&row.payment_status)
            .ok_or_else(|| StorageError::InvalidStatus(row.payment_status.clone()))?;

        Ok(SalaryRecord {
            record_key: row.record_key,
            employee_id: row.employee_id,
            employee_name: row.employee_name,
            period: row.period,
            total_salary: row.total_salary,
            advance_amount: row.advance_amount,
            remaining_salary: row.remaining_salary,
            payment_status,
            payment_date: row.payment_date,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl SalaryStore for SqliteSalaryStore {
    async fn insert(&self, record: NewSalaryRecord) -> Result<SalaryRecord, StorageError> {
        let record_key = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO salary_records
            (record_key, employee_id, employee_name, period,
             total_salary, advance_amount, remaining_salary,
             payment_status, payment_date, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record_key)
        .bind(&record.employee_id)
        .bind(&record.employee_name)
        .bind(&record.period)
        .bind(record.total_salary)
        .bind(record.advance_amount)
        .bind(record.remaining_salary)
        .bind(record.payment_status.as_str())
        .bind(record.payment_date)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(SalaryRecord {
            record_key,
            employee_id: record.employee_id,
            employee_name: record.employee_name,
            period: record.period,
            total_salary: record.total_salary,
            advance_amount: record.advance_amount,
            remaining_salary: record.remaining_salary,
            payment_status: record.payment_status,
            payment_date: record.payment_date,
            created_at,
        })
    }

    async fn find_all(&self) -> Result<Vec<SalaryRecord>, StorageError> {
        let rows = sqlx::query_as::<_, SalaryRow>(
            r#"
            SELECT record_key, employee_id, employee_name, period,
                   total_salary, advance_amount, remaining_salary,
                   payment_status, payment_date, created_at
            FROM salary_records
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SalaryRecord::try_from).collect()
    }

    async fn delete_by_key(&self, record_key: &str) -> Result<(), StorageError> {
        // Zero rows affected is fine: delete is idempotent by contract.
        sqlx::query("DELETE FROM salary_records WHERE record_key = ?")
            .bind(record_key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ensure_schema;
    use crate::model::salary::derive_payment;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_store() -> SqliteSalaryStore {
        // A single connection keeps the in-memory database alive and shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_schema(&pool).await.unwrap();
        SqliteSalaryStore::new(pool)
    }

    fn new_record(employee_id: &str, total: f64, advance: f64) -> NewSalaryRecord {
        let (remaining_salary, payment_status) = derive_payment(total, advance);
        NewSalaryRecord {
            employee_id: employee_id.to_owned(),
            employee_name: format!("Employee {employee_id}"),
            period: "2024-01".to_owned(),
            total_salary: total,
            advance_amount: advance,
            remaining_salary,
            payment_status,
            payment_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_then_list_round_trips_all_fields() {
        let store = test_store().await;
        let stored = store.insert(new_record("E1", 50000.0, 20000.0)).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        let listed = &all[0];
        assert_eq!(listed.record_key, stored.record_key);
        assert_eq!(listed.employee_id, "E1");
        assert_eq!(listed.total_salary, 50000.0);
        assert_eq!(listed.remaining_salary, 30000.0);
        assert_eq!(listed.payment_status, PaymentStatus::PartiallyPaid);
        assert_eq!(listed.payment_date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let store = test_store().await;
        for i in 0..4 {
            store
                .insert(new_record(&format!("E{i}"), 1000.0, 0.0))
                .await
                .unwrap();
        }

        let all = store.find_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, ["E3", "E2", "E1", "E0"]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = test_store().await;
        let stored = store.insert(new_record("E1", 1000.0, 0.0)).await.unwrap();

        store.delete_by_key(&stored.record_key).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());

        // Second delete of the same key still succeeds.
        store.delete_by_key(&stored.record_key).await.unwrap();
        store.delete_by_key("never-existed").await.unwrap();
    }
}
