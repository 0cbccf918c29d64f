use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::StorageError;
use crate::model::salary::{NewSalaryRecord, SalaryRecord};
use crate::repo::SalaryStore;

/// Ledger held in process memory. Used by the test suite and usable as an
/// ephemeral backend; the vector keeps insertion order so listing can
/// report newest-first deterministically even when two creations share a
/// timestamp.
#[derive(Default)]
pub struct MemorySalaryStore {
    records: Mutex<Vec<SalaryRecord>>,
}

impl MemorySalaryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SalaryStore for MemorySalaryStore {
    async fn insert(&self, record: NewSalaryRecord) -> Result<SalaryRecord, StorageError> {
        let stored = SalaryRecord {
            record_key: Uuid::new_v4().to_string(),
            employee_id: record.employee_id,
            employee_name: record.employee_name,
            period: record.period,
            total_salary: record.total_salary,
            advance_amount: record.advance_amount,
            remaining_salary: record.remaining_salary,
            payment_status: record.payment_status,
            payment_date: record.payment_date,
            created_at: Utc::now(),
        };

        let mut records = self.records.lock().unwrap();
        records.push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<SalaryRecord>, StorageError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().rev().cloned().collect())
    }

    async fn delete_by_key(&self, record_key: &str) -> Result<(), StorageError> {
        let mut records = self.records.lock().unwrap();
        records.retain(|r| r.record_key != record_key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::salary::{NewSalaryRecord, PaymentStatus, derive_payment};
    use chrono::NaiveDate;

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
    async fn insert_assigns_key_and_timestamp() {
        let store = MemorySalaryStore::new();
        let stored = store.insert(new_record("E1", 50000.0, 20000.0)).await.unwrap();

        assert!(!stored.record_key.is_empty());
        assert_eq!(stored.remaining_salary, 30000.0);
        assert_eq!(stored.payment_status, PaymentStatus::PartiallyPaid);
    }

    #[tokio::test]
    async fn find_all_is_newest_first() {
        let store = MemorySalaryStore::new();
        for i in 0..5 {
            store
                .insert(new_record(&format!("E{i}"), 1000.0, 0.0))
                .await
                .unwrap();
        }

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 5);
        let ids: Vec<&str> = all.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, ["E4", "E3", "E2", "E1", "E0"]);
    }

    #[tokio::test]
    async fn delete_unknown_key_is_success_and_changes_nothing() {
        let store = MemorySalaryStore::new();
        store.insert(new_record("E1", 1000.0, 0.0)).await.unwrap();

        store.delete_by_key("no-such-key").await.unwrap();
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_by_key_removes_only_that_record() {
        let store = MemorySalaryStore::new();
        let first = store.insert(new_record("E1", 1000.0, 0.0)).await.unwrap();
        let second = store.insert(new_record("E2", 2000.0, 0.0)).await.unwrap();

        store.delete_by_key(&first.record_key).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].record_key, second.record_key);
    }

    #[tokio::test]
    async fn duplicate_employee_ids_are_kept() {
        let store = MemorySalaryStore::new();
        store.insert(new_record("E1", 1000.0, 0.0)).await.unwrap();
        store.insert(new_record("E1", 2000.0, 0.0)).await.unwrap();

        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }
}
