use serde::Serialize;

use crate::model::salary::SalaryRecord;

/// Narrows a listed ledger by case-insensitive substring match against the
/// employee name or the employee identifier. An empty term keeps everything.
pub fn filter_records(records: &[SalaryRecord], search_term: &str) -> Vec<SalaryRecord> {
    if search_term.is_empty() {
        return records.to_vec();
    }

    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.employee_name.to_lowercase().contains(&needle)
                || r.employee_id.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Summary statistics over a (possibly filtered) ledger.
///
/// `total_paid` sums total salaries, not amounts actually disbursed; the
/// name is kept from the legacy API for compatibility.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub total_paid: f64,
    pub total_pending: f64,
    pub count: usize,
}

/// Folds the given records into summary statistics. Recomputed on every
/// read, never stored.
pub fn summarize(records: &[SalaryRecord]) -> LedgerSummary {
    let mut summary = LedgerSummary {
        total_paid: 0.0,
        total_pending: 0.0,
        count: records.len(),
    };

    for record in records {
        summary.total_paid += record.total_salary;
        summary.total_pending += record.remaining_salary;
    }

    summary
}
