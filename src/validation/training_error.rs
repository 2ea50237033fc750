use tracing::{info, instrument};

use crate::Classifier;
use crate::sample::RecordStore;
use super::error_report::ErrorReport;


/// Classifies every record of `store` with `f`
/// and counts the records whose predicted class differs
/// from their own class.
#[instrument(skip_all, fields(n_records = store.n_records()))]
pub fn training_error<C>(f: &C, store: &RecordStore) -> ErrorReport
    where C: Classifier
{
    let n_errors = f.predict_all(store)
        .into_iter()
        .zip(store.records())
        .filter(|(p, record)| *p != record.class())
        .count();

    let report = ErrorReport::new(n_errors, store.n_records());
    info!(n_errors, rate = report.rate(), "training error computed");
    report
}
