use tracing::{info, instrument};

use crate::Classifier;
use crate::sample::Record;
use super::error_report::ErrorReport;


/// Classifies each record of an independently labeled set with `f`
/// and counts the mismatches with the true classes.
#[instrument(skip_all, fields(n_records = records.len()))]
pub fn holdout_error<C>(f: &C, records: &[Record]) -> ErrorReport
    where C: Classifier
{
    let n_errors = records.iter()
        .filter(|record| f.predict(record.attributes()) != record.class())
        .count();

    let report = ErrorReport::new(n_errors, records.len());
    info!(n_errors, percent = report.percent(), "holdout validation done");
    report
}
