use colored::Colorize;
use tracing::{debug, info, instrument};

use std::iter::Iterator;

use crate::Classifier;
use crate::decision_tree::DecisionTree;
use crate::sample::RecordStore;
use super::error_report::ErrorReport;

const WIDTH: usize = 9;

/// A struct that generates the leave-one-out folds of a [`RecordStore`].
/// The `i`-th fold holds out record `i` and trains on
/// the positions of all other records, in store order.
/// The store itself is never modified.
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let codec = LabelCodec::default();
/// let store = RecordReader::new(&codec)
///     .read_training("/path/to/train.txt")
///     .unwrap();
/// let learner = DecisionTreeBuilder::new().build();
///
/// let report = LeaveOneOut::new(&store)
///     .verbose(true)
///     .run(&learner);
/// println!("{} errors out of {}", report.n_errors(), report.n_records());
/// ```
pub struct LeaveOneOut<'a> {
    current: usize,
    store: &'a RecordStore,
    verbose: bool,
}


impl<'a> LeaveOneOut<'a> {
    /// Construct a new instance of `LeaveOneOut`.
    #[inline]
    pub fn new(store: &'a RecordStore) -> Self {
        Self { current: 0, store, verbose: false, }
    }


    /// Set the verbose parameter.
    /// If `true`, `LeaveOneOut::run` prints one line per fold.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Rebuilds a tree with `learner` once per fold,
    /// classifies the held-out record with it,
    /// and counts the misclassified ones.
    /// Each transient tree is dropped after its fold is scored.
    #[instrument(skip_all, fields(n_records = self.store.n_records()))]
    pub fn run(self, learner: &DecisionTree) -> ErrorReport {
        let store = self.store;
        let verbose = self.verbose;

        let mut n_errors = 0_usize;
        for (held_out, positions) in self {
            let f = learner.produce_on(store, positions);

            let record = &store[held_out];
            let predicted = f.predict(record.attributes());
            let hit = predicted == record.class();
            if !hit { n_errors += 1; }

            debug!(
                fold = held_out,
                predicted,
                actual = record.class(),
                "fold scored"
            );
            if verbose {
                let outcome = if hit {
                    "[HIT ]".bold().green()
                } else {
                    "[MISS]".bold().yellow()
                };
                println!(
                    "{}    {}    {}",
                    format!("  [{: >5}'th fold]", held_out + 1).bold().red(),
                    outcome,
                    format!("[ERRORS {:>WIDTH$}]", n_errors).bold().cyan(),
                );
            }
        }

        let report = ErrorReport::new(n_errors, store.n_records());
        info!(n_errors, rate = report.rate(), "leave-one-out done");
        report
    }
}


impl<'a> Iterator for LeaveOneOut<'a> {
    type Item = (usize, Vec<usize>);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.store.n_records() { return None; }

        let held_out = self.current;
        self.current += 1;

        Some((held_out, self.store.positions_without(held_out)))
    }
}
