use tracing::{debug, instrument};

use std::fmt;

use crate::sample::RecordStore;
use super::{
    node::*,
    impurity::Impurity,
    attribute_set::AttributeSet,
    dtree_classifier::DecisionTreeClassifier,
};


/// The Decision Tree algorithm over binary attributes.
/// Given a [`RecordStore`] (or a list of positions in it),
/// [`DecisionTree`] outputs a [`DecisionTreeClassifier`]
/// whose leaves carry the predicted class
/// together with their coverage and accuracy.
///
/// Each internal node consumes one attribute for the rest of its path,
/// so the depth of a tree never exceeds the number of attributes.
/// There is no randomness: the same records in the same order
/// always produce the same tree.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::decision_tree::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let codec = LabelCodec::default();
/// let store = RecordReader::new(&codec)
///     .read_training("/path/to/train.txt")
///     .unwrap();
///
/// let learner = DecisionTreeBuilder::new()
///     .impurity(Impurity::Gini)
///     .build();
/// let f = learner.produce(&store);
///
/// let errors = f.predict_all(&store)
///     .into_iter()
///     .zip(store.records())
///     .filter(|(p, r)| *p != r.class())
///     .count();
/// println!("training errors: {errors}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionTree {
    impurity: Impurity,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(impurity: Impurity) -> Self {
        Self { impurity }
    }


    /// Returns the impurity measure used for attribute selection.
    #[inline]
    pub fn impurity(&self) -> Impurity {
        self.impurity
    }


    /// Build a tree over all records of `store`
    /// and all of its attributes.
    #[inline]
    pub fn produce(&self, store: &RecordStore) -> DecisionTreeClassifier {
        self.produce_on(store, store.positions())
    }


    /// Build a tree over the records of `store` at `positions`
    /// and all of its attributes.
    /// Coverage of each leaf is relative to `positions.len()`.
    #[instrument(
        skip_all,
        fields(n_records = positions.len(), impurity = %self.impurity)
    )]
    pub fn produce_on(&self, store: &RecordStore, positions: Vec<usize>)
        -> DecisionTreeClassifier
    {
        let total = positions.len();
        let attributes = AttributeSet::full(store.n_attributes());

        let root = self.grow(store, positions, &attributes, total);

        debug!(depth = root.depth(), "tree built");
        DecisionTreeClassifier::from_components(
            root, store.n_attributes(), store.n_classes()
        )
    }


    /// Grow the sub-tree for the records at `positions`
    /// using the attributes in `attributes`.
    fn grow(
        &self,
        store: &RecordStore,
        positions: Vec<usize>,
        attributes: &AttributeSet,
        total: usize,
    ) -> Node
    {
        if positions.is_empty() {
            return Node::leaf(1, 0f64, 0f64);
        }

        let counts = class_counts(store, &positions[..]);
        let coverage = positions.len() as f64 / total as f64;

        // All records share one class.
        if counts.iter().filter(|&&c| c > 0).count() == 1 {
            let (class, _) = majority(&counts);
            return Node::leaf(class, coverage, 1f64);
        }

        if attributes.is_empty() {
            return majority_leaf(&counts, coverage);
        }

        let Some(condition) = self.best_condition(
            store, &positions[..], attributes
        ) else {
            return majority_leaf(&counts, coverage);
        };

        // Split the records for left/right childrens
        let (left, right): (Vec<usize>, Vec<usize>) = positions.into_iter()
            .partition(|&i| store[i].value(condition) == 0);


        // If the split has no meaning, construct a leaf node.
        if left.is_empty() || right.is_empty() {
            return majority_leaf(&counts, coverage);
        }

        debug!(
            attribute = condition,
            n_left = left.len(),
            n_right = right.len(),
            "split"
        );

        let left_attributes = attributes.without(condition);
        let right_attributes = left_attributes.clone();

        let left = self.grow(store, left, &left_attributes, total);
        let right = self.grow(store, right, &right_attributes, total);

        Node::internal(condition, left, right)
    }


    /// Returns the attribute in `attributes` with the least
    /// weighted impurity over the records at `positions`.
    /// Attributes are scanned in ascending order
    /// and a later attribute replaces the current best
    /// only if its score is strictly smaller.
    ///
    /// Returns `None` if `attributes` is empty.
    pub fn best_condition(
        &self,
        store: &RecordStore,
        positions: &[usize],
        attributes: &AttributeSet,
    ) -> Option<usize>
    {
        let mut best: Option<(usize, f64)> = None;
        for attribute in attributes.iter() {
            let score = self.evaluate(store, positions, attribute);
            match best {
                Some((_, best_score)) if score >= best_score => {},
                _ => { best = Some((attribute, score)); },
            }
        }
        best.map(|(attribute, _)| attribute)
    }


    /// Returns the weighted impurity of splitting the records
    /// at `positions` by `attribute`:
    /// `impurity(left) * |left| / n + impurity(right) * |right| / n`.
    pub fn evaluate(
        &self,
        store: &RecordStore,
        positions: &[usize],
        attribute: usize,
    ) -> f64
    {
        let n = positions.len();
        if n == 0 { return 0f64; }

        let mut left = vec![0_usize; store.n_classes()];
        let mut right = vec![0_usize; store.n_classes()];
        for &i in positions {
            let record = &store[i];
            let counts = if record.value(attribute) == 0 {
                &mut left
            } else {
                &mut right
            };
            counts[record.class() - 1] += 1;
        }

        let n_left = left.iter().sum::<usize>() as f64;
        let n_right = right.iter().sum::<usize>() as f64;
        let n = n as f64;

        self.impurity.of(&left) * n_left / n
            + self.impurity.of(&right) * n_right / n
    }
}


/// Returns the class frequencies of the records at `positions`.
/// The `k`-th entry is the frequency of class `k + 1`.
#[inline]
fn class_counts(store: &RecordStore, positions: &[usize]) -> Vec<usize> {
    let mut counts = vec![0_usize; store.n_classes()];
    for &i in positions {
        counts[store[i].class() - 1] += 1;
    }
    counts
}


/// Returns the pair `(class, count)` of the most frequent class.
/// Ties go to the smallest class.
#[inline]
fn majority(counts: &[usize]) -> (usize, usize) {
    let mut best = 0_usize;
    for (k, &c) in counts.iter().enumerate() {
        if c > counts[best] { best = k; }
    }
    (best + 1, counts.get(best).copied().unwrap_or(0))
}


#[inline]
fn majority_leaf(counts: &[usize], coverage: f64) -> Node {
    let (class, count) = majority(counts);
    let n = counts.iter().sum::<usize>();
    let accuracy = if n > 0 { count as f64 / n as f64 } else { 0f64 };

    Node::leaf(class, coverage, accuracy)
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Impurity: {}\n\
            ----------\
            ",
            self.impurity,
        )
    }
}
