use crate::decision_tree::LeafNode;
use crate::sample::RecordStore;


/// A trait that defines the behavor of classifier.
/// You only need to implement `classify` method.
pub trait Classifier {
    /// Returns the leaf that the attribute vector `attributes` reaches.
    ///
    /// # Panics
    /// May panic if `attributes` is shorter than
    /// the number of attributes the classifier was built with.
    fn classify(&self, attributes: &[u8]) -> &LeafNode;


    /// Predicts the class of `attributes`.
    fn predict(&self, attributes: &[u8]) -> usize {
        self.classify(attributes).predicted_class()
    }


    /// Predicts the classes of all records in `store`.
    fn predict_all(&self, store: &RecordStore) -> Vec<usize> {
        store.records()
            .iter()
            .map(|record| self.predict(record.attributes()))
            .collect::<Vec<_>>()
    }
}
