use super::{
    dtree::DecisionTree,
    impurity::Impurity,
};


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minitree::prelude::*;
///
/// let learner = DecisionTreeBuilder::new()
///     .impurity(Impurity::Entropy)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeBuilder {
    impurity: Impurity,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// impurity: Impurity::Gini,
    /// ```
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the impurity measure used for attribute selection.
    /// Default value is `Impurity::Gini`.
    /// See [`Impurity`] for other measures.
    #[inline]
    pub fn impurity(mut self, impurity: Impurity) -> Self {
        self.impurity = impurity;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(self.impurity)
    }
}
