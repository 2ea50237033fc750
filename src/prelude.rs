//! Exports the standard structs and traits.

pub use crate::codec::{
    AttributeCodec,
    ClassCodec,
    LabelCodec,
    AttributeLabels,
};

pub use crate::sample::{
    Record,
    RecordStore,
    RecordReader,
};

pub use crate::hypothesis::Classifier;

pub use crate::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Impurity,
    LeafNode,
    Node,
};

pub use crate::validation::{
    ErrorReport,
    LeaveOneOut,
};

pub use crate::session::Session;
