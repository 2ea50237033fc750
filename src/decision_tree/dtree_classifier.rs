//! Defines the decision tree classifier.
use crate::Classifier;


use super::node::*;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// A decision tree built by [`DecisionTree`](super::DecisionTree).
/// This struct is a wrapper of the root `Node`
/// together with the shape of the records it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeClassifier {
    root: Node,
    n_attributes: usize,
    n_classes: usize,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn from_components(
        root: Node,
        n_attributes: usize,
        n_classes: usize,
    ) -> Self
    {
        Self { root, n_attributes, n_classes }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the number of attributes a record must have.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.n_attributes
    }


    /// Returns the number of classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the leaves from left to right.
    #[inline]
    pub fn leaves(&self) -> Vec<&LeafNode> {
        self.root.leaves()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.leaves().len()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;


        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn classify(&self, attributes: &[u8]) -> &LeafNode {
        self.root.classify(attributes)
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_indented(f, 0)
    }
}
