use std::ops::Index;

use crate::error::{Error, Result};
use super::record::Record;


/// An ordered collection of training records
/// sharing the same number of attributes and classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
    n_attributes: usize,
    n_classes: usize,
}


impl RecordStore {
    /// Construct an empty store for records with `n_attributes`
    /// attributes and classes in `[1, n_classes]`.
    pub fn new(n_attributes: usize, n_classes: usize) -> Self {
        Self { records: Vec::new(), n_attributes, n_classes, }
    }


    /// Construct a store holding `records`.
    /// Every record is checked as in [`RecordStore::push`].
    pub fn from_records<I>(records: I, n_attributes: usize, n_classes: usize)
        -> Result<Self>
        where I: IntoIterator<Item = Record>
    {
        let mut store = Self::new(n_attributes, n_classes);
        for record in records {
            store.push(record)?;
        }
        Ok(store)
    }


    /// Append a record to the end of the store.
    pub fn push(&mut self, record: Record) -> Result<()> {
        self.check(&record)?;
        self.records.push(record);
        Ok(())
    }


    /// Removes the record at `index` and returns it.
    /// The records after `index` shift to the left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Record {
        self.records.remove(index)
    }


    /// Inserts `record` at `index`,
    /// shifting the records after it to the right.
    ///
    /// # Panics
    /// Panics if `index > n_records`.
    pub fn insert(&mut self, index: usize, record: Record) -> Result<()> {
        self.check(&record)?;
        self.records.insert(index, record);
        Ok(())
    }


    /// Returns the pair `(# of records, # of attributes)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.n_attributes)
    }


    /// Returns the number of records.
    #[inline]
    pub fn n_records(&self) -> usize {
        self.records.len()
    }


    /// Returns the number of attributes of each record.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.n_attributes
    }


    /// Returns the number of classes.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }


    /// Returns `true` if the store holds no record.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }


    /// Returns the records as a slice.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }


    /// Returns the positions of all records.
    pub fn positions(&self) -> Vec<usize> {
        (0..self.records.len()).collect()
    }


    /// Returns the positions of all records except `index`,
    /// in store order.
    pub fn positions_without(&self, index: usize) -> Vec<usize> {
        (0..self.records.len()).filter(|&i| i != index)
            .collect()
    }


    fn check(&self, record: &Record) -> Result<()> {
        let got = record.attributes().len();
        if got != self.n_attributes {
            return Err(Error::ShapeMismatch {
                expected: self.n_attributes,
                got,
            });
        }

        if let Some(&value) = record.attributes().iter().find(|&&x| x > 1) {
            return Err(Error::AttributeOutOfRange { value });
        }

        let class = record.class();
        if class == 0 || class > self.n_classes {
            return Err(Error::ClassOutOfRange {
                class,
                n_classes: self.n_classes,
            });
        }
        Ok(())
    }
}


impl Index<usize> for RecordStore {
    type Output = Record;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}
