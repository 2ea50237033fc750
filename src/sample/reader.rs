use tracing::{debug, instrument};

use std::fs;
use std::path::Path;

use crate::codec::{AttributeCodec, ClassCodec};
use crate::error::{Error, Result};
use super::record::Record;
use super::record_store::RecordStore;


/// A struct that reads the flat-file formats through a codec.
///
/// Tokens are separated by white spaces and/or commas.
/// Three formats are supported:
/// - **training**: `n_records n_attributes n_classes`
///     followed by `n_records` rows of attribute labels and a class label,
/// - **unlabeled**: `n_records` followed by rows of attribute labels,
/// - **labeled**: `n_records` followed by rows of attribute labels
///     and a class label.
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let codec = LabelCodec::default();
/// let store = RecordReader::new(&codec)
///     .read_training("/path/to/train.txt")
///     .unwrap();
/// ```
pub struct RecordReader<'a, C> {
    codec: &'a C,
}


impl<'a, C> RecordReader<'a, C>
    where C: AttributeCodec + ClassCodec
{
    /// Construct a new instance of [`RecordReader`].
    pub fn new(codec: &'a C) -> Self {
        Self { codec }
    }


    /// Reads a training file into a [`RecordStore`].
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn read_training<P: AsRef<Path>>(&self, path: P) -> Result<RecordStore> {
        let text = fs::read_to_string(path)?;
        self.parse_training(&text)
    }


    /// Parses the contents of a training file.
    pub fn parse_training(&self, text: &str) -> Result<RecordStore> {
        let mut tokens = tokenize(text);
        let n_records = next_count(&mut tokens, "record count")?;
        let n_attributes = next_count(&mut tokens, "attribute count")?;
        let n_classes = next_count(&mut tokens, "class count")?;

        let n_columns = self.codec.n_columns();
        if n_attributes > n_columns {
            return Err(Error::ShapeMismatch {
                expected: n_columns,
                got: n_attributes,
            });
        }

        let mut store = RecordStore::new(n_attributes, n_classes);
        for _ in 0..n_records {
            let record = self.next_record(&mut tokens, n_attributes)?;
            store.push(record)?;
        }

        debug!(n_records, n_attributes, n_classes, "training records loaded");
        Ok(store)
    }


    /// Reads a file of unlabeled records
    /// with `n_attributes` attributes each.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn read_unlabeled<P: AsRef<Path>>(
        &self,
        path: P,
        n_attributes: usize,
    ) -> Result<Vec<Vec<u8>>>
    {
        let text = fs::read_to_string(path)?;
        self.parse_unlabeled(&text, n_attributes)
    }


    /// Parses the contents of a file of unlabeled records.
    pub fn parse_unlabeled(&self, text: &str, n_attributes: usize)
        -> Result<Vec<Vec<u8>>>
    {
        let mut tokens = tokenize(text);
        let n_records = next_count(&mut tokens, "record count")?;

        (0..n_records)
            .map(|_| self.next_attributes(&mut tokens, n_attributes))
            .collect()
    }


    /// Reads a file of labeled records
    /// with `n_attributes` attributes each.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn read_labeled<P: AsRef<Path>>(
        &self,
        path: P,
        n_attributes: usize,
    ) -> Result<Vec<Record>>
    {
        let text = fs::read_to_string(path)?;
        self.parse_labeled(&text, n_attributes)
    }


    /// Parses the contents of a file of labeled records.
    pub fn parse_labeled(&self, text: &str, n_attributes: usize)
        -> Result<Vec<Record>>
    {
        let mut tokens = tokenize(text);
        let n_records = next_count(&mut tokens, "record count")?;

        (0..n_records)
            .map(|_| self.next_record(&mut tokens, n_attributes))
            .collect()
    }


    fn next_attributes<'t, I>(&self, tokens: &mut I, n_attributes: usize)
        -> Result<Vec<u8>>
        where I: Iterator<Item = &'t str>
    {
        (0..n_attributes)
            .map(|column| -> Result<u8> {
                let raw = tokens.next()
                    .ok_or(Error::UnexpectedEof { expected: "attribute label" })?;
                let bit = self.codec.encode_attribute(raw, column)?;
                Ok(bit)
            })
            .collect()
    }


    fn next_record<'t, I>(&self, tokens: &mut I, n_attributes: usize)
        -> Result<Record>
        where I: Iterator<Item = &'t str>
    {
        let attributes = self.next_attributes(tokens, n_attributes)?;
        let raw = tokens.next()
            .ok_or(Error::UnexpectedEof { expected: "class label" })?;
        let class = self.codec.encode_class(raw)?;

        Ok(Record::new(attributes, class))
    }
}


fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}


fn next_count<'t, I>(tokens: &mut I, what: &'static str) -> Result<usize>
    where I: Iterator<Item = &'t str>
{
    let token = tokens.next()
        .ok_or(Error::UnexpectedEof { expected: what })?;

    token.parse::<usize>()
        .map_err(|_| Error::InvalidCount { token: token.to_string(), what })
}
