//! A session owning the training records and the tree built from them.
use tracing::{info, instrument};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::Classifier;
use crate::codec::{AttributeCodec, ClassCodec};
use crate::decision_tree::{DecisionTree, DecisionTreeClassifier};
use crate::error::Result;
use crate::sample::{Record, RecordReader, RecordStore};
use crate::validation::{
    ErrorReport,
    LeaveOneOut,
    holdout_error,
    training_error,
};


/// The training records, the codec they were read with,
/// and the tree built over all of them.
///
/// The tree is rebuilt from scratch whenever the records change,
/// so it always equals `learner.produce(store)`.
///
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let learner = DecisionTreeBuilder::new().build();
/// let session = Session::load(LabelCodec::default(), learner, "train.txt")
///     .unwrap();
///
/// println!("training error: {}", session.training_error().n_errors());
/// println!("leave-one-out : {}", session.leave_one_out().n_errors());
/// session.classify_data("test.txt", "classified.txt").unwrap();
/// println!("{}", session.validate("validation.txt").unwrap());
/// ```
pub struct Session<C> {
    codec: C,
    learner: DecisionTree,
    store: RecordStore,
    tree: DecisionTreeClassifier,
    verbose: bool,
}


impl<C> Session<C>
    where C: AttributeCodec + ClassCodec
{
    /// Construct a new session and build the tree over `store`.
    pub fn new(codec: C, learner: DecisionTree, store: RecordStore) -> Self {
        let tree = learner.produce(&store);
        Self { codec, learner, store, tree, verbose: false, }
    }


    /// Read the training file at `path` with `codec`
    /// and build the tree over it.
    #[instrument(skip(codec, learner, path), fields(path = %path.as_ref().display()))]
    pub fn load<P>(codec: C, learner: DecisionTree, path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let store = RecordReader::new(&codec).read_training(path)?;
        let session = Self::new(codec, learner, store);
        info!(
            n_records = session.n_records(),
            depth = session.tree.depth(),
            n_leaves = session.tree.n_leaves(),
            "tree built"
        );
        Ok(session)
    }


    /// Set the verbose parameter passed to [`LeaveOneOut`].
    /// Default vaule is `false.`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Rebuild the tree over all records.
    pub fn build_tree(&mut self) {
        self.tree = self.learner.produce(&self.store);
    }


    /// Append `record` to the training records and rebuild the tree.
    pub fn push(&mut self, record: Record) -> Result<()> {
        self.store.push(record)?;
        self.build_tree();
        Ok(())
    }


    /// Remove the record at `index` and rebuild the tree.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Record {
        let record = self.store.remove(index);
        self.build_tree();
        record
    }


    /// Returns the current tree.
    #[inline]
    pub fn tree(&self) -> &DecisionTreeClassifier {
        &self.tree
    }


    /// Returns the training records.
    #[inline]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }


    /// Returns the codec.
    #[inline]
    pub fn codec(&self) -> &C {
        &self.codec
    }


    /// Returns the learner.
    #[inline]
    pub fn learner(&self) -> &DecisionTree {
        &self.learner
    }


    /// Returns the number of training records.
    #[inline]
    pub fn n_records(&self) -> usize {
        self.store.n_records()
    }


    /// Scores the current tree against its own training records.
    pub fn training_error(&self) -> ErrorReport {
        training_error(&self.tree, &self.store)
    }


    /// Runs leave-one-out over the training records.
    /// Neither the records nor the current tree are modified.
    pub fn leave_one_out(&self) -> ErrorReport {
        LeaveOneOut::new(&self.store)
            .verbose(self.verbose)
            .run(&self.learner)
    }


    /// Reads the unlabeled records in `input`, classifies them,
    /// and writes one line per record to `output`.
    /// Returns the number of records classified.
    #[instrument(
        skip_all,
        fields(
            input = %input.as_ref().display(),
            output = %output.as_ref().display()
        )
    )]
    pub fn classify_data<P, Q>(&self, input: P, output: Q) -> Result<usize>
        where P: AsRef<Path>,
              Q: AsRef<Path>,
    {
        let rows = RecordReader::new(&self.codec)
            .read_unlabeled(input, self.tree.n_attributes())?;

        let file = File::create(output)?;
        let mut writer = BufWriter::new(file);
        self.write_classified(&rows[..], &mut writer)?;
        writer.flush()?;

        info!(n_records = rows.len(), "records classified");
        Ok(rows.len())
    }


    /// Writes `label<TAB>coverage<TAB>accuracy` for each row.
    pub fn write_classified<W: Write>(&self, rows: &[Vec<u8>], mut out: W)
        -> Result<()>
    {
        for row in rows {
            let leaf = self.tree.classify(&row[..]);
            let label = self.codec.decode_class(leaf.predicted_class())?;
            writeln!(
                out,
                "{label}\t{:.3}\t{:.3}",
                leaf.coverage(),
                leaf.accuracy(),
            )?;
        }
        Ok(())
    }


    /// Scores the current tree against the labeled records
    /// in the file at `path`.
    pub fn validate<P: AsRef<Path>>(&self, path: P) -> Result<ErrorReport> {
        let records = RecordReader::new(&self.codec)
            .read_labeled(path, self.tree.n_attributes())?;

        Ok(holdout_error(&self.tree, &records[..]))
    }
}
