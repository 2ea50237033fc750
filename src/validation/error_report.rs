use std::fmt;


/// Number of misclassified records out of the records scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorReport {
    n_errors: usize,
    n_records: usize,
}


impl ErrorReport {
    /// Construct a new report.
    #[inline]
    pub fn new(n_errors: usize, n_records: usize) -> Self {
        Self { n_errors, n_records }
    }


    /// Returns the number of misclassified records.
    #[inline]
    pub fn n_errors(&self) -> usize {
        self.n_errors
    }


    /// Returns the number of records scored.
    #[inline]
    pub fn n_records(&self) -> usize {
        self.n_records
    }


    /// Returns the error rate in `[0, 1]`.
    /// An empty evaluation has rate `0`.
    #[inline]
    pub fn rate(&self) -> f64 {
        if self.n_records == 0 { return 0f64; }
        self.n_errors as f64 / self.n_records as f64
    }


    /// Returns the error rate as a percentage.
    #[inline]
    pub fn percent(&self) -> f64 {
        100f64 * self.rate()
    }
}


impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} percent error", self.percent())
    }
}
