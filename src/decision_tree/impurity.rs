//! Impurity measures over the class frequencies of a record subset.
use std::fmt;


/// Impurity measures for growing a decision tree.
/// * `Impurity::Gini` is `1 - Σ p_i²`.
/// * `Impurity::ClassificationError` is `1 - max p_i`.
/// * `Impurity::Entropy` is `-Σ p_i log2 p_i`.
///
/// All measures return `0` for an empty subset.
/// Different measures can break ties between attributes differently,
/// so a tree is reproducible only under a fixed measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Impurity {
    /// Gini index.
    #[default]
    Gini,
    /// Misclassification rate of the majority class.
    ClassificationError,
    /// Shannon entropy in bits.
    Entropy,
}


impl fmt::Display for Impurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gini => "Gini index",
            Self::ClassificationError => "Classification error",
            Self::Entropy => "Entropy",
        };

        write!(f, "{name}")
    }
}


impl Impurity {
    /// Returns the impurity of a subset
    /// whose class frequencies are `counts`.
    #[inline]
    pub fn of(&self, counts: &[usize]) -> f64 {
        match self {
            Self::Gini => gini_impurity(counts),
            Self::ClassificationError => classification_error(counts),
            Self::Entropy => entropic_impurity(counts),
        }
    }
}


/// Returns the class proportions of `counts`,
/// or `None` if `counts` sums to zero.
#[inline(always)]
fn proportions(counts: &[usize]) -> Option<impl Iterator<Item = f64> + '_> {
    let total = counts.iter().sum::<usize>();
    if total == 0 { return None; }

    let total = total as f64;
    Some(counts.iter().map(move |&c| c as f64 / total))
}


#[inline(always)]
fn gini_impurity(counts: &[usize]) -> f64 {
    match proportions(counts) {
        Some(ps) => 1f64 - ps.map(|p| p * p).sum::<f64>(),
        None => 0f64,
    }
}


#[inline(always)]
fn classification_error(counts: &[usize]) -> f64 {
    match proportions(counts) {
        Some(ps) => 1f64 - ps.fold(0f64, f64::max),
        None => 0f64,
    }
}


#[inline(always)]
fn entropic_impurity(counts: &[usize]) -> f64 {
    match proportions(counts) {
        Some(ps) => ps.filter(|&p| p > 0f64)
            .map(|p| -p * p.log2())
            .sum::<f64>(),
        None => 0f64,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pure_subsets_have_zero_impurity() {
        for impurity in [Impurity::Gini, Impurity::ClassificationError, Impurity::Entropy] {
            assert_abs_diff_eq!(impurity.of(&[0, 7, 0]), 0.0);
            assert_abs_diff_eq!(impurity.of(&[0, 0, 0]), 0.0);
            assert_abs_diff_eq!(impurity.of(&[]), 0.0);
        }
    }

    #[test]
    fn even_two_class_mix() {
        assert_abs_diff_eq!(Impurity::Gini.of(&[2, 2]), 0.5);
        assert_abs_diff_eq!(Impurity::ClassificationError.of(&[2, 2]), 0.5);
        assert_abs_diff_eq!(Impurity::Entropy.of(&[2, 2]), 1.0);
    }

    #[test]
    fn uneven_three_class_mix() {
        // p = (1/2, 1/4, 1/4)
        let counts = [2, 1, 1];
        assert_abs_diff_eq!(Impurity::Gini.of(&counts), 0.625, epsilon = 1e-12);
        assert_abs_diff_eq!(Impurity::ClassificationError.of(&counts), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Impurity::Entropy.of(&counts), 1.5, epsilon = 1e-12);
    }
}
