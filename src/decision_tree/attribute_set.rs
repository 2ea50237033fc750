use fixedbitset::FixedBitSet;


/// The attributes still eligible for splitting
/// along the current path of the tree.
/// Attributes are visited in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    bits: FixedBitSet,
}


impl AttributeSet {
    /// Returns the set `{0, 1, ..., n_attributes - 1}`.
    pub fn full(n_attributes: usize) -> Self {
        let mut bits = FixedBitSet::with_capacity(n_attributes);
        bits.insert_range(..);
        Self { bits }
    }


    /// Returns a copy of `self` without `attribute`.
    pub fn without(&self, attribute: usize) -> Self {
        let mut bits = self.bits.clone();
        bits.set(attribute, false);
        Self { bits }
    }


    /// Returns `true` if `attribute` is in the set.
    #[inline]
    pub fn contains(&self, attribute: usize) -> bool {
        self.bits.contains(attribute)
    }


    /// Returns the number of attributes in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }


    /// Returns `true` if no attribute is left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.count_ones(..) == 0
    }


    /// Iterates over the attributes in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_leaves_the_original_untouched() {
        let all = AttributeSet::full(4);
        let rest = all.without(2);

        assert_eq!(all.len(), 4);
        assert_eq!(rest.len(), 3);
        assert!(!rest.contains(2));
        assert_eq!(rest.iter().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn empty_universe() {
        let none = AttributeSet::full(0);
        assert!(none.is_empty());
        assert_eq!(none.iter().count(), 0);
    }
}
