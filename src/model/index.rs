use std::fmt;

/// Position in the displayed person list.
///
/// Users type one-based indexes; the model works with zero-based ones. Keeping
/// both behind one type stops the two from being mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// # Panics
    /// If `one_based` is zero.
    pub fn from_one_based(one_based: usize) -> Self {
        assert!(one_based > 0, "one-based index must be positive");
        Self {
            zero_based: one_based - 1,
        }
    }

    pub fn zero_based(self) -> usize {
        self.zero_based
    }

    pub fn one_based(self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_and_zero_based_agree() {
        let index = Index::from_one_based(3);
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index, Index::from_zero_based(2));
        assert_eq!(index.to_string(), "3");
    }

    #[test]
    #[should_panic]
    fn zero_is_not_a_one_based_index() {
        Index::from_one_based(0);
    }
}
