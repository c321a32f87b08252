//! Number of axes shared by comparable entities, and the `GeomObject` capability.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{GeomError, Result};

/// Positive count of coordinate axes.
///
/// Invariants:
/// - `size > 0`, checked once in `Dimension::new`.
/// - Equality and hash depend on `size` only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Dimension {
    size: usize,
}

impl Dimension {
    /// Most work happens in the plane.
    pub const TWO: Dimension = Dimension { size: 2 };

    pub fn new(size: i64) -> Result<Self> {
        if size <= 0 {
            return Err(GeomError::InvalidDimension { size });
        }
        Ok(Self {
            size: size as usize,
        })
    }

    /// Dimension of a non-empty coordinate list.
    pub(crate) fn of_len(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(GeomError::InvalidDimension { size: 0 });
        }
        Ok(Self { size: len })
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.size
    }

    /// `DimensionMismatch` unless `self == other`.
    #[inline]
    pub fn ensure_same(&self, other: Dimension) -> Result<()> {
        if self.size != other.size {
            return Err(GeomError::mismatch(self.size, other.size));
        }
        Ok(())
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::TWO
    }
}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(31usize.wrapping_mul(self.size));
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.size)
    }
}

/// Anything that lives in a fixed number of dimensions.
///
/// Equality is deliberately not part of this trait: every concrete type
/// defines its own.
pub trait GeomObject: fmt::Debug {
    fn dimension(&self) -> Dimension;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rejects_non_positive_sizes() {
        assert_eq!(
            Dimension::new(0),
            Err(GeomError::InvalidDimension { size: 0 })
        );
        assert!(matches!(
            Dimension::new(-4),
            Err(GeomError::InvalidDimension { size: -4 })
        ));
        assert_eq!(Dimension::new(3).unwrap().get(), 3);
    }

    #[test]
    fn defaults_to_two() {
        assert_eq!(Dimension::default().get(), 2);
        assert_eq!(Dimension::default(), Dimension::TWO);
    }

    #[test]
    fn equality_and_hash_follow_size() {
        let mut set = HashSet::new();
        set.insert(Dimension::new(2).unwrap());
        set.insert(Dimension::default());
        set.insert(Dimension::new(5).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ensure_same_reports_both_sides() {
        let two = Dimension::TWO;
        let three = Dimension::new(3).unwrap();
        assert!(two.ensure_same(Dimension::default()).is_ok());
        assert_eq!(
            two.ensure_same(three),
            Err(GeomError::DimensionMismatch { left: 2, right: 3 })
        );
    }
}
