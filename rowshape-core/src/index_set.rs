use crate::{Element, Result, Sequence, SequenceError, write_separated};
use std::{
    borrow::Cow,
    fmt::{self, Display},
    iter::Copied,
    slice,
};

/// Ordered list of positions into a shape.
///
/// Index sets address elements of a shape or of a sequence without building a new
/// aggregate. They are plain values: concatenation does not deduplicate, the caller
/// keeps the sets disjoint when it needs to.
///
/// # Examples
/// ```rust
/// use rowshape_core::IndexSet;
/// let set = IndexSet::concat([&IndexSet::identity(2), &IndexSet::from_static(&[4])]);
/// assert_eq!(set.as_slice(), &[0, 1, 4]);
/// assert_eq!(set.value_at(2), 4);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct IndexSet {
    indices: Cow<'static, [usize]>,
}

impl IndexSet {
    pub const fn from_static(indices: &'static [usize]) -> Self {
        Self {
            indices: Cow::Borrowed(indices),
        }
    }
    pub const fn empty() -> Self {
        Self::from_static(&[])
    }
    pub fn singleton(index: usize) -> Self {
        Self {
            indices: Cow::Owned(vec![index]),
        }
    }
    /// The range `[0, len)`.
    pub fn identity(len: usize) -> Self {
        (0..len).collect()
    }
    /// Concatenates the sets in argument order.
    pub fn concat<'a>(sets: impl IntoIterator<Item = &'a IndexSet>) -> Self {
        sets.into_iter().flat_map(IndexSet::iter).collect()
    }
    pub fn len(&self) -> usize {
        self.indices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
    pub fn iter(&self) -> Copied<slice::Iter<'_, usize>> {
        self.indices.iter().copied()
    }
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
    pub fn get(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }
    /// The index stored at `position`.
    ///
    /// # Panics
    /// When `position >= self.len()`. A wrapped or sentinel index would silently
    /// corrupt the position arithmetic of the caller.
    pub fn value_at(&self, position: usize) -> usize {
        match self.try_value_at(position) {
            Ok(v) => v,
            Err(e) => {
                log::error!("{:#}", e);
                panic!("{:#}", e);
            }
        }
    }
    pub fn try_value_at(&self, position: usize) -> Result<usize> {
        self.get(position).ok_or_else(|| {
            SequenceError::IndexOutOfRange {
                position,
                len: self.len(),
            }
            .into()
        })
    }
    pub fn is_strictly_increasing(&self) -> bool {
        self.indices.windows(2).all(|w| w[0] < w[1])
    }
    /// The elements of `sequence` at the stored positions, in set order.
    pub fn select<'s, S: Sequence>(&self, sequence: &'s S) -> Result<Vec<&'s dyn Element>> {
        self.iter()
            .map(|i| {
                sequence.element(i).ok_or_else(|| {
                    SequenceError::IndexOutOfRange {
                        position: i,
                        len: S::LEN,
                    }
                    .into()
                })
            })
            .collect()
    }
}

/// Index stored at `position`, usable in `const` items where an out of range
/// position fails the build.
pub const fn index_at(indices: &[usize], position: usize) -> usize {
    indices[position]
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: Cow::Owned(iter.into_iter().collect()),
        }
    }
}

impl From<Vec<usize>> for IndexSet {
    fn from(value: Vec<usize>) -> Self {
        Self {
            indices: Cow::Owned(value),
        }
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = usize;
    type IntoIter = Copied<slice::Iter<'a, usize>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_separated(f, self.iter(), ", ", |f, v| write!(f, "{v}"))?;
        f.write_str("]")
    }
}
