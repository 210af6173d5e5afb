use crate::{
    Element, ElementKind, Family, IndexSet, Pattern, Predicate, Result, SequenceError, Shape,
    write_separated,
};
use std::{
    any::{self, TypeId},
    fmt::{self, Display},
    slice,
};

/// Description of a single position of a shape, computed once from the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementInfo {
    pub type_id: TypeId,
    pub type_name: &'static str,
    pub kind: ElementKind,
    pub family: Option<Family>,
}

impl ElementInfo {
    pub fn of<T: Element>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            kind: T::kind(),
            family: T::family(),
        }
    }
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
    pub fn matches<P: Pattern>(&self) -> bool {
        self.family.is_some_and(|v| v.is::<P>())
    }
}

/// Descriptor form of a shape: the ordered list of its element types.
///
/// Two shapes are equal when they have the same length and the same type at every position.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ShapeInfo {
    elements: Vec<ElementInfo>,
}

impl ShapeInfo {
    pub fn of<S: Shape>() -> Self {
        let mut elements = Vec::with_capacity(S::LEN);
        S::for_each_type_info(|_, info| elements.push(info));
        Self { elements }
    }
    pub fn empty() -> Self {
        Default::default()
    }
    pub fn singleton(element: ElementInfo) -> Self {
        Self {
            elements: vec![element],
        }
    }
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    pub fn get(&self, position: usize) -> Option<&ElementInfo> {
        self.elements.get(position)
    }
    pub fn iter(&self) -> slice::Iter<'_, ElementInfo> {
        self.elements.iter()
    }
    pub fn as_slice(&self) -> &[ElementInfo] {
        &self.elements
    }

    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.contains_type_id(TypeId::of::<T>())
    }
    pub fn contains_type_id(&self, type_id: TypeId) -> bool {
        self.elements.iter().any(|v| v.type_id == type_id)
    }
    pub fn contains_matching<P: Pattern>(&self) -> bool {
        self.elements.iter().any(ElementInfo::matches::<P>)
    }
    pub fn contains_kind(&self, kind: ElementKind) -> bool {
        self.elements.iter().any(|v| v.kind == kind)
    }
    /// First position holding exactly `T`.
    pub fn position_of<T: ?Sized + 'static>(&self) -> Option<usize> {
        self.elements.iter().position(ElementInfo::is::<T>)
    }

    /// Keeps the positions satisfying `predicate`, in their original order.
    ///
    /// Every position maps to either a singleton or an empty (shape, index set) pair, the
    /// pairs are then concatenated. The returned index set addresses the kept positions
    /// in `self`, it is strictly increasing.
    pub fn filter<P: Predicate + ?Sized>(&self, predicate: &P) -> (ShapeInfo, IndexSet) {
        let (shapes, indices): (Vec<_>, Vec<_>) = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, element)| {
                if predicate.test(element) {
                    (ShapeInfo::singleton(*element), IndexSet::singleton(i))
                } else {
                    (ShapeInfo::empty(), IndexSet::empty())
                }
            })
            .unzip();
        let result = (ShapeInfo::concat(&shapes), IndexSet::concat(&indices));
        log::trace!(
            "Filtered {} down to {} at positions {}",
            self,
            result.0,
            result.1
        );
        result
    }

    /// Concatenates the shapes in argument order.
    pub fn concat<'a>(shapes: impl IntoIterator<Item = &'a ShapeInfo>) -> ShapeInfo {
        Self {
            elements: shapes
                .into_iter()
                .flat_map(|v| v.elements.iter().copied())
                .collect(),
        }
    }

    /// Shape made of the positions listed in `indices`, in the order they are listed.
    pub fn select(&self, indices: &IndexSet) -> Result<ShapeInfo> {
        indices
            .iter()
            .map(|i| {
                self.elements
                    .get(i)
                    .copied()
                    .ok_or_else(|| {
                        SequenceError::IndexOutOfRange {
                            position: i,
                            len: self.len(),
                        }
                        .into()
                    })
            })
            .collect::<Result<_>>()
            .map(|elements| Self { elements })
    }

    /// Checks that `self` has the arity and the types of `expected`.
    pub fn ensure_matches(&self, expected: &ShapeInfo) -> Result<()> {
        if self.len() != expected.len() {
            return Err(SequenceError::ArityMismatch {
                expected: expected.len(),
                found: self.len(),
            }
            .into());
        }
        if let Some((position, (found, expected))) = self
            .elements
            .iter()
            .zip(expected.elements.iter())
            .enumerate()
            .find(|(_, (found, expected))| found.type_id != expected.type_id)
        {
            return Err(SequenceError::TypeMismatch {
                position,
                expected: expected.type_name,
                found: found.type_name,
            }
            .into());
        }
        Ok(())
    }
}

impl FromIterator<ElementInfo> for ShapeInfo {
    fn from_iter<I: IntoIterator<Item = ElementInfo>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ShapeInfo {
    type Item = &'a ElementInfo;
    type IntoIter = slice::Iter<'a, ElementInfo>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Display for ShapeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_separated(f, &self.elements, ", ", |f, v| f.write_str(v.type_name))?;
        f.write_str(")")
    }
}
