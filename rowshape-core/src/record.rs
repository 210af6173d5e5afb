use crate::{
    Context, Direction, Element, IndexSet, Invoke, Result, Sequence, SequenceError, ShapeInfo,
};
use std::{
    any,
    fmt::{self, Debug},
    ops::ControlFlow,
};

/// Type erased sequence: one boxed element per position, along with its shape.
///
/// The counterpart of a typed tuple when the shape is only known at runtime. Every
/// operation that a tuple checks at compile time is checked here against the stored
/// shape and reported as a [`SequenceError`].
pub struct Record {
    shape: ShapeInfo,
    values: Vec<Box<dyn Element>>,
}

impl Record {
    pub fn new<S: Sequence>(sequence: S) -> Self {
        Self {
            shape: S::info(),
            values: sequence.into_elements(),
        }
    }
    pub fn shape(&self) -> &ShapeInfo {
        &self.shape
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn get(&self, position: usize) -> Option<&dyn Element> {
        self.values.get(position).map(|v| v.as_ref())
    }
    pub fn get_as<T: Element>(&self, position: usize) -> Result<&T> {
        let element = self.get(position).ok_or(SequenceError::IndexOutOfRange {
            position,
            len: self.len(),
        })?;
        element.downcast_ref::<T>().ok_or_else(|| {
            SequenceError::TypeMismatch {
                position,
                expected: any::type_name::<T>(),
                found: element.type_name(),
            }
            .into()
        })
    }
    pub fn for_each<F>(&self, direction: Direction, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(usize, &dyn Element) -> ControlFlow<()>,
    {
        for index in direction.positions(self.len()) {
            if f(index, self.values[index].as_ref()).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
    /// The elements at the positions listed in `indices`.
    pub fn select(&self, indices: &IndexSet) -> Result<Vec<&dyn Element>> {
        indices
            .iter()
            .map(|i| {
                self.get(i).ok_or_else(|| {
                    SequenceError::IndexOutOfRange {
                        position: i,
                        len: self.len(),
                    }
                    .into()
                })
            })
            .collect()
    }
    /// Moves every element into the same position of `destination`, in ascending order.
    ///
    /// Both records must have the same shape, nothing is moved otherwise.
    pub fn transfer_into(self, destination: &mut Record) -> Result<()> {
        self.shape
            .ensure_matches(&destination.shape)
            .with_context(|| format!("While transferring {} into {}", self.shape, destination.shape))?;
        for (slot, value) in destination.values.iter_mut().zip(self.values) {
            *slot = value;
        }
        log::trace!("Transferred {} elements of {}", destination.len(), destination.shape);
        Ok(())
    }
    /// Converts back into the typed sequence `S`, checking the shape first.
    pub fn into_sequence<S: Sequence>(self) -> Result<S> {
        let signature = S::info();
        self.shape
            .ensure_matches(&signature)
            .with_context(|| format!("While converting {} into {}", self.shape, signature))?;
        S::from_elements(self.values)
    }
    /// Calls `callable` with the elements as positional arguments.
    ///
    /// `Args` is the explicit parameter list of `callable`, the record is checked against
    /// it before anything is moved.
    pub fn invoke<Args, F>(self, callable: F) -> Result<F::Output>
    where
        Args: Sequence,
        F: Invoke<Args>,
    {
        let args = self.into_sequence::<Args>()?;
        Ok(callable.invoke(args))
    }
}

impl<S: Sequence> From<S> for Record {
    fn from(value: S) -> Self {
        Record::new(value)
    }
}

impl Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("shape", &format_args!("{}", self.shape))
            .field("len", &self.len())
            .finish()
    }
}

/// Unboxes the element at `position` as `T`.
///
/// `expected` and `found` are the lengths of the target shape and of the element list,
/// reported when the list ends before `position`.
pub(crate) fn take_element<T: Element>(
    position: usize,
    expected: usize,
    found: usize,
    element: Option<Box<dyn Element>>,
) -> Result<T> {
    let element = element.ok_or(SequenceError::ArityMismatch { expected, found })?;
    let found = element.type_name();
    element
        .into_any()
        .downcast::<T>()
        .map(|v| *v)
        .map_err(|_| {
            SequenceError::TypeMismatch {
                position,
                expected: any::type_name::<T>(),
                found,
            }
            .into()
        })
}
