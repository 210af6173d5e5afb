use crate::{Element, EitherIterator, Result, Shape};
use std::{
    iter::Rev,
    ops::{ControlFlow, Range},
};

/// Traversal order of a value iteration.
///
/// `Reverse` is the default of the low level traversal, [`Sequence::iterate`] is the
/// ascending convenience. Type iteration ([`Shape::for_each_type`]) is always ascending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    #[default]
    Reverse,
}

impl Direction {
    /// Positions of a sequence of length `len` in this order.
    pub fn positions(self, len: usize) -> EitherIterator<Range<usize>, Rev<Range<usize>>> {
        match self {
            Direction::Forward => EitherIterator::Left(0..len),
            Direction::Reverse => EitherIterator::Right((0..len).rev()),
        }
    }
}

/// Visits the values of a sequence. Returning `Break` stops the traversal.
pub trait Visitor {
    fn visit<T: Element>(&mut self, index: usize, value: &T) -> ControlFlow<()>;
}

/// Value conforming to a [`Shape`]: a tuple of [`Element`]s.
pub trait Sequence: Shape {
    /// Type erased reference to the element at `index`.
    fn element(&self, index: usize) -> Option<&dyn Element>;

    /// Calls `visitor` with the element at `index`, `Continue` past the end.
    fn visit_at<V: Visitor>(&self, index: usize, visitor: &mut V) -> ControlFlow<()>;

    /// Moves every element into the same position of `destination`, in ascending order.
    ///
    /// The previous value at each position of `destination` is dropped as soon as it
    /// gets replaced.
    fn transfer(self, destination: &mut Self);

    /// Boxes every element, in ascending order.
    fn into_elements(self) -> Vec<Box<dyn Element>>;

    /// Rebuilds the sequence, checking arity and the type at every position.
    fn from_elements(elements: Vec<Box<dyn Element>>) -> Result<Self>;

    fn for_each<V: Visitor>(&self, visitor: &mut V, direction: Direction) -> ControlFlow<()> {
        for index in direction.positions(Self::LEN) {
            if self.visit_at(index, visitor).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn for_each_dyn<F>(&self, direction: Direction, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(usize, &dyn Element) -> ControlFlow<()>,
    {
        for index in direction.positions(Self::LEN) {
            let Some(element) = self.element(index) else {
                continue;
            };
            if f(index, element).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Visits every element in ascending order.
    fn iterate<F: FnMut(usize, &dyn Element)>(&self, mut f: F) {
        let _ = self.for_each_dyn(Direction::Forward, |i, v| {
            f(i, v);
            ControlFlow::Continue(())
        });
    }
}
