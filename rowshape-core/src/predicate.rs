use crate::{ElementInfo, ElementKind, Pattern};
use std::marker::PhantomData;

/// Classification of an element type, evaluated on its cached [`ElementInfo`].
pub trait Predicate {
    fn test(&self, element: &ElementInfo) -> bool;
}

impl<F: Fn(&ElementInfo) -> bool> Predicate for F {
    fn test(&self, element: &ElementInfo) -> bool {
        self(element)
    }
}

impl Predicate for ElementKind {
    fn test(&self, element: &ElementInfo) -> bool {
        element.kind == *self
    }
}

/// Holds for exactly the type `T`.
pub struct IsType<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> IsType<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for IsType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> Predicate for IsType<T> {
    fn test(&self, element: &ElementInfo) -> bool {
        element.is::<T>()
    }
}

/// Holds for any instantiation of the generic family `P`.
pub struct Matches<P: Pattern>(PhantomData<P>);

impl<P: Pattern> Matches<P> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P: Pattern> Default for Matches<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Pattern> Predicate for Matches<P> {
    fn test(&self, element: &ElementInfo) -> bool {
        element.matches::<P>()
    }
}

/// Negation of the wrapped predicate.
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    fn test(&self, element: &ElementInfo) -> bool {
        !self.0.test(element)
    }
}
