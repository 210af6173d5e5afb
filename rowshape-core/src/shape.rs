use crate::{Element, ElementInfo, IndexSet, Pattern, Predicate, ShapeInfo};
use std::{
    any::TypeId,
    fmt::{self, Debug},
    marker::PhantomData,
};

/// Zero sized stand-in for an element type, handed to a [`TypeVisitor`] in place of a value.
pub struct TypeTag<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> TypeTag<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Clone for TypeTag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for TypeTag<T> {}

impl<T: ?Sized> Default for TypeTag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Debug for TypeTag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag<{}>", std::any::type_name::<T>())
    }
}

/// Visits the element types of a shape, no value required.
pub trait TypeVisitor {
    fn visit<T: Element>(&mut self, index: usize, tag: TypeTag<T>);
}

/// Ordered, fixed list of element types. Implemented for tuples of [`Element`]s
/// up to [`MAX_ARITY`](crate::MAX_ARITY), `()` being the empty shape.
pub trait Shape: Sized + 'static {
    const LEN: usize;

    /// Calls `visitor` with the type at `index`, nothing happens past the end.
    fn visit_type_at<V: TypeVisitor>(index: usize, visitor: &mut V);

    /// Visits every position in ascending order.
    ///
    /// There is no reverse form: enumerating metadata always follows declaration order.
    fn for_each_type<V: TypeVisitor>(visitor: &mut V) {
        for index in 0..Self::LEN {
            Self::visit_type_at(index, visitor);
        }
    }

    fn for_each_type_info<F: FnMut(usize, ElementInfo)>(f: F) {
        struct InfoVisitor<F>(F);
        impl<F: FnMut(usize, ElementInfo)> TypeVisitor for InfoVisitor<F> {
            fn visit<T: Element>(&mut self, index: usize, _tag: TypeTag<T>) {
                (self.0)(index, ElementInfo::of::<T>())
            }
        }
        Self::for_each_type(&mut InfoVisitor(f));
    }

    fn info() -> ShapeInfo {
        ShapeInfo::of::<Self>()
    }

    fn contains_type<T: ?Sized + 'static>() -> bool {
        struct Scan {
            target: TypeId,
            found: bool,
        }
        impl TypeVisitor for Scan {
            fn visit<U: Element>(&mut self, _index: usize, _tag: TypeTag<U>) {
                self.found |= TypeId::of::<U>() == self.target;
            }
        }
        let mut scan = Scan {
            target: TypeId::of::<T>(),
            found: false,
        };
        Self::for_each_type(&mut scan);
        scan.found
    }

    fn contains_matching<P: Pattern>() -> bool {
        let mut found = false;
        Self::for_each_type_info(|_, info| found |= info.matches::<P>());
        found
    }

    /// See [`ShapeInfo::filter`].
    fn filter<P: Predicate + ?Sized>(predicate: &P) -> (ShapeInfo, IndexSet) {
        Self::info().filter(predicate)
    }
}
