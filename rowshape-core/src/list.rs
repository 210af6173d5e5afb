//! Concatenation of tuple shapes.
//!
//! Tuples are turned into their inductive form `Cons<A, Cons<B, Nil>>`, appended there,
//! and turned back into a flat tuple. The output must fit in [`MAX_ARITY`](crate::MAX_ARITY),
//! a longer result does not implement [`List`] and fails to build.

/// Empty inductive list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Nil;

/// Inductive list cell: a head followed by the rest of the list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cons<H, T>(pub H, pub T);

/// A flat tuple and its inductive list.
pub trait Tuple: Sized {
    type AsList: List<AsTuple = Self>;
    fn into_list(self) -> Self::AsList;
}

/// An inductive list and its flat tuple.
pub trait List: Sized {
    type AsTuple: Tuple<AsList = Self>;
    fn into_tuple(self) -> Self::AsTuple;
}

pub trait Append<Rhs> {
    type Output;
    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Append<Rhs> for Nil {
    type Output = Rhs;
    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T: Append<Rhs>, Rhs> Append<Rhs> for Cons<H, T> {
    type Output = Cons<H, T::Output>;
    fn append(self, rhs: Rhs) -> Self::Output {
        Cons(self.0, self.1.append(rhs))
    }
}

/// Concatenation of two tuples, preserving the order of both.
pub trait Concat<Rhs> {
    type Output;
    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<L, R> Concat<R> for L
where
    L: Tuple,
    R: Tuple,
    L::AsList: Append<R::AsList>,
    <L::AsList as Append<R::AsList>>::Output: List,
{
    type Output = <<L::AsList as Append<R::AsList>>::Output as List>::AsTuple;
    fn concat(self, rhs: R) -> Self::Output {
        self.into_list().append(rhs.into_list()).into_tuple()
    }
}

/// Tuple type made of the elements of `L` followed by the elements of `R`.
pub type Concatenated<L, R> = <L as Concat<R>>::Output;

/// Concatenates two tuple values.
///
/// # Examples
/// ```rust
/// use rowshape_core::concat;
/// let row = concat((1, "a"), (true,));
/// assert_eq!(row, (1, "a", true));
/// ```
pub fn concat<L: Concat<R>, R>(lhs: L, rhs: R) -> L::Output {
    lhs.concat(rhs)
}
