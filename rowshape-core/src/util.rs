use std::fmt;

#[derive(Clone)]
pub enum EitherIterator<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    Left(A),
    Right(B),
}
impl<A, B> Iterator for EitherIterator<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            EitherIterator::Left(a) => a.next(),
            EitherIterator::Right(b) => b.next(),
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            EitherIterator::Left(a) => a.size_hint(),
            EitherIterator::Right(b) => b.size_hint(),
        }
    }
}

/// Writes every value through `f`, putting `separator` between two consecutive ones.
pub fn write_separated<W, T, F>(
    out: &mut W,
    values: impl IntoIterator<Item = T>,
    separator: &str,
    mut f: F,
) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    F: FnMut(&mut W, T) -> fmt::Result,
{
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            out.write_str(separator)?;
        }
        f(out, v)?;
    }
    Ok(())
}
