use std::{cmp::Ordering, marker::PhantomData};

/// A total order over `T`.
///
/// Implementations must be consistent: the result for a given pair never
/// changes, and the relation is antisymmetric and transitive. Containers
/// relying on it may misplace elements otherwise (but never misbehave in
/// terms of memory safety).
pub trait Compare<T: ?Sized> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// The order given by [`Ord`].
pub struct NaturalOrder<T: ?Sized>(PhantomData<fn(&T, &T) -> Ordering>);

/// The reverse of the order given by [`Ord`].
pub struct ReverseOrder<T: ?Sized>(PhantomData<fn(&T, &T) -> Ordering>);

impl<T: ?Sized> NaturalOrder<T> {
    pub fn new() -> Self { Self(PhantomData) }
}
impl<T: ?Sized> ReverseOrder<T> {
    pub fn new() -> Self { Self(PhantomData) }
}

impl<T: ?Sized> Default for NaturalOrder<T> {
    fn default() -> Self { Self::new() }
}
impl<T: ?Sized> Default for ReverseOrder<T> {
    fn default() -> Self { Self::new() }
}

impl<T: ?Sized> Clone for NaturalOrder<T> {
    fn clone(&self) -> Self { *self }
}
impl<T: ?Sized> Copy for NaturalOrder<T> {}
impl<T: ?Sized> Clone for ReverseOrder<T> {
    fn clone(&self) -> Self { *self }
}
impl<T: ?Sized> Copy for ReverseOrder<T> {}

impl<T: ?Sized + Ord> Compare<T> for NaturalOrder<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering { lhs.cmp(rhs) }
}

impl<T: ?Sized + Ord> Compare<T> for ReverseOrder<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering { rhs.cmp(lhs) }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering { self(lhs, rhs) }
}
