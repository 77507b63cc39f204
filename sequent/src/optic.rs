//! Composable partial accessors for immutable values.
//!
//! An [`Optional`] over `(S, A)` focuses on a part `A` of a whole `S`
//! that may or may not exist.
//! Updating through an optic returns a new whole,
//! leaving the original untouched.
//! If the part does not exist, every update is a no-op.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::marker::PhantomData;

/// Partial accessor of a part `A` in a whole `S`.
pub trait Optional<S, A> {
    /// Return the part, if it exists.
    fn get<'s>(&self, s: &'s S) -> Option<&'s A>;

    /// Replace the part by `a`, returning `s` unchanged if the part does not exist.
    fn replace(&self, a: A, s: &S) -> S;

    /// Replace the part `a` by `f(a)`, returning `s` unchanged if the part does not exist.
    fn modify(&self, s: &S, f: impl FnOnce(&A) -> A) -> S
    where
        Self: Sized,
        S: Clone,
    {
        match self.get(s) {
            Some(a) => self.replace(f(a), s),
            None => s.clone(),
        }
    }

    /// Focus on a part of the part.
    fn then<B, I: Optional<A, B>>(self, inner: I) -> Compose<Self, I, A>
    where
        Self: Sized,
    {
        Compose {
            outer: self,
            inner,
            mid: PhantomData,
        }
    }
}

impl<S, A, O: Optional<S, A> + ?Sized> Optional<S, A> for Box<O> {
    fn get<'s>(&self, s: &'s S) -> Option<&'s A> {
        (**self).get(s)
    }

    fn replace(&self, a: A, s: &S) -> S {
        (**self).replace(a, s)
    }
}

/// The whole itself.
#[derive(Copy, Clone, Debug, Default)]
pub struct Identity;

impl<S> Optional<S, S> for Identity {
    fn get<'s>(&self, s: &'s S) -> Option<&'s S> {
        Some(s)
    }

    fn replace(&self, a: S, _: &S) -> S {
        a
    }
}

/// Element at a position of a vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Index(Option<usize>);

impl Index {
    pub fn new(i: usize) -> Self {
        Self(Some(i))
    }

    /// Interpret a number as index.
    ///
    /// Negative, non-integral, and non-finite numbers
    /// yield an index that never points to an element.
    ///
    /// ~~~
    /// use sequent::optic::{Index, Optional};
    /// let v = vec!['a', 'b'];
    /// assert_eq!(Index::from_f64(1.0).get(&v), Some(&'b'));
    /// assert_eq!(Index::from_f64(0.5).get(&v), None);
    /// assert_eq!(Index::from_f64(-1.0).get(&v), None);
    /// ~~~
    pub fn from_f64(x: f64) -> Self {
        let valid = x >= 0.0 && x <= usize::MAX as f64 && x as usize as f64 == x;
        Self(valid.then(|| x as usize))
    }
}

impl<A: Clone> Optional<Vec<A>, A> for Index {
    fn get<'s>(&self, xs: &'s Vec<A>) -> Option<&'s A> {
        xs.get(self.0?)
    }

    fn replace(&self, a: A, xs: &Vec<A>) -> Vec<A> {
        match self.0.filter(|i| *i < xs.len()) {
            Some(i) => {
                let mut ys = xs.clone();
                ys[i] = a;
                ys
            }
            None => xs.clone(),
        }
    }
}

/// Named component of a product type, given by a getter and a wither.
pub struct Field<S, A> {
    get: fn(&S) -> &A,
    with: fn(&S, A) -> S,
}

impl<S, A> Field<S, A> {
    pub fn new(get: fn(&S) -> &A, with: fn(&S, A) -> S) -> Self {
        Self { get, with }
    }
}

impl<S, A> Clone for Field<S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for Field<S, A> {}

impl<S, A> Optional<S, A> for Field<S, A> {
    fn get<'s>(&self, s: &'s S) -> Option<&'s A> {
        Some((self.get)(s))
    }

    fn replace(&self, a: A, s: &S) -> S {
        (self.with)(s, a)
    }
}

/// Composition of an outer optic on `(S, B)` with an inner optic on `(B, A)`.
///
/// The part exists only if both the outer and the inner part exist.
pub struct Compose<O, I, B> {
    outer: O,
    inner: I,
    mid: PhantomData<fn() -> B>,
}

impl<S: Clone, B: 'static, A, O, I> Optional<S, A> for Compose<O, I, B>
where
    O: Optional<S, B>,
    I: Optional<B, A>,
{
    fn get<'s>(&self, s: &'s S) -> Option<&'s A> {
        self.inner.get(self.outer.get(s)?)
    }

    fn replace(&self, a: A, s: &S) -> S {
        match self.outer.get(s) {
            Some(b) => self.outer.replace(self.inner.replace(a, b), s),
            None => s.clone(),
        }
    }
}
