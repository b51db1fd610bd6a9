use crate::goal::Goal;
use crate::lterm::LTerm;
use crate::relation::eq::eq;

/// A relation such that `out` is the list with head `first` and tail
/// `rest`.
///
/// # Example
/// ```rust
/// use mukanren::prelude::*;
/// use mukanren::relation::conso;
/// fn main() {
///     let mut iter = run_star(|q| conso(lterm!(1), lterm!([2, 3]), q));
///     assert_eq!(iter.next().unwrap(), lterm!([1, 2, 3]));
/// }
/// ```
pub fn conso<F, R, O>(first: F, rest: R, out: O) -> Goal
where
    F: Into<LTerm>,
    R: Into<LTerm>,
    O: Into<LTerm>,
{
    eq(LTerm::cons(first.into(), rest.into()), out)
}
