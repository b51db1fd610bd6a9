use crate::goal::Goal;
use crate::lterm::LTerm;
use crate::operator::closure::closure;
use crate::operator::conj::conj;
use crate::operator::disj::disj;
use crate::operator::fresh::fresh2;
use crate::relation::eq::eq;

/// A relation that succeeds once for each occurrence of `x` in the list
/// `l`.
///
/// # Example
/// ```rust
/// use mukanren::prelude::*;
/// use mukanren::relation::membero;
/// fn main() {
///     let mut iter = run_star(|q| membero(q, lterm!([1, 2, 3])));
///     assert!(iter.next().unwrap() == 1);
///     assert!(iter.next().unwrap() == 2);
///     assert!(iter.next().unwrap() == 3);
///     assert!(iter.next().is_none());
/// }
/// ```
pub fn membero(x: LTerm, l: LTerm) -> Goal {
    closure(move || {
        let x = x.clone();
        let l = l.clone();
        fresh2(move |head, rest| {
            conj(
                eq(LTerm::cons(head.clone(), rest.clone()), l.clone()),
                disj(eq(head, x.clone()), membero(x.clone(), rest)),
            )
        })
    })
}
