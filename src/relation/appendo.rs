use crate::goal::Goal;
use crate::lterm::LTerm;
use crate::operator::closure::closure;
use crate::operator::conj::conj;
use crate::operator::disj::disj;
use crate::operator::fresh::fresh3;
use crate::relation::eq::eq;

/// A relation where `l`, `s` and `ls` are lists such that `ls` is `s`
/// appended to `l`.
///
/// Any of the three positions may be unknown: with only `ls` ground the
/// relation enumerates every split of `ls` into a prefix and suffix.
///
/// # Example
/// ```rust
/// use mukanren::prelude::*;
/// use mukanren::relation::appendo;
/// fn main() {
///     let mut iter = run_star(|q| appendo(lterm!([1, 2, 3]), lterm!([4, 5]), q));
///     assert_eq!(iter.next().unwrap(), lterm!([1, 2, 3, 4, 5]));
/// }
/// ```
pub fn appendo(l: LTerm, s: LTerm, ls: LTerm) -> Goal {
    closure(move || {
        let l = l.clone();
        let s = s.clone();
        let ls = ls.clone();
        disj(
            conj(eq(l.clone(), LTerm::empty_list()), eq(s.clone(), ls.clone())),
            fresh3(move |head, rest, recur| {
                conj(
                    eq(LTerm::cons(head.clone(), rest.clone()), l.clone()),
                    conj(
                        eq(LTerm::cons(head, recur.clone()), ls.clone()),
                        appendo(rest, s.clone(), recur),
                    ),
                )
            }),
        )
    })
}
