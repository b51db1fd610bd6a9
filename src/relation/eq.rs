use crate::goal::{Goal, Solve};
use crate::lterm::LTerm;
use crate::state::State;
use crate::stream::Stream;
use std::rc::Rc;

#[derive(Debug)]
pub struct Eq {
    u: LTerm,
    v: LTerm,
}

impl Eq {
    pub fn new(u: LTerm, v: LTerm) -> Goal {
        Goal::Dynamic(Rc::new(Eq { u, v }))
    }
}

impl Solve for Eq {
    fn solve(&self, state: State) -> Stream {
        match state.unify(&self.u, &self.v) {
            Ok(state) => Stream::unit(Box::new(state)),
            Err(()) => Stream::empty(),
        }
    }
}

/// Equality relation.
///
/// The goal succeeds once if the two terms unify in the current state and
/// fails otherwise. Unification failure is ordinary control flow: the goal
/// yields an empty stream and the search continues elsewhere.
///
/// # Example
/// ```rust
/// use mukanren::prelude::*;
/// fn main() {
///     let mut iter = run_star(|q| eq(q, 5));
///     assert!(iter.next().unwrap() == 5);
///     assert!(iter.next().is_none());
/// }
/// ```
pub fn eq<U, V>(u: U, v: V) -> Goal
where
    U: Into<LTerm>,
    V: Into<LTerm>,
{
    Eq::new(u.into(), v.into())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_eq_atom() {
        let mut iter = run_star(|q| eq(q, 5));
        assert!(iter.next().unwrap() == 5);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_eq_list() {
        let mut iter = run_star(|q| eq(q, lterm!([1, 2, 3])));
        assert_eq!(iter.next().unwrap(), lterm!([1, 2, 3]));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_eq_inside_list() {
        let mut iter = run_star(|q| eq(lterm!([1, (q.clone()), 3]), lterm!([1, 2, 3])));
        assert!(iter.next().unwrap() == 2);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_eq_transitive_contradiction() {
        // x == q, x == 1, q == 2 cannot all hold.
        let mut iter = run_star(|q| {
            call_fresh(move |x| {
                Conj::from_vec(vec![eq(x.clone(), q.clone()), eq(x, 1), eq(q.clone(), 2)])
            })
        });
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_eq_cyclic_is_accepted() {
        // Without an occurs check the unification itself succeeds; the
        // answer is simply never asked for.
        let state = State::new()
            .unify(&LTerm::var(0), &lterm!([1, (LTerm::var(0))]))
            .unwrap();
        assert_eq!(state.smap_ref().len(), 1);
    }
}
