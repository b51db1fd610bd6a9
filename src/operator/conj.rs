use crate::goal::{Goal, Solve};
use crate::operator::delay::delay;
use crate::state::State;
use crate::stream::{LazyStream, Stream};
use std::rc::Rc;

#[derive(Debug)]
pub struct Conj {
    goal_1: Goal,
    goal_2: Goal,
}

impl Conj {
    pub fn new(goal_1: Goal, goal_2: Goal) -> Goal {
        if goal_1.is_succeed() && goal_2.is_succeed() {
            return Goal::Succeed;
        }
        if goal_1.is_fail() || goal_2.is_fail() {
            return Goal::Fail;
        }

        Goal::Dynamic(Rc::new(Conj { goal_1, goal_2 }))
    }

    /// N-ary conjunction. Every operand is wrapped in `delay` before the
    /// pairwise fold, so any clause may be recursive without special care
    /// at the call site.
    pub fn from_vec(v: Vec<Goal>) -> Goal {
        let mut p = Goal::succeed();
        for g in v.into_iter().rev() {
            p = Conj::new(delay(g), p);
        }
        p
    }

    pub fn from_array(goals: &[Goal]) -> Goal {
        Conj::from_vec(goals.to_vec())
    }

    // The parameter is a list of conjunctions, and the resulting goal is a
    // conjunction of all the goals.
    pub fn from_conjunctions(conjunctions: &[&[Goal]]) -> Goal {
        Conj::from_vec(conjunctions.iter().map(|conj| Conj::from_array(conj)).collect())
    }
}

impl Solve for Conj {
    fn solve(&self, state: State) -> Stream {
        Stream::lazy_bind(
            LazyStream::pause(Box::new(state), self.goal_1.clone()),
            self.goal_2.clone(),
        )
    }
}

/// Logical conjunction: a state satisfies `conj(g1, g2)` when it satisfies
/// `g1` and the resulting states satisfy `g2`.
pub fn conj(goal_1: Goal, goal_2: Goal) -> Goal {
    Conj::new(goal_1, goal_2)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_conj_both() {
        let mut iter = run_star(|q| conj(eq(q.clone(), 1), eq(q, 1)));
        assert!(iter.next().unwrap() == 1);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_conj_contradiction() {
        let mut iter = run_star(|q| conj(eq(q.clone(), 1), eq(q, 2)));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_conj_shortcuts() {
        assert!(Conj::new(Goal::succeed(), Goal::succeed()).is_succeed());
        assert!(Conj::new(Goal::fail(), Goal::succeed()).is_fail());
        assert!(Conj::new(Goal::succeed(), Goal::fail()).is_fail());
    }

    #[test]
    fn test_conj_from_vec() {
        let mut iter = run_star(|q| {
            Conj::from_vec(vec![
                call_fresh({
                    let q = q.clone();
                    move |x| eq(x, q.clone())
                }),
                eq(q.clone(), 5),
            ])
        });
        assert!(iter.next().unwrap() == 5);
        assert!(iter.next().is_none());

        assert_eq!(run_star(|q| Conj::from_vec(vec![eq(q, 1)])).count(), 1);
        // The empty conjunction succeeds.
        assert_eq!(run_star(|_q| Conj::from_vec(vec![])).count(), 1);
    }
}
