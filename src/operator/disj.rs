use crate::goal::{Goal, Solve};
use crate::operator::conj::Conj;
use crate::operator::delay::delay;
use crate::state::State;
use crate::stream::{LazyStream, Stream};
use std::rc::Rc;

#[derive(Debug)]
pub struct Disj {
    goal_1: Goal,
    goal_2: Goal,
}

impl Disj {
    pub fn new(goal_1: Goal, goal_2: Goal) -> Goal {
        Goal::Dynamic(Rc::new(Disj { goal_1, goal_2 }))
    }

    /// N-ary disjunction. As with [`Conj::from_vec`], every operand is
    /// wrapped in `delay` before the pairwise fold.
    pub fn from_vec(v: Vec<Goal>) -> Goal {
        let mut p = Goal::fail();
        for g in v.into_iter().rev() {
            p = Disj::new(delay(g), p);
        }
        p
    }

    pub fn from_array(goals: &[Goal]) -> Goal {
        Disj::from_vec(goals.to_vec())
    }

    // The parameter is a list of conjunctions, and the resulting goal is a
    // disjunction of conjunctions.
    pub fn from_conjunctions(conjunctions: &[&[Goal]]) -> Goal {
        Disj::from_vec(conjunctions.iter().map(|conj| Conj::from_array(conj)).collect())
    }
}

impl Solve for Disj {
    fn solve(&self, state: State) -> Stream {
        Stream::lazy_mplus(
            LazyStream::pause(Box::new(state.clone()), self.goal_1.clone()),
            LazyStream::pause(Box::new(state), self.goal_2.clone()),
        )
    }
}

/// Logical disjunction: a state satisfies `disj(g1, g2)` when it satisfies
/// either goal. Answers from the two branches are interleaved fairly.
pub fn disj(goal_1: Goal, goal_2: Goal) -> Goal {
    Disj::new(goal_1, goal_2)
}
