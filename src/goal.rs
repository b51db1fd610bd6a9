use crate::state::State;
use crate::stream::Stream;
use std::fmt;
use std::rc::Rc;

/// A solvable goal.
///
/// Applying a goal to a state yields a stream of successor states, each of
/// which satisfies the goal. Goals are pure values: they can be stored,
/// composed and applied any number of times. The trivial goals `Succeed`
/// and `Fail` are first-class variants so that the stream operations can
/// short-circuit on them without solving anything.
pub trait Solve: fmt::Debug {
    /// Generate a stream of solutions to the goal from the given state.
    fn solve(&self, state: State) -> Stream;
}

#[derive(Clone, Debug)]
pub enum Goal {
    Succeed,
    Fail,
    Dynamic(Rc<dyn Solve>),
}

impl Goal {
    pub fn succeed() -> Goal {
        Goal::Succeed
    }

    pub fn fail() -> Goal {
        Goal::Fail
    }

    pub fn dynamic(solve: Rc<dyn Solve>) -> Goal {
        Goal::Dynamic(solve)
    }

    pub fn is_succeed(&self) -> bool {
        match self {
            Goal::Succeed => true,
            _ => false,
        }
    }

    pub fn is_fail(&self) -> bool {
        match self {
            Goal::Fail => true,
            _ => false,
        }
    }

    pub fn solve(&self, state: State) -> Stream {
        match self {
            Goal::Succeed => Stream::unit(Box::new(state)),
            Goal::Fail => Stream::empty(),
            Goal::Dynamic(dynamic) => dynamic.solve(state),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_goal_succeed() {
        let g = Goal::succeed();
        assert!(g.is_succeed());
        assert!(!g.is_fail());
        assert_eq!(g.solve(State::new()).count(), 1);
    }

    #[test]
    fn test_goal_fail() {
        let g = Goal::fail();
        assert!(g.is_fail());
        assert!(!g.is_succeed());
        assert_eq!(g.solve(State::new()).count(), 0);
    }

    #[derive(Debug)]
    struct TestGoal {}

    impl Solve for TestGoal {
        fn solve(&self, _state: State) -> Stream {
            Stream::empty()
        }
    }

    #[test]
    fn test_goal_dynamic() {
        let g = Goal::dynamic(Rc::new(TestGoal {}));
        assert!(!g.is_succeed());
        assert!(!g.is_fail());
    }

    // Identity laws: fail is the unit of disjunction and succeed the unit
    // of conjunction.

    fn answers(goal: fn(LTerm) -> Goal) -> Vec<LTerm> {
        run_star(move |q| goal(q)).collect()
    }

    #[test]
    fn test_goal_disj_identity() {
        let plain = answers(|q| eq(q, 1));
        let right = answers(|q| disj(eq(q, 1), fail()));
        let left = answers(|q| disj(fail(), eq(q, 1)));
        assert_eq!(plain, right);
        assert_eq!(plain, left);
    }

    #[test]
    fn test_goal_conj_identity() {
        let plain = answers(|q| eq(q, 1));
        let right = answers(|q| conj(eq(q, 1), succeed()));
        let left = answers(|q| conj(succeed(), eq(q, 1)));
        assert_eq!(plain, right);
        assert_eq!(plain, left);
    }
}
