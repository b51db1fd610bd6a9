use crate::goal::{Goal, Solve};
use crate::state::State;
use crate::stream::Stream;
use std::rc::Rc;

#[derive(Debug)]
pub struct Delay {
    goal: Goal,
}

impl Delay {
    pub fn new(goal: Goal) -> Goal {
        Goal::Dynamic(Rc::new(Delay { goal }))
    }
}

impl Solve for Delay {
    fn solve(&self, state: State) -> Stream {
        Stream::pause(Box::new(state), self.goal.clone())
    }
}

/// Explicit suspension of a goal.
///
/// `delay(g)` behaves exactly like `g`, but applying it yields an immature
/// stream node immediately: the work of solving `g` is deferred until the
/// scheduler forces that node. The n-ary operator folds wrap their operands
/// in this to keep clauses from hogging the schedule. Note that `delay`
/// suspends a goal that already exists; deferring the *construction* of a
/// recursive goal is [`closure`](crate::operator::closure::closure)'s job.
pub fn delay(goal: Goal) -> Goal {
    Delay::new(goal)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_delay_transparent() {
        let mut iter = run_star(|q| delay(eq(q, 1)));
        assert!(iter.next().unwrap() == 1);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_delay_suspends() {
        // Applying a delayed goal yields a suspension, not an answer.
        let stream = delay(Goal::succeed()).solve(State::new());
        assert!(!stream.is_mature());
        assert_eq!(stream.count(), 1);
    }
}
