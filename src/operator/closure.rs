use crate::goal::{Goal, Solve};
use crate::state::State;
use crate::stream::Stream;
use std::fmt;
use std::rc::Rc;

pub struct Closure {
    f: Box<dyn Fn() -> Goal>,
}

impl Closure {
    pub fn new(f: Box<dyn Fn() -> Goal>) -> Goal {
        Goal::Dynamic(Rc::new(Closure { f }))
    }
}

impl Solve for Closure {
    fn solve(&self, state: State) -> Stream {
        (self.f)().solve(state)
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Goals that are put into closures are typically recursive;
        // evaluating the closure to print it could recurse forever.
        write!(f, "Closure(...)")
    }
}

/// Deferred goal construction.
///
/// A recursive relation written as a plain Rust function would recurse while
/// *building* its goal and never terminate. Wrapping the body in
/// `closure(|| ...)` stores the constructor instead; one level of the goal
/// tree is built each time the scheduler reaches it, interleaved with the
/// rest of the search.
pub fn closure<F>(f: F) -> Goal
where
    F: Fn() -> Goal + 'static,
{
    Closure::new(Box::new(f))
}
