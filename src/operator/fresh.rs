use crate::goal::{Goal, Solve};
use crate::lterm::LTerm;
use crate::state::State;
use crate::stream::Stream;
use std::fmt;
use std::rc::Rc;

pub struct Fresh {
    f: Box<dyn Fn(LTerm) -> Goal>,
}

impl Fresh {
    pub fn new(f: Box<dyn Fn(LTerm) -> Goal>) -> Goal {
        Goal::Dynamic(Rc::new(Fresh { f }))
    }
}

impl Solve for Fresh {
    fn solve(&self, state: State) -> Stream {
        let (var, state) = state.fresh_var();
        let goal = (self.f)(var);
        Stream::pause(Box::new(state), goal)
    }
}

impl fmt::Debug for Fresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fresh(...)")
    }
}

/// Introduce a fresh logic variable.
///
/// The variable's id is drawn from the state's counter at solve time, so
/// identical goals applied to different states bind distinct variables.
///
/// # Example
/// ```rust
/// use mukanren::prelude::*;
/// fn main() {
///     let mut iter = run_star(|q| {
///         call_fresh(move |x| conj(eq(x.clone(), q.clone()), eq(x, 1)))
///     });
///     assert!(iter.next().unwrap() == 1);
///     assert!(iter.next().is_none());
/// }
/// ```
pub fn call_fresh<F>(f: F) -> Goal
where
    F: Fn(LTerm) -> Goal + 'static,
{
    Fresh::new(Box::new(f))
}

/// Introduce two fresh variables at once.
pub fn fresh2<F>(f: F) -> Goal
where
    F: Fn(LTerm, LTerm) -> Goal + 'static,
{
    let f = Rc::new(f);
    call_fresh(move |x| {
        let f = Rc::clone(&f);
        call_fresh(move |y| f(x.clone(), y))
    })
}

/// Introduce three fresh variables at once.
pub fn fresh3<F>(f: F) -> Goal
where
    F: Fn(LTerm, LTerm, LTerm) -> Goal + 'static,
{
    let f = Rc::new(f);
    call_fresh(move |x| {
        let f = Rc::clone(&f);
        call_fresh(move |y| {
            let f = Rc::clone(&f);
            let x = x.clone();
            call_fresh(move |z| f(x.clone(), y.clone(), z))
        })
    })
}
