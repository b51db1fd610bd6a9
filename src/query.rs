use crate::goal::Goal;
use crate::lterm::LTerm;
use crate::operator::fresh::call_fresh;
use crate::state::{reify_first, State};
use crate::stream::Stream;
use std::iter::FusedIterator;

/// A runnable query.
///
/// Wraps a goal whose first fresh variable is the query variable. Running
/// the query solves the goal against the empty state and projects each
/// answer state onto the query variable.
#[derive(Clone, Debug)]
pub struct Query {
    goal: Goal,
}

impl Query {
    pub fn new(goal: Goal) -> Query {
        Query { goal }
    }

    /// Lazily enumerate every answer. The iterator realizes one answer per
    /// `next` and may be infinite; take a bounded prefix to limit work.
    pub fn run(&self) -> ResultIterator {
        ResultIterator {
            stream: self.goal.solve(State::new()),
        }
    }
}

pub struct ResultIterator {
    stream: Stream,
}

impl Iterator for ResultIterator {
    type Item = LTerm;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next().map(|state| reify_first(&state))
    }
}

// The stream keeps returning None once exhausted.
impl FusedIterator for ResultIterator {}

/// Build a query from a closure over the query variable.
pub fn query<F>(f: F) -> Query
where
    F: Fn(LTerm) -> Goal + 'static,
{
    Query::new(call_fresh(f))
}

/// Enumerate all answers of a goal, reified onto the query variable.
///
/// # Example
/// ```rust
/// use mukanren::prelude::*;
/// fn main() {
///     let answers: Vec<_> = run_star(|q| disj(eq(q.clone(), 1), eq(q, 2))).collect();
///     assert_eq!(answers, vec![lterm!(1), lterm!(2)]);
/// }
/// ```
pub fn run_star<F>(f: F) -> ResultIterator
where
    F: Fn(LTerm) -> Goal + 'static,
{
    query(f).run()
}

/// Enumerate at most `n` answers of a goal; the way to consume relations
/// with infinite answer sets.
pub fn run<F>(n: usize, f: F) -> std::iter::Take<ResultIterator>
where
    F: Fn(LTerm) -> Goal + 'static,
{
    run_star(f).take(n)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_query_rerun() {
        // A query is a value and can be run any number of times.
        let q = query(|q| eq(q, 5));
        assert_eq!(q.run().count(), 1);
        let mut iter = q.run();
        assert!(iter.next().unwrap() == 5);
    }

    #[test]
    fn test_run_bounded() {
        let answers: Vec<_> = run(2, |q| {
            Disj::from_vec(vec![eq(q.clone(), 1), eq(q.clone(), 2), eq(q, 3)])
        })
        .collect();
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_run_star_exhausts() {
        let mut iter = run_star(|q| eq(q, 5));
        assert!(iter.next().unwrap() == 5);
        assert!(iter.next().is_none());
        // Fused: stays exhausted.
        assert!(iter.next().is_none());
    }
}
