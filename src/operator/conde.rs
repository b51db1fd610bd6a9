use crate::goal::Goal;
use crate::operator::disj::Disj;

/// Disjunction of conjunctions.
///
/// Each clause is a sequence of goals folded into a conjunction, and the
/// clauses are folded into a fair disjunction. This is the workhorse form
/// for writing relations with several alternative bodies. Clause answers
/// are interleaved: every answer appears eventually, but no order across
/// clauses is promised.
///
/// # Example
/// ```rust
/// use mukanren::prelude::*;
/// fn main() {
///     let answers: Vec<_> = run_star(|q| {
///         conde(&[
///             &[eq(q.clone(), 1)],
///             &[eq(q.clone(), 2), fail()],
///             &[eq(q, 3)],
///         ])
///     })
///     .collect();
///     assert_eq!(answers.len(), 2);
///     assert!(answers.contains(&lterm!(1)));
///     assert!(answers.contains(&lterm!(3)));
/// }
/// ```
pub fn conde(clauses: &[&[Goal]]) -> Goal {
    Disj::from_conjunctions(clauses)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_conde_clauses() {
        let answers: Vec<_> = run_star(|q| {
            conde(&[
                &[eq(q.clone(), 1), eq(q.clone(), 1)],
                &[eq(q.clone(), 2)],
                &[eq(q, 3), fail()],
            ])
        })
        .collect();
        assert_eq!(answers.len(), 2);
        assert!(answers.contains(&lterm!(1)));
        assert!(answers.contains(&lterm!(2)));
    }

    #[test]
    fn test_conde_empty() {
        assert_eq!(run_star(|_q| conde(&[])).count(), 0);
    }
}
