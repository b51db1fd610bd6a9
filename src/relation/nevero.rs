use crate::goal::Goal;
use crate::operator::closure::closure;
use crate::operator::disj::disj;
use crate::relation::fail::fail;

/// A relation that fails an unbounded number of times.
///
/// The goal suspends and retries forever without ever producing a state.
/// Alone it diverges; merged with a productive goal the interleaving
/// schedule still realizes the productive answers.
pub fn nevero() -> Goal {
    closure(|| disj(fail(), nevero()))
}

#[cfg(test)]
mod test {
    use super::nevero;
    use crate::prelude::*;

    #[test]
    fn test_nevero_does_not_starve_sibling() {
        let mut iter = run(1, |q| disj(nevero(), eq(q, 1)));
        assert!(iter.next().unwrap() == 1);
    }

    #[test]
    fn test_nevero_in_second_position() {
        let mut iter = run(1, |q| disj(eq(q, 1), nevero()));
        assert!(iter.next().unwrap() == 1);
    }
}
