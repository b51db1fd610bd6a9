use super::substitution::SMap;
use super::State;
use crate::lterm::LTerm;

/// Canonical stand-in for the `k`:th unbound variable of an answer,
/// displayed as `_.k`.
pub fn reify_name(k: usize) -> LTerm {
    LTerm::reified(k)
}

/// Project an answer state onto the query variable.
///
/// The query variable is by convention the first variable allocated by the
/// outermost fresh, `var(0)`. Its value is deep-walked in the answer's
/// substitution, and every variable left unbound in the result is renamed to
/// `_.0`, `_.1`, … in left-to-right discovery order.
pub fn reify_first(state: &State) -> LTerm {
    let v = state.smap_ref().walk_star(&LTerm::var(0));
    let names = SMap::new().reify(&v);
    names.walk_star(&v)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lterm;
    use crate::lterm::LVar;

    #[test]
    fn test_reify_name() {
        assert_eq!(format!("{}", reify_name(3)), "_.3");
    }

    #[test]
    fn test_reify_first_ground() {
        let state = State::new().unify(&LTerm::var(0), &lterm!([1, 2])).unwrap();
        assert_eq!(reify_first(&state), lterm!([1, 2]));
    }

    #[test]
    fn test_reify_first_names_in_order() {
        // q = [x, y, x] with x, y unbound.
        let state = State::new()
            .unify(
                &LTerm::var(0),
                &lterm!([(LTerm::var(1)), (LTerm::var(2)), (LTerm::var(1))]),
            )
            .unwrap();
        assert_eq!(
            reify_first(&state),
            lterm!([(reify_name(0)), (reify_name(1)), (reify_name(0))])
        );
    }

    #[test]
    fn test_reify_first_deterministic() {
        // States whose substitutions differ only in variables unreachable
        // from the query variable reify identically.
        let mut s1 = SMap::new();
        s1.extend(LVar::new(0), lterm!([1, (LTerm::var(4))]));
        s1.extend(LVar::new(7), lterm!("noise"));

        let mut s2 = SMap::new();
        s2.extend(LVar::new(0), lterm!([1, (LTerm::var(9))]));
        s2.extend(LVar::new(3), lterm!([true]));

        let r1 = reify_first(&State::new().with_smap(s1));
        let r2 = reify_first(&State::new().with_smap(s2));
        assert_eq!(r1, r2);
        assert_eq!(r1, lterm!([1, (reify_name(0))]));
    }
}
