use super::substitution::SMap;
use crate::lterm::{LTerm, LTermInner};

/// Recursive unification of two terms
///
/// Both operands are walked first; equal terms unify without extending the
/// map, a variable on either side is bound to the other side (a variable on
/// the left takes precedence), and otherwise the shapes are dispatched.
/// Extension terms carry their own unifiers; any shape combination without a
/// rule fails. On success any new bindings have been added to `smap`.
///
/// No occurs check is performed: a self-referential binding is accepted here
/// and diverges later if walked. The checking variant is available through
/// [`State::unify_with_occurs_check`](crate::state::State::unify_with_occurs_check).
pub fn unify_rec(smap: &mut SMap, u: &LTerm, v: &LTerm) -> bool {
    unify_impl(smap, u, v, false)
}

pub(crate) fn unify_occurs_rec(smap: &mut SMap, u: &LTerm, v: &LTerm) -> bool {
    unify_impl(smap, u, v, true)
}

fn unify_impl(smap: &mut SMap, u: &LTerm, v: &LTerm, occurs: bool) -> bool {
    let uwalk = smap.walk(u).clone();
    let vwalk = smap.walk(v).clone();
    match (uwalk.as_ref(), vwalk.as_ref()) {
        (LTermInner::Var(uvar), LTermInner::Var(vvar)) if uvar == vvar => {
            // Both sides walk to the same variable; already unified.
            true
        }
        (LTermInner::Var(uvar), _) => {
            if occurs && smap.occurs_check(*uvar, &vwalk) {
                false
            } else {
                smap.extend(*uvar, vwalk.clone());
                true
            }
        }
        (_, LTermInner::Var(vvar)) => {
            if occurs && smap.occurs_check(*vvar, &uwalk) {
                false
            } else {
                smap.extend(*vvar, uwalk.clone());
                true
            }
        }
        (LTermInner::Val(uval), LTermInner::Val(vval)) => uval == vval,
        (LTermInner::Empty, LTermInner::Empty) => true,
        (LTermInner::Cons(uhead, utail), LTermInner::Cons(vhead, vtail)) => {
            // Heads first, then tails. A tail that walks to a variable binds
            // against the entire remainder of the other side, which is how
            // improper lists pick up unknown suffixes.
            unify_impl(smap, uhead, vhead, occurs) && unify_impl(smap, utail, vtail, occurs)
        }
        // A non-empty list never unifies with an empty one.
        (LTermInner::Cons(_, _), LTermInner::Empty) => false,
        (LTermInner::Empty, LTermInner::Cons(_, _)) => false,
        (LTermInner::Reified(uk), LTermInner::Reified(vk)) => uk == vk,
        (LTermInner::Ext(ext), _) => ext.unify(&vwalk, smap),
        (_, LTermInner::Ext(ext)) => ext.unify(&uwalk, smap),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lterm;
    use crate::lterm::LVar;

    #[test]
    fn test_unify_same_var() {
        // Two variables that walk to the same variable unify with no new
        // bindings.
        let mut smap = SMap::new();
        smap.extend(LVar::new(1), LTerm::var(0));
        smap.extend(LVar::new(2), LTerm::var(0));

        let mut s = smap.clone();
        assert!(unify_rec(&mut s, &LTerm::var(1), &LTerm::var(2)));
        assert_eq!(s.len(), smap.len());
    }

    #[test]
    fn test_unify_var_var() {
        // Different variables unify by binding one to the other; the left
        // side is the key of the new binding.
        let mut smap = SMap::new();
        assert!(unify_rec(&mut smap, &LTerm::var(0), &LTerm::var(1)));
        assert_eq!(smap.walk(&LTerm::var(0)).get_var(), Some(LVar::new(1)));
    }

    #[test]
    fn test_unify_var_val() {
        let mut smap = SMap::new();
        assert!(unify_rec(&mut smap, &LTerm::var(0), &lterm!(1)));
        assert!(*smap.walk(&LTerm::var(0)) == 1);

        // Value on the left, variable on the right.
        let mut smap = SMap::new();
        assert!(unify_rec(&mut smap, &lterm!(1), &LTerm::var(0)));
        assert!(*smap.walk(&LTerm::var(0)) == 1);
    }

    #[test]
    fn test_unify_val_val() {
        let mut smap = SMap::new();
        assert!(unify_rec(&mut smap, &lterm!(1), &lterm!(1)));
        assert!(!unify_rec(&mut smap, &lterm!(1), &lterm!(2)));
        assert!(!unify_rec(&mut smap, &lterm!(1), &lterm!(true)));
        assert!(smap.is_empty());
    }

    #[test]
    fn test_unify_lists() {
        let mut smap = SMap::new();
        assert!(unify_rec(
            &mut smap,
            &lterm!([1, (LTerm::var(0)), 3]),
            &lterm!([1, 2, (LTerm::var(1))])
        ));
        assert!(*smap.walk(&LTerm::var(0)) == 2);
        assert!(*smap.walk(&LTerm::var(1)) == 3);
    }

    #[test]
    fn test_unify_list_lengths() {
        // Same values, different lengths.
        let mut smap = SMap::new();
        assert!(!unify_rec(&mut smap, &lterm!([1, 1]), &lterm!([1])));
    }

    #[test]
    fn test_unify_nonempty_vs_empty() {
        // Explicitly a failure, in both orientations.
        let mut smap = SMap::new();
        assert!(!unify_rec(&mut smap, &lterm!([1]), &lterm!([])));
        assert!(!unify_rec(&mut smap, &lterm!([]), &lterm!([1])));
        assert!(unify_rec(&mut smap, &lterm!([]), &lterm!([])));
    }

    #[test]
    fn test_unify_list_vs_atom() {
        let mut smap = SMap::new();
        assert!(!unify_rec(&mut smap, &lterm!([1]), &lterm!(1)));
        assert!(!unify_rec(&mut smap, &lterm!([]), &lterm!(0)));
    }

    #[test]
    fn test_unify_improper_tail() {
        // The tail variable picks up the unknown remainder of the other
        // side.
        let mut smap = SMap::new();
        assert!(unify_rec(
            &mut smap,
            &lterm!([1 | (LTerm::var(0))]),
            &lterm!([1, 2, 3])
        ));
        assert_eq!(smap.walk_star(&LTerm::var(0)), lterm!([2, 3]));

        // An empty remainder is a valid tail.
        let mut smap = SMap::new();
        assert!(unify_rec(&mut smap, &lterm!([1 | (LTerm::var(0))]), &lterm!([1])));
        assert_eq!(smap.walk_star(&LTerm::var(0)), lterm!([]));
    }

    #[test]
    fn test_unify_symmetry() {
        // unify(u, v) and unify(v, u) produce the same resolved bindings.
        let u = lterm!([(LTerm::var(0)), 2]);
        let v = lterm!([1, (LTerm::var(1))]);

        let mut s1 = SMap::new();
        let mut s2 = SMap::new();
        assert!(unify_rec(&mut s1, &u, &v));
        assert!(unify_rec(&mut s2, &v, &u));
        assert_eq!(s1.walk_star(&u), s2.walk_star(&u));
        assert_eq!(s1.walk_star(&v), s2.walk_star(&v));
    }

    #[test]
    fn test_unify_monotonic() {
        // A successful unification preserves every existing binding.
        let mut smap = SMap::new();
        assert!(unify_rec(&mut smap, &LTerm::var(0), &lterm!(1)));
        let before = smap.walk(&LTerm::var(0)).clone();

        assert!(unify_rec(
            &mut smap,
            &lterm!([(LTerm::var(0)), (LTerm::var(1))]),
            &lterm!([1, 2])
        ));
        assert_eq!(*smap.walk(&LTerm::var(0)), before);
        assert!(*smap.walk(&LTerm::var(1)) == 2);
    }

    #[test]
    fn test_unify_no_occurs_check() {
        // The default unifier accepts a cyclic binding; it is the walk that
        // would diverge, not the unification.
        let mut smap = SMap::new();
        assert!(unify_rec(
            &mut smap,
            &LTerm::var(0),
            &lterm!([1, (LTerm::var(0))])
        ));
        assert_eq!(smap.len(), 1);
    }

    #[test]
    fn test_unify_occurs_rec() {
        let mut smap = SMap::new();
        assert!(!unify_occurs_rec(
            &mut smap,
            &LTerm::var(0),
            &lterm!([1, (LTerm::var(0))])
        ));

        // Non-cyclic unification is unaffected by the check.
        let mut smap = SMap::new();
        assert!(unify_occurs_rec(&mut smap, &LTerm::var(0), &lterm!([1, 2])));
    }
}
