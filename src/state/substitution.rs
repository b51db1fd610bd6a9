use crate::lterm::{LTerm, LTermInner, LVar};
use im_rc::HashMap;
use std::ops::Deref;

/// Substitution map
///
/// Substitution maps track the binding of variables to terms. The map is
/// triangular: a value may itself contain variables bound elsewhere in the
/// same map, and resolution chases those chains with `walk`. The backing
/// store is a persistent hash map, so cloning a substitution is cheap and
/// extended copies share structure with their originals.
#[derive(Clone, Debug, Default)]
pub struct SMap(HashMap<LVar, LTerm>);

impl SMap {
    /// Construct an empty substitution map with no substitutions
    pub fn new() -> SMap {
        SMap(HashMap::new())
    }

    /// Extend substitution map with a new substitution
    ///
    /// No conflict or cycle checking happens here; the unifier is
    /// responsible for consistency before it extends.
    pub fn extend(&mut self, k: LVar, v: LTerm) {
        self.0.insert(k, v);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Walk substitution map
    ///
    /// Follows variable-binding chains starting at the root of `k` until a
    /// non-variable or an unbound variable is reached. Atoms and lists walk
    /// to themselves; element-wise resolution is `walk_star`'s job. Walking
    /// diverges on a cyclic substitution; the map does not detect cycles.
    pub fn walk<'a>(&'a self, mut k: &'a LTerm) -> &'a LTerm {
        loop {
            match k.as_ref() {
                LTermInner::Var(var) => match self.0.get(var) {
                    Some(next) => k = next,
                    None => return k,
                },
                _ => return k,
            }
        }
    }

    /// Deeper walk of substitution map
    ///
    /// Walks the root like `walk()`, then recurses into list cells and
    /// extension terms so that every leaf of the returned term is walked.
    /// An improper tail bound to a list collapses into the enclosing list.
    pub fn walk_star(&self, v: &LTerm) -> LTerm {
        let v = self.walk(v);
        match v.as_ref() {
            LTermInner::Cons(head, tail) => LTerm::cons(self.walk_star(head), self.walk_star(tail)),
            LTermInner::Ext(ext) => ext.walk_star(self),
            _ => v.clone(),
        }
    }

    /// Check that the variable `x` does not occur in the term `v`.
    pub fn occurs_check(&self, x: LVar, v: &LTerm) -> bool {
        match self.walk(v).as_ref() {
            LTermInner::Var(var) => *var == x,
            LTermInner::Cons(head, tail) => {
                self.occurs_check(x, head) || self.occurs_check(x, tail)
            }
            LTermInner::Ext(ext) => ext.occurs(x, self),
            _ => false,
        }
    }

    /// Reify substitution map
    ///
    /// Extends the map so that every variable reachable from `v` has a
    /// walkable value: each variable that is still unbound is given the
    /// canonical stand-in `_.k`, numbered in left-to-right discovery order
    /// starting from the current size of the map. Typically applied to an
    /// empty map to produce the naming substitution for an answer.
    pub fn reify(&self, v: &LTerm) -> SMap {
        let walkv = self.walk(v);
        match walkv.as_ref() {
            LTermInner::Var(var) => {
                let var = *var;
                let mut c = self.clone();
                let name = LTerm::reified(c.len());
                c.extend(var, name);
                c
            }
            LTermInner::Cons(head, tail) => self.reify(head).reify(tail),
            LTermInner::Ext(ext) => ext.reify(self.clone()),
            _ => self.clone(),
        }
    }
}

impl Deref for SMap {
    type Target = HashMap<LVar, LTerm>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
