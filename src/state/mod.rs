use crate::lterm::LTerm;

mod substitution;
pub use substitution::SMap;

mod unification;
pub use unification::unify_rec;

mod reification;
pub use reification::{reify_first, reify_name};

/// Result of an operation that can fail by unification failure.
///
/// Failure is a value, not an exception: the absence of a substitution is
/// `Err(())`, and `?` propagates it monotonically through every downstream
/// extension of the state.
pub type SResult = Result<State, ()>;

/// Logic program state
///
/// A logic program consists of goals, which when applied to states produce
/// streams of states; each state in the stream is a solution to (part of)
/// the program. A state carries the current substitution and the id of the
/// next variable the fresh-variable operator would allocate. States are
/// immutable values: goals derive new states from old, and every clone can
/// be extended independently.
#[derive(Clone, Debug, Default)]
pub struct State {
    smap: SMap,
    next_id: usize,
}

impl State {
    /// The empty state: no bindings, first fresh variable will be `var(0)`.
    pub fn new() -> State {
        State {
            smap: SMap::new(),
            next_id: 0,
        }
    }

    /// Return a reference to the substitution map of the state
    pub fn smap_ref(&self) -> &SMap {
        &self.smap
    }

    /// Returns the state with a replaced substitution map
    pub fn with_smap(self, smap: SMap) -> State {
        State { smap, ..self }
    }

    pub fn next_id(&self) -> usize {
        self.next_id
    }

    /// Allocate the next fresh variable, returning it together with the
    /// state whose counter has moved past it.
    pub fn fresh_var(self) -> (LTerm, State) {
        let var = LTerm::var(self.next_id);
        let state = State {
            next_id: self.next_id + 1,
            ..self
        };
        (var, state)
    }

    /// Unify two terms in this state, returning the extended state or
    /// failure. No occurs check is made, so a cyclic binding is accepted
    /// and diverges only if walked later.
    pub fn unify(mut self, u: &LTerm, v: &LTerm) -> SResult {
        if unification::unify_rec(&mut self.smap, u, v) {
            Ok(self)
        } else {
            Err(())
        }
    }

    /// Unification variant that rejects bindings which would make a
    /// variable contain itself.
    pub fn unify_with_occurs_check(mut self, u: &LTerm, v: &LTerm) -> SResult {
        if unification::unify_occurs_rec(&mut self.smap, u, v) {
            Ok(self)
        } else {
            Err(())
        }
    }
}
