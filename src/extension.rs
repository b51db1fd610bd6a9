//! User-defined term kinds.
//!
//! The unifier, deep walk and reifier are all open dispatches over the shape
//! of a term. A new shape is added by implementing [`ExtensionTerm`] and
//! wrapping the value with [`LTerm::ext`](crate::lterm::LTerm::ext); the
//! engine stores it opaquely and calls back into the capability record when
//! the term meets another term in unification or an answer is projected.
//! A shape the extension does not recognize unifies with nothing, so the
//! default outcome for unknown kinds is failure, not an error.

use crate::lterm::{LTerm, LVar};
use crate::state::SMap;
use std::any::Any;
use std::fmt;

pub trait ExtensionTerm: fmt::Debug {
    /// Downcasting support for implementing `ext_eq` against other
    /// extensions of the same concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Structural equality between extension terms. Extensions of different
    /// concrete types are never equal.
    fn ext_eq(&self, other: &dyn ExtensionTerm) -> bool;

    /// Unify this term with `other`, which has already been walked and is
    /// not a variable. On success any new bindings have been added to `smap`
    /// and `true` is returned; `false` means the terms do not unify.
    fn unify(&self, other: &LTerm, smap: &mut SMap) -> bool;

    /// Deep-walk the children of this term, returning the resolved term.
    fn walk_star(&self, smap: &SMap) -> LTerm;

    /// Extend a reifying substitution over the children of this term.
    fn reify(&self, smap: SMap) -> SMap;

    /// Occurs check over the children of this term. Only consulted by the
    /// opt-in checking unifier; the default claims no occurrence.
    fn occurs(&self, _x: LVar, _smap: &SMap) -> bool {
        false
    }
}
