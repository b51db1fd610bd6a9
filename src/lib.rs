#![doc = include_str!("../README.md")]

pub mod extension;
pub mod goal;
pub mod lterm;
pub mod lvalue;
pub mod operator;
pub mod query;
pub mod relation;
pub mod state;
pub mod stream;

pub mod prelude {
    pub use crate::lterm;

    pub use crate::extension::ExtensionTerm;
    pub use crate::goal::{Goal, Solve};
    pub use crate::lterm::{LTerm, LTermInner, LVar};
    pub use crate::lvalue::LValue;
    pub use crate::operator::closure::closure;
    pub use crate::operator::conde::conde;
    pub use crate::operator::conj::{conj, Conj};
    pub use crate::operator::delay::delay;
    pub use crate::operator::disj::{disj, Disj};
    pub use crate::operator::fresh::{call_fresh, fresh2, fresh3};
    pub use crate::query::{query, run, run_star, Query, ResultIterator};
    pub use crate::relation::eq::eq;
    pub use crate::relation::fail::fail;
    pub use crate::relation::succeed::succeed;
    pub use crate::state::{reify_first, reify_name, SMap, SResult, State};
    pub use crate::stream::Stream;
}
