use crate::goal::Goal;
use crate::operator::closure::closure;
use crate::operator::disj::disj;
use crate::relation::succeed::succeed;

/// A relation that succeeds an unbounded number of times.
pub fn alwayso() -> Goal {
    closure(|| disj(succeed(), alwayso()))
}
