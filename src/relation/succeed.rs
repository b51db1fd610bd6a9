use crate::goal::Goal;

/// A relation that succeeds, passing the state through unchanged.
///
/// # Example
/// ```rust
/// use mukanren::prelude::*;
/// fn main() {
///     let mut iter = run_star(|q| conj(succeed(), eq(q, 1)));
///     assert!(iter.next().unwrap() == 1);
///     assert!(iter.next().is_none());
/// }
/// ```
pub fn succeed() -> Goal {
    Goal::succeed()
}
