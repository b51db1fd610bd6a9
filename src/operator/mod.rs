#[doc(hidden)]
pub mod closure;
#[doc(hidden)]
pub mod conde;
#[doc(hidden)]
pub mod conj;
#[doc(hidden)]
pub mod delay;
#[doc(hidden)]
pub mod disj;
#[doc(hidden)]
pub mod fresh;

#[doc(inline)]
pub use closure::closure;

#[doc(inline)]
pub use conde::conde;

#[doc(inline)]
pub use conj::conj;

#[doc(inline)]
pub use delay::delay;

#[doc(inline)]
pub use disj::disj;

#[doc(inline)]
pub use fresh::{call_fresh, fresh2, fresh3};
