#[doc(hidden)]
pub mod alwayso;
#[doc(hidden)]
pub mod appendo;
#[doc(hidden)]
pub mod conso;
#[doc(hidden)]
pub mod emptyo;
#[doc(hidden)]
pub mod eq;
#[doc(hidden)]
pub mod fail;
#[doc(hidden)]
pub mod membero;
#[doc(hidden)]
pub mod nevero;
#[doc(hidden)]
pub mod succeed;

#[doc(inline)]
pub use alwayso::alwayso;

#[doc(inline)]
pub use appendo::appendo;

#[doc(inline)]
pub use conso::conso;

#[doc(inline)]
pub use emptyo::emptyo;

#[doc(inline)]
pub use eq::eq;

#[doc(inline)]
pub use fail::fail;

#[doc(inline)]
pub use membero::membero;

#[doc(inline)]
pub use nevero::nevero;

#[doc(inline)]
pub use succeed::succeed;
