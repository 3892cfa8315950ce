#[doc(inline)]
pub use randgen::{self, *};
