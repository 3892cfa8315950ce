#[doc(inline)]
pub use cursor::{self, *};
#[doc(inline)]
pub use split::{self, *};
