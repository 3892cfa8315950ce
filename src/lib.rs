//! Generic sequence splitting.
//!
//! - [`seq`]: cursors and the splitting algorithms,
//! - [`fmt`]: separator-joined formatting of the pieces,
//! - [`random`]: seeded input generators for property tests.

pub use fmt;
pub use random;
pub use seq;
