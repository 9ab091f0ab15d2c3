//! Widget system: the common trait.

pub mod traits;

pub use traits::Widget;
