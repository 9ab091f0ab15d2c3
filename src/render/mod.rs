//! Rendering: strip primitives and the crossterm output driver.

pub mod driver;
pub mod strip;

pub use driver::Driver;
pub use strip::{CellStyle, Strip, StyledCell};
