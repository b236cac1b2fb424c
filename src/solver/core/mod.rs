//! Core storage for the marching engine.
//!
//! - [`Field`]: values, slopes and CFL numbers on both time planes

mod field;

pub use field::Field;
