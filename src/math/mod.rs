//! Arithmetic primitives for pool calculations.
//!
//! All engine arithmetic is unsigned and overflow-checked. Division is
//! only available through [`mul_div`], which widens to 128 bits and takes
//! an explicit [`Rounding`](crate::domain::Rounding) direction; addition
//! and subtraction on domain types go through [`CheckedArithmetic`].

mod checked;
mod mul_div;

pub use checked::CheckedArithmetic;
pub use mul_div::{integer_sqrt, mul_div};
