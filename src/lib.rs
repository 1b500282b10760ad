#![no_std]

//! 256-bit signed fixed-point arithmetic in Q128.128 format.
//!
//! [`Fix256`] packs 128 integer bits and 128 fractional bits into a single
//! 256-bit two's-complement value: deterministic, exact fractional
//! arithmetic with no floating-point rounding, no allocation and no std
//! dependency. Suitable wherever bit-reproducible results matter: financial
//! modelling, lockstep simulation state, large-world coordinates, interval
//! computation.
//!
//! All arithmetic runs on exact wide-integer limbs (Knuth schoolbook
//! division, 128x128 schoolbook multiplication, Newton-Raphson roots);
//! `f64` appears only in the explicit conversions. Decimal formatting is
//! round-trippable: 39 fractional digits reproduce any value exactly.
//!
//! # Example
//! ```
//! use fix256::Fix256;
//!
//! let a: Fix256 = "2.5".parse().unwrap();
//! let b: Fix256 = "0.5".parse().unwrap();
//!
//! assert_eq!((a / b).to_string(), "5");
//! assert_eq!((a * b).to_string(), "1.25");
//! assert_eq!((-a).floor().to_i64(), -3);
//! assert_eq!(Fix256::from(100u8).sqrt(), Fix256::from(10u8));
//! ```
//!
//! # Semantics at the edges
//!
//! Addition, subtraction and negation wrap modulo 2^256, preserving the
//! additive-group identities. Conversions and division saturate instead:
//! division by zero yields [`Fix256::MIN`] or [`Fix256::MAX`] by the sign of
//! the dividend, out-of-range floats clamp, and roots of negative values
//! return [`Fix256::MIN`] as a sentinel. No operation panics or allocates.

mod error;
mod fix256;
mod util;
mod wide;

pub use error::ParseError;
pub use fix256::{Fix256, FormatOptions, Sign};
pub use util::{decimal_separator, set_decimal_separator};
