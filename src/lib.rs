//! Arbitrary-precision signed integers
//!
//! # What is a `BigInteger`?
//!
//! A [`BigInteger`] behaves like a machine integer without a fixed bit width.
//! It stores a sign flag and a magnitude made of 32-bit limbs, least
//! significant limb first, and grows as results require. Every value is kept
//! normalized: the magnitude has no leading zero limb, and zero is a single
//! `0` limb that is never negative.
//!
//! # Constructing values
//!
//! Values come from any native integer through `From`, or from text in
//! decimal or hexadecimal through [`BigInteger::parse`] and `FromStr`.
//!
//! ```
//! use biginteger::{Base, BigInteger};
//!
//! # fn main() -> biginteger::Result<()> {
//! let small = BigInteger::from(-456);
//! let big: BigInteger = "12345678901234567890".parse()?;
//! let hex = BigInteger::parse("-ABCDEF", Base::Hexadecimal)?;
//!
//! assert!(small.is_negative());
//! assert_eq!(big.size(), 2);
//! assert_eq!(hex, -11259375);
//! # Ok(())
//! # }
//! ```
//!
//! # Arithmetic
//!
//! The usual operators work on owned and borrowed values, in place and by
//! value, and accept native integers on the right-hand side. Division
//! truncates toward zero, so the remainder takes the sign of the dividend.
//!
//! ```
//! use biginteger::BigInteger;
//!
//! let a = BigInteger::from(-100);
//! let b = BigInteger::from(7);
//!
//! assert_eq!(&a / &b, -14);
//! assert_eq!(&a % &b, -2);
//! assert_eq!(&a * &b + 700i32, 0);
//! ```
//!
//! Like the primitive integers, the `/` and `%` operators panic when the
//! divisor is zero. The `checked_*` and `try_*` methods report the same
//! condition as an [`Error`] instead.
//!
//! ```
//! use biginteger::BigInteger;
//!
//! let zero = BigInteger::zero();
//! let err = BigInteger::from(1).checked_div(&zero).unwrap_err();
//! assert!(err.is_arithmetic());
//! ```
//!
//! # Formatting
//!
//! `Display` renders decimal, `UpperHex` and `LowerHex` render hexadecimal.
//! The free functions [`to_decimal_string`] and [`to_hex_string`] produce the
//! same text.
//!
//! ```
//! use biginteger::{to_hex_string, BigInteger};
//!
//! let n = BigInteger::from(0xFFFF_FFFFu32) + 1u32;
//! assert_eq!(n.to_string(), "4294967296");
//! assert_eq!(to_hex_string(&n), "100000000");
//! assert_eq!(format!("{:#x}", -n), "-0x100000000");
//! ```
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and enable the "alloc" feature:
//!
//! ```toml
//! [dependencies]
//! biginteger = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/biginteger/0.1.0")]
// Ignored clippy lints
#![allow(clippy::comparison_chain)]
// Ignored clippy_pedantic lints
#![allow(
    // limb arithmetic narrows double-width values on purpose
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
)]
#![deny(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

extern crate serde_core as serde;

// Not public API. Facade around the `core` and `alloc` items used internally.
mod lib {
    pub use core::{cmp, fmt, hash, iter, mem, ops, result, str};

    pub use alloc::boxed::Box;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec::Vec;
}

pub use crate::bigint::BigInteger;
#[doc(inline)]
pub use crate::error::{Error, Result};
pub use crate::fmt::{to_decimal_string, to_hex_string};
pub use crate::math::Limb;
pub use crate::parse::Base;

mod bigint;
mod cmp;
mod de;
pub mod error;
mod fmt;
mod math;
mod ops;
mod parse;
mod ser;

mod features_check;
