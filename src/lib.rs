//! The Narrowint crate is a library of integers with any bit width from 1 to
//! 63, which wrap on every operation exactly like a hardware bitfield of that
//! width.
//!
//! The single type, [`Int`], is parameterised by its width and signedness, and
//! stored in the smallest standard integer that can hold it. [`UInt`] and
//! [`SInt`] are shorthands for the unsigned and signed forms.
//!
//! ```
//! use narrowint::{SInt, UInt};
//!
//! let mut register = UInt::<3>::new(6);
//! register        += UInt::<3>::new(3);
//! assert_eq!(register.unwrap(), 1);
//!
//! let field = SInt::<5>::new(20);
//! assert_eq!(field.to_string(), "-12");
//! ```



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_camel_case_types,
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::as_conversions,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod int;
mod width;



//		Packages

pub use errors::ConversionError;
pub use int::{Int, SInt, UInt};
pub use width::{Backing, Storage, StorageOf, Width};

