//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		ConversionError															
/// Represents all possible errors that can occur when converting text into a
/// narrow integer.
/// 
/// Arithmetic on narrow integers never fails, as values wrap instead. Parsing
/// text is the only operation that reports an out-of-range value.
/// 
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// The incoming value is not a valid integer.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),
	
	/// The incoming value contains a digit that is not valid for the radix in
	/// use.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u8),
	
	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,
	
	/// The incoming value lies outside the range of the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
