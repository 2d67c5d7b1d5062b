//! Custom narrow integer type.

//	This lint check is unnecessary in this module because these arithmetic
//	operations are the point of the type. All of them run on a storage type
//	that is strictly wider than the logical width, and the result is then
//	explicitly reduced, so nothing here can overflow unexpectedly. Division and
//	remainder by zero keep the native panic.
#![allow(clippy::arithmetic_side_effects, reason = "Needs to emulate hardware wraparound behaviour")]



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use crate::{
	errors::ConversionError,
	width::{Backing, Storage, StorageOf, Width},
};
use core::{
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
	str::FromStr,
};
use num_traits::{One, PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero};



//		Type aliases

/// Type alias for signed integers, for convenience.
pub type SInt<const BITS: u32> = Int<BITS, true>;

/// Type alias for unsigned integers, for convenience.
pub type UInt<const BITS: u32> = Int<BITS, false>;



//		Structs

//		Int
/// A narrow integer.
///
/// This type provides an integer of any width from 1 to 63 bits, other than
/// the multiples of 8 which are already covered by the standard integer types,
/// and which can be signed or unsigned. It is intended for modelling packed,
/// non-byte-aligned fields such as hardware registers and binary wire formats
/// while using normal arithmetic syntax.
///
/// # Type parameters
///
/// * `BITS`   - The number of bits in the logical value.
/// * `SIGNED` - Whether the integer is signed (`true`) or unsigned (`false`).
///
/// Invalid widths are rejected at compile time:
///
/// ```compile_fail
/// use narrowint::UInt;
///
/// let byte = UInt::<8>::zero();
/// ```
///
/// ```compile_fail
/// use narrowint::SInt;
///
/// let wide = SInt::<64>::zero();
/// ```
///
/// ```compile_fail
/// use narrowint::UInt;
///
/// let empty = UInt::<0>::zero();
/// ```
///
/// # Storage
///
/// The value is held in the smallest standard integer with at least `BITS`
/// bits, with the same signedness: `u8`/`i8` for widths up to 7, `u16`/`i16`
/// up to 15, `u32`/`i32` up to 31, and `u64`/`i64` up to 63. The storage type
/// for a given width is available as [`StorageOf`](crate::StorageOf), and
/// [`unwrap()`](Int::unwrap()) returns the value as that type.
///
/// The bits of the storage above `BITS` are never observable. For unsigned
/// integers they are always zero, and for signed integers they always repeat
/// the sign bit, so the stored value is exactly the value of the narrow
/// integer.
///
/// # Arithmetic
///
/// This type wraps in the same way as a hardware bitfield of the same width:
///
///   1. Every operation is carried out on the storage type, using wrapping
///      arithmetic, and the result is then reduced to `BITS` bits. For
///      unsigned integers this is the result modulo `2^BITS`. For signed
///      integers it is the same bit pattern read as two's complement.
///   2. Construction from an out-of-range value wraps in the same way, and is
///      not an error.
///   3. Overflow is never detected or reported, in debug or release builds.
///
/// Division by zero will panic, as with standard integer types.
///
/// Only [`Int`]s of the same bit width and sign can be used together in
/// arithmetic operations.
///
/// ```
/// use narrowint::{SInt, UInt};
///
/// assert_eq!((UInt::<3>::new(6) + UInt::<3>::new(3)).unwrap(), 1);
/// assert_eq!(SInt::<5>::new(20).unwrap(), -12);
/// assert_eq!((!UInt::<3>::new(5)).unwrap(), 2);
/// ```
///
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Int<const BITS: u32, const SIGNED: bool>(StorageOf<BITS, SIGNED>)
where
	Width<BITS, SIGNED>: Backing,
;

//󰭅		Int
impl<const BITS: u32, const SIGNED: bool> Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		Public constants
	/// Number of bits in the logical value.
	pub const BITS: u32 = BITS;

	/// The largest value that can be represented.
	pub const MAX: Self = Self(<Width<BITS, SIGNED> as Backing>::MAX);

	/// The smallest value that can be represented.
	pub const MIN: Self = Self(<Width<BITS, SIGNED> as Backing>::MIN);

	//		Private constants
	/// Mask selecting the logical bits from a 64-bit pattern.
	const MASK: u64 = u64::MAX >> (u64::BITS - BITS);

	/// Number of storage bits above the logical width.
	const PADDING: u32 = <StorageOf<BITS, SIGNED> as Storage>::BITS - BITS;

	//		Constructors

	//		new
	/// Creates a new [`Int`] from a value of its storage type.
	///
	/// Values outside the range of the type are wrapped, exactly as if they
	/// had been assigned to a hardware bitfield of `BITS` bits.
	///
	/// # Parameters
	///
	/// * `value` - The value to create the [`Int`] from.
	///
	#[must_use]
	pub fn new(value: StorageOf<BITS, SIGNED>) -> Self {
		Self::wrap(value)
	}

	//		parse
	/// Parses an [`Int`] from a string.
	///
	/// This is the same as [`FromStr::from_str()`], and is provided for
	/// convenience.
	///
	/// # Errors
	///
	/// Returns an error if the string is not a valid integer, or if its value
	/// lies outside the range of the type.
	///
	pub fn parse(s: &str) -> Result<Self, ConversionError> {
		Self::from_str(s)
	}

	//		Public methods

	//		count_ones
	/// Returns the number of ones in the binary representation of the value.
	///
	/// Only the `BITS` logical bits are counted, so a negative value does not
	/// count the sign extension held in storage.
	///
	#[must_use]
	pub fn count_ones(self) -> u32 {
		self.pattern().count_ones()
	}

	//		count_zeros
	/// Returns the number of zeros in the binary representation of the value.
	#[must_use]
	pub fn count_zeros(self) -> u32 {
		BITS - self.count_ones()
	}

	//		decrement
	/// Decrements the value by one, in place, and returns it.
	///
	/// This is the equivalent of a prefix decrement. The minimum value wraps
	/// around to the maximum.
	///
	pub fn decrement(&mut self) -> &mut Self {
		*self = Self::wrap(self.0.wrapping_sub(&StorageOf::<BITS, SIGNED>::one()));
		self
	}

	//		increment
	/// Increments the value by one, in place, and returns it.
	///
	/// This is the equivalent of a prefix increment. The maximum value wraps
	/// around to the minimum.
	///
	pub fn increment(&mut self) -> &mut Self {
		*self = Self::wrap(self.0.wrapping_add(&StorageOf::<BITS, SIGNED>::one()));
		self
	}

	//		is_negative
	/// Returns `true` if the value is negative. Always `false` when unsigned.
	#[must_use]
	pub fn is_negative(self) -> bool {
		SIGNED && self.0 < StorageOf::<BITS, SIGNED>::zero()
	}

	//		is_zero
	/// Returns `true` if the value is zero.
	#[must_use]
	pub fn is_zero(self) -> bool {
		self.0.is_zero()
	}

	//		max_value
	/// Returns the maximum value that can be represented by this type.
	#[must_use]
	pub const fn max_value() -> Self {
		Self::MAX
	}

	//		min_value
	/// Returns the minimum value that can be represented by this type.
	#[must_use]
	pub const fn min_value() -> Self {
		Self::MIN
	}

	//		one
	/// Returns a value of one.
	///
	/// A signed 1-bit integer can only hold `0` and `-1`, so for that type one
	/// wraps to `-1`, which is the same bit pattern.
	///
	#[must_use]
	pub fn one() -> Self {
		Self::wrap(StorageOf::<BITS, SIGNED>::one())
	}

	//		post_decrement
	/// Decrements the value by one, in place, and returns the previous value.
	///
	/// This is the equivalent of a postfix decrement.
	///
	#[must_use]
	pub fn post_decrement(&mut self) -> Self {
		let previous = *self;
		_ = self.decrement();
		previous
	}

	//		post_increment
	/// Increments the value by one, in place, and returns the previous value.
	///
	/// This is the equivalent of a postfix increment.
	///
	#[must_use]
	pub fn post_increment(&mut self) -> Self {
		let previous = *self;
		_ = self.increment();
		previous
	}

	//		pow
	/// Raises the value to the power of `exp`, wrapping around at the
	/// boundary of the type.
	///
	/// # Parameters
	///
	/// * `exp` - The exponent.
	///
	#[must_use]
	pub fn pow(self, mut exp: u32) -> Self {
		let mut base   = self;
		let mut result = Self::one();

		while exp > 0 {
			if exp & 1_u32 == 1_u32 {
				result *= base;
			}
			exp >>= 1;
			if exp > 0 {
				base *= base;
			}
		}

		result
	}

	//		unwrap
	/// Returns the value as its native storage type.
	///
	/// This is the way to leave the narrow type, for instance to print the
	/// value or to combine it with ordinary integers. It never panics.
	///
	#[must_use]
	pub const fn unwrap(self) -> StorageOf<BITS, SIGNED> {
		self.0
	}

	//		zero
	/// Returns a value of zero.
	#[must_use]
	pub fn zero() -> Self {
		Self(StorageOf::<BITS, SIGNED>::zero())
	}

	//		Private methods

	//		pattern
	/// The logical bits of the value, zero-extended to 64 bits.
	fn pattern(self) -> u64 {
		self.0.to_bits() & Self::MASK
	}

	//		wrap
	/// Reduces a storage value to the logical width.
	///
	/// The value is shifted so that the top logical bit lands in the top bit
	/// of the storage, and then shifted back. For unsigned storage the shift
	/// back fills with zeros, which clears the padding bits. For signed storage
	/// it is arithmetic, which copies the sign bit into them.
	///
	fn wrap(value: StorageOf<BITS, SIGNED>) -> Self {
		let raised = value.unsigned_shl(Self::PADDING);

		if SIGNED {
			Self(raised.signed_shr(Self::PADDING))
		} else {
			Self(raised.unsigned_shr(Self::PADDING))
		}
	}
}

//󰭅		Add
impl<const BITS: u32, const SIGNED: bool> Add for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		Self::wrap(self.0.wrapping_add(&rhs.0))
	}
}

//󰭅		AddAssign
impl<const BITS: u32, const SIGNED: bool> AddAssign for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		add_assign
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

//󰭅		Binary
impl<const BITS: u32, const SIGNED: bool> Binary for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Binary::fmt(&self.pattern(), f)
	}
}

//󰭅		BitAnd
impl<const BITS: u32, const SIGNED: bool> BitAnd for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		bitand
	fn bitand(self, rhs: Self) -> Self::Output {
		Self::wrap(self.0 & rhs.0)
	}
}

//󰭅		BitAndAssign
impl<const BITS: u32, const SIGNED: bool> BitAndAssign for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		bitand_assign
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs;
	}
}

//󰭅		BitOr
impl<const BITS: u32, const SIGNED: bool> BitOr for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		bitor
	fn bitor(self, rhs: Self) -> Self::Output {
		Self::wrap(self.0 | rhs.0)
	}
}

//󰭅		BitOrAssign
impl<const BITS: u32, const SIGNED: bool> BitOrAssign for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		bitor_assign
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs;
	}
}

//󰭅		BitXor
impl<const BITS: u32, const SIGNED: bool> BitXor for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		bitxor
	fn bitxor(self, rhs: Self) -> Self::Output {
		Self::wrap(self.0 ^ rhs.0)
	}
}

//󰭅		BitXorAssign
impl<const BITS: u32, const SIGNED: bool> BitXorAssign for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		bitxor_assign
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

//󰭅		Debug
impl<const BITS: u32, const SIGNED: bool> Debug for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "Int::<{BITS}, {SIGNED}>({})", self.0)
	}
}

//󰭅		Display
impl<const BITS: u32, const SIGNED: bool> Display for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

//󰭅		Div
impl<const BITS: u32, const SIGNED: bool> Div for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		div
	fn div(self, rhs: Self) -> Self::Output {
		//	Dividing the smallest signed value by -1 cannot overflow the storage,
		//	which is always wider than the logical value, and the result wraps
		//	back to the smallest value.
		Self::wrap(self.0 / rhs.0)
	}
}

//󰭅		DivAssign
impl<const BITS: u32, const SIGNED: bool> DivAssign for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		div_assign
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

//󰭅		FromStr
impl<const BITS: u32, const SIGNED: bool> FromStr for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Err = ConversionError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();

		if trimmed.is_empty() {
			return Err(ConversionError::EmptyValue);
		}

		#[expect(clippy::option_if_let_else, reason = "Clearer to read as a match")]
		let (without_sign, is_negative) = match trimmed.strip_prefix('-') {
			Some(rest) => (rest, true),
			None       => (trimmed.strip_prefix('+').unwrap_or(trimmed), false),
		};

		if is_negative && !SIGNED {
			return Err(ConversionError::ValueIsNegative);
		}

		//	Handle different bases
		#[expect(clippy::option_if_let_else, reason = "Clearer to read as if-let-else")]
		let (without_base, radix) =
			if        let Some(rest) = without_sign.strip_prefix("0x").or_else(|| without_sign.strip_prefix("0X")) {
				(rest, 16_u8)
			} else if let Some(rest) = without_sign.strip_prefix("0b").or_else(|| without_sign.strip_prefix("0B")) {
				(rest, 2_u8)
			} else if let Some(rest) = without_sign.strip_prefix("0o").or_else(|| without_sign.strip_prefix("0O")) {
				(rest, 8_u8)
			} else {
				(without_sign, 10_u8)
			}
		;

		//	Parse the magnitude, allowing underscores between digits
		let mut magnitude = 0_u64;
		let mut digits    = 0_usize;

		for c in without_base.chars().filter(|&c| c != '_') {
			let digit = c.to_digit(16).ok_or(ConversionError::InvalidDigit(c))?;
			if digit >= u32::from(radix) {
				return Err(ConversionError::InvalidRadix(c, radix));
			}
			magnitude = magnitude
				.checked_mul(u64::from(radix))
				.and_then(|v| v.checked_add(u64::from(digit)))
				.ok_or(ConversionError::ValueTooLarge)?
			;
			digits   += 1;
		}

		if digits == 0 {
			return Err(ConversionError::EmptyValue);
		}

		//	The negative range reaches one further than the positive range
		let max   = Self::MAX.0.to_bits();
		let limit = if is_negative { max + 1 } else { max };
		if magnitude > limit {
			return Err(ConversionError::ValueTooLarge);
		}

		let bits = if is_negative { magnitude.wrapping_neg() } else { magnitude };
		Ok(Self::wrap(StorageOf::<BITS, SIGNED>::from_bits(bits)))
	}
}

//󰭅		LowerHex
impl<const BITS: u32, const SIGNED: bool> LowerHex for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		LowerHex::fmt(&self.pattern(), f)
	}
}

//󰭅		Mul
impl<const BITS: u32, const SIGNED: bool> Mul for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		mul
	fn mul(self, rhs: Self) -> Self::Output {
		Self::wrap(self.0.wrapping_mul(&rhs.0))
	}
}

//󰭅		MulAssign
impl<const BITS: u32, const SIGNED: bool> MulAssign for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		mul_assign
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

//󰭅		Neg
impl<const BITS: u32, const SIGNED: bool> Neg for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		neg
	/// Negates the value, wrapping around at the boundary of the type.
	///
	/// The smallest signed value negates to itself. Unsigned values negate to
	/// their two's complement, so `-x + x` is always zero.
	///
	fn neg(self) -> Self::Output {
		Self::wrap(self.0.wrapping_neg())
	}
}

//󰭅		Not
impl<const BITS: u32, const SIGNED: bool> Not for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		//	Must wrap the result as NOT will set the padding bits
		Self::wrap(!self.0)
	}
}

//󰭅		Octal
impl<const BITS: u32, const SIGNED: bool> Octal for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Octal::fmt(&self.pattern(), f)
	}
}

//󰭅		Product
impl<const BITS: u32, const SIGNED: bool> Product for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| acc * x)
	}
}

//󰭅		Product<&>
impl<'a, const BITS: u32, const SIGNED: bool> Product<&'a Self> for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, &x| acc * x)
	}
}

//󰭅		Rem
impl<const BITS: u32, const SIGNED: bool> Rem for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		rem
	fn rem(self, rhs: Self) -> Self::Output {
		Self::wrap(self.0 % rhs.0)
	}
}

//󰭅		RemAssign
impl<const BITS: u32, const SIGNED: bool> RemAssign for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		rem_assign
	fn rem_assign(&mut self, rhs: Self) {
		*self = *self % rhs;
	}
}

//󰭅		Shl
impl<const BITS: u32, const SIGNED: bool> Shl<u32> for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		shl
	fn shl(self, rhs: u32) -> Self::Output {
		//	Every logical bit is shifted out
		if rhs >= BITS {
			return Self::zero();
		}

		Self::wrap(self.0.unsigned_shl(rhs))
	}
}

//󰭅		ShlAssign
impl<const BITS: u32, const SIGNED: bool> ShlAssign<u32> for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		shl_assign
	fn shl_assign(&mut self, rhs: u32) {
		*self = *self << rhs;
	}
}

//󰭅		Shr
impl<const BITS: u32, const SIGNED: bool> Shr<u32> for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		shr
	/// Shifts the value right.
	///
	/// Unsigned values are shifted logically, filling with zeros, and become
	/// zero once the shift reaches `BITS`. Signed values are shifted
	/// arithmetically, filling with copies of the sign bit, and settle at `0`
	/// or `-1`.
	///
	/// The stored value is always zero-extended or sign-extended to the full
	/// storage width, so shifting the storage gives the correct result for the
	/// logical width.
	///
	fn shr(self, rhs: u32) -> Self::Output {
		if SIGNED {
			Self::wrap(self.0.signed_shr(rhs.min(BITS - 1)))
		} else if rhs >= BITS {
			Self::zero()
		} else {
			Self::wrap(self.0.unsigned_shr(rhs))
		}
	}
}

//󰭅		ShrAssign
impl<const BITS: u32, const SIGNED: bool> ShrAssign<u32> for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		shr_assign
	fn shr_assign(&mut self, rhs: u32) {
		*self = *self >> rhs;
	}
}

//󰭅		Sub
impl<const BITS: u32, const SIGNED: bool> Sub for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	type Output = Self;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		Self::wrap(self.0.wrapping_sub(&rhs.0))
	}
}

//󰭅		SubAssign
impl<const BITS: u32, const SIGNED: bool> SubAssign for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		sub_assign
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

//󰭅		Sum
impl<const BITS: u32, const SIGNED: bool> Sum for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>
impl<'a, const BITS: u32, const SIGNED: bool> Sum<&'a Self> for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, &x| acc + x)
	}
}

//󰭅		UpperHex
impl<const BITS: u32, const SIGNED: bool> UpperHex for Int<BITS, SIGNED>
where
	Width<BITS, SIGNED>: Backing,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		UpperHex::fmt(&self.pattern(), f)
	}
}



//		Macros

//		storage_conversions!
/// Implements lossless conversions between [`Int`] and its storage type.
/// 
/// These have to be written out per primitive, as a trait cannot be
/// implemented for an associated type.
/// 
macro_rules! storage_conversions {
	($($ty:ty => $signed:tt),+ $(,)?) => {$(
		//󰭅		From: storage -> Int
		impl<const BITS: u32> From<$ty> for Int<BITS, $signed>
		where
			Width<BITS, $signed>: Backing<Storage = $ty>,
		{
			//		from
			fn from(v: $ty) -> Self {
				Self::new(v)
			}
		}

		//󰭅		From: Int -> storage
		impl<const BITS: u32> From<Int<BITS, $signed>> for $ty
		where
			Width<BITS, $signed>: Backing<Storage = $ty>,
		{
			//		from
			fn from(v: Int<BITS, $signed>) -> Self {
				v.unwrap()
			}
		}
	)+};
}

storage_conversions! {
	u8  => false,
	u16 => false,
	u32 => false,
	u64 => false,
	i8  => true,
	i16 => true,
	i32 => true,
	i64 => true,
}
