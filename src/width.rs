//! Bit widths, and the native storage chosen for each of them.
//!
//! A narrow integer is declared with a bit count and a signedness, and stored
//! in the smallest primitive that can hold that many bits. The mapping from
//! width to primitive is a table of [`Backing`] implementations on the
//! [`Width`] marker. Only valid widths have an entry, so asking for an invalid
//! width (zero, a multiple of 8, or 64 and above) fails to compile rather than
//! misbehaving at runtime.



//		Modules

#[cfg(test)]
#[path = "tests/width.rs"]
mod tests;



//		Packages

use core::{
	fmt::{Debug, Display},
	hash::Hash,
};
use num_traits::{AsPrimitive, PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};



//		Type aliases

/// The native storage type used for a given width and signedness.
pub type StorageOf<const BITS: u32, const SIGNED: bool> = <Width<BITS, SIGNED> as Backing>::Storage;



//		Enums

//		Width
/// Type-level marker for a bit width and signedness.
///
/// This type is never constructed. It exists so that [`Backing`] can be
/// implemented once per valid combination of `BITS` and `SIGNED`, which is
/// what gives [`Int`](crate::Int) its compile-time width check.
///
#[allow(clippy::exhaustive_enums, reason = "Uninhabited marker type")]
#[derive(Debug)]
pub enum Width<const BITS: u32, const SIGNED: bool> {}



//		Traits

//		Sealed
/// Prevents [`Storage`] and [`Backing`] from being implemented outside this
/// crate.
mod private {
	/// Marker supertrait for the sealed traits.
	#[allow(unreachable_pub, reason = "Sealed trait pattern")]
	pub trait Sealed {}
}

use private::Sealed;

//		Storage
/// A native integer type able to hold the bits of a narrow integer.
///
/// Implemented for [`u8`], [`u16`], [`u32`], [`u64`] and their signed
/// counterparts. All arithmetic on a narrow integer is performed on its
/// storage type using wrapping operations, after which the result is reduced
/// to the logical width.
///
pub trait Storage:
	Sealed
	+ PrimInt
	+ WrappingAdd
	+ WrappingSub
	+ WrappingMul
	+ WrappingNeg
	+ Default
	+ Hash
	+ Debug
	+ Display
	+ Send
	+ Sync
	+ 'static
{
	/// Number of bits in the native type.
	const BITS: u32;

	/// Whether the native type is signed.
	const SIGNED: bool;

	//		to_bits
	/// The two's-complement bit pattern of the value, sign-extended or
	/// zero-extended to 64 bits.
	fn to_bits(self) -> u64;

	//		from_bits
	/// Creates a value from the low bits of a 64-bit pattern, discarding any
	/// bits that do not fit.
	fn from_bits(bits: u64) -> Self;
}

//		Backing
/// Maps a [`Width`] to its native storage and value range.
///
/// Implemented for every `Width<BITS, SIGNED>` where `BITS` is between 1 and
/// 63 inclusive and not a multiple of 8. There is deliberately no
/// implementation for any other width.
///
/// ```compile_fail
/// use narrowint::{Backing, Width};
///
/// fn storage_bits<W: Backing>() -> u32 { 0 }
/// storage_bits::<Width<16, false>>();
/// ```
///
pub trait Backing: Sealed {
	/// The smallest native integer that can hold the width.
	type Storage: Storage;

	/// Largest value representable in the width.
	const MAX: Self::Storage;

	/// Smallest value representable in the width.
	const MIN: Self::Storage;
}



//		Macros

//		storage!
/// Implements [`Storage`] for primitive integer types.
macro_rules! storage {
	($($ty:ty => $signed:tt),+ $(,)?) => {$(
		impl Sealed for $ty {}

		impl Storage for $ty {
			const BITS:   u32  = <$ty>::BITS;
			const SIGNED: bool = $signed;

			fn to_bits(self) -> u64 {
				self.as_()
			}

			fn from_bits(bits: u64) -> Self {
				bits.as_()
			}
		}
	)+};
}

//		backing!
/// Implements [`Backing`] for a list of widths sharing one storage type.
macro_rules! backing {
	($storage:ty, $signed:tt => $($bits:tt),+ $(,)?) => {$(
		impl Sealed for Width<$bits, $signed> {}

		impl Backing for Width<$bits, $signed> {
			type Storage = $storage;

			const MAX: $storage = <$storage>::MAX >> (<$storage>::BITS - $bits);
			const MIN: $storage = if $signed { !Self::MAX } else { 0 };
		}
	)+};
}

storage! {
	u8  => false,
	u16 => false,
	u32 => false,
	u64 => false,
	i8  => true,
	i16 => true,
	i32 => true,
	i64 => true,
}

backing!(u8,  false => 1, 2, 3, 4, 5, 6, 7);
backing!(u16, false => 9, 10, 11, 12, 13, 14, 15);
backing!(u32, false => 17, 18, 19, 20, 21, 22, 23, 25, 26, 27, 28, 29, 30, 31);
backing!(u64, false =>
	33, 34, 35, 36, 37, 38, 39, 41, 42, 43, 44, 45, 46, 47,
	49, 50, 51, 52, 53, 54, 55, 57, 58, 59, 60, 61, 62, 63,
);

backing!(i8,  true  => 1, 2, 3, 4, 5, 6, 7);
backing!(i16, true  => 9, 10, 11, 12, 13, 14, 15);
backing!(i32, true  => 17, 18, 19, 20, 21, 22, 23, 25, 26, 27, 28, 29, 30, 31);
backing!(i64, true  =>
	33, 34, 35, 36, 37, 38, 39, 41, 42, 43, 44, 45, 46, 47,
	49, 50, 51, 52, 53, 54, 55, 57, 58, 59, 60, 61, 62, 63,
);
