//		Packages

use super::*;
use crate::{SInt, UInt};
use core::{any::type_name, mem::size_of};



//		Tests

mod backing {
	use super::*;

	//		MAX and MIN, for every valid width
	macro_rules! check_ranges {
		($($bits:literal),+ $(,)?) => {$(
			assert_eq!(
				i128::from(<Width<$bits, false> as Backing>::MAX),
				(1_i128 << $bits) - 1,
				"unsigned MAX for {} bits", $bits,
			);
			assert_eq!(
				i128::from(<Width<$bits, false> as Backing>::MIN),
				0,
				"unsigned MIN for {} bits", $bits,
			);
			assert_eq!(
				i128::from(<Width<$bits, true> as Backing>::MAX),
				(1_i128 << ($bits - 1)) - 1,
				"signed MAX for {} bits", $bits,
			);
			assert_eq!(
				i128::from(<Width<$bits, true> as Backing>::MIN),
				-(1_i128 << ($bits - 1)),
				"signed MIN for {} bits", $bits,
			);
		)+};
	}

	#[test]
	fn ranges() {
		check_ranges!(
			 1,  2,  3,  4,  5,  6,  7,
			 9, 10, 11, 12, 13, 14, 15,
			17, 18, 19, 20, 21, 22, 23, 25, 26, 27, 28, 29, 30, 31,
			33, 34, 35, 36, 37, 38, 39, 41, 42, 43, 44, 45, 46, 47,
			49, 50, 51, 52, 53, 54, 55, 57, 58, 59, 60, 61, 62, 63,
		);
	}

	//		Storage selection
	#[test]
	fn storage__type() {
		assert_eq!(type_name::<StorageOf<1,  false>>(), "u8");
		assert_eq!(type_name::<StorageOf<7,  true>>(),  "i8");
		assert_eq!(type_name::<StorageOf<9,  false>>(), "u16");
		assert_eq!(type_name::<StorageOf<15, true>>(),  "i16");
		assert_eq!(type_name::<StorageOf<17, false>>(), "u32");
		assert_eq!(type_name::<StorageOf<31, true>>(),  "i32");
		assert_eq!(type_name::<StorageOf<33, false>>(), "u64");
		assert_eq!(type_name::<StorageOf<63, true>>(),  "i64");
	}
	#[test]
	fn storage__size() {
		assert_eq!(size_of::<UInt<1>>(),  1);
		assert_eq!(size_of::<SInt<7>>(),  1);
		assert_eq!(size_of::<UInt<12>>(), 2);
		assert_eq!(size_of::<SInt<23>>(), 4);
		assert_eq!(size_of::<UInt<41>>(), 8);
		assert_eq!(size_of::<SInt<63>>(), 8);
	}
}

mod storage {
	use super::*;

	//		BITS
	#[test]
	fn bits() {
		assert_eq!(<u8  as Storage>::BITS, 8);
		assert_eq!(<i16 as Storage>::BITS, 16);
		assert_eq!(<u32 as Storage>::BITS, 32);
		assert_eq!(<i64 as Storage>::BITS, 64);
	}

	//		SIGNED
	#[test]
	fn signed() {
		assert!(!<u8  as Storage>::SIGNED);
		assert!(!<u64 as Storage>::SIGNED);
		assert!( <i8  as Storage>::SIGNED);
		assert!( <i32 as Storage>::SIGNED);
	}

	//		to_bits
	#[test]
	fn to_bits__unsigned() {
		assert_eq!(0xAB_u8.to_bits(),       0xAB);
		assert_eq!(u16::MAX.to_bits(),      0xFFFF);
		assert_eq!(u64::MAX.to_bits(),      u64::MAX);
	}
	#[test]
	fn to_bits__signed() {
		assert_eq!(5_i8.to_bits(),          5);
		assert_eq!((-1_i8).to_bits(),       u64::MAX);
		assert_eq!(i32::MIN.to_bits(),      0xFFFF_FFFF_8000_0000);
		assert_eq!(i64::MIN.to_bits(),      1_u64 << 63);
	}

	//		from_bits
	#[test]
	fn from_bits__truncates() {
		assert_eq!(u8::from_bits(0x1FF),     u8::MAX);
		assert_eq!(u16::from_bits(0x1_0001), 1);
		assert_eq!(u32::from_bits(u64::MAX), u32::MAX);
	}
	#[test]
	fn from_bits__signed() {
		assert_eq!(i8::from_bits(0x1FF),     -1);
		assert_eq!(i8::from_bits(0x80),      i8::MIN);
		assert_eq!(i16::from_bits(0x7FFF),   i16::MAX);
		assert_eq!(i64::from_bits(u64::MAX), -1);
	}
}
