use proptest::prelude::*;

use polychain_client::utils::{ensure_0x, hex_to_u128, hex_to_u64, strip_0x, u128_to_hex, u64_to_hex};

proptest! {
	#[test]
	fn u64_hex_round_trip(value in any::<u64>()) {
		prop_assert_eq!(hex_to_u64(&u64_to_hex(value)).unwrap(), value);
	}

	#[test]
	fn u128_hex_round_trip(value in any::<u128>()) {
		prop_assert_eq!(hex_to_u128(&u128_to_hex(value)).unwrap(), value);
	}

	#[test]
	fn encoded_quantities_carry_prefix(value in any::<u64>()) {
		prop_assert!(u64_to_hex(value).starts_with("0x"));
	}

	#[test]
	fn ensure_0x_is_idempotent(hex in "[0-9a-f]{1,64}") {
		let once = ensure_0x(&hex);
		prop_assert_eq!(ensure_0x(&once), once.clone());
		prop_assert_eq!(once, format!("0x{}", hex));
	}

	#[test]
	fn strip_inverts_ensure(hex in "[0-9a-f]{1,64}") {
		let prefixed = ensure_0x(&hex);
		prop_assert_eq!(strip_0x(&prefixed), hex.as_str());
	}

	#[test]
	fn parse_accepts_both_prefixed_and_bare(value in any::<u64>()) {
		let prefixed = u64_to_hex(value);
		let bare = strip_0x(&prefixed).to_string();
		prop_assert_eq!(hex_to_u64(&bare).unwrap(), value);
	}
}
