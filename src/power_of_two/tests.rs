use super::{is_power_of_two, round_up_to_power_of_two};

#[test]
fn detects_single_bit() {
    for shift in 0..64 {
        assert!(is_power_of_two(1u64 << shift));
    }
    assert!(!is_power_of_two(3u8));
    assert!(!is_power_of_two(6u16));
    assert!(!is_power_of_two(u32::MAX));
    assert!(!is_power_of_two((1usize << 20) + 1));
}

#[test]
fn zero_passes_bit_trick() {
    assert!(is_power_of_two(0u32));
    assert_eq!(round_up_to_power_of_two(0u32), 0);
}

#[test]
fn keeps_powers_of_two() {
    assert_eq!(round_up_to_power_of_two(1usize), 1);
    assert_eq!(round_up_to_power_of_two(2usize), 2);
    assert_eq!(round_up_to_power_of_two(64u8), 64);
    assert_eq!(round_up_to_power_of_two(1u128 << 100), 1u128 << 100);
}

#[test]
fn rounds_up() {
    assert_eq!(round_up_to_power_of_two(3usize), 4);
    assert_eq!(round_up_to_power_of_two(5usize), 8);
    assert_eq!(round_up_to_power_of_two(17u16), 32);
    assert_eq!(round_up_to_power_of_two(127u8), 128);
    assert_eq!(round_up_to_power_of_two((1u64 << 40) + 1), 1u64 << 41);
    assert_eq!(round_up_to_power_of_two(u32::MAX >> 1), 1u32 << 31);
}

#[test]
fn agrees_with_std() {
    for value in 1..5000usize {
        assert_eq!(
            round_up_to_power_of_two(value),
            value.next_power_of_two(),
            "value = {}",
            value
        );
    }
}
