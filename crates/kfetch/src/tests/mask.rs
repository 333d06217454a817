use super::*;
use crate::ConfigMask;
use uapi::kfetch::InfoMask;

#[test]
fn test_default_selects_everything() {
    let mask = ConfigMask::default();
    assert_eq!(mask.get(), -1);
    assert_eq!(mask.selected(), InfoMask::all());
    assert_eq!(mask.selected().bits(), crate::KFETCH_FULL_INFO);
}

#[test]
fn test_set_replaces_wholesale() {
    let mask = ConfigMask::default();
    assert_eq!(mask.set(InfoMask::MEM.bits()), -1);
    assert_eq!(mask.get(), InfoMask::MEM.bits());
    assert_eq!(mask.set(0), InfoMask::MEM.bits());
    assert!(mask.selected().is_empty());
}

#[test]
fn test_unknown_bits_are_kept_but_ignored() {
    let mask = ConfigMask::new(0x100 | InfoMask::UPTIME.bits());
    assert_eq!(mask.get(), 0x100 | InfoMask::UPTIME.bits());
    assert_eq!(mask.selected(), InfoMask::UPTIME);
}

#[test]
fn test_store_full_prefix() {
    let mask = ConfigMask::default();
    let payload = (InfoMask::RELEASE | InfoMask::NUM_PROCS).to_payload();
    let (old, new) = mask.store_prefix(&payload);
    assert_eq!(old, -1);
    assert_eq!(new, 0b10_0001);
    assert_eq!(mask.get(), 0b10_0001);
}

#[test]
fn test_extra_bytes_are_ignored() {
    let mask = ConfigMask::default();
    let mut payload: Vec<u8> = 7i32.to_ne_bytes().to_vec();
    payload.extend_from_slice(&[0xff; 12]);
    mask.store_prefix(&payload);
    assert_eq!(mask.get(), 7);
}

#[test]
fn test_short_prefix_overlays_leading_bytes() {
    let mask = ConfigMask::new(0x1122_3344);
    let (old, new) = mask.store_prefix(&[0xaa]);
    assert_eq!(old, 0x1122_3344);

    let mut expected = 0x1122_3344i32.to_ne_bytes();
    expected[0] = 0xaa;
    assert_eq!(new, i32::from_ne_bytes(expected));
    assert_eq!(mask.get(), new);
}

#[test]
fn test_empty_prefix_keeps_mask() {
    let mask = ConfigMask::new(5);
    assert_eq!(mask.store_prefix(&[]), (5, 5));
    assert_eq!(mask.get(), 5);
}
