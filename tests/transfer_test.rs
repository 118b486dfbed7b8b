//! Tests for the register transfer instructions: TAX, TAY, TXA, TYA,
//! TSX, TXS.

use mos6502::{CPU, FlatMemory};

fn setup(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new();
    cpu.load_program(program);
    cpu.set_reset_vector(0x0600);
    cpu.reset();
    cpu
}

#[test]
fn test_tax() {
    let mut cpu = setup(&[0xAA]); // TAX
    cpu.set_a(0x42);

    let cycles = cpu.step();

    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cycles, 2);
}

#[test]
fn test_tax_zero_flag() {
    let mut cpu = setup(&[0xAA]);
    cpu.set_a(0x00);
    cpu.set_x(0x10);

    cpu.step();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_tay_negative_flag() {
    let mut cpu = setup(&[0xA8]); // TAY
    cpu.set_a(0x80);

    cpu.step();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_txa() {
    let mut cpu = setup(&[0x8A]); // TXA
    cpu.set_x(0x33);

    cpu.step();

    assert_eq!(cpu.a(), 0x33);
}

#[test]
fn test_tya() {
    let mut cpu = setup(&[0x98]); // TYA
    cpu.set_y(0x44);

    cpu.step();

    assert_eq!(cpu.a(), 0x44);
}

#[test]
fn test_tsx_sets_flags() {
    let mut cpu = setup(&[0xBA]); // TSX

    cpu.step();

    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n()); // 0xFD has bit 7 set
}

#[test]
fn test_txs_does_not_touch_flags() {
    let mut cpu = setup(&[0x9A]); // TXS
    cpu.set_x(0x00);
    cpu.set_flag_z(false);
    cpu.set_flag_n(true);

    cpu.step();

    assert_eq!(cpu.sp(), 0x00);
    // Transferring zero did not set Z, nor clear N
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_tsx_round_trip() {
    let mut cpu = setup(&[0x9A, 0xBA]); // TXS; TSX
    cpu.set_x(0x5E);

    cpu.step();
    cpu.set_x(0x00);
    cpu.step();

    assert_eq!(cpu.x(), 0x5E);
    assert_eq!(cpu.sp(), 0x5E);
}
