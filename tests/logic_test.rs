//! Tests for the bitwise instructions: AND, ORA, EOR and BIT.

use mos6502::{CPU, FlatMemory};

fn setup(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new();
    cpu.load_program(program);
    cpu.set_reset_vector(0x0600);
    cpu.reset();
    cpu
}

// ========== AND ==========

#[test]
fn test_and_immediate() {
    let mut cpu = setup(&[0x29, 0x0F]); // AND #$0F
    cpu.set_a(0x3C);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x0C);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cycles, 2);
}

#[test]
fn test_and_zero_result() {
    let mut cpu = setup(&[0x29, 0x0F]);
    cpu.set_a(0xF0);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_and_negative_result() {
    let mut cpu = setup(&[0x29, 0xF0]);
    cpu.set_a(0x80);

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
}

#[test]
fn test_and_absolute_y_page_cross() {
    let mut cpu = setup(&[0x39, 0xFF, 0x10]); // AND $10FF,Y
    cpu.set_a(0xFF);
    cpu.set_y(0x01);
    cpu.write_memory(0x1100, 0xAA);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0xAA);
    assert_eq!(cycles, 5);
}

// ========== ORA ==========

#[test]
fn test_ora_immediate() {
    let mut cpu = setup(&[0x09, 0x0F]); // ORA #$0F
    cpu.set_a(0xF0);

    cpu.step();

    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_ora_zero_result() {
    let mut cpu = setup(&[0x09, 0x00]);
    cpu.set_a(0x00);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_ora_indirect_x() {
    let mut cpu = setup(&[0x01, 0x20]); // ORA ($20,X)
    cpu.set_a(0x01);
    cpu.set_x(0x04);
    cpu.write_memory(0x0024, 0x00);
    cpu.write_memory(0x0025, 0x03);
    cpu.write_memory(0x0300, 0x82);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x83);
    assert_eq!(cycles, 6);
}

// ========== EOR ==========

#[test]
fn test_eor_immediate() {
    let mut cpu = setup(&[0x49, 0xFF]); // EOR #$FF
    cpu.set_a(0x0F);

    cpu.step();

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_eor_self_clears_accumulator() {
    let mut cpu = setup(&[0x45, 0x10]); // EOR $10
    cpu.set_a(0x5A);
    cpu.write_memory(0x0010, 0x5A);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

// ========== BIT ==========

#[test]
fn test_bit_sets_z_from_mask() {
    let mut cpu = setup(&[0x24, 0x10]); // BIT $10
    cpu.set_a(0x0F);
    cpu.write_memory(0x0010, 0xF0);

    let cycles = cpu.step();

    // A is untouched; Z from A & M == 0
    assert_eq!(cpu.a(), 0x0F);
    assert!(cpu.flag_z());
    assert_eq!(cycles, 3);
}

#[test]
fn test_bit_copies_high_bits_to_n_and_v() {
    let mut cpu = setup(&[0x24, 0x10]); // BIT $10
    cpu.set_a(0xFF);
    cpu.write_memory(0x0010, 0xC0); // bits 7 and 6 set

    cpu.step();

    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_z());
}

#[test]
fn test_bit_absolute_only_bit6() {
    let mut cpu = setup(&[0x2C, 0x00, 0x03]); // BIT $0300
    cpu.set_a(0xFF);
    cpu.write_memory(0x0300, 0x40);

    let cycles = cpu.step();

    assert!(!cpu.flag_n());
    assert!(cpu.flag_v());
    assert_eq!(cycles, 4);
}
