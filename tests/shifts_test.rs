//! Tests for the shift and rotate instructions: ASL, LSR, ROL, ROR.
//!
//! Covers both accumulator and memory (read-modify-write) forms. RMW
//! instructions always take their worst-case cycles: no page-cross penalty.

use mos6502::{CPU, FlatMemory};

fn setup(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new();
    cpu.load_program(program);
    cpu.set_reset_vector(0x0600);
    cpu.reset();
    cpu
}

// ========== ASL ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup(&[0x0A]); // ASL A
    cpu.set_a(0x41);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x82);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cycles, 2);
}

#[test]
fn test_asl_carry_out() {
    let mut cpu = setup(&[0x0A]); // ASL A
    cpu.set_a(0x80);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_asl_zero_page_rmw() {
    let mut cpu = setup(&[0x06, 0x10]); // ASL $10
    cpu.write_memory(0x0010, 0x55);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0010), 0xAA);
    assert!(cpu.flag_n());
    assert_eq!(cycles, 5);
}

#[test]
fn test_asl_absolute_x_fixed_seven_cycles() {
    // Crossing a page changes nothing for RMW
    let mut cpu = setup(&[0x1E, 0xFF, 0x02]); // ASL $02FF,X
    cpu.set_x(0x01);
    cpu.write_memory(0x0300, 0x01);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0300), 0x02);
    assert_eq!(cycles, 7);
}

// ========== LSR ==========

#[test]
fn test_lsr_accumulator() {
    let mut cpu = setup(&[0x4A]); // LSR A
    cpu.set_a(0x03);

    let cycles = cpu.step();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c()); // bit 0 shifted out
    assert!(!cpu.flag_n()); // LSR can never produce a negative
    assert_eq!(cycles, 2);
}

#[test]
fn test_lsr_to_zero() {
    let mut cpu = setup(&[0x4A]);
    cpu.set_a(0x01);

    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_lsr_memory() {
    let mut cpu = setup(&[0x46, 0x20]); // LSR $20
    cpu.write_memory(0x0020, 0xFE);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0020), 0x7F);
    assert!(!cpu.flag_c());
    assert_eq!(cycles, 5);
}

// ========== ROL ==========

#[test]
fn test_rol_rotates_carry_into_bit0() {
    let mut cpu = setup(&[0x2A]); // ROL A
    cpu.set_a(0x80);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flag_c()); // old bit 7
}

#[test]
fn test_rol_without_carry() {
    let mut cpu = setup(&[0x2A]);
    cpu.set_a(0x40);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_rol_memory() {
    let mut cpu = setup(&[0x26, 0x30]); // ROL $30
    cpu.write_memory(0x0030, 0x55);
    cpu.set_flag_c(true);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0030), 0xAB);
    assert_eq!(cycles, 5);
}

// ========== ROR ==========

#[test]
fn test_ror_rotates_carry_into_bit7() {
    let mut cpu = setup(&[0x6A]); // ROR A
    cpu.set_a(0x01);
    cpu.set_flag_c(true);

    cpu.step();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_c()); // old bit 0
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_without_carry() {
    let mut cpu = setup(&[0x6A]);
    cpu.set_a(0x02);
    cpu.set_flag_c(false);

    cpu.step();

    assert_eq!(cpu.a(), 0x01);
    assert!(!cpu.flag_c());
}

#[test]
fn test_ror_memory_absolute() {
    let mut cpu = setup(&[0x6E, 0x00, 0x03]); // ROR $0300
    cpu.write_memory(0x0300, 0x03);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0300), 0x01);
    assert!(cpu.flag_c());
    assert_eq!(cycles, 6);
}

#[test]
fn test_rol_ror_round_trip() {
    // ROL then ROR with a stable carry restores the value
    let mut cpu = setup(&[0x2A, 0x6A]); // ROL A; ROR A
    cpu.set_a(0x5A);
    cpu.set_flag_c(false);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.a(), 0x5A);
}
