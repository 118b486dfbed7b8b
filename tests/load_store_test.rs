//! Tests for LDX, LDY and the store instructions (STA, STX, STY).
//!
//! Stores never pay the page-crossing penalty: their table cycles are
//! already the worst case.

use mos6502::{CPU, FlatMemory};

fn setup(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new();
    cpu.load_program(program);
    cpu.set_reset_vector(0x0600);
    cpu.reset();
    cpu
}

// ========== LDX ==========

#[test]
fn test_ldx_immediate() {
    let mut cpu = setup(&[0xA2, 0x42]); // LDX #$42

    let cycles = cpu.step();

    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cycles, 2);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup(&[0xB6, 0x10]); // LDX $10,Y
    cpu.set_y(0x04);
    cpu.write_memory(0x0014, 0x80);

    let cycles = cpu.step();

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cycles, 4);
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    let mut cpu = setup(&[0xBE, 0xF0, 0x10]); // LDX $10F0,Y
    cpu.set_y(0x20);
    cpu.write_memory(0x1110, 0x01);

    let cycles = cpu.step();

    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cycles, 5);
}

// ========== LDY ==========

#[test]
fn test_ldy_immediate_zero() {
    let mut cpu = setup(&[0xA0, 0x00]); // LDY #$00
    cpu.set_y(0x11);

    cpu.step();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_ldy_absolute_x_page_cross() {
    let mut cpu = setup(&[0xBC, 0xFF, 0x20]); // LDY $20FF,X
    cpu.set_x(0x01);
    cpu.write_memory(0x2100, 0x33);

    let cycles = cpu.step();

    assert_eq!(cpu.y(), 0x33);
    assert_eq!(cycles, 5);
}

// ========== STA ==========

#[test]
fn test_sta_zero_page() {
    let mut cpu = setup(&[0x85, 0x10]); // STA $10
    cpu.set_a(0x42);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0010), 0x42);
    assert_eq!(cycles, 3);
}

#[test]
fn test_sta_does_not_touch_flags() {
    let mut cpu = setup(&[0x85, 0x10]); // STA $10
    cpu.set_a(0x00);
    cpu.set_flag_z(false);
    cpu.set_flag_n(true);

    cpu.step();

    // Storing zero leaves flags alone
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_sta_absolute() {
    let mut cpu = setup(&[0x8D, 0x00, 0x04]); // STA $0400
    cpu.set_a(0x9A);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0400), 0x9A);
    assert_eq!(cycles, 4);
}

#[test]
fn test_sta_absolute_x_always_worst_case_cycles() {
    // No crossing: still 5 cycles
    let mut cpu = setup(&[0x9D, 0x00, 0x04]); // STA $0400,X
    cpu.set_a(0x01);
    cpu.set_x(0x10);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0410), 0x01);
    assert_eq!(cycles, 5);

    // Crossing: the same 5 cycles, no penalty on top
    let mut cpu = setup(&[0x9D, 0xFF, 0x04]); // STA $04FF,X
    cpu.set_a(0x02);
    cpu.set_x(0x01);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0500), 0x02);
    assert_eq!(cycles, 5);
}

#[test]
fn test_sta_indirect_y_fixed_six_cycles() {
    let mut cpu = setup(&[0x91, 0x40]); // STA ($40),Y
    cpu.set_a(0x7E);
    cpu.set_y(0x01);
    cpu.write_memory(0x0040, 0xFF);
    cpu.write_memory(0x0041, 0x21); // base $21FF, crossing into $2200

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x2200), 0x7E);
    assert_eq!(cycles, 6);
}

// ========== STX / STY ==========

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = setup(&[0x96, 0xF0]); // STX $F0,Y
    cpu.set_x(0x31);
    cpu.set_y(0x20); // $F0 + $20 wraps to $10

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0010), 0x31);
    assert_eq!(cycles, 4);
}

#[test]
fn test_sty_absolute() {
    let mut cpu = setup(&[0x8C, 0x00, 0x02]); // STY $0200
    cpu.set_y(0x44);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x0200), 0x44);
    assert_eq!(cycles, 4);
}
