//! Tests for the stack instructions: PHA, PLA, PHP, PLP.
//!
//! Also covers the stack-page confinement boundary: the stack pointer wraps
//! within $0100-$01FF and never escapes the page.

use mos6502::{CPU, FlatMemory};

fn setup(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new();
    cpu.load_program(program);
    cpu.set_reset_vector(0x0600);
    cpu.reset();
    cpu
}

#[test]
fn test_pha_pushes_accumulator() {
    let mut cpu = setup(&[0x48]); // PHA
    cpu.set_a(0x42);

    let cycles = cpu.step();

    assert_eq!(cpu.read_memory(0x01FD), 0x42);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cycles, 3);
}

#[test]
fn test_pha_pla_round_trip() {
    // PHA; LDA #$00; PLA
    let mut cpu = setup(&[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x80);

    cpu.step();
    cpu.step();
    assert_eq!(cpu.a(), 0x00);

    let cycles = cpu.step(); // PLA

    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_n()); // flags follow the pulled value
    assert!(!cpu.flag_z());
    assert_eq!(cycles, 4);
}

#[test]
fn test_pla_sets_zero_flag() {
    let mut cpu = setup(&[0x48, 0xA9, 0xFF, 0x68]); // PHA; LDA #$FF; PLA
    cpu.set_a(0x00);

    cpu.step();
    cpu.step();
    cpu.step();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_php_pushes_with_b_and_u_set() {
    let mut cpu = setup(&[0x08]); // PHP
    cpu.set_flag_c(true);
    cpu.set_flag_z(true);

    let cycles = cpu.step();

    // Live status is U|I|Z|C = 0x27; pushed copy adds B -> 0x37
    assert_eq!(cpu.read_memory(0x01FD), 0x37);
    assert_eq!(cycles, 3);
}

#[test]
fn test_php_plp_round_trip_preserves_flags() {
    let mut cpu = setup(&[0x08, 0x28]); // PHP; PLP
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_flag_z(false);
    cpu.set_flag_i(false);
    let status_before = cpu.status();

    cpu.step();

    // Scramble, then restore
    cpu.set_flag_n(false);
    cpu.set_flag_v(false);
    cpu.set_flag_c(false);

    let cycles = cpu.step(); // PLP

    assert_eq!(cpu.status(), status_before);
    assert_eq!(cycles, 4);
}

#[test]
fn test_plp_discards_b_and_forces_u() {
    let mut cpu = setup(&[0x28]); // PLP
    // Hand-craft a stack byte with B set and U clear
    cpu.write_memory(0x01FE, 0b1101_0011);
    cpu.set_sp(0xFD);

    cpu.step();

    // N V set, D clear, I clear, Z set, C set; B gone, U forced
    assert_eq!(cpu.status(), 0b1110_0011);
}

#[test]
fn test_push_at_sp_zero_wraps_to_ff() {
    let mut cpu = setup(&[0x48]); // PHA
    cpu.set_sp(0x00);
    cpu.set_a(0xAB);

    cpu.step();

    assert_eq!(cpu.read_memory(0x0100), 0xAB);
    assert_eq!(cpu.sp(), 0xFF);
    // Nothing leaks outside the stack page
    assert_eq!(cpu.read_memory(0x0200), 0x00);
    assert_eq!(cpu.read_memory(0x00FF), 0x00);
}

#[test]
fn test_pull_at_sp_ff_wraps_to_zero() {
    let mut cpu = setup(&[0x68]); // PLA
    cpu.set_sp(0xFF);
    cpu.write_memory(0x0100, 0x5C);

    cpu.step();

    assert_eq!(cpu.a(), 0x5C);
    assert_eq!(cpu.sp(), 0x00);
}

#[test]
fn test_push_pull_sequence_restores_in_reverse_order() {
    // PHA x3 with different values, then PLA x3
    let mut cpu = setup(&[
        0xA9, 0x01, 0x48, // LDA #$01; PHA
        0xA9, 0x02, 0x48, // LDA #$02; PHA
        0xA9, 0x03, 0x48, // LDA #$03; PHA
        0x68, 0x85, 0x10, // PLA; STA $10
        0x68, 0x85, 0x11, // PLA; STA $11
        0x68, 0x85, 0x12, // PLA; STA $12
        0x02, // HLT
    ]);

    cpu.run(1000);

    assert_eq!(cpu.read_memory(0x0010), 0x03);
    assert_eq!(cpu.read_memory(0x0011), 0x02);
    assert_eq!(cpu.read_memory(0x0012), 0x01);
    assert_eq!(cpu.sp(), 0xFD);
}
