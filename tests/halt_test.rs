//! Tests for the unofficial HLT ($02) opcode and illegal-opcode dispatch.

use mos6502::{CPU, FlatMemory};

fn setup(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new();
    cpu.load_program(program);
    cpu.set_reset_vector(0x0600);
    cpu.reset();
    cpu
}

#[test]
fn test_hlt_latches_halt_and_consumes_no_cycles() {
    let mut cpu = setup(&[0x02]);

    let cycles = cpu.step();

    assert!(cpu.is_halted());
    assert_eq!(cycles, 0);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_halted_cpu_steps_for_zero_cycles() {
    let mut cpu = setup(&[0x02, 0xEA]);

    cpu.step();
    let pc = cpu.pc();

    // Further steps are inert
    assert_eq!(cpu.step(), 0);
    assert_eq!(cpu.step(), 0);
    assert_eq!(cpu.pc(), pc);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_run_stops_at_halt() {
    let mut cpu = setup(&[0xEA, 0xEA, 0x02, 0xEA]); // NOP; NOP; HLT; NOP

    let consumed = cpu.run(1000);

    assert_eq!(consumed, 4); // two NOPs, then the free HLT
    assert!(cpu.is_halted());
}

#[test]
fn test_illegal_opcodes_execute_as_two_cycle_nops() {
    // 0x03 and 0xFF are undocumented; both should step like NOP
    let mut cpu = setup(&[0x03, 0xFF, 0xEA]);

    let cycles = cpu.step();
    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc(), 0x0601);
    assert!(!cpu.is_halted());

    let cycles = cpu.step();
    assert_eq!(cycles, 2);
    assert_eq!(cpu.pc(), 0x0602);

    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn test_illegal_opcode_touches_no_state() {
    let mut cpu = setup(&[0x44, 0x42]); // undocumented; operand-looking byte
    cpu.set_a(0x11);
    cpu.set_flag_c(true);
    let status = cpu.status();
    let sp = cpu.sp();

    cpu.step();

    // Treated as a 1-byte NOP: the $42 is the next opcode, not an operand
    assert_eq!(cpu.pc(), 0x0601);
    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.status(), status);
    assert_eq!(cpu.sp(), sp);
}

#[test]
fn test_reset_clears_halt_latch() {
    let mut cpu = setup(&[0x02]);

    cpu.step();
    assert!(cpu.is_halted());

    cpu.reset();

    assert!(!cpu.is_halted());
    assert_eq!(cpu.step(), 0); // HLT again from the vector
    assert!(cpu.is_halted());
}
