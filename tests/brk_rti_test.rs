//! Tests for BRK and RTI: the software interrupt round trip.
//!
//! BRK pushes PC+2 (the byte after BRK is a phantom operand) and a status
//! copy with B=1; RTI restores status (B discarded, U forced) and resumes
//! at the pushed address.

use mos6502::{CPU, FlatMemory};

fn setup(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new();
    cpu.load_program(program);
    cpu.set_reset_vector(0x0600);
    cpu.reset();
    cpu
}

#[test]
fn test_brk_pushes_pc_plus_two() {
    // BRK at $0600 followed by a phantom byte
    let mut cpu = setup(&[0x00, 0xAA]);
    cpu.set_irq_vector(0x0650);

    let cycles = cpu.step();

    assert_eq!(cpu.pc(), 0x0650);
    assert_eq!(cycles, 7);
    // Pushed return address is $0602, not $0601
    assert_eq!(cpu.read_memory(0x01FD), 0x06);
    assert_eq!(cpu.read_memory(0x01FC), 0x02);
}

#[test]
fn test_brk_pushes_status_with_b_set() {
    let mut cpu = setup(&[0x00, 0xAA]);
    cpu.set_irq_vector(0x0650);

    cpu.step();

    // Live status at reset is $24 (U|I); the pushed copy adds B
    assert_eq!(cpu.read_memory(0x01FB), 0x34);
    // The live register never shows B
    assert_eq!(cpu.status() & 0b0001_0000, 0);
}

#[test]
fn test_brk_sets_interrupt_disable() {
    let mut cpu = setup(&[0x58, 0x00, 0xAA]); // CLI; BRK
    cpu.set_irq_vector(0x0650);

    cpu.step(); // CLI
    assert!(!cpu.flag_i());

    cpu.step(); // BRK

    assert!(cpu.flag_i());
}

#[test]
fn test_brk_then_rti_resumes_after_phantom_byte() {
    let mut cpu = setup(&[0x00, 0xAA]); // BRK + phantom
    cpu.set_irq_vector(0x0650);
    cpu.write_memory(0x0650, 0x40); // RTI

    cpu.step(); // BRK
    let cycles = cpu.step(); // RTI

    assert_eq!(cpu.pc(), 0x0602);
    assert_eq!(cycles, 6);
    assert_eq!(cpu.sp(), 0xFD); // stack balanced
}

#[test]
fn test_rti_restores_flags_from_stack() {
    // Handler sets flags, RTI restores the pre-BRK picture
    let mut cpu = setup(&[0x38, 0x00, 0xAA]); // SEC; BRK
    cpu.set_irq_vector(0x0650);
    // Handler: CLC; RTI
    cpu.load_program_at(&[0x18, 0x40], 0x0650);

    cpu.step(); // SEC
    cpu.step(); // BRK
    cpu.step(); // CLC inside the handler
    assert!(!cpu.flag_c());

    cpu.step(); // RTI

    assert!(cpu.flag_c()); // carry restored from the pushed copy
    assert_eq!(cpu.pc(), 0x0603);
}

#[test]
fn test_rti_uses_pulled_pc_verbatim() {
    // Hand-build a stack frame: status, then PCL, PCH for $1234
    let mut cpu = setup(&[0x40]); // RTI
    cpu.set_sp(0xFA);
    cpu.write_memory(0x01FB, 0x20); // status: U only
    cpu.write_memory(0x01FC, 0x34); // PCL
    cpu.write_memory(0x01FD, 0x12); // PCH

    cpu.step();

    assert_eq!(cpu.pc(), 0x1234); // no +1, unlike RTS
    assert_eq!(cpu.sp(), 0xFD);
    assert!(!cpu.flag_i()); // pulled status had I clear
}
