//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND / ORA / EOR: Bitwise logic on the accumulator
//! - CMP / CPX / CPY: Register comparisons
//! - BIT: Bit test
//!
//! ADC and SBC share one binary adder ([`CPU::add_with_carry`]); SBC feeds it
//! the one's complement of the operand, which gives the 6502's carry-as-
//! not-borrow convention for free. The D flag is a visible bit only and
//! never switches the adder into BCD mode.

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// Flags: C on unsigned overflow, V on signed overflow, N and Z from the
/// result. Read-type: +1 cycle when the address computation crosses a page.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);
    cpu.add_with_carry(value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32 + page_crossed as u32
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand from the accumulator with borrow: equivalent to
/// adding the operand's complement, so C=1 afterwards means no borrow
/// occurred. Same flag behavior as ADC.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);
    cpu.add_with_carry(value ^ 0xFF);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32 + page_crossed as u32
}

/// Executes the AND (Logical AND) instruction.
///
/// Bitwise AND between the accumulator and the operand. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);
    cpu.a &= value;
    let result = cpu.a;
    cpu.set_nz(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32 + page_crossed as u32
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Bitwise OR between the accumulator and the operand. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);
    cpu.a |= value;
    let result = cpu.a;
    cpu.set_nz(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32 + page_crossed as u32
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Bitwise XOR between the accumulator and the operand. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);
    cpu.a ^= value;
    let result = cpu.a;
    cpu.set_nz(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32 + page_crossed as u32
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Computes A - operand without storing the result: C is set when
/// A >= operand, N and Z come from the 8-bit difference.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);
    let reg = cpu.a;
    cpu.compare(reg, value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32 + page_crossed as u32
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    // Immediate, zero page or absolute only; no indexed modes, so the
    // page-cross signal is always false.
    let (value, _) = cpu.get_operand_value(metadata.addressing_mode);
    let reg = cpu.x;
    cpu.compare(reg, value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, _) = cpu.get_operand_value(metadata.addressing_mode);
    let reg = cpu.y;
    cpu.compare(reg, value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32
}

/// Executes the BIT (Bit Test) instruction.
///
/// Tests memory against the accumulator without modifying either:
/// - Z: set if A AND operand is zero
/// - N: copied from bit 7 of the operand
/// - V: copied from bit 6 of the operand
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, _) = cpu.get_operand_value(metadata.addressing_mode);

    cpu.flag_z = cpu.a & value == 0;
    cpu.flag_n = value & 0b1000_0000 != 0;
    cpu.flag_v = value & 0b0100_0000 != 0;

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32
}
