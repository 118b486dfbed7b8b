//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads are read-type and pay the +1 page-crossing penalty in their
//! indexed modes. Stores never do: their table cycles are already the
//! worst case (the hardware always performs the extra address fix-up read).

use crate::{MemoryBus, CPU, OPCODE_TABLE};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);
    cpu.a = value;
    cpu.set_nz(value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32 + page_crossed as u32
}

/// Executes the LDX (Load X Register) instruction.
///
/// Loads a byte of memory into the X register. Updates Z and N.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);
    cpu.x = value;
    cpu.set_nz(value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32 + page_crossed as u32
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Loads a byte of memory into the Y register. Updates Z and N.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (value, page_crossed) = cpu.get_operand_value(metadata.addressing_mode);
    cpu.y = value;
    cpu.set_nz(value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32 + page_crossed as u32
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the accumulator into memory. No flags are affected, and the
/// page-cross signal is ignored: STA abs,X / abs,Y / (ind),Y always take
/// their full table cycles.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.get_effective_address(metadata.addressing_mode);
    cpu.memory.write(addr, cpu.a);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32
}

/// Executes the STX (Store X Register) instruction.
///
/// Stores the X register into memory. No flags are affected.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.get_effective_address(metadata.addressing_mode);
    cpu.memory.write(addr, cpu.x);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32
}

/// Executes the STY (Store Y Register) instruction.
///
/// Stores the Y register into memory. No flags are affected.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let (addr, _) = cpu.get_effective_address(metadata.addressing_mode);
    cpu.memory.write(addr, cpu.y);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32
}
