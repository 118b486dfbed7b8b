//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump (absolute and indirect, with the indirect page-wrap bug)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return
//! - NOP: No operation (also the behavior of every illegal opcode)
//! - HLT: The unofficial `$02` halt opcode

use log::debug;

use crate::cpu::IRQ_VECTOR;
use crate::{AddressingMode, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK runs the common interrupt sequence with two quirks of its own:
/// the pushed return address is PC+2 even though BRK encodes as a single
/// byte (the byte after BRK is a phantom operand that RTI skips), and the
/// pushed status copy carries B=1 so a handler can tell BRK from a hardware
/// IRQ. The live I flag is set and PC is loaded from the IRQ/BRK vector.
///
/// Cycle timing: 7 cycles (fixed)
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>, _opcode: u8) -> u32 {
    let return_pc = cpu.pc.wrapping_add(2);
    cpu.interrupt_sequence(return_pc, IRQ_VECTOR, true)
}

/// Executes the JMP (Jump) instruction.
///
/// Sets the program counter to the operand address. No flags or stack
/// involvement.
///
/// Addressing modes:
/// - Absolute (0x4C): 3 cycles
/// - Indirect (0x6C): 5 cycles
///
/// The indirect mode reproduces the NMOS hardware bug: when the pointer's
/// low byte is $FF, the target's high byte is fetched from offset $00 of the
/// *same* page. JMP ($30FF) reads the low byte from $30FF and the high byte
/// from $3000, not $3100.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = match metadata.addressing_mode {
        AddressingMode::Absolute => cpu.read_word(cpu.pc.wrapping_add(1)),
        AddressingMode::Indirect => {
            let ptr = cpu.read_word(cpu.pc.wrapping_add(1));

            let lo = cpu.memory.read(ptr) as u16;
            let hi_addr = if ptr & 0x00FF == 0x00FF {
                ptr & 0xFF00 // wrap within the pointer's page
            } else {
                ptr.wrapping_add(1)
            };
            let hi = cpu.memory.read(hi_addr) as u16;

            (hi << 8) | lo
        }
        _ => unreachable!("JMP only decodes as Absolute or Indirect"),
    };

    cpu.pc = target;
    metadata.base_cycles as u32
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (PC+2, high byte first)
/// and jumps to the absolute operand. RTS adds 1 when pulling, landing on
/// the instruction after the JSR.
///
/// Cycle timing: 6 cycles
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let target = cpu.read_word(cpu.pc.wrapping_add(1));
    let return_addr = cpu.pc.wrapping_add(2);

    cpu.push((return_addr >> 8) as u8);
    cpu.push(return_addr as u8);

    cpu.pc = target;
    metadata.base_cycles as u32
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and adds 1, undoing the JSR
/// convention of pushing the address of its own last byte.
///
/// Cycle timing: 6 cycles
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);

    metadata.base_cycles as u32
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (B discarded, U forced to 1), then the return
/// address (low byte first). Unlike RTS, the address is used verbatim - the
/// interrupt sequence pushed the exact resume point.
///
/// Cycle timing: 6 cycles
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let status = cpu.pull();
    cpu.set_status(status);

    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = (hi << 8) | lo;

    metadata.base_cycles as u32
}

/// Executes the NOP (No Operation) instruction.
///
/// Also the dispatch target for every illegal opcode other than `$02`: the
/// table gives those the same 2-cycle, 1-byte shape, so they fall through
/// here and execute as NOPs.
pub(crate) fn execute_nop<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    metadata.base_cycles as u32
}

/// Executes the unofficial HLT (`$02`) instruction.
///
/// Latches the halt state: every subsequent step() returns 0 until a reset.
/// The HLT itself consumes no cycles; observers see the stop through
/// [`CPU::is_halted`].
pub(crate) fn execute_hlt<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) -> u32 {
    let metadata = &OPCODE_TABLE[opcode as usize];

    cpu.halted = true;
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    debug!("halted at {:04X}", cpu.pc);
    0
}
