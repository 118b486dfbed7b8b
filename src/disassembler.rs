//! # Disassembler
//!
//! Single-instruction decoding and formatting, driven by the same
//! `OPCODE_TABLE` the dispatcher uses so the two can never disagree.
//!
//! The CPU's trace logging runs every executed instruction through
//! [`disassemble`]; embedders can also call it directly when building
//! debugger views.
//!
//! ```
//! use mos6502::{disassemble, FlatMemory, MemoryBus};
//!
//! let mut mem = FlatMemory::new();
//! mem.write(0x0600, 0xA9); // LDA #$42
//! mem.write(0x0601, 0x42);
//!
//! let instr = disassemble(&mem, 0x0600).unwrap();
//! assert_eq!(instr.to_string(), "0600  LDA #$42");
//! ```

use std::fmt;

use crate::{AddressingMode, MemoryBus, OPCODE_TABLE};

/// A decoded instruction: opcode metadata plus the operand bytes read at a
/// specific address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address of the opcode byte.
    pub address: u16,

    /// The opcode byte itself.
    pub opcode: u8,

    /// Instruction mnemonic from the opcode table.
    pub mnemonic: &'static str,

    /// Addressing mode from the opcode table.
    pub addressing_mode: AddressingMode,

    /// Operand bytes (low first; unused positions are zero).
    pub operand: [u8; 2],

    /// Total instruction size in bytes (1-3).
    pub size_bytes: u8,
}

impl Instruction {
    /// The 16-bit operand, assembled little-endian from the operand bytes.
    pub fn operand_word(&self) -> u16 {
        (self.operand[1] as u16) << 8 | self.operand[0] as u16
    }

    /// The branch target for relative addressing, measured from the end of
    /// the instruction.
    fn branch_target(&self) -> u16 {
        self.address
            .wrapping_add(self.size_bytes as u16)
            .wrapping_add_signed(self.operand[0] as i8 as i16)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}  {}", self.address, self.mnemonic)?;

        match self.addressing_mode {
            AddressingMode::Implicit => Ok(()),
            AddressingMode::Accumulator => write!(f, " A"),
            AddressingMode::Immediate => write!(f, " #${:02X}", self.operand[0]),
            AddressingMode::ZeroPage => write!(f, " ${:02X}", self.operand[0]),
            AddressingMode::ZeroPageX => write!(f, " ${:02X},X", self.operand[0]),
            AddressingMode::ZeroPageY => write!(f, " ${:02X},Y", self.operand[0]),
            AddressingMode::Relative => write!(f, " ${:04X}", self.branch_target()),
            AddressingMode::Absolute => write!(f, " ${:04X}", self.operand_word()),
            AddressingMode::AbsoluteX => write!(f, " ${:04X},X", self.operand_word()),
            AddressingMode::AbsoluteY => write!(f, " ${:04X},Y", self.operand_word()),
            AddressingMode::Indirect => write!(f, " (${:04X})", self.operand_word()),
            AddressingMode::IndirectX => write!(f, " (${:02X},X)", self.operand[0]),
            AddressingMode::IndirectY => write!(f, " (${:02X}),Y", self.operand[0]),
        }
    }
}

/// Decodes the instruction at `addr`.
///
/// Returns `None` for illegal opcodes (the dispatcher executes those as
/// NOPs, but they have no assembly form). Operand reads wrap modulo 2^16
/// like every other memory access.
pub fn disassemble<M: MemoryBus>(bus: &M, addr: u16) -> Option<Instruction> {
    let opcode = bus.read(addr);
    let metadata = &OPCODE_TABLE[opcode as usize];

    if metadata.mnemonic == "???" {
        return None;
    }

    let mut operand = [0u8; 2];
    for (i, slot) in operand
        .iter_mut()
        .enumerate()
        .take(metadata.size_bytes as usize - 1)
    {
        *slot = bus.read(addr.wrapping_add(1 + i as u16));
    }

    Some(Instruction {
        address: addr,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand,
        size_bytes: metadata.size_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn decode(bytes: &[u8]) -> Instruction {
        let mut mem = FlatMemory::new();
        for (i, &b) in bytes.iter().enumerate() {
            mem.write(0x0600 + i as u16, b);
        }
        disassemble(&mem, 0x0600).unwrap()
    }

    #[test]
    fn test_decode_lda_immediate() {
        let instr = decode(&[0xA9, 0x42]);

        assert_eq!(instr.mnemonic, "LDA");
        assert_eq!(instr.addressing_mode, AddressingMode::Immediate);
        assert_eq!(instr.size_bytes, 2);
        assert_eq!(instr.to_string(), "0600  LDA #$42");
    }

    #[test]
    fn test_decode_sta_absolute() {
        let instr = decode(&[0x8D, 0x00, 0x04]);

        assert_eq!(instr.operand_word(), 0x0400);
        assert_eq!(instr.to_string(), "0600  STA $0400");
    }

    #[test]
    fn test_decode_jmp_indirect() {
        let instr = decode(&[0x6C, 0xFF, 0x30]);

        assert_eq!(instr.to_string(), "0600  JMP ($30FF)");
    }

    #[test]
    fn test_decode_branch_target() {
        // BNE -9 from 0x0600: target = 0x0602 - 9 = 0x05F9
        let instr = decode(&[0xD0, 0xF7]);

        assert_eq!(instr.to_string(), "0600  BNE $05F9");
    }

    #[test]
    fn test_decode_indexed_indirect_forms() {
        assert_eq!(decode(&[0xA1, 0x40]).to_string(), "0600  LDA ($40,X)");
        assert_eq!(decode(&[0xB1, 0x40]).to_string(), "0600  LDA ($40),Y");
        assert_eq!(decode(&[0xB5, 0x40]).to_string(), "0600  LDA $40,X");
    }

    #[test]
    fn test_decode_accumulator_and_implied() {
        assert_eq!(decode(&[0x0A]).to_string(), "0600  ASL A");
        assert_eq!(decode(&[0xEA]).to_string(), "0600  NOP");
    }

    #[test]
    fn test_illegal_opcode_decodes_to_none() {
        let mut mem = FlatMemory::new();
        mem.write(0x0600, 0x03);
        assert!(disassemble(&mem, 0x0600).is_none());
    }

    #[test]
    fn test_hlt_decodes() {
        assert_eq!(decode(&[0x02]).to_string(), "0600  HLT");
    }

    #[test]
    fn test_operand_read_wraps_address_space() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFF, 0xA9); // LDA # at the top of memory
        mem.write(0x0000, 0x7F); // operand wraps to $0000

        let instr = disassemble(&mem, 0xFFFF).unwrap();
        assert_eq!(instr.operand[0], 0x7F);
    }
}
