//! # Addressing Modes
//!
//! The 13 ways a 6502 instruction locates its operand. The mode decides how
//! many bytes follow the opcode and how they turn into an effective address;
//! the actual address arithmetic lives on the CPU's resolver, which also
//! reports page crossings for the modes that can incur the +1 cycle penalty.

/// 6502 addressing mode enumeration.
///
/// Stored per opcode in the metadata table and consumed by both the
/// dispatcher (operand resolution, PC advancement) and the disassembler
/// (operand formatting).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand at all - the instruction is self-contained (CLC, RTS,
    /// NOP, ...).
    Implicit,

    /// The accumulator is the operand, as in `ASL A` or `ROR A`.
    Accumulator,

    /// The operand byte is the value itself: `LDA #$10` loads 0x10.
    Immediate,

    /// One operand byte naming an address in page zero: `LDA $80` reads
    /// from $0080.
    ZeroPage,

    /// Zero page plus X, wrapping within page zero: `LDA $80,X`.
    ZeroPageX,

    /// Zero page plus Y, wrapping within page zero. Only LDX and STX use
    /// this form: `LDX $80,Y`.
    ZeroPageY,

    /// Branch-only: one signed byte added to the PC after it has moved past
    /// the operand.
    Relative,

    /// Two operand bytes forming a full little-endian address: `JMP $1234`.
    Absolute,

    /// Absolute plus X: `LDA $1234,X`. Read-type instructions pay one extra
    /// cycle when the indexed address lands in a different page.
    AbsoluteX,

    /// Absolute plus Y: `LDA $1234,Y`. Same page-cross penalty rule as
    /// [`AbsoluteX`](AddressingMode::AbsoluteX).
    AbsoluteY,

    /// JMP-only: the operand names a pointer holding the target address.
    /// When the pointer's low byte is $FF the high byte is fetched from
    /// offset $00 of the *same* page (hardware bug).
    Indirect,

    /// Indexed indirect, `LDA ($40,X)`: X is added to the operand within
    /// page zero, and the resulting cell (plus its wrapped successor)
    /// holds the effective address.
    IndirectX,

    /// Indirect indexed, `LDA ($40),Y`: the zero-page cell holds a base
    /// address and Y is added afterwards - crossing out of the base's page
    /// costs read-type instructions one extra cycle.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode for this mode.
    pub fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
