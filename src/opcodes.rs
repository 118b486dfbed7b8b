//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode metadata table: the single source of truth
//! for instruction decoding shared by the dispatcher and the disassembler.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **1 unofficial instruction** - `$02` HLT, which latches the halt state
//! - **104 illegal opcodes** - Marked with "???"; executed as 2-cycle NOPs
//!
//! Each entry carries the mnemonic, the addressing mode, the base cycle cost
//! (excluding page-crossing penalties) and the instruction size in bytes.

use crate::addressing::AddressingMode;

/// Metadata for a single 6502 opcode.
///
/// # Fields
///
/// - `mnemonic`: Three-letter instruction name (e.g., "LDA", "STA", "???")
/// - `addressing_mode`: How the instruction interprets operand bytes
/// - `base_cycles`: Minimum cycle cost (page-crossing penalties added dynamically)
/// - `size_bytes`: Total instruction size including opcode and operands (1-3 bytes)
///
/// # Examples
///
/// ```
/// use mos6502::{OPCODE_TABLE, AddressingMode};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing penalties).
    ///
    /// Documented instructions have cycles in the range 2-7. Illegal opcodes
    /// carry the 2-cycle NOP cost they execute with; HLT carries 0.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// - 1 byte: Implicit, Accumulator modes
    /// - 2 bytes: Immediate, Zero Page, Relative, Indexed Indirect modes
    /// - 3 bytes: Absolute, Indirect modes
    pub size_bytes: u8,
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Organization
///
/// - **Documented opcodes** (151 entries): Official NMOS 6502 instructions
///   with accurate mnemonic, addressing mode, cycle cost and size.
/// - **HLT** (`$02`): the unofficial halt opcode; 0 cycles, size 1.
/// - **Illegal opcodes** (104 entries): marked "???"; dispatched as 2-cycle,
///   1-byte NOPs.
///
/// # Examples
///
/// ```
/// use mos6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// println!("{} - {} cycles, {} bytes", brk.mnemonic, brk.base_cycles, brk.size_bytes);
/// // Output: BRK - 7 cycles, 1 bytes
///
/// // Illegal opcodes execute as NOPs
/// let illegal = &OPCODE_TABLE[0x03];
/// assert_eq!(illegal.mnemonic, "???");
/// assert_eq!(illegal.base_cycles, 2);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    OpcodeMetadata {
        mnemonic: "BRK",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 7,
        size_bytes: 1,
    },
    // 0x01
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0x02 - Unofficial HLT (latches the halt state)
    OpcodeMetadata {
        mnemonic: "HLT",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
    },
    // 0x03 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x04 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x05
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0x06
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0x07 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x08
    OpcodeMetadata {
        mnemonic: "PHP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 3,
        size_bytes: 1,
    },
    // 0x09
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0x0A
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x0B - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x0C - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x0D
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x0E
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
    },
    // 0x0F - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x10
    OpcodeMetadata {
        mnemonic: "BPL",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0x11
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0x12 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x13 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x14 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x15
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0x16
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0x17 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x18
    OpcodeMetadata {
        mnemonic: "CLC",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x19
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x1A - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x1B - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x1C - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x1D
    OpcodeMetadata {
        mnemonic: "ORA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x1E
    OpcodeMetadata {
        mnemonic: "ASL",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
    },
    // 0x1F - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x20
    OpcodeMetadata {
        mnemonic: "JSR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
    },
    // 0x21
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0x22 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x23 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x24
    OpcodeMetadata {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0x25
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0x26
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0x27 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x28
    OpcodeMetadata {
        mnemonic: "PLP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 4,
        size_bytes: 1,
    },
    // 0x29
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0x2A
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x2B - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x2C
    OpcodeMetadata {
        mnemonic: "BIT",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x2D
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x2E
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
    },
    // 0x2F - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x30
    OpcodeMetadata {
        mnemonic: "BMI",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0x31
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0x32 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x33 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x34 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x35
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0x36
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0x37 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x38
    OpcodeMetadata {
        mnemonic: "SEC",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x39
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x3A - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x3B - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x3C - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x3D
    OpcodeMetadata {
        mnemonic: "AND",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x3E
    OpcodeMetadata {
        mnemonic: "ROL",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
    },
    // 0x3F - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x40
    OpcodeMetadata {
        mnemonic: "RTI",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 6,
        size_bytes: 1,
    },
    // 0x41
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0x42 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x43 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x44 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x45
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0x46
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0x47 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x48
    OpcodeMetadata {
        mnemonic: "PHA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 3,
        size_bytes: 1,
    },
    // 0x49
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0x4A
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x4B - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x4C
    OpcodeMetadata {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 3,
        size_bytes: 3,
    },
    // 0x4D
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x4E
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
    },
    // 0x4F - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x50
    OpcodeMetadata {
        mnemonic: "BVC",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0x51
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0x52 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x53 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x54 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x55
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0x56
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0x57 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x58
    OpcodeMetadata {
        mnemonic: "CLI",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x59
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x5A - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x5B - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x5C - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x5D
    OpcodeMetadata {
        mnemonic: "EOR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x5E
    OpcodeMetadata {
        mnemonic: "LSR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
    },
    // 0x5F - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x60
    OpcodeMetadata {
        mnemonic: "RTS",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 6,
        size_bytes: 1,
    },
    // 0x61
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0x62 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x63 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x64 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x65
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0x66
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0x67 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x68
    OpcodeMetadata {
        mnemonic: "PLA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 4,
        size_bytes: 1,
    },
    // 0x69
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0x6A
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x6B - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x6C
    OpcodeMetadata {
        mnemonic: "JMP",
        addressing_mode: AddressingMode::Indirect,
        base_cycles: 5,
        size_bytes: 3,
    },
    // 0x6D
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x6E
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
    },
    // 0x6F - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x70
    OpcodeMetadata {
        mnemonic: "BVS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0x71
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0x72 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x73 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x74 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x75
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0x76
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0x77 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x78
    OpcodeMetadata {
        mnemonic: "SEI",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x79
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x7A - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x7B - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x7C - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x7D
    OpcodeMetadata {
        mnemonic: "ADC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x7E
    OpcodeMetadata {
        mnemonic: "ROR",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
    },
    // 0x7F - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x80 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x81
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0x82 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x83 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x84
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0x85
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0x86
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0x87 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x88
    OpcodeMetadata {
        mnemonic: "DEY",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x89 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x8A
    OpcodeMetadata {
        mnemonic: "TXA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x8B - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x8C
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x8D
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x8E
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0x8F - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x90
    OpcodeMetadata {
        mnemonic: "BCC",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0x91
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0x92 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x93 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x94
    OpcodeMetadata {
        mnemonic: "STY",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0x95
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0x96
    OpcodeMetadata {
        mnemonic: "STX",
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0x97 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x98
    OpcodeMetadata {
        mnemonic: "TYA",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x99
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        size_bytes: 3,
    },
    // 0x9A
    OpcodeMetadata {
        mnemonic: "TXS",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x9B - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x9C - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x9D
    OpcodeMetadata {
        mnemonic: "STA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 5,
        size_bytes: 3,
    },
    // 0x9E - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0x9F - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xA0
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0xA1
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0xA2
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0xA3 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xA4
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0xA5
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0xA6
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0xA7 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xA8
    OpcodeMetadata {
        mnemonic: "TAY",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xA9
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0xAA
    OpcodeMetadata {
        mnemonic: "TAX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xAB - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xAC
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xAD
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xAE
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xAF - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xB0
    OpcodeMetadata {
        mnemonic: "BCS",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0xB1
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0xB2 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xB3 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xB4
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0xB5
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0xB6
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0xB7 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xB8
    OpcodeMetadata {
        mnemonic: "CLV",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xB9
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xBA
    OpcodeMetadata {
        mnemonic: "TSX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xBB - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xBC
    OpcodeMetadata {
        mnemonic: "LDY",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xBD
    OpcodeMetadata {
        mnemonic: "LDA",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xBE
    OpcodeMetadata {
        mnemonic: "LDX",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xBF - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xC0
    OpcodeMetadata {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0xC1
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0xC2 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xC3 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xC4
    OpcodeMetadata {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0xC5
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0xC6
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0xC7 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xC8
    OpcodeMetadata {
        mnemonic: "INY",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xC9
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0xCA
    OpcodeMetadata {
        mnemonic: "DEX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xCB - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xCC
    OpcodeMetadata {
        mnemonic: "CPY",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xCD
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xCE
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
    },
    // 0xCF - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xD0
    OpcodeMetadata {
        mnemonic: "BNE",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0xD1
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0xD2 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xD3 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xD4 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xD5
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0xD6
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0xD7 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xD8
    OpcodeMetadata {
        mnemonic: "CLD",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xD9
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xDA - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xDB - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xDC - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xDD
    OpcodeMetadata {
        mnemonic: "CMP",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xDE
    OpcodeMetadata {
        mnemonic: "DEC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
    },
    // 0xDF - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xE0
    OpcodeMetadata {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0xE1
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0xE2 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xE3 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xE4
    OpcodeMetadata {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0xE5
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
    },
    // 0xE6
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0xE7 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xE8
    OpcodeMetadata {
        mnemonic: "INX",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xE9
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0xEA
    OpcodeMetadata {
        mnemonic: "NOP",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xEB - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xEC
    OpcodeMetadata {
        mnemonic: "CPX",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xED
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xEE
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
    },
    // 0xEF - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xF0
    OpcodeMetadata {
        mnemonic: "BEQ",
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
    },
    // 0xF1
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
    },
    // 0xF2 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xF3 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xF4 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xF5
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
    },
    // 0xF6
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
    },
    // 0xF7 - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xF8
    OpcodeMetadata {
        mnemonic: "SED",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xF9
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xFA - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xFB - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xFC - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
    // 0xFD
    OpcodeMetadata {
        mnemonic: "SBC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
    },
    // 0xFE
    OpcodeMetadata {
        mnemonic: "INC",
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
    },
    // 0xFF - Illegal/Undocumented opcode (executes as NOP)
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;

    #[test]
    fn documented_opcode_count() {
        let documented = OPCODE_TABLE
            .iter()
            .filter(|m| m.mnemonic != "???" && m.mnemonic != "HLT")
            .count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn hlt_entry() {
        let hlt = &OPCODE_TABLE[0x02];
        assert_eq!(hlt.mnemonic, "HLT");
        assert_eq!(hlt.base_cycles, 0);
        assert_eq!(hlt.size_bytes, 1);
    }

    #[test]
    fn jmp_indirect_entry() {
        let jmp = &OPCODE_TABLE[0x6C];
        assert_eq!(jmp.mnemonic, "JMP");
        assert_eq!(jmp.addressing_mode, AddressingMode::Indirect);
        assert_eq!(jmp.base_cycles, 5);
        assert_eq!(jmp.size_bytes, 3);
    }
}
