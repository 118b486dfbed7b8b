//! # 6502 CPU Emulator Core
//!
//! A cycle-accurate NMOS 6502 CPU emulator: a deterministic software model of
//! the 8-bit processor whose externally observable behavior (registers, memory
//! effects, cycle counts, interrupt timing and page-boundary quirks) matches
//! the real chip on all 56 official instructions.
//!
//! This crate provides the CPU state structures, a trait-based memory bus
//! abstraction, a table-driven opcode metadata system, the interrupt
//! sequencer (RESET/NMI/IRQ/BRK) and a small disassembler used for execution
//! tracing.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::CPU;
//!
//! let mut cpu = CPU::new();
//!
//! // LDA #$42; STA $0200; HLT
//! cpu.load_program(&[0xA9, 0x42, 0x8D, 0x00, 0x02, 0x02]);
//! cpu.set_reset_vector(0x0600);
//! cpu.reset();
//!
//! cpu.run(100);
//!
//! assert!(cpu.is_halted());
//! assert_eq!(cpu.read_memory(0x0200), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus`
//!   trait; `FlatMemory` provides the default 64KB flat array
//! - **Cycle accuracy**: every instruction reports its documented cycle cost,
//!   including page-crossing and branch penalties
//! - **Totality**: no operation fails; unknown opcodes execute as 2-cycle
//!   NOPs and the unofficial `$02` HLT latches the halt state
//! - **Table-driven design**: all opcode metadata lives in `OPCODE_TABLE`,
//!   shared by the dispatcher and the disassembler
//!
//! ## Modules
//!
//! - `cpu` - CPU state, execution loop and interrupt sequencer
//! - `memory` - MemoryBus trait and FlatMemory implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing mode enumeration
//! - `disassembler` - Single-instruction decoding and formatting
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: `trace!`
//! emits one line per executed instruction (disassembled), `debug!` covers
//! lifecycle events (reset, halt, interrupt service). The library never
//! installs a logger; the embedder picks one.

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CPU, IRQ_VECTOR, NMI_VECTOR, PROGRAM_ORIGIN, RESET_VECTOR};
pub use disassembler::{disassemble, Instruction};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
