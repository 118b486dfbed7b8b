//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary bytes through decode + format at arbitrary addresses,
//! including the top of the address space where operand reads wrap.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::{disassemble, FlatMemory, MemoryBus, OPCODE_TABLE};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: [u8; 8],
    address: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut mem = FlatMemory::new();
    for (i, &b) in input.bytes.iter().enumerate() {
        mem.write(input.address.wrapping_add(i as u16), b);
    }

    let decoded = disassemble(&mem, input.address);

    let metadata = &OPCODE_TABLE[input.bytes[0] as usize];
    if metadata.mnemonic == "???" {
        assert!(decoded.is_none());
    } else {
        let instr = decoded.expect("documented opcodes always decode");
        assert_eq!(instr.mnemonic, metadata.mnemonic);
        assert_eq!(instr.size_bytes, metadata.size_bytes);

        // Formatting must never panic and always includes the mnemonic
        let text = instr.to_string();
        assert!(text.contains(instr.mnemonic));
    }
});
