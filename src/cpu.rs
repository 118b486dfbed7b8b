//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state,
//! the fetch-decode-execute loop and the interrupt sequencer.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, D, I, Z, C (individual bool fields; the U bit
//!   reads as 1 and the B bit exists only in pushed status copies)
//! - **Cycle counter**: u32 cycle count, wrapping modulo 2^32
//! - **Interrupt state**: IRQ/NMI pending flags and the HLT halt latch
//!
//! ## Execution Model
//!
//! - `step()`: execute one instruction (or service a pending interrupt) and
//!   return the cycles consumed
//! - `run(target)`: step until `target` cycles have been consumed or the CPU
//!   halts
//!
//! Interrupt lines are modelled as two pending flags set by `trigger_irq()` /
//! `trigger_nmi()` and sampled at the top of `step()`. The core is total:
//! no operation fails, unknown opcodes execute as 2-cycle NOPs, and the
//! unofficial `$02` HLT opcode latches the halt state.

use log::{debug, log_enabled, trace, Level};

use crate::{AddressingMode, FlatMemory, MemoryBus, OPCODE_TABLE};

/// NMI vector location (`$FFFA/$FFFB`, little-endian).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// RESET vector location (`$FFFC/$FFFD`, little-endian).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location (`$FFFE/$FFFF`, little-endian).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Default load address for [`CPU::load_program`].
pub const PROGRAM_ORIGIN: u16 = 0x0600;

/// Cycles consumed by an IRQ, NMI or BRK service sequence.
const INTERRUPT_CYCLES: u32 = 7;

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags,
/// program counter, stack pointer, cycle counter and interrupt state. It is
/// generic over the memory implementation via the `MemoryBus` trait and owns
/// its memory exclusively; sharing a CPU across threads requires external
/// serialization.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use mos6502::CPU;
///
/// let mut cpu = CPU::new();
///
/// // Power-on state
/// assert_eq!(cpu.pc(), 0x0000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.status(), 0x24); // U | I
/// assert_eq!(cpu.cycles(), 0);
/// assert!(!cpu.is_halted());
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Decimal mode flag (visible bit only; arithmetic stays binary)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed, wrapping modulo 2^32
    pub(crate) cycles: u32,

    /// IRQ requested; sampled and consumed at the top of step()
    pub(crate) irq_pending: bool,

    /// NMI requested; edge-triggered, non-maskable
    pub(crate) nmi_pending: bool,

    /// Halt latch set by the unofficial HLT ($02) opcode
    pub(crate) halted: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl CPU<FlatMemory> {
    /// Creates a CPU backed by zeroed 64KB flat memory.
    ///
    /// Power-on state: A=X=Y=0, SP=0xFD, status 0x24 (U | I), PC=0, cycle
    /// counter 0, no pending interrupts, not halted. The PC is *not* loaded
    /// from the RESET vector here; call [`reset`](CPU::reset) for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::CPU;
    ///
    /// let cpu = CPU::new();
    /// assert_eq!(cpu.sp(), 0xFD);
    /// assert!(cpu.flag_i());
    /// ```
    pub fn new() -> Self {
        Self::with_memory(FlatMemory::new())
    }
}

impl Default for CPU<FlatMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with the given memory bus and the power-on register
    /// state described in [`CPU::new`].
    pub fn with_memory(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_d: false,
            flag_i: true, // Interrupt disable set at power-on
            flag_z: false,
            flag_c: false,
            cycles: 0,
            irq_pending: false,
            nmi_pending: false,
            halted: false,
            memory,
        }
    }

    /// Executes one instruction (or services one pending interrupt) and
    /// returns the cycles consumed.
    ///
    /// Order of business at the top of each step:
    ///
    /// 1. A halted CPU does nothing and returns 0.
    /// 2. A pending NMI is serviced (7 cycles); no instruction is fetched.
    /// 3. A pending IRQ is *consumed* regardless of the I flag. With I clear
    ///    it is serviced (7 cycles); with I set it is discarded and execution
    ///    falls through to a normal fetch.
    /// 4. The opcode at PC is fetched and dispatched. Unknown opcodes other
    ///    than `$02` execute as 2-cycle NOPs; `$02` (HLT) latches the halt
    ///    state and returns 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load_program(&[0xA9, 0x42]); // LDA #$42
    /// cpu.set_reset_vector(0x0600);
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.a(), 0x42);
    /// ```
    pub fn step(&mut self) -> u32 {
        if self.halted {
            return 0;
        }

        if self.nmi_pending {
            self.nmi_pending = false;
            debug!("servicing NMI, vector at {:04X}", NMI_VECTOR);
            let cycles = self.interrupt_sequence(self.pc, NMI_VECTOR, false);
            self.cycles = self.cycles.wrapping_add(cycles);
            return cycles;
        }

        if self.irq_pending {
            // The pending flag is consumed even when I masks the interrupt.
            self.irq_pending = false;
            if !self.flag_i {
                debug!("servicing IRQ, vector at {:04X}", IRQ_VECTOR);
                let cycles = self.interrupt_sequence(self.pc, IRQ_VECTOR, false);
                self.cycles = self.cycles.wrapping_add(cycles);
                return cycles;
            }
            debug!("IRQ discarded (I flag set)");
        }

        // Fetch and decode
        let opcode = self.memory.read(self.pc);
        let metadata = &OPCODE_TABLE[opcode as usize];

        if log_enabled!(Level::Trace) {
            if let Some(instr) = crate::disassembler::disassemble(&self.memory, self.pc) {
                trace!("{}", instr);
            } else {
                trace!("{:04X}  ???  (opcode {:02X})", self.pc, opcode);
            }
        }

        let cycles = match metadata.mnemonic {
            "ADC" => crate::instructions::alu::execute_adc(self, opcode),
            "AND" => crate::instructions::alu::execute_and(self, opcode),
            "ASL" => crate::instructions::shifts::execute_asl(self, opcode),
            "BCC" => crate::instructions::branches::execute_bcc(self, opcode),
            "BCS" => crate::instructions::branches::execute_bcs(self, opcode),
            "BEQ" => crate::instructions::branches::execute_beq(self, opcode),
            "BIT" => crate::instructions::alu::execute_bit(self, opcode),
            "BMI" => crate::instructions::branches::execute_bmi(self, opcode),
            "BNE" => crate::instructions::branches::execute_bne(self, opcode),
            "BPL" => crate::instructions::branches::execute_bpl(self, opcode),
            "BRK" => crate::instructions::control::execute_brk(self, opcode),
            "BVC" => crate::instructions::branches::execute_bvc(self, opcode),
            "BVS" => crate::instructions::branches::execute_bvs(self, opcode),
            "CLC" => crate::instructions::flags::execute_clc(self, opcode),
            "CLD" => crate::instructions::flags::execute_cld(self, opcode),
            "CLI" => crate::instructions::flags::execute_cli(self, opcode),
            "CLV" => crate::instructions::flags::execute_clv(self, opcode),
            "CMP" => crate::instructions::alu::execute_cmp(self, opcode),
            "CPX" => crate::instructions::alu::execute_cpx(self, opcode),
            "CPY" => crate::instructions::alu::execute_cpy(self, opcode),
            "DEC" => crate::instructions::inc_dec::execute_dec(self, opcode),
            "DEX" => crate::instructions::inc_dec::execute_dex(self, opcode),
            "DEY" => crate::instructions::inc_dec::execute_dey(self, opcode),
            "EOR" => crate::instructions::alu::execute_eor(self, opcode),
            "HLT" => crate::instructions::control::execute_hlt(self, opcode),
            "INC" => crate::instructions::inc_dec::execute_inc(self, opcode),
            "INX" => crate::instructions::inc_dec::execute_inx(self, opcode),
            "INY" => crate::instructions::inc_dec::execute_iny(self, opcode),
            "JMP" => crate::instructions::control::execute_jmp(self, opcode),
            "JSR" => crate::instructions::control::execute_jsr(self, opcode),
            "LDA" => crate::instructions::load_store::execute_lda(self, opcode),
            "LDX" => crate::instructions::load_store::execute_ldx(self, opcode),
            "LDY" => crate::instructions::load_store::execute_ldy(self, opcode),
            "LSR" => crate::instructions::shifts::execute_lsr(self, opcode),
            "ORA" => crate::instructions::alu::execute_ora(self, opcode),
            "PHA" => crate::instructions::stack::execute_pha(self, opcode),
            "PHP" => crate::instructions::stack::execute_php(self, opcode),
            "PLA" => crate::instructions::stack::execute_pla(self, opcode),
            "PLP" => crate::instructions::stack::execute_plp(self, opcode),
            "ROL" => crate::instructions::shifts::execute_rol(self, opcode),
            "ROR" => crate::instructions::shifts::execute_ror(self, opcode),
            "RTI" => crate::instructions::control::execute_rti(self, opcode),
            "RTS" => crate::instructions::control::execute_rts(self, opcode),
            "SBC" => crate::instructions::alu::execute_sbc(self, opcode),
            "SEC" => crate::instructions::flags::execute_sec(self, opcode),
            "SED" => crate::instructions::flags::execute_sed(self, opcode),
            "SEI" => crate::instructions::flags::execute_sei(self, opcode),
            "STA" => crate::instructions::load_store::execute_sta(self, opcode),
            "STX" => crate::instructions::load_store::execute_stx(self, opcode),
            "STY" => crate::instructions::load_store::execute_sty(self, opcode),
            "TAX" => crate::instructions::transfer::execute_tax(self, opcode),
            "TAY" => crate::instructions::transfer::execute_tay(self, opcode),
            "TSX" => crate::instructions::transfer::execute_tsx(self, opcode),
            "TXA" => crate::instructions::transfer::execute_txa(self, opcode),
            "TXS" => crate::instructions::transfer::execute_txs(self, opcode),
            "TYA" => crate::instructions::transfer::execute_tya(self, opcode),
            // NOP proper, plus every undocumented opcode other than HLT
            _ => crate::instructions::control::execute_nop(self, opcode),
        };

        self.cycles = self.cycles.wrapping_add(cycles);
        cycles
    }

    /// Runs the CPU until at least `target_cycles` have been consumed during
    /// this call, or the CPU halts. Returns the cycles actually consumed
    /// (instruction granularity means the result may exceed the target).
    ///
    /// This is useful for frame-locked execution models where the CPU must
    /// run for an exact number of cycles per frame (e.g., 29780 cycles for
    /// 60Hz NTSC).
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// // NOP sled from $0600
    /// cpu.load_program(&[0xEA; 16]);
    /// cpu.set_reset_vector(0x0600);
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.run(10), 10); // five NOPs
    /// assert_eq!(cpu.pc(), 0x0605);
    /// ```
    pub fn run(&mut self, target_cycles: u32) -> u32 {
        let mut consumed: u32 = 0;

        while consumed < target_cycles {
            let stepped = self.step();
            if stepped == 0 {
                // Only a halted CPU steps for zero cycles.
                break;
            }
            consumed = consumed.saturating_add(stepped);
        }

        consumed
    }

    /// Soft reset.
    ///
    /// Restores A=X=Y=0, SP=0xFD, status 0x24 (U | I), clears the halt latch
    /// and any pending interrupts, and loads PC from the RESET vector.
    /// Memory and the cycle counter are preserved.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_d = false;
        self.flag_i = true;
        self.flag_z = false;
        self.flag_c = false;
        self.halted = false;
        self.irq_pending = false;
        self.nmi_pending = false;
        self.pc = self.read_word(RESET_VECTOR);

        debug!("reset: pc loaded from vector -> {:04X}", self.pc);
    }

    /// Hard reset: returns the entire machine, memory and vectors included,
    /// to the power-on state (PC=0, cycle counter 0).
    ///
    /// The register file goes back to SP=0xFD and status 0x24 rather than
    /// literal zeroes; the U bit of the status register reads as 1 in every
    /// reachable state.
    pub fn hard_reset(&mut self) {
        for addr in 0..=0xFFFFu16 {
            self.memory.write(addr, 0x00);
        }
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.pc = 0x0000;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_d = false;
        self.flag_i = true;
        self.flag_z = false;
        self.flag_c = false;
        self.cycles = 0;
        self.halted = false;
        self.irq_pending = false;
        self.nmi_pending = false;

        debug!("hard reset");
    }

    /// Copies `bytes` into memory starting at [`PROGRAM_ORIGIN`] (`$0600`).
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::CPU;
    ///
    /// let mut cpu = CPU::new();
    /// cpu.load_program(&[0xEA, 0x02]); // NOP; HLT
    /// assert_eq!(cpu.read_memory(0x0600), 0xEA);
    /// assert_eq!(cpu.read_memory(0x0601), 0x02);
    /// ```
    pub fn load_program(&mut self, bytes: &[u8]) {
        self.load_program_at(bytes, PROGRAM_ORIGIN);
    }

    /// Copies `bytes` into memory starting at `addr`.
    ///
    /// The destination address wraps modulo 2^16, consistent with every
    /// other memory access.
    pub fn load_program_at(&mut self, bytes: &[u8], addr: u16) {
        for (offset, &byte) in bytes.iter().enumerate() {
            self.memory.write(addr.wrapping_add(offset as u16), byte);
        }
        debug!("loaded {} bytes at {:04X}", bytes.len(), addr);
    }

    /// Writes a 16-bit little-endian address to the NMI vector at `$FFFA/B`.
    pub fn set_nmi_vector(&mut self, addr: u16) {
        self.write_word(NMI_VECTOR, addr);
    }

    /// Writes a 16-bit little-endian address to the RESET vector at `$FFFC/D`.
    pub fn set_reset_vector(&mut self, addr: u16) {
        self.write_word(RESET_VECTOR, addr);
    }

    /// Writes a 16-bit little-endian address to the IRQ/BRK vector at `$FFFE/F`.
    pub fn set_irq_vector(&mut self, addr: u16) {
        self.write_word(IRQ_VECTOR, addr);
    }

    /// Requests a maskable interrupt.
    ///
    /// The pending flag is sampled (and consumed) at the top of the next
    /// [`step`](CPU::step): serviced when the I flag is clear, discarded when
    /// it is set.
    pub fn trigger_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Requests a non-maskable interrupt, serviced at the top of the next
    /// [`step`](CPU::step) regardless of the I flag.
    pub fn trigger_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Reads a byte from memory.
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte to memory.
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward
    /// from 0x01FF and wraps within the stack page.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: U (unused, always 1)
    /// - Bit 4: B (always 0 here; B only exists in pushed copies)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::CPU;
    ///
    /// let cpu = CPU::new();
    /// assert_eq!(cpu.status(), 0b0010_0100); // U | I
    /// ```
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // U bit always 1

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Unpacks a status byte into the live flags.
    ///
    /// Bits 4 (B) and 5 (U) of `value` are ignored: B is discarded because it
    /// only exists in pushed copies, and U stays hardwired to 1. This is the
    /// restore path used by PLP and RTI.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    /// Returns the total number of CPU cycles executed since construction,
    /// wrapping modulo 2^32.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Returns true if the CPU has executed the unofficial HLT ($02) opcode
    /// since the last reset.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns true if an IRQ is pending (triggered but not yet sampled).
    pub fn is_irq_pending(&self) -> bool {
        self.irq_pending
    }

    /// Returns true if an NMI is pending (triggered but not yet sampled).
    pub fn is_nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Decimal mode flag is set.
    ///
    /// The flag is tracked as a visible status bit but never alters ADC/SBC
    /// results; arithmetic is always binary.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register Setters (for testing) ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    ///
    /// This allows tests and external code to write to memory directly.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Stack Operations ==========

    /// Pushes a byte: stores at 0x0100 + SP, then decrements SP (wrapping
    /// within the stack page; SP=0x00 wraps to 0xFF, never into 0x0200).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pulls a byte: increments SP (wrapping within the stack page), then
    /// reads from 0x0100 + SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(0x0100 | self.sp as u16)
    }

    // ========== Flag/ALU Primitives ==========

    /// Sets the Z and N flags from a result byte.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    /// Binary add-with-carry into the accumulator, shared by ADC and SBC
    /// (SBC passes the operand's complement).
    ///
    /// C is set on unsigned overflow. V is set when both operands share a
    /// sign the result does not: ((A^result) & (value^result) & 0x80) != 0.
    /// The D flag never alters the arithmetic.
    pub(crate) fn add_with_carry(&mut self, value: u8) {
        let a = self.a;
        let carry_in = self.flag_c as u16;
        let sum = a as u16 + value as u16 + carry_in;
        let result = sum as u8;

        self.flag_c = sum > 0xFF;
        self.flag_v = (a ^ result) & (value ^ result) & 0x80 != 0;
        self.a = result;
        self.set_nz(result);
    }

    /// Register/memory comparison shared by CMP, CPX and CPY.
    ///
    /// Computes reg - value in 9 bits: C is set when reg >= value, and N/Z
    /// come from the low 8 bits of the difference.
    pub(crate) fn compare(&mut self, reg: u8, value: u8) {
        let diff = reg.wrapping_sub(value);
        self.flag_c = reg >= value;
        self.set_nz(diff);
    }

    // ========== Interrupt Sequencer ==========

    /// The shared IRQ/NMI/BRK service sequence.
    ///
    /// Pushes `return_pc` high byte first, then the status byte (B set only
    /// for BRK, U always 1), sets I, and loads PC from `vector`. Returns the
    /// 7 cycles the sequence consumes; the caller accounts for them.
    pub(crate) fn interrupt_sequence(&mut self, return_pc: u16, vector: u16, brk: bool) -> u32 {
        self.push((return_pc >> 8) as u8);
        self.push(return_pc as u8);

        let mut status = self.status();
        if brk {
            status |= 0b0001_0000;
        }
        self.push(status);

        self.flag_i = true;
        self.pc = self.read_word(vector);

        INTERRUPT_CYCLES
    }

    // ========== Memory Helpers ==========

    /// Reads a 16-bit little-endian word; the second byte comes from
    /// addr + 1 wrapping modulo 2^16.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a 16-bit word little-endian.
    pub(crate) fn write_word(&mut self, addr: u16, value: u16) {
        self.memory.write(addr, value as u8);
        self.memory.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Reads a 16-bit pointer from the zero page; the high byte comes from
    /// (zp_addr + 1) mod 256, wrapping within page zero.
    pub(crate) fn read_zero_page_word(&self, zp_addr: u8) -> u16 {
        let lo = self.memory.read(zp_addr as u16) as u16;
        let hi = self.memory.read(zp_addr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    // ========== Addressing Resolver ==========

    /// Computes the effective address for a memory-operand addressing mode.
    ///
    /// Returns the address and whether a page boundary was crossed during
    /// the computation. The crossing signal is meaningful for AbsoluteX,
    /// AbsoluteY and IndirectY; every other mode reports false. Callers that
    /// never pay the penalty (stores, read-modify-write) simply ignore it.
    pub(crate) fn get_effective_address(&self, mode: AddressingMode) -> (u16, bool) {
        match mode {
            AddressingMode::ZeroPage => {
                let addr = self.memory.read(self.pc.wrapping_add(1)) as u16;
                (addr, false)
            }
            AddressingMode::ZeroPageX => {
                // Indexing wraps within page zero: ($FE + 3) -> $01
                let base = self.memory.read(self.pc.wrapping_add(1));
                (base.wrapping_add(self.x) as u16, false)
            }
            AddressingMode::ZeroPageY => {
                let base = self.memory.read(self.pc.wrapping_add(1));
                (base.wrapping_add(self.y) as u16, false)
            }
            AddressingMode::Absolute => {
                (self.read_word(self.pc.wrapping_add(1)), false)
            }
            AddressingMode::AbsoluteX => {
                let base = self.read_word(self.pc.wrapping_add(1));
                let effective = base.wrapping_add(self.x as u16);
                (effective, (base & 0xFF00) != (effective & 0xFF00))
            }
            AddressingMode::AbsoluteY => {
                let base = self.read_word(self.pc.wrapping_add(1));
                let effective = base.wrapping_add(self.y as u16);
                (effective, (base & 0xFF00) != (effective & 0xFF00))
            }
            AddressingMode::IndirectX => {
                let ptr = self
                    .memory
                    .read(self.pc.wrapping_add(1))
                    .wrapping_add(self.x);
                (self.read_zero_page_word(ptr), false)
            }
            AddressingMode::IndirectY => {
                let ptr = self.memory.read(self.pc.wrapping_add(1));
                let base = self.read_zero_page_word(ptr);
                let effective = base.wrapping_add(self.y as u16);
                (effective, (base & 0xFF00) != (effective & 0xFF00))
            }
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative
            | AddressingMode::Indirect => {
                // The opcode table never routes these here; JMP handles
                // Indirect itself and branches handle Relative.
                unreachable!("no effective address for {:?}", mode)
            }
        }
    }

    /// Reads the operand value for a read-type instruction.
    ///
    /// Returns the value and the page-cross signal from the address
    /// computation (always false for Immediate).
    pub(crate) fn get_operand_value(&self, mode: AddressingMode) -> (u8, bool) {
        match mode {
            AddressingMode::Immediate => {
                (self.memory.read(self.pc.wrapping_add(1)), false)
            }
            _ => {
                let (addr, page_crossed) = self.get_effective_address(mode);
                (self.memory.read(addr), page_crossed)
            }
        }
    }
}
