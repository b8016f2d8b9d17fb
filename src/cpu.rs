//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: packed `Status` bitflags (NV-BDIZC)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Halt reason**: why the last instruction refused to execute, if it did
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `execute_opcode()`: Execute an already-fetched opcode at PC
//! - `step()`: Fetch and execute one instruction, accumulating its cycles
//! - `run()`: Step until the CPU halts
//! - `run_for_cycles()`: Step until halted or the cycle budget is exhausted
//!
//! There are no interrupt lines. A program stops by executing an illegal
//! opcode or by jumping to itself; both leave PC on the offending instruction.

use crate::addressing::Operand;
use crate::instructions::{self, Flow};
use crate::{opcodes, MemoryBus, Status};

/// Address of the NMI vector. Declared for completeness; nothing raises NMI.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the reset vector, read on every reset.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Why the CPU stopped executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The byte at `address` is not a documented opcode.
    IllegalOpcode { opcode: u8, address: u16 },

    /// The instruction at `address` transfers control to itself.
    JumpToSelf { address: u16 },
}

impl HaltReason {
    /// Address of the instruction that caused the halt.
    pub fn address(&self) -> u16 {
        match *self {
            HaltReason::IllegalOpcode { address, .. } => address,
            HaltReason::JumpToSelf { address } => address,
        }
    }
}

impl std::fmt::Display for HaltReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HaltReason::IllegalOpcode { opcode, address } => {
                write!(f, "illegal opcode 0x{:02X} at ${:04X}", opcode, address)
            }
            HaltReason::JumpToSelf { address } => {
                write!(f, "jump to self at ${:04X}", address)
            }
        }
    }
}

/// Result of `CPU::run_for_cycles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The CPU halted after consuming `cycles`.
    Halted { cycles: u64 },

    /// The budget ran out; `cycles` may overshoot it by one instruction.
    BudgetExhausted { cycles: u64 },
}

impl RunOutcome {
    /// Cycles consumed by the run.
    pub fn cycles(&self) -> u64 {
        match *self {
            RunOutcome::Halted { cycles } | RunOutcome::BudgetExhausted { cycles } => cycles,
        }
    }
}

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program counter,
/// stack pointer, and cycle counter. It is generic over the memory implementation via the
/// `MemoryBus` trait and owns its bus by value.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
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

    /// Processor status register
    pub(crate) status: Status,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Set when an instruction refuses to execute
    pub(crate) halt: Option<HaltReason>,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// Only the registers are reset; the bus is left exactly as supplied:
    /// - Program counter (PC) is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - Stack pointer (SP) is set to 0xFF
    /// - Status register is Unused | Interrupt Disable
    /// - All other registers (A, X, Y) are zeroed
    /// - Cycle counter is reset to 0
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0xFF,
            status: Status::default(),
            cycles: 0,
            halt: None,
            memory,
        };
        cpu.reset_registers();
        cpu
    }

    /// Soft reset: the bus keeps volatile contents, then the registers reset.
    pub fn soft_reset(&mut self) {
        log::debug!("soft reset");
        self.memory.soft_reset();
        self.reset_registers();
    }

    /// Hard reset: volatile RAM on the bus is cleared, then the registers reset.
    ///
    /// The reset vector is read after the bus reset, so it must live in a
    /// device that survives (ROM or NVRAM) for execution to resume sensibly.
    pub fn hard_reset(&mut self) {
        log::debug!("hard reset");
        self.memory.hard_reset();
        self.reset_registers();
    }

    fn reset_registers(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFF;
        self.status = Status::default();
        self.cycles = 0;
        self.halt = None;
        self.pc = self.memory.read_word(RESET_VECTOR);
    }

    /// Executes `opcode` as if it had been fetched from the current PC.
    ///
    /// Returns `false` when the CPU halts instead of executing: the opcode is
    /// illegal, or the instruction would only transfer control to itself. PC
    /// is left on the instruction and `halt_reason()` says why.
    ///
    /// Cycles are not counted here; see `step()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory, HaltReason};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_pc(0x0200);
    ///
    /// assert!(cpu.execute_opcode(0xE8)); // INX
    /// assert_eq!(cpu.x(), 1);
    /// assert_eq!(cpu.pc(), 0x0201);
    ///
    /// assert!(!cpu.execute_opcode(0x02));
    /// assert_eq!(cpu.pc(), 0x0201);
    /// assert_eq!(
    ///     cpu.halt_reason(),
    ///     Some(HaltReason::IllegalOpcode { opcode: 0x02, address: 0x0201 })
    /// );
    /// ```
    pub fn execute_opcode(&mut self, opcode: u8) -> bool {
        let Some(metadata) = opcodes::lookup(opcode) else {
            return self.halt_with(HaltReason::IllegalOpcode {
                opcode,
                address: self.pc,
            });
        };

        match instructions::execute(self, metadata) {
            Flow::Next => {
                self.pc = self.pc.wrapping_add(metadata.size_bytes as u16);
                true
            }
            Flow::Jumped => true,
            Flow::Halt(reason) => self.halt_with(reason),
        }
    }

    fn halt_with(&mut self, reason: HaltReason) -> bool {
        log::debug!("halted: {}", reason);
        self.halt = Some(reason);
        false
    }

    /// Fetches the opcode at PC, executes it and adds its base cycles.
    ///
    /// Returns `false` if the CPU halted. A halted step consumes no cycles.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xA9, 0x42]); // LDA #$42
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert!(cpu.step());
    /// assert_eq!(cpu.a(), 0x42);
    /// assert_eq!(cpu.pc(), 0x8002);
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn step(&mut self) -> bool {
        let opcode = self.memory.read(self.pc);
        if !self.execute_opcode(opcode) {
            return false;
        }
        if let Some(metadata) = opcodes::lookup(opcode) {
            self.cycles += metadata.base_cycles as u64;
        }
        true
    }

    /// Steps until the CPU halts and returns the number of instructions executed.
    ///
    /// A program that never halts never returns; use `run_for_cycles` when
    /// the program is not trusted.
    pub fn run(&mut self) -> u64 {
        let mut executed = 0;
        while self.step() {
            executed += 1;
        }
        executed
    }

    /// Runs the CPU until it halts or `cycle_budget` cycles have elapsed.
    ///
    /// Instructions are never split, so the reported cycle count may exceed
    /// the budget by up to one instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory, MemoryBus, RunOutcome};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xEA, 0xEA, 0xEA, 0xEA]); // NOP x4
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.run_for_cycles(6), RunOutcome::BudgetExhausted { cycles: 6 });
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> RunOutcome {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            if !self.step() {
                return RunOutcome::Halted {
                    cycles: self.cycles - start_cycles,
                };
            }
        }

        RunOutcome::BudgetExhausted {
            cycles: self.cycles - start_cycles,
        }
    }

    // ========== Operand and Stack Helpers ==========

    /// Reads the value an instruction operates on.
    #[inline]
    pub(crate) fn read_operand(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Address(addr) => self.memory.read(addr),
            Operand::Accumulator => self.a,
            Operand::Implied | Operand::Relative(_) => 0,
        }
    }

    /// Stores the result of a read-modify-write instruction.
    #[inline]
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Address(addr) => self.memory.write(addr, value),
            Operand::Accumulator => self.a = value,
            Operand::Immediate(_) | Operand::Implied | Operand::Relative(_) => {}
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    #[inline]
    pub(crate) fn pull(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes high byte first so the word sits little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull();
        let hi = self.pull();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Memory Access ==========

    /// Borrows the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutably borrows the memory bus, bypassing the CPU.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
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
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register.
    ///
    /// Use `.bits()` for the packed NV-BDIZC byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{CPU, FlatMemory, Status};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.status(), Status::UNUSED | Status::INTERRUPT);
    /// assert_eq!(cpu.status().bits(), 0x24);
    /// ```
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns why the CPU last halted, if it has halted since the last reset.
    pub fn halt_reason(&self) -> Option<HaltReason> {
        self.halt
    }

    // ========== Register Setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Overrides the program counter loaded from the reset vector.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces the whole status register.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    // ========== Status Flag Accessors ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.status.contains(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.status.contains(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.status.contains(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.status.contains(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.status.contains(Status::INTERRUPT)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.status.contains(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.status.contains(Status::CARRY)
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.status.set(Status::NEGATIVE, value);
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.status.set(Status::OVERFLOW, value);
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.status.set(Status::BREAK, value);
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.status.set(Status::DECIMAL, value);
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.status.set(Status::INTERRUPT, value);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.status.set(Status::ZERO, value);
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.status.set(Status::CARRY, value);
    }
}
