//! # Execution Tracing
//!
//! `Tracer` drives a borrowed CPU one instruction at a time, disassembling
//! each instruction before it runs and capturing the register file on either
//! side of it. Each step is logged at `debug` level as
//!
//! ```text
//! 0400: LDA #$10     : A:10 X:00 Y:00 S:FF SR:..-..I..
//! ```
//!
//! Breakpoints and a step budget make it usable for stepping through
//! untrusted programs that might never halt.

use std::collections::BTreeSet;

use crate::disassembler::disassemble_at;
use crate::{MemoryBus, Status, CPU};

/// Renders a status register in `NV-BDIZC` order, `.` for a clear flag.
///
/// Bit 5 is always shown as `-`.
///
/// ```
/// use nmos6502::{trace::format_flags, Status};
///
/// assert_eq!(format_flags(Status::UNUSED | Status::INTERRUPT), "..-..I..");
/// assert_eq!(format_flags(Status::all()), "NV-BDIZC");
/// ```
pub fn format_flags(status: Status) -> String {
    const LAYOUT: [(Status, char); 8] = [
        (Status::NEGATIVE, 'N'),
        (Status::OVERFLOW, 'V'),
        (Status::UNUSED, '-'),
        (Status::BREAK, 'B'),
        (Status::DECIMAL, 'D'),
        (Status::INTERRUPT, 'I'),
        (Status::ZERO, 'Z'),
        (Status::CARRY, 'C'),
    ];

    LAYOUT
        .iter()
        .map(|&(flag, c)| {
            if flag == Status::UNUSED || status.contains(flag) {
                c
            } else {
                '.'
            }
        })
        .collect()
}

/// Snapshot of the programmer-visible registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
}

impl Registers {
    pub fn capture<M: MemoryBus>(cpu: &CPU<M>) -> Self {
        Self {
            a: cpu.a(),
            x: cpu.x(),
            y: cpu.y(),
            sp: cpu.sp(),
            pc: cpu.pc(),
            status: cpu.status(),
        }
    }
}

impl std::fmt::Display for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} S:{:02X} SR:{}",
            self.a,
            self.x,
            self.y,
            self.sp,
            format_flags(self.status)
        )
    }
}

/// One traced instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    /// Address the instruction was fetched from.
    pub pc: u16,
    /// Disassembly of the instruction.
    pub text: String,
    pub before: Registers,
    pub after: Registers,
    /// Cycles charged for the instruction, 0 if it halted.
    pub cycles: u64,
    /// False when the CPU halted instead of executing.
    pub executed: bool,
}

impl std::fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04X}: {:<12} : {}", self.pc, self.text, self.after)
    }
}

/// Why `Tracer::run` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStop {
    /// The CPU halted; see `CPU::halt_reason`.
    Halted,
    /// PC reached a breakpoint. The instruction there has not run yet.
    Breakpoint(u16),
    /// The step budget ran out.
    StepLimit,
}

/// Single-steps a CPU, recording and logging every instruction.
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, Tracer};
/// use nmos6502::trace::TraceStop;
///
/// let mut mem = FlatMemory::new();
/// // LDX #$03; DEX; BNE -3; JMP *
/// mem.load(0x0400, &[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0x4C, 0x05, 0x04]);
///
/// let mut cpu = CPU::new(mem);
/// cpu.set_pc(0x0400);
///
/// let mut tracer = Tracer::new(&mut cpu);
/// tracer.add_breakpoint(0x0405);
/// assert_eq!(tracer.run(100), TraceStop::Breakpoint(0x0405));
/// assert_eq!(tracer.run(100), TraceStop::Halted);
/// assert_eq!(cpu.x(), 0);
/// ```
pub struct Tracer<'a, M: MemoryBus> {
    cpu: &'a mut CPU<M>,
    breakpoints: BTreeSet<u16>,
}

impl<'a, M: MemoryBus> Tracer<'a, M> {
    pub fn new(cpu: &'a mut CPU<M>) -> Self {
        Self {
            cpu,
            breakpoints: BTreeSet::new(),
        }
    }

    pub fn add_breakpoint(&mut self, addr: u16) {
        self.breakpoints.insert(addr);
    }

    pub fn remove_breakpoint(&mut self, addr: u16) {
        self.breakpoints.remove(&addr);
    }

    pub fn cpu(&self) -> &CPU<M> {
        &*self.cpu
    }

    /// Executes one instruction and returns its record.
    ///
    /// Breakpoints are not consulted. The disassembly reads the instruction
    /// bytes through the CPU's bus before execution.
    pub fn step(&mut self) -> TraceRecord {
        let before = Registers::capture(&*self.cpu);
        let text = disassemble_at(self.cpu.memory_mut(), before.pc).to_string();
        let start_cycles = self.cpu.cycles();

        let executed = self.cpu.step();

        let record = TraceRecord {
            pc: before.pc,
            text,
            before,
            after: Registers::capture(&*self.cpu),
            cycles: self.cpu.cycles() - start_cycles,
            executed,
        };
        log::debug!("{}", record);
        record
    }

    /// Steps until the CPU halts, a breakpoint is reached, or `max_steps`
    /// instructions have run.
    ///
    /// A breakpoint on the instruction PC already points at does not stop
    /// the first step, so calling `run` again resumes past it.
    pub fn run(&mut self, max_steps: u64) -> TraceStop {
        for n in 0..max_steps {
            let pc = self.cpu.pc();
            if n > 0 && self.breakpoints.contains(&pc) {
                return TraceStop::Breakpoint(pc);
            }
            if !self.step().executed {
                return TraceStop::Halted;
            }
        }
        TraceStop::StepLimit
    }
}
