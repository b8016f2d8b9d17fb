//! # NMOS 6502 Emulator Core
//!
//! An instruction-accurate MOS 6502 emulator: all 151 documented opcodes with
//! exact register and flag semantics, including decimal-mode arithmetic and
//! the indirect `JMP` page-wrap bug. Cycle counts are the documented
//! per-opcode minimums.
//!
//! The CPU owns a memory bus through the `MemoryBus` trait and knows nothing
//! else about the machine it runs in.
//!
//! ## Quick Start
//!
//! ```rust
//! use nmos6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$05; ADC #$03; JMP * (halts)
//! memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03, 0x4C, 0x04, 0x80]);
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.run(), 2);
//! assert_eq!(cpu.a(), 0x08);
//! assert_eq!(cpu.pc(), 0x8004);
//! ```
//!
//! ## Architecture
//!
//! - **Generic bus**: `CPU<M: MemoryBus>`; `FlatMemory` is the fast path and
//!   `AddressMap` composes RAM, ROM and NVRAM devices page by page
//! - **Table-driven decode**: every opcode's mnemonic, addressing mode, size
//!   and cycle cost live in `OPCODE_TABLE`
//! - **Decorators for diagnostics**: `BusSnooper` watches bus traffic and
//!   `Tracer` single-steps with disassembly, both without touching the core
//! - **Halting instead of errors**: an illegal opcode or a jump to self stops
//!   execution, and `CPU::halt_reason` says which
//!
//! ## Logging
//!
//! The crate logs through the `log` facade and never installs a logger.
//! Device attachment is logged at `info`, resets, halts and traced
//! instructions at `debug`, bus traffic seen by a `BusSnooper` at `trace`.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and flat memory
//! - `devices` - Page-mapped devices and the address map
//! - `status` - Status register flags
//! - `addressing` - Addressing modes and operand resolution
//! - `opcodes` - Opcode metadata table
//! - `disassembler` - Byte-to-text decoding
//! - `snoop` - Bus snooping decorator
//! - `trace` - Instruction tracer

pub mod addressing;
pub mod cpu;
pub mod devices;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod snoop;
pub mod status;
pub mod trace;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cpu::{HaltReason, RunOutcome, CPU, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR, STACK_BASE};
pub use devices::{AddressMap, Device, DeviceError, NvRamDevice, RamDevice, RomDevice};
pub use disassembler::{disassemble, disassemble_at, Instruction};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use snoop::BusSnooper;
pub use status::Status;
pub use trace::{Registers, TraceRecord, TraceStop, Tracer};
