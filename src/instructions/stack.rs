//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: None
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0x48); // PHA
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x42);
///
/// assert!(cpu.step());
///
/// assert_eq!(cpu.memory_mut().read(0x01FF), 0x42);
/// assert_eq!(cpu.sp(), 0xFE);
/// assert_eq!(cpu.pc(), 0x8001);
/// assert_eq!(cpu.cycles(), 3);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    cpu.push(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has Break and Unused set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.status.pushed();
    cpu.push(value);
}

/// Executes the PLA (Pull Accumulator) instruction. Sets N and Z.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.a = value;
    cpu.status.update_nz(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Break and Unused keep their current values; every other flag comes from
/// the pulled byte.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.status.restore_from_stack(value);
}
