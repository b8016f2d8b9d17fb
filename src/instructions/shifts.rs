//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each instruction works either on the accumulator or as a read-modify-write
//! on memory. The bit shifted out lands in C; N and Z follow the result.

use crate::addressing::Operand;
use crate::{MemoryBus, Status, CPU};

fn shift_with<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    op: impl Fn(u8, bool) -> (u8, bool),
) {
    let value = cpu.read_operand(operand);
    let (result, carry_out) = op(value, cpu.status.contains(Status::CARRY));
    cpu.write_operand(operand, result);
    cpu.status.set(Status::CARRY, carry_out);
    cpu.status.update_nz(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift_with(cpu, operand, |value, _| (value << 1, value & 0x80 != 0));
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag, so N is always
/// cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift_with(cpu, operand, |value, _| (value >> 1, value & 0x01 != 0));
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift_with(cpu, operand, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    shift_with(cpu, operand, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}
