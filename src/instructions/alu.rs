//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic
//! - CMP, CPX, CPY: Register comparison
//! - BIT: Bit test
//!
//! ADC and SBC honour the Decimal flag. The BCD corrections live in
//! `bcd_add` and `bcd_sub`; flag derivation is shared with binary mode and
//! always uses the corrected result.

use crate::addressing::Operand;
use crate::{MemoryBus, Status, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. Updates N, Z, C
/// and V.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let a = cpu.a;
    let carry_in = cpu.status.contains(Status::CARRY);

    let (result, carry_out) = if cpu.status.contains(Status::DECIMAL) {
        bcd_add(a, value, carry_in)
    } else {
        let sum = a as u16 + value as u16 + carry_in as u16;
        (sum as u8, sum > 0xFF)
    };

    // Both operands share a sign and the result does not
    let overflow = (a ^ result) & (value ^ result) & 0x80 != 0;

    cpu.status.set(Status::CARRY, carry_out);
    cpu.status.set(Status::OVERFLOW, overflow);
    cpu.status.update_nz(result);
    cpu.a = result;
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the inverted carry (the borrow) from the
/// accumulator. Carry is set afterwards when no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let a = cpu.a;
    let carry_in = cpu.status.contains(Status::CARRY);

    let (result, no_borrow) = if cpu.status.contains(Status::DECIMAL) {
        bcd_sub(a, value, carry_in)
    } else {
        let diff = a as i16 - value as i16 - (!carry_in) as i16;
        (diff as u8, diff >= 0)
    };

    // Operands differ in sign and the result's sign differs from A
    let overflow = (a ^ value) & (a ^ result) & 0x80 != 0;

    cpu.status.set(Status::CARRY, no_borrow);
    cpu.status.set(Status::OVERFLOW, overflow);
    cpu.status.update_nz(result);
    cpu.a = result;
}

/// Packed BCD addition. Returns the corrected byte and the decimal carry.
pub(crate) fn bcd_add(a: u8, value: u8, carry_in: bool) -> (u8, bool) {
    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in as u16;
    let mut hi = (a & 0xF0) as u16 + (value & 0xF0) as u16;

    if lo > 0x09 {
        hi += 0x10;
        lo += 0x06;
    }
    if hi > 0x90 {
        hi += 0x60;
    }

    let sum = (hi & 0xFFF0) | (lo & 0x0F);
    (sum as u8, sum > 0xFF)
}

/// Packed BCD subtraction. Returns the corrected byte and "no borrow".
pub(crate) fn bcd_sub(a: u8, value: u8, carry_in: bool) -> (u8, bool) {
    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - (!carry_in) as i16;
    let mut hi = (a & 0xF0) as i16 - (value & 0xF0) as i16;

    if lo < 0 {
        lo -= 0x06;
        // Pulls the high nibble down to the next multiple of 0x10
        hi -= 1;
    }
    let no_borrow = hi >= 0;
    if !no_borrow {
        hi -= 0x60;
    }

    let diff = (hi & 0xF0) | (lo & 0x0F);
    (diff as u8, no_borrow)
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a & cpu.read_operand(operand);
    cpu.status.update_nz(result);
    cpu.a = result;
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a | cpu.read_operand(operand);
    cpu.status.update_nz(result);
    cpu.a = result;
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.a ^ cpu.read_operand(operand);
    cpu.status.update_nz(result);
    cpu.a = result;
}

/// Register minus operand with no carry-in. Only N, Z and C change.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.status.set(Status::CARRY, register >= value);
    cpu.status.update_nz(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.a;
    compare(cpu, register, operand);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.x;
    compare(cpu, register, operand);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let register = cpu.y;
    compare(cpu, register, operand);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects `A & M`; N and V are copied from bits 7 and 6 of the operand.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.status.set(Status::ZERO, cpu.a & value == 0);
    cpu.status.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.status.set(Status::OVERFLOW, value & 0x40 != 0);
}
