//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC and BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the address after the branch (PC + 2). Only the base two
//! cycles are charged whether or not the branch is taken.

use super::Flow;
use crate::addressing::Operand;
use crate::cpu::HaltReason;
use crate::opcodes::Mnemonic;
use crate::{MemoryBus, Status, CPU};

/// Evaluates the branch condition for `mnemonic` against `status`.
///
/// Non-branch mnemonics are never taken.
pub(crate) fn condition(mnemonic: Mnemonic, status: Status) -> bool {
    match mnemonic {
        Mnemonic::Bcc => !status.contains(Status::CARRY),
        Mnemonic::Bcs => status.contains(Status::CARRY),
        Mnemonic::Bne => !status.contains(Status::ZERO),
        Mnemonic::Beq => status.contains(Status::ZERO),
        Mnemonic::Bpl => !status.contains(Status::NEGATIVE),
        Mnemonic::Bmi => status.contains(Status::NEGATIVE),
        Mnemonic::Bvc => !status.contains(Status::OVERFLOW),
        Mnemonic::Bvs => status.contains(Status::OVERFLOW),
        _ => false,
    }
}

/// Executes a conditional branch.
///
/// When `taken` is false the branch falls through to the next instruction.
/// A taken branch whose target is the branch itself halts the CPU instead.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    taken: bool,
) -> Flow {
    let Operand::Relative(offset) = operand else {
        return Flow::Next;
    };
    if !taken {
        return Flow::Next;
    }

    let target = cpu.pc.wrapping_add(2).wrapping_add_signed(offset as i16);
    if target == cpu.pc {
        return Flow::Halt(HaltReason::JumpToSelf { address: cpu.pc });
    }

    cpu.pc = target;
    Flow::Jumped
}
