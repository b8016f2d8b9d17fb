//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: Subroutine call and return
//! - BRK / RTI: Software interrupt and return from interrupt
//! - NOP: No operation
//!
//! Return addresses follow the hardware: JSR pushes the address of its own
//! last byte and RTS adds one after pulling, while BRK pushes PC+2 and RTI
//! resumes at exactly the pulled address.

use super::Flow;
use crate::addressing::Operand;
use crate::cpu::{HaltReason, IRQ_VECTOR};
use crate::{MemoryBus, Status, CPU};

/// Executes the JMP (Jump) instruction.
///
/// The operand has already been resolved, including the indirect-mode page
/// wrap bug. A jump whose target is the JMP itself halts the CPU without
/// changing PC.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> Flow {
    let Operand::Address(target) = operand else {
        return Flow::Next;
    };
    if target == cpu.pc {
        return Flow::Halt(HaltReason::JumpToSelf { address: cpu.pc });
    }

    cpu.pc = target;
    Flow::Jumped
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC+2 (high byte first) then jumps to the target.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> Flow {
    let Operand::Address(target) = operand else {
        return Flow::Next;
    };

    let return_address = cpu.pc.wrapping_add(2);
    cpu.push_word(return_address);
    cpu.pc = target;
    Flow::Jumped
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    Flow::Jumped
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Pushing PC+2 to the stack (high byte first, then low byte)
/// 2. Pushing the status register with Break and Unused set
/// 3. Setting the I (interrupt disable) flag
/// 4. Loading the PC from the IRQ vector at $FFFE/$FFFF
///
/// The live Break flag is not changed; it only exists in the pushed copy.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    let return_address = cpu.pc.wrapping_add(2);
    cpu.push_word(return_address);

    let status = cpu.status.pushed();
    cpu.push(status);

    cpu.status.insert(Status::INTERRUPT);
    cpu.pc = cpu.memory.read_word(IRQ_VECTOR);
    Flow::Jumped
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status register (Break and Unused keep their current values,
/// as with PLP), then the return address. Unlike RTS nothing is added to the
/// pulled address.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) -> Flow {
    let status = cpu.pull();
    cpu.status.restore_from_stack(status);
    cpu.pc = cpu.pull_word();
    Flow::Jumped
}
