//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking a mutable reference to the CPU and, where
//! the instruction has one, its already-resolved operand.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing;
use crate::cpu::HaltReason;
use crate::opcodes::{Mnemonic, OpcodeMetadata};
use crate::{MemoryBus, Status, CPU};

/// What the CPU should do with PC after an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Advance PC past the instruction.
    Next,
    /// The instruction already set PC.
    Jumped,
    /// Refuse to execute; PC stays on the instruction.
    Halt(HaltReason),
}

/// Resolves the operand for `metadata` at the current PC and runs the instruction.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) -> Flow {
    let operand = addressing::resolve(
        metadata.addressing_mode,
        &mut cpu.memory,
        cpu.pc,
        cpu.x,
        cpu.y,
    );

    match metadata.mnemonic {
        Mnemonic::Adc => alu::execute_adc(cpu, operand),
        Mnemonic::Sbc => alu::execute_sbc(cpu, operand),
        Mnemonic::And => alu::execute_and(cpu, operand),
        Mnemonic::Ora => alu::execute_ora(cpu, operand),
        Mnemonic::Eor => alu::execute_eor(cpu, operand),
        Mnemonic::Cmp => alu::execute_cmp(cpu, operand),
        Mnemonic::Cpx => alu::execute_cpx(cpu, operand),
        Mnemonic::Cpy => alu::execute_cpy(cpu, operand),
        Mnemonic::Bit => alu::execute_bit(cpu, operand),

        Mnemonic::Asl => shifts::execute_asl(cpu, operand),
        Mnemonic::Lsr => shifts::execute_lsr(cpu, operand),
        Mnemonic::Rol => shifts::execute_rol(cpu, operand),
        Mnemonic::Ror => shifts::execute_ror(cpu, operand),

        Mnemonic::Lda => load_store::execute_lda(cpu, operand),
        Mnemonic::Ldx => load_store::execute_ldx(cpu, operand),
        Mnemonic::Ldy => load_store::execute_ldy(cpu, operand),
        Mnemonic::Sta => load_store::execute_sta(cpu, operand),
        Mnemonic::Stx => load_store::execute_stx(cpu, operand),
        Mnemonic::Sty => load_store::execute_sty(cpu, operand),

        Mnemonic::Inc => inc_dec::execute_inc(cpu, operand),
        Mnemonic::Dec => inc_dec::execute_dec(cpu, operand),
        Mnemonic::Inx => inc_dec::execute_inx(cpu),
        Mnemonic::Iny => inc_dec::execute_iny(cpu),
        Mnemonic::Dex => inc_dec::execute_dex(cpu),
        Mnemonic::Dey => inc_dec::execute_dey(cpu),

        Mnemonic::Tax => transfer::execute_tax(cpu),
        Mnemonic::Tay => transfer::execute_tay(cpu),
        Mnemonic::Txa => transfer::execute_txa(cpu),
        Mnemonic::Tya => transfer::execute_tya(cpu),
        Mnemonic::Tsx => transfer::execute_tsx(cpu),
        Mnemonic::Txs => transfer::execute_txs(cpu),

        Mnemonic::Pha => stack::execute_pha(cpu),
        Mnemonic::Php => stack::execute_php(cpu),
        Mnemonic::Pla => stack::execute_pla(cpu),
        Mnemonic::Plp => stack::execute_plp(cpu),

        Mnemonic::Clc => flags::execute_flag(cpu, Status::CARRY, false),
        Mnemonic::Sec => flags::execute_flag(cpu, Status::CARRY, true),
        Mnemonic::Cli => flags::execute_flag(cpu, Status::INTERRUPT, false),
        Mnemonic::Sei => flags::execute_flag(cpu, Status::INTERRUPT, true),
        Mnemonic::Cld => flags::execute_flag(cpu, Status::DECIMAL, false),
        Mnemonic::Sed => flags::execute_flag(cpu, Status::DECIMAL, true),
        Mnemonic::Clv => flags::execute_flag(cpu, Status::OVERFLOW, false),

        Mnemonic::Nop => {}

        Mnemonic::Bcc
        | Mnemonic::Bcs
        | Mnemonic::Bne
        | Mnemonic::Beq
        | Mnemonic::Bpl
        | Mnemonic::Bmi
        | Mnemonic::Bvc
        | Mnemonic::Bvs => {
            let taken = branches::condition(metadata.mnemonic, cpu.status);
            return branches::execute_branch(cpu, operand, taken);
        }

        Mnemonic::Jmp => return control::execute_jmp(cpu, operand),
        Mnemonic::Jsr => return control::execute_jsr(cpu, operand),
        Mnemonic::Rts => return control::execute_rts(cpu),
        Mnemonic::Rti => return control::execute_rti(cpu),
        Mnemonic::Brk => return control::execute_brk(cpu),
    }

    Flow::Next
}
