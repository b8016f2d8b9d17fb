//! # Opcode Metadata Table
//!
//! This module contains the 256-entry opcode table that serves as the single
//! source of truth for instruction decoding, sizing, cycle accounting and
//! disassembly.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! encodings are `None`; the CPU treats them as a halt and the disassembler
//! renders them as `.byte`.
//!
//! Cycle counts are the documented minimums. Page-crossing and taken-branch
//! penalties are not modelled.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

/// The 56 documented 6502 instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Mnemonic {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
}

impl Mnemonic {
    /// Upper-case assembler spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::And => "AND",
            Mnemonic::Asl => "ASL",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Bcs => "BCS",
            Mnemonic::Beq => "BEQ",
            Mnemonic::Bit => "BIT",
            Mnemonic::Bmi => "BMI",
            Mnemonic::Bne => "BNE",
            Mnemonic::Bpl => "BPL",
            Mnemonic::Brk => "BRK",
            Mnemonic::Bvc => "BVC",
            Mnemonic::Bvs => "BVS",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cld => "CLD",
            Mnemonic::Cli => "CLI",
            Mnemonic::Clv => "CLV",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Cpx => "CPX",
            Mnemonic::Cpy => "CPY",
            Mnemonic::Dec => "DEC",
            Mnemonic::Dex => "DEX",
            Mnemonic::Dey => "DEY",
            Mnemonic::Eor => "EOR",
            Mnemonic::Inc => "INC",
            Mnemonic::Inx => "INX",
            Mnemonic::Iny => "INY",
            Mnemonic::Jmp => "JMP",
            Mnemonic::Jsr => "JSR",
            Mnemonic::Lda => "LDA",
            Mnemonic::Ldx => "LDX",
            Mnemonic::Ldy => "LDY",
            Mnemonic::Lsr => "LSR",
            Mnemonic::Nop => "NOP",
            Mnemonic::Ora => "ORA",
            Mnemonic::Pha => "PHA",
            Mnemonic::Php => "PHP",
            Mnemonic::Pla => "PLA",
            Mnemonic::Plp => "PLP",
            Mnemonic::Rol => "ROL",
            Mnemonic::Ror => "ROR",
            Mnemonic::Rti => "RTI",
            Mnemonic::Rts => "RTS",
            Mnemonic::Sbc => "SBC",
            Mnemonic::Sec => "SEC",
            Mnemonic::Sed => "SED",
            Mnemonic::Sei => "SEI",
            Mnemonic::Sta => "STA",
            Mnemonic::Stx => "STX",
            Mnemonic::Sty => "STY",
            Mnemonic::Tax => "TAX",
            Mnemonic::Tay => "TAY",
            Mnemonic::Tsx => "TSX",
            Mnemonic::Txa => "TXA",
            Mnemonic::Txs => "TXS",
            Mnemonic::Tya => "TYA",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single documented 6502 opcode.
///
/// # Examples
///
/// ```
/// use nmos6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Minimum cycle cost.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands, 1-3).
    pub size_bytes: u8,
}

#[rustfmt::skip]
const DEFINITIONS: [(u8, Mnemonic, AddressingMode, u8); 151] = {
    use Mnemonic::*;
    [
        (0x69, Adc, Immediate, 2), (0x65, Adc, ZeroPage, 3), (0x75, Adc, ZeroPageX, 4),
        (0x6D, Adc, Absolute, 4), (0x7D, Adc, AbsoluteX, 4), (0x79, Adc, AbsoluteY, 4),
        (0x61, Adc, IndirectX, 6), (0x71, Adc, IndirectY, 5),

        (0x29, And, Immediate, 2), (0x25, And, ZeroPage, 3), (0x35, And, ZeroPageX, 4),
        (0x2D, And, Absolute, 4), (0x3D, And, AbsoluteX, 4), (0x39, And, AbsoluteY, 4),
        (0x21, And, IndirectX, 6), (0x31, And, IndirectY, 5),

        (0x0A, Asl, Accumulator, 2), (0x06, Asl, ZeroPage, 5), (0x16, Asl, ZeroPageX, 6),
        (0x0E, Asl, Absolute, 6), (0x1E, Asl, AbsoluteX, 7),

        (0x90, Bcc, Relative, 2), (0xB0, Bcs, Relative, 2), (0xF0, Beq, Relative, 2),
        (0x30, Bmi, Relative, 2), (0xD0, Bne, Relative, 2), (0x10, Bpl, Relative, 2),
        (0x50, Bvc, Relative, 2), (0x70, Bvs, Relative, 2),

        (0x24, Bit, ZeroPage, 3), (0x2C, Bit, Absolute, 4),

        (0x00, Brk, Implicit, 7),

        (0x18, Clc, Implicit, 2), (0xD8, Cld, Implicit, 2), (0x58, Cli, Implicit, 2),
        (0xB8, Clv, Implicit, 2),

        (0xC9, Cmp, Immediate, 2), (0xC5, Cmp, ZeroPage, 3), (0xD5, Cmp, ZeroPageX, 4),
        (0xCD, Cmp, Absolute, 4), (0xDD, Cmp, AbsoluteX, 4), (0xD9, Cmp, AbsoluteY, 4),
        (0xC1, Cmp, IndirectX, 6), (0xD1, Cmp, IndirectY, 5),

        (0xE0, Cpx, Immediate, 2), (0xE4, Cpx, ZeroPage, 3), (0xEC, Cpx, Absolute, 4),
        (0xC0, Cpy, Immediate, 2), (0xC4, Cpy, ZeroPage, 3), (0xCC, Cpy, Absolute, 4),

        (0xC6, Dec, ZeroPage, 5), (0xD6, Dec, ZeroPageX, 6), (0xCE, Dec, Absolute, 6),
        (0xDE, Dec, AbsoluteX, 7),
        (0xCA, Dex, Implicit, 2), (0x88, Dey, Implicit, 2),

        (0x49, Eor, Immediate, 2), (0x45, Eor, ZeroPage, 3), (0x55, Eor, ZeroPageX, 4),
        (0x4D, Eor, Absolute, 4), (0x5D, Eor, AbsoluteX, 4), (0x59, Eor, AbsoluteY, 4),
        (0x41, Eor, IndirectX, 6), (0x51, Eor, IndirectY, 5),

        (0xE6, Inc, ZeroPage, 5), (0xF6, Inc, ZeroPageX, 6), (0xEE, Inc, Absolute, 6),
        (0xFE, Inc, AbsoluteX, 7),
        (0xE8, Inx, Implicit, 2), (0xC8, Iny, Implicit, 2),

        (0x4C, Jmp, Absolute, 3), (0x6C, Jmp, Indirect, 5),
        (0x20, Jsr, Absolute, 6),

        (0xA9, Lda, Immediate, 2), (0xA5, Lda, ZeroPage, 3), (0xB5, Lda, ZeroPageX, 4),
        (0xAD, Lda, Absolute, 4), (0xBD, Lda, AbsoluteX, 4), (0xB9, Lda, AbsoluteY, 4),
        (0xA1, Lda, IndirectX, 6), (0xB1, Lda, IndirectY, 5),

        (0xA2, Ldx, Immediate, 2), (0xA6, Ldx, ZeroPage, 3), (0xB6, Ldx, ZeroPageY, 4),
        (0xAE, Ldx, Absolute, 4), (0xBE, Ldx, AbsoluteY, 4),

        (0xA0, Ldy, Immediate, 2), (0xA4, Ldy, ZeroPage, 3), (0xB4, Ldy, ZeroPageX, 4),
        (0xAC, Ldy, Absolute, 4), (0xBC, Ldy, AbsoluteX, 4),

        (0x4A, Lsr, Accumulator, 2), (0x46, Lsr, ZeroPage, 5), (0x56, Lsr, ZeroPageX, 6),
        (0x4E, Lsr, Absolute, 6), (0x5E, Lsr, AbsoluteX, 7),

        (0xEA, Nop, Implicit, 2),

        (0x09, Ora, Immediate, 2), (0x05, Ora, ZeroPage, 3), (0x15, Ora, ZeroPageX, 4),
        (0x0D, Ora, Absolute, 4), (0x1D, Ora, AbsoluteX, 4), (0x19, Ora, AbsoluteY, 4),
        (0x01, Ora, IndirectX, 6), (0x11, Ora, IndirectY, 5),

        (0x48, Pha, Implicit, 3), (0x08, Php, Implicit, 3), (0x68, Pla, Implicit, 4),
        (0x28, Plp, Implicit, 4),

        (0x2A, Rol, Accumulator, 2), (0x26, Rol, ZeroPage, 5), (0x36, Rol, ZeroPageX, 6),
        (0x2E, Rol, Absolute, 6), (0x3E, Rol, AbsoluteX, 7),

        (0x6A, Ror, Accumulator, 2), (0x66, Ror, ZeroPage, 5), (0x76, Ror, ZeroPageX, 6),
        (0x6E, Ror, Absolute, 6), (0x7E, Ror, AbsoluteX, 7),

        (0x40, Rti, Implicit, 6), (0x60, Rts, Implicit, 6),

        (0xE9, Sbc, Immediate, 2), (0xE5, Sbc, ZeroPage, 3), (0xF5, Sbc, ZeroPageX, 4),
        (0xED, Sbc, Absolute, 4), (0xFD, Sbc, AbsoluteX, 4), (0xF9, Sbc, AbsoluteY, 4),
        (0xE1, Sbc, IndirectX, 6), (0xF1, Sbc, IndirectY, 5),

        (0x38, Sec, Implicit, 2), (0xF8, Sed, Implicit, 2), (0x78, Sei, Implicit, 2),

        (0x85, Sta, ZeroPage, 3), (0x95, Sta, ZeroPageX, 4), (0x8D, Sta, Absolute, 4),
        (0x9D, Sta, AbsoluteX, 5), (0x99, Sta, AbsoluteY, 5), (0x81, Sta, IndirectX, 6),
        (0x91, Sta, IndirectY, 6),

        (0x86, Stx, ZeroPage, 3), (0x96, Stx, ZeroPageY, 4), (0x8E, Stx, Absolute, 4),
        (0x84, Sty, ZeroPage, 3), (0x94, Sty, ZeroPageX, 4), (0x8C, Sty, Absolute, 4),

        (0xAA, Tax, Implicit, 2), (0xA8, Tay, Implicit, 2), (0xBA, Tsx, Implicit, 2),
        (0x8A, Txa, Implicit, 2), (0x9A, Txs, Implicit, 2), (0x98, Tya, Implicit, 2),
    ]
};

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table: [Option<OpcodeMetadata>; 256] = [None; 256];
    let mut i = 0;
    while i < DEFINITIONS.len() {
        let (opcode, mnemonic, addressing_mode, base_cycles) = DEFINITIONS[i];
        table[opcode as usize] = Some(OpcodeMetadata {
            mnemonic,
            addressing_mode,
            base_cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
        });
        i += 1;
    }
    table
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// Illegal/undocumented encodings are `None`.
pub static OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

/// Looks up the metadata for `opcode`.
#[inline]
pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}
