//! 6502 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.
//! Decoding is driven by the same `OPCODE_TABLE` the CPU executes from, so
//! the disassembly of a byte sequence always agrees with how it would run.

pub mod decoder;
pub mod formatter;

use crate::addressing::AddressingMode;
use crate::opcodes::Mnemonic;
use crate::MemoryBus;

/// A single disassembled instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic, `None` for a byte that is not a documented opcode
    pub mnemonic: Option<Mnemonic>,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Base cycle cost, 0 for data bytes
    pub base_cycles: u8,
}

impl Instruction {
    /// Builds the `.byte` pseudo-instruction for an undecodable byte.
    pub fn data(address: u16, byte: u8) -> Self {
        Self {
            address,
            opcode: byte,
            mnemonic: None,
            addressing_mode: AddressingMode::Implicit,
            operand_bytes: Vec::new(),
            base_cycles: 0,
        }
    }

    /// Total size in bytes (opcode + operands).
    pub fn size_bytes(&self) -> u8 {
        1 + self.operand_bytes.len() as u8
    }

    /// True for `.byte` pseudo-instructions.
    pub fn is_data(&self) -> bool {
        self.mnemonic.is_none()
    }

    /// Operand bytes assembled little-endian (0 when there are none).
    pub fn operand_value(&self) -> u16 {
        match self.operand_bytes.as_slice() {
            [lo] => *lo as u16,
            [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
            [] => 0,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&formatter::format_instruction(self))
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// `start_address` is the address of `bytes[0]`. Bytes that are not a
/// documented opcode, and a final instruction truncated by the end of the
/// slice, come out as one `.byte` entry per byte.
///
/// # Examples
///
/// ```
/// use nmos6502::disassembler::disassemble;
///
/// let listing: Vec<String> = disassemble(&[0xA9, 0x10, 0x02, 0xD0, 0xFB], 0x0600)
///     .iter()
///     .map(|i| i.to_string())
///     .collect();
///
/// assert_eq!(listing, ["LDA #$10", ".byte $02", "BNE $0600"]);
/// ```
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start_address;

    while offset < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[offset..], address)
            .unwrap_or_else(|| Instruction::data(address, bytes[offset]));
        let size = instr.size_bytes();
        offset += size as usize;
        address = address.wrapping_add(size as u16);
        instructions.push(instr);
    }

    instructions
}

/// Decodes the instruction at `address` directly from a bus.
///
/// Operand bytes are fetched with wrapping addresses. The reads go through
/// the bus like any other access, so a `BusSnooper` will see them.
pub fn disassemble_at<M: MemoryBus + ?Sized>(bus: &mut M, address: u16) -> Instruction {
    let bytes = [
        bus.read(address),
        bus.read(address.wrapping_add(1)),
        bus.read(address.wrapping_add(2)),
    ];
    decoder::decode_instruction(&bytes, address)
        .unwrap_or_else(|| Instruction::data(address, bytes[0]))
}
