//! Instruction decoder for the 6502 disassembler

use crate::disassembler::Instruction;
use crate::opcodes;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// `None` for an empty slice, an undocumented opcode, or an instruction whose
/// operand bytes run past the end of `bytes`.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = opcodes::lookup(opcode)?;
    let operand_len = metadata.addressing_mode.operand_bytes() as usize;

    Some(Instruction {
        address,
        opcode,
        mnemonic: Some(metadata.mnemonic),
        addressing_mode: metadata.addressing_mode,
        operand_bytes: rest.get(..operand_len)?.to_vec(),
        base_cycles: metadata.base_cycles,
    })
}
