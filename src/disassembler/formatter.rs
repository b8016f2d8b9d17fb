//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;

/// Format a single instruction as assembly text
///
/// Classic MOS syntax: `LDA #$10`, `STA $1234,X`, `JMP ($30FF)`,
/// `LDA ($40),Y`. Branches show their absolute target rather than the
/// raw offset, and undecodable bytes render as `.byte $XX`.
pub fn format_instruction(instr: &Instruction) -> String {
    let Some(mnemonic) = instr.mnemonic else {
        return format!(".byte ${:02X}", instr.opcode);
    };

    let operand = format_operand(instr);
    if operand.is_empty() {
        mnemonic.to_string()
    } else {
        format!("{} {}", mnemonic, operand)
    }
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    let value = instr.operand_value();
    match instr.addressing_mode {
        Implicit => String::new(),
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02X}", value),
        ZeroPage => format!("${:02X}", value),
        ZeroPageX => format!("${:02X},X", value),
        ZeroPageY => format!("${:02X},Y", value),
        Relative => {
            let target = instr
                .address
                .wrapping_add(2)
                .wrapping_add_signed(value as u8 as i8 as i16);
            format!("${:04X}", target)
        }
        Absolute => format!("${:04X}", value),
        AbsoluteX => format!("${:04X},X", value),
        AbsoluteY => format!("${:04X},Y", value),
        Indirect => format!("(${:04X})", value),
        IndirectX => format!("(${:02X},X)", value),
        IndirectY => format!("(${:02X}),Y", value),
    }
}

/// Formats an instruction as a listing line: address, raw bytes, then text.
///
/// ```
/// use nmos6502::disassembler::{decoder::decode_instruction, formatter::format_listing_line};
///
/// let instr = decode_instruction(&[0x8D, 0x00, 0x02], 0xC000).unwrap();
/// assert_eq!(format_listing_line(&instr), "C000  8D 00 02  STA $0200");
/// ```
pub fn format_listing_line(instr: &Instruction) -> String {
    let raw: Vec<String> = std::iter::once(instr.opcode)
        .chain(instr.operand_bytes.iter().copied())
        .map(|b| format!("{:02X}", b))
        .collect();
    format!(
        "{:04X}  {:<8}  {}",
        instr.address,
        raw.join(" "),
        format_instruction(instr)
    )
}
