//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the effective-address computations behind them.
//!
//! Resolution is pure with respect to CPU state: it reads only the operand
//! bytes following the opcode (and, for the indirect modes, the pointer they
//! name) and never writes. All arithmetic wraps the way the hardware does:
//! zero-page indexing and zero-page pointers stay inside page zero, everything
//! else wraps modulo 0x10000.

use crate::MemoryBus;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction (CLC, RTS, NOP).
    Implicit,

    /// Operates directly on the accumulator (LSR A, ROL A).
    Accumulator,

    /// 8-bit constant operand (LDA #$10).
    Immediate,

    /// 8-bit address in zero page (LDA $80).
    ZeroPage,

    /// Zero page address indexed by X, wraps within zero page (LDA $80,X).
    ZeroPageX,

    /// Zero page address indexed by Y, wraps within zero page (LDX $80,Y).
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address (JMP $1234).
    Absolute,

    /// 16-bit address indexed by X (LDA $1234,X).
    AbsoluteX,

    /// 16-bit address indexed by Y (LDA $1234,Y).
    AbsoluteY,

    /// Indirect jump through 16-bit pointer, JMP only (JMP ($FFFC)).
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference (LDA ($40,X)).
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y (LDA ($40),Y).
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// A resolved operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,
    /// The accumulator register.
    Accumulator,
    /// The operand byte itself.
    Immediate(u8),
    /// An effective memory address.
    Address(u16),
    /// A signed branch displacement.
    Relative(i8),
}

/// Reads a pointer stored in zero page; the high byte wraps to 0x00 after 0xFF.
#[inline]
pub fn zero_page_word<M: MemoryBus + ?Sized>(bus: &mut M, zp: u8) -> u16 {
    let lo = bus.read(zp as u16);
    let hi = bus.read(zp.wrapping_add(1) as u16);
    u16::from_le_bytes([lo, hi])
}

/// Reads the JMP (indirect) target, reproducing the NMOS page-wrap bug.
///
/// When the pointer's low byte is 0xFF the high byte is fetched from the start
/// of the same page rather than from the next page.
///
/// # Examples
///
/// ```
/// use nmos6502::{addressing::indirect_jump_target, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x30FF, 0x80);
/// mem.write(0x3000, 0x50);
/// mem.write(0x3100, 0x40);
/// assert_eq!(indirect_jump_target(&mut mem, 0x30FF), 0x5080);
/// ```
#[inline]
pub fn indirect_jump_target<M: MemoryBus + ?Sized>(bus: &mut M, pointer: u16) -> u16 {
    let lo = bus.read(pointer);
    let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr);
    u16::from_le_bytes([lo, hi])
}

/// Resolves the operand of the instruction whose opcode sits at `pc`.
///
/// `x` and `y` are the current index registers.
pub fn resolve<M: MemoryBus + ?Sized>(
    mode: AddressingMode,
    bus: &mut M,
    pc: u16,
    x: u8,
    y: u8,
) -> Operand {
    let operand_addr = pc.wrapping_add(1);

    match mode {
        AddressingMode::Implicit => Operand::Implied,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Immediate(bus.read(operand_addr)),
        AddressingMode::Relative => Operand::Relative(bus.read(operand_addr) as i8),
        AddressingMode::ZeroPage => Operand::Address(bus.read(operand_addr) as u16),
        AddressingMode::ZeroPageX => {
            Operand::Address(bus.read(operand_addr).wrapping_add(x) as u16)
        }
        AddressingMode::ZeroPageY => {
            Operand::Address(bus.read(operand_addr).wrapping_add(y) as u16)
        }
        AddressingMode::Absolute => Operand::Address(bus.read_word(operand_addr)),
        AddressingMode::AbsoluteX => {
            Operand::Address(bus.read_word(operand_addr).wrapping_add(x as u16))
        }
        AddressingMode::AbsoluteY => {
            Operand::Address(bus.read_word(operand_addr).wrapping_add(y as u16))
        }
        AddressingMode::Indirect => {
            let pointer = bus.read_word(operand_addr);
            Operand::Address(indirect_jump_target(bus, pointer))
        }
        AddressingMode::IndirectX => {
            let zp = bus.read(operand_addr).wrapping_add(x);
            Operand::Address(zero_page_word(bus, zp))
        }
        AddressingMode::IndirectY => {
            let zp = bus.read(operand_addr);
            Operand::Address(zero_page_word(bus, zp).wrapping_add(y as u16))
        }
    }
}
