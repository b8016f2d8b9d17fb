//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations. The CPU never owns memory itself; every opcode fetch,
//! operand read and store goes through this trait.
//!
//! - Flat 64KB RAM (`FlatMemory`, the fast path)
//! - Page-mapped RAM/ROM/NVRAM devices (`AddressMap` in the `devices` module)
//! - Diagnostic wrappers (`BusSnooper` in the `snoop` module)
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads return a fixed value
//! - Writes to ROM/unmapped regions are ignored

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&mut self)`: reads may have side effects (monitors, I/O registers)
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
/// - Reset hooks default to no-ops so simple buses only implement two methods
///
/// # Examples
///
/// ```
/// use nmos6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use nmos6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&mut self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///     }
///
///     fn hard_reset(&mut self) {
///         self.ram = [0; 0x8000];
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. Unmapped addresses return whatever the
    /// implementation defines as its open-bus value.
    fn read(&mut self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Writes to read-only or unmapped addresses
    /// are silently discarded.
    fn write(&mut self, addr: u16, value: u8);

    /// Soft reset hook. Volatile contents survive.
    fn soft_reset(&mut self) {}

    /// Hard reset hook. Volatile RAM is cleared, ROM and NVRAM survive.
    fn hard_reset(&mut self) {}

    /// Reads a little-endian word, the high byte from `addr + 1` (wrapping at 0xFFFF).
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFF, 0x34);
    /// mem.write(0x0000, 0x12);
    /// assert_eq!(mem.read_word(0xFFFF), 0x1234);
    /// ```
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr);
        let hi = self.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }
}

impl<B: MemoryBus + ?Sized> MemoryBus for Box<B> {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }

    fn soft_reset(&mut self) {
        (**self).soft_reset()
    }

    fn hard_reset(&mut self) {
        (**self).hard_reset()
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are backed by one contiguous array. This is the fast
/// path for the CPU: with `CPU<FlatMemory>` every bus access monomorphises to
/// a bounds-check-free array index.
///
/// # Examples
///
/// ```
/// use nmos6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.load(0x8000, &[0xEA]); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `bytes` into memory starting at `base`.
    ///
    /// Bytes that would land past 0xFFFF are dropped.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        let start = base as usize;
        let len = bytes.len().min(self.data.len() - start);
        self.data[start..start + len].copy_from_slice(&bytes[..len]);
    }

    /// Borrows the full 64KB image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn hard_reset(&mut self) {
        self.data.fill(0);
    }
}
