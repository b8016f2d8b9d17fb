//! # Processor Status Register
//!
//! The 6502 packs its condition flags into a single byte (`NV-BDIZC`).
//! Bit 5 has no flip-flop behind it and Break only exists in copies of the
//! register pushed onto the stack, but both are carried here so that the
//! byte the program observes through `PHP` is reproducible.

use bitflags::bitflags;

bitflags! {
    /// Processor status flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::Status;
    ///
    /// let mut p = Status::UNUSED | Status::INTERRUPT;
    /// p.update_nz(0x80);
    /// assert!(p.contains(Status::NEGATIVE));
    /// assert!(!p.contains(Status::ZERO));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry out of bit 7, or "no borrow" after a subtraction.
        const CARRY = 0b0000_0001;
        /// Result was zero.
        const ZERO = 0b0000_0010;
        /// Maskable interrupts disabled.
        const INTERRUPT = 0b0000_0100;
        /// ADC/SBC operate on packed BCD.
        const DECIMAL = 0b0000_1000;
        /// Set in status bytes pushed by BRK and PHP.
        const BREAK = 0b0001_0000;
        /// Bit 5, reads back as 1 on real hardware.
        const UNUSED = 0b0010_0000;
        /// Signed overflow.
        const OVERFLOW = 0b0100_0000;
        /// Bit 7 of the result.
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Bits that PLP and RTI cannot change.
    pub const STACK_ONLY: Status = Status::BREAK.union(Status::UNUSED);

    /// Sets Negative from bit 7 of `value` and Zero when `value` is zero.
    ///
    /// Both flags are always written, every other flag is left alone.
    #[inline]
    pub fn update_nz(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Replaces every flag except Break and Unused with the bits of `pulled`.
    ///
    /// Used by PLP and RTI: the pushed copy of Break/Unused has no register
    /// to land in, so the current values are kept.
    #[inline]
    pub fn restore_from_stack(&mut self, pulled: u8) {
        let kept = *self & Status::STACK_ONLY;
        *self = (Status::from_bits_retain(pulled) - Status::STACK_ONLY) | kept;
    }

    /// The byte PHP and BRK push: Break and Unused forced on.
    #[inline]
    pub fn pushed(self) -> u8 {
        (self | Status::STACK_ONLY).bits()
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::UNUSED | Status::INTERRUPT
    }
}
