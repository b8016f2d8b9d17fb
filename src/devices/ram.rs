//! RAM device implementation.
//!
//! Volatile, readable and writable storage: cleared by a hard reset, kept
//! across a soft reset.

use super::{page_align, Device, PAGE_SIZE};

/// Volatile RAM device.
///
/// The requested length is rounded up to a whole number of pages.
///
/// # Examples
///
/// ```rust
/// use nmos6502::{Device, RamDevice};
///
/// let mut ram = RamDevice::new(1000);
/// assert_eq!(ram.page_count(), 4);
///
/// ram.write(0x42, 0xAA);
/// assert_eq!(ram.read(0x42), 0xAA);
///
/// ram.hard_reset();
/// assert_eq!(ram.read(0x42), 0x00);
/// ```
pub struct RamDevice {
    data: Vec<u8>,
    name: String,
}

impl RamDevice {
    /// Create a zero-filled RAM device of at least `byte_len` bytes.
    ///
    /// A zero length yields a device with no pages, which `AddressMap::attach`
    /// rejects.
    pub fn new(byte_len: usize) -> Self {
        let len = page_align(byte_len);
        Self {
            data: vec![0; len],
            name: format!("RAM ({} bytes)", len),
        }
    }

    /// Load bytes into RAM at the specified offset.
    ///
    /// Bytes beyond the end of the device are dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmos6502::{Device, RamDevice};
    ///
    /// let mut ram = RamDevice::new(256);
    /// ram.load_bytes(0x10, &[0xA9, 0x42]);
    /// assert_eq!(ram.read(0x10), 0xA9);
    /// assert_eq!(ram.read(0x11), 0x42);
    /// ```
    pub fn load_bytes(&mut self, offset: u16, bytes: &[u8]) {
        let start = (offset as usize).min(self.data.len());
        let len = bytes.len().min(self.data.len() - start);
        self.data[start..start + len].copy_from_slice(&bytes[..len]);
    }
}

impl Device for RamDevice {
    fn read(&mut self, offset: u16) -> u8 {
        self.data[offset as usize]
    }

    fn write(&mut self, offset: u16, value: u8) {
        self.data[offset as usize] = value;
    }

    fn page_count(&self) -> usize {
        self.data.len() / PAGE_SIZE
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn hard_reset(&mut self) {
        self.data.fill(0);
    }
}
