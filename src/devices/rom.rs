//! ROM device implementation.
//!
//! Provides read-only memory storage via the Device trait.

use super::{page_align, Device, PAGE_SIZE};

/// Read-only memory device.
///
/// Writes are silently ignored and neither reset touches the contents. The
/// image is zero-padded up to a whole page.
///
/// # Examples
///
/// ```rust
/// use nmos6502::{Device, RomDevice};
///
/// let mut rom = RomDevice::new(vec![0xEA, 0xEA, 0xEA]);
/// assert_eq!(rom.page_count(), 1);
///
/// rom.write(0, 0xFF);
/// assert_eq!(rom.read(0), 0xEA);
/// assert_eq!(rom.read(3), 0x00); // padding
/// ```
pub struct RomDevice {
    data: Vec<u8>,
    name: String,
}

impl RomDevice {
    /// Create a ROM device holding `data`.
    pub fn new(mut data: Vec<u8>) -> Self {
        let image_len = data.len();
        data.resize(page_align(image_len), 0);
        Self {
            data,
            name: format!("ROM ({} bytes)", image_len),
        }
    }
}

impl Device for RomDevice {
    fn read(&mut self, offset: u16) -> u8 {
        self.data[offset as usize]
    }

    fn write(&mut self, _offset: u16, _value: u8) {}

    fn page_count(&self) -> usize {
        self.data.len() / PAGE_SIZE
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rom_write_ignored() {
        let mut rom = RomDevice::new(vec![0xAA; 256]);

        rom.write(0, 0xFF);
        rom.write(100, 0xFF);

        assert_eq!(rom.read(0), 0xAA);
        assert_eq!(rom.read(100), 0xAA);
    }

    #[test]
    fn test_rom_survives_resets() {
        let mut rom = RomDevice::new(vec![0x5A; 16]);
        rom.soft_reset();
        rom.hard_reset();
        assert_eq!(rom.read(15), 0x5A);
    }

    #[test]
    fn test_rom_with_reset_vector() {
        let mut data = vec![0; 0x4000];
        data[0x3FFC] = 0x00;
        data[0x3FFD] = 0xC0;

        let mut rom = RomDevice::new(data);

        assert_eq!(rom.page_count(), 0x40);
        assert_eq!(rom.read(0x3FFC), 0x00);
        assert_eq!(rom.read(0x3FFD), 0xC0);
    }
}
