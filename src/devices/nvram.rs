//! Non-volatile RAM device implementation.

use super::{page_align, Device, PAGE_SIZE};

/// Writable memory whose contents survive both soft and hard resets.
///
/// Typically used to hold a complete program image, e.g. a functional test
/// binary that expects to patch its own data.
///
/// # Examples
///
/// ```rust
/// use nmos6502::{Device, NvRamDevice};
///
/// let mut nv = NvRamDevice::new(vec![0x11; 300]);
/// assert_eq!(nv.page_count(), 2);
///
/// nv.write(0, 0x22);
/// nv.hard_reset();
/// assert_eq!(nv.read(0), 0x22);
/// ```
pub struct NvRamDevice {
    data: Vec<u8>,
    name: String,
}

impl NvRamDevice {
    /// Create an NVRAM device initialised with `image`, zero-padded to a page.
    pub fn new(mut image: Vec<u8>) -> Self {
        let len = page_align(image.len());
        image.resize(len, 0);
        Self {
            data: image,
            name: format!("RAM (NV) ({} bytes)", len),
        }
    }
}

impl Device for NvRamDevice {
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
}
