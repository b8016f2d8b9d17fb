//! Page-mapped device support for the 6502 emulator.
//!
//! This module composes independent memory devices (RAM, ROM, non-volatile RAM)
//! into a single 64KB address space that the CPU sees through `MemoryBus`.
//!
//! # Architecture
//!
//! - **Device trait**: a block of whole 256-byte pages addressed by offset
//! - **AddressMap**: a 256-entry page table routing each access to its device
//! - **Device implementations**: `RamDevice`, `RomDevice`, `NvRamDevice`
//!
//! Attach-time rules are strict: a device must start on a page boundary, hold
//! at least one page, fit below 0x10000, and not overlap anything already
//! attached. Violations are reported as `DeviceError` and leave the map
//! unchanged.
//!
//! # Example
//!
//! ```rust
//! use nmos6502::{AddressMap, MemoryBus, RamDevice, RomDevice};
//!
//! let mut map = AddressMap::new();
//! map.attach(0x0000, Box::new(RamDevice::new(0x4000))).unwrap();
//! map.attach(0xC000, Box::new(RomDevice::new(vec![0xEA; 0x4000]))).unwrap();
//!
//! map.write(0x1234, 0x42);
//! assert_eq!(map.read(0x1234), 0x42);
//! assert_eq!(map.read(0xC000), 0xEA);
//! assert_eq!(map.read(0x8000), 0x00); // unmapped
//! ```

use crate::MemoryBus;

pub mod nvram;
pub mod ram;
pub mod rom;

pub use nvram::NvRamDevice;
pub use ram::RamDevice;
pub use rom::RomDevice;

/// Size of one mappable page in bytes.
pub const PAGE_SIZE: usize = 0x100;

/// Number of pages in the 16-bit address space.
pub const PAGE_COUNT: usize = 0x100;

/// Rounds a byte length up to a whole number of pages.
pub(crate) fn page_align(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE) * PAGE_SIZE
}

/// A memory-mapped device occupying a run of whole pages.
///
/// The address map calls `read`/`write` with an offset relative to the
/// device's base address (0 to `page_count() * 256 - 1`).
///
/// # Examples
///
/// ```rust
/// use nmos6502::Device;
///
/// struct Latch {
///     value: u8,
/// }
///
/// impl Device for Latch {
///     fn read(&mut self, _offset: u16) -> u8 {
///         self.value
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.value = value;
///     }
///
///     fn page_count(&self) -> usize {
///         1
///     }
///
///     fn name(&self) -> &str {
///         "latch"
///     }
/// }
/// ```
pub trait Device {
    /// Read byte at `offset` from the device base.
    fn read(&mut self, offset: u16) -> u8;

    /// Write byte at `offset` from the device base.
    fn write(&mut self, offset: u16, value: u8);

    /// Number of 256-byte pages the device occupies.
    fn page_count(&self) -> usize;

    /// Human-readable name used in logs and errors.
    fn name(&self) -> &str;

    /// Soft reset hook.
    fn soft_reset(&mut self) {}

    /// Hard reset hook.
    fn hard_reset(&mut self) {}
}

/// Error returned when a device cannot be attached to an `AddressMap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// Base address is not a multiple of 256.
    Misaligned {
        /// Requested base address
        base: u16,
        /// Device name
        device: String,
    },

    /// Device reports zero pages.
    EmptyDevice {
        /// Device name
        device: String,
    },

    /// Device extends past 0xFFFF.
    OutOfRange {
        /// Requested base address
        base: u16,
        /// Pages the device needs
        pages: usize,
        /// Device name
        device: String,
    },

    /// A page in the requested range is already mapped.
    Overlap {
        /// First conflicting page number
        page: u8,
        /// Device being attached
        device: String,
        /// Device already owning the page
        existing: String,
    },
}

impl std::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DeviceError::Misaligned { base, device } => {
                write!(
                    f,
                    "Base address 0x{:04X} for {} is not page aligned",
                    base, device
                )
            }
            DeviceError::EmptyDevice { device } => {
                write!(f, "Device {} has no pages to map", device)
            }
            DeviceError::OutOfRange {
                base,
                pages,
                device,
            } => {
                write!(
                    f,
                    "Device {} ({} pages) does not fit at 0x{:04X}",
                    device, pages, base
                )
            }
            DeviceError::Overlap {
                page,
                device,
                existing,
            } => {
                write!(
                    f,
                    "Page conflict at 0x{:02X}00: {} overlaps {}",
                    page, device, existing
                )
            }
        }
    }
}

impl std::error::Error for DeviceError {}

/// Internal mapping of a device to its base page.
struct DeviceMapping {
    base_page: u8,
    device: Box<dyn Device>,
}

impl std::fmt::Debug for DeviceMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceMapping")
            .field("base", &format_args!("${:04X}", (self.base_page as u16) << 8))
            .field("device", &self.device.name())
            .finish()
    }
}

/// Address-space router that maps whole pages to attached devices.
///
/// Routing is a direct page-table lookup, so every access is O(1) regardless
/// of how many devices are attached. Unmapped reads return `unmapped_value`
/// (0 unless overridden) and unmapped writes are dropped.
pub struct AddressMap {
    devices: Vec<DeviceMapping>,
    pages: [Option<u8>; PAGE_COUNT],
    unmapped_value: u8,
}

impl AddressMap {
    /// Create an empty address map.
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            pages: [None; PAGE_COUNT],
            unmapped_value: 0x00,
        }
    }

    /// Override the value returned for reads from unmapped pages.
    pub fn with_unmapped_value(mut self, value: u8) -> Self {
        self.unmapped_value = value;
        self
    }

    /// Attach `device` so that its first byte appears at `base`.
    ///
    /// # Errors
    ///
    /// - `DeviceError::Misaligned` if `base` is not page aligned
    /// - `DeviceError::EmptyDevice` if the device has no pages
    /// - `DeviceError::OutOfRange` if the device runs past 0xFFFF
    /// - `DeviceError::Overlap` if any page is already mapped
    ///
    /// On error the map is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nmos6502::{AddressMap, DeviceError, RamDevice};
    ///
    /// let mut map = AddressMap::new();
    /// map.attach(0x0000, Box::new(RamDevice::new(0x1000))).unwrap();
    ///
    /// let err = map.attach(0x0800, Box::new(RamDevice::new(0x100))).unwrap_err();
    /// assert!(matches!(err, DeviceError::Overlap { page: 0x08, .. }));
    /// ```
    pub fn attach(
        &mut self,
        base: u16,
        device: Box<dyn Device>,
    ) -> Result<&mut Self, DeviceError> {
        if base & 0xFF != 0 {
            return Err(DeviceError::Misaligned {
                base,
                device: device.name().to_string(),
            });
        }

        let pages = device.page_count();
        if pages == 0 {
            return Err(DeviceError::EmptyDevice {
                device: device.name().to_string(),
            });
        }

        let base_page = (base >> 8) as usize;
        if base_page + pages > PAGE_COUNT {
            return Err(DeviceError::OutOfRange {
                base,
                pages,
                device: device.name().to_string(),
            });
        }

        for page in base_page..base_page + pages {
            if let Some(index) = self.pages[page] {
                return Err(DeviceError::Overlap {
                    page: page as u8,
                    device: device.name().to_string(),
                    existing: self.devices[index as usize].device.name().to_string(),
                });
            }
        }

        log::info!(
            "AddressMap: mapping {} to ${:04X} - ${:04X}",
            device.name(),
            base,
            ((base_page + pages) * PAGE_SIZE - 1) as u16
        );

        let index = self.devices.len() as u8;
        for slot in &mut self.pages[base_page..base_page + pages] {
            *slot = Some(index);
        }
        self.devices.push(DeviceMapping {
            base_page: base_page as u8,
            device,
        });

        Ok(self)
    }

    /// Name of the device serving `addr`, if any.
    pub fn device_at(&self, addr: u16) -> Option<&str> {
        self.pages[(addr >> 8) as usize].map(|index| self.devices[index as usize].device.name())
    }

    /// Number of attached devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    #[inline]
    fn route(&mut self, addr: u16) -> Option<(&mut dyn Device, u16)> {
        let index = self.pages[(addr >> 8) as usize]?;
        let mapping = &mut self.devices[index as usize];
        let offset = addr - ((mapping.base_page as u16) << 8);
        Some((mapping.device.as_mut(), offset))
    }
}

impl std::fmt::Debug for AddressMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressMap")
            .field("devices", &self.devices)
            .field("unmapped_value", &self.unmapped_value)
            .finish()
    }
}

impl Default for AddressMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for AddressMap {
    fn read(&mut self, addr: u16) -> u8 {
        let unmapped = self.unmapped_value;
        match self.route(addr) {
            Some((device, offset)) => device.read(offset),
            None => unmapped,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if let Some((device, offset)) = self.route(addr) {
            device.write(offset, value);
        }
    }

    fn soft_reset(&mut self) {
        log::debug!("AddressMap: soft reset of {} devices", self.devices.len());
        for mapping in &mut self.devices {
            mapping.device.soft_reset();
        }
    }

    fn hard_reset(&mut self) {
        log::debug!("AddressMap: hard reset of {} devices", self.devices.len());
        for mapping in &mut self.devices {
            mapping.device.hard_reset();
        }
    }
}
