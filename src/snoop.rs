//! # Bus Snooping
//!
//! `BusSnooper` wraps any `MemoryBus` and watches the traffic passing through
//! it. Every access is logged at `trace` level, and callbacks can be attached
//! to individual addresses to observe reads and writes as they happen.
//!
//! The snooper is itself a `MemoryBus`, so it slots in between the CPU and
//! its memory without the CPU knowing:
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use nmos6502::{BusSnooper, CPU, FlatMemory};
//!
//! let mut mem = FlatMemory::new();
//! mem.load(0x0200, &[0xA9, 0x41, 0x8D, 0x00, 0xF0]); // LDA #$41; STA $F000
//!
//! let output = Rc::new(Cell::new(0u8));
//! let sink = Rc::clone(&output);
//!
//! let mut bus = BusSnooper::new(mem);
//! bus.on_write(0xF000, move |value| sink.set(value));
//!
//! let mut cpu = CPU::new(bus);
//! cpu.set_pc(0x0200);
//! cpu.step();
//! cpu.step();
//!
//! assert_eq!(output.get(), 0x41);
//! ```

use std::collections::HashMap;

use crate::MemoryBus;

type Monitor = Box<dyn FnMut(u8)>;

/// A `MemoryBus` decorator that logs accesses and runs per-address monitors.
pub struct BusSnooper<B: MemoryBus> {
    inner: B,
    read_monitors: HashMap<u16, Vec<Monitor>>,
    write_monitors: HashMap<u16, Vec<Monitor>>,
    reads: u64,
    writes: u64,
}

impl<B: MemoryBus> BusSnooper<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            read_monitors: HashMap::new(),
            write_monitors: HashMap::new(),
            reads: 0,
            writes: 0,
        }
    }

    /// Calls `monitor` with the value read every time `addr` is read.
    pub fn on_read(&mut self, addr: u16, monitor: impl FnMut(u8) + 'static) -> &mut Self {
        self.read_monitors
            .entry(addr)
            .or_default()
            .push(Box::new(monitor));
        self
    }

    /// Calls `monitor` with the value being written every time `addr` is written.
    ///
    /// Monitors run before the write reaches the wrapped bus.
    pub fn on_write(&mut self, addr: u16, monitor: impl FnMut(u8) + 'static) -> &mut Self {
        self.write_monitors
            .entry(addr)
            .or_default()
            .push(Box::new(monitor));
        self
    }

    /// Removes every read and write monitor registered for `addr`.
    pub fn clear_monitors(&mut self, addr: u16) {
        self.read_monitors.remove(&addr);
        self.write_monitors.remove(&addr);
    }

    /// Number of reads seen since construction.
    pub fn reads(&self) -> u64 {
        self.reads
    }

    /// Number of writes seen since construction.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// Direct access to the wrapped bus. Accesses made this way are not seen.
    pub fn inner_mut(&mut self) -> &mut B {
        &mut self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: MemoryBus> MemoryBus for BusSnooper<B> {
    fn read(&mut self, addr: u16) -> u8 {
        let value = self.inner.read(addr);
        self.reads += 1;
        log::trace!("R ${:04X} => ${:02X}", addr, value);

        if let Some(monitors) = self.read_monitors.get_mut(&addr) {
            for monitor in monitors.iter_mut() {
                monitor(value);
            }
        }
        value
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.writes += 1;
        log::trace!("W ${:02X} => ${:04X}", value, addr);

        if let Some(monitors) = self.write_monitors.get_mut(&addr) {
            for monitor in monitors.iter_mut() {
                monitor(value);
            }
        }
        self.inner.write(addr, value);
    }

    fn soft_reset(&mut self) {
        self.inner.soft_reset();
    }

    fn hard_reset(&mut self) {
        self.inner.hard_reset();
    }
}
