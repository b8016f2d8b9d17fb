//! Tests for the `MemoryBus` trait and `FlatMemory`.

use nmos6502::{FlatMemory, MemoryBus, CPU};

#[test]
fn test_flat_memory_starts_zeroed() {
    let memory = FlatMemory::new();
    assert_eq!(memory.as_slice().len(), 0x10000);
    assert!(memory.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn test_flat_memory_full_range() {
    let mut memory = FlatMemory::default();
    memory.write(0x0000, 0x01);
    memory.write(0xFFFF, 0xFF);
    assert_eq!(memory.read(0x0000), 0x01);
    assert_eq!(memory.read(0xFFFF), 0xFF);
}

#[test]
fn test_load_clips_at_top_of_memory() {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFE, &[0x11, 0x22, 0x33, 0x44]);
    assert_eq!(memory.read(0xFFFE), 0x11);
    assert_eq!(memory.read(0xFFFF), 0x22);
    assert_eq!(memory.read(0x0000), 0x00);
}

#[test]
fn test_read_word_little_endian_and_wraps() {
    let mut memory = FlatMemory::new();
    memory.load(0x1000, &[0x34, 0x12]);
    assert_eq!(memory.read_word(0x1000), 0x1234);

    memory.write(0xFFFF, 0xCD);
    memory.write(0x0000, 0xAB);
    assert_eq!(memory.read_word(0xFFFF), 0xABCD);
}

#[test]
fn test_soft_reset_keeps_hard_reset_clears() {
    let mut memory = FlatMemory::new();
    memory.write(0x4000, 0x99);

    memory.soft_reset();
    assert_eq!(memory.read(0x4000), 0x99);

    memory.hard_reset();
    assert_eq!(memory.read(0x4000), 0x00);
}

/// A bus that records every address it is asked for.
struct RecordingBus {
    memory: FlatMemory,
    reads: Vec<u16>,
    writes: Vec<(u16, u8)>,
}

impl MemoryBus for RecordingBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.reads.push(addr);
        self.memory.read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.writes.push((addr, value));
        self.memory.write(addr, value);
    }
}

#[test]
fn test_cpu_runs_on_custom_bus() {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &[0x00, 0x02]);
    memory.load(0x0200, &[0xA9, 0x7E, 0x8D, 0x00, 0x30]); // LDA #$7E; STA $3000

    let bus = RecordingBus {
        memory,
        reads: Vec::new(),
        writes: Vec::new(),
    };
    let mut cpu = CPU::new(bus);

    assert!(cpu.step());
    assert!(cpu.step());

    let bus = cpu.into_memory();
    assert_eq!(&bus.reads[..2], &[0xFFFC, 0xFFFD]);
    assert!(bus.reads.contains(&0x0200));
    assert!(bus.reads.contains(&0x0204));
    assert_eq!(bus.writes, vec![(0x3000, 0x7E)]);
}

#[test]
fn test_boxed_bus_is_a_bus() {
    let mut inner = FlatMemory::new();
    inner.load(0xFFFC, &[0x00, 0x04]);
    inner.write(0x0400, 0xE8);

    let boxed: Box<dyn MemoryBus> = Box::new(inner);
    let mut cpu = CPU::new(boxed);

    assert!(cpu.step());
    assert_eq!(cpu.x(), 1);
}
