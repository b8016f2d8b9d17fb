//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, runs a short burst of
//! instructions, and checks the invariants that must hold whatever the
//! program does.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nmos6502::{FlatMemory, MemoryBus, Status, CPU, OPCODE_TABLE};

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte; the unused bit is forced on
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (a few instructions' worth)
    program: [u8; 16],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Data region at 0x4000 for absolute modes
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0xFFFC, &[0x00, 0x80]);
    memory.load(0xFFFE, &[0x00, 0x90]);
    memory.load(0x8000, &input.memory.program);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(Status::from_bits_retain(input.cpu_state.status) | Status::UNUSED);

    for _ in 0..input.steps % 32 {
        let pc = cpu.pc();
        let opcode = cpu.memory_mut().read(pc);
        let cycles = cpu.cycles();

        if cpu.step() {
            let metadata = OPCODE_TABLE[opcode as usize].expect("executed an undocumented opcode");
            assert_eq!(cpu.cycles() - cycles, metadata.base_cycles as u64);
        } else {
            // Halting never moves PC or consumes cycles
            assert_eq!(cpu.pc(), pc);
            assert_eq!(cpu.cycles(), cycles);
            assert!(cpu.halt_reason().is_some());
            break;
        }

        assert!(cpu.status().contains(Status::UNUSED));
    }
});
