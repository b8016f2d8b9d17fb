//! Tests for the flag instructions: CLC, SEC, CLI, SEI, CLD, SED, CLV, plus NOP.

use nmos6502::{FlatMemory, MemoryBus, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_set_and_clear_each_flag() {
    // (opcode, flag, value after)
    let cases = [
        (0x18, Status::CARRY, false),
        (0x38, Status::CARRY, true),
        (0x58, Status::INTERRUPT, false),
        (0x78, Status::INTERRUPT, true),
        (0xD8, Status::DECIMAL, false),
        (0xF8, Status::DECIMAL, true),
        (0xB8, Status::OVERFLOW, false),
    ];

    for (opcode, flag, value) in cases {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, opcode);
        let initial = if value {
            Status::UNUSED
        } else {
            Status::all() - Status::BREAK
        };
        cpu.set_status(initial);

        assert!(cpu.step());

        assert_eq!(cpu.status().contains(flag), value, "opcode {:02X}", opcode);
        // Nothing else changes
        assert_eq!(cpu.status() - flag, initial - flag, "opcode {:02X}", opcode);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.cycles(), 2);
    }
}

#[test]
fn test_flag_instructions_are_idempotent() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x38, 0x38, 0x18, 0x18]);

    assert!(cpu.step());
    assert!(cpu.step());
    assert!(cpu.flag_c());
    assert!(cpu.step());
    assert!(cpu.step());
    assert!(!cpu.flag_c());
}

#[test]
fn test_nop_only_advances() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xEA);
    cpu.set_a(0x12);
    let status = cpu.status();

    assert!(cpu.step());

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.status(), status);
    assert_eq!(cpu.cycles(), 2);
}
