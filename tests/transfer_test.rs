//! Tests for register transfers: TAX, TAY, TXA, TYA, TSX and TXS.

use nmos6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn run_one(opcode: u8, cpu: &mut CPU<FlatMemory>) {
    cpu.memory_mut().write(0x8000, opcode);
    cpu.set_pc(0x8000);
    assert!(cpu.step());
}

#[test]
fn test_tax() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);
    run_one(0xAA, &mut cpu);

    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_tay_zero() {
    let mut cpu = setup_cpu();
    cpu.set_y(0x33);
    run_one(0xA8, &mut cpu);

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x12);
    cpu.set_flag_z(true);
    run_one(0x8A, &mut cpu);

    assert_eq!(cpu.a(), 0x12);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_tya() {
    let mut cpu = setup_cpu();
    cpu.set_y(0xFE);
    run_one(0x98, &mut cpu);

    assert_eq!(cpu.a(), 0xFE);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx_sets_flags() {
    let mut cpu = setup_cpu();
    run_one(0xBA, &mut cpu);

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());

    cpu.set_sp(0x00);
    run_one(0xBA, &mut cpu);
    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txs_does_not_touch_flags() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x00);
    cpu.set_flag_n(true);
    cpu.set_flag_z(false);
    let before = cpu.status();

    run_one(0x9A, &mut cpu);

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), before);
}

#[test]
fn test_transfers_leave_source_intact() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x11);
    run_one(0xAA, &mut cpu);
    run_one(0xA8, &mut cpu);

    assert_eq!((cpu.a(), cpu.x(), cpu.y()), (0x11, 0x11, 0x11));
}
