//! Tests for JMP, JSR, RTS, BRK and RTI.

use nmos6502::{FlatMemory, HaltReason, MemoryBus, Status, CPU, IRQ_VECTOR};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4C, 0x34, 0x12]);

    assert!(cpu.step());

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x6C, 0x00, 0x02]);
    cpu.memory_mut().load(0x0200, &[0xCD, 0xAB]);

    assert!(cpu.step());

    assert_eq!(cpu.pc(), 0xABCD);
    assert_eq!(cpu.cycles(), 5);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x6C, 0xFF, 0x02]); // JMP ($02FF)
    cpu.memory_mut().write(0x02FF, 0x34);
    cpu.memory_mut().write(0x0300, 0x56); // not used
    cpu.memory_mut().write(0x0200, 0x12); // high byte comes from here

    assert!(cpu.step());

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_absolute_to_self_halts() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4C, 0x00, 0x80]);

    assert!(!cpu.step());

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(
        cpu.halt_reason(),
        Some(HaltReason::JumpToSelf { address: 0x8000 })
    );
}

#[test]
fn test_jmp_indirect_to_self_halts() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x6C, 0x00, 0x02]);
    cpu.memory_mut().load(0x0200, &[0x00, 0x80]);

    assert!(!cpu.step());

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.halt_reason().map(|r| r.address()), Some(0x8000));
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_last_byte_of_instruction() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x1000, &[0x20, 0x00, 0x20]); // JSR $2000
    cpu.set_pc(0x1000);

    assert!(cpu.step());

    assert_eq!(cpu.pc(), 0x2000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.memory_mut().read(0x01FF), 0x10);
    assert_eq!(cpu.memory_mut().read(0x01FE), 0x02);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_rts_returns_after_jsr() {
    let mut cpu = setup_cpu();
    // JSR $9000; LDX #$01
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90, 0xA2, 0x01]);
    // LDA #$42; RTS
    cpu.memory_mut().load(0x9000, &[0xA9, 0x42, 0x60]);

    for _ in 0..4 {
        assert!(cpu.step());
    }

    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.x(), 0x01);
    assert_eq!(cpu.pc(), 0x8005);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.cycles(), 6 + 2 + 6 + 2);
}

#[test]
fn test_nested_subroutines() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]); // JSR $9000
    cpu.memory_mut().load(0x9000, &[0x20, 0x00, 0xA0, 0x60]); // JSR $A000; RTS
    cpu.memory_mut().load(0xA000, &[0xE8, 0x60]); // INX; RTS

    assert!(cpu.step());
    assert!(cpu.step());
    assert_eq!(cpu.sp(), 0xFB);
    assert!(cpu.step());
    assert!(cpu.step());
    assert_eq!(cpu.pc(), 0x9003);
    assert!(cpu.step());
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.x(), 1);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_rts_page_boundary() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x60);
    cpu.memory_mut().load(0x01FE, &[0xFF, 0x12]);
    cpu.set_sp(0xFD);

    assert!(cpu.step());

    assert_eq!(cpu.pc(), 0x1300);
}

// ========== BRK / RTI ==========

#[test]
fn test_brk_pushes_state_and_vectors() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x00);
    cpu.memory_mut().write(IRQ_VECTOR, 0x00);
    cpu.memory_mut().write(IRQ_VECTOR + 1, 0x90);
    cpu.set_status(Status::UNUSED | Status::CARRY);

    assert!(cpu.step());

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.memory_mut().read(0x01FF), 0x80);
    assert_eq!(cpu.memory_mut().read(0x01FE), 0x02);
    assert_eq!(cpu.memory_mut().read(0x01FD), 0x31);
    assert!(cpu.flag_i());
    assert!(cpu.flag_c());
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn test_brk_then_rti_resumes_after_padding_byte() {
    let mut cpu = setup_cpu();
    // SEC; BRK; .byte $EA; LDY #$07
    cpu.memory_mut().load(0x8000, &[0x38, 0x00, 0xEA, 0xA0, 0x07]);
    // CLC; RTI
    cpu.memory_mut().load(0x9000, &[0x18, 0x40]);
    cpu.memory_mut().load(IRQ_VECTOR, &[0x00, 0x90]);
    cpu.set_flag_i(false);

    for _ in 0..5 {
        assert!(cpu.step());
    }

    assert_eq!(cpu.y(), 0x07);
    assert_eq!(cpu.pc(), 0x8005);
    // RTI restored the carry and interrupt state from before the BRK
    assert!(cpu.flag_c());
    assert!(!cpu.flag_i());
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_rti_does_not_add_one() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x40);
    // status, PCL, PCH
    cpu.memory_mut().load(0x01FD, &[0xC3, 0x34, 0x12]);
    cpu.set_sp(0xFC);
    cpu.set_status(Status::UNUSED);

    assert!(cpu.step());

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(
        cpu.status(),
        Status::NEGATIVE | Status::OVERFLOW | Status::ZERO | Status::CARRY | Status::UNUSED
    );
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_brk_handler_jumping_to_itself_halts() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x00);
    cpu.memory_mut().load(IRQ_VECTOR, &[0x00, 0x90]);
    cpu.memory_mut().load(0x9000, &[0x4C, 0x00, 0x90]);

    assert_eq!(cpu.run(), 1);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.cycles(), 7);
}
