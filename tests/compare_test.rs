//! Tests for CMP, CPX and CPY.
//!
//! A compare is a subtraction that only sets flags: C when the register is
//! greater than or equal to the operand, Z when they are equal, and N from
//! bit 7 of the difference.

use nmos6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn flags(cpu: &CPU<FlatMemory>) -> (bool, bool, bool) {
    (cpu.flag_c(), cpu.flag_z(), cpu.flag_n())
}

#[test]
fn test_cmp_greater_equal_less() {
    // (A, operand, C, Z, N)
    let cases = [
        (0x50, 0x30, true, false, false),
        (0x42, 0x42, true, true, false),
        (0x30, 0x50, false, false, true),
        (0x00, 0x01, false, false, true),
        (0xFF, 0x00, true, false, true),
        (0x80, 0x7F, true, false, false),
    ];

    for (a, operand, c, z, n) in cases {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xC9, operand]);
        cpu.set_a(a);

        assert!(cpu.step());

        assert_eq!(flags(&cpu), (c, z, n), "CMP A={:02X} #{:02X}", a, operand);
        assert_eq!(cpu.a(), a);
    }
}

#[test]
fn test_cmp_leaves_overflow_alone() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xC9, 0x01]);
    cpu.set_a(0x80);
    cpu.set_flag_v(true);

    assert!(cpu.step());

    assert!(cpu.flag_v());
}

#[test]
fn test_cmp_memory_modes() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(
        0x8000,
        &[
            0xC5, 0x10, // CMP $10
            0xD5, 0x10, // CMP $10,X
            0xCD, 0x00, 0x20, // CMP $2000
            0xDD, 0x00, 0x20, // CMP $2000,X
            0xD9, 0x00, 0x20, // CMP $2000,Y
            0xC1, 0x20, // CMP ($20,X)
            0xD1, 0x30, // CMP ($30),Y
        ],
    );
    cpu.set_a(0x40);
    cpu.set_x(0x01);
    cpu.set_y(0x02);

    cpu.memory_mut().write(0x0010, 0x40);
    cpu.memory_mut().write(0x0011, 0x41);
    cpu.memory_mut().write(0x2000, 0x3F);
    cpu.memory_mut().write(0x2001, 0x40);
    cpu.memory_mut().write(0x2002, 0x41);
    cpu.memory_mut().load(0x0021, &[0x00, 0x30]);
    cpu.memory_mut().write(0x3000, 0x40);
    cpu.memory_mut().load(0x0030, &[0x00, 0x31]);
    cpu.memory_mut().write(0x3102, 0xC0);

    let expected = [
        (true, true, false),
        (false, false, true),
        (true, false, false),
        (true, true, false),
        (false, false, true),
        (true, true, false),
        (false, false, true),
    ];
    for (i, want) in expected.into_iter().enumerate() {
        assert!(cpu.step());
        assert_eq!(flags(&cpu), want, "instruction {}", i);
    }
    assert_eq!(cpu.cycles(), 3 + 4 + 4 + 4 + 4 + 6 + 5);
}

#[test]
fn test_cpx_modes() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(
        0x8000,
        &[
            0xE0, 0x10, // CPX #$10
            0xE4, 0x50, // CPX $50
            0xEC, 0x00, 0x20, // CPX $2000
        ],
    );
    cpu.memory_mut().write(0x0050, 0x20);
    cpu.memory_mut().write(0x2000, 0x05);
    cpu.set_x(0x10);

    assert!(cpu.step());
    assert_eq!(flags(&cpu), (true, true, false));

    assert!(cpu.step());
    assert_eq!(flags(&cpu), (false, false, true));

    assert!(cpu.step());
    assert_eq!(flags(&cpu), (true, false, false));

    assert_eq!(cpu.x(), 0x10);
    assert_eq!(cpu.cycles(), 2 + 3 + 4);
}

#[test]
fn test_cpy_modes() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(
        0x8000,
        &[
            0xC0, 0xFF, // CPY #$FF
            0xC4, 0x50, // CPY $50
            0xCC, 0x00, 0x20, // CPY $2000
        ],
    );
    cpu.memory_mut().write(0x0050, 0x00);
    cpu.memory_mut().write(0x2000, 0x80);
    cpu.set_y(0x80);

    assert!(cpu.step());
    assert_eq!(flags(&cpu), (false, false, true));

    assert!(cpu.step());
    assert_eq!(flags(&cpu), (true, false, true));

    assert!(cpu.step());
    assert_eq!(flags(&cpu), (true, true, false));

    assert_eq!(cpu.y(), 0x80);
}
