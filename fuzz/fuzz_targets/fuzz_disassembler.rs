//! Fuzz target for the disassembler.
//!
//! Feeds arbitrary byte sequences to the disassembler and checks that the
//! decoded instructions tile the input exactly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nmos6502::disassembler::formatter::format_listing_line;
use nmos6502::{disassemble, disassemble_at, FlatMemory};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u16,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let instructions = disassemble(&input.bytes, input.start_address);

    let mut total_size: usize = 0;
    let mut expected_address = input.start_address;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);

        let size = instr.size_bytes();
        assert!((1..=3).contains(&size));
        if instr.is_data() {
            assert_eq!(size, 1);
        }

        // Formatting must never panic
        let _ = format_listing_line(instr);

        total_size += size as usize;
        expected_address = expected_address.wrapping_add(size as u16);
    }

    assert_eq!(total_size, input.bytes.len());

    // Decoding from a bus agrees with decoding from a slice
    if input.bytes.len() >= 3 && input.start_address <= 0xFFFD {
        let mut memory = FlatMemory::new();
        memory.load(input.start_address, &input.bytes[..3]);
        assert_eq!(disassemble_at(&mut memory, input.start_address), instructions[0]);
    }
});
