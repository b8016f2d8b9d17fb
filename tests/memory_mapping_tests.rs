//! Integration tests for `AddressMap` and the page-mapped devices.

use nmos6502::{
    AddressMap, Device, DeviceError, MemoryBus, NvRamDevice, RamDevice, RomDevice, CPU,
};

fn rom_with_reset_vector(len: usize, target: u16) -> Vec<u8> {
    let mut rom = vec![0xEA; len];
    let [lo, hi] = target.to_le_bytes();
    rom[len - 4] = lo;
    rom[len - 3] = hi;
    rom
}

#[test]
fn test_ram_and_rom_map() {
    let mut map = AddressMap::new();
    map.attach(0x0000, Box::new(RamDevice::new(0x8000)))
        .unwrap()
        .attach(0xC000, Box::new(RomDevice::new(vec![0xEA; 0x4000])))
        .unwrap();

    assert_eq!(map.device_count(), 2);

    map.write(0x7FFF, 0x42);
    assert_eq!(map.read(0x7FFF), 0x42);

    map.write(0xC000, 0x00);
    assert_eq!(map.read(0xC000), 0xEA);
}

#[test]
fn test_unmapped_reads_and_writes() {
    let mut map = AddressMap::new();
    map.attach(0x1000, Box::new(RamDevice::new(0x100))).unwrap();

    map.write(0x2000, 0x55);
    assert_eq!(map.read(0x2000), 0x00);
    assert_eq!(map.device_at(0x2000), None);

    let mut floating = AddressMap::new().with_unmapped_value(0xFF);
    assert_eq!(floating.read(0x1234), 0xFF);
}

#[test]
fn test_device_sees_offsets() {
    struct Echo;
    impl Device for Echo {
        fn read(&mut self, offset: u16) -> u8 {
            offset as u8
        }
        fn write(&mut self, _offset: u16, _value: u8) {}
        fn page_count(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "echo"
        }
    }

    let mut map = AddressMap::new();
    map.attach(0x4000, Box::new(Echo)).unwrap();

    assert_eq!(map.read(0x4000), 0x00);
    assert_eq!(map.read(0x4017), 0x17);
    assert_eq!(map.read(0x4123), 0x23);
    assert_eq!(map.device_at(0x41FF), Some("echo"));
    assert_eq!(map.device_at(0x4200), None);
}

#[test]
fn test_attach_errors() {
    let mut map = AddressMap::new();
    map.attach(0x0000, Box::new(RamDevice::new(0x1000))).unwrap();

    let err = map
        .attach(0x1080, Box::new(RamDevice::new(0x100)))
        .unwrap_err();
    assert!(matches!(err, DeviceError::Misaligned { base: 0x1080, .. }));

    let err = map.attach(0x2000, Box::new(RamDevice::new(0))).unwrap_err();
    assert!(matches!(err, DeviceError::EmptyDevice { .. }));

    let err = map
        .attach(0xFF00, Box::new(RamDevice::new(0x200)))
        .unwrap_err();
    assert!(matches!(err, DeviceError::OutOfRange { pages: 2, .. }));

    let err = map
        .attach(0x0F00, Box::new(RamDevice::new(0x200)))
        .unwrap_err();
    match err {
        DeviceError::Overlap { page, existing, .. } => {
            assert_eq!(page, 0x0F);
            assert_eq!(existing, "RAM (4096 bytes)");
        }
        other => panic!("unexpected error {:?}", other),
    }

    // Failed attaches leave the map untouched
    assert_eq!(map.device_count(), 1);
    assert_eq!(map.device_at(0x1000), None);
}

#[test]
fn test_address_map_debug_names_devices() {
    let mut map = AddressMap::new();
    map.attach(0x0000, Box::new(RamDevice::new(0x1000)))
        .unwrap()
        .attach(0xF000, Box::new(RomDevice::new(vec![0xEA; 0x1000])))
        .unwrap();

    let text = format!("{:?}", map);
    assert!(text.contains("base: $0000, device: \"RAM (4096 bytes)\""));
    assert!(text.contains("base: $F000, device: \"ROM (4096 bytes)\""));
}

#[test]
fn test_device_error_display() {
    let err = DeviceError::Misaligned {
        base: 0x1234,
        device: "RAM".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Base address 0x1234 for RAM is not page aligned"
    );

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("0x1234"));
}

#[test]
fn test_device_fills_last_page() {
    let mut map = AddressMap::new();
    map.attach(0xFF00, Box::new(RamDevice::new(0x100))).unwrap();
    map.write(0xFFFF, 0x99);
    assert_eq!(map.read(0xFFFF), 0x99);
}

#[test]
fn test_cpu_on_composed_machine() {
    let mut rom = rom_with_reset_vector(0x1000, 0xF000);
    // LDA #$AB; STA $0200; STA $F800; JMP *
    rom[..11].copy_from_slice(&[
        0xA9, 0xAB, 0x8D, 0x00, 0x02, 0x8D, 0x00, 0xF8, 0x4C, 0x08, 0xF0,
    ]);

    let mut map = AddressMap::new();
    map.attach(0x0000, Box::new(RamDevice::new(0x1000)))
        .unwrap()
        .attach(0xF000, Box::new(RomDevice::new(rom)))
        .unwrap();

    let mut cpu = CPU::new(map);
    assert_eq!(cpu.pc(), 0xF000);

    assert_eq!(cpu.run(), 3);
    assert_eq!(cpu.pc(), 0xF008);
    assert_eq!(cpu.memory_mut().read(0x0200), 0xAB);
    assert_eq!(cpu.memory_mut().read(0xF800), 0xEA);
}

#[test]
fn test_nvram_survives_hard_reset_ram_does_not() {
    let mut map = AddressMap::new();
    map.attach(0x0000, Box::new(RamDevice::new(0x100)))
        .unwrap()
        .attach(0x0100, Box::new(NvRamDevice::new(vec![0x5A; 0x100])))
        .unwrap();

    map.write(0x0010, 0x01);
    map.write(0x0110, 0x02);

    map.soft_reset();
    assert_eq!(map.read(0x0010), 0x01);
    assert_eq!(map.read(0x0110), 0x02);

    map.hard_reset();
    assert_eq!(map.read(0x0010), 0x00);
    assert_eq!(map.read(0x0110), 0x02);
    assert_eq!(map.read(0x0111), 0x5A);
}

#[test]
fn test_ram_load_bytes() {
    let mut ram = RamDevice::new(0x100);
    ram.load_bytes(0xFE, &[0x01, 0x02, 0x03]);
    assert_eq!(ram.read(0xFE), 0x01);
    assert_eq!(ram.read(0xFF), 0x02);
    assert_eq!(ram.page_count(), 1);
}
