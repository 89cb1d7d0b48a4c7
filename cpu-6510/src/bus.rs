use crate::constants::{memory_range, port_bits, PORT_ADDRESS};

pub const BASIC_ROM_SIZE: usize = 0x2000;
pub const KERNAL_ROM_SIZE: usize = 0x2000;
pub const CHARACTER_ROM_SIZE: usize = 0x1000;

/// The C64's ROM images plus the backing store for the I/O window. When these
/// are installed, the processor port at $0001 decides which of them shadow
/// the RAM underneath; see `Bus::read_u8`.
struct C64Roms {
    basic: Box<[u8; BASIC_ROM_SIZE]>,
    kernal: Box<[u8; KERNAL_ROM_SIZE]>,
    character: Box<[u8; CHARACTER_ROM_SIZE]>,
    // Reads and writes surrendered by the banked-in I/O window land here.
    io: Box<[u8; CHARACTER_ROM_SIZE]>,
}

/// The bus owns the full 64KB memory image. The CPU core only ever asks for
/// bytes and words; whether a read resolves to RAM, ROM or I/O is decided
/// here, so the core stays agnostic of the C64 memory map.
pub struct Bus {
    ram: Box<[u8; 0x10000]>,
    roms: Option<C64Roms>,
}

impl Bus {
    /// A flat 64KB of RAM, which is what the conformance suites run on.
    pub fn new() -> Bus {
        Bus {
            ram: Box::new([0; 0x10000]),
            roms: None,
        }
    }

    /// RAM plus the C64 ROM set, banked through the processor port.
    pub fn new_c64(
        basic: Box<[u8; BASIC_ROM_SIZE]>,
        kernal: Box<[u8; KERNAL_ROM_SIZE]>,
        character: Box<[u8; CHARACTER_ROM_SIZE]>,
    ) -> Bus {
        Bus {
            ram: Box::new([0; 0x10000]),
            roms: Some(C64Roms {
                basic,
                kernal,
                character,
                io: Box::new([0; CHARACTER_ROM_SIZE]),
            }),
        }
    }

    /// Copy a block of bytes into RAM, starting at `base`. The caller has
    /// already checked that the block fits into the address space.
    pub fn load_at(&mut self, bytes: &[u8], base: u16) {
        let base = base as usize;
        self.ram[base..base + bytes.len()].copy_from_slice(bytes);
    }

    /// The banking configuration, straight from the processor port.
    fn port(&self) -> u8 {
        self.ram[PORT_ADDRESS as usize]
    }

    pub fn read_u8(&self, address: u16) -> u8 {
        if let Some(roms) = &self.roms {
            let port = self.port();
            let loram = port & port_bits::LORAM != 0;
            let hiram = port & port_bits::HIRAM != 0;
            let charen = port & port_bits::CHAREN != 0;

            if memory_range::BASIC_ROM.contains(address) && loram && hiram {
                return roms.basic[(address - memory_range::BASIC_ROM.min) as usize];
            }
            if memory_range::CHAR_AND_IO.contains(address) && (loram || hiram) {
                let offset = (address - memory_range::CHAR_AND_IO.min) as usize;
                return if charen {
                    roms.io[offset]
                } else {
                    roms.character[offset]
                };
            }
            if memory_range::KERNAL_ROM.contains(address) && hiram {
                return roms.kernal[(address - memory_range::KERNAL_ROM.min) as usize];
            }
        }
        self.ram[address as usize]
    }

    pub fn set_u8(&mut self, address: u16, value: u8) {
        // With I/O banked in, writes to $D000-$DFFF belong to the device
        // window. Writes landing on ROM fall through to the RAM underneath.
        if memory_range::CHAR_AND_IO.contains(address) {
            let port = self.port();
            let banked_in = port & (port_bits::LORAM | port_bits::HIRAM) != 0
                && port & port_bits::CHAREN != 0;
            if banked_in {
                if let Some(roms) = &mut self.roms {
                    roms.io[(address - memory_range::CHAR_AND_IO.min) as usize] = value;
                    return;
                }
            }
        }
        self.ram[address as usize] = value;
    }

    /// Little-endian word read.
    pub fn read_u16(&self, address: u16) -> u16 {
        let low = self.read_u8(address);
        let high = self.read_u8(address.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Word read that never carries into the next page: the high byte comes
    /// from the start of the page the low byte is on. This is how the NMOS
    /// part fetches an indirect JMP target, so `JMP ($xxFF)` reads its high
    /// byte from `$xx00`.
    pub fn read_u16_page_wrap(&self, address: u16) -> u16 {
        let low = self.read_u8(address);
        let wrapped = (address & 0xFF00) | (address.wrapping_add(1) & 0x00FF);
        let high = self.read_u8(wrapped);
        u16::from_le_bytes([low, high])
    }

    /// Word read through a zero-page pointer. The pointer itself wraps within
    /// the zero page, so a pointer at $FF reads its high byte from $00.
    pub fn read_u16_zero_page(&self, pointer: u8) -> u16 {
        let low = self.read_u8(pointer as u16);
        let high = self.read_u8(pointer.wrapping_add(1) as u16);
        u16::from_le_bytes([low, high])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn c64_bus() -> Bus {
        let mut basic = Box::new([0; BASIC_ROM_SIZE]);
        let mut kernal = Box::new([0; KERNAL_ROM_SIZE]);
        let mut character = Box::new([0; CHARACTER_ROM_SIZE]);
        basic.fill(0xB0);
        kernal.fill(0xE0);
        character.fill(0xC0);
        Bus::new_c64(basic, kernal, character)
    }

    #[test]
    fn words_are_little_endian() {
        let mut bus = Bus::new();
        bus.set_u8(0x1000, 0x34);
        bus.set_u8(0x1001, 0x12);
        assert_eq!(bus.read_u16(0x1000), 0x1234);
    }

    #[test]
    fn page_wrap_read_stays_on_the_page() {
        let mut bus = Bus::new();
        bus.set_u8(0x02FF, 0x34);
        bus.set_u8(0x0300, 0x12); // The straight read would use this byte.
        bus.set_u8(0x0200, 0x56); // The wrapped read uses this one.
        assert_eq!(bus.read_u16(0x02FF), 0x1234);
        assert_eq!(bus.read_u16_page_wrap(0x02FF), 0x5634);
    }

    #[test]
    fn zero_page_pointer_read_wraps() {
        let mut bus = Bus::new();
        bus.set_u8(0x00FF, 0x34);
        bus.set_u8(0x0000, 0x12);
        bus.set_u8(0x0100, 0x99);
        assert_eq!(bus.read_u16_zero_page(0xFF), 0x1234);
    }

    #[test]
    fn default_banking_maps_all_roms() {
        let mut bus = c64_bus();
        // LORAM | HIRAM | CHAREN: BASIC and KERNAL in, I/O over the
        // character ROM.
        bus.set_u8(PORT_ADDRESS, 0x07);
        assert_eq!(bus.read_u8(0xA123), 0xB0);
        assert_eq!(bus.read_u8(0xE123), 0xE0);
        assert_eq!(bus.read_u8(0xD123), 0x00); // empty I/O backing store
    }

    #[test]
    fn character_rom_appears_when_charen_is_low() {
        let mut bus = c64_bus();
        bus.set_u8(PORT_ADDRESS, port_bits::LORAM | port_bits::HIRAM);
        assert_eq!(bus.read_u8(0xD123), 0xC0);
    }

    #[test]
    fn all_bits_low_exposes_ram_everywhere() {
        let mut bus = c64_bus();
        bus.set_u8(PORT_ADDRESS, 0x00);
        bus.set_u8(0xD123, 0x55);
        assert_eq!(bus.read_u8(0xA123), 0x00);
        assert_eq!(bus.read_u8(0xD123), 0x55);
        assert_eq!(bus.read_u8(0xE123), 0x00);
    }

    #[test]
    fn hiram_alone_drops_basic_but_keeps_kernal() {
        let mut bus = c64_bus();
        bus.set_u8(PORT_ADDRESS, port_bits::HIRAM);
        assert_eq!(bus.read_u8(0xA123), 0x00);
        assert_eq!(bus.read_u8(0xE123), 0xE0);
    }

    #[test]
    fn rom_writes_fall_through_to_ram() {
        let mut bus = c64_bus();
        bus.set_u8(PORT_ADDRESS, 0x07);
        bus.set_u8(0xA123, 0x42);
        // The ROM still shadows the read...
        assert_eq!(bus.read_u8(0xA123), 0xB0);
        // ...until it is banked out.
        bus.set_u8(PORT_ADDRESS, 0x00);
        assert_eq!(bus.read_u8(0xA123), 0x42);
    }

    #[test]
    fn io_window_captures_writes_when_banked_in() {
        let mut bus = c64_bus();
        bus.set_u8(PORT_ADDRESS, 0x07);
        bus.set_u8(0xD020, 0x0E);
        assert_eq!(bus.read_u8(0xD020), 0x0E);
        // The RAM underneath was never touched.
        bus.set_u8(PORT_ADDRESS, 0x00);
        assert_eq!(bus.read_u8(0xD020), 0x00);
    }
}
