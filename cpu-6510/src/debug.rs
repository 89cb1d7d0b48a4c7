use colored::*;

use crate::cpu_6510::Cpu6510;
use crate::opcodes::OPCODE_STRING_TABLE;

/// One line of execution trace for the instruction the program counter sits
/// on. Call before stepping.
pub fn trace_line(cpu: &Cpu6510) -> String {
    let opcode = cpu.peek_u8();
    let mnemonic = OPCODE_STRING_TABLE[opcode as usize];
    format!(
        "{}  {:02x} {:<4}  a:{:02x} x:{:02x} y:{:02x} sp:{:02x} p:{} cyc:{}",
        format!("{:04x}", cpu.pc).cyan(),
        opcode,
        mnemonic.bold(),
        cpu.a,
        cpu.x,
        cpu.y,
        cpu.s,
        flags_string(cpu.flags_byte()),
        cpu.cycles,
    )
}

/// The packed status byte as "nv-bdizc", uppercasing the set bits.
fn flags_string(p: u8) -> String {
    "nv-bdizc"
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if p & (0x80 >> i) != 0 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::Bus;

    #[test]
    fn trace_names_the_opcode() {
        let mut bus = Bus::new();
        bus.set_u8(0x0000, 0xA9); // lda #
        let cpu = Cpu6510::new(bus);
        let line = trace_line(&cpu);
        assert!(line.contains("lda"), "{}", line);
        assert!(line.contains("sp:fd"), "{}", line);
    }

    #[test]
    fn set_flags_read_as_uppercase() {
        assert_eq!(flags_string(0b1010_0011), "Nv-bdiZC");
        assert_eq!(flags_string(0b0010_0000), "nv-bdizc");
    }
}
