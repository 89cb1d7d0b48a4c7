use crate::bus::Bus;
use crate::constants::InterruptVectors;
use crate::cpu_6510::*;
use crate::opcodes::OpCode;

pub const P: u8 = 0;
pub const C: u8 = StatusFlag::Carry as u8;
pub const Z: u8 = StatusFlag::Zero as u8;
pub const I: u8 = StatusFlag::InterruptDisable as u8;
pub const D: u8 = StatusFlag::Decimal as u8;
pub const B: u8 = StatusFlag::Break as u8;
pub const T: u8 = StatusFlag::Push as u8;
pub const V: u8 = StatusFlag::Overflow as u8;
pub const N: u8 = StatusFlag::Negative as u8;

/// Where test programs get loaded: away from the zero page and the stack.
pub const PROGRAM_BASE: u16 = 0x0600;

/// Build a bus with the program at `PROGRAM_BASE` and the reset vector
/// aimed at it, with a JAM appended so `run` has a place to stop.
pub fn program_bus(program: &[u8]) -> Bus {
    let mut bytes = program.to_vec();
    bytes.push(OpCode::JAM as u8);
    let mut bus = Bus::new();
    bus.load_at(&bytes, PROGRAM_BASE);
    let [low, high] = PROGRAM_BASE.to_le_bytes();
    bus.set_u8(InterruptVectors::ResetVector as u16, low);
    bus.set_u8(InterruptVectors::ResetVector as u16 + 1, high);
    bus
}

/// Run a byte program from reset until the processor jams on the appended
/// sentinel, then hand the final machine state back for assertions.
pub fn run_program(program: &[u8]) -> Cpu6510 {
    let mut cpu = Cpu6510::new(program_bus(program));
    cpu.run();
    cpu
}

/// Run two's complement on a u8.
pub fn negative(n: u8) -> u8 {
    !n + 1
}

pub fn assert_register_a(program: &[u8], value: u8, status: u8) {
    let cpu = run_program(program);
    if cpu.a != value {
        panic!(
            "\nExpected register A to be {:#x} ({:#b}) but it was {:#x} ({:#b})",
            value, value, cpu.a, cpu.a
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_x(program: &[u8], value: u8, status: u8) {
    let cpu = run_program(program);
    if cpu.x != value {
        panic!(
            "\nExpected register X to be {:#x} ({:#b}) but it was {:#x} ({:#b})",
            value, value, cpu.x, cpu.x
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_y(program: &[u8], value: u8, status: u8) {
    let cpu = run_program(program);
    if cpu.y != value {
        panic!(
            "\nExpected register Y to be {:#x} ({:#b}) but it was {:#x} ({:#b})",
            value, value, cpu.y, cpu.y
        );
    }
    assert_status(&cpu, status);
}

/// Compare the live status register bit by bit, naming every flag that does
/// not match so a failure reads at a glance.
pub fn assert_status(cpu: &Cpu6510, value: u8) {
    const FLAG_NAMES: [(&str, u8); 8] = [
        ("Carry", 0b0000_0001),
        ("Zero", 0b0000_0010),
        ("InterruptDisable", 0b0000_0100),
        ("Decimal", 0b0000_1000),
        ("Break", 0b0001_0000),
        ("Push", 0b0010_0000),
        ("Overflow", 0b0100_0000),
        ("Negative", 0b1000_0000),
    ];

    if cpu.p == value {
        return;
    }

    let mut result = String::new();
    for (name, bit) in FLAG_NAMES {
        let expected = value & bit == bit;
        let actual = cpu.p & bit == bit;
        if expected != actual {
            result.push_str(&format!(
                "Expected StatusFlag::{} to be {} but received {}\n",
                name, expected, actual
            ));
        }
    }
    panic!(
        "\nExpected cpu status 0b{:08b} to match 0b{:08b}\n{}",
        cpu.p, value, result
    );
}

macro_rules! register_a {
    ($name:ident, $a:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            assert_register_a($program, $a, $p);
        }
    };
}
pub(crate) use register_a;

macro_rules! register_x {
    ($name:ident, $x:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            assert_register_x($program, $x, $p);
        }
    };
}
pub(crate) use register_x;

macro_rules! register_y {
    ($name:ident, $y:expr, $p:expr, $program:expr) => {
        #[test]
        fn $name() {
            assert_register_y($program, $y, $p);
        }
    };
}
pub(crate) use register_y;
