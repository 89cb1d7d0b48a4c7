use std::path::Path;

use colored::*;
use cpu_6510::bus::Bus;
use cpu_6510::cpu_6510::Cpu6510;
use cpu_6510::debug;

use crate::loader::{self, LoadError};

/// One conformance ROM: where it loads, where execution starts, and how the
/// verdict is read out of the machine afterwards.
pub struct Suite {
    pub name: &'static str,
    pub file: &'static str,
    pub base: u16,
    /// Starting PC. `None` follows the reset vector, which the ROM provides.
    pub entry: Option<u16>,
    pub check: Check,
}

pub enum Check {
    /// Run until PC reaches the sentinel, then inspect a memory byte.
    MemoryByte {
        sentinel: u16,
        address: u16,
        expected: u8,
    },
    /// Run until PC reaches the sentinel, then inspect the accumulator.
    Accumulator { sentinel: u16, expected: u8 },
    /// Run until PC reaches the sentinel, then inspect the cycle counter.
    CycleCount { sentinel: u16, expected: u64 },
    /// Run until the PC stands still; the success trap sits at `expected`.
    TrapAt { expected: u16 },
    /// Like `TrapAt`, with the ROM's interrupt feedback register serviced
    /// after every instruction.
    InterruptTrapAt { expected: u16, port: u16 },
}

pub const ALL: &[Suite] = &[
    Suite {
        name: "allsuitea",
        file: "AllSuiteA.bin",
        base: 0x4000,
        entry: None,
        check: Check::MemoryByte {
            sentinel: 0x45C0,
            address: 0x0210,
            expected: 0xFF,
        },
    },
    Suite {
        name: "decimal",
        file: "6502_decimal_test.bin",
        base: 0x0200,
        entry: Some(0x0200),
        check: Check::Accumulator {
            sentinel: 0x024B,
            expected: 0x00,
        },
    },
    Suite {
        name: "interrupt",
        file: "6502_interrupt_test.bin",
        base: 0x000A,
        entry: Some(0x0400),
        check: Check::InterruptTrapAt {
            expected: 0x06F5,
            port: 0xBFFC,
        },
    },
    Suite {
        name: "functional",
        file: "6502_functional_test.bin",
        base: 0x0000,
        entry: Some(0x0400),
        check: Check::TrapAt { expected: 0x3469 },
    },
    Suite {
        name: "timing",
        file: "timingtest-1.bin",
        base: 0x1000,
        entry: Some(0x1000),
        check: Check::CycleCount {
            sentinel: 0x1269,
            expected: 1141,
        },
    },
];

/// Load the suite's binary, drive the core to its finish line, and print the
/// verdict. Returns whether the suite passed; `Err` means the file could not
/// even be loaded.
pub fn execute(suite: &Suite, dir: &Path, trace: bool) -> Result<bool, LoadError> {
    let mut bus = Bus::new();
    let path = dir.join(suite.file);
    loader::load_file(&mut bus, &path, suite.base)?;

    let mut cpu = Cpu6510::new(bus);
    if let Some(entry) = suite.entry {
        cpu.pc = entry;
    }

    println!("\n** file loaded: {} **", path.display().to_string().bold());

    let failure = match suite.check {
        Check::MemoryByte {
            sentinel,
            address,
            expected,
        } => match run_to_sentinel(&mut cpu, sentinel, trace) {
            Ok(()) => {
                let found = cpu.bus.read_u8(address);
                (found != expected)
                    .then(|| format!("{:#06x} holds {:#04x}, expected {:#04x}", address, found, expected))
            }
            Err(trap) => Some(trapped(trap)),
        },
        Check::Accumulator { sentinel, expected } => {
            match run_to_sentinel(&mut cpu, sentinel, trace) {
                Ok(()) => (cpu.a != expected)
                    .then(|| format!("A is {:#04x}, expected {:#04x}", cpu.a, expected)),
                Err(trap) => Some(trapped(trap)),
            }
        }
        Check::CycleCount { sentinel, expected } => {
            match run_to_sentinel(&mut cpu, sentinel, trace) {
                Ok(()) => (cpu.cycles != expected).then(|| {
                    format!("counted {} cycles, expected {}", cpu.cycles, expected)
                }),
                Err(trap) => Some(trapped(trap)),
            }
        }
        Check::TrapAt { expected } => {
            let trap = run_to_trap(&mut cpu, trace);
            (trap != expected).then(|| trapped(trap))
        }
        Check::InterruptTrapAt { expected, port } => {
            let trap = run_to_trap_with_interrupts(&mut cpu, port, trace);
            (trap != expected).then(|| trapped(trap))
        }
    };

    match failure {
        None => {
            println!("{} - test passed!", "✓".green());
            Ok(true)
        }
        Some(reason) => {
            println!("{} - test failed! ({})", "✘".red(), reason);
            Ok(false)
        }
    }
}

fn trapped(pc: u16) -> String {
    format!("trapped at {}", format!("{:#06x}", pc).bold())
}

/// Step until the PC lands on the sentinel. A PC that stops moving first is
/// a trap: the ROMs mark a failed check with a jump-to-self.
fn run_to_sentinel(cpu: &mut Cpu6510, sentinel: u16, trace: bool) -> Result<(), u16> {
    let mut previous_pc = cpu.pc;
    loop {
        if trace {
            println!("{}", debug::trace_line(cpu));
        }
        cpu.step();
        if cpu.pc == sentinel {
            return Ok(());
        }
        if cpu.pc == previous_pc {
            return Err(cpu.pc);
        }
        previous_pc = cpu.pc;
    }
}

/// Step until the PC stands still across two instruction boundaries, and
/// report where. The success trap is just another trap; the caller compares
/// addresses.
fn run_to_trap(cpu: &mut Cpu6510, trace: bool) -> u16 {
    let mut previous_pc = cpu.pc;
    loop {
        if trace {
            println!("{}", debug::trace_line(cpu));
        }
        cpu.step();
        if cpu.pc == previous_pc {
            return cpu.pc;
        }
        previous_pc = cpu.pc;
    }
}

/// The interrupt ROM drives IRQ/NMI through a feedback register: after every
/// instruction the register is copied into the pending latch, the handler
/// gets a chance to service it, and the (possibly cleared) latch is written
/// back for the ROM to inspect.
fn run_to_trap_with_interrupts(cpu: &mut Cpu6510, port: u16, trace: bool) -> u16 {
    cpu.bus.set_u8(port, 0);
    let mut previous_pc = cpu.pc;
    loop {
        if trace {
            println!("{}", debug::trace_line(cpu));
        }
        cpu.step();
        cpu.irq_status = cpu.bus.read_u8(port);
        cpu.interrupt_handler();
        let status = cpu.irq_status;
        cpu.bus.set_u8(port, status);
        if cpu.pc == previous_pc {
            return cpu.pc;
        }
        previous_pc = cpu.pc;
    }
}
