use crate::bus::Bus;
use crate::constants::{irq_bits, memory_range, InterruptVectors};
use crate::opcodes::{Mode, OPCODES};

pub mod opcodes_illegal;
pub mod opcodes_jump;
pub mod opcodes_logical;
pub mod opcodes_move;

#[cfg(test)]
mod test_helpers;


#[rustfmt::skip]
pub enum StatusFlag {
    Carry            = 0b00000001,
    Zero             = 0b00000010,
    InterruptDisable = 0b00000100,
    Decimal          = 0b00001000,
    Break            = 0b00010000,
    Push             = 0b00100000,
    Overflow         = 0b01000000,
    Negative         = 0b10000000,
}

/// This struct implements the MOS Technology 6510, the processor at the heart
/// of the Commodore 64. It is a 6502 with an on-chip I/O port (see the bus);
/// the instruction set, including the undocumented opcodes, is the NMOS 6502
/// one.
///
/// http://www.6502.org/
/// https://en.wikipedia.org/wiki/MOS_Technology_6510
pub struct Cpu6510 {
    // The bus holds the 64KB memory image and decides what a read resolves to.
    pub bus: Bus,
    // "A" register - The accumulator. Typical results of operations are stored
    // here. In combination with the status register, supports carrying,
    // overflow detection, and so on.
    pub a: u8,
    /// "X" register.
    /// Used for several addressing modes. The index registers make easy loop
    /// counters with INC/DEC and the branch instructions. Not being the
    /// accumulator, they have limited addressing modes themselves when
    /// loading and saving.
    pub x: u8,
    /// "Y" register.
    pub y: u8,

    /// "PC" - Program counter.
    /// The 2-byte program counter supports 65536 direct memory locations. It
    /// moves via the internal fetch logic, an interrupt (NMI, Reset,
    /// IRQ/BRK), or the RTS/JMP/JSR/Branch instructions.
    pub pc: u16,

    /// "S" - Stack pointer
    ///
    /// The 6510 has hardware support for a stack implemented using a 256-byte
    /// array whose location is hardcoded at page 0x01 (0x0100-0x01FF), using
    /// the S register for a stack pointer. The stack is descending: a push
    /// writes at $0100|S and then decrements S.
    pub s: u8,

    /// "P" - Status register.
    /// P has 6 bits used by the ALU but is byte-wide. PHP, PLP, arithmetic,
    /// testing, and branch instructions can access this register.
    ///
    ///   7  bit  0
    /// ---- ----
    /// NVsB DIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt Disable
    /// |||| +---- Decimal
    /// |||+------ Break: only meaningful in a pushed copy of the register
    /// ||+------- No CPU effect; always pushed as 1, never stored live
    /// |+-------- Overflow
    /// +--------- Negative
    pub p: u8,

    /// Cycles elapsed since reset. The step driver adds each instruction's
    /// base cost plus the penalty for taken branches and crossed pages, which
    /// is what the cycle-exact conformance ROM checks.
    pub cycles: u64,

    /// Set by the addressing-mode resolver when an indexed effective address
    /// landed on a different page than its base; the step driver turns it
    /// into the table's penalty cycle. Valid only within one step.
    pub page_crossed: bool,

    /// The effective address the current instruction operates through, for
    /// every mode except Relative. Valid only within one step.
    pub addr_ptr: u16,

    /// The signed branch offset, for the Relative mode. Valid only within one
    /// step.
    pub addr_rel: i8,

    /// Pending-interrupt latch: bit 0 = IRQ, bit 1 = NMI (see
    /// `constants::irq_bits`). The host writes this between steps and calls
    /// `interrupt_handler`.
    pub irq_status: u8,

    /// Latched by the JAM opcodes. A jammed processor never advances again;
    /// the host notices the program counter standing still.
    pub jammed: bool,
}

impl Cpu6510 {
    pub fn new(bus: Bus) -> Cpu6510 {
        let mut cpu = Cpu6510 {
            bus,
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            s: 0,
            p: 0,
            cycles: 0,
            page_crossed: false,
            addr_ptr: 0,
            addr_rel: 0,
            irq_status: 0,
            jammed: false,
        };
        cpu.reset();
        cpu
    }

    /// Bring the processor to its post-reset state: registers and flags
    /// cleared, stack pointer at $FD, and the program counter loaded from the
    /// reset vector.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.p = 0;
        // The stack pointer ends up at $FD after the reset sequence.
        self.s = 0xFD;
        self.pc = self.bus.read_u16(InterruptVectors::ResetVector as u16);
        self.cycles = 0;
        self.page_crossed = false;
        self.addr_ptr = 0;
        self.addr_rel = 0;
        self.irq_status = 0;
        self.jammed = false;
    }

    /// Read the PC without incrementing.
    pub fn peek_u8(&self) -> u8 {
        self.bus.read_u8(self.pc)
    }

    /// Increment the program counter and read the next u8 value following
    /// the current pc.
    fn next_u8(&mut self) -> u8 {
        let value = self.bus.read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Increment the program counter and read the next u16 value following
    /// the current pc.
    fn next_u16(&mut self) -> u16 {
        let value = self.bus.read_u16(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    /// This function is useful for testing the emulator. It will only run
    /// while the predicate is true.
    pub fn run_until<F>(&mut self, predicate: F)
    where
        F: Fn(&Cpu6510) -> bool,
    {
        while !predicate(self) {
            self.step();
        }
    }

    /// Run until the processor jams.
    pub fn run(&mut self) {
        while !self.jammed {
            self.step();
        }
    }

    /// Execute one instruction: fetch the opcode, look up its table entry,
    /// resolve the addressing mode into `addr_ptr`/`addr_rel`, run the
    /// primitive, and account the cycles. A jammed processor stays put.
    pub fn step(&mut self) {
        if self.jammed {
            return;
        }
        let opcode = self.next_u8();
        let op = OPCODES[opcode as usize];

        self.cycles += op.cycles as u64;
        self.page_crossed = false;

        self.resolve_address(op.mode);
        (op.func)(self);

        if self.page_crossed {
            self.cycles += op.crossed_cycles as u64;
        }
    }

    /// The source for the comments on the modes is coming from:
    /// http://www.emulator101.com/6502-addressing-modes.html
    fn resolve_address(&mut self, mode: Mode) {
        match mode {
            // The data and/or destination is implied by the instruction
            // itself; there is nothing to resolve. The accumulator variants
            // of the shift instructions also take this arm.
            Mode::Implied | Mode::Accumulator => {}
            // These instructions have their data defined as the next byte
            // after the opcode. ORA #$B2 will perform a logical OR of the
            // value B2 with the accumulator.
            Mode::Immediate => {
                // The operand's own address is the effective address.
                self.addr_ptr = self.pc;
                self.pc = self.pc.wrapping_add(1);
            }
            // Absolute addressing specifies the memory location explicitly in
            // the two bytes following the opcode. So JMP $4032 will set the
            // PC to $4032. The 6510 is a little endian machine, so any 16 bit
            // value is stored with the LSB first.
            Mode::Absolute => {
                self.addr_ptr = self.next_u16();
            }
            // Absolute indexing gets the target address by adding the
            // contents of the X or Y register to an absolute address. When
            // the sum leaves the base page, read instructions pay one extra
            // cycle for the corrected high byte.
            Mode::AbsoluteIndexedX => {
                let base_address = self.next_u16();
                self.addr_ptr = base_address.wrapping_add(self.x as u16);
                self.note_page_cross(base_address, self.addr_ptr);
            }
            Mode::AbsoluteIndexedY => {
                let base_address = self.next_u16();
                self.addr_ptr = base_address.wrapping_add(self.y as u16);
                self.note_page_cross(base_address, self.addr_ptr);
            }
            // Zero-Page addressing reaches only the first 256 bytes of the
            // memory map. The instruction takes one less byte to specify and
            // executes in fewer cycles, which is why the most frequently used
            // variables of a program live there.
            Mode::ZeroPage => {
                self.addr_ptr = self.next_u8() as u16;
            }
            // Works like absolute indexed, but the target is limited to the
            // zero page. The index wraps: if the instruction is LDA $C0,X
            // with X=$60, the target is $20 - the carry out of $C0+$60 is
            // discarded, never reaching $0120.
            Mode::ZeroPageX => {
                self.addr_ptr = self.next_u8().wrapping_add(self.x) as u16;
            }
            Mode::ZeroPageY => {
                self.addr_ptr = self.next_u8().wrapping_add(self.y) as u16;
            }
            // Relative addressing is only used by the branches. The byte
            // after the opcode is a signed offset from the address of the
            // next instruction, so the reach is 127 forward or 128 back. The
            // branch itself decides whether to apply it.
            Mode::Relative => {
                self.addr_rel = self.next_u8() as i8;
            }
            // The next u16 is a pointer to the real target. The NMOS part
            // never carries the pointer read across a page, which is the
            // infamous JMP ($xxFF) quirk; the page-wrapping read preserves
            // it.
            Mode::Indirect => {
                let pointer = self.next_u16();
                self.addr_ptr = self.bus.read_u16_page_wrap(pointer);
            }
            // The operand byte plus X names a zero-page pointer; the pointer
            // names the target. Both the index and the pointer read wrap
            // within the zero page.
            Mode::IndirectX => {
                let pointer = self.next_u8().wrapping_add(self.x);
                self.addr_ptr = self.bus.read_u16_zero_page(pointer);
            }
            // The operand byte names a zero-page pointer; Y indexes the
            // address it holds. Crossing a page on that final add costs the
            // read instructions an extra cycle.
            Mode::IndirectY => {
                let pointer = self.next_u8();
                let base_address = self.bus.read_u16_zero_page(pointer);
                self.addr_ptr = base_address.wrapping_add(self.y as u16);
                self.note_page_cross(base_address, self.addr_ptr);
            }
        }
    }

    /// Flag a page crossing for the step driver to charge at the end of the
    /// instruction. A page boundary sits every 256 bytes.
    fn note_page_cross(&mut self, base_address: u16, offset_address: u16) {
        let [_, base_page] = base_address.to_le_bytes();
        let [_, offset_page] = offset_address.to_le_bytes();
        if base_page != offset_page {
            self.page_crossed = true;
        }
    }

    /// Read the byte the resolved effective address points at.
    fn read_operand(&self) -> u8 {
        self.bus.read_u8(self.addr_ptr)
    }

    /// Write a byte through the resolved effective address.
    fn write_operand(&mut self, value: u8) {
        self.bus.set_u8(self.addr_ptr, value);
    }

    /// Pack the status register for a push. Bit 5 does not exist in silicon
    /// and always reads back as 1.
    pub fn flags_byte(&self) -> u8 {
        self.p | StatusFlag::Push as u8
    }

    /// Restore the status register from a packed byte; the phantom bit 5 is
    /// ignored. The Break bit only matters for the next pushed copy, and
    /// every push stages it explicitly first.
    pub fn set_flags_byte(&mut self, value: u8) {
        self.p = value & !(StatusFlag::Push as u8);
    }

    /// These flags are commonly set together.
    fn update_zero_and_negative_flag(&mut self, value: u8) {
        // Numbers can be interpreted as signed or unsigned. The negative flag
        // only cares if the most-significant bit is 1 or 0.
        let negative = 0b1000_0000;
        self.set_status_flag(StatusFlag::Zero, value == 0);
        self.set_status_flag(StatusFlag::Negative, value & negative == negative);
    }

    /// ADC and SBC operate on 9 bits. 8 of them are the register A, while the
    /// last bit is the carry flag. Store this 9th bit onto the status flag.
    fn update_carry_flag(&mut self, result: u16) {
        let carry = 0b1_0000_0000;
        self.set_status_flag(StatusFlag::Carry, result & carry == carry);
    }

    /// Overflow for ADC and SBC indicates if we overflow from bit 6 to bit 7
    /// of the u8, and change the meaning of a number from being negative or
    /// positive.
    /// e.g. 0b0111_1111 + 0b0000_0001 = 0b1000_0000
    ///        |             |             |
    ///        positive      positive      negative result
    fn update_overflow_flag(&mut self, operand: u8, result: u8) {
        let bit_7_mask = 0b1000_0000;

        let does_overflow = (
            // Only look at bit 7, the most significant bit (MSB)
            bit_7_mask &
            // A and operand have the same MSB.
            !(self.a ^ operand) &
            // A and result have a different MSB
            (self.a ^ result)
        ) == bit_7_mask;

        self.set_status_flag(StatusFlag::Overflow, does_overflow);
    }

    fn set_status_flag(&mut self, status_flag: StatusFlag, value: bool) {
        if value {
            self.p |= status_flag as u8;
        } else {
            self.p &= !(status_flag as u8);
        }
    }

    fn get_carry(&self) -> u8 {
        self.p & (StatusFlag::Carry as u8)
    }

    pub fn is_status_flag_set(&self, status_flag: StatusFlag) -> bool {
        let flag = status_flag as u8;
        self.p & flag == flag
    }

    /// This function implements pushing to the stack.
    /// See the "S" register for more details.
    fn push_stack_u8(&mut self, value: u8) {
        // The stack page is hard coded.
        let address = u16::from_le_bytes([self.s, memory_range::STACK_PAGE]);
        // The stack pointer names the next free slot.
        self.bus.set_u8(address, value);
        // Grow down only after setting the memory.
        self.s = self.s.wrapping_sub(1);
    }

    /// This function implements pulling from the stack.
    /// See the "S" register for more details.
    fn pull_stack_u8(&mut self) -> u8 {
        // The current stack pointer points at available memory, increment it
        // first.
        self.s = self.s.wrapping_add(1);
        // Now read out the memory that is being pulled.
        let address = u16::from_le_bytes([self.s, memory_range::STACK_PAGE]);
        self.bus.read_u8(address)
    }

    /// Words go onto the stack high byte first, so that they read back
    /// little-endian from the stack page.
    fn push_stack_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_stack_u8(high);
        self.push_stack_u8(low);
    }

    fn pull_stack_u16(&mut self) -> u16 {
        let low = self.pull_stack_u8();
        let high = self.pull_stack_u8();
        u16::from_le_bytes([low, high])
    }

    /// Maskable interrupt entry. Does nothing while the interrupt-disable
    /// flag is set; otherwise pushes the return context with B=0 and vectors
    /// through $FFFE.
    pub fn irq(&mut self) {
        if self.is_status_flag_set(StatusFlag::InterruptDisable) {
            return;
        }
        let return_address = self.pc;
        self.push_stack_u16(return_address);
        self.set_status_flag(StatusFlag::Break, false);
        let flags = self.flags_byte();
        self.push_stack_u8(flags);
        self.set_status_flag(StatusFlag::InterruptDisable, true);

        self.pc = self.bus.read_u16(InterruptVectors::IrqBrkVector as u16);
        self.cycles += 7;
    }

    /// Non-maskable interrupt entry: like `irq`, but nothing can hold it off
    /// and it vectors through $FFFA.
    pub fn nmi(&mut self) {
        let return_address = self.pc;
        self.push_stack_u16(return_address);
        self.set_status_flag(StatusFlag::Break, false);
        let flags = self.flags_byte();
        self.push_stack_u8(flags);
        self.set_status_flag(StatusFlag::InterruptDisable, true);

        self.pc = self
            .bus
            .read_u16(InterruptVectors::NonMaskableInterrupt as u16);
        self.cycles += 7;
    }

    /// Service whatever the host latched into `irq_status` between steps.
    /// NMI wins; a pending IRQ stays latched while the disable flag is up.
    pub fn interrupt_handler(&mut self) {
        if self.irq_status & irq_bits::NMI_PENDING != 0 {
            self.nmi();
            self.irq_status &= !irq_bits::NMI_PENDING;
        }
        if self.irq_status & irq_bits::IRQ_PENDING != 0
            && !self.is_status_flag_set(StatusFlag::InterruptDisable)
        {
            self.irq();
            self.irq_status &= !irq_bits::IRQ_PENDING;
        }
    }
}
