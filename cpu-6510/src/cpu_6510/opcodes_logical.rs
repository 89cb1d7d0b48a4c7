use crate::cpu_6510::*;

/// Apply the logical "or" operator on the accumulator.
/// Function: A:=A or {adr}
/// Flags: N Z
pub fn ora(cpu: &mut Cpu6510) {
    cpu.a |= cpu.read_operand();
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Apply the logical "and" operator on the accumulator.
/// Function: A:=A&{adr}
/// Flags: N Z
pub fn and(cpu: &mut Cpu6510) {
    cpu.a &= cpu.read_operand();
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Logical Exclusive OR
/// Function: A:=A exor {adr}
/// Flags: N Z
pub fn eor(cpu: &mut Cpu6510) {
    cpu.a ^= cpu.read_operand();
    cpu.update_zero_and_negative_flag(cpu.a);
}

pub(super) fn add_impl(cpu: &mut Cpu6510, operand: u8) {
    // Translating to u16 means that the values won't wrap, so wrapping
    // add is not needed.
    let result_u16 =
        // Get the carry from the previous operation, and carry it over
        // into this one, but operate in the u16 space as to not overflow.
        cpu.get_carry() as u16 + // Either 0x00 or 0x01
        cpu.a as u16 +
        operand as u16;

    let result_u8 = result_u16 as u8;

    cpu.update_zero_and_negative_flag(result_u8);
    // Take the 0x100 value here, and set it to the register. This can then
    // carry over into the next byte of a number.
    cpu.update_carry_flag(result_u16);
    cpu.update_overflow_flag(operand, result_u8);
    cpu.a = result_u8;
}

/// Packed BCD addition. The nibbles are summed and corrected separately; N,
/// V and C come out of the high-nibble arithmetic, while Z still reflects
/// the plain binary sum on the NMOS part.
fn add_decimal_impl(cpu: &mut Cpu6510, operand: u8) {
    let carry = cpu.get_carry();
    let binary_result = (cpu.a as u16 + operand as u16 + carry as u16) as u8;

    let mut low = (cpu.a & 0x0F) + (operand & 0x0F) + carry;
    if low > 0x09 {
        low += 0x06;
    }
    let mut high = (cpu.a >> 4) + (operand >> 4) + (low > 0x0F) as u8;

    // Overflow looks at the uncorrected high nibble, back in bit-7 position.
    let overflow = ((high << 4) ^ cpu.a) & !(cpu.a ^ operand) & 0x80 != 0;
    cpu.set_status_flag(StatusFlag::Overflow, overflow);

    if high > 0x09 {
        high += 0x06;
    }

    cpu.set_status_flag(StatusFlag::Negative, high & 0x08 != 0);
    cpu.set_status_flag(StatusFlag::Carry, high > 0x0F);
    cpu.set_status_flag(StatusFlag::Zero, binary_result == 0);

    cpu.a = (high << 4) | (low & 0x0F);
}

/// Packed BCD subtraction. The accumulator takes the nibble-corrected
/// result, but every flag reflects the plain binary subtraction, as on the
/// NMOS part.
fn sub_decimal_impl(cpu: &mut Cpu6510, operand: u8) {
    let borrow = 1 - cpu.get_carry();
    let binary_result = (cpu.a as u16)
        .wrapping_sub(operand as u16)
        .wrapping_sub(borrow as u16);
    let result_u8 = binary_result as u8;

    let mut low = (cpu.a & 0x0F)
        .wrapping_sub(operand & 0x0F)
        .wrapping_sub(borrow);
    if low & 0x80 != 0 {
        low = low.wrapping_sub(0x06);
    }
    let borrowed_high = (low & 0x80 != 0) as u8;
    let mut high = (cpu.a >> 4)
        .wrapping_sub(operand >> 4)
        .wrapping_sub(borrowed_high);
    if high & 0x80 != 0 {
        high = high.wrapping_sub(0x06);
    }

    cpu.update_zero_and_negative_flag(result_u8);
    let overflow = (result_u8 ^ cpu.a) & (cpu.a ^ operand) & 0x80 != 0;
    cpu.set_status_flag(StatusFlag::Overflow, overflow);
    // No borrow out of bit 8 leaves the carry set.
    cpu.set_status_flag(StatusFlag::Carry, binary_result < 0x100);

    cpu.a = (high << 4) | (low & 0x0F);
}

/// Add with Carry
/// Function: A:=A+{adr}+C
/// Flags: N V Z C
pub fn adc(cpu: &mut Cpu6510) {
    let operand = cpu.read_operand();
    if cpu.is_status_flag_set(StatusFlag::Decimal) {
        add_decimal_impl(cpu, operand);
    } else {
        add_impl(cpu, operand);
    }
}

/// Subtract with Carry
/// Function: A:=A-{adr}+C-1
/// Flags: N V Z C
pub fn sbc(cpu: &mut Cpu6510) {
    let operand = cpu.read_operand();
    if cpu.is_status_flag_set(StatusFlag::Decimal) {
        sub_decimal_impl(cpu, operand);
    } else {
        // In order to properly subtract we need the two's complement of the
        // operand. Normally this would be `!operand + 1`; here the operand
        // is inverted and the carry flag provides the +1, which is why code
        // runs SEC before a subtraction.
        add_impl(cpu, !operand);
    }
}

/// Compare A with source
/// http://6502.org/tutorials/compare_instructions.html
/// Function: A-{adr}
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu6510) {
    let operand = cpu.read_operand();
    cpu.update_zero_and_negative_flag(cpu.a.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, cpu.a >= operand);
}

/// Compare X with source
/// Function: X-{adr}
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu6510) {
    let operand = cpu.read_operand();
    cpu.update_zero_and_negative_flag(cpu.x.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, cpu.x >= operand);
}

/// Compare Y with source
/// Function: Y-{adr}
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu6510) {
    let operand = cpu.read_operand();
    cpu.update_zero_and_negative_flag(cpu.y.wrapping_sub(operand));
    cpu.set_status_flag(StatusFlag::Carry, cpu.y >= operand);
}

/// Decrement at an address
/// Function: {adr}:={adr}-1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu6510) {
    let result = cpu.read_operand().wrapping_sub(1);
    cpu.update_zero_and_negative_flag(result);
    cpu.write_operand(result);
}

/// Decrement X
/// Function: X:=X-1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu6510) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Decrement Y
/// Function: Y:=Y-1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu6510) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Increment at an address
/// Function: {adr}:={adr}+1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu6510) {
    let result = cpu.read_operand().wrapping_add(1);
    cpu.update_zero_and_negative_flag(result);
    cpu.write_operand(result);
}

/// Increment X
/// Function: X:=X+1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu6510) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Increment Y
/// Function: Y:=Y+1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu6510) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Arithmetic shift left, memory variant
/// Function: {adr}:={adr}*2
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu6510) {
    let operand = cpu.read_operand();
    let result = operand << 1;
    cpu.update_zero_and_negative_flag(result);
    // The Carry flag contains the bit that was shifted out:
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b1000_0000 != 0);
    cpu.write_operand(result);
}

/// Arithmetic shift left, accumulator variant
/// Function: A:=A*2
/// Flags: N Z C
pub fn asl_acc(cpu: &mut Cpu6510) {
    let result = cpu.a << 1;
    cpu.update_zero_and_negative_flag(result);
    cpu.set_status_flag(StatusFlag::Carry, cpu.a & 0b1000_0000 != 0);
    cpu.a = result;
}

/// Rotate left, memory variant
/// Function: {adr}:={adr}*2+C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu6510) {
    let operand = cpu.read_operand();
    let result = (operand << 1) | cpu.get_carry();
    cpu.update_zero_and_negative_flag(result);
    // The Carry flag contains the bit that was shifted out:
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b1000_0000 != 0);
    cpu.write_operand(result);
}

/// Rotate left, accumulator variant
/// Function: A:=A*2+C
/// Flags: N Z C
pub fn rol_acc(cpu: &mut Cpu6510) {
    let result = (cpu.a << 1) | cpu.get_carry();
    cpu.update_zero_and_negative_flag(result);
    cpu.set_status_flag(StatusFlag::Carry, cpu.a & 0b1000_0000 != 0);
    cpu.a = result;
}

/// Logical shift right, memory variant
/// Function: {adr}:={adr}/2
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu6510) {
    let operand = cpu.read_operand();
    let result = operand >> 1;
    cpu.update_zero_and_negative_flag(result);
    // The Carry flag contains the bit that was shifted out:
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b0000_0001 != 0);
    cpu.write_operand(result);
}

/// Logical shift right, accumulator variant
/// Function: A:=A/2
/// Flags: N Z C
pub fn lsr_acc(cpu: &mut Cpu6510) {
    let result = cpu.a >> 1;
    cpu.update_zero_and_negative_flag(result);
    cpu.set_status_flag(StatusFlag::Carry, cpu.a & 0b0000_0001 != 0);
    cpu.a = result;
}

/// Rotate right, memory variant
/// Function: {adr}:={adr}/2+C*128
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu6510) {
    let operand = cpu.read_operand();
    let result = (operand >> 1) | (cpu.get_carry() << 7);
    cpu.update_zero_and_negative_flag(result);
    // The Carry flag contains the bit that was shifted out:
    cpu.set_status_flag(StatusFlag::Carry, operand & 0b0000_0001 != 0);
    cpu.write_operand(result);
}

/// Rotate right, accumulator variant
/// Function: A:=A/2+C*128
/// Flags: N Z C
pub fn ror_acc(cpu: &mut Cpu6510) {
    let result = (cpu.a >> 1) | (cpu.get_carry() << 7);
    cpu.update_zero_and_negative_flag(result);
    cpu.set_status_flag(StatusFlag::Carry, cpu.a & 0b0000_0001 != 0);
    cpu.a = result;
}
