//! The undocumented opcodes. Most of them are the sequential composition of
//! two documented primitives over the same resolved address, which is why
//! the bodies below simply call into the other opcode modules; sharing the
//! bodies keeps the flag semantics in one place.

use crate::constants::UNSTABLE_MAGIC;
use crate::cpu_6510::opcodes_logical::*;
use crate::cpu_6510::*;

/// Function: {adr}:={adr}*2 A:=A or {adr}
/// Flags: N Z C
pub fn slo(cpu: &mut Cpu6510) {
    asl(cpu);
    ora(cpu);
}

/// Function: {adr}:={adr}rol A:=A and {adr}
/// Flags: N Z C
pub fn rla(cpu: &mut Cpu6510) {
    rol(cpu);
    and(cpu);
}

/// Function: {adr}:={adr}/2 A:=A exor {adr}
/// Flags: N Z C
pub fn sre(cpu: &mut Cpu6510) {
    lsr(cpu);
    eor(cpu);
}

/// Function: {adr}:={adr}ror A:=A adc {adr}
/// Flags: N V Z C
pub fn rra(cpu: &mut Cpu6510) {
    ror(cpu);
    adc(cpu);
}

/// Function: {adr}:=A&X
/// Flags:
pub fn sax(cpu: &mut Cpu6510) {
    let value = cpu.a & cpu.x;
    cpu.write_operand(value);
}

/// Function: A,X:={adr}
/// Flags: N Z
pub fn lax(cpu: &mut Cpu6510) {
    let value = cpu.read_operand();
    cpu.a = value;
    cpu.x = value;
    cpu.update_zero_and_negative_flag(value);
}

/// Function: {adr}:={adr}-1 A-{adr}
/// Flags: N Z C
pub fn dcp(cpu: &mut Cpu6510) {
    dec(cpu);
    cmp(cpu);
}

/// Function: {adr}:={adr}+1 A:=A-{adr}
/// Flags: N V Z C
pub fn isc(cpu: &mut Cpu6510) {
    inc(cpu);
    sbc(cpu);
}

/// AND, with the negative bit copied into the carry.
/// Function: A:=A&#{imm} C:=N
/// Flags: N Z C
pub fn anc(cpu: &mut Cpu6510) {
    and(cpu);
    let negative = cpu.is_status_flag_set(StatusFlag::Negative);
    cpu.set_status_flag(StatusFlag::Carry, negative);
}

/// Function: A:=(A&#{imm})/2
/// Flags: N Z C
pub fn alr(cpu: &mut Cpu6510) {
    and(cpu);
    lsr_acc(cpu);
}

/// Function: A:=(A&#{imm})ror
/// Flags: N V Z C
pub fn arr(cpu: &mut Cpu6510) {
    and(cpu);
    ror_acc(cpu);
}

/// Highly unstable on real silicon; emulated with the usual magic constant.
/// Function: A:=(A or CONST)&X&#{imm}
/// Flags: N Z
pub fn xaa(cpu: &mut Cpu6510) {
    cpu.a = (cpu.a | UNSTABLE_MAGIC) & cpu.x & cpu.read_operand();
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Function: {adr}:=X&A
/// Flags:
pub fn axs(cpu: &mut Cpu6510) {
    let value = cpu.x & cpu.a;
    cpu.write_operand(value);
}

/// The "SH" store family ANDs its value with the high byte of the target
/// address plus one, an artifact of the address calculation still being on
/// the internal bus.
/// Function: {adr}:=A&X&H
/// Flags:
pub fn ahx(cpu: &mut Cpu6510) {
    let high = (cpu.addr_ptr >> 8) as u8;
    let value = cpu.a & cpu.x & high.wrapping_add(1);
    cpu.write_operand(value);
}

/// Function: {adr}:=Y&H
/// Flags:
pub fn shy(cpu: &mut Cpu6510) {
    let high = (cpu.addr_ptr >> 8) as u8;
    let value = cpu.y & high.wrapping_add(1);
    cpu.write_operand(value);
}

/// Function: {adr}:=X&H
/// Flags:
pub fn shx(cpu: &mut Cpu6510) {
    let high = (cpu.addr_ptr >> 8) as u8;
    let value = cpu.x & high.wrapping_add(1);
    cpu.write_operand(value);
}

/// Function: S:=A&X {adr}:=S&H
/// Flags:
pub fn tas(cpu: &mut Cpu6510) {
    cpu.s = cpu.a & cpu.x;
    let high = (cpu.addr_ptr >> 8) as u8;
    let value = cpu.s & high.wrapping_add(1);
    cpu.write_operand(value);
}

/// Function: A,X,S:={adr}&S
/// Flags: N Z
pub fn las(cpu: &mut Cpu6510) {
    let value = cpu.read_operand() & cpu.s;
    cpu.a = value;
    cpu.x = value;
    cpu.s = value;
    cpu.update_zero_and_negative_flag(value);
}

/// The SBC mirror at $EB.
/// Function: A:=A-{adr}+C-1
/// Flags: N V Z C
pub fn usbc(cpu: &mut Cpu6510) {
    sbc(cpu);
}

/// Processor lockup. Real hardware wedges the bus until a reset; here the
/// program counter is rewound onto the opcode and the step driver refuses to
/// move again, so the host sees the PC standing still.
/// Function: -
/// Flags:
pub fn jam(cpu: &mut Cpu6510) {
    cpu.pc = cpu.pc.wrapping_sub(1);
    cpu.jammed = true;
}
