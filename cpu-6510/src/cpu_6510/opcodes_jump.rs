use crate::cpu_6510::*;

/// All branches share this body: fall through for free, or apply the signed
/// offset for one extra cycle, plus the table's penalty when the target sits
/// on another page.
fn branch(cpu: &mut Cpu6510, do_branch: bool) {
    if do_branch {
        let base_address = cpu.pc;
        let target = base_address.wrapping_add(cpu.addr_rel as u16);
        cpu.note_page_cross(base_address, target);
        cpu.pc = target;
        cpu.cycles += 1;
    }
}

/// Branch if plus
/// Function: branch on N=0
/// Flags:
pub fn bpl(cpu: &mut Cpu6510) {
    branch(cpu, !cpu.is_status_flag_set(StatusFlag::Negative));
}

/// Branch if minus
/// Function: branch on N=1
/// Flags:
pub fn bmi(cpu: &mut Cpu6510) {
    branch(cpu, cpu.is_status_flag_set(StatusFlag::Negative));
}

/// Branch if Overflow Clear
/// Function: branch on V=0
/// Flags:
pub fn bvc(cpu: &mut Cpu6510) {
    branch(cpu, !cpu.is_status_flag_set(StatusFlag::Overflow));
}

/// Branch if Overflow Set
/// Function: branch on V=1
/// Flags:
pub fn bvs(cpu: &mut Cpu6510) {
    branch(cpu, cpu.is_status_flag_set(StatusFlag::Overflow));
}

/// Branch if Carry Clear
/// Function: branch on C=0
/// Flags:
pub fn bcc(cpu: &mut Cpu6510) {
    branch(cpu, !cpu.is_status_flag_set(StatusFlag::Carry));
}

/// Branch if Carry Set
/// Function: branch on C=1
/// Flags:
pub fn bcs(cpu: &mut Cpu6510) {
    branch(cpu, cpu.is_status_flag_set(StatusFlag::Carry));
}

/// Branch if Not Equal
/// Function: branch on Z=0
/// Flags:
pub fn bne(cpu: &mut Cpu6510) {
    branch(cpu, !cpu.is_status_flag_set(StatusFlag::Zero));
}

/// Branch if Equal
/// Function: branch on Z=1
/// Flags:
pub fn beq(cpu: &mut Cpu6510) {
    branch(cpu, cpu.is_status_flag_set(StatusFlag::Zero));
}

/// Force interrupt. The byte after the opcode is padding that gets skipped;
/// the pushed status carries B=1 so a handler can tell a BRK from a hardware
/// interrupt.
/// Function: (S)-:=PC+1,P PC:=($FFFE)
/// Flags: B I
pub fn brk(cpu: &mut Cpu6510) {
    cpu.set_status_flag(StatusFlag::Break, true);
    cpu.pc = cpu.pc.wrapping_add(1);

    let return_address = cpu.pc;
    cpu.push_stack_u16(return_address);
    let flags = cpu.flags_byte();
    cpu.push_stack_u8(flags);

    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
    cpu.pc = cpu.bus.read_u16(InterruptVectors::IrqBrkVector as u16);
}

/// Return from Interrupt
/// Function: P,PC:=+(S)
/// Flags: N V D I Z C
pub fn rti(cpu: &mut Cpu6510) {
    let flags = cpu.pull_stack_u8();
    cpu.set_flags_byte(flags);
    cpu.pc = cpu.pull_stack_u16();
}

/// Jump to subroutine. The pushed return address is one byte short of the
/// next instruction; RTS corrects for it.
/// Function: (S)-:=PC-1 PC:={adr}
/// Flags:
pub fn jsr(cpu: &mut Cpu6510) {
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_stack_u16(return_address);
    cpu.pc = cpu.addr_ptr;
}

/// Return from Sub Routine
/// Function: PC:=+(S)+1
/// Flags:
pub fn rts(cpu: &mut Cpu6510) {
    cpu.pc = cpu.pull_stack_u16().wrapping_add(1);
}

/// Jump
/// Function: PC:={adr}
/// Flags:
pub fn jmp(cpu: &mut Cpu6510) {
    cpu.pc = cpu.addr_ptr;
}

/// Bit test
/// Function: N:=b7 V:=b6 Z:=A&{adr}
/// Flags: N V Z
pub fn bit(cpu: &mut Cpu6510) {
    let operand = cpu.read_operand();
    let result = cpu.a & operand;
    cpu.set_status_flag(StatusFlag::Negative, operand & 0b1000_0000 != 0);
    cpu.set_status_flag(StatusFlag::Overflow, operand & 0b0100_0000 != 0);
    cpu.set_status_flag(StatusFlag::Zero, result == 0);
}

/// Clear Carry flag
/// Function: C:=0
/// Flags: C
pub fn clc(cpu: &mut Cpu6510) {
    cpu.set_status_flag(StatusFlag::Carry, false);
}

/// Set Carry flag
/// Function: C:=1
/// Flags: C
pub fn sec(cpu: &mut Cpu6510) {
    cpu.set_status_flag(StatusFlag::Carry, true);
}

/// Clear Decimal flag
/// Function: D:=0
/// Flags: D
pub fn cld(cpu: &mut Cpu6510) {
    cpu.set_status_flag(StatusFlag::Decimal, false);
}

/// Set Decimal flag
/// Function: D:=1
/// Flags: D
pub fn sed(cpu: &mut Cpu6510) {
    cpu.set_status_flag(StatusFlag::Decimal, true);
}

/// Clear Interrupt disable
/// Function: I:=0
/// Flags: I
pub fn cli(cpu: &mut Cpu6510) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, false);
}

/// Set Interrupt disable
/// Function: I:=1
/// Flags: I
pub fn sei(cpu: &mut Cpu6510) {
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
}

/// Clear overflow flag
/// Function: V:=0
/// Flags: V
pub fn clv(cpu: &mut Cpu6510) {
    cpu.set_status_flag(StatusFlag::Overflow, false);
}

/// No operation. The resolver has already consumed whatever operand bytes
/// the undocumented NOP variants carry.
/// Function:
/// Flags:
pub fn nop(_cpu: &mut Cpu6510) {}
