use crate::cpu_6510::opcodes_illegal::*;
use crate::cpu_6510::opcodes_jump::*;
use crate::cpu_6510::opcodes_logical::*;
use crate::cpu_6510::opcodes_move::*;
use crate::cpu_6510::Cpu6510;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Absolute,         // abs
    AbsoluteIndexedX, // abx
    AbsoluteIndexedY, // aby
    Accumulator,      // a
    Immediate,        // imm
    Implied,          // imp
    Indirect,         // ind
    IndirectX,        // izx
    IndirectY,        // izy
    Relative,         // rel
    ZeroPage,         // zp
    ZeroPageX,        // zpx
    ZeroPageY,        // zpy
}

/// Every opcode byte by name. Duplicated mnemonics for the same addressing
/// mode get a numeric suffix; the suffix-free name is the lowest byte value.
/// Mostly useful for writing test programs that read like assembly.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy)]
pub enum OpCode {
    BRK = 0x00,
    ORA_izx = 0x01,
    JAM = 0x02,
    SLO_izx = 0x03,
    NOP_zp = 0x04,
    ORA_zp = 0x05,
    ASL_zp = 0x06,
    SLO_zp = 0x07,
    PHP = 0x08,
    ORA_imm = 0x09,
    ASL_a = 0x0a,
    ANC_imm = 0x0b,
    NOP_abs = 0x0c,
    ORA_abs = 0x0d,
    ASL_abs = 0x0e,
    SLO_abs = 0x0f,
    BPL_rel = 0x10,
    ORA_izy = 0x11,
    JAM1 = 0x12,
    SLO_izy = 0x13,
    NOP_zpx = 0x14,
    ORA_zpx = 0x15,
    ASL_zpx = 0x16,
    SLO_zpx = 0x17,
    CLC = 0x18,
    ORA_aby = 0x19,
    NOP = 0x1a,
    SLO_aby = 0x1b,
    NOP_abx = 0x1c,
    ORA_abx = 0x1d,
    ASL_abx = 0x1e,
    SLO_abx = 0x1f,
    JSR_abs = 0x20,
    AND_izx = 0x21,
    JAM2 = 0x22,
    RLA_izx = 0x23,
    BIT_zp = 0x24,
    AND_zp = 0x25,
    ROL_zp = 0x26,
    RLA_zp = 0x27,
    PLP = 0x28,
    AND_imm = 0x29,
    ROL_a = 0x2a,
    ANC_imm1 = 0x2b,
    BIT_abs = 0x2c,
    AND_abs = 0x2d,
    ROL_abs = 0x2e,
    RLA_abs = 0x2f,
    BMI_rel = 0x30,
    AND_izy = 0x31,
    JAM3 = 0x32,
    RLA_izy = 0x33,
    NOP_zpx1 = 0x34,
    AND_zpx = 0x35,
    ROL_zpx = 0x36,
    RLA_zpx = 0x37,
    SEC = 0x38,
    AND_aby = 0x39,
    NOP1 = 0x3a,
    RLA_aby = 0x3b,
    NOP_abx1 = 0x3c,
    AND_abx = 0x3d,
    ROL_abx = 0x3e,
    RLA_abx = 0x3f,
    RTI = 0x40,
    EOR_izx = 0x41,
    JAM4 = 0x42,
    SRE_izx = 0x43,
    NOP_zp1 = 0x44,
    EOR_zp = 0x45,
    LSR_zp = 0x46,
    SRE_zp = 0x47,
    PHA = 0x48,
    EOR_imm = 0x49,
    LSR_a = 0x4a,
    ALR_imm = 0x4b,
    JMP_abs = 0x4c,
    EOR_abs = 0x4d,
    LSR_abs = 0x4e,
    SRE_abs = 0x4f,
    BVC_rel = 0x50,
    EOR_izy = 0x51,
    JAM5 = 0x52,
    SRE_izy = 0x53,
    NOP_zpx2 = 0x54,
    EOR_zpx = 0x55,
    LSR_zpx = 0x56,
    SRE_zpx = 0x57,
    CLI = 0x58,
    EOR_aby = 0x59,
    NOP2 = 0x5a,
    SRE_aby = 0x5b,
    NOP_abx2 = 0x5c,
    EOR_abx = 0x5d,
    LSR_abx = 0x5e,
    SRE_abx = 0x5f,
    RTS = 0x60,
    ADC_izx = 0x61,
    JAM6 = 0x62,
    RRA_izx = 0x63,
    NOP_zp2 = 0x64,
    ADC_zp = 0x65,
    ROR_zp = 0x66,
    RRA_zp = 0x67,
    PLA = 0x68,
    ADC_imm = 0x69,
    ROR_a = 0x6a,
    ARR_imm = 0x6b,
    JMP_ind = 0x6c,
    ADC_abs = 0x6d,
    ROR_abs = 0x6e,
    RRA_abs = 0x6f,
    BVS_rel = 0x70,
    ADC_izy = 0x71,
    JAM7 = 0x72,
    RRA_izy = 0x73,
    NOP_zpx3 = 0x74,
    ADC_zpx = 0x75,
    ROR_zpx = 0x76,
    RRA_zpx = 0x77,
    SEI = 0x78,
    ADC_aby = 0x79,
    NOP3 = 0x7a,
    RRA_aby = 0x7b,
    NOP_abx3 = 0x7c,
    ADC_abx = 0x7d,
    ROR_abx = 0x7e,
    RRA_abx = 0x7f,
    NOP_imm = 0x80,
    STA_izx = 0x81,
    NOP_imm1 = 0x82,
    SAX_izx = 0x83,
    STY_zp = 0x84,
    STA_zp = 0x85,
    STX_zp = 0x86,
    SAX_zp = 0x87,
    DEY = 0x88,
    NOP_imm2 = 0x89,
    TXA = 0x8a,
    XAA_imm = 0x8b,
    STY_abs = 0x8c,
    STA_abs = 0x8d,
    STX_abs = 0x8e,
    SAX_abs = 0x8f,
    BCC_rel = 0x90,
    STA_izy = 0x91,
    JAM8 = 0x92,
    AHX_izy = 0x93,
    STY_zpx = 0x94,
    STA_zpx = 0x95,
    STX_zpy = 0x96,
    SAX_zpy = 0x97,
    TYA = 0x98,
    STA_aby = 0x99,
    TXS = 0x9a,
    TAS_aby = 0x9b,
    SHY_abx = 0x9c,
    STA_abx = 0x9d,
    SHX_aby = 0x9e,
    AHX_aby = 0x9f,
    LDY_imm = 0xa0,
    LDA_izx = 0xa1,
    LDX_imm = 0xa2,
    LAX_izx = 0xa3,
    LDY_zp = 0xa4,
    LDA_zp = 0xa5,
    LDX_zp = 0xa6,
    LAX_zp = 0xa7,
    TAY = 0xa8,
    LDA_imm = 0xa9,
    TAX = 0xaa,
    LAX_imm = 0xab,
    LDY_abs = 0xac,
    LDA_abs = 0xad,
    LDX_abs = 0xae,
    LAX_abs = 0xaf,
    BCS_rel = 0xb0,
    LDA_izy = 0xb1,
    JAM9 = 0xb2,
    LAX_izy = 0xb3,
    LDY_zpx = 0xb4,
    LDA_zpx = 0xb5,
    LDX_zpy = 0xb6,
    LAX_zpy = 0xb7,
    CLV = 0xb8,
    LDA_aby = 0xb9,
    TSX = 0xba,
    LAS_aby = 0xbb,
    LDY_abx = 0xbc,
    LDA_abx = 0xbd,
    LDX_aby = 0xbe,
    LAX_aby = 0xbf,
    CPY_imm = 0xc0,
    CMP_izx = 0xc1,
    NOP_imm3 = 0xc2,
    DCP_izx = 0xc3,
    CPY_zp = 0xc4,
    CMP_zp = 0xc5,
    DEC_zp = 0xc6,
    DCP_zp = 0xc7,
    INY = 0xc8,
    CMP_imm = 0xc9,
    DEX = 0xca,
    AXS_imm = 0xcb,
    CPY_abs = 0xcc,
    CMP_abs = 0xcd,
    DEC_abs = 0xce,
    DCP_abs = 0xcf,
    BNE_rel = 0xd0,
    CMP_izy = 0xd1,
    JAM10 = 0xd2,
    DCP_izy = 0xd3,
    NOP_zpx4 = 0xd4,
    CMP_zpx = 0xd5,
    DEC_zpx = 0xd6,
    DCP_zpx = 0xd7,
    CLD = 0xd8,
    CMP_aby = 0xd9,
    NOP4 = 0xda,
    DCP_aby = 0xdb,
    NOP_abx4 = 0xdc,
    CMP_abx = 0xdd,
    DEC_abx = 0xde,
    DCP_abx = 0xdf,
    CPX_imm = 0xe0,
    SBC_izx = 0xe1,
    NOP_imm4 = 0xe2,
    ISC_izx = 0xe3,
    CPX_zp = 0xe4,
    SBC_zp = 0xe5,
    INC_zp = 0xe6,
    ISC_zp = 0xe7,
    INX = 0xe8,
    SBC_imm = 0xe9,
    NOP5 = 0xea,
    USBC_imm = 0xeb,
    CPX_abs = 0xec,
    SBC_abs = 0xed,
    INC_abs = 0xee,
    ISC_abs = 0xef,
    BEQ_rel = 0xf0,
    SBC_izy = 0xf1,
    JAM11 = 0xf2,
    ISC_izy = 0xf3,
    NOP_zpx5 = 0xf4,
    SBC_zpx = 0xf5,
    INC_zpx = 0xf6,
    ISC_zpx = 0xf7,
    SED = 0xf8,
    SBC_aby = 0xf9,
    NOP6 = 0xfa,
    ISC_aby = 0xfb,
    NOP_abx5 = 0xfc,
    SBC_abx = 0xfd,
    INC_abx = 0xfe,
    ISC_abx = 0xff,
}

pub type OperationFn = fn(&mut Cpu6510);

/// One slot of the dispatch table: the primitive, its base cycle count, how
/// its operand is addressed, and the extra cycle it pays when the resolver
/// reports a crossed page boundary.
#[derive(Clone, Copy)]
pub struct Op {
    pub func: OperationFn,
    pub cycles: u8,
    pub mode: Mode,
    pub crossed_cycles: u8,
}

const fn op(func: OperationFn, cycles: u8, mode: Mode, crossed_cycles: u8) -> Op {
    Op {
        func,
        cycles,
        mode,
        crossed_cycles,
    }
}

use Mode::*;

/// The full 256-entry dispatch table, indexed by the raw opcode byte. Every
/// slot is populated; the bytes the datasheet leaves undefined map to the
/// well-known illegal operations, and the $x2 family jams the processor.
#[rustfmt::skip]
pub const OPCODES: [Op; 256] = [
    op(brk,     7, Implied,          0), /* 0x00 */
    op(ora,     6, IndirectX,        0), /* 0x01 */
    op(jam,     0, Implied,          0), /* 0x02 */
    op(slo,     8, IndirectX,        0), /* 0x03 */
    op(nop,     3, ZeroPage,         0), /* 0x04 */
    op(ora,     3, ZeroPage,         0), /* 0x05 */
    op(asl,     5, ZeroPage,         0), /* 0x06 */
    op(slo,     5, ZeroPage,         0), /* 0x07 */
    op(php,     3, Implied,          0), /* 0x08 */
    op(ora,     2, Immediate,        0), /* 0x09 */
    op(asl_acc, 2, Accumulator,      0), /* 0x0A */
    op(anc,     2, Immediate,        0), /* 0x0B */
    op(nop,     4, Absolute,         0), /* 0x0C */
    op(ora,     4, Absolute,         0), /* 0x0D */
    op(asl,     6, Absolute,         0), /* 0x0E */
    op(slo,     6, Absolute,         0), /* 0x0F */
    op(bpl,     2, Relative,         1), /* 0x10 */
    op(ora,     5, IndirectY,        1), /* 0x11 */
    op(jam,     0, Implied,          0), /* 0x12 */
    op(slo,     8, IndirectY,        0), /* 0x13 */
    op(nop,     4, ZeroPageX,        0), /* 0x14 */
    op(ora,     4, ZeroPageX,        0), /* 0x15 */
    op(asl,     6, ZeroPageX,        0), /* 0x16 */
    op(slo,     6, ZeroPageX,        0), /* 0x17 */
    op(clc,     2, Implied,          0), /* 0x18 */
    op(ora,     4, AbsoluteIndexedY, 1), /* 0x19 */
    op(nop,     2, Implied,          0), /* 0x1A */
    op(slo,     7, AbsoluteIndexedY, 0), /* 0x1B */
    op(nop,     4, AbsoluteIndexedX, 1), /* 0x1C */
    op(ora,     4, AbsoluteIndexedX, 1), /* 0x1D */
    op(asl,     7, AbsoluteIndexedX, 0), /* 0x1E */
    op(slo,     7, AbsoluteIndexedX, 0), /* 0x1F */
    op(jsr,     6, Absolute,         0), /* 0x20 */
    op(and,     6, IndirectX,        0), /* 0x21 */
    op(jam,     0, Implied,          0), /* 0x22 */
    op(rla,     8, IndirectX,        0), /* 0x23 */
    op(bit,     3, ZeroPage,         0), /* 0x24 */
    op(and,     3, ZeroPage,         0), /* 0x25 */
    op(rol,     5, ZeroPage,         0), /* 0x26 */
    op(rla,     5, ZeroPage,         0), /* 0x27 */
    op(plp,     4, Implied,          0), /* 0x28 */
    op(and,     2, Immediate,        0), /* 0x29 */
    op(rol_acc, 2, Accumulator,      0), /* 0x2A */
    op(anc,     2, Immediate,        0), /* 0x2B */
    op(bit,     4, Absolute,         0), /* 0x2C */
    op(and,     4, Absolute,         0), /* 0x2D */
    op(rol,     6, Absolute,         0), /* 0x2E */
    op(rla,     6, Absolute,         0), /* 0x2F */
    op(bmi,     2, Relative,         1), /* 0x30 */
    op(and,     5, IndirectY,        1), /* 0x31 */
    op(jam,     0, Implied,          0), /* 0x32 */
    op(rla,     8, IndirectY,        0), /* 0x33 */
    op(nop,     4, ZeroPageX,        0), /* 0x34 */
    op(and,     4, ZeroPageX,        0), /* 0x35 */
    op(rol,     6, ZeroPageX,        0), /* 0x36 */
    op(rla,     6, ZeroPageX,        0), /* 0x37 */
    op(sec,     2, Implied,          0), /* 0x38 */
    op(and,     4, AbsoluteIndexedY, 1), /* 0x39 */
    op(nop,     2, Implied,          0), /* 0x3A */
    op(rla,     7, AbsoluteIndexedY, 0), /* 0x3B */
    op(nop,     4, AbsoluteIndexedX, 1), /* 0x3C */
    op(and,     4, AbsoluteIndexedX, 1), /* 0x3D */
    op(rol,     7, AbsoluteIndexedX, 0), /* 0x3E */
    op(rla,     7, AbsoluteIndexedX, 0), /* 0x3F */
    op(rti,     6, Implied,          0), /* 0x40 */
    op(eor,     6, IndirectX,        0), /* 0x41 */
    op(jam,     0, Implied,          0), /* 0x42 */
    op(sre,     8, IndirectX,        0), /* 0x43 */
    op(nop,     3, ZeroPage,         0), /* 0x44 */
    op(eor,     3, ZeroPage,         0), /* 0x45 */
    op(lsr,     5, ZeroPage,         0), /* 0x46 */
    op(sre,     5, ZeroPage,         0), /* 0x47 */
    op(pha,     3, Implied,          0), /* 0x48 */
    op(eor,     2, Immediate,        0), /* 0x49 */
    op(lsr_acc, 2, Accumulator,      0), /* 0x4A */
    op(alr,     2, Immediate,        0), /* 0x4B */
    op(jmp,     3, Absolute,         0), /* 0x4C */
    op(eor,     4, Absolute,         0), /* 0x4D */
    op(lsr,     6, Absolute,         0), /* 0x4E */
    op(sre,     6, Absolute,         0), /* 0x4F */
    op(bvc,     2, Relative,         1), /* 0x50 */
    op(eor,     5, IndirectY,        1), /* 0x51 */
    op(jam,     0, Implied,          0), /* 0x52 */
    op(sre,     8, IndirectY,        0), /* 0x53 */
    op(nop,     4, ZeroPageX,        0), /* 0x54 */
    op(eor,     4, ZeroPageX,        0), /* 0x55 */
    op(lsr,     6, ZeroPageX,        0), /* 0x56 */
    op(sre,     6, ZeroPageX,        0), /* 0x57 */
    op(cli,     2, Implied,          0), /* 0x58 */
    op(eor,     4, AbsoluteIndexedY, 1), /* 0x59 */
    op(nop,     2, Implied,          0), /* 0x5A */
    op(sre,     7, AbsoluteIndexedY, 0), /* 0x5B */
    op(nop,     4, AbsoluteIndexedX, 1), /* 0x5C */
    op(eor,     4, AbsoluteIndexedX, 1), /* 0x5D */
    op(lsr,     7, AbsoluteIndexedX, 0), /* 0x5E */
    op(sre,     7, AbsoluteIndexedX, 0), /* 0x5F */
    op(rts,     6, Implied,          0), /* 0x60 */
    op(adc,     6, IndirectX,        0), /* 0x61 */
    op(jam,     0, Implied,          0), /* 0x62 */
    op(rra,     8, IndirectX,        0), /* 0x63 */
    op(nop,     3, ZeroPage,         0), /* 0x64 */
    op(adc,     3, ZeroPage,         0), /* 0x65 */
    op(ror,     5, ZeroPage,         0), /* 0x66 */
    op(rra,     5, ZeroPage,         0), /* 0x67 */
    op(pla,     4, Implied,          0), /* 0x68 */
    op(adc,     2, Immediate,        0), /* 0x69 */
    op(ror_acc, 2, Accumulator,      0), /* 0x6A */
    op(arr,     2, Immediate,        0), /* 0x6B */
    op(jmp,     5, Indirect,         0), /* 0x6C */
    op(adc,     4, Absolute,         0), /* 0x6D */
    op(ror,     6, Absolute,         0), /* 0x6E */
    op(rra,     6, Absolute,         0), /* 0x6F */
    op(bvs,     2, Relative,         1), /* 0x70 */
    op(adc,     5, IndirectY,        1), /* 0x71 */
    op(jam,     0, Implied,          0), /* 0x72 */
    op(rra,     8, IndirectY,        0), /* 0x73 */
    op(nop,     4, ZeroPageX,        0), /* 0x74 */
    op(adc,     4, ZeroPageX,        0), /* 0x75 */
    op(ror,     6, ZeroPageX,        0), /* 0x76 */
    op(rra,     6, ZeroPageX,        0), /* 0x77 */
    op(sei,     2, Implied,          0), /* 0x78 */
    op(adc,     4, AbsoluteIndexedY, 1), /* 0x79 */
    op(nop,     2, Implied,          0), /* 0x7A */
    op(rra,     7, AbsoluteIndexedY, 0), /* 0x7B */
    op(nop,     4, AbsoluteIndexedX, 1), /* 0x7C */
    op(adc,     4, AbsoluteIndexedX, 1), /* 0x7D */
    op(ror,     7, AbsoluteIndexedX, 0), /* 0x7E */
    op(rra,     7, AbsoluteIndexedX, 0), /* 0x7F */
    op(nop,     2, Immediate,        0), /* 0x80 */
    op(sta,     6, IndirectX,        0), /* 0x81 */
    op(nop,     2, Immediate,        0), /* 0x82 */
    op(sax,     6, IndirectX,        0), /* 0x83 */
    op(sty,     3, ZeroPage,         0), /* 0x84 */
    op(sta,     3, ZeroPage,         0), /* 0x85 */
    op(stx,     3, ZeroPage,         0), /* 0x86 */
    op(sax,     3, ZeroPage,         0), /* 0x87 */
    op(dey,     2, Implied,          0), /* 0x88 */
    op(nop,     2, Immediate,        0), /* 0x89 */
    op(txa,     2, Implied,          0), /* 0x8A */
    op(xaa,     2, Immediate,        0), /* 0x8B */
    op(sty,     4, Absolute,         0), /* 0x8C */
    op(sta,     4, Absolute,         0), /* 0x8D */
    op(stx,     4, Absolute,         0), /* 0x8E */
    op(sax,     4, Absolute,         0), /* 0x8F */
    op(bcc,     2, Relative,         1), /* 0x90 */
    op(sta,     6, IndirectY,        0), /* 0x91 */
    op(jam,     0, Implied,          0), /* 0x92 */
    op(ahx,     6, IndirectY,        0), /* 0x93 */
    op(sty,     4, ZeroPageX,        0), /* 0x94 */
    op(sta,     4, ZeroPageX,        0), /* 0x95 */
    op(stx,     4, ZeroPageY,        0), /* 0x96 */
    op(sax,     4, ZeroPageY,        0), /* 0x97 */
    op(tya,     2, Implied,          0), /* 0x98 */
    op(sta,     5, AbsoluteIndexedY, 0), /* 0x99 */
    op(txs,     2, Implied,          0), /* 0x9A */
    op(tas,     5, AbsoluteIndexedY, 0), /* 0x9B */
    op(shy,     5, AbsoluteIndexedX, 0), /* 0x9C */
    op(sta,     5, AbsoluteIndexedX, 0), /* 0x9D */
    op(shx,     5, AbsoluteIndexedY, 0), /* 0x9E */
    op(ahx,     5, AbsoluteIndexedY, 0), /* 0x9F */
    op(ldy,     2, Immediate,        0), /* 0xA0 */
    op(lda,     6, IndirectX,        0), /* 0xA1 */
    op(ldx,     2, Immediate,        0), /* 0xA2 */
    op(lax,     6, IndirectX,        0), /* 0xA3 */
    op(ldy,     3, ZeroPage,         0), /* 0xA4 */
    op(lda,     3, ZeroPage,         0), /* 0xA5 */
    op(ldx,     3, ZeroPage,         0), /* 0xA6 */
    op(lax,     3, ZeroPage,         0), /* 0xA7 */
    op(tay,     2, Implied,          0), /* 0xA8 */
    op(lda,     2, Immediate,        0), /* 0xA9 */
    op(tax,     2, Implied,          0), /* 0xAA */
    op(lax,     2, Immediate,        0), /* 0xAB */
    op(ldy,     4, Absolute,         0), /* 0xAC */
    op(lda,     4, Absolute,         0), /* 0xAD */
    op(ldx,     4, Absolute,         0), /* 0xAE */
    op(lax,     4, Absolute,         0), /* 0xAF */
    op(bcs,     2, Relative,         1), /* 0xB0 */
    op(lda,     5, IndirectY,        1), /* 0xB1 */
    op(jam,     0, Implied,          0), /* 0xB2 */
    op(lax,     5, IndirectY,        1), /* 0xB3 */
    op(ldy,     4, ZeroPageX,        0), /* 0xB4 */
    op(lda,     4, ZeroPageX,        0), /* 0xB5 */
    op(ldx,     4, ZeroPageY,        0), /* 0xB6 */
    op(lax,     4, ZeroPageY,        0), /* 0xB7 */
    op(clv,     2, Implied,          0), /* 0xB8 */
    op(lda,     4, AbsoluteIndexedY, 1), /* 0xB9 */
    op(tsx,     2, Implied,          0), /* 0xBA */
    op(las,     4, AbsoluteIndexedY, 1), /* 0xBB */
    op(ldy,     4, AbsoluteIndexedX, 1), /* 0xBC */
    op(lda,     4, AbsoluteIndexedX, 1), /* 0xBD */
    op(ldx,     4, AbsoluteIndexedY, 1), /* 0xBE */
    op(lax,     4, AbsoluteIndexedY, 1), /* 0xBF */
    op(cpy,     2, Immediate,        0), /* 0xC0 */
    op(cmp,     6, IndirectX,        0), /* 0xC1 */
    op(nop,     2, Immediate,        0), /* 0xC2 */
    op(dcp,     8, IndirectX,        0), /* 0xC3 */
    op(cpy,     3, ZeroPage,         0), /* 0xC4 */
    op(cmp,     3, ZeroPage,         0), /* 0xC5 */
    op(dec,     5, ZeroPage,         0), /* 0xC6 */
    op(dcp,     5, ZeroPage,         0), /* 0xC7 */
    op(iny,     2, Implied,          0), /* 0xC8 */
    op(cmp,     2, Immediate,        0), /* 0xC9 */
    op(dex,     2, Implied,          0), /* 0xCA */
    op(axs,     2, Immediate,        0), /* 0xCB */
    op(cpy,     4, Absolute,         0), /* 0xCC */
    op(cmp,     4, Absolute,         0), /* 0xCD */
    op(dec,     6, Absolute,         0), /* 0xCE */
    op(dcp,     6, Absolute,         0), /* 0xCF */
    op(bne,     2, Relative,         1), /* 0xD0 */
    op(cmp,     5, IndirectY,        1), /* 0xD1 */
    op(jam,     0, Implied,          0), /* 0xD2 */
    op(dcp,     8, IndirectY,        0), /* 0xD3 */
    op(nop,     4, ZeroPageX,        0), /* 0xD4 */
    op(cmp,     4, ZeroPageX,        0), /* 0xD5 */
    op(dec,     6, ZeroPageX,        0), /* 0xD6 */
    op(dcp,     6, ZeroPageX,        0), /* 0xD7 */
    op(cld,     2, Implied,          0), /* 0xD8 */
    op(cmp,     4, AbsoluteIndexedY, 1), /* 0xD9 */
    op(nop,     2, Implied,          0), /* 0xDA */
    op(dcp,     7, AbsoluteIndexedY, 0), /* 0xDB */
    op(nop,     4, AbsoluteIndexedX, 1), /* 0xDC */
    op(cmp,     4, AbsoluteIndexedX, 1), /* 0xDD */
    op(dec,     7, AbsoluteIndexedX, 0), /* 0xDE */
    op(dcp,     7, AbsoluteIndexedX, 0), /* 0xDF */
    op(cpx,     2, Immediate,        0), /* 0xE0 */
    op(sbc,     6, IndirectX,        0), /* 0xE1 */
    op(nop,     2, Immediate,        0), /* 0xE2 */
    op(isc,     8, IndirectX,        0), /* 0xE3 */
    op(cpx,     3, ZeroPage,         0), /* 0xE4 */
    op(sbc,     3, ZeroPage,         0), /* 0xE5 */
    op(inc,     5, ZeroPage,         0), /* 0xE6 */
    op(isc,     5, ZeroPage,         0), /* 0xE7 */
    op(inx,     2, Implied,          0), /* 0xE8 */
    op(sbc,     2, Immediate,        0), /* 0xE9 */
    op(nop,     2, Implied,          0), /* 0xEA */
    op(usbc,    2, Immediate,        0), /* 0xEB */
    op(cpx,     4, Absolute,         0), /* 0xEC */
    op(sbc,     4, Absolute,         0), /* 0xED */
    op(inc,     6, Absolute,         0), /* 0xEE */
    op(isc,     6, Absolute,         0), /* 0xEF */
    op(beq,     2, Relative,         1), /* 0xF0 */
    op(sbc,     5, IndirectY,        1), /* 0xF1 */
    op(jam,     0, Implied,          0), /* 0xF2 */
    op(isc,     8, IndirectY,        0), /* 0xF3 */
    op(nop,     4, ZeroPageX,        0), /* 0xF4 */
    op(sbc,     4, ZeroPageX,        0), /* 0xF5 */
    op(inc,     6, ZeroPageX,        0), /* 0xF6 */
    op(isc,     6, ZeroPageX,        0), /* 0xF7 */
    op(sed,     2, Implied,          0), /* 0xF8 */
    op(sbc,     4, AbsoluteIndexedY, 1), /* 0xF9 */
    op(nop,     2, Implied,          0), /* 0xFA */
    op(isc,     7, AbsoluteIndexedY, 0), /* 0xFB */
    op(nop,     4, AbsoluteIndexedX, 1), /* 0xFC */
    op(sbc,     4, AbsoluteIndexedX, 1), /* 0xFD */
    op(inc,     7, AbsoluteIndexedX, 0), /* 0xFE */
    op(isc,     7, AbsoluteIndexedX, 0), /* 0xFF */
];

/// Lowercase mnemonics for trace output.
#[rustfmt::skip]
pub const OPCODE_STRING_TABLE: [&str; 256] = [
    "brk", "ora", "jam", "slo", "nop", "ora", "asl", "slo", "php", "ora", "asl", "anc",
    "nop", "ora", "asl", "slo", "bpl", "ora", "jam", "slo", "nop", "ora", "asl", "slo",
    "clc", "ora", "nop", "slo", "nop", "ora", "asl", "slo", "jsr", "and", "jam", "rla",
    "bit", "and", "rol", "rla", "plp", "and", "rol", "anc", "bit", "and", "rol", "rla",
    "bmi", "and", "jam", "rla", "nop", "and", "rol", "rla", "sec", "and", "nop", "rla",
    "nop", "and", "rol", "rla", "rti", "eor", "jam", "sre", "nop", "eor", "lsr", "sre",
    "pha", "eor", "lsr", "alr", "jmp", "eor", "lsr", "sre", "bvc", "eor", "jam", "sre",
    "nop", "eor", "lsr", "sre", "cli", "eor", "nop", "sre", "nop", "eor", "lsr", "sre",
    "rts", "adc", "jam", "rra", "nop", "adc", "ror", "rra", "pla", "adc", "ror", "arr",
    "jmp", "adc", "ror", "rra", "bvs", "adc", "jam", "rra", "nop", "adc", "ror", "rra",
    "sei", "adc", "nop", "rra", "nop", "adc", "ror", "rra", "nop", "sta", "nop", "sax",
    "sty", "sta", "stx", "sax", "dey", "nop", "txa", "xaa", "sty", "sta", "stx", "sax",
    "bcc", "sta", "jam", "ahx", "sty", "sta", "stx", "sax", "tya", "sta", "txs", "tas",
    "shy", "sta", "shx", "ahx", "ldy", "lda", "ldx", "lax", "ldy", "lda", "ldx", "lax",
    "tay", "lda", "tax", "lax", "ldy", "lda", "ldx", "lax", "bcs", "lda", "jam", "lax",
    "ldy", "lda", "ldx", "lax", "clv", "lda", "tsx", "las", "ldy", "lda", "ldx", "lax",
    "cpy", "cmp", "nop", "dcp", "cpy", "cmp", "dec", "dcp", "iny", "cmp", "dex", "axs",
    "cpy", "cmp", "dec", "dcp", "bne", "cmp", "jam", "dcp", "nop", "cmp", "dec", "dcp",
    "cld", "cmp", "nop", "dcp", "nop", "cmp", "dec", "dcp", "cpx", "sbc", "nop", "isc",
    "cpx", "sbc", "inc", "isc", "inx", "sbc", "nop", "usbc", "cpx", "sbc", "inc", "isc",
    "beq", "sbc", "jam", "isc", "nop", "sbc", "inc", "isc", "sed", "sbc", "nop", "isc",
    "nop", "sbc", "inc", "isc",
];
