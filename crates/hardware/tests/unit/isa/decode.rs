//! Decoder Tests.

use mipsim_core::isa::decode::{Format, decode};
use mipsim_core::isa::instruction::InstructionBits;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::builder::instruction as asm;

#[test]
fn extracts_r_type_fields() {
    let (format, d) = decode(0x0085_1820);
    assert_eq!(format, Format::R);
    assert_eq!(d.opcode, 0);
    assert_eq!(d.rs, 4);
    assert_eq!(d.rt, 5);
    assert_eq!(d.rd, 3);
    assert_eq!(d.shamt, 0);
    assert_eq!(d.funct, 0x20);
}

#[test]
fn sign_extends_immediate() {
    let (format, d) = decode(asm::addi(asm::T0, asm::ZERO, -2));
    assert_eq!(format, Format::I);
    assert_eq!(d.imm, -2);
    assert_eq!(d.rt, 8);

    let (_, d) = decode(0x2004_8000);
    assert_eq!(d.imm, -32768);
}

#[test]
fn extracts_jump_target() {
    let (format, d) = decode(asm::jal(0x0123_4567 & 0x03FF_FFFF));
    assert_eq!(format, Format::J);
    assert_eq!(d.target, 0x0123_4567);
}

#[rstest]
#[case(0x00, Format::R)]
#[case(0x02, Format::J)]
#[case(0x03, Format::J)]
#[case(0x04, Format::I)]
#[case(0x23, Format::I)]
#[case(0x3F, Format::I)]
fn format_depends_only_on_opcode(#[case] opcode: u32, #[case] expected: Format) {
    assert_eq!(Format::of(opcode), expected);
}

proptest! {
    #[test]
    fn fields_reassemble_to_word(word in any::<u32>()) {
        let (_, d) = decode(word);
        let rebuilt = (d.opcode << 26)
            | ((d.rs as u32) << 21)
            | ((d.rt as u32) << 16)
            | ((d.rd as u32) << 11)
            | (d.shamt << 6)
            | d.funct;
        prop_assert_eq!(rebuilt, word);
        prop_assert_eq!(d.imm as u32 & 0xFFFF, word.imm16());
        prop_assert_eq!(d.target, word & 0x03FF_FFFF);
    }
}
