//! Immediate-Type Execution Tests.

use mipsim_core::common::Trap;
use mipsim_core::common::error::Anomaly;
use mipsim_core::config::{Config, ImmediateExtension};
use mipsim_core::core::cpu::StepOutcome;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

fn run_one(ctx: &mut TestContext) {
    assert_eq!(ctx.step().unwrap(), StepOutcome::Executed);
}

#[rstest]
#[case(addi(T0, T1, 5), 10, 15)]
#[case(addi(T0, T1, -1), 0, -1)]
#[case(addi(T0, T1, 1), i32::MAX, i32::MIN)]
#[case(slti(T0, T1, 0), -3, 1)]
#[case(slti(T0, T1, -10), -3, 0)]
#[case(ori(T0, T1, 0x00F0), 0x0F, 0xFF)]
#[case(andi(T0, T1, 0x00F0), 0xFF, 0xF0)]
fn immediate_operations(#[case] inst: u32, #[case] rs: i32, #[case] expected: i32) {
    let mut ctx = TestContext::new().load_program(&[inst]);
    ctx.set_reg(T1, rs);
    run_one(&mut ctx);
    assert_eq!(ctx.get_reg(T0), expected);
}

#[test]
fn logical_immediates_sign_extend_by_default() {
    let mut ctx = TestContext::new().load_program(&[andi(T0, T1, 0x8000), ori(T2, ZERO, 0xFFFF)]);
    ctx.set_reg(T1, -1);
    run_one(&mut ctx);
    run_one(&mut ctx);
    assert_eq!(ctx.get_reg(T0), 0xFFFF_8000_u32 as i32);
    assert_eq!(ctx.get_reg(T2), -1);
}

#[test]
fn logical_immediates_zero_extend_when_configured() {
    let mut config = Config::default();
    config.isa.logical_immediate = ImmediateExtension::Zero;
    let mut ctx = TestContext::with_config(&config)
        .load_program(&[andi(T0, T1, 0x8000), ori(T2, ZERO, 0xFFFF)]);
    ctx.set_reg(T1, -1);
    run_one(&mut ctx);
    run_one(&mut ctx);
    assert_eq!(ctx.get_reg(T0), 0x8000);
    assert_eq!(ctx.get_reg(T2), 0xFFFF);
}

#[test]
fn lui_loads_upper_half() {
    let mut ctx = TestContext::new().load_program(&[lui(T0, 0x1234), lui(T1, 0xFFFF)]);
    ctx.set_reg(T0, 0x5678);
    run_one(&mut ctx);
    run_one(&mut ctx);
    assert_eq!(ctx.get_reg(T0), 0x1234_0000);
    assert_eq!(ctx.get_reg(T1), 0xFFFF_0000_u32 as i32);
}

#[test]
fn addi_traps_when_enabled() {
    let mut config = Config::default();
    config.isa.trap_on_overflow = true;
    let mut ctx = TestContext::with_config(&config).load_program(&[addi(T0, T1, 1)]);
    ctx.set_reg(T1, i32::MAX);
    assert!(matches!(ctx.step(), Err(Trap::IntegerOverflow)));
    assert_eq!(ctx.get_reg(T0), 0);
}

#[test]
fn beq_taken_uses_absolute_target() {
    let mut ctx = TestContext::new().load_program(&[0, beq(T0, T1, 0x10), 0, 0, 0]);
    ctx.cpu.pc = 4;
    run_one(&mut ctx);
    assert_eq!(ctx.cpu.pc, 0x10);
    assert_eq!(ctx.cpu.stats.control_transfers, 1);
}

#[test]
fn beq_not_taken_falls_through() {
    let mut ctx = TestContext::new().load_program(&[beq(T0, T1, 0x10), 0, 0, 0, 0]);
    ctx.set_reg(T1, 1);
    run_one(&mut ctx);
    assert_eq!(ctx.cpu.pc, 4);
    assert_eq!(ctx.cpu.stats.control_transfers, 0);
}

#[test]
fn bne_compares_registers() {
    let mut ctx = TestContext::new().load_program(&[bne(T0, T1, 0x0C), 0, 0, 0]);
    ctx.set_reg(T0, -1);
    run_one(&mut ctx);
    assert_eq!(ctx.cpu.pc, 0x0C);
}

#[test]
fn unknown_opcode_is_reported_and_skipped() {
    let word = 0xFC00_0000;
    let mut ctx = TestContext::new().load_program(&[word, addi(T0, ZERO, 1)]);
    assert_eq!(
        ctx.step().unwrap(),
        StepOutcome::Anomaly(Anomaly::UnknownOpcode {
            opcode: 0x3F,
            raw: word
        })
    );
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(T0), 1);
    assert_eq!(ctx.cpu.stats.anomalies, 1);
}
