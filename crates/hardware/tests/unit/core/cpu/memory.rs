//! Load/Store Tests.
//!
//! Effective addresses are computed without wraparound and every access is
//! bounds-checked before any state changes.

use mipsim_core::common::{AccessType, Trap};
use mipsim_core::config::Config;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn store_then_load_word() {
    let program = [sw(T0, -4, SP), lw(T1, -4, SP)];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.set_reg(T0, 0x1234_5678);
    ctx.run().unwrap();

    assert_eq!(ctx.get_reg(T1), 0x1234_5678);
    assert_eq!(ctx.cpu.stats.inst_load, 1);
    assert_eq!(ctx.cpu.stats.inst_store, 1);
}

#[test]
fn words_are_big_endian() {
    let mut ctx = TestContext::new().load_program(&[sw(T0, 0x100, ZERO)]);
    ctx.set_reg(T0, 0x0A0B_0C0D);
    ctx.run().unwrap();

    for (offset, expected) in [0x0A, 0x0B, 0x0C, 0x0D].into_iter().enumerate() {
        let byte = ctx
            .cpu
            .memory
            .read_u8(0x100 + offset as i64, AccessType::Read)
            .unwrap();
        assert_eq!(byte, expected);
    }
}

#[test]
fn lhu_zero_extends_halfword() {
    let program = [sw(T0, 0x100, ZERO), lhu(T1, 0x100, ZERO), lhu(T2, 0x102, ZERO)];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.set_reg(T0, 0x8001_7FFE_u32 as i32);
    ctx.run().unwrap();

    assert_eq!(ctx.get_reg(T1), 0x8001);
    assert_eq!(ctx.get_reg(T2), 0x7FFE);
}

#[test]
fn word_at_last_in_bounds_address() {
    let program = [sw(T0, 8188, ZERO), lw(T1, 8188, ZERO)];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.set_reg(T0, -7);
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(T1), -7);
}

#[test]
fn load_past_end_faults_without_writing() {
    let mut ctx = TestContext::new().load_program(&[lw(T1, 0, T0)]);
    ctx.set_reg(T0, 8190);
    ctx.set_reg(T1, 99);

    let err = ctx.step().unwrap_err();

    assert!(matches!(
        err,
        Trap::MemoryFault {
            access: AccessType::Read,
            addr: 8190,
            size: 4,
            capacity: 8192,
        }
    ));
    assert_eq!(ctx.get_reg(T1), 99);
}

#[test]
fn negative_address_faults() {
    let mut ctx = TestContext::new().load_program(&[lw(T1, -4, ZERO)]);
    assert!(matches!(
        ctx.step(),
        Err(Trap::MemoryFault { addr: -4, .. })
    ));
}

#[test]
fn effective_address_does_not_wrap() {
    let mut ctx = TestContext::new().load_program(&[lw(T1, 4, T0)]);
    ctx.set_reg(T0, -4);
    let _ = ctx.step().unwrap();
    assert_eq!(ctx.get_reg(T1), lw(T1, 4, T0) as i32);

    let mut ctx = TestContext::new().load_program(&[lw(T1, 8, T0)]);
    ctx.set_reg(T0, i32::MAX);
    assert!(matches!(
        ctx.step(),
        Err(Trap::MemoryFault { addr, .. }) if addr == i64::from(i32::MAX) + 8
    ));
}

#[test]
fn store_past_end_leaves_memory_untouched() {
    let mut ctx = TestContext::new().load_program(&[sw(T0, 0, T1)]);
    ctx.set_reg(T0, -1);
    ctx.set_reg(T1, 8190);
    let before = ctx.cpu.memory.clone();

    assert!(matches!(
        ctx.step(),
        Err(Trap::MemoryFault {
            access: AccessType::Write,
            ..
        })
    ));
    assert_eq!(ctx.cpu.memory, before);
    assert_eq!(ctx.cpu.stats.inst_store, 0);
}

#[test]
fn fetch_past_memory_faults() {
    let mut config = Config::default();
    config.memory.ram_size = 16;
    let mut ctx = TestContext::with_config(&config).load_program(&[j(0x40)]);
    ctx.cpu.tp = 0x100;
    let _ = ctx.step().unwrap();

    assert!(matches!(
        ctx.step(),
        Err(Trap::MemoryFault {
            access: AccessType::Fetch,
            addr: 0x40,
            ..
        })
    ));
    assert_eq!(ctx.cpu.pc, 0x40);
}

proptest! {
    #[test]
    fn stored_word_reads_back(word in any::<i32>(), slot in 0_i16..1024) {
        let offset = slot * 4;
        let program = [sw(T0, offset, A0), lw(T1, offset, A0)];
        let mut ctx = TestContext::new().load_program(&program);
        ctx.set_reg(A0, 4096);
        ctx.set_reg(T0, word);
        ctx.run().unwrap();
        prop_assert_eq!(ctx.get_reg(T1), word);
    }
}
