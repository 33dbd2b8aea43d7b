//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, syscall services, and decoding
//! logic for the MIPS-like 32-bit instruction set.
//!
//! # Formats
//!
//! * R-type: `opcode(6) | rs(5) | rt(5) | rd(5) | shamt(5) | funct(6)`, opcode `0x00`.
//! * I-type: `opcode(6) | rs(5) | rt(5) | immediate(16)`.
//! * J-type: `opcode(6) | address(26)`, opcodes `0x02` and `0x03`.

/// Register index constants and names.
pub mod abi;

/// Instruction decoding and format dispatch.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// R-type function codes.
pub mod funct;

/// Instruction field extraction utilities.
pub mod instruction;

/// Major opcodes.
pub mod opcodes;

/// Syscall service numbers.
pub mod syscall;
