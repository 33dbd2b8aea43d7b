//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction word into a human-readable mnemonic string for
//! per-instruction tracing and fault reports.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2004_0005), "addi $a0, $zero, 5");
//! assert_eq!(disassemble(0x0085_1820), "add $v1, $a0, $a1");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::instruction::InstructionBits;
use crate::isa::{funct, opcodes};

/// Disassembles a 32-bit instruction word.
///
/// Returns a mnemonic like `"lw $t0, 8($sp)"`, or `"unknown <word>"` for encodings the
/// machine does not implement.
pub fn disassemble(inst: u32) -> String {
    let rs = reg_name(inst.rs());
    let rt = reg_name(inst.rt());
    let rd = reg_name(inst.rd());
    let imm = inst.simm();

    match inst.opcode() {
        opcodes::OP_SPECIAL => match inst.funct() {
            funct::SLL => format!("sll ${rd}, ${rt}, {}", inst.shamt()),
            funct::SRA => format!("sra ${rd}, ${rt}, {}", inst.shamt()),
            funct::JR => format!("jr ${rs}"),
            funct::SYSCALL => "syscall".to_string(),
            funct::ADD => format!("add ${rd}, ${rs}, ${rt}"),
            funct::ADDU => format!("addu ${rd}, ${rs}, ${rt}"),
            funct::SUB => format!("sub ${rd}, ${rs}, ${rt}"),
            funct::AND => format!("and ${rd}, ${rs}, ${rt}"),
            funct::OR => format!("or ${rd}, ${rs}, ${rt}"),
            funct::NOR => format!("nor ${rd}, ${rs}, ${rt}"),
            funct::SLT => format!("slt ${rd}, ${rs}, ${rt}"),
            funct::SLTU => format!("sltu ${rd}, ${rs}, ${rt}"),
            _ => format!("unknown {inst:#010x}"),
        },
        opcodes::OP_J => format!("j {:#x}", inst.target()),
        opcodes::OP_JAL => format!("jal {:#x}", inst.target()),
        opcodes::OP_BEQ => format!("beq ${rs}, ${rt}, {:#x}", imm as u32),
        opcodes::OP_BNE => format!("bne ${rs}, ${rt}, {:#x}", imm as u32),
        opcodes::OP_ADDI => format!("addi ${rt}, ${rs}, {imm}"),
        opcodes::OP_SLTI => format!("slti ${rt}, ${rs}, {imm}"),
        opcodes::OP_ANDI => format!("andi ${rt}, ${rs}, {:#x}", inst.imm16()),
        opcodes::OP_ORI => format!("ori ${rt}, ${rs}, {:#x}", inst.imm16()),
        opcodes::OP_LUI => format!("lui ${rt}, {:#x}", inst.imm16()),
        opcodes::OP_LW => format!("lw ${rt}, {imm}(${rs})"),
        opcodes::OP_LHU => format!("lhu ${rt}, {imm}(${rs})"),
        opcodes::OP_SW => format!("sw ${rt}, {imm}(${rs})"),
        _ => format!("unknown {inst:#010x}"),
    }
}
