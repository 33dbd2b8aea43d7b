use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use mipsim_core::common::Trap;
use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::core::cpu::StepOutcome;
use mipsim_core::sim::loader;
use mipsim_core::soc::StreamConsole;

/// Console over an in-memory input script and an in-memory output buffer.
pub type TestConsole = StreamConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// Steps allowed by [`TestContext::run`] before the test is declared stuck.
const RUN_GUARD: usize = 100_000;

pub struct TestContext {
    pub cpu: Cpu,
    pub console: TestConsole,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        Self {
            cpu: Cpu::new(config),
            console: StreamConsole::new(Cursor::new(Vec::new()), Vec::new()),
        }
    }

    /// Replaces the console input with `input`.
    pub fn with_input(mut self, input: &str) -> Self {
        self.console = StreamConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        self
    }

    /// Loads `words` at address 0 and resets PC/TP.
    pub fn load_program(mut self, words: &[u32]) -> Self {
        loader::load_into(&mut self.cpu, words).unwrap();
        self
    }

    pub fn set_reg(&mut self, reg: u32, val: i32) {
        self.cpu.regs.write(reg as usize, val);
    }

    pub fn get_reg(&self, reg: u32) -> i32 {
        self.cpu.regs.read(reg as usize)
    }

    pub fn step(&mut self) -> Result<StepOutcome, Trap> {
        self.cpu.step(&mut self.console)
    }

    /// Runs until the program halts or traps.
    pub fn run(&mut self) -> Result<(), Trap> {
        for _ in 0..RUN_GUARD {
            if self.step()? == StepOutcome::Halted {
                return Ok(());
            }
        }
        panic!("program did not halt within {RUN_GUARD} steps");
    }

    /// Everything the program has printed so far.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(self.console.output()).into_owned()
    }
}

/// Clonable in-memory writer, for consoles that get boxed into a `Simulator`.
#[derive(Clone, Debug, Default)]
pub struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
