use crate::io::error::{Result, malformed, no_solution};
use crate::io::input::{non_empty_lines, parse_value};
use std::collections::HashSet;

/// One boot code instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Add to the accumulator
    Acc(i64),
    /// Jump relative to this instruction
    Jmp(i64),
    /// Do nothing
    Nop(i64),
}

impl Instruction {
    /// Swap `jmp` and `nop`; `acc` has no counterpart
    pub const fn repaired(self) -> Option<Self> {
        match self {
            Self::Acc(_) => None,
            Self::Jmp(argument) => Some(Self::Nop(argument)),
            Self::Nop(argument) => Some(Self::Jmp(argument)),
        }
    }
}

/// How a run of the program ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Halt {
    /// About to run an instruction a second time
    Looped {
        /// Accumulator before the repeat
        accumulator: i64,
        /// Instruction indices in execution order
        trace: Vec<usize>,
    },
    /// Ran past the last instruction
    Terminated {
        /// Accumulator at the end
        accumulator: i64,
    },
    /// Jumped somewhere other than just past the end
    OutOfBounds,
}

/// Parse `op ±n` lines
///
/// # Errors
///
/// Returns an error on unknown operations or arguments
pub fn parse(input: &str) -> Result<Vec<Instruction>> {
    non_empty_lines(input)
        .map(|line| {
            let (operation, argument) = line
                .split_once(' ')
                .ok_or_else(|| malformed("instruction", &format!("'{line}'")))?;
            let argument = parse_value(argument.trim_start_matches('+'), "instruction argument")?;
            match operation {
                "acc" => Ok(Instruction::Acc(argument)),
                "jmp" => Ok(Instruction::Jmp(argument)),
                "nop" => Ok(Instruction::Nop(argument)),
                other => Err(malformed("instruction", &format!("unknown operation '{other}'"))),
            }
        })
        .collect()
}

/// Run until an instruction repeats or control leaves the program
pub fn run(program: &[Instruction]) -> Halt {
    let mut accumulator = 0;
    let mut counter = 0_usize;
    let mut seen = HashSet::new();
    let mut trace = Vec::new();

    loop {
        if counter == program.len() {
            return Halt::Terminated { accumulator };
        }
        let Some(&instruction) = program.get(counter) else {
            return Halt::OutOfBounds;
        };
        if !seen.insert(counter) {
            return Halt::Looped { accumulator, trace };
        }
        trace.push(counter);

        let step = match instruction {
            Instruction::Acc(argument) => {
                accumulator += argument;
                1
            }
            Instruction::Jmp(argument) => argument,
            Instruction::Nop(_) => 1,
        };
        let Some(next) = counter.checked_add_signed(step as isize) else {
            return Halt::OutOfBounds;
        };
        counter = next;
    }
}

/// Accumulator just before the first repeated instruction
///
/// # Errors
///
/// Returns an error if the program is malformed or never loops
pub fn part1(input: &str) -> Result<i64> {
    match run(&parse(input)?) {
        Halt::Looped { accumulator, .. } => Ok(accumulator),
        _ => Err(no_solution("boot code", &"program does not loop")),
    }
}

/// Accumulator after repairing the one instruction that makes the program end
///
/// Only instructions executed by the looping run are candidates.
///
/// # Errors
///
/// Returns an error if the program is malformed or no repair terminates
pub fn part2(input: &str) -> Result<i64> {
    let program = parse(input)?;
    let Halt::Looped { trace, .. } = run(&program) else {
        return Err(no_solution("boot code", &"program does not loop"));
    };

    trace
        .into_iter()
        .find_map(|index| {
            let repaired = program.get(index).copied().and_then(Instruction::repaired)?;
            let mut patched = program.clone();
            if let Some(slot) = patched.get_mut(index) {
                *slot = repaired;
            }
            match run(&patched) {
                Halt::Terminated { accumulator } => Some(accumulator),
                _ => None,
            }
        })
        .ok_or_else(|| no_solution("boot code", &"no single repair terminates"))
}
