//! Numeric prompts for interactive gates.
//!
//! One gate asks the player to guess a number. The engine only sees the
//! `Prompt` trait; how the number is obtained is up to the caller:
//!
//! - `LinePrompt`: reads lines from any `BufRead`, re-asking until a valid
//!   integer in range arrives (stdin in the binary, a `Cursor` in tests)
//! - `ScriptedPrompt`: fixed answers for tests
//! - `GameRng`: picks uniformly, for unattended games

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::warn;

use crate::core::GameRng;

/// Source of a bounded integer answer.
pub trait Prompt {
    /// Return an integer in `min..=max`. Must not fail; invalid input is
    /// the implementation's problem to recover from.
    fn prompt_integer(&mut self, min: i64, max: i64) -> i64;
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn prompt_integer(&mut self, min: i64, max: i64) -> i64 {
        (**self).prompt_integer(min, max)
    }
}

impl Prompt for GameRng {
    fn prompt_integer(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..max + 1)
    }
}

/// Line-oriented prompt with a validation loop.
///
/// ```
/// use std::io::Cursor;
/// use rust_track::io::{LinePrompt, Prompt};
///
/// let mut prompt = LinePrompt::new(Cursor::new("banana\n9\n4\n"), Vec::new());
/// assert_eq!(prompt.prompt_integer(1, 6), 4);
/// ```
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, min: i64, max: i64) {
        // Display failures are not fatal; the read below still decides.
        let _ = write!(self.output, "Pick a number between {} and {}: ", min, max);
        let _ = self.output.flush();
    }

    fn complain(&mut self) {
        let _ = writeln!(self.output, "Please enter a valid number.");
    }
}

impl LinePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn prompt_integer(&mut self, min: i64, max: i64) -> i64 {
        let mut line = String::new();
        loop {
            self.ask(min, max);
            line.clear();

            match self.input.read_line(&mut line) {
                Ok(0) => {
                    // Input is gone; nothing can ever satisfy the loop.
                    warn!("prompt input closed, defaulting to {}", min);
                    return min;
                }
                Ok(_) => {}
                Err(err) => {
                    warn!("prompt read failed ({}), defaulting to {}", err, min);
                    return min;
                }
            }

            match line.trim().parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return value,
                Ok(value) => warn!("guess {} outside {}..={}", value, min, max),
                Err(_) => warn!("guess {:?} is not a number", line.trim()),
            }
            self.complain();
        }
    }
}

/// Answers prompts from a fixed list, clamped into range.
///
/// When the list runs out the lower bound is returned.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<i64>,
    asked: usize,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = i64>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: 0,
        }
    }

    /// Number of times the prompt was consulted.
    #[must_use]
    pub fn times_asked(&self) -> usize {
        self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn prompt_integer(&mut self, min: i64, max: i64) -> i64 {
        self.asked += 1;
        self.answers
            .pop_front()
            .map_or(min, |answer| answer.clamp(min, max))
    }
}
