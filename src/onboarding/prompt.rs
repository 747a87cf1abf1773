//! Line-based terminal prompts
//!
//! The wizard steps talk to the user through a [`Prompter`], which is
//! generic over its input and output so whole sessions can be scripted in
//! tests.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{BodaiError, BodaiResult};

/// Typing this at any wizard prompt goes back one step
pub const BACK_KEYWORD: &str = "back";

/// An answer to a prompt, or a request to go back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    Back,
}

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning its output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line
    pub fn say(&mut self, line: impl Display) -> BodaiResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line
    ///
    /// End of input is an error so a closed stdin cannot spin a prompt loop.
    pub fn ask(&mut self, prompt: &str) -> BodaiResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BodaiError::Io("Input closed".into()));
        }
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question; an empty answer means `default`
    pub fn confirm(&mut self, prompt: &str, default: bool) -> BodaiResult<bool> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(match answer.as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }

    /// Ask for free text; an empty answer keeps `current`
    pub fn text(&mut self, label: &str, current: &str) -> BodaiResult<Answer<String>> {
        let prompt = if current.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, current)
        };

        let answer = self.ask(&prompt)?;
        if answer.eq_ignore_ascii_case(BACK_KEYWORD) {
            return Ok(Answer::Back);
        }
        if answer.is_empty() {
            return Ok(Answer::Value(current.to_string()));
        }
        Ok(Answer::Value(answer))
    }

    /// Pick at most one option from a numbered menu
    ///
    /// An empty answer keeps `current`; an unknown number is asked again.
    pub fn choose<T: Copy + PartialEq + Display>(
        &mut self,
        label: &str,
        options: &[T],
        current: Option<T>,
    ) -> BodaiResult<Answer<Option<T>>> {
        self.say(label)?;
        for (i, option) in options.iter().enumerate() {
            let marker = if Some(*option) == current { "*" } else { " " };
            self.say(format!(" {} {}. {}", marker, i + 1, option))?;
        }

        loop {
            let answer = self.ask("Select a number: ")?;
            if answer.eq_ignore_ascii_case(BACK_KEYWORD) {
                return Ok(Answer::Back);
            }
            if answer.is_empty() {
                return Ok(Answer::Value(current));
            }
            match parse_choice(&answer, options.len()) {
                Some(index) => return Ok(Answer::Value(Some(options[index]))),
                None => self.say(format!(
                    "Please enter a number between 1 and {}",
                    options.len()
                ))?,
            }
        }
    }

    /// Pick any number of options from a numbered menu
    ///
    /// Answers are comma-separated numbers and replace the selection; an
    /// empty answer keeps `current` and `none` clears it.
    pub fn choose_many<T: Copy + Ord + Display>(
        &mut self,
        label: &str,
        options: &[T],
        current: &BTreeSet<T>,
    ) -> BodaiResult<Answer<BTreeSet<T>>> {
        self.say(label)?;
        for (i, option) in options.iter().enumerate() {
            let marker = if current.contains(option) { "*" } else { " " };
            self.say(format!(" {} {}. {}", marker, i + 1, option))?;
        }

        loop {
            let answer = self.ask("Select numbers (comma-separated, 'none' to clear): ")?;
            if answer.eq_ignore_ascii_case(BACK_KEYWORD) {
                return Ok(Answer::Back);
            }
            if answer.is_empty() {
                return Ok(Answer::Value(current.clone()));
            }
            if answer.eq_ignore_ascii_case("none") {
                return Ok(Answer::Value(BTreeSet::new()));
            }

            let picked: Option<BTreeSet<T>> = answer
                .split(',')
                .map(|part| parse_choice(part, options.len()).map(|i| options[i]))
                .collect();
            match picked {
                Some(selection) => return Ok(Answer::Value(selection)),
                None => self.say(format!(
                    "Please enter numbers between 1 and {}",
                    options.len()
                ))?,
            }
        }
    }
}

/// Parse a 1-based menu number into a 0-based index
fn parse_choice(answer: &str, len: usize) -> Option<usize> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
