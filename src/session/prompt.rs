/**
 * ============================================================================
 * PROMPT MODULE
 * ============================================================================
 *
 * PURPOSE: Blocking console prompts with defaults and typed parsing
 *
 * FUNCTIONALITY:
 * - String prompt with optional default (empty input takes the default)
 * - Integer/float prompts that re-prompt on unparseable input
 * - Yes/no confirmation
 *
 * The prompter owns a reader and writer instead of touching stdin/stdout
 * directly, so interactive flows can be driven from tests.
 *
 * ============================================================================
 */

use std::io::{BufRead, Write};

// Console prompter over an injected reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    // Write one line of non-prompt output (tables, hints, errors)
    pub fn writeln(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.output, "{}", text).map_err(|e| format!("Failed to write output: {}", e))
    }

    /**
     * Ask for a line of input. The default (shown in brackets) is returned
     * when the user just presses enter. A closed input stream is an error:
     * there is no way to continue an interactive session without a console.
     */
    pub fn ask(&mut self, label: &str, default: Option<&str>) -> Result<String, String> {
        match default {
            Some(value) => write!(self.output, "{} [{}]: ", label, value),
            None => write!(self.output, "{}: ", label),
        }
        .map_err(|e| format!("Failed to write prompt: {}", e))?;
        self.output
            .flush()
            .map_err(|e| format!("Failed to flush prompt: {}", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if read == 0 {
            return Err("Input stream closed".to_string());
        }

        let answer = line.trim();
        if answer.is_empty() {
            if let Some(value) = default {
                return Ok(value.to_string());
            }
        }
        Ok(answer.to_string())
    }

    // Integer prompt; re-prompts until the input parses
    pub fn ask_i64(&mut self, label: &str, default: i64) -> Result<i64, String> {
        loop {
            let answer = self.ask(label, Some(&default.to_string()))?;
            match answer.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.writeln("Please enter a valid integer.")?,
            }
        }
    }

    // Nonnegative integer prompt; re-prompts until the input parses
    pub fn ask_u32(&mut self, label: &str, default: u32) -> Result<u32, String> {
        loop {
            let answer = self.ask(label, Some(&default.to_string()))?;
            match answer.parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => self.writeln("Please enter a valid integer.")?,
            }
        }
    }

    // Float prompt; re-prompts until the input parses
    pub fn ask_f64(&mut self, label: &str, default: f64) -> Result<f64, String> {
        loop {
            let answer = self.ask(label, Some(&default.to_string()))?;
            match answer.parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.writeln("Please enter a valid number.")?,
            }
        }
    }

    // Yes/no confirmation; re-prompts until the answer is recognizable
    pub fn confirm(&mut self, label: &str) -> Result<bool, String> {
        loop {
            let answer = self.ask(&format!("{} [y/n]", label), None)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.writeln("Please answer y or n.")?,
            }
        }
    }
}
