//! Line-based prompts with a `cancel` escape hatch.
//!
//! Every `ask_*` method returns `Ok(None)` when the user types `cancel` (any
//! case) or input ends, and keeps re-asking until it gets a usable value.

use std::io::{self, BufRead, Write};

use stockkeep_inventory::ProductId;

pub const CANCEL_WORD: &str = "cancel";

const BANNER_WIDTH: usize = 26;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next trimmed line, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Writes `text` without a newline and flushes.
    pub fn show(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn cancel_banner(&mut self) -> io::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "Type '{CANCEL_WORD}' to abort 🚫")?;
        writeln!(self.output, "{rule}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.show(prompt)?;
        match self.read_line()? {
            None => Ok(None),
            Some(line) if line.eq_ignore_ascii_case(CANCEL_WORD) => {
                self.say("🚫 Operation canceled. Returning to main menu.")?;
                Ok(None)
            }
            Some(line) => Ok(Some(line)),
        }
    }

    /// Re-asks until `parse` accepts the line.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        complaint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            self.say(complaint)?;
        }
    }

    pub fn ask_name(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.ask_until(prompt, "❌ Product name cannot be empty.", |line| {
            (!line.is_empty()).then(|| line.to_string())
        })
    }

    /// A whole number ≥ 0.
    pub fn ask_count(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.ask_until(prompt, "❌ Invalid input. Please try again.", parse_count)
    }

    /// A finite decimal ≥ 0.
    pub fn ask_amount(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.ask_until(prompt, "❌ Invalid input. Please try again.", parse_amount)
    }

    pub fn ask_product_id(&mut self, prompt: &str) -> io::Result<Option<ProductId>> {
        self.ask_until(prompt, "❌ Invalid input. Please try again.", |line| {
            line.parse().ok()
        })
    }
}

pub fn parse_count(line: &str) -> Option<i64> {
    line.parse::<i64>().ok().filter(|n| *n >= 0)
}

pub fn parse_amount(line: &str) -> Option<f64> {
    let value = line.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(if value == 0.0 { 0.0 } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn count_reasks_until_valid() {
        let mut p = prompter("abc\n-4\n  12 \n");
        assert_eq!(p.ask_count("Qty: ").unwrap(), Some(12));

        let out = written(p);
        assert_eq!(out.matches("Qty: ").count(), 3);
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn cancel_is_case_insensitive() {
        let mut p = prompter("CaNcEl\n");
        assert_eq!(p.ask_name("Name: ").unwrap(), None);
        assert!(written(p).contains("Operation canceled"));
    }

    #[test]
    fn end_of_input_cancels() {
        let mut p = prompter("");
        assert_eq!(p.ask_amount("Price: ").unwrap(), None);
    }

    #[test]
    fn name_rejects_blank_lines() {
        let mut p = prompter("   \nWidget Pro\n");
        assert_eq!(p.ask_name("Name: ").unwrap().as_deref(), Some("Widget Pro"));
        assert!(written(p).contains("Product name cannot be empty."));
    }

    #[test]
    fn amount_parsing_rules() {
        assert_eq!(parse_amount("2.50"), Some(2.5));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert!(parse_amount("-0").unwrap().is_sign_positive());
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("ten"), None);
    }

    #[test]
    fn product_id_rejects_zero() {
        let mut p = prompter("0\n3\n");
        assert_eq!(p.ask_product_id("ID: ").unwrap().map(|id| id.to_string()), Some("3".to_string()));
    }

    #[test]
    fn banner_is_framed() {
        let mut p = prompter("");
        p.cancel_banner().unwrap();
        let out = written(p);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(26));
        assert_eq!(lines[2], lines[0]);
    }
}
