//! Terminal prompts backing the capture selector.

use std::io::{self, BufRead, Write};

use winstash_core::{Selector, SelectorError};

/// Asks on stdin/stdout.
pub struct PromptSelector;

impl Selector for PromptSelector {
    fn select(&self, items: &[String]) -> Result<Vec<bool>, SelectorError> {
        println!("Windows to capture:");
        for (i, item) in items.iter().enumerate() {
            println!("  {:>2}) {}", i + 1, item);
        }

        let stdin = io::stdin();
        loop {
            print!("Numbers to leave out (blank keeps all): ");
            io::stdout().flush()?;

            let mut input = String::new();
            if stdin.lock().read_line(&mut input)? == 0 {
                return Ok(vec![true; items.len()]);
            }

            match parse_exclusions(&input, items.len()) {
                Ok(mask) => return Ok(mask),
                Err(message) => eprintln!("{}", message),
            }
        }
    }

    fn confirm(&self, message: &str) -> Result<bool, SelectorError> {
        print!("{} [Y/n] ", message);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(is_confirmation_accepted(&input))
    }
}

/// Empty input accepts.
pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized.is_empty() || normalized == "y" || normalized == "yes"
}

/// Turn a list of 1-based item numbers into a keep-mask.
///
/// Numbers may be separated by spaces or commas.
pub fn parse_exclusions(input: &str, count: usize) -> Result<Vec<bool>, String> {
    let mut mask = vec![true; count];

    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let number: usize = token
            .parse()
            .map_err(|_| format!("'{}' is not a number", token))?;
        if number == 0 || number > count {
            return Err(format!("{} is out of range (1-{})", number, count));
        }
        mask[number - 1] = false;
    }

    Ok(mask)
}
