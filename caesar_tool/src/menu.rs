//! Interactive menu loop
//!
//! Reads choices line by line and runs one operation per choice. Invalid keys
//! are reported and the menu is shown again; end of input ends the session.

use std::io::{self, BufRead, Write};

use shift_cipher::{Breaker, ShiftCipher, PRINTABLE_SIZE};

use crate::report;
use crate::OperationMode;

/// Whether the session goes on after a step
enum Flow {
    Continue,
    Quit,
}

/// Run the menu until the operator exits or input runs out
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    loop {
        show_menu(out)?;
        let Some(choice) = prompt(input, out, "Select an option: ")? else {
            break;
        };

        let flow = match choice.trim() {
            "0" => {
                writeln!(out, "Exiting...")?;
                Flow::Quit
            }
            "1" => transform(input, out, OperationMode::Encrypt)?,
            "2" => transform(input, out, OperationMode::Decrypt)?,
            "3" => break_text(input, out)?,
            "4" => analyze(input, out)?,
            _ => {
                writeln!(out, "Invalid option. Try again.")?;
                Flow::Continue
            }
        };

        if let Flow::Quit = flow {
            break;
        }
    }
    Ok(())
}

fn show_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== CAESAR CIPHER TOOL ===")?;
    writeln!(out, "1) Encrypt text")?;
    writeln!(out, "2) Decrypt text")?;
    writeln!(out, "3) Break cipher")?;
    writeln!(out, "4) Frequency analysis")?;
    writeln!(out, "0) Exit")?;
    writeln!(out, "===========================")
}

/// Ask for one line; `None` at end of input. Only the line ending is stripped.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

fn transform<R: BufRead, W: Write>(input: &mut R, out: &mut W, mode: OperationMode) -> io::Result<Flow> {
    let text_prompt = match mode {
        OperationMode::Encrypt => "Enter plaintext: ",
        OperationMode::Decrypt => "Enter ciphertext: ",
    };
    let Some(text) = prompt(input, out, text_prompt)? else {
        return Ok(Flow::Quit);
    };
    let key_prompt = format!("Enter numeric key (0-{}): ", PRINTABLE_SIZE - 1);
    let Some(key) = prompt(input, out, &key_prompt)? else {
        return Ok(Flow::Quit);
    };

    match mode.apply(&text, &key) {
        Ok(result) => writeln!(out, "\n{} Output:\n{}", mode.label(), result)?,
        Err(e) => {
            log::warn!("rejected key {:?}: {}", key, e);
            writeln!(out, "Error: {}", e)?
        }
    }
    Ok(Flow::Continue)
}

fn break_text<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Flow> {
    let Some(ciphertext) = prompt(input, out, "Enter ciphertext to break: ")? else {
        return Ok(Flow::Quit);
    };

    let result = Breaker::new(ShiftCipher::default()).run(&ciphertext);
    write!(out, "\n{}", report::break_report(&[result]))?;
    Ok(Flow::Continue)
}

fn analyze<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Flow> {
    let Some(text) = prompt(input, out, "Enter text to analyze: ")? else {
        return Ok(Flow::Quit);
    };

    write!(out, "\n{}", report::analysis_report(&text))?;
    Ok(Flow::Continue)
}
