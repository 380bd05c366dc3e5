use std::io::{BufRead, Write};

/// Menu block shown before every choice prompt.
pub const MENU: &str = "--------------------------------
Account Management System
1. View Balance
2. Credit Account
3. Debit Account
4. Exit
--------------------------------";

pub const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";
pub const CREDIT_PROMPT: &str = "Enter credit amount: ";
pub const DEBIT_PROMPT: &str = "Enter debit amount: ";

pub fn write_menu<W: Write>(output: &mut W) -> std::io::Result<()> {
    writeln!(output, "{MENU}")
}

/// Writes `prompt` without a trailing newline, flushes, and blocks on one
/// input line. Returns `None` once the input is exhausted.
pub fn prompt_line<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
