//! Yes/no confirmation.

use std::io::{self, BufRead, Write};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

/// Ask `question` and read one line. Only `y`/`yes` (any case) confirm; EOF declines.
pub fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
