//! Simple interactive CLI mode
//!
//! Line-oriented loop: prompt for a start and an end word, print the ladder,
//! repeat until end of input or `:q`. Any other line is looked up as a word,
//! so dictionary entries such as `quit` stay queryable.

use super::find::find_words;
use crate::core::WordStore;
use crate::output::formatters::{format_ladder, format_no_path};
use std::io::{self, BufRead, Write};

/// Stops the session; it contains a non-letter so it can never be a word
const QUIT_COMMAND: &str = ":q";

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(store: &WordStore) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let queries = run_session(store, stdin.lock(), stdout.lock())?;
    tracing::debug!(queries, "interactive session finished");
    Ok(())
}

/// Drive one interactive session over arbitrary reader/writer
///
/// Returns the number of queries answered.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    store: &WordStore,
    mut input: R,
    mut output: W,
) -> io::Result<usize> {
    writeln!(output, "{} words loaded. Type ':q' to exit.", store.len())?;
    let mut queries = 0;

    loop {
        let Some(start) = prompt(&mut input, &mut output, "Start")? else {
            break;
        };
        let Some(end) = prompt(&mut input, &mut output, "End")? else {
            break;
        };

        let result = match find_words(store, &start, &end) {
            Ok(result) => result,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        if result.ladder.is_empty() {
            writeln!(output, "{}", format_no_path(&result.start, &result.end))?;
        } else {
            writeln!(output, "{}", format_ladder(&result.ladder))?;
        }
        queries += 1;
    }

    writeln!(output)?;
    Ok(queries)
}

/// Print a prompt and read one trimmed line
///
/// `None` signals end of input or the `:q` command.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim();
    if line == QUIT_COMMAND {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}
