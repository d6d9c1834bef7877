use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use tracing::debug;

use cata::{Interpreter, Status};

/// Reads lines until Ctrl-C, Ctrl-D or `(EXIT)`. Each line may hold any
/// number of forms; their values are echoed and errors do not end the
/// session.
pub fn start<R: BufRead, W: Write>(interpreter: &mut Interpreter<R, W>) -> io::Result<()> {
    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::new(DefaultPromptSegment::Basic("cata".into()), DefaultPromptSegment::Empty);

    loop {
        let line = match line_editor.read_line(&prompt)? {
            Signal::Success(line) => line,
            _ => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match interpreter.execute(&line) {
            Ok((status, values)) => {
                for value in values {
                    println!("{:?}", value);
                }
                if status == Status::Exited {
                    debug!("EXIT called from the repl");
                    break;
                }
            }
            Err(err) => println!("{}", format!("error: {}", err).red()),
        }
    }
    Ok(())
}
