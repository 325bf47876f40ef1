//! Runs the analysis pipeline on a single message from the command line.
//!
//! Usage:
//!   analyze-message [--rewrite <mode>] [message...]
//!
//! With no message arguments the text is read from stdin.

use anyhow::{bail, Context, Result};
use std::io::Read;

use tone_analyzer::{analyze_message, rewrite_reply};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1).peekable();

    let mut mode = None;
    if args.peek().map(String::as_str) == Some("--rewrite") {
        args.next();
        mode = Some(args.next().context("--rewrite needs a mode")?);
    }

    let mut message = args.collect::<Vec<_>>().join(" ");
    if message.is_empty() {
        std::io::stdin()
            .read_to_string(&mut message)
            .context("failed to read message from stdin")?;
    }
    if message.trim().is_empty() {
        bail!("Invalid message");
    }

    let result = analyze_message(&message);

    match mode {
        Some(mode) => {
            let reply = rewrite_reply(
                Some(mode.as_str()),
                Some(message.as_str()),
                Some(result.professional_reply.clone()),
            )
            .unwrap_or_default();
            println!("{}", reply);
        }
        None => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}
