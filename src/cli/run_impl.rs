use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::formatters;
use crate::validator;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    let input = match &args.bits {
        Some(bits) => bits.trim().to_string(),
        None => prompt_for_bits()?,
    };

    // A bad input is ordinary output, not a process failure.
    if !validator::is_binary(&input) {
        println!("{}", validator::INVALID_INPUT_MESSAGE);
        return Ok(());
    }

    let rendering = formatters::columns::format(&input);

    if args.json {
        let s = serde_json::to_string_pretty(&rendering)?;
        println!("{}", s);
        return Ok(());
    }

    println!("{}", rendering.bits);
    println!("{}", rendering.indices);
    Ok(())
}

fn prompt_for_bits() -> Result<String> {
    print!("Enter a binary string: ");
    io::stdout().flush().context("flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read input line")?;
    Ok(line.trim().to_string())
}
