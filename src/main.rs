use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use partcount::PartitionCounter;

fn main() -> anyhow::Result<()> {
    let n = match env::args().nth(1) {
        Some(arg) => parse_natural(&arg)?,
        None => prompt_for_natural()?,
    };

    let mut counter = PartitionCounter::new();
    let total = counter.count(n);
    let at_least_two = counter.count_at_least_two_parts(n)?;

    println!("Number of partitions of {n}:");
    println!("  {total}");
    println!("Number of ways to write {n} as a sum of at least two positive integers:");
    println!("  {at_least_two}");
    Ok(())
}

/// Prompt on stdout and read one line back.
fn prompt_for_natural() -> anyhow::Result<u32> {
    print!("Enter a natural number: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("could not read from stdin")?;
    parse_natural(line.trim())
}

fn parse_natural(text: &str) -> anyhow::Result<u32> {
    text.parse()
        .with_context(|| format!("not a natural number: {text:?}"))
}
