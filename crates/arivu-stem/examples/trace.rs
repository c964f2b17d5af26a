use std::env;

use anyhow::{Result, bail};
use arivu_stem::stem_traced;

fn main() -> Result<()> {
    let words: Vec<String> = env::args().skip(1).collect();
    if words.is_empty() {
        bail!("usage: cargo run -p arivu-stem --example trace -- <word>...");
    }

    for word in words {
        let trace = stem_traced(&word);
        println!("\n{} -> {}", word, trace.output());
        for step in &trace.rewrites {
            let rule = match step.suffix {
                Some("") => "(default)".to_string(),
                Some(suffix) => format!("-{suffix}"),
                None => "-".to_string(),
            };
            let marker = if step.changed() { "*" } else { " " };
            println!(
                "  {marker} {:<10} {:<12} {:<16} {}",
                step.stage.label(),
                rule,
                step.input,
                step.output
            );
        }
    }

    Ok(())
}
