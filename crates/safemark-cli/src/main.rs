use anyhow::{Context, Result};
use safemark_engine::{io, render};
use std::{env, path::PathBuf, process};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let source = match args.as_slice() {
        [] => io::read_stdin().context("failed to read stdin")?,
        [path] => {
            let path = PathBuf::from(path);
            io::read_source(&path)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        _ => {
            eprintln!("usage: safemark [FILE]");
            process::exit(2);
        }
    };

    let markup = render(Some(&source));
    println!("{markup}");
    Ok(())
}
