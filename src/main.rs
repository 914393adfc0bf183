use std::io::BufRead;

use clap::Parser;
use evalyard::calculate;

/// evalyard evaluates arithmetic expressions with standard operator
/// precedence, parentheses, and unary sign.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// An expression to evaluate. When omitted, expressions are read line
    /// by line from standard input.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match calculate(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }
        match calculate(&line) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
