//! Spacer CLI
//!
//! Checks that separators and keywords are followed by whitespace.

use std::io::IsTerminal;

use spacer_diagnostic::TerminalEmitter;
use spacerc::commands::{check_file, explain_error, list_codes, CheckOptions};

fn main() {
    spacerc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "check" => {
            let options = match CheckOptions::parse(&args[2..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!();
                    print_check_usage();
                    std::process::exit(2);
                }
            };

            let is_tty = std::io::stdout().is_terminal();
            let mut emitter = TerminalEmitter::stdout(options.color, is_tty);
            match check_file(&options, &mut emitter) {
                Ok(outcome) => {
                    if let Some(summary) = outcome.fixed {
                        eprintln!(
                            "fixed {} insertion(s) on {} line(s) in {}",
                            summary.insertions,
                            summary.lines,
                            options.source.display()
                        );
                    }
                    std::process::exit(outcome.exit_code());
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "explain" => {
            let Some(code) = args.get(2) else {
                print!("{}", list_codes());
                return;
            };
            match explain_error(code) {
                Ok(doc) => print!("{doc}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("spacer {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("Spacer - whitespace-after checker");
    println!();
    println!("Usage: spacer <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file> --tokens=<tree.json>   Report tokens not followed by whitespace");
    println!("  explain [code]                      Explain a diagnostic code, or list them all");
    println!("  help                                Show this message");
    println!("  version                             Show version");
    println!();
    println!("Set RUST_LOG=spacer_lint=debug for debug output.");
}

fn print_check_usage() {
    eprintln!("Usage: spacer check <file> --tokens=<tree.json> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --checks=<KINDS>      Comma-separated token kinds (default: all)");
    eprintln!("                        COMMA, SEMI, TYPECAST, LITERAL_IF, LITERAL_ELSE,");
    eprintln!("                        LITERAL_WHILE, LITERAL_DO, LITERAL_FOR, DO_WHILE,");
    eprintln!("                        ELLIPSIS, LITERAL_SWITCH, LAMBDA");
    eprintln!("  --severity=<level>    error, warning (default) or info");
    eprintln!("  --color=<mode>        auto (default), always or never");
    eprintln!("  --fix                 Insert the missing spaces in place");
}
