//! CLI tool to compile, check, and format drawing files.

use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: dibu <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  compile  Compile file(s) to SVG and print to stdout");
        eprintln!("  check    Check if file(s) are valid");
        eprintln!("  fmt      Print file(s) in canonical form");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  dibu compile drawing.dibu > drawing.svg");
        eprintln!("  dibu check drawing.dibu");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    if !matches!(command, "compile" | "check" | "fmt") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    let files = &args[2..];
    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        let document = match dibu::parse_str(&content) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "compile" => println!("{}", dibu::render(&document)),
            "fmt" => print!("{}", dibu::format(&document)),
            _ => {
                let shapes = document.shapes().count();
                let canvas = document
                    .canvas_size()
                    .map_or_else(|| "unsized".to_string(), |(w, h)| format!("{w}x{h}"));
                eprintln!("{path}: valid ({shapes} shape(s), canvas {canvas})");
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
