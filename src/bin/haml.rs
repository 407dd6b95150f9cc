//! Command-line interface for haml
//! This binary compiles haml templates into HTML/PHP output, and can dump
//! the classified line stream for debugging templates.
//!
//! Usage:
//!   haml compile `<path>` [--output `<path>`]   - Compile a template to HTML/PHP
//!   haml classify `<path>` [--format `<format>`] - Dump the classified line stream

use clap::{Arg, Command};
use std::path::PathBuf;

use haml::haml::formats::{serialize_scanned_lines, FORMATS};
use haml::haml::lexing::scan;

fn main() {
    let matches = Command::new("haml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler for the haml indentation markup shorthand")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compile")
                .about("Compile a template to HTML/PHP")
                .arg(
                    Arg::new("path")
                        .help("Path to the haml template")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the compiled document here instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("classify")
                .about("Dump the classified line stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the haml template")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help(format!("Output format ({})", FORMATS.join(", ")))
                        .default_value("json"),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("compile", compile_matches)) => {
            let path = compile_matches.get_one::<String>("path").unwrap();
            let output = compile_matches.get_one::<String>("output");
            handle_compile_command(path, output);
        }
        Some(("classify", classify_matches)) => {
            let path = classify_matches.get_one::<String>("path").unwrap();
            let format = classify_matches.get_one::<String>("format").unwrap();
            handle_classify_command(path, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the compile command
fn handle_compile_command(path: &str, output: Option<&String>) {
    let source = read_source(path);

    let compiled = haml::compile(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match output {
        Some(output_path) => {
            let output_path = PathBuf::from(output_path);
            std::fs::write(&output_path, compiled).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {}", output_path.display(), e);
                std::process::exit(1);
            });
        }
        None => println!("{}", compiled),
    }
}

/// Handle the classify command
fn handle_classify_command(path: &str, format: &str) {
    let source = read_source(path);
    let scanned = scan(&source);

    match serialize_scanned_lines(&scanned, format) {
        Ok(serialized) => println!("{}", serialized),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}
