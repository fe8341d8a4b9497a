/*
 * ==========================================================================
 * WREN-SYNTAX - Lexer and parser for the Wren scripting language
 * ==========================================================================
 * 
 * License:
 * This file is part of the wren-syntax project.
 * 
 * wren-syntax is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 * 
 * You may choose either license to govern your use of this software.
 * 
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * 
 * ==========================================================================
 */


//! The `wren-syntax` command line: argument handling, logging setup and
//! the three subcommands.

pub mod args;

pub use args::{CliArgs, Command, OutputFormat};

use crate::diagnostics::DiagnosticPrinter;
use crate::{parse_with, to_pretty_sexp, tokenize, ParseOptions, SyntaxError};
use miette::{IntoDiagnostic, NamedSource, Report, WrapErr};
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tracing filter for a `-v` count.
pub fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "wren_syntax=warn",
        1 => "wren_syntax=debug",
        _ => "wren_syntax=trace",
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(verbose))),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs a subcommand. Returns `Ok(false)` when any input had syntax
/// errors, and `Err` only for problems outside the sources themselves.
pub fn run(args: CliArgs) -> miette::Result<bool> {
    match args.command {
        Command::Parse { files, format, no_shebang } => {
            let options = ParseOptions::new().allow_shebang(!no_shebang);
            let mut clean = true;

            for path in &files {
                let source = read_source(path)?;
                let parse = parse_with(&source, &options);
                info!(file = %path.display(), errors = parse.errors.len(), "parsed file");

                match format {
                    OutputFormat::Sexp => println!("{}", to_pretty_sexp(&parse.tree)),
                    OutputFormat::Json => {
                        let json = serde_json::to_string_pretty(&parse)
                            .into_diagnostic()
                            .wrap_err("failed to serialise the tree")?;
                        println!("{json}");
                    }
                }

                let printer = DiagnosticPrinter::new(path.display().to_string(), source.as_str());
                for error in &parse.errors {
                    printer.print(error);
                }
                clean &= parse.is_ok();
            }

            Ok(clean)
        }

        Command::Check { files, plain } => {
            let mut clean = true;

            for path in &files {
                let source = read_source(path)?;
                let parse = parse_with(&source, &ParseOptions::default());

                if parse.is_ok() {
                    println!("{}: ok", path.display());
                    continue;
                }

                clean = false;
                let count = parse.errors.len();
                let name = path.display().to_string();
                if plain {
                    let printer = DiagnosticPrinter::new(name.as_str(), source.as_str());
                    for error in &parse.errors {
                        printer.print(error);
                    }
                } else {
                    for error in parse.errors {
                        eprintln!("{:?}", graphical(error, &name, &source));
                    }
                }
                println!("{}: {} error(s)", path.display(), count);
            }

            Ok(clean)
        }

        Command::Tokens { file } => {
            let source = read_source(&file)?;
            let (tokens, errors) = tokenize(&source, true);

            for token in &tokens {
                println!(
                    "{:?} {}..{} {:?}",
                    token.kind, token.span.start, token.span.end, token.lexeme
                );
            }

            let printer = DiagnosticPrinter::new(file.display().to_string(), source.as_str());
            for error in &errors {
                printer.print(&SyntaxError::from(error.clone()));
            }

            Ok(errors.is_empty())
        }
    }
}

fn graphical(error: SyntaxError, name: &str, source: &str) -> Report {
    Report::new(error).with_source_code(NamedSource::new(name, source.to_string()))
}

fn read_source(path: &Path) -> miette::Result<String> {
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}
