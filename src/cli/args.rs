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


//! Command-line arguments and subcommands for `wren-syntax`.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "wren-syntax",
    version,
    about = "Parse Wren source files and report syntax errors."
)]
pub struct CliArgs {
    /// More logging: -v for debug, -vv for trace. RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the syntax tree of each file.
    Parse {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format for the tree.
        #[arg(long, value_enum, default_value_t = OutputFormat::Sexp)]
        format: OutputFormat,

        /// Read a leading `#!` line as a runtime attribute, not a shebang.
        #[arg(long)]
        no_shebang: bool,
    },
    /// Report syntax errors without printing trees.
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Plain text diagnostics instead of graphical reports.
        #[arg(long)]
        plain: bool,
    },
    /// Dump the token stream of a file.
    Tokens {
        #[arg(required = true)]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented s-expression.
    Sexp,
    /// The tree and errors as JSON.
    Json,
}
