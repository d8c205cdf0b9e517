// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Florin CLI entrypoint.
//!
//! Reads markdown documents, extracts chart shortcode directives, and
//! prints one JSON report per input (default) or the rewritten document
//! (`--rewrite`). With no file operands the document is read from stdin.

use std::error::Error;
use std::io::Read;

use rayon::prelude::*;
use serde::Serialize;

use florin::model::ChartDirective;
use florin::shortcode;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--pretty] [<file>...]\n  {program} --rewrite [<file>]\n\nDefault mode prints one JSON report per input, one per line:\n  {{\"path\": \"...\", \"directives\": [...]}}\n--pretty pretty-prints each report instead.\n--rewrite prints the document with every chart directive replaced by its\nplaceholder marker; it accepts at most one file.\n\nIf no file is given, the document is read from stdin."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    rewrite: bool,
    pretty: bool,
    files: Vec<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rewrite" => {
                if options.rewrite {
                    return Err(());
                }
                options.rewrite = true;
            }
            "--pretty" => {
                if options.pretty {
                    return Err(());
                }
                options.pretty = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => options.files.push(arg),
        }
    }

    if options.rewrite && options.pretty {
        return Err(());
    }
    if options.rewrite && options.files.len() > 1 {
        return Err(());
    }

    Ok(options)
}

#[derive(Debug, Serialize)]
struct FileReport {
    path: String,
    directives: Vec<ChartDirective>,
}

fn read_document(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|err| format!("{path}: {err}"))
}

fn read_stdin() -> Result<String, Box<dyn Error>> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "florin".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.rewrite {
            let text = match options.files.first() {
                Some(path) => read_document(path)?,
                None => read_stdin()?,
            };
            print!("{}", shortcode::rewrite(&text));
            return Ok(());
        }

        let reports = if options.files.is_empty() {
            let text = read_stdin()?;
            vec![FileReport { path: "-".to_owned(), directives: shortcode::extract(&text) }]
        } else {
            options
                .files
                .par_iter()
                .map(|path| -> Result<FileReport, String> {
                    let text = read_document(path)?;
                    Ok(FileReport { path: path.clone(), directives: shortcode::extract(&text) })
                })
                .collect::<Result<Vec<_>, String>>()?
        };

        for report in &reports {
            let line = if options.pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{line}");
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("florin: {err}");
        std::process::exit(1);
    }
}
