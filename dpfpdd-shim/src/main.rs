#![warn(clippy::all)]

//! One-shot shim around the DigitalPersona `dpfpdd` library.
//!
//! The host process spawns `dpfpdd-shim <command>` with one of `init`,
//! `query`, `capture` or `cleanup` and parses the single JSON line printed
//! to stdout. Stdout carries nothing but that line; diagnostics go to
//! stderr. Errors are reported inside the JSON body, so the exit code is 0
//! for every invocation that carried a command and 1 only when the command
//! argument is missing.

mod commands;
mod response;
mod sdk;
mod ticks;

use std::process;

fn main() {
    let command = match std::env::args().nth(1) {
        Some(command) => command,
        None => {
            println!("{}", serde_json::json!({ "error": "No command specified" }));
            process::exit(1);
        }
    };

    let sdk = dpfpdd_rs::Dpfpdd::new();
    let response = commands::execute(&sdk, &command);

    println!("{}", response);
}
