//! Command execution.

use colored::Colorize;
use pawsdb_core::{process_request, Outcome};
use pawsdb_protocol::{Method, RequestEnvelope};
use std::io::Read;

/// Exit codes: 0 valid, 1 validation violations, 2 decode or I/O error.
const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn read_document(file: &str) -> Result<String, std::io::Error> {
    if file == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(file)
    }
}

pub fn check(file: &str, json_output: bool) -> i32 {
    let document = match read_document(file) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            return EXIT_ERROR;
        }
    };

    match process_request(&document) {
        Outcome::Valid(decoded) => {
            if !json_output {
                println!("{} {} (id: {})", "Valid".green(), decoded.method, decoded.id);
            }
            EXIT_OK
        }
        Outcome::Invalid {
            violations,
            response,
            ..
        } => {
            if json_output {
                println!("{}", response.to_json().unwrap_or_default());
            } else {
                eprintln!(
                    "{}: {} violation(s)",
                    "Invalid".red(),
                    violations.len()
                );
                for violation in &violations {
                    eprintln!("  {}: {}", violation.field.yellow(), violation.message);
                }
            }
            EXIT_INVALID
        }
        Outcome::Rejected { error, response } => {
            if json_output {
                println!("{}", response.to_json().unwrap_or_default());
            } else {
                eprintln!("{}: {}", "Decode error".red(), error);
            }
            EXIT_ERROR
        }
    }
}

pub fn inspect(file: &str) -> i32 {
    let document = match read_document(file) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            return EXIT_ERROR;
        }
    };

    let envelope = match RequestEnvelope::from_json(&document) {
        Ok(envelope) => envelope,
        Err(e) => {
            eprintln!("{}: {}", "Decode error".red(), e);
            return EXIT_ERROR;
        }
    };

    let params = match envelope.decode_params() {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}: {}", "Decode error".red(), e);
            return EXIT_ERROR;
        }
    };

    let method = match envelope.method() {
        Ok(method) => method,
        Err(e) => {
            eprintln!("{}: {}", "Decode error".red(), e);
            return EXIT_ERROR;
        }
    };

    if !params.unknown.is_empty() {
        let names: Vec<_> = params.unknown.keys().map(String::as_str).collect();
        eprintln!("{}: {}", "Unknown fields".yellow(), names.join(", "));
    }

    let request = pawsdb_core::PawsRequest::project(method, params);
    println!("{} {}", "Method:".cyan(), method);
    match serde_json::to_string_pretty(&request) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            return EXIT_ERROR;
        }
    }
    EXIT_OK
}

pub fn wrap(method: &str, id: Option<String>, file: &str) -> i32 {
    let method = match Method::from_name(method) {
        Ok(method) => method,
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            return EXIT_ERROR;
        }
    };

    let document = match read_document(file) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            return EXIT_ERROR;
        }
    };

    let params: serde_json::Value = match serde_json::from_str(&document) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}: {}", "Decode error".red(), e);
            return EXIT_ERROR;
        }
    };

    let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let envelope = RequestEnvelope::new(id, method).with_params(params);
    match serde_json::to_string_pretty(&envelope) {
        Ok(json) => {
            println!("{json}");
            EXIT_OK
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            EXIT_ERROR
        }
    }
}
