// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command-line front end.
//!
//! With a path argument, loads one YAML case document and solves it
//! verbosely. Without arguments, runs the built-in regression suite and
//! reports pass/fail per case.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use trestle_core::num::{approx_eq, DEFAULT_TOLERANCE};
use trestle_model::{
    compact::{self, CompactParseError},
    document,
};
use trestle_solver::{monitor::narration::NarrationMonitor, solver::CrossingSolver};

#[derive(Parser, Debug)]
#[command(
    name = "trestle",
    version,
    about = "Minimum crossing times for torch-and-bridge expeditions"
)]
struct Cli {
    /// Path to a YAML case document; runs the built-in regression suite when
    /// omitted.
    case_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.case_file {
        Some(path) => run_document_case(&path),
        None => run_regression_suite(),
    }
}

/// Loads and solves a single YAML case document, narrating every step.
fn run_document_case(path: &Path) -> ExitCode {
    let expedition = match document::from_path::<f64, _>(path) {
        Ok(expedition) => expedition,
        Err(e) => {
            eprintln!("Parse case error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Case (accumulated additional hikers):\n{}", expedition);
    let mut monitor = NarrationMonitor::new();
    let outcome = CrossingSolver::new().solve_with_monitor(&expedition, &mut monitor);
    println!("{}", outcome);
    ExitCode::SUCCESS
}

/// One built-in regression case: a compact case line and its known total.
struct RegressionCase {
    expected_time: f64,
    case: &'static str,
}

const REGRESSION_CASES: [RegressionCase; 10] = [
    RegressionCase {
        expected_time: 245.0,
        case: "A 100,B 50,C 20,D 10;100;250,E 2.5;150,F 25,G 15",
    },
    RegressionCase {
        expected_time: 1.0,
        case: "A 100;100",
    },
    RegressionCase {
        expected_time: 2.0,
        case: "A 100,B 50;100",
    },
    // C and D together is the fastest.
    RegressionCase {
        expected_time: 17.0,
        case: "A 100,B 50,C 20,D 10;100",
    },
    // A and C, A and D is the fastest.
    RegressionCase {
        expected_time: 21.0,
        case: "A 100,B 25,C 20,D 10;100",
    },
    // Cache hit.
    RegressionCase {
        expected_time: 51.0,
        case: "A 100,B 50,C 20,D 10;100;200",
    },
    RegressionCase {
        expected_time: 55.0,
        case: "A 100,B 50,C 20,D 10;100;200,E 200",
    },
    RegressionCase {
        expected_time: 55.5,
        case: "A 100,B 50,C 20,D 10;100;200,E 80",
    },
    RegressionCase {
        expected_time: 57.0,
        case: "A 100,B 50,C 20,D 10;100;200,E 50",
    },
    RegressionCase {
        expected_time: 63.0,
        case: "A 100;100,B 50,C 20,D 10;200,E 50",
    },
];

/// Parses and solves one compact case line, narrating every step.
fn run_case(case: &str) -> Result<f64, CompactParseError> {
    let expedition = compact::parse::<f64>(case)?;
    let mut monitor = NarrationMonitor::new();
    let outcome = CrossingSolver::new().solve_with_monitor(&expedition, &mut monitor);
    Ok(outcome.total_time())
}

/// Runs every built-in case and prints P/F per case.
fn run_regression_suite() -> ExitCode {
    let mut failures = 0usize;
    for regression in &REGRESSION_CASES {
        println!("Case: {}", regression.case);
        match run_case(regression.case) {
            Ok(time) => {
                println!("{} minute(s)", time);
                if approx_eq(time, regression.expected_time, DEFAULT_TOLERANCE) {
                    eprintln!("P");
                } else {
                    eprintln!("F");
                    eprintln!("Expected {}, was {}", regression.expected_time, time);
                    failures += 1;
                }
            }
            Err(e) => {
                eprintln!("Parse case error: {}", e);
                failures += 1;
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trestle_solver::monitor::no_op::NoOperationMonitor;

    #[test]
    fn test_all_regression_cases_pass() {
        for regression in &REGRESSION_CASES {
            let expedition = compact::parse::<f64>(regression.case).expect("case parses");
            let mut monitor = NoOperationMonitor::new();
            let outcome = CrossingSolver::new().solve_with_monitor(&expedition, &mut monitor);
            assert!(
                approx_eq(
                    outcome.total_time(),
                    regression.expected_time,
                    DEFAULT_TOLERANCE
                ),
                "case '{}': expected {}, was {}",
                regression.case,
                regression.expected_time,
                outcome.total_time()
            );
        }
    }
}
