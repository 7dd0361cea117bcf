use std::io::{self, BufRead, Write};

use inkpad_canvas_lib::command::{execute_json, CommandResponse};
use inkpad_canvas_lib::harness::TestHarness;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkpad_canvas=info".into()),
        )
        .init();

    let mut harness = TestHarness::new();

    if let Some(path) = parse_script_arg() {
        match std::fs::read_to_string(&path) {
            Ok(script) => {
                tracing::info!("Executing script {path}");
                run_lines(&mut harness, script.lines());
            }
            Err(e) => {
                tracing::error!("Failed to read script file {path}: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    tracing::info!("Reading JSON commands from stdin, one per line");
    let stdin = io::stdin();
    let lines = stdin.lock().lines().map_while(Result::ok);
    run_lines(&mut harness, lines);
}

/// Executes one JSON command per line, echoing one JSON response per
/// line on stdout. Blank lines are skipped.
fn run_lines<I>(harness: &mut TestHarness, lines: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        let response = match execute_json(harness, line) {
            Ok(response) => response,
            Err(e) => CommandResponse::err(e),
        };
        writeln!(out, "{}", serde_json::to_string(&response).unwrap_or_default()).ok();
    }
}

fn parse_script_arg() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--script" && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
        i += 1;
    }
    None
}
