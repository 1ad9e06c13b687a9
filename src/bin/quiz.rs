//! Terminal front end for the color-recall quiz
//!
//! Shows each generated color as a 24-bit ANSI block, collects hex guesses
//! from stdin and prints the scored report.

use color_recall::{hex_to_rgb, QuizConfig, QuizSession, Rgb, ScoreReport};
use std::io::{self, BufRead, Write};
use std::{env, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut num_questions = None;
    let mut json_output = false;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--questions" | "-n" => {
                i += 1;
                match args.get(i).and_then(|v| v.parse::<usize>().ok()) {
                    Some(n) if n > 0 => num_questions = Some(n),
                    _ => {
                        eprintln!("Error: --questions expects a positive integer");
                        process::exit(1);
                    }
                }
            }
            "--json" => json_output = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = QuizConfig::default();
    if let Some(n) = num_questions {
        config.num_questions = n;
    }

    let mut session = QuizSession::new(config);
    session.setup_questions();

    let total = session.questions().len();
    println!("Memorize each color, then guess it as six hex digits (RRGGBB).");
    println!("An empty guess counts as 000000.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for index in 0..total {
        let rgb = session.questions()[index].rgb;
        println!();
        println!("Color {:>2}/{}: {}", index + 1, total, color_block(rgb, 12));
        prompt("Your guess: #");

        let answer = loop {
            let line = match lines.next() {
                Some(Ok(line)) => normalize_guess(&line),
                // EOF: leave the rest blank
                _ => String::new(),
            };
            if line.is_empty() || is_guess(&line) {
                break line;
            }
            prompt("Enter exactly six hex digits (or leave empty): #");
        };

        if let Err(error) = session.set_answer(index, answer) {
            eprintln!("Failed to record answer: {}", error);
            process::exit(1);
        }
    }

    match session.score() {
        Ok(report) => print_report(&report.rounded(), &session, json_output),
        Err(error) => {
            eprintln!("Scoring failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS]", program_name);
    eprintln!();
    eprintln!("Play a color-perception quiz in the terminal.");
    eprintln!("Requires a terminal with 24-bit color support.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --questions, -n N   Number of colors to guess (default: 10)");
    eprintln!("  --json              Also print the score report as JSON to stdout");
    eprintln!("  --help, -h          Show this help message");
}

fn prompt(text: &str) {
    print!("{}", text);
    io::stdout().flush().ok();
}

fn normalize_guess(line: &str) -> String {
    line.trim().trim_start_matches('#').to_uppercase()
}

fn is_guess(line: &str) -> bool {
    line.len() == 6 && line.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Solid block in the given color, 24-bit ANSI background escape
fn color_block(rgb: Rgb, width: usize) -> String {
    format!(
        "\x1b[48;2;{};{};{}m{:width$}\x1b[0m",
        rgb.r,
        rgb.g,
        rgb.b,
        "",
        width = width
    )
}

fn print_report(report: &ScoreReport, session: &QuizSession, json_output: bool) {
    if json_output {
        // JSON to stdout for programmatic use
        match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing report: {}", e),
        }
    }

    eprintln!();
    eprintln!("Round results (truth vs your guess):");
    for (question, answer) in session.questions().iter().zip(session.answers()) {
        let truth = question.rgb;
        let digits = if answer.is_empty() {
            "000000"
        } else {
            answer.as_str()
        };
        // Guesses were constrained on input; fall back to black all the same
        let guess = hex_to_rgb(&format!("#{}", digits)).unwrap_or(Rgb::BLACK);

        eprintln!(
            "  {} {} vs {} #{}",
            question.hex,
            color_block(truth, 6),
            color_block(guess, 6),
            digits
        );
    }

    eprintln!();
    eprintln!(
        "Average RGB error:  R {:+.2}%  G {:+.2}%  B {:+.2}%",
        report.avg_rgb_error[0], report.avg_rgb_error[1], report.avg_rgb_error[2]
    );
    eprintln!(
        "Average HSL error:  H {:.2}%  S {:+.2}%  L {:+.2}%",
        report.avg_hsl_error[0], report.avg_hsl_error[1], report.avg_hsl_error[2]
    );
    eprintln!("RMSE: {:.4}", report.rmse);
}
