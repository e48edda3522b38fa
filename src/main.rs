use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use env_logger::Env;
use exprtree::{
    ast::{
        builder::build_tree,
        render::{render_dot, render_tree},
    },
    bindings::bindings::parse_bindings,
    errors::errors::Error,
    evaluator::evaluator::{evaluate, Bindings},
    format_error,
    lexer::lexer::tokenize,
    normalizer::normalizer::{clean_input, normalize_signs},
    parser::{parser::to_postfix, postfix::format_postfix},
};
use log::{debug, info};

#[derive(Parser)]
#[command(
    name = "exprtree",
    version = env!("CARGO_PKG_VERSION"),
    about = "Arithmetic expression evaluator with expression tree output",
    after_help = r#"
Examples:
  exprtree                                   # Start the interactive shell
  exprtree "3 + 4 * 2"                       # Evaluate once
  exprtree "x=7 : √(4^2 + 3^2) * (x + 5)"     # Bind variables before the colon
  exprtree --dot "a=3, b=4 : √(a^2 + b^2)"    # Also print a Graphviz diagram
"#
)]
struct Cli {
    /// Expression to evaluate once. Starts the shell when omitted
    expression: Option<String>,

    /// Enable debug logging
    #[arg(short, long, env = "EXPRTREE_DEBUG")]
    debug: bool,

    /// Log level
    #[arg(long, value_enum, env = "EXPRTREE_LOG", default_value = "warn")]
    log_level: LogLevel,

    /// Print the tree as a Graphviz digraph as well
    #[arg(long)]
    dot: bool,

    /// Only print the result
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        cli.log_level.into()
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(log_level)
        .format(format_log_record)
        .init();

    info!("exprtree v{} starting", env!("CARGO_PKG_VERSION"));

    match &cli.expression {
        Some(expression) => {
            if process_line(expression, &cli) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        None => {
            run_shell(&cli);
            ExitCode::SUCCESS
        }
    }
}

fn format_log_record(buf: &mut env_logger::fmt::Formatter, record: &log::Record) -> io::Result<()> {
    writeln!(buf, "[{:>5} {}] {}", record.level(), record.target(), record.args())
}

fn run_shell(cli: &Cli) {
    println!("{}", "=".repeat(80));
    println!("Arithmetic Expression Evaluator");
    println!("{}", "=".repeat(80));
    println!("\nSupported operators: + - * / ^ √ ( )");
    println!("Variables: x=10, y=5 : expression");
    println!("Commands: 'quit' to exit, 'help' for examples\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let input = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) => {
                println!("Could not read input: {}", error);
                continue;
            }
            None => break,
        };
        let input = input.trim();

        match input {
            "" => {
                println!("Please enter a valid expression.\n");
                continue;
            }
            "quit" | "exit" | "q" => {
                println!("\nGoodbye!");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
                continue;
            }
            _ => {}
        }

        process_line(input, cli);
        println!("{}\n", "-".repeat(80));
    }
}

fn print_help() {
    println!("\nExample expressions:");
    println!("  3 + 4 * 2");
    println!("  √(4^2 + 3^2)");
    println!("  (3 + 4) * (5 - 2)");
    println!("  x=7 : x^2 + 2*x + 1");
    println!("  a=3, b=4 : √(a^2 + b^2)");
    println!("  x=7 : √(4^2 + 3^2) * (x + 5) - 10 / 2\n");
}

/// Runs one line through the pipeline, printing each stage. Returns false on error.
fn process_line(line: &str, cli: &Cli) -> bool {
    let (expression, bindings) = match parse_bindings(line) {
        Ok(parsed) => parsed,
        Err(error) => {
            println!("\n{}", format_error(&error, line));
            return false;
        }
    };

    let cleaned = clean_input(&expression);
    let normalized = normalize_signs(&cleaned);

    if !cli.quiet {
        println!("Cleaned:     {}", cleaned);
        println!("Normalized:  {}", normalized);
    }

    match run_stages(&normalized, &bindings, cli) {
        Ok(()) => true,
        Err(error) => {
            println!("\n{}", format_error(&error, &normalized));
            false
        }
    }
}

fn run_stages(normalized: &str, bindings: &Bindings, cli: &Cli) -> Result<(), Error> {
    let start = Instant::now();

    let tokens = tokenize(normalized)?;
    debug!("Tokenized in {:?}", start.elapsed());

    if !cli.quiet {
        let listed = tokens.iter().map(|token| token.to_string()).collect::<Vec<String>>();
        println!("Tokens:      [{}]", listed.join(", "));
    }

    let convert_start = Instant::now();
    let postfix = to_postfix(tokens)?;
    debug!("Converted to postfix in {:?}", convert_start.elapsed());

    if !cli.quiet {
        println!("Postfix:     {}", format_postfix(&postfix));
    }

    let build_start = Instant::now();
    let tree = build_tree(postfix)?;
    debug!("Built tree in {:?}", build_start.elapsed());

    if !cli.quiet {
        println!("\nExpression Tree:");
        print!("{}", render_tree(&tree));
    }
    if cli.dot {
        println!("\n{}", render_dot(&tree));
    }

    let evaluate_start = Instant::now();
    let result = evaluate(&tree, bindings)?;
    debug!("Evaluated in {:?}", evaluate_start.elapsed());
    debug!("Total time: {:?}", start.elapsed());

    if cli.quiet {
        println!("{}", result);
    } else {
        println!("\n{:<13}{}", "Result:", result);

        if !bindings.is_empty() {
            let mut listed = bindings
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<String>>();
            listed.sort();
            println!("Variables:   {{{}}}", listed.join(", "));
        }
    }

    Ok(())
}
