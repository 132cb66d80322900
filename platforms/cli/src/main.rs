use clap::Parser;
use log::{debug, LevelFilter};
use palpda::report::{format_configuration, format_tape, format_verdict, to_json};
use palpda::{validate, InputLoader, PushdownAutomaton};
use std::error::Error;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

/// Decides whether strings are palindromes with a pushdown automaton.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  palpda-cli -i racecar -i hello
  palpda-cli --trace -i abba
  cat words.txt | palpda-cli --json")]
struct Cli {
    /// A string to decide. May be given more than once
    #[clap(short, long)]
    input: Vec<String>,

    /// A file with one string per line ('#' starts a comment)
    #[clap(short, long)]
    file: Option<PathBuf>,

    /// Print each configuration of the accepting path
    #[clap(short, long)]
    trace: bool,

    /// Print each decision as JSON
    #[clap(short, long)]
    json: bool,

    /// Log the search at debug level
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let inputs = match collect_inputs(&cli) {
        Ok(inputs) if inputs.is_empty() => {
            eprintln!("Error: no input given. Use --input, --file or pipe strings via stdin.");
            return ExitCode::FAILURE;
        }
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut all_valid = true;
    for input in &inputs {
        if let Err(e) = run(&cli, input) {
            eprintln!("Error: {}", e);
            all_valid = false;
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Installs the logger. `RUST_LOG` applies unless `--verbose` is given.
fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Gathers inputs from `--input`, then `--file`, then stdin when it is piped and nothing
/// else was given.
fn collect_inputs(cli: &Cli) -> Result<Vec<String>, Box<dyn Error>> {
    let mut inputs = cli.input.clone();

    if let Some(path) = &cli.file {
        inputs.extend(InputLoader::load_inputs(path)?);
    }

    if inputs.is_empty() && atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        inputs.extend(InputLoader::load_inputs_from_string(&buffer));
    }

    debug!("collected {} inputs", inputs.len());
    Ok(inputs)
}

/// Validates and decides one input, printing the result.
fn run(cli: &Cli, input: &str) -> Result<(), Box<dyn Error>> {
    let input = validate(input)?;
    let machine = PushdownAutomaton::new(input);
    let decision = machine.decide();

    if cli.json {
        println!("{}", to_json(input, &decision)?);
    } else {
        println!("{}", format_verdict(input, decision.accepted));
    }

    if cli.trace && !cli.json {
        for (step, config) in decision.trace.iter().enumerate() {
            println!(
                "{:>4}  {}  {}",
                step,
                format_configuration(config),
                format_tape(machine.input(), config.position)
            );
        }
    }

    Ok(())
}
