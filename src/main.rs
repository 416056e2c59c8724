use std::io::{self, BufRead};

use clap::Parser;
use simplelog::LevelFilter;
use truthtab::parser::{parse_with, ParserConfig};
use truthtab::table::{TableConfig, TruthTable};

#[derive(Parser)]
#[command(name = "truthtab")]
#[command(about = "Print the truth table of a propositional logic expression")]
struct Args {
    /// Expression to tabulate (read from stdin if omitted)
    expr: Option<String>,

    /// Maximum number of variables
    #[arg(long, default_value_t = TableConfig::default().max_variables)]
    max_vars: usize,

    /// Maximum nesting depth of the expression
    #[arg(long, default_value_t = ParserConfig::default().max_depth)]
    max_depth: usize,

    /// Fold constants in disjunctions before tabulating
    #[arg(long)]
    simplify: bool,

    /// Print the number of satisfying rows and the classification
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let input = match args.expr {
        Some(expr) => expr,
        None => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    let parser_config = ParserConfig {
        max_depth: args.max_depth,
    };
    let mut formula = parse_with(input.trim(), &parser_config)?;

    if args.simplify {
        for law in formula.simplify() {
            println!("applied {} law", law);
        }
    }

    let config = TableConfig {
        max_variables: args.max_vars,
        ..TableConfig::default()
    };
    let table = TruthTable::build(&mut formula, &config)?;
    print!("{}", table);

    if args.summary {
        println!();
        println!("satisfying rows: {} of {}", table.true_count(), table.row_count());
        println!("classification: {}", table.classify());
    }

    Ok(())
}
