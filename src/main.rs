use breeding_assistant::interface::{
    load_knowledge, lookup_species, read_match_request, render_chain, render_chain_failure,
    render_match_report, render_species, run_match_request,
};
use breeding_assistant::{BreedingConfig, BreedingResult, CooldownRegistry, EggMoveSolver};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

const USAGE: &str = "\
Usage: breeding-assistant [--config <FILE>] [--data <DIR>] <COMMAND>

Commands:
  pairs <REQUEST.json>         Match breeding pairs from a JSON request
  chain <SPECIES> <MOVE>...    Find a breeding chain teaching egg moves
  species <NAME>               Show breeding data for a species

Quote multi-word names, or separate several moves with commas.
Paired creatures only stay on cooldown across requests in the MCP server;
each `pairs` run starts with an empty cooldown list.
";

// Flags that take a value; consumed by BreedingConfig::load_from.
const VALUE_FLAGS: [&str; 2] = ["--config", "--data"];

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(Some(output)) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            print!("{}", USAGE);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `None` when the command line does not name a usable command.
fn run(args: &[String]) -> BreedingResult<Option<String>> {
    let config = BreedingConfig::load_from(args, |key| std::env::var(key).ok())?;
    let positional = positional_args(args);
    let Some((command, rest)) = positional.split_first() else {
        return Ok(None);
    };

    let output = match (command.as_str(), rest) {
        ("pairs", [path]) => {
            let kb = load_knowledge(&config)?;
            let request = read_match_request(Path::new(path))?;
            let mut cooldowns = CooldownRegistry::new(config.cooldown());
            let report = run_match_request(request, &kb, &config, &mut cooldowns, Instant::now())?;
            render_match_report(&report)
        }
        ("chain", [species, moves @ ..]) if !moves.is_empty() => {
            let kb = load_knowledge(&config)?;
            let moves: Vec<&str> = moves
                .iter()
                .flat_map(|arg| arg.split(','))
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect();
            let solver =
                EggMoveSolver::new(&kb).with_max_generations(config.max_chain_generations);
            match solver.try_solve(species, &moves) {
                Ok(chain) => render_chain(&chain),
                Err(failure) => render_chain_failure(&failure) + "\n",
            }
        }
        ("species", name) if !name.is_empty() => {
            let kb = load_knowledge(&config)?;
            render_species(lookup_species(&kb, &name.join(" "))?)
        }
        _ => return Ok(None),
    };
    Ok(Some(output))
}

fn positional_args(args: &[String]) -> Vec<String> {
    let mut positional = Vec::new();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
        } else {
            positional.push(arg.clone());
        }
    }
    positional
}
