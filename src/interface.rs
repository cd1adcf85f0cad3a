//! Request handling and text rendering shared by the CLI and the MCP server.
//!
//! The core matcher and solver stay pure. Everything with side effects on
//! caller state (cooldowns, knowledge loading, reading request files) lives
//! here.

use crate::chain::{BreedingChain, ChainFailure};
use crate::config::BreedingConfig;
use crate::cooldown::CooldownRegistry;
use crate::creature::{CompatibilityTier, CreatureRecord, IdOverrideMap, MatchTier};
use crate::errors::{KnowledgeResult, RequestError, RequestResult};
use crate::knowledge::SpeciesKnowledgeBase;
use crate::matching::{MatchMode, MatchPool, PairMatcher};
use schema::SpeciesEntry;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// A pairing request as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub records: Vec<CreatureRecord>,
    #[serde(default)]
    pub mode: MatchMode,
    /// Capped by the configured maximum.
    #[serde(default)]
    pub max_pairs: Option<usize>,
    #[serde(default)]
    pub selective: bool,
    #[serde(default)]
    pub overrides: IdOverrideMap,
}

/// An owned copy of one committed pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSummary {
    pub female: CreatureRecord,
    pub male: CreatureRecord,
    pub tier: MatchTier,
    pub compatibility: CompatibilityTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub mode: String,
    pub pairs: Vec<PairSummary>,
    /// Records left out because they were still cooling down.
    pub skipped_cooling: usize,
    /// Ready-to-send command, absent when nothing was paired.
    pub command: Option<String>,
}

/// Load species knowledge from the configured directory, or the bundled set.
pub fn load_knowledge(config: &BreedingConfig) -> KnowledgeResult<SpeciesKnowledgeBase> {
    match &config.data_dir {
        Some(dir) => SpeciesKnowledgeBase::load_dir(dir),
        None => SpeciesKnowledgeBase::bundled(),
    }
}

pub fn parse_match_request(json: &str) -> RequestResult<MatchRequest> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_match_request(path: &Path) -> RequestResult<MatchRequest> {
    let content = fs::read_to_string(path).map_err(|source| RequestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_match_request(&content)
}

pub fn lookup_species<'kb>(kb: &'kb SpeciesKnowledgeBase, name: &str) -> RequestResult<&'kb SpeciesEntry> {
    kb.get(name)
        .ok_or_else(|| RequestError::UnknownSpecies(name.trim().to_string()))
}

/// Fill a record's missing dex number and egg groups from species knowledge.
///
/// A record with no egg groups (and no Ditto flag) can never pair, so its
/// species must be known.
fn complete_record(mut record: CreatureRecord, kb: &SpeciesKnowledgeBase) -> RequestResult<CreatureRecord> {
    let needs_groups = record.egg_groups.is_empty() && !record.flags.ditto;
    if !needs_groups && record.dex_number != 0 {
        return Ok(record);
    }
    match kb.get(&record.species) {
        Some(entry) => {
            if needs_groups {
                record.egg_groups = entry.egg_groups.clone();
            }
            if record.dex_number == 0 {
                record.dex_number = entry.dex_number;
            }
            Ok(record)
        }
        None if needs_groups => Err(RequestError::UnknownSpecies(record.species.trim().to_string())),
        None => Ok(record),
    }
}

/// Run one pairing request: complete records from species knowledge, drop
/// cooling records, match, then start the cooldown for every paired id.
pub fn run_match_request(
    request: MatchRequest,
    kb: &SpeciesKnowledgeBase,
    config: &BreedingConfig,
    cooldowns: &mut CooldownRegistry,
    now: Instant,
) -> RequestResult<MatchReport> {
    let max_pairs = request
        .max_pairs
        .map_or(config.max_pairs, |asked| asked.min(config.max_pairs));

    let records = request
        .records
        .into_iter()
        .map(|record| complete_record(record, kb))
        .collect::<RequestResult<Vec<_>>>()?;

    let total = records.len();
    let available = cooldowns.retain_available(records, now);
    let skipped_cooling = total - available.len();
    let pool = MatchPool::from_records(available);

    let pairs = PairMatcher::new(max_pairs, &request.overrides)
        .selective(request.selective)
        .thresholds(config.id_thresholds())
        .run(&pool, &request.mode);

    cooldowns.record(pairs.iter().flat_map(|pair| pair.ids()), now);

    let command = (!pairs.is_empty()).then(|| {
        let ids: Vec<String> = pairs
            .iter()
            .flat_map(|pair| pair.ids())
            .map(|id| id.to_string())
            .collect();
        format!("{} {}", config.command_prefix, ids.join(" "))
    });

    tracing::info!(
        mode = %request.mode,
        pool = pool.len(),
        skipped_cooling,
        pairs = pairs.len(),
        "handled match request"
    );

    Ok(MatchReport {
        mode: request.mode.to_string(),
        pairs: pairs
            .iter()
            .map(|pair| PairSummary {
                female: pair.female.clone(),
                male: pair.male.clone(),
                tier: pair.tier,
                compatibility: pair.compatibility,
            })
            .collect(),
        skipped_cooling,
        command,
    })
}

pub fn render_match_report(report: &MatchReport) -> String {
    let mut output = format!("--- Breeding Pairs ({}) ---\n", report.mode);
    if report.pairs.is_empty() {
        output.push_str("No compatible pairs found.\n");
    }
    for (i, pair) in report.pairs.iter().enumerate() {
        let _ = writeln!(
            output,
            " {}. {} x {}\n    {} match, {} compatibility",
            i + 1,
            pair.female,
            pair.male,
            pair.tier,
            pair.compatibility
        );
    }
    if let Some(command) = &report.command {
        let _ = writeln!(output, "\nCommand: {}", command);
    }
    if report.skipped_cooling > 0 {
        let _ = writeln!(output, "({} on cooldown, skipped)", report.skipped_cooling);
    }
    output
}

pub fn render_chain(chain: &BreedingChain) -> String {
    let mut output = format!(
        "--- Breeding Chain for {} ---\n{} step(s), total cost {}\n",
        chain.target,
        chain.len(),
        chain.total_cost()
    );
    for (i, step) in chain.steps.iter().enumerate() {
        let _ = write!(
            output,
            "Step {}: {} x {} -> {} [{}]",
            i + 1,
            step.donor,
            step.receiver,
            step.offspring,
            step.moves.join(", ")
        );
        if step.cost > 0 {
            let _ = write!(output, " (cost {})", step.cost);
        }
        output.push('\n');
    }
    output
}

pub fn render_chain_failure(failure: &ChainFailure) -> String {
    match failure {
        ChainFailure::ChainUnreachable { generations, .. } => format!(
            "No breeding chain found: {}.\nIt may be impossible, or need more than {} generations.",
            failure, generations
        ),
        _ => format!("No breeding chain found: {}.", failure),
    }
}

pub fn render_species(entry: &SpeciesEntry) -> String {
    const LABEL_WIDTH: usize = 12;
    let mut output = format!("{} (#{:03})\n--------------------\n", entry.name, entry.dex_number);

    let groups: Vec<String> = entry.egg_groups.iter().map(|g| g.to_string()).collect();
    let _ = writeln!(output, "{:<LABEL_WIDTH$} : {}", "Egg Groups", groups.join(" / "));
    let _ = writeln!(output, "{:<LABEL_WIDTH$} : {}", "Gender", entry.gender_lock);
    let cost = entry
        .spawn_rarity
        .map_or_else(|| "unlisted".to_string(), |rarity| format!("1/{}", rarity));
    let _ = writeln!(output, "{:<LABEL_WIDTH$} : {}", "Spawn Rate", cost);
    output.push_str("--------------------\n");

    for (label, moves) in [("Natural Moves", &entry.natural_moves), ("Egg Moves", &entry.egg_moves)] {
        let names: Vec<&str> = moves.iter().map(String::as_str).collect();
        let listed = if names.is_empty() { "-".to_string() } else { names.join(", ") };
        let _ = writeln!(output, "{} ({}): {}", label, names.len(), listed);
    }
    output
}
