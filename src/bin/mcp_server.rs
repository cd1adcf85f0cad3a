//! Breeding Assistant MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp) that
//! exposes pair matching, chain solving and species lookup as tools.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use breeding_assistant::interface::*;
use breeding_assistant::{BreedingConfig, CooldownRegistry, EggMoveSolver, SpeciesKnowledgeBase};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};

#[derive(Debug, Clone)]
pub struct BreedingAssistantService {
    tool_router: ToolRouter<BreedingAssistantService>,
    config: Arc<BreedingConfig>,
    knowledge: Arc<SpeciesKnowledgeBase>,
    /// Shared across calls so paired creatures stay excluded.
    cooldowns: Arc<Mutex<CooldownRegistry>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MatchPairsRequest {
    #[schemars(
        description = "Match request: {\"records\": [...], \"mode\": {\"strategy\": \"general\"}, \"max_pairs\": 2, \"selective\": false, \"overrides\": {}}"
    )]
    pub request: serde_json::Value,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SolveEggMovesRequest {
    #[schemars(description = "Species that should end up knowing the moves")]
    pub species: String,
    #[schemars(description = "Egg moves to teach")]
    pub moves: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupSpeciesRequest {
    #[schemars(description = "Name of the species to look up")]
    pub species_name: String,
}

fn invalid_params(message: String) -> McpError {
    McpError {
        code: ErrorCode(-32602),
        message: Cow::from(message),
        data: None,
    }
}

#[tool_router]
impl BreedingAssistantService {
    pub fn new(config: BreedingConfig, knowledge: SpeciesKnowledgeBase) -> Self {
        Self {
            tool_router: Self::tool_router(),
            cooldowns: Arc::new(Mutex::new(CooldownRegistry::new(config.cooldown()))),
            config: Arc::new(config),
            knowledge: Arc::new(knowledge),
        }
    }

    #[tool(description = "Pick breeding pairs from a list of available creatures")]
    async fn match_pairs(
        &self,
        Parameters(request): Parameters<MatchPairsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let match_request = serde_json::from_value(request.request)
            .map_err(|e| invalid_params(format!("Malformed match request: {}", e)))?;

        let report = {
            let now = Instant::now();
            let mut cooldowns = self
                .cooldowns
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            cooldowns.purge_expired(now);
            run_match_request(match_request, &self.knowledge, &self.config, &mut cooldowns, now)
                .map_err(|e| invalid_params(e.to_string()))?
        };

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| invalid_params(format!("Failed to encode report: {}", e)))?;
        Ok(CallToolResult::success(vec![
            Content::text(render_match_report(&report)),
            Content::text(json),
        ]))
    }

    #[tool(description = "Find the breeding steps that teach egg moves to a species")]
    async fn solve_egg_moves(
        &self,
        Parameters(request): Parameters<SolveEggMovesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let solver = EggMoveSolver::new(&self.knowledge)
            .with_max_generations(self.config.max_chain_generations);
        let text = match solver.try_solve(&request.species, &request.moves) {
            Ok(chain) => render_chain(&chain),
            Err(failure) => render_chain_failure(&failure),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Look up egg groups, gender rules and moves of a species")]
    async fn lookup_species(
        &self,
        Parameters(request): Parameters<LookupSpeciesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = match lookup_species(&self.knowledge, &request.species_name) {
            Ok(entry) => render_species(entry),
            Err(e) => e.to_string(),
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for BreedingAssistantService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = BreedingConfig::load()?;
    let knowledge = load_knowledge(&config)?;
    tracing::info!(species = knowledge.len(), "breeding assistant MCP server starting");

    let service = BreedingAssistantService::new(config, knowledge);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!(?quit_reason, "breeding assistant MCP server exiting");
    Ok(())
}
