//! CLI runner - executes commands
//!
//! Plays the host: loads the configuration, injects credentials, drives
//! sync continuations and prints one JSON message per line.

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ConnectorConfig;
use crate::connector::{CheckResult, Connector, FigmaConnector};
use crate::engine::{self, SyncPage};
use crate::error::{Error, Result};
use crate::formulas::{Args, Formula, FormulaOutput, ResultSpec};
use crate::pagination::Continuation;
use serde_json::{json, Value};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let connector = self.connector()?;

        match &self.cli.command {
            Commands::Spec => self.spec(&connector),
            Commands::Check => self.check(&connector).await,
            Commands::Run { formula, args } => {
                self.run_formula(&connector, formula, args.as_deref()).await
            }
            Commands::Sync {
                formula,
                args,
                continuation,
                all,
                max_pages,
            } => {
                self.sync(
                    &connector,
                    formula,
                    args.as_deref(),
                    continuation.as_deref(),
                    *all,
                    *max_pages,
                )
                .await
            }
        }
    }

    /// Build the connector from the config file and environment
    fn connector(&self) -> Result<FigmaConnector> {
        let config = ConnectorConfig::load(self.cli.config.as_deref())?;
        FigmaConnector::from_config(&config)
    }

    /// Show spec
    fn spec(&self, connector: &FigmaConnector) -> Result<()> {
        let spec = serde_json::to_value(connector.spec())?;
        self.output_message(&json!({
            "type": "SPEC",
            "spec": spec
        }));
        Ok(())
    }

    /// Check connection
    async fn check(&self, connector: &FigmaConnector) -> Result<()> {
        self.output_message(&log_message("INFO", "Checking connection to Figma"));
        let result = connector.check().await;
        self.output_message(&connection_status_message(&result));
        Ok(())
    }

    /// Run a formula once and print its result
    async fn run_formula(
        &self,
        connector: &FigmaConnector,
        name: &str,
        args: Option<&str>,
    ) -> Result<()> {
        let formula: Formula = name.parse()?;
        let args = parse_args(args)?;

        let output = connector.run(formula, &args, None).await?;
        self.output_message(&result_message(formula, &output)?);
        Ok(())
    }

    /// Run a sync table, one step or until exhaustion
    async fn sync(
        &self,
        connector: &FigmaConnector,
        name: &str,
        args: Option<&str>,
        continuation: Option<&str>,
        all: bool,
        max_pages: Option<usize>,
    ) -> Result<()> {
        let formula: Formula = name.parse()?;
        let ResultSpec::Sync { table, .. } = formula.spec().result else {
            return Err(Error::invalid_input(format!(
                "{formula} is not a sync table formula"
            )));
        };
        let args = parse_args(args)?;
        let start = parse_continuation(continuation)?;

        let args = &args;
        let step = move |continuation: Option<Continuation>| async move {
            connector
                .run(formula, args, continuation.as_ref())
                .await?
                .into_sync_page()
        };

        // Without --all the host takes one step and keeps the continuation
        let budget = if all { max_pages } else { Some(1) };
        let (next, stats) = engine::drain(
            engine::pages(start, step),
            budget,
            |page: SyncPage<Value>| self.emit_records(table, &page),
        )
        .await?;

        info!(
            "{formula}: {} rows in {} pages ({} ms)",
            stats.records_synced, stats.pages_fetched, stats.duration_ms
        );

        self.output_message(&state_message(table, next.as_ref()));
        self.output_message(&json!({
            "type": "SYNC_SUMMARY",
            "summary": {
                "formula": formula.name(),
                "table": table,
                "stats": stats
            }
        }));
        Ok(())
    }

    fn emit_records(&self, table: &str, page: &SyncPage<Value>) {
        let emitted_at = chrono::Utc::now().timestamp_millis();
        for row in &page.result {
            self.output_message(&record_message(table, row, emitted_at));
        }
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

// ============================================================================
// Argument parsing
// ============================================================================

/// Parse `--args`; absent means no arguments
fn parse_args(raw: Option<&str>) -> Result<Args> {
    let Some(raw) = raw else {
        return Ok(Args::default());
    };
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| Error::invalid_input(format!("Invalid args JSON: {e}")))?;
    Args::from_value(&value)
}

/// Parse `--continuation` as printed in a previous `STATE` message
fn parse_continuation(raw: Option<&str>) -> Result<Option<Continuation>> {
    raw.map(|raw| {
        serde_json::from_str(raw)
            .map_err(|e| Error::invalid_input(format!("Invalid continuation JSON: {e}")))
    })
    .transpose()
}

// ============================================================================
// Messages
// ============================================================================

fn log_message(level: &str, message: &str) -> Value {
    json!({
        "type": "LOG",
        "log": {
            "level": level,
            "message": message
        }
    })
}

fn connection_status_message(result: &CheckResult) -> Value {
    let status = if result.success { "SUCCEEDED" } else { "FAILED" };
    let message = match (&result.message, &result.connection_name) {
        (Some(message), _) => format!("Connection failed: {message}"),
        (None, Some(name)) => format!("Connected as {name}"),
        (None, None) => "Connection successful".to_string(),
    };
    json!({
        "type": "CONNECTION_STATUS",
        "connectionStatus": {
            "status": status,
            "message": message
        }
    })
}

fn result_message(formula: Formula, output: &FormulaOutput) -> Result<Value> {
    Ok(json!({
        "type": "RESULT",
        "result": {
            "formula": formula.name(),
            "output": serde_json::to_value(output)?
        }
    }))
}

fn record_message(table: &str, row: &Value, emitted_at: i64) -> Value {
    json!({
        "type": "RECORD",
        "record": {
            "stream": table,
            "data": row,
            "emitted_at": emitted_at
        }
    })
}

fn state_message(table: &str, continuation: Option<&Continuation>) -> Value {
    json!({
        "type": "STATE",
        "state": {
            "stream": table,
            "continuation": continuation
        }
    })
}
