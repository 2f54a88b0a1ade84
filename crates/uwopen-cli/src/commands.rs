use serde::Serialize;
use serde_json::Value;

use uwopen_core::{endpoint, UwClient, CATALOGUE};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct OperationRow {
    operation: String,
    path: String,
    params: usize,
}

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    match &cli.command {
        Command::Call { operation, params } => call(cli, operation, params).await,
        Command::List => list(),
    }
}

async fn call(cli: &Cli, operation: &str, params: &[String]) -> Result<Value, CliError> {
    let endpoint = endpoint::find(operation).ok_or_else(|| CliError::UnknownOperation {
        operation: operation.to_string(),
    })?;

    let key = resolve_key(cli)?;
    let client = match cli.timeout_ms {
        Some(timeout_ms) => UwClient::with_timeout_ms(key, timeout_ms),
        None => UwClient::new(key),
    };

    let params: Vec<&str> = params.iter().map(String::as_str).collect();
    Ok(client.invoke(endpoint, &params).await?)
}

fn list() -> Result<Value, CliError> {
    let rows: Vec<OperationRow> = CATALOGUE
        .iter()
        .map(|endpoint| OperationRow {
            operation: endpoint.qualified_name(),
            path: endpoint.path_template(),
            params: endpoint.arity(),
        })
        .collect();

    Ok(serde_json::to_value(rows)?)
}

fn resolve_key(cli: &Cli) -> Result<String, CliError> {
    if let Some(key) = &cli.key {
        return Ok(key.clone());
    }
    std::env::var("UWATERLOO_API_KEY").map_err(|_| CliError::MissingKey)
}
