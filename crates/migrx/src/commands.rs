use colored::Colorize;
use migr_api::ApiClient;
use serde_json::Value;

/// Turn a transport failure into the CLI's error string. Status failures
/// become "HTTP {code}: ..." so main can derive an exit code.
fn describe(err: reqwest::Error) -> String {
    match err.status() {
        Some(status) => format!("HTTP {}: {}", status.as_u16(), err),
        None => format!("request failed: {err}"),
    }
}

// ── listings ────────────────────────────────────────────────────

pub async fn legacy(client: &ApiClient) -> Result<(), String> {
    let resp = client.legacy_clients().await.map_err(describe)?;
    render_clients("legacy", resp).await
}

pub async fn new_clients(client: &ApiClient) -> Result<(), String> {
    let resp = client.new_clients().await.map_err(describe)?;
    render_clients("new", resp).await
}

async fn render_clients(label: &str, resp: reqwest::Response) -> Result<(), String> {
    let json: Value = resp
        .json()
        .await
        .map_err(|e| format!("parse response: {e}"))?;
    let list = json.as_array().ok_or("expected a JSON array of clients")?;

    if list.is_empty() {
        println!("{}", format!("No {label} clients.").dimmed());
        return Ok(());
    }

    println!("{} {} clients\n", format!("{label}:").bold(), list.len());
    for entry in list {
        match entry.as_object() {
            Some(obj) => {
                let id = obj.get("id").map(render_id).unwrap_or_else(|| "?".into());
                let name = obj.get("name").and_then(|n| n.as_str()).unwrap_or("");
                println!("  {} {} {}", "•".dimmed(), id.cyan(), name.dimmed());
            }
            None => println!("  {} {}", "•".dimmed(), entry.to_string().dimmed()),
        }
    }

    Ok(())
}

/// Identifiers come back as strings or numbers depending on the server.
fn render_id(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── migrate ─────────────────────────────────────────────────────

pub async fn migrate(client: &ApiClient, client_id: &str) -> Result<(), String> {
    let resp = client.migrate_client(client_id).await.map_err(describe)?;
    let status = resp.status().as_u16();
    println!(
        "{} migration triggered for {} (HTTP {status})",
        "✓".green().bold(),
        client_id.cyan()
    );

    let body = resp
        .text()
        .await
        .map_err(|e| format!("parse response: {e}"))?;
    if body.is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Value>(&body) {
        Ok(json) => {
            let pretty = serde_json::to_string_pretty(&json).unwrap_or_default();
            for line in pretty.lines() {
                println!("  {}", line.dimmed());
            }
        }
        Err(_) => println!("  {}", body.trim().dimmed()),
    }

    Ok(())
}
