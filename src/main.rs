// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Line-oriented driver for a shared list.
//!
//! Reads one command per line from stdin and answers with one JSON object
//! per line on stdout. Logs go to stderr.
//!
//! ```text
//! insert 0 10   -> {"index":0,"value":10}
//! get 0         -> {"index":0,"value":10}
//! find 10       -> {"index":0,"value":10}
//! remove 0      -> {"message":"Remove successful"}
//! list          -> []
//! len           -> {"len":0}
//! get 3         -> {"error":"Index not found"}
//! insert 9 1    -> {"error":"Invalid index"}
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use seglist::{Config, SharedList};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AppConfig {
    list: Config,
    log: LogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct LogConfig {
    level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        return LogConfig {
            level: "info".to_string(),
        };
    }
}

fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    return Ok(config);
}

/// A list position and the value stored there.
#[derive(Debug, Serialize)]
struct Entry {
    index: usize,
    value: i64,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Insert { index: usize, value: i64 },
    Remove { index: usize },
    Get { index: usize },
    Find { value: i64 },
    List,
    Len,
}

fn argument<T: FromStr>(words: &mut SplitWhitespace<'_>, error: &'static str) -> Result<T, &'static str> {
    return words.next().and_then(|word| word.parse().ok()).ok_or(error);
}

fn parse_command(line: &str) -> Result<Command, &'static str> {
    let mut words = line.split_whitespace();
    let name = words.next().ok_or("Empty command")?;

    let command = match name {
        "insert" => {
            let index = argument(&mut words, "Invalid index")?;
            let value = argument(&mut words, "Invalid value")?;
            Command::Insert { index, value }
        }
        "remove" => Command::Remove { index: argument(&mut words, "Invalid index")? },
        "get" => Command::Get { index: argument(&mut words, "Invalid index")? },
        "find" => Command::Find { value: argument(&mut words, "Invalid value")? },
        "list" => Command::List,
        "len" => Command::Len,
        _ => return Err("Unknown command"),
    };
    return Ok(command);
}

fn execute(list: &SharedList, command: Command) -> serde_json::Value {
    return match command {
        Command::Insert { index, value } => {
            if list.insert(index, value) {
                json!(Entry { index, value })
            } else {
                json!({ "error": "Invalid index" })
            }
        }
        Command::Remove { index } => {
            if list.remove(index) {
                json!({ "message": "Remove successful" })
            } else {
                json!({ "error": "Index not found" })
            }
        }
        Command::Get { index } => match list.get(index) {
            Some(value) => json!(Entry { index, value }),
            None => json!({ "error": "Index not found" }),
        },
        Command::Find { value } => match list.find(value) {
            Some(index) => json!(Entry { index, value }),
            None => json!({ "error": "Value not found" }),
        },
        Command::List => json!(list.to_vec()),
        Command::Len => json!({ "len": list.len() }),
    };
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config_path = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let path = args.get(i + 1).context("--config needs a path")?;
                config_path = Some(path.clone());
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--config <file.json>]", args[0]);
                eprintln!("Commands on stdin: insert I V | remove I | get I | find V | list | len");
                return Ok(());
            }
            other => {
                anyhow::bail!("unknown argument {other}");
            }
        }
    }

    let app = match config_path {
        Some(path) => load_config(Path::new(&path))?,
        None => AppConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&app.log.level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let list = SharedList::with_config(app.list.clone()).context("invalid list config")?;
    tracing::info!(
        activation_threshold = app.list.activation_threshold,
        stride = app.list.stride,
        segments_per_worker = app.list.segments_per_worker,
        "list ready"
    );

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let response = match parse_command(line) {
            Ok(command) => {
                tracing::debug!(?command, "executing");
                execute(&list, command)
            }
            Err(message) => {
                tracing::warn!(line, message, "rejected command");
                json!({ "error": message })
            }
        };
        writeln!(out, "{response}").context("writing stdout")?;
    }

    tracing::info!(len = list.len(), "input closed");
    return Ok(());
}
