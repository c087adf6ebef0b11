//! journeymap CLI: turn interview notes into journey maps.
//!
//! Usage:
//!   journeymap parse [FILE] [--name N] [--region R] [--genre G] [--keywords path]
//!   journeymap keywords [--json] [--keywords path]
//!   journeymap mcp [--transport stdio] [--keywords path]

use clap::{Parser, Subcommand};
use journeymap::{
    require_notes, JourneyMapError, JourneyMapResult, JourneySummary, KeywordTables, NoteParser,
    ParseRequest,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "journeymap",
    version,
    about = "Turn free-text interview notes into phased journey maps"
)]
struct Cli {
    /// Log pass-by-pass detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Keyword tables YAML (defaults to <config dir>/journeymap/keywords.yaml, then built-in)
    #[arg(long, global = true, env = "JOURNEYMAP_KEYWORDS")]
    keywords: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse notes and print the journey as JSON
    Parse {
        /// Notes file; reads stdin when omitted or "-"
        file: Option<PathBuf>,
        /// Interviewee name
        #[arg(long, default_value = "")]
        name: String,
        /// Interviewee region
        #[arg(long, default_value = "")]
        region: String,
        /// Interviewee genre focus
        #[arg(long, default_value = "")]
        genre: String,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
        /// Print a parse summary table instead of JSON
        #[arg(long, conflicts_with = "pretty")]
        summary: bool,
        /// Wait this long before parsing (simulated processing latency)
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
    /// Print the active keyword tables
    Keywords {
        /// Emit JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Start the MCP (Model Context Protocol) server
    Mcp {
        /// Transport type (currently only stdio)
        #[arg(long, default_value = "stdio")]
        transport: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "journeymap=debug" } else { "journeymap=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_notes(file: Option<&Path>) -> JourneyMapResult<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| JourneyMapError::ReadNotes {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut notes = String::new();
            std::io::stdin().read_to_string(&mut notes)?;
            Ok(notes)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_parse(
    parser: &NoteParser,
    file: Option<&Path>,
    name: String,
    region: String,
    genre: String,
    pretty: bool,
    summary: bool,
    delay_ms: u64,
) -> JourneyMapResult<()> {
    let notes = read_notes(file)?;
    require_notes(&notes)?;

    let request = ParseRequest::new(notes)
        .with_user_name(name)
        .with_region(region)
        .with_genre_focus(genre);

    let delay = Duration::from_millis(delay_ms);
    let journey = if delay.is_zero() {
        parser.parse(&request)
    } else {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(parser.parse_async(&request, delay))
    };

    if summary {
        println!("{}", journey.name);
        println!("{}", "-".repeat(24));
        println!("{}", JourneySummary::from_journey(&journey));
        if journey.is_empty() {
            println!("\nNo phases identified.");
        }
        for (phase, steps) in journey.steps_by_phase() {
            println!("\n{} ({})", phase, steps.len());
            for step in steps {
                println!("  - {} [{}]", step.task, step.tool_used);
            }
        }
    } else if pretty {
        println!("{}", journey.to_json_pretty()?);
    } else {
        println!("{}", serde_json::to_string(&journey)?);
    }
    Ok(())
}

fn cmd_keywords(tables: &KeywordTables, json: bool) -> JourneyMapResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tables)?);
    } else {
        print!("{}", tables.to_yaml()?);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tables = match KeywordTables::load(cli.keywords.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Parse {
            file,
            name,
            region,
            genre,
            pretty,
            summary,
            delay_ms,
        } => {
            let parser = NoteParser::with_tables(tables);
            cmd_parse(&parser, file.as_deref(), name, region, genre, pretty, summary, delay_ms)
        }
        Commands::Keywords { json } => cmd_keywords(&tables, json),
        Commands::Mcp { transport } => {
            if transport != "stdio" {
                eprintln!("error: only 'stdio' transport is currently supported");
                std::process::exit(1);
            }
            let code = journeymap::mcp::run_mcp_server(NoteParser::with_tables(tables));
            std::process::exit(code);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
