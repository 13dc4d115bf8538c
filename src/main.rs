//! Anti-Slop: text quality CLI

use anti_slop::config::{load_config, write_default_config, Config, CONFIG_FILENAME};
use anti_slop::reporter::{JsonReporter, TextReporter};
use anti_slop::{ToolArgs, ToolName, ToolRegistry, ToolResult};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Label used for content read from standard input
const STDIN_SOURCE: &str = "<stdin>";

/// Anti-Slop: detect and clean low-quality, generic writing
#[derive(Parser, Debug)]
#[command(name = "anti-slop")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: search .antislop.json in current dir and parents)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one tool over files, directories or standard input
    Run {
        /// Tool identifier (see `anti-slop list`)
        tool: String,

        /// Files or directories (default: read standard input)
        paths: Vec<PathBuf>,

        /// detect_repetition: shortest phrase length in words
        #[arg(long, value_name = "N")]
        min_length: Option<usize>,

        /// detect_run_on_sentences: words allowed per sentence
        #[arg(long, value_name = "N")]
        max_words: Option<usize>,

        /// improve_content_from_slop: favour clarity over the original meaning
        #[arg(long)]
        no_preserve_meaning: bool,

        /// improve_content_from_slop: tone of the rewrite
        #[arg(long, value_name = "TONE")]
        target_tone: Option<String>,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,

        /// Number of parallel threads (default: number of CPU cores)
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,
    },

    /// List available tools
    List {
        /// Output format as JSON
        #[arg(long, short)]
        json: bool,
    },

    /// Run MCP server (stdio JSON-RPC)
    Mcp,

    /// Create .antislop.json with the default settings
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_logging();
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

/// Diagnostics go to stderr so stdout stays clean for reports and MCP
fn init_logging() {
    let filter = EnvFilter::try_from_env("ANTI_SLOP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let cwd = std::env::current_dir().context("Failed to get current directory")?;

    match args.command {
        Commands::Run {
            tool,
            paths,
            min_length,
            max_words,
            no_preserve_meaning,
            target_tone,
            json,
            jobs,
        } => {
            let config = load_config(&cwd, args.config.as_deref())?.merge_with_cli(min_length, max_words);
            config.validate().map_err(|e| anyhow::anyhow!(e))?;

            let tool: ToolName = tool.parse()?;
            let mut options = ToolArgs::default();
            if no_preserve_meaning {
                options = options.with("preserve_meaning", false);
            }
            if let Some(tone) = target_tone {
                options = options.with("target_tone", tone);
            }

            let run = RunOptions {
                tool,
                options,
                json,
                jobs,
            };
            run_tool(&config, &run, &paths)
        }
        Commands::List { json } => {
            let config = load_config(&cwd, args.config.as_deref())?;
            run_list(&ToolRegistry::from_config(&config), json)
        }
        Commands::Mcp => {
            let config = load_config(&cwd, args.config.as_deref())?;
            anti_slop::mcp::run_mcp_server(&ToolRegistry::from_config(&config))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { dir } => run_init(dir.as_deref().unwrap_or(&cwd)),
    }
}

struct RunOptions {
    tool: ToolName,
    /// Tool options given on the command line; `content` is added per source
    options: ToolArgs,
    json: bool,
    jobs: Option<usize>,
}

fn run_tool(config: &Config, run: &RunOptions, paths: &[PathBuf]) -> Result<ExitCode> {
    let registry = ToolRegistry::from_config(config);

    let sources: Vec<Source> = if paths.is_empty() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        vec![Source::Inline(content)]
    } else {
        collect_files(paths, config)?
            .into_iter()
            .map(Source::File)
            .collect()
    };

    if sources.is_empty() {
        eprintln!("{}: No matching files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    if let Some(jobs) = run.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let (results, had_errors) = process_sources(&registry, run, &sources);

    if run.json {
        let reporter = JsonReporter::new().pretty();
        if sources.len() == 1 && !results.is_empty() {
            println!("{}", reporter.report(&results[0].1));
        } else {
            println!("{}", reporter.report_many(run.tool, &results));
        }
    } else {
        let reporter = TextReporter::new();
        let many = sources.len() > 1;
        for (label, result) in &results {
            if many {
                println!("{}", format!("==> {} <==", label).bold());
            }
            println!("{}", reporter.format(run.tool, result));
            if many {
                println!();
            }
        }
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else if results.iter().any(|(_, r)| !r.is_success()) {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

enum Source {
    Inline(String),
    File(PathBuf),
}

impl Source {
    fn label(&self) -> String {
        match self {
            Source::Inline(_) => STDIN_SOURCE.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Source::Inline(content) => Ok(content.clone()),
            Source::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }
}

/// Run the tool over every source in parallel; results keep input order.
/// Unreadable sources are reported and skipped.
fn process_sources(
    registry: &ToolRegistry,
    run: &RunOptions,
    sources: &[Source],
) -> (Vec<(String, ToolResult)>, bool) {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    let had_errors = AtomicBool::new(false);

    let results: Vec<_> = sources
        .par_iter()
        .filter_map(|source| match source.read() {
            Ok(content) => {
                let args = run.options.clone().with("content", content);
                Some((source.label(), registry.invoke_tool(run.tool, &args)))
            }
            Err(e) => {
                had_errors.store(true, Ordering::Relaxed);
                eprintln!("{}: {:#}", "Error".red(), e);
                None
            }
        })
        .collect();

    (results, had_errors.load(Ordering::Relaxed))
}

fn collect_files(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }

        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && config.accepts_extension(e.path()))
            .map(|e| e.into_path())
            .collect();
        // Sort for consistent output
        found.sort();
        files.extend(found);
    }

    Ok(files)
}

fn run_list(registry: &ToolRegistry, json: bool) -> Result<ExitCode> {
    let tools = registry.list_tools();
    if json {
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(ExitCode::SUCCESS);
    }

    for tool in &tools {
        let marker = if tool.identifier.is_ai() { " (AI)" } else { "" };
        println!("{}{}", tool.identifier.as_str().cyan().bold(), marker.dimmed());
        println!("    {}", tool.description);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_init(dir: &Path) -> Result<ExitCode> {
    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let path = write_default_config(dir, &Config::default())?;
    println!("{}: Created {}", "Done".green().bold(), path.display());
    Ok(ExitCode::SUCCESS)
}
