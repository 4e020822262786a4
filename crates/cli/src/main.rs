//! openapi-opid CLI
//!
//! Command-line interface for extracting, filtering and (re)generating
//! operationIds in OpenAPI 3.x specifications.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use openapi_opid_common::AllowList;
use openapi_opid_generator::{
    assign_operation_ids, filter_operations, AssignPolicy, FilterOptions,
};
use openapi_opid_parser::{extract_operations, SpecDocument, SpecFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "openapi-opid")]
#[command(version, about = "Extract, filter and generate operationIds in OpenAPI 3.x specs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the operations of a spec as JSON
    #[command(after_help = "EXAMPLES:\n  \
        # Print the operation catalog\n  \
        openapi-opid extract teable.yaml\n\n  \
        # Write it to a file\n  \
        openapi-opid extract teable.json --output operations.json")]
    Extract {
        /// Path to the spec file
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spec format (detected from the extension if not specified)
        #[arg(short, long)]
        format: Option<FormatArg>,
    },

    /// Keep only the operations named in an allow-list
    #[command(after_help = "EXAMPLES:\n  \
        # Inline allow-list\n  \
        openapi-opid filter teable.json \\\n    \
        --output filtered.json \\\n    \
        --allow getListRecords,getGetRecord,createCreateRecords\n\n  \
        # Allow-list file (YAML or JSON)\n  \
        openapi-opid filter teable.yaml \\\n    \
        --output filtered.yaml \\\n    \
        --allow-file allowed-operations.yaml")]
    Filter {
        /// Path to the spec file
        input: PathBuf,

        /// Output file for the filtered spec
        #[arg(short, long)]
        output: PathBuf,

        /// Comma-separated list of operationIds to keep
        #[arg(long, value_delimiter = ',', required_unless_present = "allow_file")]
        allow: Option<Vec<String>>,

        /// YAML/JSON file listing operationIds to keep
        #[arg(long)]
        allow_file: Option<PathBuf>,

        /// Also drop operations that have no operationId
        #[arg(long)]
        drop_unidentified: bool,

        /// Spec format (detected from the extension if not specified)
        #[arg(short, long)]
        format: Option<FormatArg>,
    },

    /// Generate operationIds from method, path, tags and summary
    #[command(after_help = "EXAMPLES:\n  \
        # Fill in missing operationIds (in place)\n  \
        openapi-opid assign teable.yaml\n\n  \
        # Regenerate every operationId into a new file\n  \
        openapi-opid assign teable.json --mode force-rewrite --output teable.ids.json\n\n  \
        # Clear all operationIds, then assign only the first 10\n  \
        openapi-opid assign teable.json --mode partial --count 10")]
    Assign {
        /// Path to the spec file
        input: PathBuf,

        /// Which operations receive a generated operationId
        #[arg(short, long, value_enum, default_value_t = AssignMode::FillMissing)]
        mode: AssignMode,

        /// Number of operations to assign in partial mode
        #[arg(short, long, required_if_eq("mode", "partial"))]
        count: Option<usize>,

        /// Output file (rewrites the input if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spec format (detected from the extension if not specified)
        #[arg(short, long)]
        format: Option<FormatArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

impl From<FormatArg> for SpecFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => SpecFormat::Json,
            FormatArg::Yaml => SpecFormat::Yaml,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AssignMode {
    /// Only operations without a usable operationId
    FillMissing,
    /// Every operation, replacing existing operationIds
    ForceRewrite,
    /// Clear all operationIds, then assign the first --count operations
    Partial,
}

fn main() -> ExitCode {
    // Usage errors exit with 1 like every other failure
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        eprintln!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Extract {
            input,
            output,
            format,
        } => extract_command(
            &input,
            output.as_deref(),
            format.map(SpecFormat::from),
            cli.verbose,
        ),
        Commands::Filter {
            input,
            output,
            allow,
            allow_file,
            drop_unidentified,
            format,
        } => filter_command(FilterConfig {
            input: &input,
            output: &output,
            allow: allow.as_deref(),
            allow_file: allow_file.as_deref(),
            options: FilterOptions { drop_unidentified },
            format: format.map(SpecFormat::from),
            verbose: cli.verbose,
        }),
        Commands::Assign {
            input,
            mode,
            count,
            output,
            format,
        } => {
            let policy = assign_policy(mode, count)?;
            if count.is_some() && mode != AssignMode::Partial {
                eprintln!(
                    "{} --count only applies to --mode partial; ignoring it",
                    "⚠".yellow()
                );
            }
            assign_command(
                &input,
                output.as_deref(),
                policy,
                format.map(SpecFormat::from),
                cli.verbose,
            )
        }
    }
}

/// Load a spec, reporting the format in use
///
/// Progress goes to stderr so `extract` can print its catalog to stdout.
fn load_spec(path: &Path, format: Option<SpecFormat>, verbose: bool) -> Result<SpecDocument> {
    let format = format.unwrap_or_else(|| SpecFormat::from_path(path));
    eprintln!(
        "{} Reading {} spec: {}",
        "→".cyan(),
        format.to_string().yellow(),
        path.display()
    );

    let doc = SpecDocument::load(path, Some(format))
        .with_context(|| format!("Failed to load spec {}", path.display()))?;

    if verbose {
        eprintln!("  OpenAPI: {}", doc.openapi_version());
        eprintln!("  Paths: {}", doc.paths().map_or(0, |p| p.len()));
        eprintln!("  Operations: {}", doc.operation_count());
    }

    Ok(doc)
}

fn extract_command(
    input: &Path,
    output: Option<&Path>,
    format: Option<SpecFormat>,
    verbose: bool,
) -> Result<()> {
    let doc = load_spec(input, format, verbose)?;
    let catalog = extract_operations(&doc);

    let mut rendered =
        serde_json::to_string_pretty(&catalog).context("Failed to serialize operations")?;
    rendered.push('\n');

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} Extracted {} operations to {}",
                "✓".green(),
                catalog.operations.len(),
                path.display()
            );
        }
        None => print!("{}", rendered),
    }

    if verbose {
        for op in &catalog.operations {
            eprintln!("  • {} {} {}", op.method.to_uppercase(), op.path, op.operation_id.cyan());
        }
    }

    Ok(())
}

/// Inputs for the filter command
struct FilterConfig<'a> {
    input: &'a Path,
    output: &'a Path,
    allow: Option<&'a [String]>,
    allow_file: Option<&'a Path>,
    options: FilterOptions,
    format: Option<SpecFormat>,
    verbose: bool,
}

fn filter_command(config: FilterConfig) -> Result<()> {
    let mut allow_list = AllowList::default();
    if let Some(ids) = config.allow {
        allow_list.extend(AllowList::new(ids.iter().cloned())?);
    }
    if let Some(path) = config.allow_file {
        println!("{} Loading allow-list: {}", "→".cyan(), path.display());
        allow_list.extend(AllowList::load(path)?);
    }

    if config.verbose {
        println!("  Allowed operationIds: {}", allow_list.len());
    }

    let mut doc = load_spec(config.input, config.format, config.verbose)?;
    let report = filter_operations(&mut doc, &allow_list, config.options);

    doc.save(config.output, config.format)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    println!(
        "{} Removed {} operations. Kept operations with the following IDs: {}",
        "✓".green(),
        report.removed_operations,
        report.kept.join(", ")
    );
    if !report.removed_paths.is_empty() {
        println!(
            "{} Removed {} paths left without operations",
            "→".cyan(),
            report.removed_paths.len()
        );
        if config.verbose {
            for path in &report.removed_paths {
                println!("  • {}", path);
            }
        }
    }

    let missing: Vec<&str> = allow_list
        .iter()
        .filter(|id| !report.kept.iter().any(|kept| kept == id))
        .collect();
    if !missing.is_empty() {
        println!(
            "{} Allowed but not found in spec: {}",
            "⚠".yellow(),
            missing.join(", ")
        );
    }

    println!(
        "{} Filtered OpenAPI spec saved to {}",
        "✓".green().bold(),
        config.output.display()
    );

    Ok(())
}

/// Map the `--mode`/`--count` pair onto a pass policy
fn assign_policy(mode: AssignMode, count: Option<usize>) -> Result<AssignPolicy> {
    Ok(match mode {
        AssignMode::FillMissing => AssignPolicy::FillMissing,
        AssignMode::ForceRewrite => AssignPolicy::ForceRewrite,
        AssignMode::Partial => {
            AssignPolicy::FirstN(count.context("--count is required with --mode partial")?)
        }
    })
}

/// File an assign pass writes to, if any
///
/// An explicit `--output` is always written. An in-place run only touches
/// the input when the pass changed something.
fn assign_target<'a>(
    input: &'a Path,
    output: Option<&'a Path>,
    modified: bool,
) -> Option<&'a Path> {
    match output {
        Some(path) => Some(path),
        None if modified => Some(input),
        None => None,
    }
}

/// Why a pass left the document as it was
fn unchanged_reason(policy: AssignPolicy) -> &'static str {
    match policy {
        AssignPolicy::FillMissing => "all operations already have operationIds",
        AssignPolicy::FirstN(0) => "no operationIds to clear and --count is 0",
        AssignPolicy::ForceRewrite | AssignPolicy::FirstN(_) => "the spec has no operations",
    }
}

fn assign_command(
    input: &Path,
    output: Option<&Path>,
    policy: AssignPolicy,
    format: Option<SpecFormat>,
    verbose: bool,
) -> Result<()> {
    let mut doc = load_spec(input, format, verbose)?;
    let report = assign_operation_ids(&mut doc, policy);
    let modified = report.is_modified();

    if !modified {
        println!(
            "{} No changes needed - {}",
            "✓".green(),
            unchanged_reason(policy)
        );
    }

    let Some(target) = assign_target(input, output, modified) else {
        return Ok(());
    };
    doc.save(target, format)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    if !modified {
        println!("{} Wrote unchanged spec to {}", "✓".green().bold(), target.display());
        return Ok(());
    }

    if verbose {
        for assignment in &report.assigned {
            println!(
                "  • {} {} → {}",
                assignment.method.as_str().to_uppercase(),
                assignment.path,
                assignment.operation_id.cyan()
            );
        }
    }

    match policy {
        AssignPolicy::FirstN(_) => println!(
            "{} Updated {}: removed {} operationIds and added to first {} of {} operations",
            "✓".green().bold(),
            target.display(),
            report.cleared,
            report.assigned.len(),
            report.visited
        ),
        _ => println!(
            "{} Updated {} with {} operationIds",
            "✓".green().bold(),
            target.display(),
            report.assigned.len()
        ),
    }

    Ok(())
}
