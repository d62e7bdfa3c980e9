//! ats-report CLI - render ATS analysis text as PDF reports

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ats_report::{
    classify_file, render_batch, render_combined, render_file, render_files, title_from_path,
    CombinedReport, JsonFormat, LineKind, RenderOptions, RenderStats, RenderedReport,
    TypographyPreset,
};

#[derive(Parser)]
#[command(name = "ats-report")]
#[command(version)]
#[command(about = "Render AI-generated ATS resume analyses as styled PDF reports", long_about = None)]
struct Cli {
    /// Product name shown in headers and footers
    #[arg(long, global = true, env = "ATS_REPORT_PRODUCT")]
    product: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one analysis file as a PDF report
    Single {
        /// Analysis text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Report title (defaults to the file name)
        #[arg(short, long)]
        title: Option<String>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// File name prefix
        #[arg(long, env = "ATS_REPORT_PREFIX")]
        prefix: Option<String>,

        /// Write uncompressed content streams
        #[arg(long)]
        no_compress: bool,

        /// Body text typography
        #[arg(long, value_enum, default_value = "standard")]
        typography: TypographyLevel,
    },

    /// Render several analysis files as one combined report
    Combined {
        /// Analysis text files, in section order
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Section titles, in the same order as the files
        #[arg(short, long = "title")]
        titles: Vec<String>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// File name prefix
        #[arg(long, env = "ATS_REPORT_PREFIX")]
        prefix: Option<String>,

        /// Write uncompressed content streams
        #[arg(long)]
        no_compress: bool,
    },

    /// Render each analysis file as its own report, in parallel
    Batch {
        /// Analysis text files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// File name prefix
        #[arg(long, env = "ATS_REPORT_PREFIX")]
        prefix: Option<String>,
    },

    /// Print how each line of an analysis file is classified
    Classify {
        /// Analysis text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TypographyLevel {
    /// Leave body text untouched
    Off,
    /// Smart quotes, dashes, ellipses and whitespace cleanup
    Standard,
}

impl From<TypographyLevel> for TypographyPreset {
    fn from(level: TypographyLevel) -> Self {
        match level {
            TypographyLevel::Off => TypographyPreset::Off,
            TypographyLevel::Standard => TypographyPreset::Standard,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let mut options = RenderOptions::new();
    if let Some(product) = cli.product {
        options = options.with_product_name(product);
    }

    let result = match cli.command {
        Some(Commands::Single {
            input,
            title,
            output,
            prefix,
            no_compress,
            typography,
        }) => {
            let mut options = options
                .with_compression(!no_compress)
                .with_typography_preset(typography.into());
            if let Some(prefix) = prefix {
                options = options.with_prefix(prefix);
            }
            cmd_single(&input, title.as_deref(), &output, &options)
        }
        Some(Commands::Combined {
            inputs,
            titles,
            output,
            prefix,
            no_compress,
        }) => {
            let mut options = options.with_compression(!no_compress);
            if let Some(prefix) = prefix {
                options = options.with_combined_prefix(prefix);
            }
            cmd_combined(&inputs, &titles, &output, &options)
        }
        Some(Commands::Batch {
            inputs,
            output,
            prefix,
        }) => {
            let options = match prefix {
                Some(prefix) => options.with_prefix(prefix),
                None => options,
            };
            cmd_batch(&inputs, &output, &options)
        }
        Some(Commands::Classify {
            input,
            json,
            compact,
        }) => cmd_classify(&input, json, compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: ats-report <COMMAND> [FILE]...".yellow());
            println!("       ats-report --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_single(
    input: &Path,
    title: Option<&str>,
    output: &Path,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = render_file(input, title, options)?;
    let path = report.write_to_dir(output)?;
    print_report(&report, &path);
    Ok(())
}

fn cmd_combined(
    inputs: &[PathBuf],
    titles: &[String],
    output: &Path,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if !titles.is_empty() && titles.len() != inputs.len() {
        return Err(format!(
            "{} titles given for {} files",
            titles.len(),
            inputs.len()
        )
        .into());
    }

    let pb = ProgressBar::new(inputs.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // File stems become section titles unless titles were given
    let (rendered, section_titles) = if titles.is_empty() {
        pb.set_message(format!("Rendering {} files...", inputs.len()));
        let rendered = render_files(inputs, options)?;
        pb.inc(inputs.len() as u64);
        let section_titles: Vec<String> = inputs.iter().map(|p| title_from_path(p)).collect();
        (rendered, section_titles)
    } else {
        let mut report = CombinedReport::new();
        for (input, title) in inputs.iter().zip(titles) {
            pb.set_message(format!("Reading {}...", input.display()));
            report.add_section(title.clone(), fs::read_to_string(input)?);
            pb.inc(1);
        }
        pb.set_message("Rendering PDF...");
        (render_combined(&report, options)?, titles.to_vec())
    };

    let path = rendered.write_to_dir(output)?;
    pb.inc(1);
    pb.finish_with_message("Done!");

    println!("\n{}", "Sections:".green().bold());
    let count = section_titles.len();
    for (i, title) in section_titles.iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), title);
    }
    print_report(&rendered, &path);
    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: &Path,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut items = Vec::with_capacity(inputs.len());
    for input in inputs {
        items.push((title_from_path(input), fs::read_to_string(input)?));
    }

    log::debug!("rendering {} reports", items.len());
    let results = render_batch(&items, options);

    let mut failures = 0;
    let mut totals = RenderStats::new();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(report) => {
                let path = report.write_to_dir(output)?;
                totals.merge(&report.stats);
                println!("{} {}", "Saved".green(), path.display());
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", "Failed".red(), input.display(), e);
            }
        }
    }

    println!(
        "\n{} {} of {} reports rendered",
        "Done!".green().bold(),
        inputs.len() - failures,
        inputs.len()
    );
    println!(
        "{}: {} pages, {} lines ({} success, {} warning, {} highlight)",
        "Totals".bold(),
        totals.page_count,
        totals.line_count(),
        totals.success_count,
        totals.warning_count,
        totals.highlight_count
    );

    if failures > 0 {
        return Err(format!("{} report(s) failed", failures).into());
    }
    Ok(())
}

fn cmd_classify(input: &Path, json: bool, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let lines = classify_file(input)?;

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", ats_report::to_json(&lines, format)?);
        return Ok(());
    }

    for (i, line) in lines.iter().enumerate() {
        let kind = format!("{:<9}", line.kind.as_str());
        let kind = match line.kind {
            LineKind::Title | LineKind::Heading1 | LineKind::Heading2 => kind.cyan().bold(),
            LineKind::Success => kind.green(),
            LineKind::Warning => kind.yellow(),
            LineKind::Highlight => kind.blue(),
            LineKind::Quote => kind.magenta(),
            LineKind::Body | LineKind::Spacer => kind.dimmed(),
        };
        println!("{:>4} {} {}", (i + 1).to_string().dimmed(), kind, line.text);
    }

    Ok(())
}

fn print_report(report: &RenderedReport, path: &Path) {
    let stats = &report.stats;
    println!("\n{}", "Report".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), path.display());
    println!("{}: {}", "Report ID".bold(), report.report_id);
    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {} bytes", "Size".bold(), report.len());
    println!(
        "{}: {} lines ({} success, {} warning, {} highlight)",
        "Content".bold(),
        stats.line_count(),
        stats.success_count,
        stats.warning_count,
        stats.highlight_count
    );
    if stats.fallback_lines > 0 {
        println!(
            "{}: {} line(s) rendered as plain text",
            "Warning".yellow().bold(),
            stats.fallback_lines
        );
    }
}

fn cmd_version() {
    println!("{} {}", "ats-report".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("ATS analysis to PDF report generator");
    println!();
    println!("Library: ats-report {}", ats_report::VERSION);
    println!("License: MIT");
}
