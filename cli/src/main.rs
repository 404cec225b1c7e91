//! unlayout CLI - export layout analysis results to documents

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use unlayout::{
    read_results, DocumentExporter, DocumentResult, ExportOptions, ExportStats, JsonFormat,
    OutputFormat, Page, SUPPORTED_FORMATS,
};

#[derive(Parser)]
#[command(name = "unlayout")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Export layout analysis results to HTML, Markdown, CSV and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export analyzer results, one output file per page
    Export {
        /// Analyzer results (JSON object, or array with one entry per page)
        #[arg(value_name = "RESULTS")]
        input: PathBuf,

        /// Output format (json, csv, html, markdown, md)
        #[arg(short, long, env = "UNLAYOUT_FORMAT", default_value = "markdown")]
        format: String,

        /// Output directory
        #[arg(short, long, value_name = "DIR", env = "UNLAYOUT_OUTDIR", default_value = "results")]
        outdir: PathBuf,

        /// Base name of output files (defaults to the results file stem)
        #[arg(long)]
        stem: Option<String>,

        /// Page image, repeat once per page in page order
        #[arg(short, long = "image", value_name = "FILE")]
        images: Vec<PathBuf>,

        /// Remove line breaks instead of converting them to <br>
        #[arg(long)]
        ignore_line_break: bool,

        /// Crop figures to PNG files and reference them (html, markdown)
        #[arg(long)]
        figure: bool,

        /// Also export the text found inside figures
        #[arg(long)]
        figure_letter: bool,

        /// Display width of embedded figures in pixels
        #[arg(long, default_value = "200")]
        figure_width: u32,

        /// Subdirectory for figure images
        #[arg(long, default_value = "figures")]
        figure_dir: String,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Export pages one at a time
        #[arg(long)]
        sequential: bool,

        /// Write a JSON summary of the export
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// Show what the analyzer detected
    Info {
        /// Analyzer results
        #[arg(value_name = "RESULTS")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Per-page entry of the export report.
#[derive(Serialize)]
struct PageReport {
    page: u32,
    path: Option<PathBuf>,
    figures: Vec<PathBuf>,
    error: Option<String>,
}

/// Export report written with `--report`.
#[derive(Serialize)]
struct ExportReport {
    format: String,
    pages: Vec<PageReport>,
    totals: ExportStats,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Export {
            input,
            format,
            outdir,
            stem,
            images,
            ignore_line_break,
            figure,
            figure_letter,
            figure_width,
            figure_dir,
            compact,
            sequential,
            report,
        }) => {
            let mut options = ExportOptions::new()
                .with_ignore_line_break(ignore_line_break)
                .with_figures(figure)
                .with_figure_letters(figure_letter)
                .with_figure_width(figure_width)
                .with_figure_dir(figure_dir);
            if compact {
                options = options.with_json_format(JsonFormat::Compact);
            }
            if sequential {
                options = options.sequential();
            }
            cmd_export(
                &input,
                &format,
                &outdir,
                stem,
                &images,
                options,
                report.as_deref(),
            )
        }
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: unlayout export <RESULTS> --format <FORMAT>".yellow());
            println!("       unlayout --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_export(
    input: &Path,
    format: &str,
    outdir: &Path,
    stem: Option<String>,
    images: &[PathBuf],
    options: ExportOptions,
    report: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Reject bad configuration before reading or writing anything
    let format = OutputFormat::parse(format)?;
    let stem = stem.unwrap_or_else(|| file_stem(input));

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Loading results...");
    let results = read_results(input)?;
    pb.inc(1);

    pb.set_message("Loading page images...");
    let pages = build_pages(results, images)?;
    pb.inc(1);

    pb.set_message(format!("Exporting {} page(s)...", pages.len()));
    let exporter = DocumentExporter::new(format, outdir, stem).with_options(options);
    let outputs = exporter.export_pages(&pages);
    pb.inc(1);
    pb.finish_with_message("Done!");

    let mut totals = ExportStats::new();
    let mut entries = Vec::with_capacity(outputs.len());
    let mut failed = 0;

    println!("\n{}", "Output files:".green().bold());
    for (page, output) in pages.iter().zip(outputs) {
        match output {
            Ok(output) => {
                println!("  {} {}", "├─".dimmed(), output.path.display());
                for figure in &output.figures {
                    println!("  {}   {}", "│".dimmed(), figure.display().to_string().dimmed());
                }
                totals.merge(&output.stats);
                entries.push(PageReport {
                    page: output.page,
                    path: Some(output.path),
                    figures: output.figures,
                    error: None,
                });
            }
            Err(e) => {
                eprintln!("  {} {}", "✗".red(), e);
                failed += 1;
                entries.push(PageReport {
                    page: page.number,
                    path: None,
                    figures: Vec::new(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    if totals.dropped_cells > 0 {
        println!(
            "{} {} table cell(s) outside their grid were dropped",
            "Warning:".yellow(),
            totals.dropped_cells
        );
    }
    if totals.figures_skipped > 0 {
        println!(
            "{} {} figure(s) with an empty region were skipped",
            "Warning:".yellow(),
            totals.figures_skipped
        );
    }

    if let Some(path) = report {
        let report = ExportReport {
            format: format.to_string(),
            pages: entries,
            totals,
        };
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("{} {}", "Report saved to".green(), path.display());
    }

    if failed > 0 {
        return Err(format!("{} of {} page(s) failed", failed, pages.len()).into());
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let results = read_results(input)?;

    println!("{}", "Analysis Results".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), results.len());

    for (i, result) in results.iter().enumerate() {
        println!();
        println!("{}", format!("Page {}", i + 1).cyan().bold());
        println!("{}", "─".repeat(40).dimmed());

        let headings = result.paragraphs.iter().filter(|p| p.is_heading()).count();
        let merged = result.tables.iter().filter(|t| t.has_merged_cells()).count();
        let figure_text: usize = result.figures.iter().map(|f| f.paragraphs.len()).sum();

        println!(
            "{}: {} ({} headings)",
            "Paragraphs".bold(),
            result.paragraphs.len(),
            headings
        );
        println!(
            "{}: {} ({} with merged cells)",
            "Tables".bold(),
            result.tables.len(),
            merged
        );
        println!(
            "{}: {} ({} text blocks inside)",
            "Figures".bold(),
            result.figures.len(),
            figure_text
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unlayout".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Layout analysis export tool");
    println!();
    println!("{}", "Output formats:".bold());
    for format in OutputFormat::ALL {
        println!("  .{:<5} {}", format.extension(), format.mime_type().dimmed());
    }
    println!("Accepted names: {}", SUPPORTED_FORMATS.join(", "));
    println!("Repository: {}", "https://github.com/iyulab/unlayout".dimmed());
    println!("License: MIT");
}

/// Pair page results with their images, numbering pages from 1.
fn build_pages(
    results: Vec<DocumentResult>,
    images: &[PathBuf],
) -> Result<Vec<Page>, Box<dyn std::error::Error>> {
    if images.len() > results.len() {
        return Err(format!(
            "{} image(s) given for {} page(s)",
            images.len(),
            results.len()
        )
        .into());
    }

    let mut pages = Vec::with_capacity(results.len());
    for (i, result) in results.into_iter().enumerate() {
        let mut page = Page::new(i as u32 + 1, result);
        if let Some(path) = images.get(i) {
            let image = image::open(path).map_err(|source| unlayout::Error::Image {
                path: path.clone(),
                source,
            })?;
            page = page.with_image(image);
        }
        pages.push(page);
    }
    Ok(pages)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}
