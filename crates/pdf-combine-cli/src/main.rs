use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use pdf_combine::{CombineError, CombineOptions, CombineStatistics};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdfc", about = "Combine PDF files into one printable document", version)]
struct Cli {
    /// Input PDF file(s), in output order
    #[arg(short, long, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Output PDF file (".pdf" is appended when missing)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Layout mode (required unless given by --config)
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Fit policy (required unless given by --config)
    #[arg(long, value_enum)]
    fit: Option<FitArg>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Leave page content streams uncompressed
    #[arg(long)]
    no_compress: bool,

    /// Load options from a JSON file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Open the output file when done
    #[arg(long)]
    open: bool,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    Double,
    Slides,
}

#[derive(Clone, Copy, ValueEnum)]
enum FitArg {
    Contain,
    Cover,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl From<ModeArg> for pdf_combine::LayoutMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Single => Self::Single,
            ModeArg::Double => Self::Double,
            ModeArg::Slides => Self::Slides,
        }
    }
}

impl From<FitArg> for pdf_combine::FitPolicy {
    fn from(arg: FitArg) -> Self {
        match arg {
            FitArg::Contain => Self::Contain,
            FitArg::Cover => Self::Cover,
        }
    }
}

impl From<PaperArg> for pdf_combine::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = build_options(&cli).await?;
    options.validate()?;
    let output = resolve_output(&cli)?;

    if let Some(path) = &cli.save_config {
        options.save(path).await?;
        log::info!("Saved options to {}", path.display());
    }

    // Load all input PDFs
    let documents = pdf_combine::load_multiple_pdfs(&options.input_files).await?;

    // Calculate and show statistics
    let stats = pdf_combine::calculate_statistics(&documents, &options)?;
    print_statistics(&stats);

    let Some(output) = output else {
        return Ok(());
    };

    let combined = pdf_combine::combine(&documents, &options).await?;
    pdf_combine::save_pdf(combined, &output).await?;
    println!("Combined → {}", output.display());

    if cli.open {
        open_file(&output).with_context(|| format!("Failed to open {}", output.display()))?;
    }

    Ok(())
}

/// Merge the options file (if any) with the command line flags.
async fn build_options(cli: &Cli) -> Result<CombineOptions> {
    let (mut options, from_file) = match &cli.config {
        Some(path) => {
            let options = CombineOptions::load(path)
                .await
                .with_context(|| format!("Failed to load {}", path.display()))?;
            (options, true)
        }
        None => (CombineOptions::default(), false),
    };

    if !cli.input.is_empty() {
        options.input_files = cli.input.clone();
    }

    match cli.mode {
        Some(mode) => options.layout_mode = mode.into(),
        None if !from_file => {
            return Err(CombineError::Config("No layout mode specified".to_string()).into());
        }
        None => {}
    }
    match cli.fit {
        Some(fit) => options.fit_policy = fit.into(),
        None if !from_file => {
            return Err(CombineError::Config("No fit policy specified".to_string()).into());
        }
        None => {}
    }
    if let Some(paper) = cli.paper {
        options.paper_size = paper.into();
    }
    if cli.no_compress {
        options.compress = false;
    }

    Ok(options)
}

/// Output path to write, or `None` for a statistics-only run.
fn resolve_output(cli: &Cli) -> Result<Option<PathBuf>> {
    if cli.stats_only {
        return Ok(None);
    }
    let output = cli
        .output
        .as_deref()
        .map(with_pdf_extension)
        .ok_or_else(|| CombineError::Config("No output file specified".to_string()))?;
    Ok(Some(output))
}

fn with_pdf_extension(path: &Path) -> PathBuf {
    let has_pdf_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if has_pdf_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".pdf");
        PathBuf::from(name)
    }
}

fn print_statistics(stats: &CombineStatistics) {
    println!("Combine Statistics:");
    println!("  Source documents: {}", stats.source_documents);
    println!("  Source pages: {}", stats.source_pages);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    for (title, page) in &stats.bookmarks {
        println!("  Bookmark: {} (page {})", title, page);
    }
}

fn open_file(path: &Path) -> Result<()> {
    let mut command = if cfg!(target_os = "windows") {
        let mut command = std::process::Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else if cfg!(target_os = "macos") {
        std::process::Command::new("open")
    } else {
        std::process::Command::new("xdg-open")
    };
    let status = command.arg(path).status()?;
    if !status.success() {
        bail!("opener exited with {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_appended() {
        assert_eq!(with_pdf_extension(Path::new("out")), PathBuf::from("out.pdf"));
        assert_eq!(
            with_pdf_extension(Path::new("notes.v2")),
            PathBuf::from("notes.v2.pdf")
        );
        assert_eq!(
            with_pdf_extension(Path::new("merged.PDF")),
            PathBuf::from("merged.PDF")
        );
    }

    #[tokio::test]
    async fn test_mode_and_fit_required_without_config() {
        let cli = Cli::parse_from(["pdfc", "-i", "a.pdf", "-o", "out.pdf"]);
        let err = build_options(&cli).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CombineError>(),
            Some(CombineError::Config(_))
        ));
    }

    #[test]
    fn test_output_required_unless_stats_only() {
        let cli = Cli::parse_from(["pdfc", "-i", "a.pdf", "--mode", "single", "--fit", "contain"]);
        let err = resolve_output(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CombineError>(),
            Some(CombineError::Config(_))
        ));

        let cli = Cli::parse_from(["pdfc", "-i", "a.pdf", "--stats-only"]);
        assert_eq!(resolve_output(&cli).unwrap(), None);

        let cli = Cli::parse_from(["pdfc", "-i", "a.pdf", "-o", "merged"]);
        assert_eq!(
            resolve_output(&cli).unwrap(),
            Some(PathBuf::from("merged.pdf"))
        );
    }

    #[tokio::test]
    async fn test_flags_build_options() {
        let cli = Cli::parse_from([
            "pdfc", "-i", "a.pdf", "-i", "b.pdf", "--mode", "double", "--fit", "cover",
            "--paper", "letter", "--no-compress",
        ]);
        let options = build_options(&cli).await.unwrap();
        assert_eq!(options.input_files.len(), 2);
        assert_eq!(options.layout_mode, pdf_combine::LayoutMode::Double);
        assert_eq!(options.fit_policy, pdf_combine::FitPolicy::Cover);
        assert_eq!(options.paper_size, pdf_combine::PaperSize::Letter);
        assert!(!options.compress);
    }
}
