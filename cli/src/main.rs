//! wikisync CLI - document to wiki markup converter

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use wikisync::{
    parse_file_with_options, ConverterRegistry, ConvertOptions, FileStore, JsonFormat,
    ParseOptions, RenderOptions, SyncSession,
};

#[derive(Parser)]
#[command(name = "wikisync")]
#[command(version)]
#[command(about = "Convert rich-text documents to HTML, Markdown, and wiki markup", long_about = None)]
struct Cli {
    /// Input JSON document
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, env = "WIKISYNC_FORMAT", default_value = "html")]
    format: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to the given format
    Convert {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format (html, markdown, wikitext)
        #[arg(short, long, env = "WIKISYNC_FORMAT", default_value = "html")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Convert a document to HTML
    Html {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Convert a document to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Convert a document to Wikitext
    Wikitext {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Dump the structured body as JSON
    Inspect {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document statistics
    Info {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Render a document in its saved format and show the saved link
    Sync {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Property file (defaults to <FILE>.wikisync.json)
        #[arg(long, env = "WIKISYNC_STORE", value_name = "FILE")]
        store: Option<PathBuf>,

        /// Print the sidebar state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the saved format and print the new markup
    SetFormat {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// New format (html, markdown, wikitext)
        #[arg(value_name = "FORMAT")]
        format: String,

        /// Property file (defaults to <FILE>.wikisync.json)
        #[arg(long, env = "WIKISYNC_STORE", value_name = "FILE")]
        store: Option<PathBuf>,
    },

    /// Save the destination link for a document
    SetLink {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Destination link
        #[arg(value_name = "URL")]
        link: String,

        /// Property file (defaults to <FILE>.wikisync.json)
        #[arg(long, env = "WIKISYNC_STORE", value_name = "FILE")]
        store: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

/// Rendering flags shared by the conversion commands.
#[derive(clap::Args, Clone)]
struct StyleArgs {
    /// Spaces per list nesting level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Markdown list marker
    #[arg(long, default_value_t = '*')]
    list_marker: char,

    /// Escape characters that are special in the output dialect
    #[arg(long)]
    escape: bool,

    /// Repair invalid input instead of failing
    #[arg(long)]
    lenient: bool,
}

impl Default for StyleArgs {
    fn default() -> Self {
        Self {
            indent: 2,
            list_marker: '*',
            escape: false,
            lenient: false,
        }
    }
}

impl StyleArgs {
    fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_indent_width(self.indent)
            .with_list_marker(self.list_marker)
            .with_escaping(self.escape)
    }

    fn parse_options(&self) -> ParseOptions {
        if self.lenient {
            ParseOptions::new().lenient()
        } else {
            ParseOptions::new()
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            format,
            output,
            style,
        }) => cmd_convert(&input, &format, output.as_deref(), &style),
        Some(Commands::Html {
            input,
            output,
            style,
        }) => cmd_convert(&input, "html", output.as_deref(), &style),
        Some(Commands::Markdown {
            input,
            output,
            style,
        }) => cmd_convert(&input, "markdown", output.as_deref(), &style),
        Some(Commands::Wikitext { input, output }) => {
            cmd_convert(&input, "wikitext", output.as_deref(), &StyleArgs::default())
        }
        Some(Commands::Inspect {
            input,
            output,
            compact,
        }) => cmd_inspect(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Sync { input, store, json }) => cmd_sync(&input, store.as_deref(), json),
        Some(Commands::SetFormat {
            input,
            format,
            store,
        }) => cmd_set_format(&input, &format, store.as_deref()),
        Some(Commands::SetLink { input, link, store }) => {
            cmd_set_link(&input, &link, store.as_deref())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, &cli.format, None, &StyleArgs::default())
            } else {
                println!("{}", "Usage: wikisync <FILE> [--format FORMAT]".yellow());
                println!("       wikisync --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    format: &str,
    output: Option<&Path>,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = convert_document(input, format, style)?;
    write_output(output, &content)
}

fn convert_document(
    input: &Path,
    format: &str,
    style: &StyleArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let doc = parse_file_with_options(input, style.parse_options())?;

    let registry = ConverterRegistry::default();
    let options = ConvertOptions::new().with_render_options(style.render_options());
    let result = registry.convert_with_options(format, &doc, &options)?;
    log::debug!(
        "Rendered {} bytes of {}",
        result.content_len(),
        result.mime_type
    );

    Ok(result.content)
}

fn cmd_inspect(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = wikisync::parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = wikisync::render::structure_to_json(&doc, format)?;
    write_output(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient so statistics are shown even for slightly broken input
    let result = wikisync::WikiSync::new().lenient().parse(input)?;
    let stats = result.stats();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = result.document.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Elements".bold(), result.document.body.len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_group_count,
        stats.list_item_count
    );
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Rules".bold(), stats.horizontal_rule_count);
    println!("{}: {}", "Unsupported".bold(), stats.unsupported_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_sync(input: &Path, store: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = wikisync::parse_file(input)?;
    let session = open_session(input, store)?;
    let state = session.open(&doc)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!("{}: {}", "Format".bold(), state.format);
    if state.link.is_empty() {
        println!("{}: {}", "Link".bold(), "(none)".dimmed());
    } else {
        println!("{}: {}", "Link".bold(), state.link);
    }
    println!("{}", "─".repeat(40).dimmed());
    emit(&mut io::stdout().lock(), &state.markup)?;

    Ok(())
}

fn cmd_set_format(
    input: &Path,
    format: &str,
    store: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = wikisync::parse_file(input)?;
    let mut session = open_session(input, store)?;
    let markup = session.change_format(&doc, format)?;

    eprintln!("{} {}", "Saved format".green(), format.to_lowercase());
    emit(&mut io::stdout().lock(), &markup)?;

    Ok(())
}

fn cmd_set_link(
    input: &Path,
    link: &str,
    store: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(input, store)?;
    session.save_destination(link)?;

    println!(
        "{} {}",
        "Saved link to".green(),
        session.store().path().display()
    );

    Ok(())
}

fn open_session(
    input: &Path,
    store: Option<&Path>,
) -> Result<SyncSession<FileStore>, Box<dyn std::error::Error>> {
    let path = store
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_store_path(input));
    log::debug!("Using property file {}", path.display());
    Ok(SyncSession::new(FileStore::open(path)?))
}

/// Property file kept next to the document: `notes.json` -> `notes.wikisync.json`.
fn default_store_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{}.wikisync.json", stem))
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        emit(&mut io::stdout().lock(), content)?;
    }
    Ok(())
}

/// Write conversion output exactly as produced, with no added newline.
fn emit<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    out.write_all(content.as_bytes())?;
    out.flush()
}

fn cmd_version() {
    println!("{} {}", "wikisync".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document to wiki markup converter");
    println!();
    println!("Formats: {}", ConverterRegistry::default().formats().join(", "));
    println!("License: MIT");
}
