use pathtree_core::PathRecord;
use pathtree_render::{DuplicateNames, LevelGrouping, RenderOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DOT_FILE: &str = "query_plan.dot";
const HTML_FILE: &str = "query_plan.html";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io { path: PathBuf, err: std::io::Error },
    Parse(pathtree_core::Error),
    Render(pathtree_render::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io { path, err } => write!(f, "I/O error writing {}: {err}", path.display()),
            CliError::Parse(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<pathtree_core::Error> for CliError {
    fn from(value: pathtree_core::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<pathtree_render::Error> for CliError {
    fn from(value: pathtree_render::Error) -> Self {
        Self::Render(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Parse,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    html: bool,
    cluster: bool,
    join_labels: bool,
    strict_names: bool,
    pretty: bool,
    config: Option<String>,
    out_dir: Option<String>,
}

fn usage() -> &'static str {
    "Usage: pathtree [render] [--html] [--cluster] [--join-labels] [--strict-names] [--config <path.json>] [--out-dir <dir>] <input.tsv>\n\
\n\
USAGE:\n\
  pathtree [render] [options] <input.tsv>\n\
  pathtree parse [--pretty] <input.tsv>\n\
\n\
OPTIONS:\n\
  --html             also write query_plan.html (expects query_plan.png next to it)\n\
  --cluster          group levels as bordered clusters instead of same-rank rows\n\
  --join-labels      annotate two-child paths as name(outer⋈inner)\n\
  --strict-names     fail on duplicate path names instead of merging them\n\
  --config <path>    JSON render options (flags override file values)\n\
  --out-dir <dir>    directory for generated files (default: .)\n\
\n\
NOTES:\n\
  - Input is tab-separated, 8 columns, no header: level, name, type, children,\n\
    startup_cost, total_cost, rows, deleted. `\\N` is null, `{a,b}` is a list.\n\
  - Render the DOT file with Graphviz: dot -Tpng query_plan.dot -o query_plan.png\n\
  - Set RUST_LOG=debug for diagnostics on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    // A command name is only recognized in first position.
    match it.peek().map(|s| s.as_str()) {
        Some("render") => {
            it.next();
        }
        Some("parse") => {
            args.command = Command::Parse;
            it.next();
        }
        _ => {}
    }

    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--html" => args.html = true,
            "--cluster" => args.cluster = true,
            "--join-labels" => args.join_labels = true,
            "--strict-names" => args.strict_names = true,
            "--pretty" => args.pretty = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--out-dir" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out_dir = Some(dir.clone());
            }
            other if other.starts_with("--") => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.input.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn build_options(args: &Args) -> Result<RenderOptions, CliError> {
    let mut options = match args.config.as_deref() {
        Some(path) => RenderOptions::from_json_file(path)?,
        None => RenderOptions::default(),
    };
    if args.cluster {
        options.grouping = LevelGrouping::Cluster;
    }
    if args.join_labels {
        options.join_labels = true;
    }
    if args.strict_names {
        options.duplicate_names = DuplicateNames::Reject;
    }
    Ok(options)
}

fn write_file(path: &Path, text: &str) -> Result<(), CliError> {
    std::fs::write(path, text).map_err(|err| CliError::Io {
        path: path.to_path_buf(),
        err,
    })
}

fn print_records(records: &[PathRecord], pretty: bool) -> Result<(), CliError> {
    let out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(out, records)?;
    } else {
        serde_json::to_writer(out, records)?;
    }
    println!();
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let input = args.input.as_deref().ok_or(CliError::Usage(usage()))?;
    let records = pathtree_core::read_records(input)?;

    match args.command {
        Command::Parse => print_records(&records, args.pretty),
        Command::Render => {
            let options = build_options(&args)?;
            let rendered = pathtree_render::render(&records, &options, args.html)?;

            let out_dir = PathBuf::from(args.out_dir.as_deref().unwrap_or("."));
            let dot_path = out_dir.join(DOT_FILE);
            write_file(&dot_path, &rendered.dot)?;
            tracing::debug!(path = %dot_path.display(), bytes = rendered.dot.len(), "wrote DOT");

            println!("DOT file generated: {}", dot_path.display());
            println!("You can render it with Graphviz using:");
            println!(
                "dot -Tpng {} -o {}",
                dot_path.display(),
                out_dir.join(&options.html.image_file).display()
            );

            if let Some(html) = rendered.html {
                let html_path = out_dir.join(HTML_FILE);
                write_file(&html_path, &html)?;
                println!("HTML file generated: {}", html_path.display());
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
