use clap::Parser;
use docdump::{DocDumpBuilder, DocDumpError, OutputFormat};
use std::io;
use std::path::PathBuf;

/// Dumps the configuration API of annotated type libraries for documentation generation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Library manifest to document (repeatable)
    #[arg(short, long = "library", required = true)]
    libraries: Vec<PathBuf>,

    /// XML documentation-comment file (repeatable, earlier files win)
    #[arg(short, long)]
    comments: Vec<PathBuf>,

    /// Directory searched for referenced libraries (repeatable)
    #[arg(short, long = "reference-dir")]
    reference_dirs: Vec<PathBuf>,

    /// Ignore all documentation comments
    #[arg(long, default_value_t = false)]
    no_comments: bool,

    /// Output format: xml or json
    #[arg(long, default_value_t = OutputFormat::Xml)]
    format: OutputFormat,

    /// JSON file overriding the annotation vocabulary
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), DocDumpError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut builder = DocDumpBuilder::new()
        .with_comments_disabled(args.no_comments)
        .with_output_format(args.format);
    for library in &args.libraries {
        builder = builder.with_library_file(library);
    }
    for dir in &args.reference_dirs {
        builder = builder.with_reference_dir(dir);
    }
    if !args.no_comments {
        for comments in &args.comments {
            builder = builder.with_comments_file(comments);
        }
    }
    if let Some(path) = &args.vocabulary {
        builder = builder.with_vocabulary_file(path)?;
    }

    let dump = builder.build()?;
    match &args.output {
        Some(path) => dump.generate_to_file(path)?,
        None => dump.generate_to_writer(io::stdout().lock())?,
    }
    Ok(())
}
