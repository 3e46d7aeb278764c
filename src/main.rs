use anyhow::Result;
use clap::{Parser, Subcommand};
use ggit::areas::repository::Repository;
use ggit::artifacts::objects::object_type::ObjectType;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
const LOG_ENV: &str = "GGIT_LOG";

#[derive(Parser)]
#[command(
    name = "ggit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal git implementation",
    long_about = "This is a minimal implementation of git, written in Rust. \
    It covers repository initialization, content-addressed blob storage and the staging index.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Add files to the index",
        long_about = "This command stages files for the next commit. \
        Directories are expanded to every file beneath them."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to add")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command prints the current branch and the files staged in the index."
    )]
    Status,
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA (full or abbreviated) of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(
            short = 't',
            long = "type",
            default_value = "blob",
            value_parser = parse_object_type,
            help = "The object type to hash as"
        )]
        object_type: ObjectType,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "commit",
        about = "Record changes to the repository",
        long_about = "Commit creation is not implemented yet."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(
        name = "log",
        about = "Show commit logs",
        long_about = "Commit history is not implemented yet."
    )]
    Log,
}

fn parse_object_type(value: &str) -> Result<ObjectType> {
    ObjectType::try_from(value)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let pwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { path } => {
            let path = path.map(|path| pwd.join(path)).unwrap_or_else(|| pwd.clone());
            let mut repository = Repository::new(&path, Box::new(std::io::stdout()))?;

            repository.init()?
        }
        Commands::Add { paths } => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;
            let paths = paths.iter().map(|path| pwd.join(path)).collect::<Vec<_>>();

            let report = repository.add(&paths).await?;
            if !report.failed.is_empty() {
                anyhow::bail!("failed to add {} path(s)", report.failed.len());
            }
            if !report.is_success() {
                anyhow::bail!("no files added");
            }
        }
        Commands::Status => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            repository.status().await?
        }
        Commands::CatFile { sha } => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            repository.cat_file(&sha)?
        }
        Commands::HashObject {
            write,
            object_type,
            file,
        } => {
            let mut repository = if write {
                Repository::discover(&pwd, Box::new(std::io::stdout()))?
            } else {
                Repository::new(&pwd, Box::new(std::io::stdout()))?
            };

            repository.hash_object(&pwd.join(file), object_type, write)?
        }
        Commands::Commit { .. } | Commands::Log => println!("Not implemented yet"),
    }

    Ok(())
}
