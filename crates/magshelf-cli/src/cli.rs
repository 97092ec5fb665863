use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use magshelf_core::VERSION;

/// Magshelf - a local catalog of magazine issues
#[derive(Parser)]
#[command(name = "magshelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the catalog database
    #[arg(long, global = true, env = "MAGSHELF_DB")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the catalog database will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Magazine name
    #[arg(long)]
    pub magazine: String,

    /// Month (abbreviation or full name)
    #[arg(long)]
    pub month: String,

    /// Year (two or four digits)
    #[arg(long)]
    pub year: String,

    /// Special-issue note
    #[arg(long, value_name = "TEXT")]
    pub special: Option<String>,

    /// Flag the record as a special issue
    #[arg(long)]
    pub special_issue: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Magazine name
    #[arg(long)]
    pub magazine: Option<String>,

    /// Month (abbreviation or full name)
    #[arg(long)]
    pub month: Option<String>,

    /// Year (two or four digits)
    #[arg(long)]
    pub year: Option<String>,

    /// Special-issue note (empty string clears it)
    #[arg(long, value_name = "TEXT")]
    pub special: Option<String>,

    /// Set or clear the special-issue flag
    #[arg(long, value_name = "BOOL")]
    pub special_issue: Option<bool>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    pub id: i64,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Record ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Exact magazine name
    #[arg(long)]
    pub magazine: Option<String>,

    /// Exact year (ignored when --from or --to is given)
    #[arg(long)]
    pub year: Option<i32>,

    /// First year of a range (inclusive)
    #[arg(long, value_name = "YEAR")]
    pub from: Option<i32>,

    /// Last year of a range (inclusive)
    #[arg(long, value_name = "YEAR")]
    pub to: Option<i32>,

    /// Exact month name (e.g. "March")
    #[arg(long)]
    pub month: Option<String>,

    /// Only special issues
    #[arg(long)]
    pub special_only: bool,

    /// Case-insensitive text search
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Sort column (magazine, month, year, special, created)
    #[arg(long, value_name = "COLUMN", conflicts_with = "chronological")]
    pub sort: Option<String>,

    /// Reverse the column sort
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Sort by year, then calendar month
    #[arg(long)]
    pub chronological: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Comma-delimited file with a header row
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `restore` command
#[derive(Args)]
pub struct RestoreArgs {
    /// JSON backup file
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination file (stdout when omitted)
    #[arg(value_name = "DEST")]
    pub destination: Option<String>,
}

/// Arguments for the `reset` command
#[derive(Args)]
pub struct ResetArgs {
    /// Skip both confirmation prompts
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the catalog database and a default config
    Init(InitArgs),

    /// Add a record
    Add(AddArgs),

    /// Edit an existing record
    Edit(EditArgs),

    /// Delete a record
    Delete(DeleteArgs),

    /// Show a record by ID
    Show(ShowArgs),

    /// List records, with optional filters and sorting
    List(ListArgs),

    /// Summary counts
    Stats(StatsArgs),

    /// Replace the catalog with the rows of a delimited file
    Import(ImportArgs),

    /// Replace the catalog with the records of a JSON backup
    Restore(RestoreArgs),

    /// Write a JSON backup of the catalog
    Export(ExportArgs),

    /// Delete every record
    Reset(ResetArgs),

    /// Check catalog integrity
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
