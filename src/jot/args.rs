use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jot")]
#[command(about = "Command-line client for the Scratch notes service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes
    #[command(alias = "ls")]
    List {
        /// Filter to notes containing this term
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search notes (dedicated command)
    Search { term: String },

    /// Find & replace across the currently matching notes
    #[command(alias = "fr")]
    Replace {
        /// Text to find (also filters which notes are touched)
        find: String,

        /// Replacement text (first occurrence per note)
        replace: String,
    },

    /// Create a new note
    #[command(alias = "n")]
    Create {
        /// Content of the note (opens editor if not provided)
        #[arg(required = false)]
        content: Option<String>,

        /// Attach a local file
        #[arg(long, value_name = "FILE")]
        attach: Option<std::path::PathBuf>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// View a note
    #[command(alias = "v")]
    View {
        /// Note id (or unique prefix)
        id: String,
    },

    /// Edit a note in the editor
    #[command(alias = "e")]
    Edit {
        /// Note id (or unique prefix)
        id: String,
    },

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note id (or unique prefix)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Upload a file and attach it to a note
    Attach {
        /// Note id (or unique prefix)
        id: String,

        /// File to upload
        file: std::path::PathBuf,
    },

    /// Store an API token for subsequent commands
    Login {
        /// Bearer token issued by the notes service
        #[arg(long)]
        token: String,
    },

    /// Forget the stored API token
    Logout,

    /// Get or set configuration
    Config {
        /// Configuration key (api-url, max-attachment-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
