//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cnc_core::{ToolFields, ToolType, TypeFilter};

/// CNC tool inventory - track the cutting tools loaded on each machine
#[derive(Parser, Debug)]
#[command(name = "cnc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the tool data and config.toml
    #[arg(long, global = true, env = "CNC_TOOLS_DIR")]
    pub data_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List tools, sorted by machine and position
    ///
    /// Examples:
    ///   cnc list                     # Every tool
    ///   cnc list --search haas       # Tools mentioning "haas"
    ///   cnc list --type drill        # Only drills
    List {
        /// Case-insensitive text to look for in name, machine, type, position and notes
        #[arg(short, long, default_value = "")]
        search: String,

        /// Tool type to show (mill, drill, thread-mill, other) or "all"
        #[arg(short = 't', long = "type", default_value = "all")]
        type_filter: TypeFilter,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show a single tool
    Show {
        /// Tool id
        id: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Add a tool
    ///
    /// Examples:
    ///   cnc add --name "Endmill 10" --type mill --machine "Haas VF-2" --position T01
    Add {
        #[command(flatten)]
        tool: ToolArgs,
    },

    /// Edit a tool
    ///
    /// Options that are not given keep their current value; pass an empty
    /// string to clear an optional field.
    Edit {
        /// Tool id
        id: String,

        #[command(flatten)]
        changes: EditArgs,
    },

    /// Remove a tool
    Remove {
        /// Tool id
        id: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Export every tool to a JSON backup
    Export {
        /// Destination file ("-" for stdout); defaults to cnc-tools-<date>.json
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace every tool with the contents of a JSON backup
    Import {
        /// Backup file to read
        file: PathBuf,
    },

    /// List the available tool types
    Types,
}

/// Complete field set for a new tool
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ToolArgs {
    /// Display name
    #[arg(short, long)]
    pub name: String,

    /// Tool type (mill, drill, thread-mill, other)
    #[arg(short = 't', long = "type")]
    pub tool_type: ToolType,

    /// Machine the tool is loaded on
    #[arg(short, long)]
    pub machine: String,

    /// Diameter in mm
    #[arg(short, long)]
    pub diameter: Option<String>,

    /// Length in mm
    #[arg(short, long)]
    pub length: Option<String>,

    /// Magazine slot / tool number, e.g. T01
    #[arg(short, long)]
    pub position: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<ToolArgs> for ToolFields {
    fn from(args: ToolArgs) -> Self {
        ToolFields {
            name: args.name,
            tool_type: args.tool_type,
            machine: args.machine,
            diameter: args.diameter,
            length: args.length,
            position: args.position,
            notes: args.notes,
        }
    }
}

/// Field overrides for an existing tool
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct EditArgs {
    /// Display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Tool type (mill, drill, thread-mill, other)
    #[arg(short = 't', long = "type")]
    pub tool_type: Option<ToolType>,

    /// Machine the tool is loaded on
    #[arg(short, long)]
    pub machine: Option<String>,

    /// Diameter in mm
    #[arg(short, long)]
    pub diameter: Option<String>,

    /// Length in mm
    #[arg(short, long)]
    pub length: Option<String>,

    /// Magazine slot / tool number
    #[arg(short, long)]
    pub position: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl EditArgs {
    /// Overlay the given options on `current`, producing the full field set.
    pub fn apply_to(self, current: ToolFields) -> ToolFields {
        ToolFields {
            name: self.name.unwrap_or(current.name),
            tool_type: self.tool_type.unwrap_or(current.tool_type),
            machine: self.machine.unwrap_or(current.machine),
            diameter: self.diameter.or(current.diameter),
            length: self.length.or(current.length),
            position: self.position.or(current.position),
            notes: self.notes.or(current.notes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
