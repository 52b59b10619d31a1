use std::path::PathBuf;

/// Arguments for the diff command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct DiffArgs {
    /// JSON file with the current instance
    pub instance: PathBuf,

    /// JSON file with the proposal content
    pub proposal: PathBuf,

    /// Output path for the JSON diff report (optional)
    pub output: Option<PathBuf>,

    /// Print the diff table to stdout
    pub print_summary: bool,

    /// Override for the empty-value placeholder
    pub empty_value: Option<String>,

    /// Optional TOML file with rendering options
    pub config: Option<PathBuf>,
}

impl Default for DiffArgs {
    fn default() -> Self {
        Self {
            instance: PathBuf::from("instance.json"),
            proposal: PathBuf::from("proposal.json"),
            output: None,
            print_summary: true,
            empty_value: None,
            config: None,
        }
    }
}
