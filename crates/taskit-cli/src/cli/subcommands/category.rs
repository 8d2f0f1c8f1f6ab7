use clap::Subcommand;

/// Category entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// Create a category.
    Add { name: String },
    /// List categories with their task counts.
    List,
    /// Rename a category.
    Rename { id: String, name: String },
    /// Delete a category no task refers to.
    Delete { id: String },
}
