pub mod list;

pub use list::{ListAction, ListEntry, ListView, MarkupPolicy};

use serde::{Deserialize, Serialize};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    #[default]
    Simple,
    Detailed,
    Table,
    Json,
    Html,
}
