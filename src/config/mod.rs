#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::domain::ports::OfflineTable;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extensions, validate_non_empty_string, validate_path};

/// Offline tables need a muscle key and a readable-looking JSON path.
pub(crate) fn validate_offline_tables(field_name: &str, tables: &[OfflineTable]) -> Result<()> {
    for table in tables {
        validate_non_empty_string(&format!("{}.muscle", field_name), &table.muscle)?;
        validate_path(&format!("{}.path", field_name), &table.path)?;
        validate_file_extensions(&format!("{}.path", field_name), &[table.path.as_str()], &["json"])?;
    }
    Ok(())
}
