use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use nametag::{CultureType, NameInput};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("error: no name provided (pass NAME words, --json, or --samples)")]
    MissingInput,

    #[error("error: failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("error: invalid name record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error: failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl CliError {
    /// Process exit code: 2 for usage errors, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingInput | CliError::Json(_) => 2,
            CliError::Read { .. } | CliError::Write(_) => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Culture {
    ChineseEnglish,
    Malay,
    Indian,
}

impl From<Culture> for CultureType {
    fn from(culture: Culture) -> Self {
        match culture {
            Culture::ChineseEnglish => CultureType::ChineseEnglish,
            Culture::Malay => CultureType::Malay,
            Culture::Indian => CultureType::Indian,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Fit a legal name into a 17-character name tag.
#[derive(Parser, Debug)]
#[command(name = "nametag", version, about, long_about = None)]
pub struct Args {
    /// Full name as printed on the NRIC.
    #[arg(value_name = "NAME")]
    pub name: Vec<String>,

    /// Naming convention that decides which rules apply.
    #[arg(short, long, value_enum, default_value_t = Culture::ChineseEnglish)]
    pub culture: Culture,

    /// Position (0-based) of a surname token. Repeat or comma-separate for
    /// compound surnames, including BIN, BTE, D/O and S/O.
    #[arg(short, long = "surname", value_name = "INDEX", value_delimiter = ',')]
    pub surname_indices: Vec<usize>,

    /// MDES rank, e.g. ME1T, ME4-1, ME7.
    #[arg(short, long, default_value = "")]
    pub rank: String,

    /// Print the MDES rank before the name.
    #[arg(long)]
    pub mdes: bool,

    /// Print DR before the name. Overrides --mdes.
    #[arg(long)]
    pub doctor: bool,

    /// Read a JSON name record from FILE, or from stdin when FILE is `-`.
    #[arg(long, value_name = "FILE", conflicts_with = "name")]
    pub json: Option<PathBuf>,

    /// Print the reference samples and their labels.
    #[arg(long)]
    pub samples: bool,

    /// Show how each rule changed the name.
    #[arg(short, long)]
    pub trace: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Force ANSI color output.
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn use_color(&self) -> bool {
        if self.color {
            return true;
        }
        if self.no_color {
            return false;
        }
        io::stdout().is_terminal()
    }

    /// Build the name record from the JSON source or the flags.
    pub fn name_input(&self) -> Result<NameInput, CliError> {
        if let Some(path) = &self.json {
            return read_json_input(path);
        }

        let name = self.name.join(" ");
        if name.trim().is_empty() {
            return Err(CliError::MissingInput);
        }

        Ok(NameInput {
            name,
            culture: self.culture.into(),
            surname_indices: self.surname_indices.clone(),
            rank: self.rank.clone(),
            // The doctor title replaces the MDES rank.
            is_mdes: self.mdes && !self.doctor,
            is_doctor: self.doctor,
        })
    }
}

fn read_json_input(path: &Path) -> Result<NameInput, CliError> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read { source_name: "stdin".to_string(), source })?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read { source_name: path.display().to_string(), source })?
    };

    Ok(serde_json::from_str(&raw)?)
}
