//! Setup Registry
//!
//! Setups live as subdirectories of a registry root, `~/.setups` by default.
//! Each setup directory holds its script in a `.config.setup` file. This
//! module lists the available setups, locates one by name, and runs its
//! script with a runner rooted at the setup directory.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::PathBuf;

use thiserror::Error;

use crate::interpreter::{colors, Runner};
use crate::parser::{self, ParseError};

/// The script file inside each setup directory.
pub const CONFIG_FILE: &str = ".config.setup";

#[derive(Debug, Error)]
pub enum SetupsError {
    #[error("setup {name} does not exist")]
    MissingSetup { name: String },

    #[error("setup {name} does not contain a configuration file")]
    MissingConfig { name: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Setups {
    root: PathBuf,
}

impl Setups {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The registry under the user's home directory.
    pub fn from_home() -> Self {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(home.join(".setups"))
    }

    /// Names of the available setups, sorted.
    pub fn list(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// The directory of a setup, if it exists.
    pub fn dir(&self, name: &str) -> Result<PathBuf, SetupsError> {
        let directory = self.root.join(name);
        if !directory.is_dir() {
            return Err(SetupsError::MissingSetup {
                name: name.to_string(),
            });
        }
        Ok(directory)
    }

    /// Run a setup by name, returning the exit status.
    ///
    /// Lex and parse failures reject the whole script before any command
    /// runs; runtime failures stop it at the failing command.
    pub fn run(&self, name: &str) -> i32 {
        match self.execute(name) {
            Ok(status) => status,
            Err(error) => {
                eprintln!("{}", colors::red(&error.to_string()));
                1
            }
        }
    }

    fn execute(&self, name: &str) -> Result<i32, SetupsError> {
        let directory = self.dir(name)?;
        let config = File::open(directory.join(CONFIG_FILE)).map_err(|_| {
            SetupsError::MissingConfig {
                name: name.to_string(),
            }
        })?;
        let sequence = parser::parse(BufReader::new(config))?;
        Ok(Runner::new(directory).run(&sequence))
    }
}
