use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind},
    path::PathBuf,
};

use crate::{
    common::error::PersistError,
    domain::ledger::Ledger,
    io::{reader, writer},
};

/// Where the ledger lives between runs.
pub trait Persistence {
    /// The stored ledger, or an empty one if nothing was stored yet.
    fn load(&self) -> Result<Ledger, PersistError>;

    /// Replaces whatever was stored with `ledger`.
    fn save(&mut self, ledger: &Ledger) -> Result<(), PersistError>;
}

/// A single JSON document on disk, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Persistence for JsonFileStore {
    fn load(&self) -> Result<Ledger, PersistError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Ledger::new());
            }
            Err(e) => return Err(e.into()),
        };

        let accounts = reader::read_accounts(BufReader::new(file))?;
        tracing::info!(path = %self.path.display(), accounts = accounts.len(), "ledger loaded");
        Ok(Ledger::from_accounts(accounts))
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), PersistError> {
        let file = File::create(&self.path)?;
        writer::write_accounts(BufWriter::new(file), ledger.accounts())?;
        tracing::debug!(path = %self.path.display(), accounts = ledger.len(), "ledger saved");
        Ok(())
    }
}

/// Keeps the serialized document in memory. Goes through the same JSON
/// reader and writer as the file store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    document: Option<Vec<u8>>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose saves always fail, for exercising the error path.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn saves(&self) -> usize {
        self.saves
    }

    #[cfg(test)]
    pub(crate) fn document(&self) -> Option<&[u8]> {
        self.document.as_deref()
    }
}

impl Persistence for MemoryStore {
    fn load(&self) -> Result<Ledger, PersistError> {
        match &self.document {
            Some(bytes) => Ok(Ledger::from_accounts(reader::read_accounts(bytes.as_slice())?)),
            None => Ok(Ledger::new()),
        }
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), PersistError> {
        if self.fail_saves {
            return Err(std::io::Error::other("store is read-only").into());
        }
        let mut out = Vec::new();
        writer::write_accounts(&mut out, ledger.accounts())?;
        self.document = Some(out);
        self.saves += 1;
        Ok(())
    }
}
