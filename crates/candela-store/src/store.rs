//! Daily candle partition storage.

use std::path::{Path, PathBuf};

use candela_aggregate::Candle;
use candela_types::{DateRange, Symbol};
use chrono::NaiveDate;
use directories::ProjectDirs;
use thiserror::Error;
use tokio::fs;

use crate::codec::{self, CodecError};

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a directory.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a partition file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a partition file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to delete a partition file or symbol directory.
    #[error("Failed to delete '{path}': {source}")]
    Delete {
        /// The path that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse a partition file.
    #[error("Failed to parse candle file '{path}': {source}")]
    ParseCsv {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying CSV error.
        source: csv_async::Error,
    },

    /// Partition already written.
    #[error("Partition already exists for {symbol} on {day}")]
    PartitionExists {
        /// The symbol.
        symbol: Symbol,
        /// The day.
        day: NaiveDate,
    },

    /// Partition not found.
    #[error("No partition for {symbol} on {day}")]
    PartitionNotFound {
        /// The symbol.
        symbol: Symbol,
        /// The day.
        day: NaiveDate,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Stores one-second candles as one gzipped CSV file per symbol and day.
///
/// Layout: `<base>/candles/<SYMBOL>/<YYYY-MM-DD>.csv.gz`. Partitions are
/// write-once; the upstream archive never revises a published day, so an
/// existing file is treated as final.
#[derive(Debug, Clone)]
pub struct CandleStore {
    /// Base directory for candela data.
    base_path: PathBuf,
    /// Directory holding one subdirectory per symbol.
    candles_path: PathBuf,
}

impl CandleStore {
    /// Creates a new store rooted at the given base path.
    ///
    /// Creates the necessary directories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        let candles_path = base_path.join("candles");

        for path in [&base_path, &candles_path] {
            if !path.exists() {
                std::fs::create_dir_all(path).map_err(|e| StoreError::CreateDir {
                    path: path.clone(),
                    source: e,
                })?;
            }
        }

        Ok(Self {
            base_path,
            candles_path,
        })
    }

    /// Returns the default path for candela data storage.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/candela/`
    /// - macOS: `~/Library/Application Support/candela/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\candela\`
    ///
    /// Falls back to `~/.candela/` if the platform-specific location
    /// cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "candela").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.data_dir().to_path_buf()
        })
    }

    /// Creates a store at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn with_default_path() -> Result<Self> {
        Self::new(Self::default_path())
    }

    /// Returns the base path of the store.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the directory holding a symbol's partitions.
    #[must_use]
    pub fn symbol_path(&self, symbol: &Symbol) -> PathBuf {
        self.candles_path.join(symbol.as_str())
    }

    /// Returns the path of the partition for a symbol and day.
    #[must_use]
    pub fn partition_path(&self, symbol: &Symbol, day: NaiveDate) -> PathBuf {
        self.symbol_path(symbol)
            .join(format!("{}.csv.gz", day.format("%Y-%m-%d")))
    }

    /// Returns true if a partition exists for the symbol and day.
    #[must_use]
    pub fn exists(&self, symbol: &Symbol, day: NaiveDate) -> bool {
        self.partition_path(symbol, day).exists()
    }

    /// Writes a day's candles as a new partition.
    ///
    /// The file is staged under a temporary name and renamed into place, so
    /// readers never observe a half-written partition.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PartitionExists`] if the partition was already
    /// written, or an I/O error if writing fails.
    pub async fn write(&self, symbol: &Symbol, day: NaiveDate, candles: &[Candle]) -> Result<()> {
        let path = self.partition_path(symbol, day);
        if path.exists() {
            return Err(StoreError::PartitionExists {
                symbol: symbol.clone(),
                day,
            });
        }

        let dir = self.symbol_path(symbol);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StoreError::CreateDir {
                path: dir.clone(),
                source: e,
            })?;

        let staged = dir.join(format!("{}.csv.gz.tmp", day.format("%Y-%m-%d")));
        if let Err(e) = codec::write_candles(&staged, candles).await {
            let _ = fs::remove_file(&staged).await;
            return Err(StoreError::WriteFile {
                path: staged,
                source: e,
            });
        }

        fs::rename(&staged, &path)
            .await
            .map_err(|e| StoreError::WriteFile { path, source: e })
    }

    /// Reads the candles of a partition.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PartitionNotFound`] if the partition does not
    /// exist, or an error if the file cannot be read or parsed.
    pub async fn read(&self, symbol: &Symbol, day: NaiveDate) -> Result<Vec<Candle>> {
        let path = self.partition_path(symbol, day);
        if !path.exists() {
            return Err(StoreError::PartitionNotFound {
                symbol: symbol.clone(),
                day,
            });
        }

        match codec::read_candles(&path).await {
            Ok(candles) => Ok(candles),
            Err(CodecError::Io(source)) => Err(StoreError::ReadFile { path, source }),
            Err(CodecError::Csv(source)) => Err(StoreError::ParseCsv { path, source }),
        }
    }

    /// Deletes the partition for a symbol and day.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PartitionNotFound`] if the partition does not
    /// exist, or an I/O error if deletion fails.
    pub async fn delete(&self, symbol: &Symbol, day: NaiveDate) -> Result<()> {
        let path = self.partition_path(symbol, day);
        if !path.exists() {
            return Err(StoreError::PartitionNotFound {
                symbol: symbol.clone(),
                day,
            });
        }

        fs::remove_file(&path)
            .await
            .map_err(|e| StoreError::Delete { path, source: e })
    }

    /// Deletes every stored partition for the symbol within the range.
    ///
    /// Days without a partition are skipped. Returns the number of
    /// partitions deleted.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a deletion fails.
    pub async fn delete_range(&self, symbol: &Symbol, range: &DateRange) -> Result<usize> {
        let mut deleted = 0;

        for day in range.days() {
            let path = self.partition_path(symbol, day);
            if !path.exists() {
                continue;
            }
            fs::remove_file(&path)
                .await
                .map_err(|e| StoreError::Delete { path, source: e })?;
            deleted += 1;
        }

        Ok(deleted)
    }

    /// Deletes every stored partition for the symbol.
    ///
    /// Returns the number of partitions deleted, zero when the symbol has
    /// none.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the symbol directory cannot be removed.
    pub async fn delete_all(&self, symbol: &Symbol) -> Result<usize> {
        let dir = self.symbol_path(symbol);
        if !dir.exists() {
            return Ok(0);
        }

        let count = self.days(symbol).await?.len();
        fs::remove_dir_all(&dir)
            .await
            .map_err(|e| StoreError::Delete { path: dir, source: e })?;

        Ok(count)
    }

    /// Lists the days stored for a symbol, in ascending order.
    ///
    /// A symbol without partitions yields an empty list. Files that do not
    /// look like partitions are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol directory cannot be read.
    pub async fn days(&self, symbol: &Symbol) -> Result<Vec<NaiveDate>> {
        let dir = self.symbol_path(symbol);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&dir).await.map_err(|e| StoreError::ReadDir {
            path: dir.clone(),
            source: e,
        })?;

        let mut days = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::ReadDir {
                path: dir.clone(),
                source: e,
            })?
        {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(stem) = name.strip_suffix(".csv.gz") else {
                continue;
            };
            if let Ok(day) = NaiveDate::parse_from_str(stem, "%Y-%m-%d") {
                days.push(day);
            }
        }

        days.sort_unstable();
        Ok(days)
    }

    /// Lists the symbols present in the store, in lexicographic order.
    ///
    /// Hidden directories and names that are not valid symbols are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be read.
    pub async fn symbols(&self) -> Result<Vec<Symbol>> {
        let mut entries =
            fs::read_dir(&self.candles_path)
                .await
                .map_err(|e| StoreError::ReadDir {
                    path: self.candles_path.clone(),
                    source: e,
                })?;

        let mut symbols = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::ReadDir {
                path: self.candles_path.clone(),
                source: e,
            })?
        {
            let Ok(file_type) = entry.file_type().await else {
                continue;
            };
            if !file_type.is_dir() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Ok(symbol) = Symbol::new(name) {
                symbols.push(symbol);
            }
        }

        symbols.sort_unstable();
        Ok(symbols)
    }

    /// Returns the days in the range that have no stored partition.
    #[must_use]
    pub fn missing_days(&self, symbol: &Symbol, range: &DateRange) -> Vec<NaiveDate> {
        range
            .days()
            .filter(|&day| !self.exists(symbol, day))
            .collect()
    }
}

/// Fallback for determining the home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".candela")
}
