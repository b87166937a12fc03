use crate::core::constants::{SAVE_FILE_NAME, SAVE_VERSION_MAGIC};
use crate::scores::HighScores;
use crate::utils::persistence::data_dir;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Manages saving and loading the high-score table with a checksummed binary format
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a SaveManager writing to the platform config directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self::with_path(data_dir()?.join(SAVE_FILE_NAME)))
    }

    /// Creates a SaveManager writing to an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    /// Saves the table to disk with checksum verification
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Score region: signature + table (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, scores: &HighScores) -> io::Result<()> {
        let data = scores.to_sram();
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(data);
        let checksum = hasher.finalize();

        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        tracing::debug!(path = %self.save_path.display(), "high scores saved");
        Ok(())
    }

    /// Loads the table from disk with checksum verification
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The version magic is incorrect
    /// - The checksum verification fails
    pub fn load(&self) -> io::Result<HighScores> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);
        if data_len > 1024 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Implausible save length: {}", data_len),
            ));
        }

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        Ok(HighScores::from_sram(&data))
    }

    /// Loads the table, treating any problem as "no save yet".
    pub fn load_or_default(&self) -> HighScores {
        match self.load() {
            Ok(scores) => scores,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HighScores::default(),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.save_path.display(), "ignoring unreadable save file");
                HighScores::default()
            }
        }
    }

    /// Checks if a save file exists
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Overwrite a stored table with zeros, keeping the file valid.
    ///
    /// Returns false if there was nothing saved yet.
    pub fn reset_scores(&self) -> io::Result<bool> {
        if !self.save_exists() {
            return Ok(false);
        }
        let mut scores = self.load_or_default();
        scores.reset();
        self.save(&scores)?;
        tracing::info!(path = %self.save_path.display(), "high scores reset");
        Ok(true)
    }
}
