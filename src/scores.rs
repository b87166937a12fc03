//! Best-score table, one slot per (difficulty, wrap mode) pair.

use crate::core::constants::{HIGH_SCORE_SLOTS, SRAM_SIGNATURE};
use crate::snake::types::Difficulty;
use serde::{Deserialize, Serialize};

/// Size of the persisted region: signature followed by the table.
pub const SRAM_LEN: usize = 2 + HIGH_SCORE_SLOTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScores {
    slots: [u8; HIGH_SCORE_SLOTS],
}

impl HighScores {
    fn slot(difficulty: Difficulty, wrap: bool) -> usize {
        difficulty.index() * 2 + wrap as usize
    }

    pub fn get(&self, difficulty: Difficulty, wrap: bool) -> u8 {
        self.slots[Self::slot(difficulty, wrap)]
    }

    /// Store `candidate` if it beats the current record. Returns true if it did.
    pub fn set_if_greater(&mut self, difficulty: Difficulty, wrap: bool, candidate: u8) -> bool {
        let slot = &mut self.slots[Self::slot(difficulty, wrap)];
        if candidate > *slot {
            *slot = candidate;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.slots = [0; HIGH_SCORE_SLOTS];
    }

    /// Persisted byte region: little-endian signature, then the table.
    pub fn to_sram(&self) -> [u8; SRAM_LEN] {
        let mut bytes = [0u8; SRAM_LEN];
        bytes[..2].copy_from_slice(&SRAM_SIGNATURE.to_le_bytes());
        bytes[2..].copy_from_slice(&self.slots);
        bytes
    }

    /// Parse a persisted region. A missing or wrong signature means
    /// "never saved" and yields an all-zero table.
    pub fn from_sram(bytes: &[u8]) -> Self {
        if bytes.len() < SRAM_LEN || bytes[..2] != SRAM_SIGNATURE.to_le_bytes() {
            return Self::default();
        }
        let mut slots = [0u8; HIGH_SCORE_SLOTS];
        slots.copy_from_slice(&bytes[2..SRAM_LEN]);
        Self { slots }
    }
}
