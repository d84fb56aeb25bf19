use std::time::{SystemTime, UNIX_EPOCH};
use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeededOrNot {
    Seeded(u64),
    #[default]
    Unseeded,
}

impl SeededOrNot {
    // Unseeded draws from the wall clock, so every run deals differently
    pub fn resolve(&self) -> u64 {
        match self {
            SeededOrNot::Seeded(seed) => *seed,
            SeededOrNot::Unseeded => {
                let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
                now.as_nanos() as u64
            }
        }
    }
}
