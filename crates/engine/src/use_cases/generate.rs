//! Generate character use case.

use std::sync::Arc;

use charforge_domain::{build_character, CharacterRecord, CharacterRequest};

use crate::infrastructure::ports::RandomPort;

/// Rolls a new random character.
pub struct GenerateCharacter {
    random: Arc<dyn RandomPort>,
}

impl GenerateCharacter {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn execute(&self, request: CharacterRequest) -> CharacterRecord {
        let record = build_character(&request, &mut |min, max| self.random.gen_range(min, max));
        tracing::debug!(
            name = %record.name,
            class = %record.class_name,
            method = %record.stat_method,
            "Generated character"
        );
        record
    }
}
