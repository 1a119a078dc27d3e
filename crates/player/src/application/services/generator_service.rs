//! Generator Service - requests a character from the engine and normalizes it

use charforge_domain::{normalize, Normalized, StatMethod};
use charforge_shared::{routes, GenerateRequest, PronounChoice};

use crate::application::api::Api;
use crate::application::error::ServiceError;
use crate::ports::outbound::RandomProvider;

/// What the user filled in before pressing generate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateForm {
    pub name: String,
    pub pronouns: PronounChoice,
    /// Used when `pronouns` is [`PronounChoice::Custom`]
    pub custom_pronouns: String,
    pub gender: String,
    /// Stat method label; blank means "4d6"
    pub method: String,
}

impl GenerateForm {
    /// Request body for `POST /api/generate`.
    pub fn to_request(&self) -> GenerateRequest {
        let method = match self.method.trim() {
            "" => StatMethod::default().as_str().to_string(),
            method => method.to_string(),
        };
        GenerateRequest {
            name: Some(self.name.trim().to_string()),
            pronouns: Some(self.pronouns.resolve(Some(&self.custom_pronouns))),
            gender: Some(self.gender.trim().to_string()),
            method: Some(method),
        }
    }
}

/// Fetches generated characters and repairs whatever the engine got wrong.
#[derive(Clone)]
pub struct GeneratorService<R: RandomProvider> {
    api: Api,
    random: R,
}

impl<R: RandomProvider> GeneratorService<R> {
    pub fn new(api: Api, random: R) -> Self {
        Self { api, random }
    }

    pub async fn generate(&self, form: &GenerateForm) -> Result<Normalized, ServiceError> {
        let request = form.to_request();
        let raw = self.api.post_raw(routes::GENERATE, &request).await?;

        let random = self.random.clone();
        let normalized = normalize(raw, &mut |min, max| random.random_range(min, max));
        if normalized.repairs.was_repaired() {
            tracing::debug!(
                repairs = ?normalized.repairs.repairs(),
                "Repaired generated character"
            );
        }
        Ok(normalized)
    }
}
