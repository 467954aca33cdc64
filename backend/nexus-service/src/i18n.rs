//! Server-owned translations.
//!
//! Only strings the backend itself emits live here (conversation seed
//! message, bio prompts and fallbacks); all other copy belongs to clients.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pt,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    pub fn from_str(value: &str) -> Self {
        match value {
            "pt" => Language::Pt,
            _ => Language::En,
        }
    }
}

/// Placeholder message seeding a conversation bootstrapped by a new follow.
pub fn start_conversation_prompt(lang: Language, name: &str) -> String {
    match lang {
        Language::En => format!("You can now chat with {}.", name),
        Language::Pt => format!("Você já pode conversar com {}.", name),
    }
}

/// Prompt sent to the text model when generating a profile bio.
pub fn bio_prompt(lang: Language, interests: &str) -> String {
    match lang {
        Language::En => format!(
            "Create a short, cool, and engaging social media bio (max 150 characters) \
             for a person interested in: {}. Do not use hashtags. Be creative and modern.",
            interests
        ),
        Language::Pt => format!(
            "Crie uma biografia curta, legal e envolvente para redes sociais \
             (máximo de 150 caracteres) para uma pessoa interessada em: {}. \
             Não use hashtags. Seja criativo e moderno.",
            interests
        ),
    }
}

/// Shown when the generative-media credential is not configured.
pub fn bio_unavailable(lang: Language) -> &'static str {
    match lang {
        Language::En => "AI features are currently unavailable.",
        Language::Pt => "Os recursos de IA estão indisponíveis no momento.",
    }
}

/// Shown when the upstream bio generation call fails.
pub fn bio_failed(lang: Language) -> &'static str {
    match lang {
        Language::En => "Failed to generate bio. Please try again.",
        Language::Pt => "Falha ao gerar a biografia. Tente novamente.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_defaults_to_english() {
        assert_eq!(Language::from_str("de"), Language::En);
        assert_eq!(Language::from_str("pt"), Language::Pt);
    }

    #[test]
    fn seed_message_substitutes_name() {
        let msg = start_conversation_prompt(Language::En, "lara");
        assert_eq!(msg, "You can now chat with lara.");
        let msg = start_conversation_prompt(Language::Pt, "lara");
        assert!(msg.contains("lara"));
    }

    #[test]
    fn bio_prompt_embeds_interests_and_skips_hashtags_instruction() {
        let prompt = bio_prompt(Language::En, "climbing, analog photography");
        assert!(prompt.contains("climbing, analog photography"));
        assert!(prompt.contains("Do not use hashtags"));
    }
}
