//! Generation request types, one per content category.
//!
//! Field names follow the JSON bodies sent by the web client: the storyline
//! and backstory forms use camelCase keys, the lore form uses snake_case.
//! Every field has a default so a partially filled body still deserializes.
//! A field that is `null` or has the wrong JSON type takes its own default
//! without affecting its neighbours; presence checks happen later, in
//! category validation.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Tone substituted when a storyline request does not name one.
pub const DEFAULT_TONE: &str = "Neutral";

/// Target word count substituted when a storyline request does not give one.
pub const DEFAULT_STORY_LENGTH: u64 = 500;

/// World name substituted when a lore request does not give one.
pub const DEFAULT_LORE_NAME: &str = "Unnamed Lore";

/// Deserialize a field, falling back to its default on `null` or a type mismatch.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// The three kinds of content the service can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Storyline,
    Backstory,
    Lore,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Storyline, Category::Backstory, Category::Lore];

    /// HTTP route serving this category.
    pub fn path(&self) -> &'static str {
        match self {
            Category::Storyline => "/generate_storyline",
            Category::Backstory => "/generate_backstory",
            Category::Lore => "/generate_lore",
        }
    }

    /// Key of the single-entry JSON object wrapping the generated text.
    pub fn result_key(&self) -> &'static str {
        match self {
            Category::Storyline => "story",
            Category::Backstory => "backstory",
            Category::Lore => "lore",
        }
    }

    /// Error reported when a request for this category is incomplete.
    pub fn validation_error(&self) -> ValidationError {
        match self {
            Category::Storyline => ValidationError::MissingStoryPrompt,
            Category::Backstory => ValidationError::IncompleteBackstory,
            Category::Lore => ValidationError::IncompleteLore,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Storyline => write!(f, "storyline"),
            Category::Backstory => write!(f, "backstory"),
            Category::Lore => write!(f, "lore"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "storyline" | "story" => Ok(Category::Storyline),
            "backstory" | "character" => Ok(Category::Backstory),
            "lore" => Ok(Category::Lore),
            other => Err(format!("invalid category: '{other}'")),
        }
    }
}

/// Target length of a storyline.
///
/// The web client sends a number, but the value is only ever rendered into
/// the prompt as text, so a string is accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoryLength {
    Words(serde_json::Number),
    Text(String),
}

impl Default for StoryLength {
    fn default() -> Self {
        StoryLength::Words(DEFAULT_STORY_LENGTH.into())
    }
}

impl fmt::Display for StoryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryLength::Words(n) => write!(f, "{n}"),
            StoryLength::Text(s) => f.write_str(s),
        }
    }
}

/// Body of `POST /generate_storyline`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorylineRequest {
    #[serde(deserialize_with = "or_default")]
    pub story_prompt: String,
    #[serde(deserialize_with = "or_default")]
    pub existing_lore: String,
    #[serde(deserialize_with = "or_default")]
    pub tone: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub story_length: Option<StoryLength>,
}

impl StorylineRequest {
    /// The requested tone, or [`DEFAULT_TONE`].
    pub fn tone(&self) -> &str {
        self.tone.as_deref().unwrap_or(DEFAULT_TONE)
    }

    /// The requested length, or [`DEFAULT_STORY_LENGTH`].
    pub fn story_length(&self) -> StoryLength {
        self.story_length.clone().unwrap_or_default()
    }
}

/// Body of `POST /generate_backstory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackstoryRequest {
    #[serde(deserialize_with = "or_default")]
    pub character_name: String,
    #[serde(deserialize_with = "or_default")]
    pub race: String,
    #[serde(deserialize_with = "or_default")]
    pub role: String,
    #[serde(deserialize_with = "or_default")]
    pub traits: Vec<String>,
    #[serde(deserialize_with = "or_default")]
    pub strengths_weaknesses: String,
}

/// Body of `POST /generate_lore`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoreRequest {
    #[serde(deserialize_with = "or_default")]
    pub content_type: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub lore_name: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub era: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub themes: Vec<String>,
    #[serde(deserialize_with = "or_default")]
    pub tone: Option<String>,
}

impl LoreRequest {
    /// The world name, or [`DEFAULT_LORE_NAME`].
    pub fn lore_name(&self) -> &str {
        self.lore_name.as_deref().unwrap_or(DEFAULT_LORE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_routes_and_keys() {
        assert_eq!(Category::Storyline.path(), "/generate_storyline");
        assert_eq!(Category::Storyline.result_key(), "story");
        assert_eq!(Category::Backstory.path(), "/generate_backstory");
        assert_eq!(Category::Backstory.result_key(), "backstory");
        assert_eq!(Category::Lore.path(), "/generate_lore");
        assert_eq!(Category::Lore.result_key(), "lore");
    }

    #[test]
    fn test_category_validation_messages() {
        assert_eq!(
            Category::Storyline.validation_error().to_string(),
            "Story prompt is required"
        );
        assert_eq!(
            Category::Backstory.validation_error().to_string(),
            "All fields are required"
        );
        assert_eq!(
            Category::Lore.validation_error().to_string(),
            "Missing required fields"
        );
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Storyline".parse::<Category>().unwrap(), Category::Storyline);
        assert_eq!("lore".parse::<Category>().unwrap(), Category::Lore);
        assert!("poem".parse::<Category>().is_err());
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn test_storyline_defaults() {
        let req: StorylineRequest =
            serde_json::from_str(r#"{"storyPrompt": "a lost dragon egg"}"#).unwrap();
        assert_eq!(req.story_prompt, "a lost dragon egg");
        assert_eq!(req.existing_lore, "");
        assert_eq!(req.tone(), "Neutral");
        assert_eq!(req.story_length().to_string(), "500");
    }

    #[test]
    fn test_story_length_accepts_number_or_text() {
        let req: StorylineRequest =
            serde_json::from_str(r#"{"storyPrompt": "x", "storyLength": 750}"#).unwrap();
        assert_eq!(req.story_length().to_string(), "750");

        let req: StorylineRequest =
            serde_json::from_str(r#"{"storyPrompt": "x", "storyLength": "about 300"}"#).unwrap();
        assert_eq!(req.story_length().to_string(), "about 300");
    }

    #[test]
    fn test_backstory_camel_case_fields() {
        let req: BackstoryRequest = serde_json::from_str(
            r#"{"characterName": "Lior", "traits": ["Brave", "Curious"], "strengthsWeaknesses": "Quick; reckless"}"#,
        )
        .unwrap();
        assert_eq!(req.character_name, "Lior");
        assert_eq!(req.traits, vec!["Brave", "Curious"]);
        assert_eq!(req.strengths_weaknesses, "Quick; reckless");
        assert!(req.race.is_empty());
    }

    #[test]
    fn test_lore_name_default_and_null() {
        let req: LoreRequest = serde_json::from_str(r#"{"content_type": "myth"}"#).unwrap();
        assert_eq!(req.lore_name(), "Unnamed Lore");

        let req: LoreRequest = serde_json::from_str(r#"{"lore_name": null}"#).unwrap();
        assert_eq!(req.lore_name(), "Unnamed Lore");

        let req: LoreRequest = serde_json::from_str(r#"{"lore_name": "Eldoria"}"#).unwrap();
        assert_eq!(req.lore_name(), "Eldoria");
    }

    #[test]
    fn test_null_optional_fields_keep_required_ones() {
        let req: StorylineRequest = serde_json::from_str(
            r#"{"storyPrompt": "a lost dragon egg", "existingLore": null, "tone": null, "storyLength": null}"#,
        )
        .unwrap();
        assert_eq!(req.story_prompt, "a lost dragon egg");
        assert_eq!(req.existing_lore, "");
        assert_eq!(req.tone(), "Neutral");
        assert_eq!(req.story_length().to_string(), "500");

        let req: LoreRequest = serde_json::from_str(
            r#"{"content_type": "myth", "era": "bronze age", "tone": "dark", "themes": null}"#,
        )
        .unwrap();
        assert_eq!(req.content_type.as_deref(), Some("myth"));
        assert!(req.themes.is_empty());
    }

    #[test]
    fn test_ill_typed_field_defaults_alone() {
        let req: StorylineRequest =
            serde_json::from_str(r#"{"storyPrompt": 42, "tone": "Grim"}"#).unwrap();
        assert_eq!(req.story_prompt, "");
        assert_eq!(req.tone(), "Grim");

        let req: BackstoryRequest = serde_json::from_str(
            r#"{"characterName": "Lior", "traits": "Brave", "race": ["Elf"]}"#,
        )
        .unwrap();
        assert_eq!(req.character_name, "Lior");
        assert!(req.traits.is_empty());
        assert!(req.race.is_empty());

        let req: StorylineRequest =
            serde_json::from_str(r#"{"storyPrompt": "x", "storyLength": true}"#).unwrap();
        assert_eq!(req.story_length().to_string(), "500");
    }
}
