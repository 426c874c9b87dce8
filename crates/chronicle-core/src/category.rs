//! Per-category request handling: lenient parsing, validation, prompt.
//!
//! [`GenerationCategory`] bundles everything that differs between the three
//! endpoints, so the HTTP layer needs one generic handler and the CLI one
//! generic code path.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use chronicle_types::error::ValidationError;
use chronicle_types::generation::{BackstoryRequest, Category, LoreRequest, StorylineRequest};

use crate::prompt;

/// One kind of generated content.
pub trait GenerationCategory: Send + Sync + 'static {
    /// Typed request body. Every field must have a default.
    type Request: DeserializeOwned + Default + Send;

    /// Route, result key and display name.
    const CATEGORY: Category;

    /// Check required fields. No other processing happens on failure.
    fn validate(request: &Self::Request) -> Result<(), ValidationError>;

    /// Render the prompt for a validated request.
    fn build_prompt(request: &Self::Request) -> String;

    /// Read the typed request out of a JSON object.
    ///
    /// A `null` or ill-typed field takes its own default. The body as a
    /// whole falls back to the all-defaults request only if the request
    /// type itself refuses it.
    fn parse(fields: Map<String, Value>) -> Self::Request {
        serde_json::from_value(Value::Object(fields)).unwrap_or_else(|e| {
            tracing::debug!(category = %Self::CATEGORY, error = %e, "Ill-typed request body, using defaults");
            Self::Request::default()
        })
    }

    /// Parse, validate and build the prompt in one step.
    fn render(fields: Map<String, Value>) -> Result<String, ValidationError> {
        let request = Self::parse(fields);
        Self::validate(&request)?;
        Ok(Self::build_prompt(&request))
    }
}

/// `POST /generate_storyline`.
pub struct Storyline;

/// `POST /generate_backstory`.
pub struct Backstory;

/// `POST /generate_lore`.
pub struct Lore;

impl GenerationCategory for Storyline {
    type Request = StorylineRequest;
    const CATEGORY: Category = Category::Storyline;

    fn validate(request: &StorylineRequest) -> Result<(), ValidationError> {
        if request.story_prompt.is_empty() {
            return Err(Self::CATEGORY.validation_error());
        }
        Ok(())
    }

    fn build_prompt(request: &StorylineRequest) -> String {
        prompt::build_storyline_prompt(
            &request.story_prompt,
            &request.existing_lore,
            request.tone(),
            request.story_length(),
        )
    }
}

impl GenerationCategory for Backstory {
    type Request = BackstoryRequest;
    const CATEGORY: Category = Category::Backstory;

    fn validate(request: &BackstoryRequest) -> Result<(), ValidationError> {
        let complete = [
            &request.character_name,
            &request.race,
            &request.role,
            &request.strengths_weaknesses,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
            && !request.traits.is_empty();

        if complete {
            Ok(())
        } else {
            Err(Self::CATEGORY.validation_error())
        }
    }

    fn build_prompt(request: &BackstoryRequest) -> String {
        prompt::build_backstory_prompt(
            request.character_name.trim(),
            request.race.trim(),
            request.role.trim(),
            &request.traits,
            request.strengths_weaknesses.trim(),
        )
    }
}

impl GenerationCategory for Lore {
    type Request = LoreRequest;
    const CATEGORY: Category = Category::Lore;

    fn validate(request: &LoreRequest) -> Result<(), ValidationError> {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());

        if present(&request.content_type) && present(&request.era) && present(&request.tone) {
            Ok(())
        } else {
            Err(Self::CATEGORY.validation_error())
        }
    }

    fn build_prompt(request: &LoreRequest) -> String {
        prompt::build_lore_prompt(
            request.content_type.as_deref().unwrap_or_default(),
            request.lore_name(),
            request.era.as_deref().unwrap_or_default(),
            &request.themes,
            request.tone.as_deref().unwrap_or_default(),
        )
    }
}

/// Runtime-dispatched [`GenerationCategory::render`].
pub fn render_prompt(
    category: Category,
    fields: Map<String, Value>,
) -> Result<String, ValidationError> {
    match category {
        Category::Storyline => Storyline::render(fields),
        Category::Backstory => Backstory::render(fields),
        Category::Lore => Lore::render(fields),
    }
}

/// Treat any JSON value that is not an object as an empty mapping.
pub fn into_fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
