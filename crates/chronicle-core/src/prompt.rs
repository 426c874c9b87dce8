//! Prompt templates for the three content categories.
//!
//! Each builder is a pure function: it interpolates the caller's fields into
//! a fixed instruction template and never fails. Empty fields render as empty
//! text. Word limits are instructions to the model only; nothing downstream
//! enforces them.

use std::fmt::Display;

/// Word cap written into every backstory prompt.
pub const BACKSTORY_WORD_LIMIT: u32 = 250;

/// Word cap written into every lore prompt.
pub const LORE_WORD_LIMIT: u32 = 400;

/// Separator used when rendering trait and theme lists.
const LIST_SEPARATOR: &str = ", ";

/// Build the storyline prompt.
///
/// `max_length` is rendered as given (a number or free text such as
/// "about 300"); it is not validated.
pub fn build_storyline_prompt(
    core_idea: &str,
    existing_lore: &str,
    tone: &str,
    max_length: impl Display,
) -> String {
    format!(
        "Write a {tone} story in the third person, no longer than {max_length} words.\n\
         \n\
         - Core idea: {core_idea}\n\
         - Existing lore: {existing_lore}\n\
         \n\
         The story must:\n\
         - Have a clear beginning, middle and end.\n\
         - Contain exactly one plot twist that changes how the earlier events read.\n\
         - Use simple, everyday vocabulary and short paragraphs.\n\
         - Stay consistent with the existing lore when any is given.\n\
         \n\
         Return only the story text, without a title or headings.",
        tone = tone.to_lowercase(),
    )
}

/// Build the character backstory prompt.
pub fn build_backstory_prompt(
    name: &str,
    race: &str,
    role: &str,
    traits: &[String],
    strengths_weaknesses: &str,
) -> String {
    format!(
        "Write the backstory of the following character in the third person, \
         in at most {BACKSTORY_WORD_LIMIT} words.\n\
         \n\
         - Name: {name}\n\
         - Race: {race}\n\
         - Role: {role}\n\
         - Traits: {traits}\n\
         - Strengths & Weaknesses: {strengths_weaknesses}\n\
         \n\
         The backstory must:\n\
         - Describe one formative event from the character's childhood.\n\
         - Introduce exactly one important relationship: a mentor, rival, friend or relative.\n\
         - Explain where the character's most notable skill came from.\n\
         - Let the traits, strengths and weaknesses show through the character's choices.\n\
         \n\
         Do not give the backstory a title. Return only the backstory text.",
        traits = traits.join(LIST_SEPARATOR),
    )
}

/// Build the world lore prompt.
pub fn build_lore_prompt(
    content_type: &str,
    world_name: &str,
    era: &str,
    themes: &[String],
    tone: &str,
) -> String {
    format!(
        "Write a {tone} {content_type} about the world named {world_name}, \
         in at most {LORE_WORD_LIMIT} words.\n\
         \n\
         - Era: {era}\n\
         - Themes: {themes}\n\
         \n\
         Describe:\n\
         - The daily life of ordinary people.\n\
         - The geography and the places that matter to them.\n\
         - Common occupations and trades.\n\
         - The culture: customs, beliefs and celebrations.\n\
         \n\
         Weave the themes through the description. Do not include a title. \
         Return only the description.",
        tone = tone.to_lowercase(),
        content_type = content_type.to_lowercase(),
        themes = themes.join(LIST_SEPARATOR),
    )
}
