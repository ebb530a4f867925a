//! Speech assembly — text with pause markers, rendered as SSML or plain text.
//!
//! Every user-facing sentence the skill can say is built here, so the exact
//! wording lives in one place.

use crate::recipes::model::{Recipe, RecipeFilter};

/// A pause between spoken segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    /// `<break strength="medium"/>`
    Medium,
    /// `<break strength="x-strong"/>`
    ExtraStrong,
    /// `<break time="{n}ms"/>`
    Millis(u32),
}

impl Pause {
    fn ssml(&self) -> String {
        match self {
            Self::Medium => r#"<break strength="medium"/>"#.to_string(),
            Self::ExtraStrong => r#"<break strength="x-strong"/>"#.to_string(),
            Self::Millis(ms) => format!(r#"<break time="{ms}ms"/>"#),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Pause(Pause),
}

/// An utterance made of text and pauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speech {
    segments: Vec<Segment>,
}

impl Speech {
    /// Start an utterance with some text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::default().then(text)
    }

    /// Append text.
    pub fn then(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Text(text.into()));
        self
    }

    /// Append a pause.
    pub fn pause(mut self, pause: Pause) -> Self {
        self.segments.push(Segment::Pause(pause));
        self
    }

    /// Render as SSML body (without the `<speak>` wrapper). Text is XML-escaped.
    pub fn to_ssml(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => escape_xml(text),
                Segment::Pause(pause) => pause.ssml(),
            })
            .collect()
    }

    /// Render for a non-voice target: pauses dropped, whitespace collapsed.
    pub fn to_plain_text(&self) -> String {
        let joined: String = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.as_str(),
                Segment::Pause(_) => " ",
            })
            .collect();
        joined.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl std::fmt::Display for Speech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_text())
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

// ── Fixed phrases ───────────────────────────────────────────────────

/// Welcome and help text listing the available commands.
pub fn instructions() -> Speech {
    Speech::text("Welcome to Recipe Organizer")
        .pause(Pause::Medium)
        .then(
            " The following commands are available: add recipe, get recipe, \
             get all recipes, get a random recipe, and delete recipe. \
             What would you like to do?",
        )
}

pub fn goodbye() -> Speech {
    Speech::text("Goodbye!")
}

pub fn unhandled() -> Speech {
    Speech::text("An unhandled problem occurred!")
}

/// Said when the recipe store cannot be reached.
pub fn unavailable() -> Speech {
    Speech::text("Recipe Organizer is temporarily unavailable. Please try again later.")
}

// ── Recipe outcomes ─────────────────────────────────────────────────

pub fn recipe_exists(name: &str) -> Speech {
    Speech::text(format!("Recipe {name} already exists!"))
}

pub fn recipe_added(name: &str) -> Speech {
    Speech::text(format!("Recipe {name} added!"))
}

pub fn recipe_not_found(name: &str) -> Speech {
    Speech::text(format!("Recipe {name} not found!"))
}

pub fn recipe_deleted(name: &str) -> Speech {
    Speech::text(format!("Recipe {name} deleted!"))
}

pub fn recipe_details(name: &str, recipe: &Recipe) -> Speech {
    let kind = if recipe.is_quick { "Quick" } else { "Long" };
    Speech::text(format!(
        "Recipe {name} is located in {} and it is a {kind} recipe to make.",
        recipe.location
    ))
}

/// The list of recipe names, or "No recipes found!" when empty.
///
/// The empty case replaces the preamble entirely.
pub fn recipe_list(filter: RecipeFilter, recipes: &[Recipe]) -> Speech {
    if recipes.is_empty() {
        return Speech::text("No recipes found!");
    }

    let preamble = match filter {
        RecipeFilter::Quick => "The following quick recipes were found: ",
        RecipeFilter::Long => "The following long recipes were found: ",
        RecipeFilter::Any => "The following recipes were found: ",
    };

    recipes.iter().fold(
        Speech::text(preamble).pause(Pause::ExtraStrong),
        |speech, recipe| speech.then(recipe.name.clone()).pause(Pause::ExtraStrong),
    )
}

pub fn no_recipes_added() -> Speech {
    Speech::text("No recipes added.")
}

pub fn lucky_recipe(recipe: &Recipe) -> Speech {
    let kind = if recipe.is_quick { "quick" } else { "long" };
    Speech::text(format!("The lucky recipe is {} ", recipe.name))
        .pause(Pause::Millis(500))
        .then(format!(
            " and it is located in {} and it is a {kind} recipe to make.",
            recipe.location
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssml_renders_pauses_and_escapes_text() {
        let speech = Speech::text("Mac & Cheese")
            .pause(Pause::ExtraStrong)
            .then("<b>")
            .pause(Pause::Millis(500))
            .pause(Pause::Medium);
        assert_eq!(
            speech.to_ssml(),
            r#"Mac &amp; Cheese<break strength="x-strong"/>&lt;b&gt;<break time="500ms"/><break strength="medium"/>"#
        );
    }

    #[test]
    fn plain_text_drops_pauses() {
        let speech = Speech::text("a").pause(Pause::Medium).then("b ").then(" c");
        assert_eq!(speech.to_plain_text(), "a b c");
    }

    #[test]
    fn recipe_details_wording() {
        let recipe = Recipe::new("Pasta", "u1", "loc:cookbook p.4", true);
        assert_eq!(
            recipe_details("Pasta", &recipe).to_ssml(),
            "Recipe Pasta is located in loc:cookbook p.4 and it is a Quick recipe to make."
        );
        let recipe = Recipe::new("Stew", "u1", "binder", false);
        assert_eq!(
            recipe_details("Stew", &recipe).to_plain_text(),
            "Recipe Stew is located in binder and it is a Long recipe to make."
        );
    }

    #[test]
    fn empty_list_replaces_preamble() {
        for filter in [RecipeFilter::Quick, RecipeFilter::Long, RecipeFilter::Any] {
            assert_eq!(recipe_list(filter, &[]).to_ssml(), "No recipes found!");
        }
    }

    #[test]
    fn list_puts_a_pause_after_every_name() {
        let recipes = vec![
            Recipe::new("Pasta", "u1", "a", true),
            Recipe::new("Tacos", "u1", "b", true),
        ];
        assert_eq!(
            recipe_list(RecipeFilter::Quick, &recipes).to_ssml(),
            r#"The following quick recipes were found: <break strength="x-strong"/>Pasta<break strength="x-strong"/>Tacos<break strength="x-strong"/>"#
        );
        assert_eq!(
            recipe_list(RecipeFilter::Any, &recipes[..1]).to_plain_text(),
            "The following recipes were found: Pasta"
        );
    }

    #[test]
    fn lucky_recipe_pauses_before_location() {
        let recipe = Recipe::new("Stew", "u1", "binder", false);
        assert_eq!(
            lucky_recipe(&recipe).to_ssml(),
            r#"The lucky recipe is Stew <break time="500ms"/> and it is located in binder and it is a long recipe to make."#
        );
    }

    #[test]
    fn instructions_pause_after_welcome() {
        let ssml = instructions().to_ssml();
        assert!(ssml.starts_with(r#"Welcome to Recipe Organizer<break strength="medium"/> The following"#));
        assert!(ssml.ends_with("What would you like to do?"));
    }
}
