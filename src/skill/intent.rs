//! The closed set of intents and slots the skill understands.

/// A recognised voice command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddRecipe,
    GetAllRecipes,
    GetRecipe,
    GetRandomRecipe,
    DeleteRecipe,
    Help,
    Cancel,
    Stop,
    /// Any intent name this skill does not handle.
    Unknown(String),
}

impl Intent {
    /// Parse a platform intent name. Never fails; unknown names are kept.
    pub fn from_name(name: &str) -> Self {
        match name {
            "AddRecipeIntent" => Self::AddRecipe,
            "GetAllRecipesIntent" => Self::GetAllRecipes,
            "GetRecipeIntent" => Self::GetRecipe,
            "GetRandomRecipeIntent" => Self::GetRandomRecipe,
            "DeleteRecipeIntent" => Self::DeleteRecipe,
            "AMAZON.HelpIntent" => Self::Help,
            "AMAZON.CancelIntent" => Self::Cancel,
            "AMAZON.StopIntent" => Self::Stop,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The platform name of this intent.
    pub fn name(&self) -> &str {
        match self {
            Self::AddRecipe => "AddRecipeIntent",
            Self::GetAllRecipes => "GetAllRecipesIntent",
            Self::GetRecipe => "GetRecipeIntent",
            Self::GetRandomRecipe => "GetRandomRecipeIntent",
            Self::DeleteRecipe => "DeleteRecipeIntent",
            Self::Help => "AMAZON.HelpIntent",
            Self::Cancel => "AMAZON.CancelIntent",
            Self::Stop => "AMAZON.StopIntent",
            Self::Unknown(name) => name,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named intent parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotName {
    RecipeName,
    RecipeLocation,
    LongOrQuick,
    GetRecipeQuickOrLong,
}

impl SlotName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RecipeName => "RecipeName",
            Self::RecipeLocation => "RecipeLocation",
            Self::LongOrQuick => "LongOrQuick",
            Self::GetRecipeQuickOrLong => "GetRecipeQuickOrLong",
        }
    }
}

impl std::fmt::Display for SlotName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
