use serde::{Deserialize, Serialize};

pub const HORIZONTAL_LINE: &str = "----------------------------------------";

/// A recipe as handed over by the dialogue manager for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub title: String,
    pub author: String,
    pub cuisines: Vec<String>,
    pub description: String,
    pub ingredients_text: String,
    pub servings: String,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub total_time: Option<u32>,
    pub steps_text: String,
}

/// PURE FUNCTION: Recipe -> display text.
/// Timing lines are omitted when absent or zero.
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut lines: Vec<String> = vec![
        "Here is the recipe you requested:".to_string(),
        String::new(),
        HORIZONTAL_LINE.to_string(),
        format!("{} by {}", recipe.title, recipe.author),
        format!("Cuisines: {}", recipe.cuisines.join(", ")),
        String::new(),
        recipe.description.clone(),
        String::new(),
        recipe.ingredients_text.clone(),
        String::new(),
        recipe.servings.clone(),
    ];

    let timings = [
        ("Prep time", recipe.prep_time),
        ("Cook time", recipe.cook_time),
        ("Total time", recipe.total_time),
    ];
    for (label, minutes) in timings {
        if let Some(m) = minutes.filter(|m| *m > 0) {
            lines.push(format!("{}: {} minutes", label, m));
        }
    }

    lines.push(String::new());
    lines.push(recipe.steps_text.clone());
    lines.push(HORIZONTAL_LINE.to_string());

    lines.join("\n")
}
