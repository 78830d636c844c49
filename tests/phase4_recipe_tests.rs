use recipe_nlg::outputs::recipe::HORIZONTAL_LINE;
use recipe_nlg::{render_recipe, Generator, Recipe};

fn pad_thai() -> Recipe {
    Recipe {
        title: "Pad Thai".to_string(),
        author: "Ava".to_string(),
        cuisines: vec!["Thai".to_string(), "Asian".to_string()],
        description: "Classic noodles.".to_string(),
        ingredients_text: "8 oz rice noodles".to_string(),
        servings: "Serves 4".to_string(),
        prep_time: Some(15),
        cook_time: Some(0),
        total_time: Some(35),
        steps_text: "Soak, fry, toss.".to_string(),
    }
}

#[test]
fn test_recipe_layout() {
    let expected = [
        "Here is the recipe you requested:",
        "",
        HORIZONTAL_LINE,
        "Pad Thai by Ava",
        "Cuisines: Thai, Asian",
        "",
        "Classic noodles.",
        "",
        "8 oz rice noodles",
        "",
        "Serves 4",
        "Prep time: 15 minutes",
        "Total time: 35 minutes",
        "",
        "Soak, fry, toss.",
        HORIZONTAL_LINE,
    ]
    .join("\n");

    assert_eq!(render_recipe(&pad_thai()), expected);
}

#[test]
fn test_absent_timings_omitted() {
    let recipe = Recipe {
        prep_time: None,
        total_time: None,
        ..pad_thai()
    };
    let text = render_recipe(&recipe);

    assert!(!text.contains("time:"), "{}", text);
    assert_eq!(text.matches("8 oz rice noodles").count(), 1, "ingredients appear once");
    assert!(text.starts_with("Here is the recipe you requested:"));
    assert!(text.ends_with(HORIZONTAL_LINE));
}

#[test]
fn test_generator_delegates() {
    let generator = Generator::seeded(0);
    assert_eq!(generator.render_recipe(&pad_thai()), render_recipe(&pad_thai()));
}

#[test]
fn test_recipe_from_json() {
    let recipe: Recipe = serde_json::from_value(serde_json::json!({
        "title": "Toast",
        "author": "Sam",
        "cook_time": 3,
    }))
    .unwrap();
    assert_eq!(recipe.cook_time, Some(3));
    assert!(render_recipe(&recipe).contains("Cook time: 3 minutes"));
}
