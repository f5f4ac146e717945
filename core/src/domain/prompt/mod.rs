//! Prompt templates for the three model calls. Each embeds a strict
//! output-format instruction because the downstream parser depends on the
//! model honoring it, and each substitutes an explicit placeholder for
//! absent fields so the model never receives an ambiguous blank.

use crate::domain::{food::entities::ResolvedNutrition, user::entities::UserProfile};

const NOT_SPECIFIED: &str = "Not specified";
const NONE_SPECIFIED: &str = "None specified";

/// Prompt sent alongside the image to the vision model. Biased toward
/// short, identity-focused output.
pub fn caption_prompt() -> &'static str {
    "Please analyze this image and describe the food dish present. Include: \
     the name of the dish, the main ingredients visible, the type of cuisine, \
     and whether it appears to be a complete dish or part of a larger meal. \
     Be as specific and short as possible about the dish identity and \
     characteristics you can observe."
}

/// Prompt asking the text model for nutrition facts of the captioned dish,
/// in exactly the `Label: Value` line format the extractor expects.
pub fn nutrition_prompt(caption: &str) -> String {
    format!(
        "Provide only the nutrition stats for {caption} in the following format:\n\
         \n\
         Food Item: Cheesecake\n\
         Calories: 370-400\n\
         Total Fat: 26-30g\n\
         Cholesterol: 125mg\n\
         Sodium: 300-350mg\n\
         Carbohydrates: 30-35g (Sugars: 24-28g)\n\
         Protein: 7-8g\n\
         \n\
         No additional information is needed. Follow this format strictly."
    )
}

/// Prompt asking the text model for the personalized recommendation
/// paragraph, given the profile, the resolved nutrition values and the
/// similarity score rendered as a percentage.
pub fn recommendation_prompt(
    user: &UserProfile,
    food_name: &str,
    nutrition: &ResolvedNutrition,
    similarity_score: f64,
) -> String {
    let render_number = |value: Option<i32>| match value {
        Some(v) => v.to_string(),
        None => NOT_SPECIFIED.to_string(),
    };
    let render_tags = |tags: &[String]| {
        if tags.is_empty() {
            NONE_SPECIFIED.to_string()
        } else {
            tags.join(", ")
        }
    };
    let food_name = if food_name.is_empty() {
        "Unknown"
    } else {
        food_name
    };

    format!(
        "Analyze if this food item is suitable for the user based on their profile:\n\
         \n\
         User Profile:\n\
         - Age: {age}\n\
         - Caloric Target: {caloric_target} calories\n\
         - Protein Target: {protein_target}g\n\
         - Dietary Preferences: {dietary_preferences}\n\
         - Health Complications: {complications}\n\
         \n\
         Food Item ({food_name}):\n\
         - Calories: {calories} calories\n\
         - Protein: {protein}g\n\
         - Total Fat: {total_fat}g\n\
         - Carbohydrates: {carbohydrates}g\n\
         - Sodium: {sodium}mg\n\
         - Cholesterol: {cholesterol}mg\n\
         \n\
         Embedding Similarity Score: {score:.2}%\n\
         \n\
         Provide a concise analysis of how well this food aligns with the \
         user's dietary needs and preferences. Include the alignment \
         percentage, explain any mismatches with their dietary requirements \
         or health complications, and suggest 2-3 alternative dishes that \
         would better match their preferences. Keep the response to a single \
         focused paragraph and address the reader as \"you\" instead of \
         writing about \"the user\".",
        age = render_number(user.age),
        caloric_target = render_number(user.caloric_target),
        protein_target = render_number(user.protein_target),
        dietary_preferences = render_tags(&user.dietary_preferences),
        complications = render_tags(&user.complications),
        calories = nutrition.calories,
        protein = nutrition.protein,
        total_fat = nutrition.total_fat,
        carbohydrates = nutrition.carbohydrates,
        sodium = nutrition.sodium,
        cholesterol = nutrition.cholesterol,
        score = similarity_score * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::sample_user;

    fn resolved() -> ResolvedNutrition {
        ResolvedNutrition {
            calories: "385".to_string(),
            protein: "7".to_string(),
            total_fat: "28".to_string(),
            carbohydrates: "33".to_string(),
            sodium: "325".to_string(),
            cholesterol: "125".to_string(),
        }
    }

    #[test]
    fn nutrition_prompt_pins_the_expected_labels() {
        let prompt = nutrition_prompt("a slice of cheesecake");
        for label in [
            "Food Item:",
            "Calories:",
            "Total Fat:",
            "Cholesterol:",
            "Sodium:",
            "Carbohydrates:",
            "Protein:",
        ] {
            assert!(prompt.contains(label), "missing label {label}");
        }
        assert!(prompt.contains("a slice of cheesecake"));
        assert!(prompt.contains("No additional information"));
    }

    #[test]
    fn recommendation_prompt_renders_profile_and_score() {
        let user = sample_user(vec![0.0]);
        let prompt = recommendation_prompt(&user, "Cheesecake", &resolved(), 0.8234);

        assert!(prompt.contains("- Age: 30"));
        assert!(prompt.contains("- Dietary Preferences: vegan"));
        assert!(prompt.contains("- Health Complications: None specified"));
        assert!(prompt.contains("Food Item (Cheesecake):"));
        assert!(prompt.contains("- Calories: 385 calories"));
        assert!(prompt.contains("Embedding Similarity Score: 82.34%"));
    }

    #[test]
    fn absent_fields_get_explicit_placeholders() {
        let mut user = sample_user(vec![0.0]);
        user.age = None;
        user.caloric_target = None;
        user.dietary_preferences.clear();

        let prompt = recommendation_prompt(&user, "", &resolved(), 0.0);

        assert!(prompt.contains("- Age: Not specified"));
        assert!(prompt.contains("- Caloric Target: Not specified calories"));
        assert!(prompt.contains("- Dietary Preferences: None specified"));
        assert!(prompt.contains("Food Item (Unknown):"));
        assert!(prompt.contains("Embedding Similarity Score: 0.00%"));
    }
}
