pub mod analyze_food;
pub mod recommend_food;
