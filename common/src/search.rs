//! レシピのローカル検索

use crate::types::Recipe;

/// タイトルまたは材料に検索語を含むレシピを返す（大文字小文字を区別しない）
///
/// 検索語が空白のみの場合は全件を返す。
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return recipes.iter().collect();
    }

    recipes
        .iter()
        .filter(|r| {
            r.recipe.title.to_lowercase().contains(&query)
                || r.recipe
                    .ingredients
                    .iter()
                    .any(|i| i.to_lowercase().contains(&query))
        })
        .collect()
}

/// 食事カテゴリ名を正規の表記に揃える（未知のカテゴリはNone）
pub fn match_category(name: &str) -> Option<&'static str> {
    let name = name.trim();
    crate::types::MEAL_CATEGORIES
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(name))
}
