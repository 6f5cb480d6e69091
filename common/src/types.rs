//! レシピ関連の型定義
//!
//! レシピAPIのレスポンス形式に合わせる:
//! - Recipe: 保存済みレシピ（メタデータ込み）
//! - RecipeContent: タイトル・材料・手順・栄養
//! - FoodDetection: 画像認識で検出した食材

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 食事カテゴリ（一覧の絞り込みに使用）
pub const MEAL_CATEGORIES: &[&str] = &[
    "Breakfast",
    "Lunch",
    "Dinner",
    "Snack",
    "Dessert",
    "Vegan",
    "Vegetarian",
    "Gluten-Free",
    "Keto",
    "Dairy-Free",
    "Nut-Free",
    "Paleo",
    "Quick & Easy",
];

/// 栄養情報（APIは文字列で返す）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub calories: String,
    pub carbohydrates: String,
    pub protein: String,
    pub fat: String,
    pub fiber: String,
}

/// レシピ本文
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeContent {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrition: Nutrition,
}

/// 保存済みレシピ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(default)]
    pub meal_type: String,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub diet: Vec<String>,

    #[serde(default)]
    pub recipe: RecipeContent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub created_at: String,
}

/// 画像認識で検出した食材
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetection {
    pub name: String,
    pub confidence: f32,
    pub is_generic: bool,
}

/// ユーザープロフィール
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub dietary_preference: String,
    /// 文字列（カンマ区切り）でも配列でも返る
    #[serde(deserialize_with = "string_or_list")]
    pub allergies: Vec<String>,
    pub skill_level: String,
    pub status: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<StringOrList> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(StringOrList::One(s)) => split_list(&s),
        Some(StringOrList::Many(items)) => items
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => Vec::new(),
    })
}

/// カンマ区切りの入力を配列に（空要素は除く）
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// 保存したレシピJSONからレシピ本文を取り出す
///
/// `show --format json` の出力（`recipe` を持つ保存済みレシピ）と
/// レシピ本文そのものの両方を受け付ける。
pub fn parse_recipe_content(json: &str) -> Result<RecipeContent> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("recipe").is_some() {
        let recipe: Recipe = serde_json::from_value(value)?;
        Ok(recipe.recipe)
    } else {
        Ok(serde_json::from_value(value)?)
    }
}
