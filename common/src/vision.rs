//! 画像認識レスポンスからの食材抽出
//!
//! Cloud Vision の LABEL_DETECTION / WEB_DETECTION 結果を
//! 食材候補（FoodDetection）に変換する。

use crate::ordered_set::OrderedSet;
use crate::types::FoodDetection;
use serde::Deserialize;

/// 採用する最低スコア
pub const MIN_SCORE: f32 = 0.7;
/// 返す最大件数
pub const MAX_RESULTS: usize = 5;
/// 材料リストに加える最低確信度
pub const INGREDIENT_MIN_CONFIDENCE: f32 = 0.5;

/// 具体的な食材ではない汎用ラベル
const GENERIC_FOOD_TERMS: &[&str] = &["food", "dish", "cuisine", "meal", "cooking"];

/// images:annotate のレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VisionResponse {
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotateImageResponse {
    pub label_annotations: Vec<LabelAnnotation>,
    pub web_detection: Option<WebDetection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LabelAnnotation {
    pub description: String,
    pub score: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebDetection {
    pub web_entities: Vec<WebEntity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebEntity {
    pub description: Option<String>,
    pub score: f32,
}

fn is_generic(name: &str) -> bool {
    let lower = name.to_lowercase();
    GENERIC_FOOD_TERMS.contains(&lower.as_str())
}

/// レスポンスから食材候補を抽出
///
/// - ラベル: スコア > 0.7
/// - Webエンティティ: スコア > 0.7 かつ説明あり、汎用ラベルを除く
/// - 確信度の降順に並べ、汎用ラベルを除いて上位5件
pub fn extract_foods(response: &VisionResponse) -> Vec<FoodDetection> {
    let mut results = Vec::new();

    let Some(first) = response.responses.first() else {
        return results;
    };

    for annotation in &first.label_annotations {
        if annotation.score > MIN_SCORE {
            results.push(FoodDetection {
                name: annotation.description.clone(),
                confidence: annotation.score,
                is_generic: is_generic(&annotation.description),
            });
        }
    }

    if let Some(web) = &first.web_detection {
        for entity in &web.web_entities {
            let Some(description) = entity.description.as_deref() else {
                continue;
            };
            if entity.score > MIN_SCORE && !description.is_empty() && !is_generic(description) {
                results.push(FoodDetection {
                    name: description.to_string(),
                    confidence: entity.score,
                    is_generic: false,
                });
            }
        }
    }

    // 安定ソートなので同点は元の順（ラベル → Web）を保つ
    results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    results
        .into_iter()
        .filter(|d| !d.is_generic)
        .take(MAX_RESULTS)
        .collect()
}

/// 材料名の表記を揃える（前後の空白を除き小文字化）
pub fn normalize_ingredient(name: &str) -> String {
    name.trim().to_lowercase()
}

/// 入力済みの材料と検出結果を、小文字・重複なしの材料リストにまとめる
pub fn merge_ingredients(
    existing: &[String],
    detections: &[FoodDetection],
    min_confidence: f32,
) -> Vec<String> {
    let mut merged = OrderedSet::new();
    let typed = existing.iter().map(|s| normalize_ingredient(s));
    let detected = detections
        .iter()
        .filter(|d| d.confidence > min_confidence)
        .map(|d| normalize_ingredient(&d.name));

    for name in typed.chain(detected) {
        if !name.is_empty() {
            merged.insert(name);
        }
    }
    merged.into_vec()
}
