//! 用語正規化テスト
//!
//! 組み込みカタログに対する正規化の性質を検証

use recipe_video_common::{normalize_terms, TermNormalizer, VideoCatalog, VideoKind};
use std::collections::HashSet;

fn normalize(terms: &[&str]) -> Vec<String> {
    normalize_terms(terms, &VideoCatalog::builtin())
}

/// 出力の共通性質（重複なし・全てカタログ内・材料が先）
fn assert_well_formed(result: &[String]) {
    let catalog = VideoCatalog::builtin();

    let unique: HashSet<&String> = result.iter().collect();
    assert_eq!(unique.len(), result.len(), "重複あり: {:?}", result);

    for id in result {
        assert!(catalog.stock().contains(id), "カタログにない: {}", id);
    }

    if let Some(first_technique) = result.iter().position(|id| catalog.is_technique(id)) {
        assert!(
            result[first_technique..].iter().all(|id| catalog.is_technique(id)),
            "技法の後に材料がある: {:?}",
            result
        );
    }
}

/// 空入力
#[test]
fn test_empty_input() {
    assert!(normalize(&[]).is_empty());
}

/// 一致なし
#[test]
fn test_no_match() {
    assert!(normalize(&["nonexistent term xyz"]).is_empty());
}

/// 複数キーが同じ動画に一致しても1回だけ
#[test]
fn test_onion_and_fried_onions() {
    let result = normalize(&["onion", "fried onions"]);
    assert_eq!(result, vec!["Onion", "Frying (Onions and Mushrooms)"]);
    assert_well_formed(&result);
}

/// "whisking" は "whisk egg and milk" を含まない
#[test]
fn test_diced_tomato_and_whisking() {
    let result = normalize(&["diced tomato", "whisking egg and milk"]);
    assert_eq!(result, vec!["Diced (Tomato)", "Eggs", "Whisking"]);
    assert_well_formed(&result);
}

/// 材料が技法より先
#[test]
fn test_ingredient_before_technique() {
    let result = normalize(&["diced tomato", "whisk egg and milk"]);
    assert_eq!(result, vec!["Diced (Tomato)", "Eggs", "Beatings eggs and sugar"]);
    assert_well_formed(&result);
}

/// 空白で連結するため語の途中はつながらない
#[test]
fn test_terms_do_not_fuse_words() {
    let result = normalize(&["whisk", "ing eggs"]);
    assert_eq!(result, vec!["Eggs"]);
}

/// 空白を含むキーは入力をまたいで一致する
#[test]
fn test_key_spanning_terms() {
    let result = normalize(&["boiled", "egg"]);
    assert_eq!(result, vec!["Eggs", "Boiled Egg", "Boiling water"]);
    assert_well_formed(&result);

    assert_eq!(normalize(&["heat", "skillet"]), vec!["Flipping (Pancakes)"]);
}

/// 大文字小文字を区別しない
#[test]
fn test_case_insensitive() {
    assert_eq!(normalize(&["GARLIC"]), normalize(&["garlic"]));
    assert_eq!(normalize(&["Ground Beef"]), vec!["Ground (Beef)"]);
}

/// カタログにない動画を指す同義語は無視
#[test]
fn test_dangling_synonym_is_inert() {
    // "carrot sticks" は存在しない "Carrot (sticks)" を指す
    assert!(normalize(&["carrot sticks"]).is_empty());
}

/// 入力の順序ではなく同義語テーブルの順序で並ぶ
#[test]
fn test_order_follows_synonym_table() {
    assert_eq!(normalize(&["garlic", "lettuce"]), vec!["Spinach", "Garlic"]);
}

/// 実際のレシピ手順
#[test]
fn test_pancake_instructions() {
    let instructions = [
        "In a large bowl, mix flour and sugar with baking powder.",
        "Whisk egg and milk, then combine with the dry ingredients.",
        "Heat skillet and lightly grease with butter.",
        "Pour batter and cook pancakes until golden.",
    ];
    let result = normalize(&instructions);

    assert_eq!(
        result,
        vec![
            "Eggs",
            "Flour",
            "Butter",
            "Whisking Dry Ingredients Baking",
            "Beatings eggs and sugar",
            "Flipping (Pancakes)",
        ]
    );
    assert_well_formed(&result);
}

/// 分類と説明
#[test]
fn test_classify_and_explain() {
    let catalog = VideoCatalog::builtin();
    let normalizer = TermNormalizer::new(&catalog);
    let terms = ["fried onions", "simmering"];

    let classified = normalizer.classify(&terms);
    assert_eq!(classified.ingredients, vec!["Onion", "Frying (Onions and Mushrooms)"]);
    assert_eq!(classified.techniques, vec!["Simmering"]);
    assert_eq!(classified.clone().into_ordered(), normalizer.normalize(&terms));

    let details = normalizer.explain(&terms);
    let keys: Vec<&str> = details.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, vec!["onion", "fried onions", "simmering"]);
    assert_eq!(details[2].kind, VideoKind::Technique);
}

/// 純粋関数（同じ入力に同じ出力）
#[test]
fn test_deterministic() {
    let terms = ["sliced avocado on toast", "salt and pepper"];
    assert_eq!(normalize(&terms), normalize(&terms));
}
