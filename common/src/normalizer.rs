//! 用語正規化モジュール
//!
//! 材料名や手順文などの自由記述を、ストック動画IDの一覧に変換する。
//!
//! ## 処理フロー
//! 1. 全ての入力を空白区切りで連結し小文字化（blob）
//! 2. 同義語テーブルを順に走査し、キーがblobに部分一致かつ
//!    動画がカタログに存在すればIDを収集（初出順・重複なし）
//! 3. 技法セットで「材料」「技法」に振り分け
//! 4. 材料 → 技法の順に連結して返す
//!
//! 連結したblobに対して照合するため、隣り合う入力をまたいだ一致も起こる
//! （例: `["heat", "skillet"]` → `"heat skillet"` が一致する）。

use crate::catalog::VideoCatalog;
use crate::ordered_set::OrderedSet;
use serde::Serialize;
use tracing::debug;

/// blob連結時の区切り文字
pub const TERM_SEPARATOR: &str = " ";

/// ストック動画の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    Ingredient,
    Technique,
}

impl std::fmt::Display for VideoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoKind::Ingredient => write!(f, "ingredient"),
            VideoKind::Technique => write!(f, "technique"),
        }
    }
}

/// 照合の詳細（どのキーでどの動画になったか）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchDetail {
    pub key: String,
    pub video: String,
    pub kind: VideoKind,
}

/// 分類済みの正規化結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedTerms {
    /// 材料（初出順）
    pub ingredients: Vec<String>,
    /// 技法（初出順）
    pub techniques: Vec<String>,
}

impl NormalizedTerms {
    /// 材料 → 技法の順に連結
    pub fn into_ordered(self) -> Vec<String> {
        let mut ordered = self.ingredients;
        ordered.extend(self.techniques);
        ordered
    }

    pub fn len(&self) -> usize {
        self.ingredients.len() + self.techniques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.techniques.is_empty()
    }
}

/// 用語正規化器
///
/// カタログを参照するだけで状態を持たないため、複数スレッドから同時に使える。
#[derive(Debug, Clone, Copy)]
pub struct TermNormalizer<'a> {
    catalog: &'a VideoCatalog,
}

impl<'a> TermNormalizer<'a> {
    pub fn new(catalog: &'a VideoCatalog) -> Self {
        Self { catalog }
    }

    /// 用語を正規化する（材料 → 技法の順）
    pub fn normalize<S: AsRef<str>>(&self, terms: &[S]) -> Vec<String> {
        self.classify(terms).into_ordered()
    }

    /// 用語を正規化し、材料と技法に分けて返す
    pub fn classify<S: AsRef<str>>(&self, terms: &[S]) -> NormalizedTerms {
        let matches = self.collect_matches(&build_blob(terms));

        let (techniques, ingredients): (Vec<String>, Vec<String>) = matches
            .into_vec()
            .into_iter()
            .partition(|id| self.catalog.is_technique(id));

        NormalizedTerms {
            ingredients,
            techniques,
        }
    }

    /// 一致したキーを全て返す（同じ動画に複数キーが一致した場合もそれぞれ含む）
    pub fn explain<S: AsRef<str>>(&self, terms: &[S]) -> Vec<MatchDetail> {
        let blob = build_blob(terms);

        self.catalog
            .synonyms()
            .iter()
            .filter(|entry| blob.contains(entry.key.as_str()))
            .filter(|entry| self.catalog.stock().contains(&entry.video))
            .map(|entry| MatchDetail {
                key: entry.key.clone(),
                video: entry.video.clone(),
                kind: self.kind_of(&entry.video),
            })
            .collect()
    }

    pub fn kind_of(&self, video: &str) -> VideoKind {
        if self.catalog.is_technique(video) {
            VideoKind::Technique
        } else {
            VideoKind::Ingredient
        }
    }

    fn collect_matches(&self, blob: &str) -> OrderedSet {
        let mut matches = OrderedSet::new();

        for entry in self.catalog.synonyms().iter() {
            if !blob.contains(entry.key.as_str()) {
                continue;
            }
            // カタログにない動画を指すキーは無視
            if !self.catalog.stock().contains(&entry.video) {
                continue;
            }
            if matches.insert(entry.video.as_str()) {
                debug!("'{}' -> '{}'", entry.key, entry.video);
            }
        }

        matches
    }
}

/// 用語を正規化する
///
/// # Arguments
/// * `terms` - 材料名・手順文などの自由記述
/// * `catalog` - 参照するカタログ
///
/// # Returns
/// ストック動画IDの一覧（重複なし、材料 → 技法の順）
pub fn normalize_terms<S: AsRef<str>>(terms: &[S], catalog: &VideoCatalog) -> Vec<String> {
    TermNormalizer::new(catalog).normalize(terms)
}

/// 照合対象のblobを生成
pub fn build_blob<S: AsRef<str>>(terms: &[S]) -> String {
    terms
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(TERM_SEPARATOR)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{StockCatalog, SynonymTable, TechniqueSet};

    fn test_catalog() -> VideoCatalog {
        VideoCatalog::new(
            StockCatalog::new(["Onion", "Garlic", "Whisking", "Simmering"]),
            TechniqueSet::new(["Whisking", "Simmering"]),
            [
                ("whisk", "Whisking"),
                ("onion", "Onion"),
                ("shallot", "Onion"),
                ("simmer", "Simmering"),
                ("garlic", "Garlic"),
                ("leek", "Leek"),
            ]
            .into_iter()
            .collect::<SynonymTable>(),
        )
    }

    #[test]
    fn test_build_blob() {
        assert_eq!(build_blob(&["Red Onion", "GARLIC"]), "red onion garlic");
        assert_eq!(build_blob::<&str>(&[]), "");
    }

    #[test]
    fn test_ingredients_before_techniques() {
        let catalog = test_catalog();
        let result = normalize_terms(&["whisk the onion", "add garlic"], &catalog);
        // 照合順は whisk, onion, garlic だが技法は後ろへ
        assert_eq!(result, vec!["Onion", "Garlic", "Whisking"]);
    }

    #[test]
    fn test_many_keys_collapse_to_one() {
        let catalog = test_catalog();
        let result = normalize_terms(&["onion", "shallot"], &catalog);
        assert_eq!(result, vec!["Onion"]);
    }

    #[test]
    fn test_dangling_synonym_ignored() {
        let catalog = test_catalog();
        assert!(normalize_terms(&["leek"], &catalog).is_empty());
    }

    #[test]
    fn test_classify_groups() {
        let catalog = test_catalog();
        let normalized = TermNormalizer::new(&catalog).classify(&["simmer garlic", "whisk"]);
        assert_eq!(normalized.ingredients, vec!["Garlic"]);
        assert_eq!(normalized.techniques, vec!["Whisking", "Simmering"]);
        assert_eq!(normalized.len(), 3);
    }

    #[test]
    fn test_explain_lists_every_key() {
        let catalog = test_catalog();
        let details = TermNormalizer::new(&catalog).explain(&["onion", "shallot", "leek"]);
        let keys: Vec<&str> = details.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["onion", "shallot"]);
        assert!(details.iter().all(|d| d.video == "Onion"));
        assert!(details.iter().all(|d| d.kind == VideoKind::Ingredient));
    }

    #[test]
    fn test_kind_of() {
        let catalog = test_catalog();
        let normalizer = TermNormalizer::new(&catalog);
        assert_eq!(normalizer.kind_of("Whisking"), VideoKind::Technique);
        assert_eq!(normalizer.kind_of("Onion"), VideoKind::Ingredient);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = VideoCatalog::default();
        assert!(normalize_terms(&["onion"], &catalog).is_empty());
    }
}
