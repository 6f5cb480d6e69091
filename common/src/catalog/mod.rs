//! ストック動画カタログ
//!
//! 正規化で参照する静的データを保持する:
//! - StockCatalog: 利用可能なストック動画IDの一覧
//! - SynonymTable: 自由記述のフレーズ → ストック動画ID
//! - TechniqueSet: 調理技法（並び順の決定にのみ使用）
//!
//! 起動時に一度だけ構築し、以降は参照渡しで読み取り専用として使う。

mod builtin;

use crate::error::Result;
use crate::ordered_set::OrderedSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// ストック動画ID一覧（順序付き・重複なし）
#[derive(Debug, Clone, Default)]
pub struct StockCatalog {
    ids: OrderedSet,
}

impl StockCatalog {
    /// ID一覧から構築（重複は最初の1件のみ残す）
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for id in ids {
            let id = id.into();
            if !catalog.ids.insert(id.clone()) {
                warn!("duplicate stock video ignored: {}", id);
            }
        }
        catalog
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// 技法として扱うストック動画IDの集合
#[derive(Debug, Clone, Default)]
pub struct TechniqueSet {
    ids: OrderedSet,
}

impl TechniqueSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// 同義語テーブルの1エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// 照合キー（小文字）
    pub key: String,
    /// 対応するストック動画ID
    pub video: String,
}

/// 同義語テーブル（挿入順を保持）
///
/// 既存キーへの再挿入は位置を保ったまま値を置き換える。
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
    positions: HashMap<String, usize>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリを追加（キーは小文字化する）
    pub fn insert(&mut self, key: impl Into<String>, video: impl Into<String>) {
        let key = key.into().to_lowercase();
        let video = video.into();

        // 空キーは全ての入力に部分一致してしまう
        if key.is_empty() {
            warn!("empty synonym key ignored (video: {})", video);
            return;
        }

        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].video = video,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push(SynonymEntry { key, video });
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.positions
            .get(key)
            .map(|&pos| self.entries[pos].video.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SynonymEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SynonymTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, video) in iter {
            table.insert(key, video);
        }
        table
    }
}

/// カタログのJSON形式
///
/// ```json
/// {
///   "stockVideos": ["Onion", "Whisking"],
///   "techniques": ["Whisking"],
///   "synonyms": [{"key": "red onion", "video": "Onion"}]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogFile {
    pub stock_videos: Vec<String>,
    pub techniques: Vec<String>,
    pub synonyms: Vec<SynonymEntry>,
}

/// カタログ検証結果
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReport {
    pub stock_videos: usize,
    pub techniques: usize,
    pub synonyms: usize,
    /// カタログに存在しない動画を指す同義語（照合されない）
    pub dangling_synonyms: Vec<SynonymEntry>,
    /// カタログに存在しない技法ID
    pub dangling_techniques: Vec<String>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        self.dangling_synonyms.is_empty() && self.dangling_techniques.is_empty()
    }
}

/// 正規化に使う設定一式
#[derive(Debug, Clone, Default)]
pub struct VideoCatalog {
    stock: StockCatalog,
    techniques: TechniqueSet,
    synonyms: SynonymTable,
}

impl VideoCatalog {
    pub fn new(stock: StockCatalog, techniques: TechniqueSet, synonyms: SynonymTable) -> Self {
        Self {
            stock,
            techniques,
            synonyms,
        }
    }

    /// 組み込みカタログ
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::from(file))
    }

    /// JSON形式に変換
    pub fn to_catalog_file(&self) -> CatalogFile {
        CatalogFile {
            stock_videos: self.stock.iter().map(String::from).collect(),
            techniques: self.techniques.iter().map(String::from).collect(),
            synonyms: self.synonyms.iter().cloned().collect(),
        }
    }

    pub fn stock(&self) -> &StockCatalog {
        &self.stock
    }

    pub fn techniques(&self) -> &TechniqueSet {
        &self.techniques
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn is_technique(&self, id: &str) -> bool {
        self.techniques.contains(id)
    }

    /// 設定をマージ（後から追加した同義語が優先）
    pub fn merge(&mut self, other: &VideoCatalog) {
        for id in other.stock.iter() {
            self.stock.ids.insert(id);
        }
        for id in other.techniques.iter() {
            self.techniques.ids.insert(id);
        }
        for entry in other.synonyms.iter() {
            self.synonyms.insert(entry.key.clone(), entry.video.clone());
        }
    }

    /// カタログに存在しない動画を指す同義語
    pub fn dangling_synonyms(&self) -> Vec<&SynonymEntry> {
        self.synonyms
            .iter()
            .filter(|e| !self.stock.contains(&e.video))
            .collect()
    }

    /// カタログに存在しない技法ID
    pub fn dangling_techniques(&self) -> Vec<&str> {
        self.techniques
            .iter()
            .filter(|id| !self.stock.contains(id))
            .collect()
    }

    /// 設定の整合性を検査する（警告を出すのみで失敗しない）
    pub fn validate(&self) -> CatalogReport {
        let dangling_synonyms: Vec<SynonymEntry> =
            self.dangling_synonyms().into_iter().cloned().collect();
        let dangling_techniques: Vec<String> = self
            .dangling_techniques()
            .into_iter()
            .map(String::from)
            .collect();

        for entry in &dangling_synonyms {
            warn!(
                "synonym '{}' points to unknown stock video '{}' and will never match",
                entry.key, entry.video
            );
        }
        for id in &dangling_techniques {
            warn!("technique '{}' is not in the stock catalog", id);
        }

        CatalogReport {
            stock_videos: self.stock.len(),
            techniques: self.techniques.len(),
            synonyms: self.synonyms.len(),
            dangling_synonyms,
            dangling_techniques,
        }
    }
}

impl From<CatalogFile> for VideoCatalog {
    fn from(file: CatalogFile) -> Self {
        Self {
            stock: StockCatalog::new(file.stock_videos),
            techniques: TechniqueSet::new(file.techniques),
            synonyms: file
                .synonyms
                .into_iter()
                .map(|e| (e.key, e.video))
                .collect(),
        }
    }
}
