//! 挿入順を保持する重複なし集合
//!
//! ID→初出位置のマップと、安定した反復用のVecを常に同時に更新する。

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    positions: HashMap<String, usize>,
    items: Vec<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加する。既に存在する場合は何もせず false を返す（初出優先）
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.positions.contains_key(&item) {
            return false;
        }
        self.positions.insert(item.clone(), self.items.len());
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.positions.contains_key(item)
    }

    /// 初出位置
    pub fn position(&self, item: &str) -> Option<usize> {
        self.positions.get(item).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}
