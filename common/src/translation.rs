//! レシピ翻訳の組み立て
//!
//! タイトル・材料・手順を1つの翻訳バッチにまとめ、結果を元の構造に戻す。
//! 一部でも失敗した場合は結果を捨て、表示中のレシピは変更しない。

use crate::error::{Error, Result};
use crate::types::RecipeContent;

/// 原文の言語
pub const SOURCE_LANGUAGE: &str = "en";

/// 翻訳バッチ
///
/// `texts()` の順（タイトル → 材料 → 手順）で翻訳結果を受け取る。
#[derive(Debug, Clone)]
pub struct TranslationBatch {
    base: RecipeContent,
    texts: Vec<String>,
    ingredient_count: usize,
    instruction_count: usize,
}

impl TranslationBatch {
    pub fn from_recipe(content: &RecipeContent) -> Self {
        let mut texts = Vec::with_capacity(1 + content.ingredients.len() + content.instructions.len());
        texts.push(content.title.clone());
        texts.extend(content.ingredients.iter().cloned());
        texts.extend(content.instructions.iter().cloned());

        Self {
            base: content.clone(),
            texts,
            ingredient_count: content.ingredients.len(),
            instruction_count: content.instructions.len(),
        }
    }

    /// 翻訳対象テキスト
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// 翻訳結果をレシピに戻す
    ///
    /// 件数が合わない、またはいずれかが失敗した場合はエラー。
    /// エラーには最初に失敗したセクション名（title / ingredients / instructions）を含める。
    pub fn merge<E>(&self, results: Vec<std::result::Result<String, E>>) -> Result<RecipeContent> {
        if results.len() != self.texts.len() {
            return Err(Error::Parse(format!(
                "expected {} translations, got {}",
                self.texts.len(),
                results.len()
            )));
        }

        let mut translated = Vec::with_capacity(results.len());
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(text) => translated.push(text),
                Err(_) => {
                    return Err(Error::Translation {
                        section: self.section_of(index).to_string(),
                    })
                }
            }
        }

        let mut iter = translated.into_iter();
        let title = iter.next().unwrap_or_default();
        let ingredients: Vec<String> = iter.by_ref().take(self.ingredient_count).collect();
        let instructions: Vec<String> = iter.take(self.instruction_count).collect();

        Ok(RecipeContent {
            title,
            ingredients,
            instructions,
            nutrition: self.base.nutrition.clone(),
        })
    }

    fn section_of(&self, index: usize) -> &'static str {
        if index == 0 {
            "title"
        } else if index <= self.ingredient_count {
            "ingredients"
        } else {
            "instructions"
        }
    }
}

/// 翻訳状態（原文を保持し、いつでも元に戻せる）
#[derive(Debug, Clone)]
pub struct TranslatedRecipe {
    original: RecipeContent,
    current: RecipeContent,
    language: String,
}

impl TranslatedRecipe {
    pub fn new(original: RecipeContent) -> Self {
        Self {
            current: original.clone(),
            original,
            language: SOURCE_LANGUAGE.to_string(),
        }
    }

    pub fn original(&self) -> &RecipeContent {
        &self.original
    }

    pub fn current(&self) -> &RecipeContent {
        &self.current
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// 翻訳バッチを生成（常に原文から翻訳する）
    pub fn batch(&self) -> TranslationBatch {
        TranslationBatch::from_recipe(&self.original)
    }

    /// 翻訳結果を反映する。失敗時は現在の状態を変更しない
    pub fn apply<E>(
        &mut self,
        language: &str,
        batch: &TranslationBatch,
        results: Vec<std::result::Result<String, E>>,
    ) -> Result<()> {
        let content = batch.merge(results)?;
        self.current = content;
        self.language = language.to_string();
        Ok(())
    }

    /// 原文に戻す
    pub fn reset(&mut self) {
        self.current = self.original.clone();
        self.language = SOURCE_LANGUAGE.to_string();
    }
}
