//! 翻訳先言語の選択

use crate::error::{RecipeVideoError, Result};
use dialoguer::Select;

/// よく使う言語（一覧の先頭に並べる）
const PREFERRED_LANGUAGES: &[&str] = &["es", "fr", "de", "ja", "zh"];

/// 言語の決定方法
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageChoice {
    /// 指定済み
    Fixed(String),
    /// 対話で選択
    Prompt,
}

/// 引数 → 設定の既定値 の順で言語を決める
pub fn resolve_language(arg: Option<&str>, default: Option<&str>) -> LanguageChoice {
    arg.or(default)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| LanguageChoice::Fixed(s.to_lowercase()))
        .unwrap_or(LanguageChoice::Prompt)
}

/// よく使う言語を先頭にし、原文（en）を除いた候補一覧
pub fn language_candidates(supported: &[String]) -> Vec<String> {
    let mut candidates: Vec<String> = PREFERRED_LANGUAGES
        .iter()
        .filter(|code| supported.is_empty() || supported.iter().any(|s| s == *code))
        .map(|code| code.to_string())
        .collect();

    for code in supported {
        if code != "en" && !candidates.contains(code) {
            candidates.push(code.clone());
        }
    }
    candidates
}

/// 対話式で言語を選択
pub fn select_language_interactive(supported: &[String]) -> Result<String> {
    let candidates = language_candidates(supported);

    let index = Select::new()
        .with_prompt("翻訳先の言語を選択")
        .items(&candidates)
        .default(0)
        .max_length(15)
        .interact()
        .map_err(|e| RecipeVideoError::Config(format!("言語選択エラー: {}", e)))?;

    Ok(candidates[index].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language() {
        assert_eq!(resolve_language(Some("ES"), Some("fr")), LanguageChoice::Fixed("es".into()));
        assert_eq!(resolve_language(None, Some("fr")), LanguageChoice::Fixed("fr".into()));
        assert_eq!(resolve_language(Some("  "), None), LanguageChoice::Prompt);
        assert_eq!(resolve_language(None, None), LanguageChoice::Prompt);
    }

    #[test]
    fn test_language_candidates_order() {
        let supported: Vec<String> = ["af", "en", "ja", "es", "ko"].iter().map(|s| s.to_string()).collect();
        assert_eq!(language_candidates(&supported), vec!["es", "ja", "af", "ko"]);
    }

    #[test]
    fn test_language_candidates_without_list() {
        assert_eq!(language_candidates(&[]), vec!["es", "fr", "de", "ja", "zh"]);
    }
}
