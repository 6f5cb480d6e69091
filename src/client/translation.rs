//! レシピ翻訳（Google Translate v2）

use super::check_response;
use crate::config::Config;
use crate::error::{RecipeVideoError, Result};
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use recipe_video_common::TranslatedRecipe;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const TRANSLATE_API_URL: &str = "https://translation.googleapis.com/language/translate/v2";

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

/// 翻訳結果
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

#[derive(Deserialize)]
struct LanguagesResponse {
    data: LanguagesData,
}

#[derive(Deserialize)]
struct LanguagesData {
    languages: Vec<Language>,
}

#[derive(Deserialize)]
struct Language {
    language: String,
}

pub struct TranslationClient {
    http: reqwest::Client,
    api_key: String,
}

impl TranslationClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Result<Self> {
        Ok(Self {
            http,
            api_key: config.get_api_key()?,
        })
    }

    /// 1件翻訳
    pub async fn translate_text(
        &self,
        text: &str,
        target: &str,
        source: Option<&str>,
    ) -> Result<Translation> {
        let request = TranslateRequest {
            q: text,
            target,
            source,
            format: "text",
        };

        let response = self
            .http
            .post(TRANSLATE_API_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;
        let response = check_response(response).await?;

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| RecipeVideoError::ApiParse(format!("翻訳応答: {}", e)))?;

        body.data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| RecipeVideoError::ApiParse("翻訳結果が空です".into()))
    }

    /// 対応言語コード一覧（取得失敗時は空）
    pub async fn supported_languages(&self) -> Vec<String> {
        match self.fetch_languages().await {
            Ok(languages) => languages,
            Err(e) => {
                warn!("failed to fetch supported languages: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_languages(&self) -> Result<Vec<String>> {
        let url = format!("{}/languages", TRANSLATE_API_URL);
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;
        let response = check_response(response).await?;

        let body: LanguagesResponse = response
            .json()
            .await
            .map_err(|e| RecipeVideoError::ApiParse(format!("言語一覧: {}", e)))?;
        Ok(body.data.languages.into_iter().map(|l| l.language).collect())
    }

    /// レシピ全体を翻訳して状態に反映
    ///
    /// タイトル・材料・手順をまとめて並行に翻訳し、全件成功した場合のみ反映する。
    pub async fn translate_recipe(&self, state: &mut TranslatedRecipe, target: &str) -> Result<()> {
        let batch = state.batch();
        debug!("translating {} texts into {}", batch.len(), target);

        let progress = ProgressBar::new(batch.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner} 翻訳中 [{bar:30}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let requests = batch.texts().iter().map(|text| {
            let progress = progress.clone();
            async move {
                let result = self.translate_text(text, target, None).await;
                progress.inc(1);
                result.map(|t| t.translated_text)
            }
        });
        let results = join_all(requests).await;
        progress.finish_and_clear();

        if let Some(Err(e)) = results.iter().find(|r| r.is_err()) {
            warn!("translation failed: {}", e);
        }

        state.apply(target, &batch, results)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_request_serialize() {
        let request = TranslateRequest {
            q: "Whisk egg",
            target: "es",
            source: None,
            format: "text",
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"q":"Whisk egg","target":"es","format":"text"}"#);
    }

    #[test]
    fn test_translate_response_parse() {
        let body: TranslateResponse = serde_json::from_str(
            r#"{"data": {"translations": [{"translatedText": "Batir huevo", "detectedSourceLanguage": "en"}]}}"#,
        )
        .unwrap();
        let t = &body.data.translations[0];
        assert_eq!(t.translated_text, "Batir huevo");
        assert_eq!(t.detected_source_language.as_deref(), Some("en"));
    }

    #[test]
    fn test_languages_response_parse() {
        let body: LanguagesResponse = serde_json::from_str(
            r#"{"data": {"languages": [{"language": "es"}, {"language": "ja"}]}}"#,
        )
        .unwrap();
        let codes: Vec<String> = body.data.languages.into_iter().map(|l| l.language).collect();
        assert_eq!(codes, vec!["es", "ja"]);
    }
}
