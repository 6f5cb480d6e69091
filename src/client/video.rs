//! レシピ動画生成
//!
//! 手順文をストック動画IDに正規化し、動画生成サービスへ送る。

use super::{check_response, join_url};
use crate::config::Config;
use crate::error::{RecipeVideoError, Result};
use recipe_video_common::{RecipeContent, TermNormalizer, VideoCatalog};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 動画生成リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRequest {
    pub title: String,
    /// 正規化済みのストック動画ID（材料 → 技法の順）
    pub instructions: Vec<String>,
}

impl VideoRequest {
    /// レシピの手順から生成リクエストを組み立てる
    pub fn from_recipe(recipe: &RecipeContent, catalog: &VideoCatalog) -> Self {
        let instructions = TermNormalizer::new(catalog).normalize(&recipe.instructions);
        Self {
            title: recipe.title.clone(),
            instructions,
        }
    }
}

#[derive(Deserialize)]
struct VideoResponse {
    video_url: Option<String>,
}

pub struct VideoClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    user_id: Option<String>,
}

impl VideoClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.video_base_url.clone(),
            token: config.auth_token.clone(),
            user_id: config.user_id.clone(),
        }
    }

    /// 動画を生成し、再生URLを返す
    pub async fn generate(&self, request: &VideoRequest) -> Result<String> {
        let url = join_url(&self.base_url, "/generate-video");
        debug!("POST {} ({} clips)", url, request.instructions.len());

        let mut builder = self
            .http
            .post(&url)
            .header("x-user-id", self.user_id.as_deref().unwrap_or(""))
            .json(request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = check_response(builder.send().await?).await?;
        let body: VideoResponse = response
            .json()
            .await
            .map_err(|e| RecipeVideoError::ApiParse(format!("動画生成応答: {}", e)))?;

        let path = body
            .video_url
            .ok_or_else(|| RecipeVideoError::ApiCall("動画URLが返されませんでした".into()))?;
        let video_url = join_url(&self.base_url, &path);
        info!("video generated: {}", video_url);
        Ok(video_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_recipe() {
        let recipe = RecipeContent {
            title: "Pancakes".to_string(),
            ingredients: vec!["onion".to_string()],
            instructions: vec![
                "Whisk egg and milk in a bowl".to_string(),
                "Melt butter and flip pancakes".to_string(),
            ],
            ..Default::default()
        };

        let request = VideoRequest::from_recipe(&recipe, &VideoCatalog::builtin());
        assert_eq!(request.title, "Pancakes");
        // 材料は手順から拾う（ingredients欄は使わない）
        assert!(!request.instructions.contains(&"Onion".to_string()));
        assert!(request.instructions.contains(&"Eggs".to_string()));
        assert!(request.instructions.contains(&"Butter".to_string()));
        assert!(request.instructions.contains(&"Beatings eggs and sugar".to_string()));
        assert!(request.instructions.contains(&"Flipping (Pancakes)".to_string()));
    }

    #[test]
    fn test_request_serialize() {
        let request = VideoRequest {
            title: "Soup".into(),
            instructions: vec!["Onion".into(), "Simmering".into()],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"title":"Soup","instructions":["Onion","Simmering"]}"#);
    }

    #[test]
    fn test_video_response_parse() {
        let body: VideoResponse =
            serde_json::from_str(r#"{"video_url": "/videos/pancakes.mp4"}"#).unwrap();
        assert_eq!(body.video_url.as_deref(), Some("/videos/pancakes.mp4"));
    }
}
