//! 外部サービス連携
//!
//! - recipes: レシピAPI（ログイン・一覧・詳細・生成）
//! - vision: 画像からの食材検出
//! - translation: レシピ翻訳
//! - video: レシピ動画生成

pub mod recipes;
pub mod translation;
pub mod video;
pub mod vision;

pub use recipes::RecipeClient;
pub use translation::TranslationClient;
pub use video::VideoClient;
pub use vision::VisionClient;

use crate::config::Config;
use crate::error::{RecipeVideoError, Result};
use std::time::Duration;

/// 設定のタイムアウトでHTTPクライアントを構築
pub fn build_http_client(config: &Config) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?;
    Ok(client)
}

/// URLを連結（末尾・先頭のスラッシュを吸収）
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// エラーレスポンス本文からメッセージを取り出す
///
/// `detail` / `message` / `error.message` の順に探し、なければステータスを返す。
pub fn error_detail(status: reqwest::StatusCode, body: &str) -> String {
    let value: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let message = value.as_ref().and_then(|v| {
        v.get("detail")
            .and_then(|d| d.as_str())
            .or_else(|| v.get("message").and_then(|m| m.as_str()))
            .or_else(|| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
            })
            .map(String::from)
    });

    message.unwrap_or_else(|| format!("HTTP {}", status))
}

/// ステータスを検査し、失敗ならエラーに変換
pub(crate) async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(RecipeVideoError::Unauthorized);
    }

    let body = response.text().await.unwrap_or_default();
    Err(RecipeVideoError::ApiCall(error_detail(status, &body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://a.example/", "/recipes"), "https://a.example/recipes");
        assert_eq!(join_url("https://a.example", "recipes/1"), "https://a.example/recipes/1");
    }

    #[test]
    fn test_error_detail_variants() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(error_detail(status, r#"{"detail": "no instructions"}"#), "no instructions");
        assert_eq!(error_detail(status, r#"{"message": "Login failed"}"#), "Login failed");
        assert_eq!(
            error_detail(status, r#"{"error": {"code": 403, "message": "API key invalid"}}"#),
            "API key invalid"
        );
    }

    #[test]
    fn test_error_detail_fallback() {
        let detail = error_detail(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert!(detail.contains("500"));
    }
}
