use crate::error::{RecipeVideoError, Result};
use recipe_video_common::VideoCatalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_API_BASE_URL: &str = "https://recipesserver-production.up.railway.app";
pub const DEFAULT_VIDEO_BASE_URL: &str = "https://videogenerator-production.up.railway.app";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Google Cloud (Vision / Translate) APIキー
    pub api_key: Option<String>,
    /// レシピAPI
    pub api_base_url: String,
    /// 動画生成サービス
    pub video_base_url: String,
    /// 翻訳先の既定言語（未設定なら対話選択）
    pub default_language: Option<String>,
    pub timeout_seconds: u64,
    /// 画像認識に送る画像の最大辺（px）
    pub max_image_size: u32,
    /// 追加カタログJSON（組み込みカタログにマージ）
    pub catalog_path: Option<PathBuf>,
    pub auth_token: Option<String>,
    pub user_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            video_base_url: DEFAULT_VIDEO_BASE_URL.into(),
            default_language: None,
            timeout_seconds: 120,
            max_image_size: 1024,
            catalog_path: None,
            auth_token: None,
            user_id: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            debug!("config loaded from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecipeVideoError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("recipe-video").join("config.json"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(key) = std::env::var("GOOGLE_API_KEY") {
            if !key.is_empty() {
                return Ok(key);
            }
        }

        self.api_key.clone().ok_or(RecipeVideoError::MissingApiKey)
    }

    /// 認証情報（トークン, ユーザーID）
    pub fn credentials(&self) -> Result<(&str, &str)> {
        match &self.auth_token {
            Some(token) => Ok((token.as_str(), self.user_id.as_deref().unwrap_or(""))),
            None => Err(RecipeVideoError::NotLoggedIn),
        }
    }

    pub fn set_credentials(&mut self, token: String, user_id: Option<String>) {
        self.auth_token = Some(token);
        self.user_id = user_id;
    }

    pub fn clear_credentials(&mut self) {
        self.auth_token = None;
        self.user_id = None;
    }

    /// 認証エラーならログイン情報を破棄する（破棄した場合 true）
    pub fn forget_session_on(&mut self, err: &RecipeVideoError) -> bool {
        if matches!(err, RecipeVideoError::Unauthorized) && self.auth_token.is_some() {
            self.clear_credentials();
            true
        } else {
            false
        }
    }

    /// 使用するカタログを構築（組み込み + 追加カタログ）
    ///
    /// `override_path` はコマンドラインで指定されたカタログで、設定値より優先する。
    pub fn load_catalog(&self, override_path: Option<&Path>, builtin: bool) -> Result<VideoCatalog> {
        let mut catalog = if builtin {
            VideoCatalog::builtin()
        } else {
            VideoCatalog::default()
        };

        if let Some(path) = override_path.or(self.catalog_path.as_deref()) {
            if !path.exists() {
                return Err(RecipeVideoError::FileNotFound(path.display().to_string()));
            }
            let custom = VideoCatalog::from_file(path)?;
            info!(
                "custom catalog merged: {} ({} videos, {} synonyms)",
                path.display(),
                custom.stock().len(),
                custom.synonyms().len()
            );
            catalog.merge(&custom);
            // 不整合は警告のみ
            catalog.validate();
        }

        Ok(catalog)
    }
}
