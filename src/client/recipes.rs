//! レシピAPIクライアント

use super::{check_response, join_url};
use crate::config::Config;
use crate::error::{RecipeVideoError, Result};
use recipe_video_common::{Profile, Recipe};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// ログインレスポンス
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

#[derive(Debug, Deserialize)]
pub struct LoginUser {
    /// 数値または文字列で返る
    #[serde(default)]
    pub id: serde_json::Value,
}

impl LoginResponse {
    /// ユーザーIDを文字列で取得
    pub fn user_id(&self) -> Option<String> {
        let id = &self.user.as_ref()?.id;
        match id {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// 一覧レスポンス（`{"recipes": [...]}` または配列そのもの）
#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeList {
    Wrapped { recipes: Vec<Recipe> },
    Bare(Vec<Recipe>),
}

impl RecipeList {
    fn into_vec(self) -> Vec<Recipe> {
        match self {
            RecipeList::Wrapped { recipes } => recipes,
            RecipeList::Bare(recipes) => recipes,
        }
    }
}

#[derive(Deserialize)]
struct RecipeEnvelope {
    recipe: Recipe,
}

/// レシピ生成リクエスト
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub ingredients: Vec<String>,
    pub meal_type: String,
    pub dietary_preferences: Vec<String>,
}

/// 新規登録リクエスト
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub dietary_preference: String,
    pub allergies: Vec<String>,
    /// 登録直後は常に active
    pub status: &'static str,
}

impl RegisterRequest {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
            dietary_preference: String::new(),
            allergies: Vec::new(),
            status: "active",
        }
    }
}

/// プロフィール更新（指定した項目のみ送る）
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_preference: Option<String>,
    /// カンマ区切り
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.dietary_preference.is_none() && self.allergies.is_none() && self.skill_level.is_none()
    }
}

/// アカウント操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Activate,
    Deactivate,
    Delete,
}

impl AccountAction {
    /// HTTPメソッドとパス
    pub fn endpoint(&self) -> (reqwest::Method, &'static str) {
        match self {
            AccountAction::Activate => (reqwest::Method::POST, "/auth/activate"),
            AccountAction::Deactivate => (reqwest::Method::POST, "/auth/deactivate"),
            AccountAction::Delete => (reqwest::Method::DELETE, "/auth"),
        }
    }

    /// 実行後にローカルの認証情報を消すか
    pub fn clears_credentials(&self) -> bool {
        matches!(self, AccountAction::Delete)
    }
}

impl std::fmt::Display for AccountAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountAction::Activate => write!(f, "activate"),
            AccountAction::Deactivate => write!(f, "deactivate"),
            AccountAction::Delete => write!(f, "delete"),
        }
    }
}

pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    user_id: Option<String>,
}

impl RecipeClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.api_base_url.clone(),
            token: config.auth_token.clone(),
            user_id: config.user_id.clone(),
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder> {
        let token = self.token.as_deref().ok_or(RecipeVideoError::NotLoggedIn)?;
        Ok(request
            .bearer_auth(token)
            .header("x-user-id", self.user_id.as_deref().unwrap_or("")))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = join_url(&self.base_url, "/login");
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let response = check_response(response).await?;

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| RecipeVideoError::ApiParse(format!("ログイン応答: {}", e)))?;
        info!("logged in (user_id={:?})", login.user_id());
        Ok(login)
    }

    pub async fn logout(&self) -> Result<()> {
        let url = join_url(&self.base_url, "/logout");
        debug!("POST {}", url);

        let request = self.authorized(self.http.post(&url))?;
        check_response(request.send().await?).await?;
        Ok(())
    }

    /// 新規登録
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let url = join_url(&self.base_url, "/auth/register");
        debug!("POST {}", url);

        check_response(self.http.post(&url).json(request).send().await?).await?;
        info!("account registered: {}", request.email);
        Ok(())
    }

    pub async fn profile(&self) -> Result<Profile> {
        let url = join_url(&self.base_url, "/auth/profile");
        debug!("GET {}", url);

        let response = check_response(self.authorized(self.http.get(&url))?.send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| RecipeVideoError::ApiParse(format!("プロフィール: {}", e)))
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        let url = join_url(&self.base_url, "/auth/profile");
        debug!("PUT {}", url);

        let request = self.authorized(self.http.put(&url).json(update))?;
        check_response(request.send().await?).await?;
        Ok(())
    }

    /// 有効化・無効化・削除
    pub async fn account_action(&self, action: AccountAction) -> Result<()> {
        let (method, path) = action.endpoint();
        let url = join_url(&self.base_url, path);
        debug!("{} {}", method, url);

        let request = self.authorized(self.http.request(method, &url))?;
        check_response(request.send().await?).await?;
        info!("account {}", action);
        Ok(())
    }

    /// レシピ一覧（食事カテゴリで絞り込み可）
    pub async fn list(&self, meal_type: Option<&str>) -> Result<Vec<Recipe>> {
        let url = join_url(&self.base_url, "/recipes");
        debug!("GET {} (mealType={:?})", url, meal_type);

        let mut request = self.http.get(&url);
        if let Some(meal_type) = meal_type {
            request = request.query(&[("mealType", meal_type)]);
        }

        let response = check_response(self.authorized(request)?.send().await?).await?;
        let list: RecipeList = response
            .json()
            .await
            .map_err(|e| RecipeVideoError::ApiParse(format!("レシピ一覧: {}", e)))?;
        Ok(list.into_vec())
    }

    pub async fn get(&self, id: &str) -> Result<Recipe> {
        let url = join_url(&self.base_url, &format!("/recipes/{}", id));
        debug!("GET {}", url);

        let response = check_response(self.authorized(self.http.get(&url))?.send().await?).await?;
        let envelope: RecipeEnvelope = response
            .json()
            .await
            .map_err(|e| RecipeVideoError::ApiParse(format!("レシピ詳細: {}", e)))?;
        Ok(envelope.recipe)
    }

    /// 材料からレシピを生成
    pub async fn generate(&self, request: &GenerateRequest) -> Result<Recipe> {
        if request.ingredients.is_empty() {
            return Err(RecipeVideoError::NoIngredients);
        }

        let url = join_url(&self.base_url, "/generate");
        debug!("POST {} ({} ingredients)", url, request.ingredients.len());

        let response =
            check_response(self.authorized(self.http.post(&url).json(request))?.send().await?)
                .await?;
        let recipe: Recipe = response
            .json()
            .await
            .map_err(|e| RecipeVideoError::ApiParse(format!("生成レシピ: {}", e)))?;
        info!("recipe generated: {}", recipe.id);
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_user_id_number() {
        let login: LoginResponse =
            serde_json::from_str(r#"{"token": "t", "user": {"id": 42, "email": "a@b.c"}}"#).unwrap();
        assert_eq!(login.user_id().as_deref(), Some("42"));
    }

    #[test]
    fn test_login_user_id_string() {
        let login: LoginResponse =
            serde_json::from_str(r#"{"token": "t", "user": {"id": "u-1"}}"#).unwrap();
        assert_eq!(login.user_id().as_deref(), Some("u-1"));
    }

    #[test]
    fn test_login_without_user() {
        let login: LoginResponse = serde_json::from_str(r#"{"token": "t"}"#).unwrap();
        assert_eq!(login.user_id(), None);
    }

    #[test]
    fn test_recipe_list_shapes() {
        let wrapped: RecipeList =
            serde_json::from_str(r#"{"recipes": [{"_id": "a"}, {"_id": "b"}]}"#).unwrap();
        assert_eq!(wrapped.into_vec().len(), 2);

        let bare: RecipeList = serde_json::from_str(r#"[{"_id": "a"}]"#).unwrap();
        assert_eq!(bare.into_vec()[0].id, "a");
    }

    #[test]
    fn test_generate_request_serialize() {
        let request = GenerateRequest {
            ingredients: vec!["egg".into()],
            meal_type: "Breakfast".into(),
            dietary_preferences: vec!["Vegetarian".into()],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"mealType\":\"Breakfast\""));
        assert!(json.contains("\"dietaryPreferences\":[\"Vegetarian\"]"));
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_ingredients() {
        let client = RecipeClient::new(reqwest::Client::new(), &Config::default());
        let request = GenerateRequest {
            ingredients: vec![],
            meal_type: "Lunch".into(),
            dietary_preferences: vec![],
        };
        assert!(matches!(
            client.generate(&request).await,
            Err(RecipeVideoError::NoIngredients)
        ));
    }

    #[tokio::test]
    async fn test_list_requires_login() {
        let client = RecipeClient::new(reqwest::Client::new(), &Config::default());
        assert!(matches!(client.list(None).await, Err(RecipeVideoError::NotLoggedIn)));
    }

    #[test]
    fn test_register_request_serialize() {
        let mut request = RegisterRequest::new(
            "Ana".into(),
            "ana@example.com".into(),
            "secret".into(),
        );
        request.allergies = vec!["nuts".into()];

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["dietaryPreference"], "");
        assert_eq!(json["allergies"][0], "nuts");
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn test_profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            skill_level: Some("advanced".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"skillLevel":"advanced"}"#);
        assert!(ProfileUpdate::default().is_empty());
    }

    #[test]
    fn test_account_action_endpoints() {
        assert_eq!(AccountAction::Activate.endpoint(), (reqwest::Method::POST, "/auth/activate"));
        assert_eq!(AccountAction::Deactivate.endpoint(), (reqwest::Method::POST, "/auth/deactivate"));
        assert_eq!(AccountAction::Delete.endpoint(), (reqwest::Method::DELETE, "/auth"));
        assert!(AccountAction::Delete.clears_credentials());
        assert!(!AccountAction::Deactivate.clears_credentials());
    }

    #[tokio::test]
    async fn test_account_calls_require_login() {
        let client = RecipeClient::new(reqwest::Client::new(), &Config::default());
        assert!(matches!(client.profile().await, Err(RecipeVideoError::NotLoggedIn)));
        assert!(matches!(
            client.update_profile(&ProfileUpdate::default()).await,
            Err(RecipeVideoError::NotLoggedIn)
        ));
        assert!(matches!(
            client.account_action(AccountAction::Delete).await,
            Err(RecipeVideoError::NotLoggedIn)
        ));
    }
}
