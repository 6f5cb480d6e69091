use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeVideoError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`recipe-video config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("ログインしていません。`recipe-video login` を実行してください")]
    NotLoggedIn,

    #[error("認証が無効です（再ログインしてください）")]
    Unauthorized,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("材料が指定されていません。--ingredient か --image で指定してください")]
    NoIngredients,

    #[error("カタログに不整合があります（{0}件）")]
    InvalidCatalog(usize),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] recipe_video_common::Error),
}

pub type Result<T> = std::result::Result<T, RecipeVideoError>;
