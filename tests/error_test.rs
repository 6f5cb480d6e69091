//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use recipe_video_rust::error::RecipeVideoError;
use recipe_video_rust::scanner;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, RecipeVideoError::FolderNotFound(_)));
}

/// 画像のないフォルダを検出対象にした場合
#[test]
fn test_collect_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();

    let result = scanner::collect_images(dir.path());
    assert!(matches!(result, Err(RecipeVideoError::NoImagesFound(_))));
}

/// RecipeVideoErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        RecipeVideoError::Config("テスト設定エラー".to_string()),
        RecipeVideoError::MissingApiKey,
        RecipeVideoError::NotLoggedIn,
        RecipeVideoError::Unauthorized,
        RecipeVideoError::FileNotFound("food.jpg".to_string()),
        RecipeVideoError::FolderNotFound("/path/to/folder".to_string()),
        RecipeVideoError::ImageLoad("壊れた画像".to_string()),
        RecipeVideoError::NoImagesFound("フォルダ".to_string()),
        RecipeVideoError::NoIngredients,
        RecipeVideoError::InvalidCatalog(2),
        RecipeVideoError::ApiCall("API呼び出し失敗".to_string()),
        RecipeVideoError::ApiParse("不正な応答".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiKeyエラーのメッセージ確認
#[test]
fn test_missing_api_key_message() {
    let display = format!("{}", RecipeVideoError::MissingApiKey);

    assert!(display.contains("APIキー"));
    assert!(display.contains("recipe-video config"));
}

/// NotLoggedInエラーのメッセージ確認
#[test]
fn test_not_logged_in_message() {
    let display = format!("{}", RecipeVideoError::NotLoggedIn);
    assert!(display.contains("recipe-video login"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: RecipeVideoError = io_err.into();

    assert!(matches!(err, RecipeVideoError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: RecipeVideoError = json_err.into();

    assert!(matches!(err, RecipeVideoError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_transparent() {
    let common_err = recipe_video_common::Error::Translation {
        section: "instructions".to_string(),
    };
    let err: RecipeVideoError = common_err.into();

    assert!(matches!(err, RecipeVideoError::Common(_)));
    assert_eq!(
        format!("{}", err),
        "Translation error: failed to translate instructions"
    );
}
