//! 画像からの食材検出（Cloud Vision）

use super::check_response;
use crate::config::Config;
use crate::error::{RecipeVideoError, Result};
use base64::Engine;
use image::{DynamicImage, GenericImageView, ImageFormat};
use recipe_video_common::vision::{extract_foods, VisionResponse};
use recipe_video_common::FoodDetection;
use serde::Serialize;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

const VISION_API_URL: &str = "https://vision.googleapis.com/v1/images:annotate";

#[derive(Serialize)]
struct AnnotateRequest {
    requests: Vec<ImageRequest>,
}

#[derive(Serialize)]
struct ImageRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    max_results: u32,
}

fn annotate_request(base64_image: String) -> AnnotateRequest {
    AnnotateRequest {
        requests: vec![ImageRequest {
            image: ImageContent {
                content: base64_image,
            },
            features: vec![
                Feature {
                    kind: "LABEL_DETECTION",
                    max_results: 10,
                },
                Feature {
                    kind: "WEB_DETECTION",
                    max_results: 5,
                },
            ],
        }],
    }
}

/// 最大辺に収まるよう縮小したサイズ（縮小不要ならNone）
pub fn fit_within(width: u32, height: u32, max_size: u32) -> Option<(u32, u32)> {
    if max_size == 0 || (width <= max_size && height <= max_size) {
        return None;
    }
    let scale = max_size as f64 / width.max(height) as f64;
    let w = ((width as f64 * scale).round() as u32).max(1);
    let h = ((height as f64 * scale).round() as u32).max(1);
    Some((w, h))
}

/// 画像を読み込み、縮小してJPEGのBase64に変換
pub fn encode_image(path: &Path, max_size: u32) -> Result<String> {
    if !path.exists() {
        return Err(RecipeVideoError::FileNotFound(path.display().to_string()));
    }

    let img = image::open(path)
        .map_err(|e| RecipeVideoError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let (width, height) = img.dimensions();
    let img = match fit_within(width, height, max_size) {
        Some((w, h)) => {
            debug!("resize {}x{} -> {}x{}", width, height, w, h);
            img.resize(w, h, image::imageops::FilterType::Triangle)
        }
        None => img,
    };

    // JPEGはアルファ非対応
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| RecipeVideoError::ImageLoad(format!("JPEG変換エラー: {}", e)))?;

    Ok(base64::engine::general_purpose::STANDARD.encode(buffer.into_inner()))
}

pub struct VisionClient {
    http: reqwest::Client,
    api_key: String,
    max_image_size: u32,
}

impl VisionClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Result<Self> {
        Ok(Self {
            http,
            api_key: config.get_api_key()?,
            max_image_size: config.max_image_size,
        })
    }

    /// 画像から食材候補を検出
    pub async fn detect_foods(&self, path: &Path) -> Result<Vec<FoodDetection>> {
        let content = encode_image(path, self.max_image_size)?;
        debug!("{}: {} bytes (base64)", path.display(), content.len());

        let response = self
            .http
            .post(VISION_API_URL)
            .query(&[("key", self.api_key.as_str())])
            .json(&annotate_request(content))
            .send()
            .await?;
        let response = check_response(response).await?;

        let body: VisionResponse = response
            .json()
            .await
            .map_err(|e| RecipeVideoError::ApiParse(format!("Vision応答: {}", e)))?;

        let foods = extract_foods(&body);
        debug!("{}: {} foods detected", path.display(), foods.len());
        Ok(foods)
    }
}
