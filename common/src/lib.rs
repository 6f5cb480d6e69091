//! Recipe Video Common Library
//!
//! CLIと各クライアントで共有される型と純粋ロジック

pub mod catalog;
pub mod error;
pub mod normalizer;
pub mod ordered_set;
pub mod search;
pub mod translation;
pub mod types;
pub mod vision;

pub use catalog::{CatalogFile, CatalogReport, SynonymEntry, VideoCatalog};
pub use error::{Error, Result};
pub use normalizer::{normalize_terms, MatchDetail, NormalizedTerms, TermNormalizer, VideoKind};
pub use search::filter_recipes;
pub use translation::{TranslatedRecipe, TranslationBatch};
pub use types::{parse_recipe_content, split_list, FoodDetection, Nutrition, Profile, Recipe, RecipeContent};
