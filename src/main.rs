use clap::Parser;
use dialoguer::{Confirm, Password};
use recipe_video_common::search::match_category;
use recipe_video_common::vision::{merge_ingredients, INGREDIENT_MIN_CONFIDENCE};
use recipe_video_common::{
    filter_recipes, parse_recipe_content, split_list, Profile, Recipe, RecipeContent, TermNormalizer,
    TranslatedRecipe,
};
use recipe_video_rust::client::recipes::{AccountAction, GenerateRequest, ProfileUpdate, RegisterRequest};
use recipe_video_rust::client::video::VideoRequest;
use recipe_video_rust::client::{
    build_http_client, RecipeClient, TranslationClient, VideoClient, VisionClient,
};
use recipe_video_rust::{cli, config, error, language, scanner};
use cli::{AccountCommand, Cli, Commands, OutputFormat};
use config::Config;
use error::{RecipeVideoError, Result};
use language::LanguageChoice;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "recipe_video_rust=debug,recipe_video_common=debug"
    } else {
        "recipe_video_rust=warn,recipe_video_common=warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;
    let requires_auth = cli.command.requires_auth();

    let result = run(cli, config).await;
    if let Err(e) = &result {
        if requires_auth {
            // 元のエラーを返すため、ここでの失敗は警告のみ
            if let Ok(mut config) = Config::load() {
                if config.forget_session_on(e) {
                    match config.save() {
                        Ok(()) => eprintln!("ログイン情報を削除しました。`recipe-video login` で再ログインしてください"),
                        Err(save_err) => tracing::warn!("failed to clear stale login: {}", save_err),
                    }
                }
            }
        }
    }
    result
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Normalize { terms, file, with_ingredients, explain, format } => {
            let catalog = config.load_catalog(cli.catalog.as_deref(), !cli.no_builtin)?;
            let terms = collect_terms(terms, file.as_deref(), with_ingredients)?;
            let normalizer = TermNormalizer::new(&catalog);
            let classified = normalizer.classify(&terms);

            match format {
                OutputFormat::Json => {
                    let value = if explain {
                        serde_json::json!({
                            "videos": classified.clone().into_ordered(),
                            "ingredients": classified.ingredients,
                            "techniques": classified.techniques,
                            "matches": normalizer.explain(&terms),
                        })
                    } else {
                        serde_json::json!(classified.into_ordered())
                    };
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                OutputFormat::Text => {
                    if classified.is_empty() {
                        println!("一致する動画はありません");
                    } else {
                        for id in classified.clone().into_ordered() {
                            println!("{}", id);
                        }
                    }

                    if explain {
                        println!("\n一致したキー:");
                        for detail in normalizer.explain(&terms) {
                            println!("  {} -> {} ({})", detail.key, detail.video, detail.kind);
                        }
                        println!(
                            "\n材料 {}件 / 技法 {}件",
                            classified.ingredients.len(),
                            classified.techniques.len()
                        );
                    }
                }
            }
        }

        Commands::Catalog { check, json } => {
            let catalog = config.load_catalog(cli.catalog.as_deref(), !cli.no_builtin)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&catalog.to_catalog_file())?);
            } else {
                println!("カタログ:");
                println!("  ストック動画: {}", catalog.stock().len());
                println!("  技法: {}", catalog.techniques().len());
                println!("  同義語: {}", catalog.synonyms().len());
            }

            if check {
                let report = catalog.validate();
                if report.is_clean() {
                    println!("✔ 不整合はありません");
                } else {
                    for entry in &report.dangling_synonyms {
                        println!("✗ 同義語 '{}' -> '{}' はカタログにありません", entry.key, entry.video);
                    }
                    for id in &report.dangling_techniques {
                        println!("✗ 技法 '{}' はカタログにありません", id);
                    }
                    return Err(RecipeVideoError::InvalidCatalog(
                        report.dangling_synonyms.len() + report.dangling_techniques.len(),
                    ));
                }
            }
        }

        Commands::Detect { path, format } => {
            if format == OutputFormat::Text {
                println!("🔍 recipe-video - 食材検出\n");
                println!("[1/2] 画像をスキャン中...");
            }
            let images = scanner::collect_images(&path)?;
            if format == OutputFormat::Text {
                println!("✔ {}枚の画像を検出\n", images.len());
                println!("[2/2] 画像認識中...");
            }

            let vision = VisionClient::new(build_http_client(&config)?, &config)?;
            let mut results = Vec::new();
            for image in &images {
                let foods = vision.detect_foods(&image.path).await?;
                if format == OutputFormat::Text {
                    println!("- {}", image.file_name);
                    if foods.is_empty() {
                        println!("    (食材なし)");
                    }
                    for food in &foods {
                        println!("    {} ({:.0}%)", food.name, food.confidence * 100.0);
                    }
                }
                results.push(serde_json::json!({ "file": image.file_name, "foods": foods }));
            }

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
                OutputFormat::Text => println!("\n✅ 検出完了"),
            }
        }

        Commands::Generate { ingredients, image, meal_type, diet } => {
            println!("🍳 recipe-video - レシピ生成\n");
            let http = build_http_client(&config)?;

            let foods = match image {
                Some(image) => {
                    println!("[1/2] 写真から食材を検出中...");
                    let vision = VisionClient::new(http.clone(), &config)?;
                    vision.detect_foods(&image).await?
                }
                None => Vec::new(),
            };
            // 入力した材料も小文字に揃えてから重複を除く
            let ingredients = merge_ingredients(&ingredients, &foods, INGREDIENT_MIN_CONFIDENCE);
            println!("✔ 材料: {}\n", ingredients.join(", "));

            println!("[2/2] レシピを生成中...");
            let request = GenerateRequest {
                ingredients,
                meal_type: canonical_meal_type(&meal_type),
                dietary_preferences: diet,
            };
            let recipe = RecipeClient::new(http, &config).generate(&request).await?;
            println!("✔ 生成完了 (ID: {})\n", recipe.id);
            print_content(&recipe.recipe);
        }

        Commands::List { meal_type, search, format } => {
            let meal_type = meal_type.map(|m| canonical_meal_type(&m));
            let client = RecipeClient::new(build_http_client(&config)?, &config);
            let recipes = client.list(meal_type.as_deref()).await?;
            let filtered = filter_recipes(&recipes, search.as_deref().unwrap_or(""));

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&filtered)?),
                OutputFormat::Text => {
                    if filtered.is_empty() {
                        println!("レシピがありません");
                    }
                    for recipe in &filtered {
                        print_summary(recipe);
                    }
                    println!("\n{}件", filtered.len());
                }
            }
        }

        Commands::Show { id, format } => {
            let client = RecipeClient::new(build_http_client(&config)?, &config);
            let recipe = client.get(&id).await?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recipe)?),
                OutputFormat::Text => {
                    print_summary(&recipe);
                    println!();
                    print_content(&recipe.recipe);
                }
            }
        }

        Commands::Translate { id, lang, format } => {
            let http = build_http_client(&config)?;
            let recipe = RecipeClient::new(http.clone(), &config).get(&id).await?;
            let translator = TranslationClient::new(http, &config)?;

            let target = match language::resolve_language(lang.as_deref(), config.default_language.as_deref()) {
                LanguageChoice::Fixed(code) => code,
                LanguageChoice::Prompt => {
                    let supported = translator.supported_languages().await;
                    language::select_language_interactive(&supported)?
                }
            };

            let mut state = TranslatedRecipe::new(recipe.recipe);
            if target != state.language() {
                translator.translate_recipe(&mut state, &target).await?;
            }

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(state.current())?),
                OutputFormat::Text => {
                    println!("🌐 {} ({})\n", recipe.id, state.language());
                    print_content(state.current());
                }
            }
        }

        Commands::Video { id, dry_run } => {
            println!("🎬 recipe-video - 動画生成\n");
            let catalog = config.load_catalog(cli.catalog.as_deref(), !cli.no_builtin)?;
            let http = build_http_client(&config)?;

            println!("[1/3] レシピを取得中...");
            let recipe = RecipeClient::new(http.clone(), &config).get(&id).await?;
            println!("✔ {}\n", recipe.recipe.title);

            println!("[2/3] 手順を動画に変換中...");
            let request = VideoRequest::from_recipe(&recipe.recipe, &catalog);
            println!("✔ {}本の動画: {}\n", request.instructions.len(), request.instructions.join(", "));

            if dry_run {
                println!("{}", serde_json::to_string_pretty(&request)?);
                return Ok(());
            }

            println!("[3/3] 動画を生成中...");
            let url = VideoClient::new(http, &config).generate(&request).await?;
            println!("✔ 動画URL: {}", url);
            println!("\n✅ 完了");
        }

        Commands::Login { email, password } => {
            let mut config = config;
            let client = RecipeClient::new(build_http_client(&config)?, &config);
            let login = client.login(&email, &password).await?;
            let user_id = login.user_id();
            config.set_credentials(login.token, user_id);
            config.save()?;
            println!("✔ ログインしました");
        }

        Commands::Logout => {
            let mut config = config;
            if config.credentials().is_ok() {
                let client = RecipeClient::new(build_http_client(&config)?, &config);
                // サーバー側の失敗に関わらずローカルの認証情報は消す
                if let Err(e) = client.logout().await {
                    tracing::warn!("logout request failed: {}", e);
                }
            }
            config.clear_credentials();
            config.save()?;
            println!("✔ ログアウトしました");
        }

        Commands::Signup { name, email, password, diet, allergies } => {
            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("パスワード")
                    .with_confirmation("パスワード（確認）", "パスワードが一致しません")
                    .interact()
                    .map_err(|e| RecipeVideoError::Config(format!("パスワード入力エラー: {}", e)))?,
            };

            let mut request = RegisterRequest::new(name, email, password);
            request.dietary_preference = diet.unwrap_or_default();
            request.allergies = allergies.as_deref().map(split_list).unwrap_or_default();

            let client = RecipeClient::new(build_http_client(&config)?, &config);
            client.register(&request).await?;
            println!("✔ アカウントを作成しました。`recipe-video login` でログインしてください");
        }

        Commands::Account { action } => {
            let mut config = config;
            let client = RecipeClient::new(build_http_client(&config)?, &config);

            match action {
                AccountCommand::Show { format } => {
                    let profile = client.profile().await?;
                    match format {
                        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
                        OutputFormat::Text => print_profile(&profile),
                    }
                }
                AccountCommand::Update { diet, allergies, skill_level } => {
                    let update = ProfileUpdate {
                        dietary_preference: diet,
                        allergies,
                        skill_level,
                    };
                    if update.is_empty() {
                        return Err(RecipeVideoError::Config(
                            "更新する項目を --diet / --allergies / --skill-level で指定してください".into(),
                        ));
                    }
                    client.update_profile(&update).await?;
                    println!("✔ プロフィールを更新しました\n");
                    print_profile(&client.profile().await?);
                }
                AccountCommand::Activate => run_account_action(&client, &mut config, AccountAction::Activate).await?,
                AccountCommand::Deactivate => run_account_action(&client, &mut config, AccountAction::Deactivate).await?,
                AccountCommand::Delete { yes } => {
                    let confirmed = yes
                        || Confirm::new()
                            .with_prompt("アカウントを削除します。よろしいですか？")
                            .default(false)
                            .interact()
                            .map_err(|e| RecipeVideoError::Config(format!("確認入力エラー: {}", e)))?;
                    if !confirmed {
                        println!("中止しました");
                        return Ok(());
                    }
                    run_account_action(&client, &mut config, AccountAction::Delete).await?;
                }
            }
        }

        Commands::Config { set_api_key, set_api_url, set_video_url, set_language, set_catalog, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(key) = set_api_key {
                config.api_key = Some(key);
                println!("✔ APIキーを設定しました");
                changed = true;
            }
            if let Some(url) = set_api_url {
                config.api_base_url = url;
                println!("✔ レシピAPIのURLを設定しました");
                changed = true;
            }
            if let Some(url) = set_video_url {
                config.video_base_url = url;
                println!("✔ 動画生成サービスのURLを設定しました");
                changed = true;
            }
            if let Some(lang) = set_language {
                config.default_language = Some(lang.to_lowercase());
                println!("✔ 既定の翻訳先言語を設定しました");
                changed = true;
            }
            if let Some(path) = set_catalog {
                if !path.exists() {
                    return Err(RecipeVideoError::FileNotFound(path.display().to_string()));
                }
                config.catalog_path = Some(absolute(path));
                println!("✔ 追加カタログを設定しました");
                changed = true;
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  レシピAPI: {}", config.api_base_url);
                println!("  動画生成: {}", config.video_base_url);
                println!("  翻訳先言語: {}", config.default_language.as_deref().unwrap_or("未設定"));
                println!("  最大画像サイズ: {}px", config.max_image_size);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!(
                    "  追加カタログ: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  APIキー: {}", if config.api_key.is_some() { "設定済み" } else { "未設定" });
                println!("  ログイン: {}", if config.auth_token.is_some() { "済み" } else { "未" });
            }
        }
    }

    Ok(())
}

/// 正規化の対象を集める（引数 → レシピファイルの手順 → 材料）
fn collect_terms(terms: Vec<String>, file: Option<&Path>, with_ingredients: bool) -> Result<Vec<String>> {
    let mut collected = terms;

    if let Some(path) = file {
        if !path.exists() {
            return Err(RecipeVideoError::FileNotFound(path.display().to_string()));
        }
        let content = parse_recipe_content(&std::fs::read_to_string(path)?)?;
        collected.extend(content.instructions);
        if with_ingredients {
            collected.extend(content.ingredients);
        }
    }

    Ok(collected)
}

async fn run_account_action(client: &RecipeClient, config: &mut Config, action: AccountAction) -> Result<()> {
    client.account_action(action).await?;

    if action.clears_credentials() {
        config.clear_credentials();
        config.save()?;
        println!("✔ アカウントを削除しました（ログイン情報も削除）");
    } else {
        println!("✔ アカウントを{}しました\n", if action == AccountAction::Activate { "有効化" } else { "無効化" });
        print_profile(&client.profile().await?);
    }
    Ok(())
}

fn print_profile(profile: &Profile) {
    println!("プロフィール:");
    println!("  名前: {}", profile.name);
    println!("  メール: {}", profile.email);
    println!("  食事の好み: {}", profile.dietary_preference);
    println!("  アレルギー: {}", profile.allergies.join(", "));
    println!("  料理の腕前: {}", profile.skill_level);
    println!("  状態: {}", profile.status);
}

/// 食事カテゴリの表記を揃える（未知のカテゴリはそのまま）
fn canonical_meal_type(name: &str) -> String {
    match_category(name).map(String::from).unwrap_or_else(|| name.to_string())
}

fn absolute(path: PathBuf) -> PathBuf {
    path.canonicalize().unwrap_or(path)
}

fn print_summary(recipe: &Recipe) {
    let title = if recipe.recipe.title.is_empty() { "(無題)" } else { recipe.recipe.title.as_str() };
    println!("{}  {}  [{}]", recipe.id, title, recipe.meal_type);
}

fn print_content(content: &RecipeContent) {
    println!("# {}", content.title);

    println!("\n材料:");
    for ingredient in &content.ingredients {
        println!("  - {}", ingredient);
    }

    println!("\n手順:");
    for (i, step) in content.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    let n = &content.nutrition;
    if !n.calories.is_empty() {
        println!(
            "\n栄養: {} kcal / 炭水化物 {} / たんぱく質 {} / 脂質 {} / 食物繊維 {}",
            n.calories, n.carbohydrates, n.protein, n.fat, n.fiber
        );
    }
}
