use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-video")]
#[command(about = "レシピ検索・生成とレシピ動画用の用語正規化ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 追加カタログJSON（組み込みカタログにマージ）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// 組み込みカタログを使わない
    #[arg(long, global = true)]
    pub no_builtin: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 材料・手順をストック動画名に正規化
    Normalize {
        /// 正規化する用語（材料名や手順文）
        terms: Vec<String>,

        /// レシピJSONファイル（手順を対象にする）
        #[arg(long)]
        file: Option<PathBuf>,

        /// レシピJSONの材料も対象にする
        #[arg(long)]
        with_ingredients: bool,

        /// 一致したキーを表示
        #[arg(long)]
        explain: bool,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// カタログを表示・検査
    Catalog {
        /// 不整合（存在しない動画を指す同義語など）を検査
        #[arg(long)]
        check: bool,

        /// カタログ全体をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 写真から食材を検出
    Detect {
        /// 画像ファイルまたはフォルダ
        #[arg(required = true)]
        path: PathBuf,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 材料からレシピを生成
    Generate {
        /// 材料（複数指定可）
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,

        /// 食材写真（検出した食材を材料に追加）
        #[arg(long)]
        image: Option<PathBuf>,

        /// 食事カテゴリ
        #[arg(short, long, default_value = "Dinner")]
        meal_type: String,

        /// 食事制限（複数指定可）
        #[arg(short, long = "diet")]
        diet: Vec<String>,
    },

    /// レシピ一覧
    List {
        /// 食事カテゴリで絞り込み
        #[arg(short, long)]
        meal_type: Option<String>,

        /// タイトル・材料で検索
        #[arg(short, long)]
        search: Option<String>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// レシピ詳細
    Show {
        /// レシピID
        #[arg(required = true)]
        id: String,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// レシピを翻訳して表示
    Translate {
        /// レシピID
        #[arg(required = true)]
        id: String,

        /// 翻訳先言語（省略時は設定値、未設定なら対話選択）
        #[arg(short, long)]
        lang: Option<String>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// レシピ動画を生成
    Video {
        /// レシピID
        #[arg(required = true)]
        id: String,

        /// 送信内容を表示するだけで生成しない
        #[arg(long)]
        dry_run: bool,
    },

    /// ログイン
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// ログアウト
    Logout,

    /// アカウントを新規登録
    Signup {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        /// 省略時は対話入力（確認あり）
        #[arg(short, long)]
        password: Option<String>,

        /// 食事の好み
        #[arg(short, long)]
        diet: Option<String>,

        /// アレルギー（カンマ区切り）
        #[arg(short, long)]
        allergies: Option<String>,
    },

    /// アカウント管理
    Account {
        #[command(subcommand)]
        action: AccountCommand,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// レシピAPIのURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 動画生成サービスのURLを設定
        #[arg(long)]
        set_video_url: Option<String>,

        /// 既定の翻訳先言語を設定
        #[arg(long)]
        set_language: Option<String>,

        /// 追加カタログJSONを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// プロフィールを表示
    Show {
        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// プロフィールを更新
    Update {
        /// 食事の好み
        #[arg(short, long)]
        diet: Option<String>,

        /// アレルギー（カンマ区切り）
        #[arg(short, long)]
        allergies: Option<String>,

        /// 料理の腕前
        #[arg(short, long)]
        skill_level: Option<String>,
    },

    /// アカウントを有効化
    Activate,

    /// アカウントを無効化
    Deactivate,

    /// アカウントを削除（ログイン情報も消える）
    Delete {
        /// 確認なしで削除
        #[arg(short, long)]
        yes: bool,
    },
}

impl Commands {
    /// ログイン済みの認証情報を使うコマンドか
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Commands::Generate { .. }
                | Commands::List { .. }
                | Commands::Show { .. }
                | Commands::Translate { .. }
                | Commands::Video { .. }
                | Commands::Logout
                | Commands::Account { .. }
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
