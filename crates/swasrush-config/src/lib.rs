pub mod account;
pub mod error;

pub use account::{AccountConfig, AccountRecord};
pub use error::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 設定ファイル全体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub accounts: Vec<AccountRecord>,

    /// 通知先。未指定の場合はログ出力のみ
    #[serde(default)]
    pub notify: Option<NotifyConfig>,
}

/// Where the final report is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotifyConfig {
    /// Write the report to the log only
    Log,

    /// POST `{"title", "body"}` as JSON
    Webhook {
        url: String,
        #[serde(default)]
        headers: BTreeMap<String, String>,
    },

    /// Run a program with title and body appended as the last two arguments
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

/// 設定ファイルを読み込み、`accounts` キーを検証する
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigFormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// 文字列から設定を解析する
///
/// 構文エラーと `accounts` キー欠落は別のエラーとして返す。
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    let document: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(ConfigFormatError::Parse)?;

    let accounts = match &document {
        serde_yaml::Value::Mapping(map) => map.get("accounts"),
        _ => None,
    };
    match accounts {
        None | Some(serde_yaml::Value::Null) => return Err(ConfigFormatError::MissingAccounts),
        Some(serde_yaml::Value::Sequence(_)) => {}
        Some(_) => return Err(ConfigFormatError::AccountsNotSequence),
    }

    serde_yaml::from_value(document).map_err(ConfigFormatError::InvalidRecord)
}

/// 設定ファイルを探す
///
/// 以下の優先順位で検索:
/// 1. 明示的に指定されたパス (--config)
/// 2. 環境変数 SWASRUSH_CONFIG
/// 3. カレントディレクトリ: config.yml, config.yaml
/// 4. ~/.config/swasrush/config.yml (グローバル設定)
pub fn find_config_file(explicit: Option<&Path>) -> Result<PathBuf> {
    // 1. 明示指定は存在確認をせずそのまま使う（読み込み時に Io エラーになる）
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    // 2. 環境変数で直接指定
    if let Ok(config_path) = std::env::var("SWASRUSH_CONFIG") {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    // 3. カレントディレクトリで検索
    if let Ok(current_dir) = std::env::current_dir() {
        for filename in ["config.yml", "config.yaml"] {
            let path = current_dir.join(filename);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    // 4. グローバル設定ファイル
    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("swasrush").join("config.yml");
        if global_config.exists() {
            return Ok(global_config);
        }
    }

    Err(ConfigFormatError::NotFound)
}
