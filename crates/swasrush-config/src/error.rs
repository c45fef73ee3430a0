use std::path::PathBuf;
use thiserror::Error;

/// 設定ファイル全体のエラー。ここで失敗した場合は一件も購入を試みない。
#[derive(Error, Debug)]
pub enum ConfigFormatError {
    #[error(
        "設定ファイルが見つかりません。以下の場所を確認してください:\n\
        - --config オプション / SWASRUSH_CONFIG 環境変数\n\
        - カレントディレクトリ: config.yml, config.yaml\n\
        - ~/.config/swasrush/config.yml"
    )]
    NotFound,

    #[error("設定ファイルを読み込めません: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("設定ファイルの解析に失敗しました")]
    Parse(#[source] serde_yaml::Error),

    #[error("設定ファイルに 'accounts' キーがありません")]
    MissingAccounts,

    #[error("'accounts' はリストである必要があります")]
    AccountsNotSequence,

    #[error("アカウント設定の形式が不正です")]
    InvalidRecord(#[source] serde_yaml::Error),
}

/// Per-account validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("account '{account}' is missing required key: {field}")]
    MissingField {
        account: String,
        field: &'static str,
    },
}

impl ConfigError {
    pub fn account(&self) -> &str {
        match self {
            ConfigError::MissingField { account, .. } => account,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigFormatError>;
