use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "環境設定ファイルが見つかりません: {0}\n\
        CLOUDFLARE_API_KEY と CLOUDFLARE_USER_EMAIL を含む .env ファイルを作成するか、\n\
        引数でファイルパスを指定してください"
    )]
    EnvFileNotFound(PathBuf),

    #[error(
        "必須の設定が不足しています: {0}\n\
        以下のキーを設定してください:\n\
        - CLOUDFLARE_API_KEY\n\
        - CLOUDFLARE_USER_EMAIL"
    )]
    MissingCredentials(PathBuf),

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
