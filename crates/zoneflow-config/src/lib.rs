pub mod error;

pub use error::*;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// デフォルトの環境設定ファイル名
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Cloudflare API キーの設定キー
pub const KEY_API_KEY: &str = "CLOUDFLARE_API_KEY";

/// Cloudflare アカウントメールアドレスの設定キー
pub const KEY_USER_EMAIL: &str = "CLOUDFLARE_USER_EMAIL";

/// `.env.example` のプレースホルダー値
const PLACEHOLDER: &str = "NULL";

/// Cloudflare API の認証情報
///
/// 読み込み後は変更されず、プロセスの生存期間を通して使われる。
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub user_email: String,
}

impl Credentials {
    /// 両方の値が `.env.example` のプレースホルダーのままかどうか
    pub fn is_placeholder(&self) -> bool {
        self.api_key == PLACEHOLDER && self.user_email == PLACEHOLDER
    }
}

/// 認証情報を環境設定ファイルから読み込む
///
/// ファイルの解決順序:
/// 1. `path` で指定されたファイル（コマンドライン引数）
/// 2. カレントディレクトリの `.env`
///
/// プロセスの環境変数が既に設定されている場合はそちらを優先する
/// （dotenv と同様、既存の環境変数は上書きしない）。
pub fn load_credentials(path: Option<&Path>) -> Result<Credentials> {
    let env_file: PathBuf = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));

    if !env_file.exists() {
        return Err(ConfigError::EnvFileNotFound(env_file));
    }

    let values = parse_env_file(&std::fs::read_to_string(&env_file)?);

    let lookup = |key: &str| std::env::var(key).ok().or_else(|| values.get(key).cloned());

    match (lookup(KEY_API_KEY), lookup(KEY_USER_EMAIL)) {
        (Some(api_key), Some(user_email)) => Ok(Credentials {
            api_key,
            user_email,
        }),
        _ => Err(ConfigError::MissingCredentials(env_file)),
    }
}

/// `KEY=value` 形式の行を解析する
///
/// 空行と `#` で始まる行は無視し、値を囲む引用符は取り除く。
fn parse_env_file(contents: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        values.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    values
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
