#![allow(deprecated)] // cargo_bin の非推奨警告 (cargo_bin_cmd! への移行は別途)

use assert_cmd::Command;
use predicates::prelude::*;

fn zoneflow() -> Command {
    let mut cmd = Command::cargo_bin("zoneflow").unwrap();
    // テスト実行環境の資格情報を拾わないようにする
    cmd.env_remove("CLOUDFLARE_API_KEY");
    cmd.env_remove("CLOUDFLARE_USER_EMAIL");
    cmd
}

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    zoneflow()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DNSレコードを一括エクスポート"))
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--concurrency"))
        .stdout(predicate::str::contains("[ENV_FILE]"));
}

/// バージョン表示が正しく動作することを確認
#[test]
fn test_cli_version() {
    zoneflow()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zoneflow"));
}

/// .env が存在しない場合は終了コード1で落ちることを確認
/// （ネットワークアクセスが発生する前に失敗する）
#[test]
fn test_missing_env_file_exits_with_code_1() {
    let temp_dir = tempfile::tempdir().unwrap();

    zoneflow()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(".env"));
}

/// 引数で指定した環境設定ファイルが存在しない場合も終了コード1になることを確認
#[test]
fn test_missing_custom_env_file_exits_with_code_1() {
    let temp_dir = tempfile::tempdir().unwrap();

    zoneflow()
        .current_dir(temp_dir.path())
        .arg("missing.env")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing.env"));
}

/// 必須キーが欠けている場合は終了コード1で両方のキー名を表示することを確認
#[test]
fn test_missing_required_key_exits_with_code_1() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join(".env"),
        "CLOUDFLARE_API_KEY=abc123\n",
    )
    .unwrap();

    zoneflow()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("CLOUDFLARE_API_KEY"))
        .stderr(predicate::str::contains("CLOUDFLARE_USER_EMAIL"));
}
