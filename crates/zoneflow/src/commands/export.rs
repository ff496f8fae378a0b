use std::path::Path;

use colored::Colorize;

use zoneflow_cloudflare::{CloudflareClient, export_zones};
use zoneflow_config::Credentials;

/// 全ゾーンのDNSレコードをエクスポートする
///
/// ゾーン一覧の取得がすべて完了してからエクスポートを開始する。
/// 一覧取得・認証の失敗は実行全体を中断し、ファイルは一切作成されない。
/// 個別ゾーンの失敗は記録するだけで、他のゾーンの処理は継続する。
pub async fn handle(
    credentials: &Credentials,
    output_dir: &Path,
    concurrency: usize,
) -> anyhow::Result<()> {
    println!("{}", "Cloudflareからゾーン一覧を取得中...".blue());

    let client = CloudflareClient::new(credentials)?;
    let zones = client.list_zones().await?;
    println!("{} {}個のゾーンを取得しました", "✓".green(), zones.len());

    if zones.is_empty() {
        println!("エクスポート対象のゾーンがありません");
        return Ok(());
    }

    println!("{}", "DNSレコードをエクスポート中...".blue());
    let summary = export_zones(&client, &zones, output_dir, concurrency).await?;

    for (name, message) in &summary.failed {
        eprintln!(
            "{} {} のエクスポートに失敗: {}",
            "✗".red(),
            name.cyan(),
            message
        );
    }

    println!();
    if summary.is_complete() {
        println!(
            "{}",
            "✓ 全ゾーンのエクスポートが完了しました！".green().bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "エクスポート完了: 成功 {}件 / 失敗 {}件",
                summary.exported.len(),
                summary.failed.len()
            )
            .yellow()
        );
    }
    println!("  出力先: {}", output_dir.display().to_string().cyan());

    Ok(())
}
