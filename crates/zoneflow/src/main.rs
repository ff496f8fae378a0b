mod commands;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "zoneflow")]
#[command(about = "CloudflareゾーンのDNSレコードを一括エクスポート", long_about = None)]
#[command(version)]
struct Cli {
    /// 環境設定ファイルのパス（省略時はカレントディレクトリの .env）
    env_file: Option<PathBuf>,

    /// 出力先ディレクトリ
    #[arg(short, long, env = "ZONEFLOW_OUTPUT_DIR", default_value = "./domains")]
    output_dir: PathBuf,

    /// 同時にエクスポートするゾーン数
    #[arg(short, long, default_value_t = 4)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Some(env_file) = &cli.env_file {
        println!(
            "環境設定ファイル: {}",
            env_file.display().to_string().cyan()
        );
    }

    // 設定エラーはネットワークに触れる前に終了コード1で落とす
    let credentials = match zoneflow_config::load_credentials(cli.env_file.as_deref()) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if credentials.is_placeholder() {
        // プレースホルダーのままでも続行し、API側の認証エラーに任せる
        println!(
            "{}",
            "警告: .env がプレースホルダー値 (NULL) のままです。実際の認証情報に更新してください。"
                .yellow()
        );
    }

    commands::export::handle(&credentials, &cli.output_dir, cli.concurrency).await?;

    Ok(())
}
