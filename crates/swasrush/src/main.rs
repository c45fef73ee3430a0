mod commands;
mod logging;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

/// 全アカウントが購入に成功
const EXIT_ALL_SUCCEEDED: u8 = 0;
/// 設定ファイル不正などで実行できなかった
const EXIT_FATAL: u8 = 1;
/// 一部または全部のアカウントが失敗
const EXIT_SOME_FAILED: u8 = 2;

#[derive(Parser)]
#[command(name = "swasrush")]
#[command(about = "Alibaba Cloud 軽量アプリケーションサーバーを複数アカウントで一斉購入する", long_about = None)]
struct Cli {
    /// 設定ファイルのパス（省略時は SWASRUSH_CONFIG → config.yml の順に探索）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// ログファイルのパス（追記）
    #[arg(
        long,
        env = "SWASRUSH_LOG_FILE",
        default_value = "instance_manager.log",
        global = true
    )]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 全アカウントで購入を実行して結果を通知（デフォルト）
    Run,
    /// 設定を検証（API は呼ばない）
    Validate,
    /// バージョン情報を表示
    Version,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Version => {
            println!("swasrush {}", env!("CARGO_PKG_VERSION"));
            ExitCode::from(EXIT_ALL_SUCCEEDED)
        }
        Commands::Validate => match commands::validate::handle(cli.config.as_deref()) {
            Ok(true) => ExitCode::from(EXIT_ALL_SUCCEEDED),
            Ok(false) => ExitCode::from(EXIT_FATAL),
            Err(e) => {
                eprintln!();
                eprintln!("{}", "✗ 設定エラー".red().bold());
                eprintln!("  {:#}", e);
                ExitCode::from(EXIT_FATAL)
            }
        },
        Commands::Run => run(&cli).await,
    }
}

async fn run(cli: &Cli) -> ExitCode {
    let logger = match logging::Logger::init(&cli.log_file) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            return ExitCode::from(EXIT_FATAL);
        }
    };

    let code = match commands::run::handle(cli.config.as_deref()).await {
        Ok(results) if results.is_all_success() => EXIT_ALL_SUCCEEDED,
        Ok(results) => {
            tracing::warn!(
                "{} of {} account(s) failed",
                results.failures().len(),
                results.total()
            );
            EXIT_SOME_FAILED
        }
        Err(e) => {
            tracing::error!("run failed: {:#}", e);
            EXIT_FATAL
        }
    };

    if let Err(e) = logger.finish() {
        eprintln!("ログファイルのフラッシュに失敗しました: {}", e);
    }
    ExitCode::from(code)
}
