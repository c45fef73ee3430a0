use colored::Colorize;
use std::path::Path;

/// 設定ファイルを検証する（API は呼ばない）
///
/// 全アカウントが有効なら true を返す。
pub fn handle(config: Option<&Path>) -> anyhow::Result<bool> {
    println!("{}", "設定を検証中...".blue());

    let path = swasrush_config::find_config_file(config)?;
    println!("設定ファイル: {}", path.display().to_string().cyan());

    let config = swasrush_config::load_config(&path)?;

    let mut invalid = 0;
    println!();
    println!("アカウント: {}個", config.accounts.len());
    for (index, record) in config.accounts.iter().enumerate() {
        match record.validate(index) {
            Ok(account) => {
                println!(
                    "  {} {} ({}, plan: {}, {}ヶ月, 自動更新: {})",
                    "✓".green(),
                    account.account_name.cyan(),
                    account.region_id,
                    account.plan_id,
                    account.period,
                    if account.auto_renew { "on" } else { "off" }
                );
            }
            Err(e) => {
                invalid += 1;
                println!("  {} {}", "✗".red(), e);
            }
        }
    }

    let notify = match &config.notify {
        None | Some(swasrush_config::NotifyConfig::Log) => "log (ログ出力のみ)".to_string(),
        Some(swasrush_config::NotifyConfig::Webhook { url, .. }) => format!("webhook ({})", url),
        Some(swasrush_config::NotifyConfig::Command { program, .. }) => {
            format!("command ({})", program)
        }
    };
    println!("通知: {}", notify);
    println!();

    if invalid == 0 {
        println!("{}", "✓ 設定ファイルは正常です！".green().bold());
        Ok(true)
    } else {
        println!(
            "{}",
            format!("✗ {}個のアカウントに設定エラーがあります", invalid)
                .red()
                .bold()
        );
        Ok(false)
    }
}
