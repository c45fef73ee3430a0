use std::path::Path;
use swasrush_cloud::{ResultSet, provision_accounts};
use swasrush_cloud_aliyun::SwasClient;
use swasrush_notify::{Report, dispatch, notifier_from_config};

/// 設定を読み込み、全アカウントで購入を試行して結果を通知する
pub async fn handle(config: Option<&Path>) -> anyhow::Result<ResultSet> {
    let path = swasrush_config::find_config_file(config)?;
    tracing::info!("Loading config: {}", path.display());

    let config = swasrush_config::load_config(&path)?;
    if config.accounts.is_empty() {
        tracing::warn!("No accounts configured");
    }

    // 通知先は購入前に確定させる
    let notifier = notifier_from_config(config.notify.as_ref());
    tracing::debug!("Notifier: {}", notifier.name());

    let results = provision_accounts(&config.accounts, SwasClient::for_account).await;

    let report = Report::render(&results);
    dispatch(notifier.as_ref(), &report).await;

    Ok(results)
}
