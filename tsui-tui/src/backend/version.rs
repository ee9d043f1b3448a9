//! 新版本检查

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

const LATEST_RELEASE_URL: &str = "https://api.github.com/repos/neuralinkcorp/tsui/releases/latest";

#[derive(Deserialize)]
struct Release {
    tag_name: String,
}

/// 去掉 tag 的 `v` 前缀
pub fn strip_tag(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// 获取最新发布的版本号
pub async fn fetch_latest_version() -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("tsui/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .build()?;

    let release: Release = client
        .get(LATEST_RELEASE_URL)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(strip_tag(&release.tag_name).to_string())
}

/// 最新版本与当前版本不同时返回最新版本
pub fn newer_version(current: &str, latest: &str) -> Option<String> {
    (!latest.is_empty() && latest != current).then(|| latest.to_string())
}
