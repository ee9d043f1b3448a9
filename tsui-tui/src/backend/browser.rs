//! 在系统浏览器中打开 URL

use std::process::{Command, Stdio};

use anyhow::{bail, Result};

use crate::i18n::t;

/// 当前平台能否打开浏览器
pub fn is_supported() -> bool {
    cfg!(any(target_os = "macos", target_os = "windows"))
}

/// 打开 URL，不等待浏览器退出
pub fn open(url: &str) -> Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("rundll32");
        command.args(["url.dll,FileProtocolHandler", url]);
        command
    } else {
        bail!(t().status.browser_unsupported);
    };

    log::info!("Opening {url} in browser");
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platforms_report_an_error() {
        if !is_supported() {
            assert!(open("https://login.tailscale.com/a/abc").is_err());
        }
    }
}
