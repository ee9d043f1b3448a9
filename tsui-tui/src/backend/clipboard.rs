//! 剪贴板

use std::sync::Mutex;

use anyhow::{anyhow, Result};

/// 剪贴板服务
pub trait ClipboardService: Send + Sync {
    /// 写入文本（阻塞调用，由 Executor 放到 blocking 线程执行）
    fn copy(&self, text: &str) -> Result<()>;
}

/// 系统剪贴板（arboard）
///
/// X11 / Wayland 下剪贴板内容由持有者提供，`arboard::Clipboard` 被丢弃后内容会消失，
/// 因此在第一次使用时创建并一直持有。
#[derive(Default)]
pub struct SystemClipboard {
    inner: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardService for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;

        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new()?);
        }

        match guard.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_string())?,
            None => return Err(anyhow!("clipboard unavailable")),
        }

        log::debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
