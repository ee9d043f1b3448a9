//! 状态栏消息

use std::time::Duration;

/// 状态栏消息类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Success,
    Tip,
}

impl StatusKind {
    /// 消息显示时长
    pub fn lifetime(self) -> Duration {
        match self {
            Self::Error | Self::Tip => Duration::from_secs(5),
            Self::Success => Duration::from_secs(2),
        }
    }
}

/// 一条待显示的状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: StatusKind,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn tip(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Tip,
            text: text.into(),
        }
    }
}
