//! 状态栏消息

use crate::message::{Notice, StatusKind};

/// 当前显示的状态栏消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
    /// 创建时的代数
    pub generation: u64,
}

/// 状态栏状态
///
/// 每条新消息使代数加一；到期消息只能清除同代或更早的消息，
/// 因此旧消息的定时器不会清掉后来的消息。
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    current: Option<StatusLine>,
    generation: u64,
}

impl StatusState {
    pub fn current(&self) -> Option<&StatusLine> {
        self.current.as_ref()
    }

    /// 显示消息，返回其代数
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.generation += 1;
        self.current = Some(StatusLine {
            kind: notice.kind,
            text: notice.text,
            generation: self.generation,
        });
        self.generation
    }

    /// 到期处理
    pub fn expire(&mut self, generation: u64) {
        if generation >= self.generation {
            self.current = None;
        }
    }
}
