//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的代码：
//!
//!     src/util/mod.rs
//!         mod format;         // 字节数、剩余时间的显示格式
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     终端：
//!         init_terminal() 进入原始模式和备用屏幕，并隐藏光标；
//!         同时安装 panic hook，panic 时先恢复终端再打印错误。
//!
//!         restore_terminal() 必须在 app::run 之后立即调用，
//!         即使 run 返回错误也一样，否则终端会停留在原始模式。
//!
//!
//!     格式化：
//!         format_bytes(1_234_567)                 → "1.2 MB"
//!         format_duration(Duration::hours(50))    → "2d"
//!

mod format;
mod terminal;

pub use format::{format_bytes, format_duration};
pub use terminal::{init_terminal, restore_terminal, Term};
