//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 返回 Command  │   │
//！│  │        │               │ MenuMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ Notice    │          ┌──────────┐         │   │
//！│  │   │  View   │          └───────────┘          │ Executor │         │   │
//！│  │   │   层    │ ◀──── 读取 Model ───────        │ (tokio)  │         │   │
//！│  │   └────┬────┘                                 └────┬─────┘         │   │
//！│  │        │                        结果以 AppMessage 回到队列 ▲       │   │
//！│  └────────│──────────────────────────────────────────────────────────┘   │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │tsui-core │              │
//！│      └─────────┘                                └──────────┘              │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 所有输入都先变成 `AppMessage`：
//!     · 终端事件（按键、窗口大小）由 event 层翻译
//!     · 定时器（Tick / PingTick / FastTick / StatusExpired）由 Executor 投递
//!     · 异步命令的结果（StateLoaded / StateFailed / CommandSucceeded / Status ...）
//!       同样由 Executor 投递
//!
//! Update 层按到达顺序逐条处理，处理过程中不等待任何 I/O。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // 主消息
//!         mod menu;       // 菜单导航子消息
//!         mod status;     // 状态栏消息类型
//!

mod app;
mod menu;
mod status;

pub use app::AppMessage;
pub use menu::MenuMessage;
pub use status::{Notice, StatusKind};
