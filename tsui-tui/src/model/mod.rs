//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              Model 层                                      │
//！│                                                                            │
//！│   ┌──────────────┐    每次 StateLoaded    ┌───────────────────────────┐   │
//！│   │ State        │ ─────────────────────▶ │ Appmenu                   │   │
//！│   │ (tsui-core)  │      重建菜单          │  ├─ DeviceInfo → Submenu  │   │
//！│   └──────────────┘                        │  ├─ ExitNodes  → Submenu  │   │
//！│                                           │  └─ Settings   → Submenu  │   │
//！│   ┌──────────────┐                        └───────────────────────────┘   │
//！│   │ pings        │ ── 右侧标签 ──────────────────────▲                   │
//！│   └──────────────┘                                                        │
//！│   ┌──────────────┐                                                        │
//！│   │ StatusState  │  状态栏消息 + 代数                                     │
//！│   └──────────────┘                                                        │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和对自身的简单操作（光标移动、激活），
//! 不做 I/O；激活条目得到的是 `Command`，由 Update 层交给 Executor。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod status;         // 状态栏消息
//!         pub mod menu;       // 主菜单与子菜单
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,
//!             pub state: State,                       // 守护进程状态
//!             pub menu: Appmenu,                      // 菜单
//!             pub pings: HashMap<NodeId, Duration>,   // ping 延迟
//!             pub status: StatusState,                // 状态栏
//!             ...
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、菜单（Appmenu / Submenu）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     子菜单条目是封闭的枚举 SubmenuItem：
//!         - Labeled：普通条目，激活时返回一个 Command
//!         - Toggleable：单选条目（出口节点）
//!         - Setting：多选项设置，每次激活切换到下一个选项
//!         - Divider / Spacer / Title：装饰，不可选中
//!
//!     光标只会停在可选中的条目上；没有可选条目时为 None。
//!
//!     数据流：
//!         用户按 Enter
//!             ↓
//!         event/handler.rs 返回 Menu(Activate)
//!             ↓
//!         update/mod.rs 调用 app.menu.activate() 得到 Option<Command>
//!             ↓
//!         Executor 执行命令，结果以 AppMessage 回到队列
//!

mod app;
pub mod menu;
mod status;

pub use app::{App, AppOptions};
pub use menu::{Appmenu, AppmenuItem, MenuId};
pub use status::{StatusLine, StatusState};
