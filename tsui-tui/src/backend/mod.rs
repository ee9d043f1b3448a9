//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          └───────────┘          └────┬─────┘         │   │
//！│  │        ▲                     ▲                     │ Vec<Command>  │   │
//！│  │        │                     │ AppMessage          ▼               │   │
//！│  │   ┌─────────┐                │              ┌──────────┐           │   │
//！│  │   │  View   │                └───────────── │ Executor │           │   │
//！│  │   │   层    │                               │ (Backend)│           │   │
//！│  │   └────┬────┘                               └────┬─────┘           │   │
//！│  └────────│─────────────────────────────────────────│─────────────────┘   │
//！│           │                                         │ tokio 任务          │
//！│           ▼                                         ▼                     │
//！│      ┌─────────┐                   ┌───────────┬───────────┬─────────┐    │
//！│      │  终端   │                   │ tsui-core │ 剪贴板    │ GitHub  │    │
//！│      │ (Util)  │                   │ LocalAPI  │ 浏览器    │ release │    │
//！│      └─────────┘                   └───────────┴───────────┴─────────┘    │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：副作用
//!
//! Update 层只返回 Command；真正的 I/O 都在这里完成。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod executor;           // Command 执行器
//!         mod config_service;     // 命令行配置
//!         mod clipboard;          // 系统剪贴板
//!         pub mod browser;        // 打开登录 URL
//!         mod version;            // 新版本检查
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、执行器（Executor）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/executor.rs 中定义：
//!
//!         每个 Command 一个 tokio 任务，任务之间互不等待：
//!             - RefreshState          StateService::fetch_state → StateLoaded / StateFailed
//!             - Schedule              sleep 后投递携带的消息
//!             - PingPeers             并发 ping，超时或失败的节点被丢弃 → PingResults
//!             - Daemon                写操作 → CommandSucceeded / Status(错误)
//!             - Copy                  剪贴板 → Status(成功 / 错误)
//!             - OpenBrowser           失败时 → Status(错误)
//!             - CheckForUpdate        有新版本时 → UpdateAvailable，失败静默
//!             - CheckEditPermission   无权限时 → ReadOnly
//!
//!         每次守护进程调用都带自己的 CallContext（超时）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置（AppConfig）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         没有配置文件，全部来自命令行（clap），部分参数可用环境变量：
//!             --socket            TSUI_SOCKET
//!             --theme             dark / light
//!             --lang              en-US / zh-CN
//!             --tick-interval     状态刷新间隔（秒）
//!             --no-update-check   TSUI_NO_UPDATE_CHECK
//!             --log-file          TSUI_LOG_FILE
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在 Settings 中切换 "Use Exit Node"
//!         ↓
//!     Update 层返回 Command::Daemon { EditPrefs }
//!         ↓
//!     Executor 调用 tsui-core 的 DaemonClient（LocalAPI）
//!         ↓
//!     CommandSucceeded 回到事件队列
//!         ↓
//!     Update 层返回 Command::RefreshState
//!         ↓
//!     StateLoaded → 重建菜单 → View 层重新渲染
//!

pub mod browser;
mod clipboard;
mod config_service;
mod executor;
mod version;

pub use clipboard::{ClipboardService, SystemClipboard};
pub use config_service::AppConfig;
pub use executor::Executor;
