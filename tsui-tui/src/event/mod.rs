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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责两件事：
//!     · 输入线程：阻塞读取终端事件，包装成 Event::Terminal 发往主循环
//!     · 翻译：把终端事件翻译成 AppMessage
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     主循环只有一个接收端：
//!
//!         输入线程 ───── Event::Terminal(..) ─────┐
//!                                                  ├──▶ mpsc ──▶ 主循环
//!         Executor 任务 ─ Event::Message(..) ─────┘
//!
//!     因此 update 永远按到达顺序逐条处理消息，不需要给 Model 加锁。
//!
//!
//!     按键映射（handler.rs）：
//!             q / Ctrl+C      → Quit
//!             Esc             → Menu(Back)        关闭子菜单，没有打开的子菜单时退出
//!             ← / h           → Menu(Close)
//!             → / l           → Menu(Open)
//!             ↑ / k, ↓ / j    → Menu(CursorUp / CursorDown)
//!             Enter / Space   → Menu(Activate)
//!             .               → TogglePower
//!
//!         只处理 Press 事件；窗口大小变化翻译为 Resize(w, h)。
//!

mod handler;
mod keymap;

use std::thread;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::message::AppMessage;

pub use handler::{handle_event, poll_event};

/// 主循环接收的事件
#[derive(Debug)]
pub enum Event {
    /// 终端输入
    Terminal(crossterm::event::Event),
    /// 异步任务的结果或定时器
    Message(AppMessage),
}

/// 输入线程检查主循环是否已退出的间隔
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 启动输入线程
///
/// 主循环退出（接收端被丢弃）后线程自行结束。
pub fn spawn_input_reader(tx: UnboundedSender<Event>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while !tx.is_closed() {
            match poll_event(INPUT_POLL_INTERVAL) {
                Ok(Some(event)) => {
                    if tx.send(Event::Terminal(event)).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("Failed to read terminal input: {e}");
                    break;
                }
            }
        }
        log::debug!("Input reader stopped");
    })
}
