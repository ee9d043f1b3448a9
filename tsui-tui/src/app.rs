//!
//! app.rs
//! 应用主循环
//!
//!
//! 所有输入都汇入同一个事件队列（UnboundedReceiver<Event>）：
//!     · 输入线程发来的终端事件            Event::Terminal
//!     · Executor 任务发来的结果与定时器    Event::Message
//!
//! 主线程是唯一修改 App 的地方，每次取一条事件：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     let event = events.blocking_recv()              // 阻塞等待下一条事件
//!     let msg = 翻译(event)                           // 终端事件经 handle_event 翻译
//!     let commands = update::update(&mut app , msg)   // 更新状态，返回副作用
//!     executor.spawn_all(commands)                    // 副作用交给 tokio 执行
//! }
//!
//! 渲染前会先处理完队列里已经到达的事件，避免一串按键逐个重绘。

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Executor;
use crate::event::{self, Event};
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    events: &mut UnboundedReceiver<Event>,
    executor: &Executor,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 等待下一条事件；所有发送端都已关闭时退出
        let Some(event) = events.blocking_recv() else {
            log::warn!("Event queue closed, exiting");
            break;
        };
        dispatch(app, event, executor);

        // 4. 处理已经到达的其余事件
        while !app.should_quit {
            match events.try_recv() {
                Ok(event) => dispatch(app, event, executor),
                Err(_) => break,
            }
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, event: Event, executor: &Executor) {
    let msg = match event {
        Event::Terminal(event) => event::handle_event(event),
        Event::Message(msg) => msg,
    };

    if msg == AppMessage::Noop {
        return;
    }

    let commands = update::update(app, msg);
    executor.spawn_all(commands);
}
