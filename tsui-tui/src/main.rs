//! tsui
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，返回 `Command`
//! - **Command**: 副作用描述 (`command/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 执行副作用 (`backend/`)
//!
//!
//! main.rs
//! tsui 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     AppConfig::load()       // 解析命令行
//!     init_logging()          // 有 --log-file 时写日志文件
//!     fetch_state()           // 首次拉取状态，失败则打印错误并以 1 退出
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod command;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::fs::OpenOptions;
use std::path::Path;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use crossterm::style::Stylize;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use tsui_core::{CallContext, DaemonClient, LocalApiClient, StateService};

use backend::{browser, AppConfig, Executor, SystemClipboard};
use command::Command;
use message::AppMessage;
use util::{init_terminal, restore_terminal};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("{e:#}").red());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // 1. 配置、日志、主题与语言
    let config = AppConfig::load();
    init_logging(config.log_file.as_deref())?;
    view::theme::set_theme_index(config.theme.index());
    i18n::set_language(config.language);

    tracing::info!(
        socket = %config.socket_path.display(),
        lang = i18n::current_language().code(),
        "tsui {} starting",
        env!("CARGO_PKG_VERSION")
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    // 2. 首次拉取状态；守护进程不可用时直接退出
    let client: Arc<dyn DaemonClient> = Arc::new(LocalApiClient::new(config.socket_path.clone()));
    let state = runtime.block_on(
        StateService::new(Arc::clone(&client))
            .fetch_state(&CallContext::with_timeout(config.call_timeout)),
    )?;

    // 3. 事件队列与执行器
    let (tx, mut rx) = mpsc::unbounded_channel();
    let executor = Executor::new(
        client,
        Arc::new(SystemClipboard::new()),
        tx.clone(),
        runtime.handle().clone(),
    )
    .with_timeouts(config.call_timeout, config.ping_timeout);

    let mut app = model::App::new(state.clone(), config.app_options(), browser::is_supported());

    let mut commands = update::update(&mut app, AppMessage::StateLoaded(Box::new(state)));
    commands.extend(update::update(&mut app, AppMessage::PingTick));
    commands.push(Command::schedule(config.tick_interval, AppMessage::Tick));
    commands.push(Command::CheckEditPermission);
    if config.check_for_updates {
        commands.push(Command::CheckForUpdate);
    }

    // 4. 初始化终端
    let mut terminal = init_terminal()?;
    if let Ok(size) = terminal.size() {
        app.terminal_size = (size.width, size.height);
    }

    event::spawn_input_reader(tx);
    executor.spawn_all(commands);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut rx, &executor);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 未完成的 ping / 定时器不再需要
    drop(rx);
    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}

/// 日志写入文件（终端归界面使用）；未指定文件时不记录
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
