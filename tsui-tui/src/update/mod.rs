//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│   Event ──▶ AppMessage ──▶ update(&mut App, msg) ──▶ Vec<Command>          │
//！│                                  │                        │                │
//！│                                  ▼                        ▼                │
//！│                               Model                  Executor (tokio)      │
//！│                                                           │                │
//！│               AppMessage ◀────────── 结果回到队列 ────────┘                │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod menus;              // 根据 State 构建菜单条目
//!         mod power;              // `.` 键的动作表
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {...}
//!
//!
//!     update 同步执行，不等待任何 I/O：
//!         需要 I/O 的地方返回 Command，由 Executor 执行，
//!         结果以新的 AppMessage 回到队列，再次进入 update。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 定时器
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Tick        每次处理都安排下一次 Tick，并刷新状态
//!     PingTick    每次处理都安排下一次 PingTick，并 ping 在线的出口节点
//!     FastTick    NoState 时 500ms 后刷新一次；同一时间最多一个
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 乐观更新
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     选择出口节点时，先直接修改 app.state.current_exit_node 再发出命令；
//!     命令完成后（无论成功或失败）立即刷新状态，守护进程的结果总是
//!     覆盖本地的猜测，因此失败时不需要回滚。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod menus;
mod power;

pub use menus::rebuild_menus;
pub use power::{power_action, PowerAction};

use tsui_core::{peer_name, BackendState, NodeId};

use crate::command::{Command, DaemonAction};
use crate::i18n::t;
use crate::message::{AppMessage, MenuMessage, Notice};
use crate::model::App;

/// 处理应用消息，更新状态，返回需要执行的命令
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::Menu(menu_msg) => update_menu(app, menu_msg),

        AppMessage::TogglePower => toggle_power(app),

        AppMessage::Tick => vec![
            Command::schedule(app.options.tick_interval, AppMessage::Tick),
            Command::RefreshState,
        ],

        AppMessage::FastTick => {
            app.fast_tick_pending = false;
            vec![Command::RefreshState]
        }

        AppMessage::PingTick => {
            let mut commands = vec![Command::schedule(
                app.options.ping_interval,
                AppMessage::PingTick,
            )];
            let targets: Vec<_> = app
                .state
                .sorted_exit_nodes
                .iter()
                .filter(|peer| peer.online)
                .filter_map(|peer| Some((peer.id.clone(), *peer.tailscale_ips.first()?)))
                .collect();
            if !targets.is_empty() {
                commands.push(Command::PingPeers(targets));
            }
            commands
        }

        AppMessage::StateLoaded(state) => {
            app.state = *state;
            rebuild_menus(app);

            if app.state.backend_state == BackendState::NoState && !app.fast_tick_pending {
                app.fast_tick_pending = true;
                vec![Command::schedule(
                    app.options.fast_tick_delay,
                    AppMessage::FastTick,
                )]
            } else {
                Vec::new()
            }
        }

        AppMessage::StateFailed(err) => show_status(app, Notice::error(err)),

        AppMessage::PingResults(pings) => {
            app.pings = pings;
            rebuild_menus(app);
            Vec::new()
        }

        AppMessage::CommandSucceeded { notice } => {
            let mut commands = vec![Command::RefreshState];
            if let Some(notice) = notice {
                commands.extend(show_status(app, notice));
            }
            commands
        }

        AppMessage::CommandFailed { error } => {
            let mut commands = vec![Command::RefreshState];
            commands.extend(show_status(app, Notice::error(error)));
            commands
        }

        AppMessage::Status(notice) => show_status(app, notice),

        AppMessage::StatusExpired(generation) => {
            app.status.expire(generation);
            Vec::new()
        }

        AppMessage::UpdateAvailable(version) => {
            let texts = &t().status;
            let notice = Notice::tip(format!(
                "{}{version}{}",
                texts.update_prefix, texts.update_suffix
            ));
            app.latest_version = Some(version);
            show_status(app, notice)
        }

        AppMessage::ReadOnly => {
            app.read_only = true;
            show_status(app, Notice::tip(t().status.read_only))
        }

        AppMessage::Resize(width, height) => {
            app.terminal_size = (width, height);
            Vec::new()
        }

        AppMessage::Noop => Vec::new(),
    }
}

fn update_menu(app: &mut App, msg: MenuMessage) -> Vec<Command> {
    match msg {
        MenuMessage::CursorUp => app.menu.cursor_up(),
        MenuMessage::CursorDown => app.menu.cursor_down(),
        MenuMessage::Open => {
            if !app.menu.is_submenu_open() {
                return app.menu.activate().into_iter().collect();
            }
        }
        MenuMessage::Close => app.menu.close_submenu(),
        MenuMessage::Back => {
            if app.menu.is_submenu_open() {
                app.menu.close_submenu();
            } else {
                app.should_quit = true;
            }
        }
        MenuMessage::Activate => {
            if let Some(command) = app.menu.activate() {
                return dispatch(app, command);
            }
        }
    }
    Vec::new()
}

/// 发出菜单命令前的本地处理
///
/// 只读模式下修改偏好设置的命令不会发出，改为再次提示。
fn dispatch(app: &mut App, command: Command) -> Vec<Command> {
    match &command {
        Command::Daemon {
            action: DaemonAction::EditPrefs(_) | DaemonAction::SetExitNode(_),
            ..
        } if app.read_only => {
            return show_status(app, Notice::tip(t().status.read_only));
        }
        Command::Daemon {
            action: DaemonAction::SetExitNode(node),
            ..
        } => set_exit_node_optimistically(app, node.clone()),
        _ => {}
    }
    vec![command]
}

fn set_exit_node_optimistically(app: &mut App, node: Option<NodeId>) {
    app.state.current_exit_node_name = node
        .as_deref()
        .and_then(|id| app.state.exit_node(id))
        .map(|peer| peer_name(peer).to_string())
        .unwrap_or_default();
    app.state.current_exit_node = node;
    rebuild_menus(app);
}

fn toggle_power(app: &mut App) -> Vec<Command> {
    match power_action(&app.state, app.browser_supported) {
        PowerAction::Stop => vec![Command::daemon(DaemonAction::Stop)],
        PowerAction::Start => vec![Command::daemon(DaemonAction::Start)],
        PowerAction::Login => vec![Command::Daemon {
            action: DaemonAction::StartLogin,
            notice: Some(Notice::success(t().status.starting_login)),
        }],
        PowerAction::OpenBrowser(url) => vec![Command::OpenBrowser(url)],
        PowerAction::None => Vec::new(),
    }
}

/// 显示状态栏消息，并安排它的过期
fn show_status(app: &mut App, notice: Notice) -> Vec<Command> {
    let lifetime = notice.kind.lifetime();
    let generation = app.status.show(notice);
    vec![Command::schedule(
        lifetime,
        AppMessage::StatusExpired(generation),
    )]
}
