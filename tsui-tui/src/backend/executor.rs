//! 命令执行器
//!
//! 为每个 `Command` 启动一个 tokio 任务；任务的结果（如果有）
//! 作为 `Event::Message` 发回主循环。任务之间互不等待。

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{JoinHandle, JoinSet};
use tsui_core::{CallContext, DaemonClient, DaemonError, DaemonResult, StateService};

use super::clipboard::ClipboardService;
use super::{browser, version};
use crate::command::{Command, DaemonAction};
use crate::event::Event;
use crate::message::{AppMessage, Notice};

/// 命令执行器
#[derive(Clone)]
pub struct Executor {
    client: Arc<dyn DaemonClient>,
    state_service: Arc<StateService>,
    clipboard: Arc<dyn ClipboardService>,
    tx: UnboundedSender<Event>,
    handle: Handle,
    call_timeout: Duration,
    ping_timeout: Duration,
}

impl Executor {
    pub fn new(
        client: Arc<dyn DaemonClient>,
        clipboard: Arc<dyn ClipboardService>,
        tx: UnboundedSender<Event>,
        handle: Handle,
    ) -> Self {
        Self {
            state_service: Arc::new(StateService::new(Arc::clone(&client))),
            client,
            clipboard,
            tx,
            handle,
            call_timeout: CallContext::DEFAULT_TIMEOUT,
            ping_timeout: Duration::from_secs(2),
        }
    }

    #[must_use]
    pub fn with_timeouts(mut self, call_timeout: Duration, ping_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self.ping_timeout = ping_timeout;
        self
    }

    /// 执行一批命令
    pub fn spawn_all(&self, commands: Vec<Command>) {
        for command in commands {
            self.spawn(command);
        }
    }

    /// 在后台执行命令，结果发回主循环
    pub fn spawn(&self, command: Command) -> JoinHandle<()> {
        let executor = self.clone();
        self.handle.spawn(async move {
            if let Some(message) = executor.execute(command).await {
                // 主循环已退出时发送失败，直接丢弃
                let _ = executor.tx.send(Event::Message(message));
            }
        })
    }

    fn ctx(&self) -> CallContext {
        CallContext::with_timeout(self.call_timeout)
    }

    /// 执行命令，返回需要回到主循环的消息
    pub async fn execute(&self, command: Command) -> Option<AppMessage> {
        match command {
            Command::RefreshState => Some(self.refresh_state().await),

            Command::Schedule { after, message } => {
                tokio::time::sleep(after).await;
                Some(*message)
            }

            Command::PingPeers(targets) => Some(AppMessage::PingResults(
                self.ping_peers(targets).await,
            )),

            Command::Daemon { action, notice } => {
                match run_daemon_action(self.client.as_ref(), &action, &self.ctx()).await {
                    Ok(()) => Some(AppMessage::CommandSucceeded { notice }),
                    Err(e) => {
                        log_daemon_error(&format!("{action:?}"), &e);
                        Some(AppMessage::CommandFailed {
                            error: e.to_string(),
                        })
                    }
                }
            }

            Command::Copy { text, notice } => {
                let clipboard = Arc::clone(&self.clipboard);
                let result = tokio::task::spawn_blocking(move || clipboard.copy(&text)).await;
                match result {
                    Ok(Ok(())) => Some(AppMessage::Status(Notice::success(notice))),
                    Ok(Err(e)) => {
                        log::warn!("Clipboard write failed: {e}");
                        Some(AppMessage::Status(Notice::error(e.to_string())))
                    }
                    Err(e) => {
                        log::error!("Clipboard task failed: {e}");
                        Some(AppMessage::Status(Notice::error(e.to_string())))
                    }
                }
            }

            Command::OpenBrowser(url) => match browser::open(&url) {
                Ok(()) => None,
                Err(e) => {
                    log::warn!("Failed to open browser: {e}");
                    Some(AppMessage::Status(Notice::error(e.to_string())))
                }
            },

            Command::CheckForUpdate => match version::fetch_latest_version().await {
                Ok(latest) => {
                    version::newer_version(env!("CARGO_PKG_VERSION"), &latest)
                        .map(AppMessage::UpdateAvailable)
                }
                Err(e) => {
                    log::debug!("Update check failed: {e}");
                    None
                }
            },

            Command::CheckEditPermission => {
                if self.client.can_edit_preferences(&self.ctx()).await {
                    None
                } else {
                    log::info!("Current user cannot edit preferences, running read-only");
                    Some(AppMessage::ReadOnly)
                }
            }
        }
    }

    async fn refresh_state(&self) -> AppMessage {
        match self.state_service.fetch_state(&self.ctx()).await {
            Ok(state) => AppMessage::StateLoaded(Box::new(state)),
            Err(e) => {
                log_daemon_error("refresh", &e);
                AppMessage::StateFailed(e.to_string())
            }
        }
    }

    /// 并发 ping；超时或出错的节点不出现在结果中
    async fn ping_peers(
        &self,
        targets: Vec<(tsui_core::NodeId, std::net::IpAddr)>,
    ) -> HashMap<tsui_core::NodeId, Duration> {
        let mut probes = JoinSet::new();
        for (id, ip) in targets {
            let client = Arc::clone(&self.client);
            let timeout = self.ping_timeout;
            probes.spawn(async move {
                let ctx = CallContext::with_timeout(timeout);
                let result = tokio::time::timeout(timeout, client.ping_peer(ip, &ctx)).await;
                match result {
                    Ok(Ok(latency)) => Some((id, latency)),
                    Ok(Err(e)) => {
                        log::debug!("Ping {id} ({ip}) failed: {e}");
                        None
                    }
                    Err(_) => {
                        log::debug!("Ping {id} ({ip}) timed out");
                        None
                    }
                }
            });
        }

        let mut pings = HashMap::new();
        while let Some(result) = probes.join_next().await {
            if let Ok(Some((id, latency))) = result {
                pings.insert(id, latency);
            }
        }
        pings
    }
}

async fn run_daemon_action(
    client: &dyn DaemonClient,
    action: &DaemonAction,
    ctx: &CallContext,
) -> DaemonResult<()> {
    match action {
        DaemonAction::SetExitNode(node) => client.set_exit_node(node.as_ref(), ctx).await,
        DaemonAction::EditPrefs(edit) => client.edit_preferences(edit, ctx).await.map(|_| ()),
        DaemonAction::Start => client.start(ctx).await,
        DaemonAction::Stop => client.stop(ctx).await,
        DaemonAction::StartLogin => client.start_login_interactive(ctx).await,
        DaemonAction::Logout => client.logout(ctx).await,
    }
}

fn log_daemon_error(what: &str, e: &DaemonError) {
    if e.is_expected() {
        log::debug!("Daemon call {what} failed: {e}");
    } else {
        log::warn!("Daemon call {what} failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;
    use std::sync::Mutex;
    use tokio::sync::mpsc;
    use tsui_core::test_utils::{exit_peer, running_status, DaemonCall, MockDaemonClient};
    use tsui_core::{BackendState, PrefsEdit};

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ClipboardService for RecordingClipboard {
        fn copy(&self, text: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("no display");
            }
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn make_executor(
        client: Arc<MockDaemonClient>,
        clipboard: Arc<RecordingClipboard>,
    ) -> (Executor, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let executor = Executor::new(client, clipboard, tx, Handle::current());
        (executor, rx)
    }

    #[tokio::test]
    async fn refresh_projects_daemon_state() {
        let client = Arc::new(MockDaemonClient::new());
        client
            .set_status(running_status(vec![exit_peer("n1", "alpha", true)]))
            .await;
        let (executor, _rx) = make_executor(client, Arc::default());

        let Some(AppMessage::StateLoaded(state)) = executor.execute(Command::RefreshState).await
        else {
            panic!("expected StateLoaded");
        };
        assert_eq!(state.backend_state, BackendState::Running);
        assert_eq!(state.sorted_exit_nodes.len(), 1);
    }

    #[tokio::test]
    async fn refresh_failure_becomes_state_failed() {
        let client = Arc::new(MockDaemonClient::new());
        client.set_error(Some(DaemonError::Timeout)).await;
        let (executor, _rx) = make_executor(client, Arc::default());

        assert!(matches!(
            executor.execute(Command::RefreshState).await,
            Some(AppMessage::StateFailed(_))
        ));
    }

    #[tokio::test]
    async fn daemon_actions_report_completion_with_notice() {
        let client = Arc::new(MockDaemonClient::new());
        let (executor, _rx) = make_executor(Arc::clone(&client), Arc::default());

        let notice = Some(Notice::success("Logged out."));
        let result = executor
            .execute(Command::Daemon {
                action: DaemonAction::Logout,
                notice: notice.clone(),
            })
            .await;
        assert_eq!(result, Some(AppMessage::CommandSucceeded { notice }));

        executor
            .execute(Command::edit_prefs(PrefsEdit::route_all(true)))
            .await;
        executor
            .execute(Command::daemon(DaemonAction::SetExitNode(Some(
                "n1".to_string(),
            ))))
            .await;

        assert_eq!(
            client.calls().await,
            vec![
                DaemonCall::Logout,
                DaemonCall::EditPreferences(PrefsEdit::route_all(true)),
                DaemonCall::SetExitNode(Some("n1".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn daemon_failure_reports_command_failed() {
        let client = Arc::new(MockDaemonClient::new());
        client
            .set_error(Some(DaemonError::Http {
                status: 403,
                body: "access denied".to_string(),
            }))
            .await;
        let (executor, _rx) = make_executor(client, Arc::default());

        let result = executor.execute(Command::daemon(DaemonAction::Stop)).await;
        assert_eq!(
            result,
            Some(AppMessage::CommandFailed {
                error: "access denied (HTTP 403)".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn ping_drops_failed_probes() {
        let client = Arc::new(MockDaemonClient::new());
        let reachable: IpAddr = "100.64.0.2".parse().unwrap();
        let unreachable: IpAddr = "100.64.0.3".parse().unwrap();
        client
            .set_ping(reachable, Duration::from_millis(15))
            .await;
        let (executor, _rx) = make_executor(client, Arc::default());

        let result = executor
            .execute(Command::PingPeers(vec![
                ("n1".to_string(), reachable),
                ("n2".to_string(), unreachable),
            ]))
            .await;

        let Some(AppMessage::PingResults(pings)) = result else {
            panic!("expected ping results");
        };
        assert_eq!(pings.len(), 1);
        assert_eq!(pings.get("n1"), Some(&Duration::from_millis(15)));
    }

    #[tokio::test]
    async fn late_probes_are_dropped_after_their_own_timeout() {
        let client = Arc::new(MockDaemonClient::new());
        let fast: IpAddr = "100.64.0.2".parse().unwrap();
        let slow: IpAddr = "100.64.0.3".parse().unwrap();
        client.set_ping(fast, Duration::from_millis(12)).await;
        client.set_ping(slow, Duration::from_millis(30)).await;
        client.set_ping_delay(slow, Duration::from_secs(5)).await;

        let (executor, _rx) = make_executor(Arc::clone(&client), Arc::default());
        let executor =
            executor.with_timeouts(CallContext::DEFAULT_TIMEOUT, Duration::from_millis(100));

        let started = std::time::Instant::now();
        let result = executor
            .execute(Command::PingPeers(vec![
                ("n1".to_string(), fast),
                ("n2".to_string(), slow),
            ]))
            .await;

        let Some(AppMessage::PingResults(pings)) = result else {
            panic!("expected ping results");
        };
        assert_eq!(pings.len(), 1);
        assert_eq!(pings.get("n1"), Some(&Duration::from_millis(12)));
        assert!(!pings.contains_key("n2"));
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(client.calls().await.contains(&DaemonCall::Ping(slow)));
    }

    #[tokio::test]
    async fn copy_reports_success_or_error() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let (executor, _rx) = make_executor(Arc::new(MockDaemonClient::new()), Arc::clone(&clipboard));

        let result = executor
            .execute(Command::Copy {
                text: "100.64.0.1".to_string(),
                notice: "Copied IPv4 address to clipboard.".to_string(),
            })
            .await;
        assert_eq!(
            result,
            Some(AppMessage::Status(Notice::success(
                "Copied IPv4 address to clipboard."
            )))
        );
        assert_eq!(*clipboard.copied.lock().unwrap(), vec!["100.64.0.1"]);

        let failing = Arc::new(RecordingClipboard {
            fail: true,
            ..RecordingClipboard::default()
        });
        let (executor, _rx) = make_executor(Arc::new(MockDaemonClient::new()), failing);
        let result = executor
            .execute(Command::Copy {
                text: "x".to_string(),
                notice: "ok".to_string(),
            })
            .await;
        assert!(matches!(result, Some(AppMessage::Status(n)) if n.kind == crate::message::StatusKind::Error));
    }

    #[test]
    fn edit_permission_check() {
        tokio_test::block_on(async {
            let client = Arc::new(MockDaemonClient::new());
            let (executor, _rx) = make_executor(Arc::clone(&client), Arc::default());
            assert_eq!(executor.execute(Command::CheckEditPermission).await, None);

            client.set_can_edit(false).await;
            assert_eq!(
                executor.execute(Command::CheckEditPermission).await,
                Some(AppMessage::ReadOnly)
            );
        });
    }

    #[tokio::test]
    async fn spawned_commands_post_results_to_the_loop() {
        let (executor, mut rx) = make_executor(Arc::new(MockDaemonClient::new()), Arc::default());

        executor.spawn_all(vec![Command::schedule(
            Duration::from_millis(1),
            AppMessage::Tick,
        )]);

        let event = rx.recv().await;
        assert!(matches!(event, Some(Event::Message(AppMessage::Tick))));
    }
}
