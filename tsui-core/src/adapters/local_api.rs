//! tailscaled LocalAPI 客户端
//!
//! LocalAPI 是 tailscaled 在本地 Unix socket 上提供的 HTTP/1.1 接口。
//! 每个请求建立一条新连接，调用之间不共享状态，因此客户端可以被并发使用。

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{DaemonError, DaemonResult};
use crate::traits::{CallContext, DaemonClient};
use crate::types::{
    exit_node_masked_prefs, LockInfo, NodeId, Preferences, PrefsEdit, StatusSnapshot,
};

/// tailscaled 默认 socket 路径
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/tailscale/tailscaled.sock";

/// tailscaled 只接受这个 Host
const LOCAL_API_HOST: &str = "local-tailscaled.sock";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
}

/// LocalAPI 的错误响应体
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// `POST /localapi/v0/ping` 的响应（ipnstate.PingResult 的子集）
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PingResult {
    #[serde(default)]
    err: String,
    #[serde(default)]
    latency_seconds: f64,
}

/// 通过 Unix socket 访问 LocalAPI 的客户端
#[derive(Debug, Clone)]
pub struct LocalApiClient {
    socket_path: PathBuf,
}

impl LocalApiClient {
    #[must_use]
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, ctx: &CallContext) -> DaemonResult<T> {
        let body = self.call(Method::Get, path, None, ctx).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn patch_prefs(
        &self,
        masked: &serde_json::Value,
        ctx: &CallContext,
    ) -> DaemonResult<Preferences> {
        let payload = serde_json::to_vec(masked)?;
        let body = self
            .call(Method::Patch, "/localapi/v0/prefs", Some(payload), ctx)
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        ctx: &CallContext,
    ) -> DaemonResult<Bytes> {
        log::trace!("LocalAPI {method:?} {path}");

        match tokio::time::timeout(ctx.timeout, self.send(method, path, body)).await {
            Ok(result) => result,
            Err(_) => {
                log::debug!("LocalAPI {method:?} {path} timed out after {:?}", ctx.timeout);
                Err(DaemonError::Timeout)
            }
        }
    }

    #[cfg(unix)]
    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> DaemonResult<Bytes> {
        use http_body_util::{BodyExt, Full};
        use hyper::header::{CONTENT_TYPE, HOST};
        use hyper::Request;
        use hyper_util::rt::TokioIo;
        use tokio::net::UnixStream;

        let stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|e| DaemonError::Connect {
                path: self.socket_path.display().to_string(),
                message: e.to_string(),
            })?;

        let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
            .await
            .map_err(|e| DaemonError::Request(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = conn.await {
                log::debug!("LocalAPI connection closed with error: {e}");
            }
        });

        let method = match method {
            Method::Get => hyper::Method::GET,
            Method::Post => hyper::Method::POST,
            Method::Patch => hyper::Method::PATCH,
        };

        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(HOST, LOCAL_API_HOST)
            .header("Sec-Tailscale", "localapi")
            .header(CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(body.unwrap_or_default())))
            .map_err(|e| DaemonError::Request(e.to_string()))?;

        let response = sender
            .send_request(request)
            .await
            .map_err(|e| DaemonError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| DaemonError::Request(e.to_string()))?
            .to_bytes();

        if !status.is_success() {
            return Err(DaemonError::Http {
                status: status.as_u16(),
                body: error_message(&body),
            });
        }

        Ok(body)
    }

    #[cfg(not(unix))]
    async fn send(
        &self,
        _method: Method,
        _path: &str,
        _body: Option<Vec<u8>>,
    ) -> DaemonResult<Bytes> {
        Err(DaemonError::Unsupported(
            "LocalAPI over Unix sockets is not available on this platform".to_string(),
        ))
    }
}

impl Default for LocalApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_SOCKET_PATH)
    }
}

/// 从错误响应体中取出错误信息；不是 `{"error": ...}` 时原样返回
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body).map_or_else(
        |_| String::from_utf8_lossy(body).trim().to_string(),
        |e| e.error,
    )
}

/// 解析 ping 响应
fn parse_ping(body: &[u8]) -> DaemonResult<Duration> {
    let result: PingResult = serde_json::from_slice(body)?;
    if !result.err.is_empty() {
        return Err(DaemonError::Daemon(result.err));
    }
    Duration::try_from_secs_f64(result.latency_seconds)
        .map_err(|e| DaemonError::Decode(format!("invalid ping latency: {e}")))
}

#[async_trait]
impl DaemonClient for LocalApiClient {
    async fn get_status(&self, ctx: &CallContext) -> DaemonResult<StatusSnapshot> {
        self.get_json("/localapi/v0/status", ctx).await
    }

    async fn get_preferences(&self, ctx: &CallContext) -> DaemonResult<Preferences> {
        self.get_json("/localapi/v0/prefs", ctx).await
    }

    async fn get_lock_status(&self, ctx: &CallContext) -> DaemonResult<LockInfo> {
        self.get_json("/localapi/v0/tka/status", ctx).await
    }

    async fn set_exit_node(&self, node: Option<&NodeId>, ctx: &CallContext) -> DaemonResult<()> {
        log::info!("Setting exit node to {}", node.map_or("none", String::as_str));
        self.patch_prefs(&exit_node_masked_prefs(node.map(String::as_str)), ctx)
            .await?;
        Ok(())
    }

    async fn edit_preferences(
        &self,
        edit: &PrefsEdit,
        ctx: &CallContext,
    ) -> DaemonResult<Preferences> {
        let current_routes = if edit.needs_current_routes() {
            self.get_preferences(ctx).await?.advertise_routes
        } else {
            Vec::new()
        };
        log::info!("Editing preferences: {edit:?}");
        self.patch_prefs(&edit.to_masked_prefs(&current_routes), ctx)
            .await
    }

    async fn start(&self, ctx: &CallContext) -> DaemonResult<()> {
        self.edit_preferences(&PrefsEdit::want_running(true), ctx)
            .await?;
        Ok(())
    }

    async fn stop(&self, ctx: &CallContext) -> DaemonResult<()> {
        self.edit_preferences(&PrefsEdit::want_running(false), ctx)
            .await?;
        Ok(())
    }

    async fn start_login_interactive(&self, ctx: &CallContext) -> DaemonResult<()> {
        self.call(Method::Post, "/localapi/v0/login-interactive", None, ctx)
            .await?;
        Ok(())
    }

    async fn logout(&self, ctx: &CallContext) -> DaemonResult<()> {
        self.call(Method::Post, "/localapi/v0/logout", None, ctx)
            .await?;
        Ok(())
    }

    async fn ping_peer(&self, ip: IpAddr, ctx: &CallContext) -> DaemonResult<Duration> {
        let path = format!(
            "/localapi/v0/ping?ip={}&type=disco",
            urlencoding::encode(&ip.to_string())
        );
        let body = self.call(Method::Post, &path, None, ctx).await?;
        parse_ping(&body)
    }

    async fn can_edit_preferences(&self, ctx: &CallContext) -> bool {
        if !cfg!(target_os = "linux") || is_root() {
            return true;
        }

        let Ok(user) = std::env::var("USER") else {
            return false;
        };

        match self.get_preferences(ctx).await {
            Ok(prefs) => !prefs.operator_user.is_empty() && prefs.operator_user == user,
            Err(e) => {
                log::warn!("Failed to read preferences for operator check: {e}");
                false
            }
        }
    }
}

/// 当前进程是否以 root 运行（`/proc/self` 归进程的有效用户所有）
#[cfg(target_os = "linux")]
fn is_root() -> bool {
    use std::os::unix::fs::MetadataExt;

    std::fs::metadata("/proc/self").is_ok_and(|meta| meta.uid() == 0)
}

#[cfg(not(target_os = "linux"))]
fn is_root() -> bool {
    false
}
