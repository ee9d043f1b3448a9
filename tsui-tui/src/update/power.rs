//! `.` 键：按后端状态决定连接、断开、登录或打开浏览器

use tsui_core::{BackendState, State};

/// `.` 键对应的动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerAction {
    Stop,
    Start,
    /// 开始交互式登录
    Login,
    /// 打开待完成的登录 URL
    OpenBrowser(String),
    None,
}

/// 动作表
///
/// | 后端状态 | 动作 |
/// |---|---|
/// | Running | Stop |
/// | Stopped / NoState | Start |
/// | NeedsLogin，无 URL | Login |
/// | NeedsLogin / Starting，有 URL | 打开浏览器（平台支持时） |
/// | 其他 | 无 |
pub fn power_action(state: &State, browser_supported: bool) -> PowerAction {
    let open_url = || match &state.auth_url {
        Some(url) if browser_supported => PowerAction::OpenBrowser(url.clone()),
        _ => PowerAction::None,
    };

    match state.backend_state {
        BackendState::Running => PowerAction::Stop,
        BackendState::Stopped | BackendState::NoState => PowerAction::Start,
        BackendState::NeedsLogin if state.auth_url.is_none() => PowerAction::Login,
        BackendState::NeedsLogin | BackendState::Starting => open_url(),
        BackendState::NeedsMachineAuth => PowerAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(backend_state: BackendState, auth_url: Option<&str>) -> State {
        State {
            backend_state,
            auth_url: auth_url.map(str::to_string),
            ..State::default()
        }
    }

    #[test]
    fn table_is_followed() {
        let url = Some("https://login.tailscale.com/a/abc");
        let cases = [
            (BackendState::Running, None, PowerAction::Stop),
            (BackendState::Stopped, None, PowerAction::Start),
            (BackendState::NoState, None, PowerAction::Start),
            (BackendState::NeedsLogin, None, PowerAction::Login),
            (
                BackendState::NeedsLogin,
                url,
                PowerAction::OpenBrowser("https://login.tailscale.com/a/abc".to_string()),
            ),
            (
                BackendState::Starting,
                url,
                PowerAction::OpenBrowser("https://login.tailscale.com/a/abc".to_string()),
            ),
            (BackendState::Starting, None, PowerAction::None),
            (BackendState::NeedsMachineAuth, None, PowerAction::None),
            (BackendState::NeedsMachineAuth, url, PowerAction::None),
        ];

        for (backend_state, auth_url, expected) in cases {
            assert_eq!(
                power_action(&state(backend_state, auth_url), true),
                expected,
                "{backend_state} / {auth_url:?}"
            );
        }
    }

    #[test]
    fn browser_actions_need_platform_support() {
        let url = Some("https://login.tailscale.com/a/abc");
        assert_eq!(
            power_action(&state(BackendState::NeedsLogin, url), false),
            PowerAction::None
        );
        assert_eq!(
            power_action(&state(BackendState::Starting, url), false),
            PowerAction::None
        );
    }
}
