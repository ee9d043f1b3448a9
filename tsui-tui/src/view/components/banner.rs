//! 未连接时中部的提示横幅

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tsui_core::{BackendState, State};

use crate::i18n::t;
use crate::view::theme::Styles;

/// 渲染横幅：上下各一条 `=` 分隔线，整体居中
pub fn render(state: &State, frame: &mut Frame, area: Rect) {
    let body = banner_lines(state);
    let width = body.iter().map(Line::width).max().unwrap_or(0);
    let divider = Line::styled("=".repeat(width), Styles::faint());

    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(divider.clone());
    lines.push(Line::default());
    lines.extend(body);
    lines.push(Line::default());
    lines.push(divider);

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(area.height);
    let area = Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    };

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// 按后端状态选择横幅内容
pub fn banner_lines(state: &State) -> Vec<Line<'static>> {
    let texts = &t().banner;

    let auth_url = |url: &str| {
        Line::from(vec![
            Span::raw(texts.login_url_prefix),
            Span::styled(url.to_string(), Styles::link()),
        ])
    };

    match state.backend_state {
        BackendState::NeedsMachineAuth => vec![Line::raw(format!(
            "{}{}{}",
            texts.machine_auth_prefix, state.backend_state, texts.machine_auth_suffix
        ))],

        BackendState::NeedsLogin => {
            let mut lines = vec![
                Line::styled(texts.login_required, Styles::bold()),
                Line::default(),
                Line::raw(texts.login_body),
                Line::default(),
            ];
            match &state.auth_url {
                None => lines.push(Line::raw(texts.press_to_authenticate)),
                Some(url) => {
                    lines.push(auth_url(url));
                    lines.push(Line::default());
                    lines.push(Line::raw(texts.press_to_open_browser));
                }
            }
            lines
        }

        BackendState::NoState | BackendState::Stopped => {
            vec![Line::raw(texts.daemon_not_running)]
        }

        BackendState::Starting => match &state.auth_url {
            None => vec![Line::raw(texts.starting)],
            Some(url) => vec![
                Line::styled(texts.reauth_required, Styles::bold()),
                Line::default(),
                Line::raw(texts.reauth_hint),
                auth_url(url),
                Line::default(),
                Line::raw(texts.press_to_open_browser),
            ],
        },

        BackendState::Running => Vec::new(),
    }
}
