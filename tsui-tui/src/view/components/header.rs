//! 顶部信息区：logo、连接状态、登录名、流量、版本

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use tsui_core::{BackendState, State};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::util::format_bytes;
use crate::view::theme::Styles;

const LOGO: [&str; 6] = [
    r"   __             _ ",
    r"  / /________  __(_)",
    r" / __/ ___/ / / / / ",
    r"/ /_(__  ) /_/ / /  ",
    r"\__/____/\__,_/_/   ",
    r"    by neuralink    ",
];

/// 顶部信息区高度
pub const HEADER_HEIGHT: u16 = LOGO.len() as u16;

/// 锁定警告最大宽度
const WARNING_WIDTH: u16 = 80;

/// 锁定警告高度（标题 + 最多两行正文）
pub const LOCKED_OUT_HEIGHT: u16 = 3;

/// 渲染顶部信息区
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let versions = version_lines(app);
    let versions_width = versions.iter().map(Line::width).max().unwrap_or(0);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LOGO[0].width() as u16 + 4),
            Constraint::Min(0),
            Constraint::Length(u16::try_from(versions_width).unwrap_or(u16::MAX)),
        ])
        .split(area);

    let logo: Vec<Line> = LOGO
        .iter()
        .map(|line| Line::styled(*line, Styles::logo()))
        .collect();
    frame.render_widget(Paragraph::new(logo), columns[0]);

    let status = status_lines(&app.state);
    frame.render_widget(Paragraph::new(status), center_vertically(columns[1], 3));

    frame.render_widget(Paragraph::new(versions), center_vertically(columns[2], 2));
}

/// 渲染锁定警告
pub fn render_locked_out(frame: &mut Frame, area: Rect) {
    let texts = &t().header;
    let width = area.width.min(WARNING_WIDTH);
    let area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", texts.locked_out_title),
            Styles::warning_heading(),
        )),
        Line::from(Span::styled(texts.locked_out_body, Styles::warning())),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// 状态按钮文字
pub fn status_button_text(state: &State) -> String {
    let texts = &t().header;
    match state.backend_state {
        BackendState::NeedsLogin => texts.needs_login.to_string(),
        BackendState::NeedsMachineAuth => texts.needs_machine_auth.to_string(),
        BackendState::Starting => texts.starting.to_string(),
        BackendState::Running if state.current_exit_node.is_some() => {
            format!("{}{}", texts.connected, texts.exit_node_suffix)
        }
        BackendState::Running => texts.connected.to_string(),
        BackendState::Stopped | BackendState::NoState => texts.not_connected.to_string(),
    }
}

fn status_lines(state: &State) -> Vec<Line<'static>> {
    let texts = &t().header;

    let mut first = vec![
        Span::raw(texts.status_label),
        Span::styled(
            format!(" {} ", status_button_text(state)),
            Styles::status_button(state.backend_state),
        ),
    ];
    if state.backend_state == BackendState::Running {
        first.push(Span::styled(
            format!(" {}", texts.press_to_disconnect),
            Styles::faint(),
        ));
    }

    let login = state.login_name().unwrap_or("--").to_string();

    vec![
        Line::from(first),
        Line::styled(login, Styles::faint()),
        Line::styled(
            format!(
                "{}{}",
                texts.traffic,
                format_bytes(state.rx_bytes + state.tx_bytes)
            ),
            Styles::faint(),
        ),
    ]
}

fn version_lines(app: &App) -> Vec<Line<'static>> {
    let texts = &t().header;
    let label_width = texts
        .tsui_version
        .width()
        .max(texts.tailscale_version.width());

    let tailscale = if app.state.version.is_empty() {
        texts.version_unknown
    } else {
        app.state.version.as_str()
    };

    let tsui = match &app.latest_version {
        Some(latest) => format!("{} → {latest}", app.tsui_version),
        None => app.tsui_version.to_string(),
    };

    [
        (texts.tsui_version, tsui.as_str()),
        (texts.tailscale_version, tailscale),
    ]
    .into_iter()
    .map(|(label, value)| {
        let fill = label_width.saturating_sub(label.width());
        Line::styled(
            format!("{label}{}{value} ", " ".repeat(fill)),
            Styles::faint(),
        )
    })
    .collect()
}

/// 在区域内垂直居中放置 `height` 行
fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}
