//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use tsui_core::BackendState;

use crate::model::App;

use super::components::{banner, header, menu, statusbar};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 还不知道终端大小时不渲染
    let (width, height) = app.terminal_size;
    if width == 0 || height == 0 {
        return;
    }

    let size = frame.area();
    let locked_out = app.state.is_locked_out;

    // 自上而下：信息区、锁定警告（可选）、中部、状态栏
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(if locked_out { header::LOCKED_OUT_HEIGHT } else { 0 }),
            Constraint::Length(u16::from(locked_out)),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    header::render(app, frame, rows[0]);

    if locked_out {
        header::render_locked_out(frame, rows[2]);
    }

    let middle = rows[4];
    if app.state.backend_state == BackendState::Running {
        menu::render(&app.menu, frame, middle);
    } else {
        banner::render(&app.state, frame, middle);
    }

    statusbar::render(app.status.current(), frame, rows[6]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use tsui_core::State;

    use crate::model::AppOptions;

    fn draw(app: &mut App) -> String {
        app.terminal_size = (120, 30);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn stopped_daemon_shows_banner() {
        let state = State {
            backend_state: BackendState::Stopped,
            ..State::default()
        };
        let mut app = App::new(state, AppOptions::default(), false);
        let screen = draw(&mut app);

        assert!(screen.contains("Not Connected"));
        assert!(screen.contains("The Tailscale daemon isn't running."));
    }

    #[test]
    fn locked_out_warning_is_shown() {
        let state = State {
            backend_state: BackendState::Running,
            is_locked_out: true,
            ..State::default()
        };
        let mut app = App::new(state, AppOptions::default(), false);

        assert!(draw(&mut app).contains("Warning: Locked Out"));
    }

    #[test]
    fn nothing_is_drawn_before_the_size_is_known() {
        let app = App::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .all(|cell| cell.symbol() == " "));
    }
}
