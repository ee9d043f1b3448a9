//! 底部状态栏组件

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::message::StatusKind;
use crate::model::StatusLine;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏；没有消息时留空
pub fn render(status: Option<&StatusLine>, frame: &mut Frame, area: Rect) {
    let Some(status) = status else {
        return;
    };

    frame.render_widget(
        Paragraph::new(status_line(status)).alignment(Alignment::Center),
        area,
    );
}

/// 错误和提示带前缀，成功消息不带
fn status_line(status: &StatusLine) -> Line<'static> {
    let c = colors();
    let texts = &t().common;

    let (color, prefix) = match status.kind {
        StatusKind::Error => (c.red, Some(texts.error_prefix)),
        StatusKind::Success => (c.green, None),
        StatusKind::Tip => (c.blue, Some(texts.tip_prefix)),
    };

    let style = Style::default().fg(color);
    let mut spans = Vec::with_capacity(2);
    if let Some(prefix) = prefix {
        spans.push(Span::styled(prefix, style.patch(Styles::bold())));
    }
    spans.push(Span::styled(status.text.clone(), style));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(kind: StatusKind, text: &str) -> String {
        status_line(&StatusLine {
            kind,
            text: text.to_string(),
            generation: 1,
        })
        .to_string()
    }

    #[test]
    fn prefixes_follow_kind() {
        assert_eq!(line(StatusKind::Error, "boom"), "Error: boom");
        assert_eq!(line(StatusKind::Tip, "press ."), "Tip! press .");
        assert_eq!(line(StatusKind::Success, "Copied."), "Copied.");
    }
}
