//! 主菜单与子菜单
//!
//! 主菜单每行固定宽度：左标签 15 + 右标签 35 + 箭头 3；
//! 子菜单紧贴主菜单右侧，每行 45。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::menu::{
    ItemVariant, LabeledItem, SettingItem, Submenu, SubmenuItem, ToggleableItem,
};
use crate::model::{Appmenu, AppmenuItem};
use crate::view::theme::Styles;

const LEFT_LABEL_WIDTH: usize = 15;
const RIGHT_LABEL_WIDTH: usize = 35;
const ARROW: &str = " > ";
const APPMENU_WIDTH: u16 = 53;
const SUBMENU_WIDTH: usize = 45;

/// 渲染主菜单（以及当前项的子菜单）
pub fn render(menu: &Appmenu, frame: &mut Frame, area: Rect) {
    if menu.is_empty() {
        render_placeholder(&menu.placeholder, frame, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(APPMENU_WIDTH),
            Constraint::Length(SUBMENU_WIDTH as u16),
            Constraint::Min(0),
        ])
        .split(area);

    let is_open = menu.is_submenu_open();
    let lines: Vec<Line> = menu
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| appmenu_line(item, i == menu.cursor(), is_open))
        .collect();
    frame.render_widget(Paragraph::new(lines), columns[0]);

    if let Some(current) = menu.current() {
        render_submenu(&current.submenu, is_open, frame, columns[1]);
    }
}

fn render_placeholder(text: &str, frame: &mut Frame, area: Rect) {
    let divider = Span::styled("-".repeat(text.width()), Styles::faint());
    let lines = vec![
        Line::from(divider.clone()),
        Line::default(),
        Line::from(text.to_string()),
        Line::default(),
        Line::from(divider),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn appmenu_line(item: &AppmenuItem, is_selected: bool, is_any_open: bool) -> Line<'static> {
    let style = match (is_selected, is_any_open) {
        (true, true) => Styles::appmenu_selected_inactive(),
        (true, false) => Styles::appmenu_selected(),
        (false, true) => Styles::faint(),
        (false, false) => Style::default(),
    };

    let left = pad_right(&format!(" {} ", item.left_label), LEFT_LABEL_WIDTH);
    let right = pad_left(&item.right_label, RIGHT_LABEL_WIDTH);

    Line::from(vec![
        Span::styled(left, style),
        Span::styled(right, style.patch(Styles::faint())),
        Span::styled(ARROW, style),
    ])
}

/// 渲染子菜单；超出区域高度时滚动到光标可见
fn render_submenu(submenu: &Submenu, is_open: bool, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = submenu
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| submenu_line(item, submenu.is_selected(i), is_open))
        .collect();

    let height = usize::from(area.height);
    let offset = match submenu.cursor() {
        Some(cursor) if height > 0 && cursor >= height => cursor + 1 - height,
        _ => 0,
    };

    let paragraph = Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

/// 单个子菜单项
pub fn submenu_line(item: &SubmenuItem, is_selected: bool, is_open: bool) -> Line<'static> {
    match item {
        SubmenuItem::Labeled(labeled) => labeled_line(labeled, is_selected, is_open),
        SubmenuItem::Toggleable(toggleable) => toggleable_line(toggleable, is_selected, is_open),
        SubmenuItem::Setting(setting) => setting_line(setting, is_selected, is_open),
        SubmenuItem::Divider => Line::from(Span::styled("  --", Styles::faint())),
        SubmenuItem::Spacer => Line::default(),
        SubmenuItem::Title(label) => Line::from(Span::styled(format!("  {label}"), Styles::faint())),
    }
}

fn variant_style(variant: ItemVariant) -> Style {
    match variant {
        ItemVariant::Default => Style::default(),
        ItemVariant::Accent => Styles::accent(),
        ItemVariant::Danger => Styles::danger(),
    }
}

/// 选中、变体与弱化的组合样式
fn item_style(item: &LabeledItem, is_selected: bool, is_open: bool, active: bool) -> Style {
    if !is_open {
        return Styles::faint();
    }

    let mut style = Style::default();
    if active {
        style = style.patch(Styles::bold());
        if item.variant == ItemVariant::Default {
            style = style.patch(Styles::accent());
        }
    }

    if is_selected {
        style = style.patch(Styles::submenu_selected());
    } else if item.dim {
        style = style.patch(Styles::faint());
    }

    if item.variant != ItemVariant::Default {
        if is_selected {
            style = style.patch(Styles::bold());
        } else if !item.dim {
            style = style.patch(variant_style(item.variant));
        }
    }

    style
}

fn labeled_line(item: &LabeledItem, is_selected: bool, is_open: bool) -> Line<'static> {
    let style = item_style(item, is_selected, is_open, false);
    split_line("  ", &item.label, &item.right_label, " ", style)
}

fn toggleable_line(item: &ToggleableItem, is_selected: bool, is_open: bool) -> Line<'static> {
    let style = item_style(&item.item, is_selected, is_open, item.active);
    let prefix = if item.active { " *" } else { "  " };
    split_line(prefix, &item.item.label, &item.item.right_label, " ", style)
}

fn setting_line(item: &SettingItem, is_selected: bool, is_open: bool) -> Line<'static> {
    let (value, value_label) = item
        .selected()
        .map_or(("", ""), |option| (option.value, option.label.as_str()));

    let (style, value_style) = if !is_open {
        (Styles::faint(), Styles::faint())
    } else if is_selected {
        let selected = Styles::submenu_selected();
        (selected, selected.patch(Styles::bold()))
    } else {
        (Style::default(), Styles::setting_value(value))
    };

    let inner = SUBMENU_WIDTH - 3;
    let gap = inner.saturating_sub(item.label.width() + value_label.width());
    Line::from(vec![
        Span::styled(format!("  {}{}", item.label, " ".repeat(gap)), style),
        Span::styled(value_label.to_string(), value_style),
        Span::styled(" ", style),
    ])
}

/// 左右两段拼成固定宽度的一行，右段弱化
fn split_line(prefix: &str, left: &str, right: &str, suffix: &str, style: Style) -> Line<'static> {
    let inner = SUBMENU_WIDTH.saturating_sub(prefix.width() + suffix.width());
    let gap = inner.saturating_sub(left.width() + right.width());
    Line::from(vec![
        Span::styled(format!("{prefix}{left}{}", " ".repeat(gap)), style),
        Span::styled(right.to_string(), style.patch(Styles::faint())),
        Span::styled(suffix.to_string(), style),
    ])
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(fill))
}
