//! 根据守护进程状态构建菜单
//!
//! 每次收到新状态都会重建全部子菜单的条目；子菜单对象本身保留，
//! 所以光标位置在刷新之间不会丢失。

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tsui_core::{peer_name, NetfilterMode, NodeId, Preferences, PrefsEdit, State};

use crate::command::{Command, DaemonAction};
use crate::i18n::t;
use crate::message::Notice;
use crate::model::menu::{
    Exclusivity, ItemVariant, LabeledItem, SettingOption, Submenu, SubmenuItem, NO, YES,
};
use crate::model::{App, AppmenuItem, MenuId};
use crate::util::format_duration;

/// "通告出口节点"设置的取值
const ADVERTISE_EXIT_NODE: &str = "Exit Node";

/// 用最新状态刷新菜单；未连接时清空
pub fn rebuild_menus(app: &mut App) {
    if !app.state.backend_state.is_running() {
        app.menu.set_items(Vec::new());
        return;
    }

    let texts = &t().menu;
    if app.menu.is_empty() {
        app.menu.placeholder = texts.placeholder.to_string();
        app.menu.set_items(vec![
            AppmenuItem::new(
                MenuId::DeviceInfo,
                texts.device_info,
                Submenu::new(Exclusivity::None),
            ),
            AppmenuItem::new(
                MenuId::ExitNodes,
                texts.exit_nodes,
                Submenu::new(Exclusivity::One),
            ),
            AppmenuItem::new(
                MenuId::Settings,
                texts.settings,
                Submenu::new(Exclusivity::None),
            ),
        ]);
    }

    let device = build_device_items(&app.state);
    let exit_nodes = build_exit_node_items(&app.state, &app.pings);
    let settings = build_settings_items(
        &app.state,
        Utc::now(),
        app.options.show_linux_settings,
    );

    if let Some(item) = app.menu.item_mut(MenuId::DeviceInfo) {
        item.submenu.set_items(device);
    }
    if let Some(item) = app.menu.item_mut(MenuId::ExitNodes) {
        item.right_label.clone_from(&app.state.current_exit_node_name);
        item.submenu.set_items(exit_nodes);
    }
    if let Some(item) = app.menu.item_mut(MenuId::Settings) {
        item.submenu.set_items(settings);
    }
}

fn copy_item(label: impl Into<String>, text: impl Into<String>, notice: &str) -> SubmenuItem {
    SubmenuItem::labeled(LabeledItem::new(label).action(Command::Copy {
        text: text.into(),
        notice: notice.to_string(),
    }))
}

/// 本机信息
pub fn build_device_items(state: &State) -> Vec<SubmenuItem> {
    let texts = &t().device;
    let status = &t().status;
    let mut items = Vec::new();

    if let Some(node) = &state.self_node {
        let dns_name = node.dns_name.trim_end_matches('.');
        items.push(SubmenuItem::title(texts.name));
        items.push(copy_item(dns_name, dns_name, status.copied_domain));
        items.push(SubmenuItem::Spacer);

        items.push(SubmenuItem::title(texts.ips));
        for ip in &node.tailscale_ips {
            let notice = if ip.is_ipv4() {
                status.copied_ipv4
            } else {
                status.copied_ipv6
            };
            items.push(copy_item(ip.to_string(), ip.to_string(), notice));
        }
        items.push(SubmenuItem::Spacer);

        items.push(SubmenuItem::title(texts.debug_info));
        items.push(copy_item(
            format!("{}{}", texts.id_prefix, node.id),
            node.id.as_str(),
            status.copied_node_id,
        ));
        items.push(copy_item(
            node.public_key.as_str(),
            node.public_key.as_str(),
            status.copied_node_key,
        ));
    }

    if let Some(lock_key) = &state.lock_key {
        let lock_status = if state.is_locked_out {
            texts.lock_locked_out
        } else {
            texts.lock_online
        };
        items.push(SubmenuItem::Spacer);
        items.push(SubmenuItem::title(format!(
            "{}{lock_status}",
            texts.tailnet_lock
        )));
        items.push(copy_item(
            lock_key.as_str(),
            lock_key.as_str(),
            status.copied_lock_key,
        ));
    }

    items.push(SubmenuItem::Spacer);
    items.push(SubmenuItem::labeled(
        LabeledItem::new(texts.disconnect)
            .variant(ItemVariant::Accent)
            .action(Command::Daemon {
                action: DaemonAction::Stop,
                notice: Some(Notice::tip(status.disconnect_tip)),
            }),
    ));

    items
}

/// ping 延迟显示，四舍五入到毫秒
fn latency_label(latency: Duration) -> String {
    format!("{}ms", (latency.as_micros() + 500) / 1000)
}

/// 出口节点（单选）
pub fn build_exit_node_items(
    state: &State,
    pings: &HashMap<NodeId, Duration>,
) -> Vec<SubmenuItem> {
    let texts = &t().exit_nodes;
    let mut items = Vec::with_capacity(state.sorted_exit_nodes.len() + 2);

    items.push(SubmenuItem::toggleable(
        LabeledItem::new(texts.none).action(Command::daemon(DaemonAction::SetExitNode(None))),
        state.current_exit_node.is_none(),
    ));
    items.push(SubmenuItem::Divider);

    for peer in &state.sorted_exit_nodes {
        let right_label = if !peer.online {
            texts.offline.to_string()
        } else if let Some(latency) = pings.get(&peer.id) {
            latency_label(*latency)
        } else {
            texts.unknown_latency.to_string()
        };

        let item = LabeledItem::new(peer_name(peer))
            .right_label(right_label)
            .dim(!peer.online)
            .action(Command::daemon(DaemonAction::SetExitNode(Some(
                peer.id.clone(),
            ))));

        items.push(SubmenuItem::toggleable(
            item,
            state.current_exit_node.as_deref() == Some(peer.id.as_str()),
        ));
    }

    items
}

/// 设置
///
/// `now` 用于计算密钥剩余有效期；`linux` 控制是否显示 Linux 专属设置。
pub fn build_settings_items(state: &State, now: DateTime<Utc>, linux: bool) -> Vec<SubmenuItem> {
    let texts = &t().settings;
    let status = &t().status;
    let default_prefs = Preferences::default();
    let prefs = state.prefs.as_ref().unwrap_or(&default_prefs);

    let key_expiry = state.self_node.as_ref().and_then(|node| node.key_expiry);
    let (account_title, reauth_label) = match key_expiry {
        Some(expiry) => (
            format!(
                "{}{}{}",
                texts.account,
                texts.key_expires_prefix,
                format_duration(expiry - now)
            ),
            texts.reauthenticate_now,
        ),
        None => (texts.account.to_string(), texts.reauthenticate),
    };

    let mut items = vec![
        SubmenuItem::title(texts.general),
        SubmenuItem::yes_no(texts.allow_incoming, !prefs.shields_up, |value| {
            Command::edit_prefs(PrefsEdit::shields_up(value != YES))
        }),
        SubmenuItem::yes_no(texts.use_subnet_routes, prefs.route_all, |value| {
            Command::edit_prefs(PrefsEdit::route_all(value == YES))
        }),
        SubmenuItem::yes_no(texts.use_dns, prefs.corp_dns, |value| {
            Command::edit_prefs(PrefsEdit::corp_dns(value == YES))
        }),
        SubmenuItem::Spacer,
        SubmenuItem::title(texts.exit_nodes),
        SubmenuItem::yes_no(
            texts.allow_lan_access,
            prefs.exit_node_allow_lan_access,
            |value| Command::edit_prefs(PrefsEdit::exit_node_allow_lan_access(value == YES)),
        ),
        SubmenuItem::setting(
            texts.advertise_exit_node,
            vec![
                SettingOption::new(ADVERTISE_EXIT_NODE, texts.exit_node_option),
                SettingOption::new(NO, t().common.no),
            ],
            if prefs.advertises_exit_node() {
                ADVERTISE_EXIT_NODE
            } else {
                NO
            },
            |value| Command::edit_prefs(PrefsEdit::advertise_exit_node(value == ADVERTISE_EXIT_NODE)),
        ),
        SubmenuItem::Spacer,
        SubmenuItem::title(account_title),
        SubmenuItem::labeled(LabeledItem::new(reauth_label).action(Command::Daemon {
            action: DaemonAction::StartLogin,
            notice: Some(Notice::success(status.starting_reauth)),
        })),
        SubmenuItem::labeled(
            LabeledItem::new(texts.log_out)
                .variant(ItemVariant::Danger)
                .action(Command::Daemon {
                    action: DaemonAction::Logout,
                    notice: Some(Notice::success(status.logged_out)),
                }),
        ),
    ];

    if linux {
        let netfilter_options = NetfilterMode::ALL
            .into_iter()
            .map(|mode| SettingOption::new(mode.label(), netfilter_label(mode)))
            .collect();

        items.extend([
            SubmenuItem::Spacer,
            SubmenuItem::title(texts.advanced_linux),
            SubmenuItem::setting(
                texts.netfilter_mode,
                netfilter_options,
                prefs.netfilter_mode.label(),
                |value| {
                    NetfilterMode::from_label(value).map_or(Command::RefreshState, |mode| {
                        Command::edit_prefs(PrefsEdit::netfilter_mode(mode))
                    })
                },
            ),
            SubmenuItem::yes_no(
                texts.stateful_filtering,
                prefs.stateful_filtering(),
                |value| Command::edit_prefs(PrefsEdit::stateful_filtering(value == YES)),
            ),
        ]);
    }

    items
}

fn netfilter_label(mode: NetfilterMode) -> &'static str {
    let texts = &t().settings;
    match mode {
        NetfilterMode::On => texts.netfilter_on,
        NetfilterMode::NoDivert => texts.netfilter_no_divert,
        NetfilterMode::Off => texts.netfilter_off,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use tsui_core::test_utils::{exit_peer, running_status};
    use tsui_core::{project, LockInfo, PeerStatus};

    fn labels(items: &[SubmenuItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                SubmenuItem::Labeled(item) => item.label.clone(),
                SubmenuItem::Toggleable(toggle) => toggle.item.label.clone(),
                SubmenuItem::Setting(setting) => setting.label.clone(),
                SubmenuItem::Title(title) => format!("# {title}"),
                SubmenuItem::Divider => "---".to_string(),
                SubmenuItem::Spacer => String::new(),
            })
            .collect()
    }

    fn running_state(peers: Vec<PeerStatus>) -> State {
        project(Some(&running_status(peers)), Some(&Preferences::default()), None)
    }

    fn three_peer_state() -> State {
        running_state(vec![
            exit_peer("n1", "alpha", true),
            exit_peer("n2", "bravo", true),
            exit_peer("n3", "charlie", false),
        ])
    }

    #[test]
    fn each_exit_node_item_targets_its_own_peer() {
        let state = three_peer_state();
        let mut submenu = Submenu::new(Exclusivity::One);
        submenu.set_items(build_exit_node_items(&state, &HashMap::new()));

        // 跳过 None 项
        submenu.cursor_down();
        assert_eq!(
            submenu.activate(),
            Some(Command::daemon(DaemonAction::SetExitNode(Some(
                "n1".to_string()
            ))))
        );

        submenu.cursor_down();
        submenu.cursor_down();
        assert_eq!(
            submenu.activate(),
            Some(Command::daemon(DaemonAction::SetExitNode(Some(
                "n3".to_string()
            ))))
        );
    }

    #[test]
    fn exit_node_labels_show_latency_offline_or_unknown() {
        let state = three_peer_state();
        let mut pings = HashMap::new();
        pings.insert("n1".to_string(), Duration::from_micros(12_600));
        pings.insert("gone".to_string(), Duration::from_millis(3));

        let items = build_exit_node_items(&state, &pings);
        let right: Vec<(String, bool)> = items
            .iter()
            .filter_map(|item| match item {
                SubmenuItem::Toggleable(toggle) => {
                    Some((toggle.item.right_label.clone(), toggle.item.dim))
                }
                _ => None,
            })
            .collect();

        assert_eq!(
            right,
            vec![
                (String::new(), false),
                ("13ms".to_string(), false),
                ("???".to_string(), false),
                ("Offline".to_string(), true),
            ]
        );
    }

    #[test]
    fn none_is_active_without_exit_node() {
        let mut state = three_peer_state();
        let items = build_exit_node_items(&state, &HashMap::new());
        assert!(items[0].is_active());
        assert!(!items[2].is_active());

        state.current_exit_node = Some("n2".to_string());
        let items = build_exit_node_items(&state, &HashMap::new());
        let active: Vec<bool> = items.iter().map(SubmenuItem::is_active).collect();
        assert_eq!(active, vec![false, false, false, true, false]);
    }

    #[test]
    fn device_menu_lists_identity_and_disconnect() {
        let state = running_state(vec![]);
        let items = build_device_items(&state);
        let labels = labels(&items);

        assert_eq!(labels[0], "# Name");
        assert_eq!(labels[1], "laptop.tail1234.ts.net");
        assert!(labels.contains(&"100.64.0.1".to_string()));
        assert!(labels.contains(&"ID: nSELF".to_string()));
        assert_eq!(labels.last().map(String::as_str), Some("[Disconnect from Tailscale]"));
        assert!(!labels.iter().any(|l| l.starts_with("# Tailnet Lock")));

        let SubmenuItem::Labeled(ip) = &items[4] else {
            panic!("expected labeled item");
        };
        assert_eq!(
            ip.on_activate,
            Some(Command::Copy {
                text: "100.64.0.1".to_string(),
                notice: "Copied IPv4 address to clipboard.".to_string(),
            })
        );
    }

    #[test]
    fn device_menu_shows_lock_status() {
        let lock = LockInfo {
            enabled: true,
            public_key: "tlpub:abcd".to_string(),
            node_key: Some("nodekey:self".to_string()),
            node_key_signed: false,
        };
        let state = project(
            Some(&running_status(vec![])),
            Some(&Preferences::default()),
            Some(&lock),
        );

        let labels = labels(&build_device_items(&state));
        assert!(labels.contains(&"# Tailnet Lock: Locked Out".to_string()));
        assert!(labels.contains(&"tlpub:abcd".to_string()));
    }

    #[test]
    fn allow_incoming_is_inverse_of_shields_up() {
        let mut state = running_state(vec![]);
        state.prefs = Some(Preferences {
            shields_up: true,
            ..Preferences::default()
        });

        let mut submenu = Submenu::new(Exclusivity::None);
        submenu.set_items(build_settings_items(&state, Utc::now(), false));

        // 第一个可选项是 "Allow Incoming Connections"，当前为 No，激活后变为 Yes
        assert_eq!(
            submenu.activate(),
            Some(Command::edit_prefs(PrefsEdit::shields_up(false)))
        );
    }

    #[test]
    fn account_title_shows_key_expiry() {
        let now = Utc::now();
        let mut state = running_state(vec![]);
        if let Some(node) = state.self_node.as_mut() {
            node.key_expiry = Some(now + TimeDelta::days(65));
        }

        let expiring = labels(&build_settings_items(&state, now, false));
        assert!(expiring.contains(&"# Account - Key Expires in 2 Months".to_string()));
        assert!(expiring.contains(&"[Reauthenticate Now]".to_string()));

        let state = running_state(vec![]);
        let plain = labels(&build_settings_items(&state, now, false));
        assert!(plain.contains(&"# Account".to_string()));
        assert!(plain.contains(&"[Reauthenticate]".to_string()));
    }

    #[test]
    fn linux_section_is_optional() {
        let state = running_state(vec![]);
        let without = labels(&build_settings_items(&state, Utc::now(), false));
        let with = labels(&build_settings_items(&state, Utc::now(), true));

        assert!(!without.contains(&"# Advanced - Linux".to_string()));
        assert!(with.contains(&"# Advanced - Linux".to_string()));
        assert!(with.contains(&"NetFilter Mode".to_string()));
        assert!(with.contains(&"Enable Stateful Filtering".to_string()));
    }

    #[test]
    fn rebuild_keeps_submenu_cursor_and_empties_when_disconnected() {
        let mut app = App::default();
        app.state = three_peer_state();
        rebuild_menus(&mut app);
        assert_eq!(app.menu.items().len(), 3);

        app.menu.cursor_down();
        app.menu.activate();
        app.menu.cursor_down();
        app.menu.cursor_down();
        let cursor = app.menu.current().and_then(|item| item.submenu.cursor());
        assert_eq!(cursor, Some(3));

        rebuild_menus(&mut app);
        let cursor = app.menu.current().and_then(|item| item.submenu.cursor());
        assert_eq!(cursor, Some(3));
        assert!(app.menu.is_submenu_open());

        app.state = State::default();
        rebuild_menus(&mut app);
        assert!(app.menu.is_empty());
        assert!(!app.menu.is_submenu_open());
    }
}
