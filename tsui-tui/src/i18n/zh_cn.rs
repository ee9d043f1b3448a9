//! 简体中文翻译 (zh-CN)

use super::keys::{
    BannerTexts, CommonTexts, DeviceTexts, DurationTexts, ExitNodeTexts, HeaderTexts, MenuTexts,
    SettingsTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        yes: "是",
        no: "否",
        error_prefix: "错误：",
        tip_prefix: "提示！",
    },

    // ========================================================================
    // 顶部信息区
    // ========================================================================
    header: HeaderTexts {
        status_label: "Tailscale 状态：",
        needs_login: "需要登录",
        needs_machine_auth: "等待设备批准",
        starting: "启动中...",
        connected: "已连接",
        exit_node_suffix: " - 出口节点",
        not_connected: "未连接",
        press_to_disconnect: "（按 . 断开连接）",
        traffic: "流量：",
        tsui_version: "tsui：",
        tailscale_version: "tailscale：",
        version_unknown: "（未连接）",
        locked_out_title: "警告：已被锁定",
        locked_out_body: "本机已被 tailnet lock 拒绝。请在受信任的节点上为本机的节点密钥签名。",
    },

    banner: BannerTexts {
        machine_auth_prefix: "Tailscale 当前状态为 ",
        machine_auth_suffix: "，需要管理员批准本机。",
        login_required: "需要登录",
        login_body: "连接到 tailnet 之前需要先登录 Tailscale。",
        login_url_prefix: "登录链接：",
        press_to_open_browser: "按 . 在浏览器中打开。",
        press_to_authenticate: "按 . 进行认证。",
        daemon_not_running: "Tailscale 守护进程未运行。按 . 启动 Tailscale。",
        starting: "Tailscale 正在启动...",
        reauth_required: "需要重新认证",
        reauth_hint: "打开以下链接继续：",
    },

    // ========================================================================
    // 菜单
    // ========================================================================
    menu: MenuTexts {
        device_info: "本机",
        exit_nodes: "出口节点",
        settings: "设置",
        placeholder: "未连接。",
    },

    device: DeviceTexts {
        name: "名称",
        ips: "IP 地址",
        debug_info: "调试信息",
        id_prefix: "ID：",
        tailnet_lock: "Tailnet Lock：",
        lock_online: "正常",
        lock_locked_out: "已锁定",
        disconnect: "[断开 Tailscale]",
    },

    exit_nodes: ExitNodeTexts {
        none: "无",
        offline: "离线",
        unknown_latency: "???",
    },

    settings: SettingsTexts {
        general: "常规",
        allow_incoming: "允许传入连接",
        use_subnet_routes: "使用子网路由",
        use_dns: "使用 DNS 设置",
        exit_nodes: "出口节点",
        allow_lan_access: "允许访问本地网络",
        advertise_exit_node: "作为出口节点",
        exit_node_option: "出口节点",
        account: "账号",
        key_expires_prefix: " - 密钥将在以下时间后过期：",
        reauthenticate: "[重新认证]",
        reauthenticate_now: "[立即重新认证]",
        log_out: "[登出]",
        advanced_linux: "高级 - Linux",
        netfilter_mode: "NetFilter 模式",
        netfilter_on: "开启",
        netfilter_no_divert: "不转发",
        netfilter_off: "关闭",
        stateful_filtering: "启用状态过滤",
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    status: StatusTexts {
        copied_domain: "已复制完整域名。",
        copied_ipv4: "已复制 IPv4 地址。",
        copied_ipv6: "已复制 IPv6 地址。",
        copied_node_id: "已复制 Tailscale 节点 ID。",
        copied_node_key: "已复制节点密钥。",
        copied_lock_key: "已复制 tailnet lock 密钥。",
        disconnect_tip: "也可以直接按 . 断开连接。",
        starting_login: "正在开始登录，可能需要几秒钟。",
        starting_reauth: "正在开始重新认证，可能需要几秒钟。",
        logged_out: "已登出。",
        update_prefix: "tsui 有新版本：",
        update_suffix: "。重新运行安装脚本即可更新。",
        read_only: "你不是 Tailscale 的 operator，无法修改设置。运行 `sudo tailscale set --operator=$USER` 解决。",
        browser_unsupported: "当前平台不支持打开浏览器。",
    },

    duration: DurationTexts {
        months: " 个月",
        days: "天",
        hours: "小时",
        minutes: "分钟",
    },
};
