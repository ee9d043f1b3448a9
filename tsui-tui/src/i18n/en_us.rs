//! 英文翻译 (en-US)

use super::keys::{
    BannerTexts, CommonTexts, DeviceTexts, DurationTexts, ExitNodeTexts, HeaderTexts, MenuTexts,
    SettingsTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        yes: "Yes",
        no: "No",
        error_prefix: "Error: ",
        tip_prefix: "Tip! ",
    },

    // ========================================================================
    // 顶部信息区
    // ========================================================================
    header: HeaderTexts {
        status_label: "Tailscale Status: ",
        needs_login: "Needs Login",
        needs_machine_auth: "Needs Machine Auth",
        starting: "Starting...",
        connected: "Connected",
        exit_node_suffix: " - Exit Node",
        not_connected: "Not Connected",
        press_to_disconnect: "(press . to disconnect)",
        traffic: "Traffic: ",
        tsui_version: "tsui: ",
        tailscale_version: "tailscale: ",
        version_unknown: "(not connected)",
        locked_out_title: "Warning: Locked Out",
        locked_out_body: "This node is locked out by tailnet lock. Ask a trusted node to sign your node key.",
    },

    banner: BannerTexts {
        machine_auth_prefix: "Tailscale is in state ",
        machine_auth_suffix: ". An admin needs to approve this machine.",
        login_required: "Login Required",
        login_body: "You need to login to Tailscale before you can connect to the tailnet.",
        login_url_prefix: "Login URL: ",
        press_to_open_browser: "Press . to open in browser.",
        press_to_authenticate: "Press . to authenticate.",
        daemon_not_running: "The Tailscale daemon isn't running. Press . to bring Tailscale up.",
        starting: "Tailscale is starting...",
        reauth_required: "Reauthentication Required",
        reauth_hint: "Open this URL to continue:",
    },

    // ========================================================================
    // 菜单
    // ========================================================================
    menu: MenuTexts {
        device_info: "This Device",
        exit_nodes: "Exit Nodes",
        settings: "Settings",
        placeholder: "Not connected.",
    },

    device: DeviceTexts {
        name: "Name",
        ips: "IPs",
        debug_info: "Debug Info",
        id_prefix: "ID: ",
        tailnet_lock: "Tailnet Lock: ",
        lock_online: "Online",
        lock_locked_out: "Locked Out",
        disconnect: "[Disconnect from Tailscale]",
    },

    exit_nodes: ExitNodeTexts {
        none: "None",
        offline: "Offline",
        unknown_latency: "???",
    },

    settings: SettingsTexts {
        general: "General",
        allow_incoming: "Allow Incoming Connections",
        use_subnet_routes: "Use Subnet Routes",
        use_dns: "Use DNS Settings",
        exit_nodes: "Exit Nodes",
        allow_lan_access: "Allow Local Network Access",
        advertise_exit_node: "Advertise Exit Node",
        exit_node_option: "Exit Node",
        account: "Account",
        key_expires_prefix: " - Key Expires in ",
        reauthenticate: "[Reauthenticate]",
        reauthenticate_now: "[Reauthenticate Now]",
        log_out: "[Log Out]",
        advanced_linux: "Advanced - Linux",
        netfilter_mode: "NetFilter Mode",
        netfilter_on: "On",
        netfilter_no_divert: "No Divert",
        netfilter_off: "Off",
        stateful_filtering: "Enable Stateful Filtering",
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    status: StatusTexts {
        copied_domain: "Copied full domain to clipboard.",
        copied_ipv4: "Copied IPv4 address to clipboard.",
        copied_ipv6: "Copied IPv6 address to clipboard.",
        copied_node_id: "Copied Tailscale node ID to clipboard.",
        copied_node_key: "Copied node key to clipboard.",
        copied_lock_key: "Copied tailnet lock key to clipboard.",
        disconnect_tip: "You can also simply press . to disconnect.",
        starting_login: "Starting login flow. This may take a few seconds.",
        starting_reauth: "Starting reauthentication. This may take a few seconds.",
        logged_out: "Logged out.",
        update_prefix: "A new version of tsui is available: ",
        update_suffix: ". Run the install script again to update.",
        read_only: "You are not the Tailscale operator, so settings can't be changed. Run `sudo tailscale set --operator=$USER` to fix.",
        browser_unsupported: "Opening a browser isn't supported on this platform.",
    },

    duration: DurationTexts {
        months: " Months",
        days: "d",
        hours: "h",
        minutes: "m",
    },
};
