//! 配置服务
//!
//! 没有配置文件，所有配置来自命令行参数（部分可由环境变量提供）。

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tsui_core::DEFAULT_SOCKET_PATH;

use crate::i18n::Language;
use crate::model::AppOptions;
use crate::view::theme::Theme;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(
    name = "tsui",
    version,
    about = "A terminal dashboard for the Tailscale daemon."
)]
pub struct Cli {
    /// tailscaled LocalAPI socket
    #[arg(long, env = "TSUI_SOCKET", default_value = DEFAULT_SOCKET_PATH)]
    pub socket: PathBuf,

    /// Color theme: dark or light
    #[arg(long, default_value = "dark", value_parser = parse_theme)]
    pub theme: Theme,

    /// Interface language: en-US or zh-CN
    #[arg(long = "lang", default_value = "en-US", value_parser = parse_language)]
    pub language: Language,

    /// Seconds between status refreshes
    #[arg(long, default_value = "5", value_parser = parse_seconds)]
    pub tick_interval: Duration,

    /// Skip the startup check for a newer release
    #[arg(long, env = "TSUI_NO_UPDATE_CHECK")]
    pub no_update_check: bool,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long, env = "TSUI_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    Theme::from_name(s).ok_or_else(|| format!("unknown theme '{s}' (expected dark or light)"))
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::from_code(s).ok_or_else(|| {
        let supported: Vec<_> = Language::all().iter().map(Language::code).collect();
        format!(
            "unsupported language '{s}' (expected one of {})",
            supported.join(", ")
        )
    })
}

fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number of seconds"))?;
    if secs < 1.0 {
        return Err("interval must be at least 1 second".to_string());
    }
    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub socket_path: PathBuf,
    pub theme: Theme,
    pub language: Language,
    pub tick_interval: Duration,
    pub check_for_updates: bool,
    pub log_file: Option<PathBuf>,
    /// 单次守护进程调用的超时
    pub call_timeout: Duration,
    /// 单次 ping 的超时
    pub ping_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            theme: Theme::Dark,
            language: Language::EnUs,
            tick_interval: Duration::from_secs(5),
            check_for_updates: true,
            log_file: None,
            call_timeout: Duration::from_secs(10),
            ping_timeout: Duration::from_secs(2),
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            socket_path: cli.socket,
            theme: cli.theme,
            language: cli.language,
            tick_interval: cli.tick_interval,
            check_for_updates: !cli.no_update_check,
            log_file: cli.log_file,
            ..Self::default()
        }
    }
}

impl AppConfig {
    /// 解析进程参数；`--help` / `--version` / 参数错误时由 clap 打印并退出
    pub fn load() -> Self {
        Cli::parse().into()
    }

    /// Model 层使用的选项
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            tick_interval: self.tick_interval,
            ..AppOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        Cli::try_parse_from(std::iter::once("tsui").chain(args.iter().copied()))
            .map(AppConfig::from)
    }

    #[test]
    fn explicit_flags_are_applied() {
        let config = parse(&[
            "--socket",
            "/tmp/ts.sock",
            "--theme",
            "light",
            "--lang",
            "zh-CN",
            "--tick-interval",
            "10",
            "--no-update-check",
            "--log-file",
            "/tmp/tsui.log",
        ])
        .unwrap();

        assert_eq!(config.socket_path, PathBuf::from("/tmp/ts.sock"));
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, Language::ZhCn);
        assert_eq!(config.tick_interval, Duration::from_secs(10));
        assert!(!config.check_for_updates);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/tsui.log")));
        assert_eq!(config.app_options().tick_interval, Duration::from_secs(10));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(parse(&["--theme", "solarized"]).is_err());
        assert!(parse(&["--lang", "fr"]).is_err());
        assert!(parse(&["--tick-interval", "0.2"]).is_err());
        assert!(parse(&["--tick-interval", "soon"]).is_err());
    }

    #[test]
    fn seconds_parser_accepts_fractions() {
        assert_eq!(parse_seconds("1.5"), Ok(Duration::from_millis(1500)));
    }
}
