//! 显示格式

use chrono::TimeDelta;

use crate::i18n::t;

const DAYS_PER_MONTH: f64 = 30.437;
const BYTE_UNITS: [&str; 6] = ["kB", "MB", "GB", "TB", "PB", "EB"];

/// 字节数，1000 进制，保留一位小数
pub fn format_bytes(bytes: i64) -> String {
    let bytes = bytes.max(0);
    if bytes < 1000 {
        return format!("{bytes} B");
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;
    while value >= 999.95 && unit < BYTE_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{value:.1} {}", BYTE_UNITS[unit])
}

/// 剩余时间，取最大的非零单位并向下取整
pub fn format_duration(duration: TimeDelta) -> String {
    let texts = &t().duration;
    let minutes = duration.num_minutes().max(0);
    let hours = minutes / 60;
    let days = hours / 24;

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let months = (minutes as f64 / 60.0 / 24.0 / DAYS_PER_MONTH).floor() as i64;

    if months >= 1 {
        format!("{months}{}", texts.months)
    } else if days >= 1 {
        format!("{days}{}", texts.days)
    } else if hours >= 1 {
        format!("{hours}{}", texts.hours)
    } else {
        format!("{minutes}{}", texts.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_use_decimal_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(999), "999 B");
        assert_eq!(format_bytes(1000), "1.0 kB");
        assert_eq!(format_bytes(1_234_567), "1.2 MB");
        assert_eq!(format_bytes(999_999), "1.0 MB");
        assert_eq!(format_bytes(-5), "0 B");
    }

    #[test]
    fn duration_picks_largest_unit() {
        assert_eq!(format_duration(TimeDelta::days(95)), "3 Months");
        assert_eq!(format_duration(TimeDelta::days(30)), "30d");
        assert_eq!(format_duration(TimeDelta::hours(50)), "2d");
        assert_eq!(format_duration(TimeDelta::minutes(90)), "1h");
        assert_eq!(format_duration(TimeDelta::minutes(59)), "59m");
        assert_eq!(format_duration(TimeDelta::minutes(-3)), "0m");
    }
}
