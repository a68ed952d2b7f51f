/// 金额类型：以"分"为单位的整数
///
/// 所有结算金额都用整数分表示，保证零和校验与历史回退是精确的，
/// 不存在浮点误差。正数表示收入，负数表示支出。
pub type Money = i64;

/// 将"元"转换为"分"
#[inline]
pub fn from_units(units: i64) -> Money {
    units * 100
}

/// 格式化金额为两位小数的字符串（如 `12.34`、`-0.50`）
pub fn format_money(amount: Money) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        assert_eq!(from_units(1), 100);
        assert_eq!(from_units(0), 0);
        assert_eq!(from_units(-3), -300);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234), "12.34");
        assert_eq!(format_money(-50), "-0.50");
        assert_eq!(format_money(0), "0.00");
        assert_eq!(format_money(100), "1.00");
        assert_eq!(format_money(-2005), "-20.05");
    }
}
