//! 日期工具：年龄推算与显示格式
//!
//! 年龄按 `floor((today - date_of_birth) / 365.25 天)` 计算，
//! 生日前后可能与按日历计算的年龄相差一岁。365.25 = 1461 / 4，全程整数运算。
//!
use crate::error::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate};

pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    let days = (today - date_of_birth).num_days();
    if days < 0 {
        return None;
    }
    u32::try_from(days * 4 / 1461).ok()
}

/// `dd/mm/yyyy`，缺失时为空串
pub fn format_display_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// `yyyy-mm-dd`，缺失时为空串
pub fn format_input_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// 解析 ISO 日期；也接受带时间的 RFC 3339 字符串，仅取日期部分
pub fn parse_iso_date(value: &str) -> DomainResult<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Parse {
            reason: "empty date".to_string(),
        });
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => Ok(DateTime::parse_from_rfc3339(value)?.date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn age_uses_average_year_length() {
        assert_eq!(age_in_years(d(2000, 1, 1), d(2010, 1, 1)), Some(10));
        assert_eq!(age_in_years(d(2000, 1, 1), d(2009, 12, 31)), Some(9));
        // 日历年龄为 1，公式结果为 0
        assert_eq!(age_in_years(d(2001, 1, 1), d(2002, 1, 1)), Some(0));
        assert_eq!(age_in_years(d(2001, 1, 1), d(2002, 1, 2)), Some(1));
    }

    #[test]
    fn future_birth_date_has_no_age() {
        assert_eq!(age_in_years(d(2030, 1, 1), d(2020, 1, 1)), None);
        assert_eq!(age_in_years(d(2020, 1, 1), d(2020, 1, 1)), Some(0));
    }

    #[test]
    fn display_formats() {
        assert_eq!(format_display_date(Some(d(1990, 3, 7))), "07/03/1990");
        assert_eq!(format_input_date(Some(d(1990, 3, 7))), "1990-03-07");
        assert_eq!(format_display_date(None), "");
        assert_eq!(format_input_date(None), "");
    }

    #[test]
    fn parse_accepts_date_and_timestamp() {
        assert_eq!(parse_iso_date("1990-03-07").unwrap(), d(1990, 3, 7));
        assert_eq!(
            parse_iso_date("1990-03-07T10:00:00+06:30").unwrap(),
            d(1990, 3, 7)
        );
        assert!(parse_iso_date("").is_err());
        assert!(parse_iso_date("07/03/1990").is_err());
    }
}
