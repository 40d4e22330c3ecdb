use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

const FORMAT: &str = "%d-%m-%Y";

/// A calendar day written as `DD-MM-YYYY`, interpreted in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDate {
    raw: String,
    date: NaiveDate,
}

impl ReportDate {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// First instant of the day.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }

    /// First instant of the following day.
    pub fn ends_before(&self) -> DateTime<Utc> {
        self.date
            .succ_opt()
            .unwrap_or(NaiveDate::MAX)
            .and_time(NaiveTime::MIN)
            .and_utc()
    }
}

impl TryFrom<String> for ReportDate {
    type Error = InvalidReportDate;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !has_expected_shape(&value) {
            return Err(InvalidReportDate::Format(value));
        }
        match NaiveDate::parse_from_str(&value, FORMAT) {
            Ok(date) => Ok(Self { raw: value, date }),
            Err(_) => Err(InvalidReportDate::NoSuchDay(value)),
        }
    }
}

impl AsRef<str> for ReportDate {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

fn has_expected_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[derive(thiserror::Error, Debug)]
pub enum InvalidReportDate {
    #[error("{0} does not match the DD-MM-YYYY format")]
    Format(String),
    #[error("{0} is not a calendar date")]
    NoSuchDay(String),
}
