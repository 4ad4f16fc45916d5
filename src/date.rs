use chrono::{DateTime, Local, TimeZone};

pub fn local_today() -> String {
    local_date(Local::now())
}

/// The calendar date of `instant` in its own timezone, not in UTC.
pub fn local_date<Tz: TimeZone>(instant: DateTime<Tz>) -> String {
    instant.date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn at(offset_hours: i32, date: (i32, u32, u32), time: (u32, u32)) -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        let naive = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, 0)
            .unwrap();
        offset.from_local_datetime(&naive).unwrap()
    }

    #[test]
    fn late_evening_west_of_utc_keeps_local_date() {
        let instant = at(-5, (2024, 1, 1), (23, 30));
        assert_eq!(instant.with_timezone(&Utc).date_naive().to_string(), "2024-01-02");
        assert_eq!(local_date(instant), "2024-01-01");
    }

    #[test]
    fn early_morning_east_of_utc_keeps_local_date() {
        let instant = at(9, (2024, 3, 1), (0, 15));
        assert_eq!(instant.with_timezone(&Utc).date_naive().to_string(), "2024-02-29");
        assert_eq!(local_date(instant), "2024-03-01");
    }

    #[test]
    fn today_matches_wall_clock() {
        let today = local_today();
        assert_eq!(today.len(), 10);
        assert_eq!(today, Local::now().date_naive().to_string());
    }
}
