#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
    use shiftly::libs::calendar::{
        add_days, end_of_week, long_format_date, start_of_week, week_days, weekday_from_index, weekday_name,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_week_for_wednesday() {
        let wednesday = date(2026, 10, 14);
        assert_eq!(wednesday.weekday(), Weekday::Wed);

        let start = start_of_week(wednesday, Weekday::Mon);
        let end = end_of_week(wednesday, Weekday::Mon);
        assert_eq!(start, date(2026, 10, 12).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(end, date(2026, 10, 19).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_week_across_month_and_year_boundaries() {
        let cases = [date(2026, 3, 31), date(2025, 12, 31), date(2024, 2, 29), date(2026, 11, 1)];
        for day in cases {
            for index in 0..7 {
                let first = weekday_from_index(index).unwrap();
                let start = start_of_week(day, first);
                let end = end_of_week(day, first);
                assert_eq!(end - start, TimeDelta::days(7));
                assert_eq!(start.time(), chrono::NaiveTime::MIN);
                assert_eq!(start.date().weekday(), first);
            }
        }
        assert_eq!(start_of_week(date(2026, 1, 1), Weekday::Mon).date(), date(2025, 12, 29));
    }

    #[test]
    fn test_week_days_listing() {
        let days = week_days(date(2026, 10, 14), Weekday::Mon);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2026, 10, 12));
        assert_eq!(days[6], add_days(days[0], 6));
        assert_eq!(weekday_name(days[0].weekday()), "Monday");
        assert_eq!(long_format_date(days[2]), "Wednesday 14 October 2026");
    }
}
