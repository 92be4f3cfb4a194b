#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};
    use shiftly::commands::hours::{shift_times, HoursArgs};
    use shiftly::commands::total::parse_timesheets;
    use shiftly::libs::calendar::week_days;
    use shiftly::libs::messages::{success, Message};
    use shiftly::libs::view::View;

    fn args(start: &str, end: &str, break_duration: &str) -> HoursArgs {
        HoursArgs {
            start: start.to_string(),
            end: end.to_string(),
            break_duration: break_duration.to_string(),
        }
    }

    #[test]
    fn test_hours_arguments() {
        let times = shift_times(&args("09:00", "17:00", "00:30")).unwrap();
        assert_eq!(times.hours(), Some(7.5));

        let partial = shift_times(&args("09:00", "", "00:30")).unwrap();
        assert_eq!(partial.hours(), None);
    }

    #[test]
    fn test_hours_argument_errors_name_the_field() {
        let error = shift_times(&args("09:00", "25:00", "")).unwrap_err();
        assert!(error.to_string().starts_with("Invalid end:"));
        assert!(shift_times(&args("9.00", "17:00", "00:00")).is_err());
    }

    #[test]
    fn test_parse_single_and_many_timesheets() {
        let one = r#"{"id":"a","userID":"u","shifts":[]}"#;
        assert_eq!(parse_timesheets(one).unwrap().len(), 1);

        let many = r#"[
            {"id":"a","userID":"u","shifts":null},
            {"id":"b","userID":"u","shifts":[{"start":"2026-10-12T08:00:00","end":"2026-10-12T12:00:00","breakDuration":0}]}
        ]"#;
        let timesheets = parse_timesheets(many).unwrap();
        assert_eq!(timesheets.len(), 2);
        assert_eq!(timesheets[1].formatted_total_hours(), "4.00");

        let error = parse_timesheets("{\"id\": 1}").unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse timesheets"));
    }

    #[test]
    fn test_tables() {
        let days = week_days(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(), Weekday::Sun);
        let table = View::week_table(&days);
        assert_eq!(table.len(), 8);
        assert!(table.to_string().contains("11-10-2026"));

        let timesheets = parse_timesheets(
            r#"{"id":"a","userID":"u","shifts":[{"start":"2026-10-12T09:00:00","end":"2026-10-12T17:00:00","breakDuration":30}]}"#,
        )
        .unwrap();
        let shifts_table = View::shifts_table(&timesheets[0].sorted_shifts()).to_string();
        assert!(shifts_table.contains("09:00"));
        assert!(shifts_table.contains("00:30"));
        assert!(shifts_table.contains("7.50"));
    }

    #[test]
    fn test_message_text() {
        assert_eq!(success(Message::ConfigSaved), "✅ Configuration saved successfully");
        assert_eq!(Message::TimesheetTotal("15.75".to_string()).to_string(), "Total hours: 15.75");
    }
}
