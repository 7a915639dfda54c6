use crate::errors::AppError;
use crate::models::{AppData, DayCell, MonthView};
use chrono::{Datelike, Local, NaiveDate};

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const YEAR_SPAN: i32 = 5;

#[derive(Debug)]
pub struct Rendered {
    pub view: MonthView,
    pub materialized: usize,
}

/// Day 0 of the following month, i.e. the last day of `month0`.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32, AppError> {
    check_month_index(month0)?;
    check_year(year)?;
    let (next_year, next_month) = if month0 == 11 {
        (year.checked_add(1), 1)
    } else {
        (Some(year), month0 + 2)
    };

    next_year
        .and_then(|next_year| NaiveDate::from_ymd_opt(next_year, next_month, 1))
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| AppError::bad_request(format!("year {year} is out of range")))
}

// 0 = Sunday
pub fn first_weekday(year: i32, month0: u32) -> Result<u32, AppError> {
    check_month_index(month0)?;
    check_year(year)?;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .ok_or_else(|| AppError::bad_request(format!("year {year} is out of range")))
}

/// `"{year}-{month0}-{day}"`, unpadded, zero-based month. Stored keys use this
/// exact form, so it must not change.
pub fn date_key(year: i32, month0: u32, day: u32) -> String {
    format!("{year}-{month0}-{day}")
}

pub fn parse_date_key(key: &str) -> Option<(i32, u32, u32)> {
    let mut parts = key.splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month0 = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;

    if date_key(year, month0, day) != key {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day)?;
    Some((year, month0, day))
}

pub fn render_month(
    data: &mut AppData,
    task: &str,
    year: i32,
    month0: u32,
) -> Result<Rendered, AppError> {
    let day_count = days_in_month(year, month0)?;
    let leading_blanks = first_weekday(year, month0)?;
    let record = data.attendance.entry(task.to_string()).or_default();

    let mut materialized = 0;
    let mut days = Vec::with_capacity(day_count as usize);
    let mut present = 0u32;
    let mut absent = 0u32;

    for day in 1..=day_count {
        let key = date_key(year, month0, day);
        let flag = *record.entry(key.clone()).or_insert_with(|| {
            materialized += 1;
            true
        });

        if flag {
            present += 1;
        } else {
            absent += 1;
        }
        days.push(DayCell {
            day,
            date_key: key,
            present: flag,
        });
    }

    let view = MonthView {
        task: task.to_string(),
        year,
        month: month0,
        month_name: MONTH_NAMES[month0 as usize].to_string(),
        weekdays: WEEKDAYS.iter().map(|w| w.to_string()).collect(),
        leading_blanks,
        days,
        present,
        absent,
        summary: summary_line(present, absent),
    };

    Ok(Rendered { view, materialized })
}

// An unrecorded day counts as present, so its first toggle marks it absent.
pub fn toggle(data: &mut AppData, task: &str, key: &str) -> Result<MonthView, AppError> {
    let (year, month0, _) = parse_date_key(key)
        .ok_or_else(|| AppError::bad_request(format!("invalid date key '{key}'")))?;

    let record = data.attendance.entry(task.to_string()).or_default();
    let flag = record.entry(key.to_string()).or_insert(true);
    *flag = !*flag;

    Ok(render_month(data, task, year, month0)?.view)
}

pub fn summary_line(present: u32, absent: u32) -> String {
    format!("Present: {present} | Absent: {absent}")
}

pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - YEAR_SPAN..=current_year + YEAR_SPAN).collect()
}

pub fn current_year_month() -> (i32, u32) {
    let today = Local::now().date_naive();
    (today.year(), today.month0())
}

// Rejects anything `render_month` would refuse.
pub fn check_month(year: i32, month0: u32) -> Result<(), AppError> {
    days_in_month(year, month0)?;
    first_weekday(year, month0)?;
    Ok(())
}

// Keys for negative years would not parse back.
fn check_year(year: i32) -> Result<(), AppError> {
    if year < 0 {
        return Err(AppError::bad_request(format!(
            "year must not be negative, got {year}"
        )));
    }
    Ok(())
}

fn check_month_index(month0: u32) -> Result<(), AppError> {
    if month0 > 11 {
        return Err(AppError::bad_request(format!(
            "month must be 0-11, got {month0}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_with(task: &str) -> AppData {
        let mut data = AppData::default();
        data.tasks.push(task.to_string());
        data.attendance.insert(task.to_string(), Default::default());
        data
    }

    #[test]
    fn days_in_month_handles_leap_years_and_december() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2023, 1).unwrap(), 28);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
        assert_eq!(days_in_month(2024, 3).unwrap(), 30);
        assert_eq!(days_in_month(2024, 11).unwrap(), 31);
        assert!(days_in_month(2024, 12).is_err());
        assert!(days_in_month(i32::MAX, 11).is_err());
    }

    #[test]
    fn february_2024_starts_on_thursday() {
        let mut data = data_with("Gym");
        let rendered = render_month(&mut data, "Gym", 2024, 1).unwrap();
        assert_eq!(rendered.view.days.len(), 29);
        assert_eq!(rendered.view.leading_blanks, 4);
        assert_eq!(rendered.view.weekdays[0], "Sun");
    }

    #[test]
    fn date_keys_are_unpadded_and_zero_based() {
        assert_eq!(date_key(2024, 0, 5), "2024-0-5");
        assert_eq!(parse_date_key("2024-2-15"), Some((2024, 2, 15)));
        assert_eq!(parse_date_key("2024-02-15"), None);
        assert_eq!(parse_date_key("2024-1-30"), None);
        assert_eq!(parse_date_key("2024-12-1"), None);
        assert_eq!(parse_date_key("2024-1"), None);
        assert_eq!(parse_date_key("garbage"), None);
    }

    #[test]
    fn render_defaults_every_day_to_present() {
        let mut data = data_with("Gym");
        let rendered = render_month(&mut data, "Gym", 2024, 2).unwrap();
        assert_eq!(rendered.materialized, 31);
        assert_eq!(rendered.view.present, 31);
        assert_eq!(rendered.view.absent, 0);
        assert_eq!(rendered.view.summary, "Present: 31 | Absent: 0");
        assert_eq!(data.attendance["Gym"].len(), 31);
        assert_eq!(data.attendance["Gym"].get("2024-2-31"), Some(&true));

        let again = render_month(&mut data, "Gym", 2024, 2).unwrap();
        assert_eq!(again.materialized, 0);
    }

    #[test]
    fn counts_cover_exactly_the_rendered_month() {
        let mut data = data_with("Gym");
        for (year, month0) in [(2023, 0), (2023, 1), (2024, 1), (2024, 8), (2025, 11)] {
            let view = render_month(&mut data, "Gym", year, month0).unwrap().view;
            let expected = days_in_month(year, month0).unwrap();
            assert_eq!(view.days.len() as u32, expected);
            assert_eq!(view.present + view.absent, expected);
        }
    }

    #[test]
    fn toggle_scenario_updates_summary() {
        let mut data = data_with("Gym");
        render_month(&mut data, "Gym", 2024, 2).unwrap();

        let view = toggle(&mut data, "Gym", "2024-2-15").unwrap();
        assert_eq!(data.attendance["Gym"]["2024-2-15"], false);
        assert_eq!(view.summary, "Present: 30 | Absent: 1");
        assert!(!view.days[14].present);
    }

    #[test]
    fn toggling_twice_restores_present() {
        let mut data = data_with("Gym");
        toggle(&mut data, "Gym", "2024-0-5").unwrap();
        let view = toggle(&mut data, "Gym", "2024-0-5").unwrap();
        assert_eq!(data.attendance["Gym"]["2024-0-5"], true);
        assert_eq!(view.absent, 0);
    }

    #[test]
    fn toggle_rejects_malformed_keys() {
        let mut data = data_with("Gym");
        let err = toggle(&mut data, "Gym", "2024-13-1").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert!(data.attendance["Gym"].is_empty());
    }

    #[test]
    fn other_months_do_not_affect_counts() {
        let mut data = data_with("Gym");
        data.attendance
            .get_mut("Gym")
            .unwrap()
            .insert("2024-3-1".to_string(), false);
        let view = render_month(&mut data, "Gym", 2024, 2).unwrap().view;
        assert_eq!(view.absent, 0);
    }

    #[test]
    fn negative_years_are_rejected_by_render_and_toggle() {
        let mut data = data_with("Gym");
        let err = render_month(&mut data, "Gym", -1, 0).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert!(check_month(-1, 0).is_err());
        assert!(toggle(&mut data, "Gym", "-1-0-1").is_err());
        assert!(data.attendance["Gym"].is_empty());
    }

    #[test]
    fn every_rendered_key_can_be_toggled() {
        let mut data = data_with("Gym");
        for (year, month0) in [(0, 0), (0, 1), (1, 11), (9999, 11)] {
            let view = render_month(&mut data, "Gym", year, month0).unwrap().view;
            for cell in &view.days {
                assert_eq!(parse_date_key(&cell.date_key), Some((year, month0, cell.day)));
            }
            let last = view.days.last().unwrap().date_key.clone();
            let toggled = toggle(&mut data, "Gym", &last).unwrap();
            assert_eq!(toggled.absent, 1);
        }
    }

    #[test]
    fn year_options_span_eleven_years() {
        let years = year_options(2026);
        assert_eq!(years.len(), 11);
        assert_eq!(years.first(), Some(&2021));
        assert_eq!(years.last(), Some(&2031));
    }
}
