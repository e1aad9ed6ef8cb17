//! Vendor timestamp parsing for `MM-DD-YY HH:mm(AM|PM)`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::FetchError;

/// Parse a DOS-listing timestamp such as `03-15-24 02:30PM`.
///
/// Two-digit years 98 and 99 belong to the 1900s, everything else to the
/// 2000s. PM adds 12 hours with no special case for 12AM/12PM, so a `12:xxPM`
/// hour lands past 23 and rolls the date forward.
pub fn parse_modified(raw: &str) -> Result<NaiveDateTime, FetchError> {
    let err = || FetchError::MalformedTimestamp(raw.to_string());
    if !raw.is_ascii() {
        return Err(err());
    }

    let (date, time) = raw.trim().split_once(' ').ok_or_else(err)?;
    let time = time.trim();

    let mut fields = date.splitn(3, '-');
    let month: u32 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let day: u32 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let yy: i32 = fields.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let year = if yy >= 98 { 1900 + yy } else { 2000 + yy };

    if time.len() < 3 {
        return Err(err());
    }
    let (clock, meridiem) = time.split_at(time.len() - 2);
    let (hh, mm) = clock.split_once(':').ok_or_else(err)?;
    let hour: i64 = hh.parse().map_err(|_| err())?;
    let minute: i64 = mm.parse().map_err(|_| err())?;
    let hour = match meridiem {
        "AM" => hour,
        "PM" => hour + 12,
        _ => return Err(err()),
    };

    let day_start = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(err)?
        .and_time(NaiveTime::MIN);
    // Hours are added as a duration; an hour past 23 carries into the date.
    Ok(day_start + Duration::hours(hour) + Duration::minutes(minute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn pm_adds_twelve_hours() {
        assert_eq!(
            parse_modified("03-15-24 02:30PM").unwrap(),
            at(2024, 3, 15, 14, 30)
        );
    }

    #[test]
    fn am_keeps_hour() {
        assert_eq!(
            parse_modified("03-15-99 11:05AM").unwrap(),
            at(1999, 3, 15, 11, 5)
        );
    }

    #[test]
    fn years_98_and_99_map_to_1900s() {
        assert_eq!(
            parse_modified("01-01-98 01:00AM").unwrap(),
            at(1998, 1, 1, 1, 0)
        );
        assert_eq!(
            parse_modified("06-30-00 01:00AM").unwrap(),
            at(2000, 6, 30, 1, 0)
        );
    }

    #[test]
    fn twelve_pm_rolls_into_next_day() {
        // 12 + 12 = hour 24, which carries into the next date.
        assert_eq!(
            parse_modified("01-05-22 12:00PM").unwrap(),
            at(2022, 1, 6, 0, 0)
        );
    }

    #[test]
    fn twelve_am_stays_at_noon_hour() {
        assert_eq!(
            parse_modified("01-05-22 12:30AM").unwrap(),
            at(2022, 1, 5, 12, 30)
        );
    }

    #[test]
    fn rejects_garbage() {
        for s in ["", "03-15-24", "03-15-24 0230PM", "03-15-24 02:30XX", "xx-15-24 02:30PM"] {
            assert!(
                matches!(parse_modified(s), Err(FetchError::MalformedTimestamp(_))),
                "timestamp {s:?} should be rejected"
            );
        }
    }
}
