// libs/appointment-cell/src/services/scheduling.rs
//
// Pure ordering/filtering rules over appointment lists. None of these mutate
// the store; callers pass in whatever slice they hold.

use chrono::NaiveDate;

use shared_models::schedule::{TimeOfDay, TimeParseError};

use crate::models::Appointment;

/// Ascending by `(appointment_date, appointment_time)`.
///
/// `sort_by_key` is stable, so equal date+time keep their input order and
/// sorting a sorted list is a no-op.
pub fn sort_by_date_time(appointments: &[Appointment]) -> Vec<Appointment> {
    let mut sorted = appointments.to_vec();
    sorted.sort_by_key(|a| (a.appointment_date, a.appointment_time));
    sorted
}

/// Upcoming appointments on `day`, earliest first.
pub fn filter_by_day(appointments: &[Appointment], day: NaiveDate) -> Vec<Appointment> {
    let mut on_day: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.appointment_date == day && a.is_upcoming())
        .cloned()
        .collect();
    on_day.sort_by_key(|a| a.appointment_time);
    on_day
}

/// Upcoming appointments dated `today` or later, soonest first, at most `limit`.
pub fn upcoming_from(appointments: &[Appointment], today: NaiveDate, limit: usize) -> Vec<Appointment> {
    let upcoming: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.is_upcoming() && a.appointment_date >= today)
        .cloned()
        .collect();

    sort_by_date_time(&upcoming).into_iter().take(limit).collect()
}

/// `"HH:MM"` (24h) to `"H:MM AM/PM"`.
pub fn format_display_time(raw: &str) -> Result<String, TimeParseError> {
    Ok(raw.parse::<TimeOfDay>()?.to_display_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use uuid::Uuid;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, day).unwrap()
    }

    fn appt(name: &str, day: u32, time: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            doctor_name: name.to_string(),
            clinic_name: None,
            appointment_date: date(day),
            appointment_time: time.parse().unwrap(),
            appointment_type: "Check-up".to_string(),
            status,
        }
    }

    fn names(list: &[Appointment]) -> Vec<&str> {
        list.iter().map(|a| a.doctor_name.as_str()).collect()
    }

    #[test]
    fn test_sort_orders_by_date_then_time() {
        let list = vec![
            appt("late", 10, "09:00", AppointmentStatus::Upcoming),
            appt("afternoon", 5, "14:00", AppointmentStatus::Upcoming),
            appt("morning", 5, "9:30", AppointmentStatus::Completed),
        ];

        let sorted = sort_by_date_time(&list);

        assert_eq!(names(&sorted), vec!["morning", "afternoon", "late"]);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let list = vec![
            appt("b", 3, "10:00", AppointmentStatus::Upcoming),
            appt("a", 3, "10:00", AppointmentStatus::Upcoming),
            appt("c", 1, "10:00", AppointmentStatus::Upcoming),
        ];

        let once = sort_by_date_time(&list);
        let twice = sort_by_date_time(&once);

        assert_eq!(names(&once), vec!["c", "b", "a"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_by_day_keeps_only_upcoming_on_that_day() {
        let list = vec![
            appt("evening", 5, "18:00", AppointmentStatus::Upcoming),
            appt("cancelled", 5, "08:00", AppointmentStatus::Cancelled),
            appt("done", 5, "07:00", AppointmentStatus::Completed),
            appt("other day", 6, "08:00", AppointmentStatus::Upcoming),
            appt("morning", 5, "08:15", AppointmentStatus::Upcoming),
        ];

        let on_day = filter_by_day(&list, date(5));

        assert_eq!(names(&on_day), vec!["morning", "evening"]);
        assert!(on_day
            .iter()
            .all(|a| a.is_upcoming() && a.appointment_date == date(5)));
    }

    #[test]
    fn test_filter_by_day_empty_when_nothing_matches() {
        let list = vec![appt("x", 5, "08:00", AppointmentStatus::Upcoming)];
        assert!(filter_by_day(&list, date(7)).is_empty());
    }

    #[test]
    fn test_upcoming_from_skips_past_and_truncates() {
        let list = vec![
            appt("past", 1, "08:00", AppointmentStatus::Upcoming),
            appt("third", 20, "08:00", AppointmentStatus::Upcoming),
            appt("first", 3, "08:00", AppointmentStatus::Upcoming),
            appt("cancelled", 4, "08:00", AppointmentStatus::Cancelled),
            appt("second", 10, "08:00", AppointmentStatus::Upcoming),
        ];

        let preview = upcoming_from(&list, date(3), 2);

        assert_eq!(names(&preview), vec!["first", "second"]);
    }

    #[test]
    fn test_format_display_time() {
        assert_eq!(format_display_time("00:05").unwrap(), "12:05 AM");
        assert_eq!(format_display_time("13:30").unwrap(), "1:30 PM");
        assert_eq!(format_display_time("12:00").unwrap(), "12:00 PM");
        assert_eq!(format_display_time("7:45").unwrap(), "7:45 AM");
        assert!(format_display_time("9:60").is_err());
    }
}
