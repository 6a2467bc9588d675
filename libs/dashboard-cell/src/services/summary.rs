use chrono::NaiveDate;
use tracing::debug;

use appointment_cell::services::scheduling::upcoming_from;
use appointment_cell::{Appointment, AppointmentView};
use medication_cell::{Medication, MedicationView};

use crate::models::DashboardSummary;

/// Builds the summary cards and previews.
///
/// The appointment count covers every `Upcoming` entry whatever its date, while
/// the preview only shows those dated `today` or later. Every medication counts
/// as due today. Both previews are cut to `preview_limit`.
pub fn build_summary(
    appointments: &[Appointment],
    medications: &[Medication],
    today: NaiveDate,
    preview_limit: usize,
) -> DashboardSummary {
    let upcoming_appointments_count = appointments.iter().filter(|a| a.is_upcoming()).count();

    let upcoming_appointments = upcoming_from(appointments, today, preview_limit)
        .iter()
        .map(AppointmentView::from)
        .collect();

    let medications_preview = medications
        .iter()
        .take(preview_limit)
        .map(MedicationView::from)
        .collect();

    debug!(
        "Dashboard for {}: {} upcoming appointments, {} medications",
        today,
        upcoming_appointments_count,
        medications.len()
    );

    DashboardSummary {
        today,
        upcoming_appointments_count,
        medications_today_count: medications.len(),
        upcoming_appointments,
        medications: medications_preview,
    }
}
