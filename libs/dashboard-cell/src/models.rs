// =====================================================================================
// DASHBOARD MODELS
// =====================================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use appointment_cell::AppointmentView;
use medication_cell::MedicationView;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub upcoming_appointments_count: usize,
    pub medications_today_count: usize,
    pub upcoming_appointments: Vec<AppointmentView>,
    pub medications: Vec<MedicationView>,
}

/// `today` overrides the server's local date.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub today: Option<NaiveDate>,
}
