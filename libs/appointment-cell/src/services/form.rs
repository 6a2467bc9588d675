// libs/appointment-cell/src/services/form.rs
use shared_models::error::ValidationErrors;
use shared_utils::validation::{normalize_optional, FieldRules, FormSchema};

use crate::models::{AppointmentForm, NewAppointment};

impl FormSchema for AppointmentForm {
    type Output = NewAppointment;
    const FORM_NAME: &'static str = "AppointmentForm";

    fn validate(&self) -> Result<NewAppointment, ValidationErrors> {
        let mut rules = FieldRules::new();

        let doctor_name = rules.min_len(
            "doctor_name",
            &self.doctor_name,
            2,
            "Doctor name must be at least 2 characters.",
        );
        let appointment_date = rules
            .optional_date(
                "appointment_date",
                self.appointment_date.as_deref(),
                "Appointment date must be a valid date (YYYY-MM-DD).",
            )
            .and_then(|date| rules.present("appointment_date", date, "Appointment date is required."));
        let appointment_time = rules.time_of_day(
            "appointment_time",
            &self.appointment_time,
            "Invalid time format (HH:MM e.g., 14:30).",
        );
        let appointment_type = rules.min_len(
            "appointment_type",
            &self.appointment_type,
            3,
            "Appointment type must be at least 3 characters.",
        );

        rules.finish(|| {
            Some(NewAppointment {
                doctor_name: doctor_name?,
                clinic_name: normalize_optional(self.clinic_name.as_deref()),
                appointment_date: appointment_date?,
                appointment_time: appointment_time?,
                appointment_type: appointment_type?,
            })
        })
    }
}
