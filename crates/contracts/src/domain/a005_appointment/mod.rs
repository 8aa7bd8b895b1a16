pub mod aggregate;

pub use aggregate::{is_valid_hour, Appointment, AppointmentDto, AppointmentId, AppointmentStatus};
