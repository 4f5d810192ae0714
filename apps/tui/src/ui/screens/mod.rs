pub mod booking_details;
pub mod booking_form;
pub mod bookings;
pub mod dashboard;
pub mod help;
pub mod login;
