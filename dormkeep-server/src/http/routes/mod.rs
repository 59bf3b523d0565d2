//! Route handlers organized by resource

pub mod bookings;
pub mod health;
pub mod inventory;
pub mod rooms;
pub mod students;
pub mod utility_bills;
