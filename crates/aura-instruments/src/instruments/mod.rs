pub mod wellness_checkin;
