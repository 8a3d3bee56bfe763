pub mod bike_lock;
pub mod number_to_date;
