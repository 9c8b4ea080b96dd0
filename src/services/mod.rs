pub mod numeric;
pub mod providers;
