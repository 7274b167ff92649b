pub mod ids;
pub mod numeric;
