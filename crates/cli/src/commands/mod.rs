pub mod convert;
pub mod modes;
