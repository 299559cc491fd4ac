pub mod month;
pub mod quarter;
