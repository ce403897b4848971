pub mod day;
pub mod evening;
pub mod morning;
