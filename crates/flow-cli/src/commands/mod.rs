pub mod calendar;
pub mod dispatch;
pub mod forecast;
pub mod models;
pub mod run;
