pub mod config;
pub mod encode;
pub mod inspect;
pub mod quantum;
