pub mod content;
pub mod error;
pub mod mail;
pub mod quote;
pub mod report;
pub mod response;
pub mod roster;
pub mod sheets;
pub mod slack;
