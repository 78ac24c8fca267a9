pub mod mail;
pub mod quotes;
pub mod sheets;
pub mod slack;
pub mod template;
