pub mod store;

pub use store::MailStore;
