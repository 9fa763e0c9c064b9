mod create;
mod delete;
mod service;

pub use create::CreateNewsletterCommand;
pub use service::NewsletterCommandService;
