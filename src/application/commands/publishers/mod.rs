mod create;
mod members;
mod service;

pub use create::CreatePublisherCommand;
pub use members::AddPublisherMemberCommand;
pub use service::PublisherCommandService;
