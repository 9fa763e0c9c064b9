mod smtp;
mod social;
mod worker;

pub use smtp::SmtpEmailSender;
pub use social::HttpSocialPoster;
pub use worker::spawn_outbox_worker;
