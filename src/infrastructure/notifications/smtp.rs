use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::notifier::{EmailMessage, EmailSender},
};
use crate::config::SmtpSettings;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use secrecy::ExposeSecret;

pub struct SmtpEmailSender {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailSender {
    pub fn new(settings: &SmtpSettings) -> ApplicationResult<Self> {
        let from: Mailbox = settings
            .from_address
            .parse()
            .map_err(|e| ApplicationError::infrastructure(format!("invalid from address: {e}")))?;

        let builder = if settings.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                .map_err(|e| {
                    ApplicationError::infrastructure(format!("failed to create SMTP transport: {e}"))
                })?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
        };
        let builder = builder.port(settings.port);
        let builder = match (&settings.username, &settings.password) {
            (Some(user), Some(password)) => builder.credentials(Credentials::new(
                user.clone(),
                password.expose_secret().to_string(),
            )),
            _ => builder,
        };

        Ok(Self {
            mailer: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()> {
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| ApplicationError::delivery("email", format!("invalid recipient address: {e}")))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| ApplicationError::delivery("email", format!("failed to build message: {e}")))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| ApplicationError::delivery("email", e.to_string()))?;
        Ok(())
    }
}
