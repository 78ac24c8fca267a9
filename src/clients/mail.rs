use anyhow::{Error, Result, anyhow};
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use tracing::{debug, info};

use crate::{
    config::Config,
    dispatch::Mailer,
    models::{error::SendFailure, mail::MailMessage},
};

/// SMTP mail transport over implicit TLS (port 465). The configured SMTP
/// user doubles as the sender address.
#[derive(Clone)]
pub struct MailClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl MailClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let credentials = Credentials::new(config.smtp_user.clone(), config.smtp_password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_server)
            .map_err(|e| anyhow!("Failed to create SMTP transport: {e}"))?
            .credentials(credentials)
            .build();

        let from: Mailbox = config
            .smtp_user
            .parse()
            .map_err(|_| anyhow!("SMTP user is not a valid sender address"))?;

        info!(server = %config.smtp_server, "Mail client initialized");

        Ok(Self { transport, from })
    }
}

impl Mailer for MailClient {
    async fn send(&self, message: &MailMessage) -> Result<(), SendFailure> {
        debug!(to = %message.to, subject = %message.subject, "Sending email");

        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| SendFailure::mail(&message.to, format!("invalid recipient address: {e}")))?;

        let mut builder = Message::builder().from(self.from.clone()).to(to);

        if let Some(cc) = &message.cc {
            let cc: Mailbox = cc
                .parse()
                .map_err(|e| SendFailure::mail(&message.to, format!("invalid cc address: {e}")))?;
            builder = builder.cc(cc);
        }

        let email = builder
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.text_body.clone(),
                message.html_body.clone(),
            ))
            .map_err(|e| SendFailure::mail(&message.to, e.to_string()))?;

        let response = self
            .transport
            .send(email)
            .await
            .map_err(|e| SendFailure::mail(&message.to, e.to_string()))?;

        info!(to = %message.to, code = %response.code(), "Email sent successfully");

        Ok(())
    }
}
