/// Outbound email payload. The sender address is owned by the mail
/// transport, not the message.
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
    pub cc: Option<String>,
}

impl MailMessage {
    /// Most messages here carry the same body in both parts.
    pub fn plain(to: impl Into<String>, subject: impl Into<String>, body: String) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            text_body: body.clone(),
            html_body: body,
            cc: None,
        }
    }
}
