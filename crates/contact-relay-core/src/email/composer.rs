/// Builds the notification email for a contact form submission
use crate::config::RelayConfig;
use crate::models::{OutboundEmail, Submission};
use crate::utils::sanitization::{escape_html, text_to_html};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

const BRAND_COLOR: &str = "#BF9D6D";
const BRAND_GRADIENT: &str = "linear-gradient(135deg, #BF9D6D 0%, #D4B88A 100%)";

#[derive(Debug, Clone)]
pub struct ContactEmailComposer {
    sender: String,
    recipient: String,
    site_name: String,
}

impl ContactEmailComposer {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            sender: config.sender.clone(),
            recipient: config.recipient.clone(),
            site_name: config.site_name.clone(),
        }
    }

    pub fn compose(&self, submission: &Submission<'_>) -> OutboundEmail {
        OutboundEmail {
            from: self.sender.clone(),
            to: vec![self.recipient.clone()],
            subject: Self::subject(submission.name),
            html: self.render_html(submission),
            reply_to: submission.email.to_string(),
        }
    }

    pub fn subject(name: &str) -> String {
        format!("Nuevo mensaje de {} desde tu portfolio", name)
    }

    /// Percent-encoded subject for the reply `mailto:` link
    fn reply_subject(site_name: &str) -> String {
        let subject = format!("Re: Consulta desde {}", site_name);
        utf8_percent_encode(&subject, NON_ALPHANUMERIC).to_string()
    }

    fn render_html(&self, submission: &Submission<'_>) -> String {
        let site = escape_html(&self.site_name);
        let name = escape_html(submission.name);
        let email = escape_html(submission.email);
        let message = text_to_html(submission.message);
        let reply_subject = Self::reply_subject(&self.site_name);

        format!(
            r#"<div style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; max-width: 600px; margin: 0 auto; background-color: #ffffff;">
  <div style="background: {BRAND_GRADIENT}; padding: 30px; text-align: center; border-radius: 12px 12px 0 0;">
    <h1 style="color: #ffffff; margin: 0; font-size: 16px; font-weight: 600;">Nuevo Mensaje - {site}</h1>
  </div>
  <div style="padding: 30px; background-color: #ffffff; border-radius: 0 0 12px 12px; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);">
    <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin-bottom: 25px; border-left: 4px solid {BRAND_COLOR};">
      <h2 style="color: {BRAND_COLOR}; margin: 0 0 15px 0; font-size: 18px;">Información de Contacto</h2>
      <p style="margin: 8px 0; color: #333333;"><strong>👤 Nombre:</strong> {name}</p>
      <p style="margin: 8px 0; color: #333333;"><strong>📧 Email:</strong> <a href="mailto:{email}" style="color: {BRAND_COLOR}; text-decoration: none;">{email}</a></p>
    </div>
    <div style="margin-bottom: 25px;">
      <h3 style="color: #333333; margin: 0 0 15px 0; font-size: 16px;">💬 Mensaje:</h3>
      <div style="background-color: #ffffff; padding: 20px; border: 2px solid #e9ecef; border-radius: 8px; line-height: 1.6; color: #333333;">{message}</div>
    </div>
    <div style="text-align: center; margin: 30px 0;">
      <a href="mailto:{email}?subject={reply_subject}" style="background: {BRAND_GRADIENT}; color: #ffffff; padding: 12px 24px; text-decoration: none; border-radius: 6px; font-weight: 600; display: inline-block;">Responder Email</a>
    </div>
  </div>
  <div style="text-align: center;">
    <p style="color: #888888; font-size: 14px; margin: 0;">Este mensaje fue enviado desde tu portfolio web<br><strong>{site}</strong></p>
  </div>
</div>"#
        )
    }
}
