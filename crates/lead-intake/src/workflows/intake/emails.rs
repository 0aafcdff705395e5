use std::fmt::Write as _;

use super::domain::ConfirmationKind;
use super::notify::{EmailAttachment, EmailMessage};

/// Sender identity and branding shared by every outbound email.
#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub from_address: String,
    pub site_url: String,
    pub chapter_name: String,
}

/// Email delivering a downloaded resource PDF to the lead.
pub fn resource_email(
    settings: &EmailSettings,
    to: &str,
    first_name: &str,
    resource_title: &str,
    attachment: EmailAttachment,
) -> EmailMessage {
    let chapter = escape_html(&settings.chapter_name);
    let mut html = String::new();

    html.push_str("<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">");
    writeln!(
        html,
        "<h2 style=\"color: #003B4D;\">Thank You for Your Interest in {}!</h2>",
        chapter
    )
    .expect("write heading");
    writeln!(html, "<p>Hi {},</p>", escape_html(first_name)).expect("write greeting");
    writeln!(
        html,
        "<p>Thank you for downloading \"<strong>{}</strong>\" from {}.</p>",
        escape_html(resource_title),
        chapter
    )
    .expect("write resource line");
    html.push_str("<p>Your requested resource is attached to this email.</p>");
    writeln!(
        html,
        "<p>We bring together business leaders in peer advisory groups to build great businesses for a greater purpose. If you'd like to learn more about how {} can serve you and your business, we'd love to connect.</p>",
        chapter
    )
    .expect("write pitch");
    writeln!(html, "<p>Best regards,<br/>The {} Team</p>", chapter).expect("write signoff");
    html.push_str(
        "<hr style=\"border: none; border-top: 1px solid #E5E7EB; margin: 24px 0;\" />",
    );
    writeln!(
        html,
        "<p style=\"font-size: 12px; color: #6B7280;\">{}<br/><a href=\"{}\" style=\"color: #D4AF69;\">Visit our website</a></p>",
        chapter,
        escape_html(&settings.site_url)
    )
    .expect("write footer");
    html.push_str("</div>");

    EmailMessage {
        from: settings.from_address.clone(),
        to: to.to_string(),
        subject: format!("Your {} Resource: {}", settings.chapter_name, resource_title),
        html,
        attachments: vec![attachment],
    }
}

/// Templated confirmation sent for contact-form and executive-briefing leads.
pub fn confirmation_email(
    settings: &EmailSettings,
    to: &str,
    first_name: &str,
    kind: ConfirmationKind,
) -> EmailMessage {
    let chapter = escape_html(&settings.chapter_name);
    let logo_url = format!("{}/og-image.png", settings.site_url);

    let subject = match kind {
        ConfirmationKind::ExecutiveBriefing => format!(
            "Thank You for Your Interest in the {} Executive Briefing",
            settings.chapter_name
        ),
        ConfirmationKind::ContactForm => {
            format!("Thank You for Contacting {}", settings.chapter_name)
        }
    };

    let reaching_out = match kind {
        ConfirmationKind::ExecutiveBriefing => format!(
            "Thank you for reaching out to {} and expressing interest in our Executive Briefing. We're excited to connect with you!",
            chapter
        ),
        ConfirmationKind::ContactForm => format!(
            "Thank you for reaching out to {}. We're excited to connect with you!",
            chapter
        ),
    };

    let mut html = String::new();
    html.push_str(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;\">",
    );
    writeln!(
        html,
        "<div style=\"text-align: center; margin-bottom: 30px;\"><img src=\"{}\" alt=\"{}\" style=\"max-width: 300px; height: auto;\" /></div>",
        escape_html(&logo_url),
        chapter
    )
    .expect("write logo");
    writeln!(
        html,
        "<h2 style=\"color: #003B4D; margin-bottom: 20px;\">Thank You for Your Interest in {}!</h2>",
        chapter
    )
    .expect("write heading");
    writeln!(
        html,
        "<p style=\"font-size: 16px; line-height: 1.6; color: #333;\">Hi {},</p>",
        escape_html(first_name)
    )
    .expect("write greeting");
    writeln!(
        html,
        "<p style=\"font-size: 16px; line-height: 1.6; color: #333;\">{}</p>",
        reaching_out
    )
    .expect("write intro");
    html.push_str(
        "<p style=\"font-size: 16px; line-height: 1.6; color: #333;\">A member of our team will be in touch with you within one business day to discuss how we can serve you and your business.</p>",
    );
    writeln!(
        html,
        "<div style=\"background-color: #F3F4F6; padding: 20px; border-radius: 8px; margin: 30px 0;\"><p style=\"font-size: 14px; line-height: 1.6; color: #4B5563; margin: 0;\"><strong style=\"color: #003B4D;\">About {}:</strong><br/>We bring together business leaders in peer advisory groups to build great businesses for a greater purpose, helping leaders grow both profitability and impact.</p></div>",
        chapter
    )
    .expect("write about block");
    html.push_str(
        "<p style=\"font-size: 16px; line-height: 1.6; color: #333;\">In the meantime, feel free to explore our website to learn more about what we offer.</p>",
    );
    writeln!(
        html,
        "<p style=\"font-size: 16px; line-height: 1.6; color: #333;\">Best regards,<br/><strong>The {} Team</strong></p>",
        chapter
    )
    .expect("write signoff");
    html.push_str(
        "<hr style=\"border: none; border-top: 1px solid #E5E7EB; margin: 30px 0;\" />",
    );
    writeln!(
        html,
        "<div style=\"text-align: center;\"><p style=\"font-size: 12px; color: #6B7280; margin-bottom: 10px;\">{}</p><p style=\"font-size: 12px; color: #6B7280;\"><a href=\"{}\" style=\"color: #D4AF69; text-decoration: none;\">Visit our website</a></p></div>",
        chapter,
        escape_html(&settings.site_url)
    )
    .expect("write footer");
    html.push_str("</div>");

    EmailMessage {
        from: settings.from_address.clone(),
        to: to.to_string(),
        subject,
        html,
        attachments: Vec::new(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> EmailSettings {
        EmailSettings {
            from_address: "onboarding@resend.dev".to_string(),
            site_url: "https://chapter.example.org".to_string(),
            chapter_name: "C12 Indianapolis".to_string(),
        }
    }

    #[test]
    fn resource_email_carries_title_and_attachment() {
        let message = resource_email(
            &settings(),
            "lead@example.com",
            "Dana",
            "From Survival to Sustainability",
            EmailAttachment {
                filename: "survival-to-sustainability.pdf".to_string(),
                content: "cGRm".to_string(),
            },
        );

        assert_eq!(
            message.subject,
            "Your C12 Indianapolis Resource: From Survival to Sustainability"
        );
        assert_eq!(message.attachments.len(), 1);
        assert_eq!(
            message.attachments[0].filename,
            "survival-to-sustainability.pdf"
        );
        assert!(message.html.contains("Hi Dana,"));
        assert!(message.html.contains("From Survival to Sustainability"));
    }

    #[test]
    fn confirmation_subjects_vary_by_kind() {
        let contact = confirmation_email(
            &settings(),
            "lead@example.com",
            "Dana",
            ConfirmationKind::ContactForm,
        );
        let briefing = confirmation_email(
            &settings(),
            "lead@example.com",
            "Dana",
            ConfirmationKind::ExecutiveBriefing,
        );

        assert_eq!(contact.subject, "Thank You for Contacting C12 Indianapolis");
        assert_eq!(
            briefing.subject,
            "Thank You for Your Interest in the C12 Indianapolis Executive Briefing"
        );
        assert!(briefing.html.contains("Executive Briefing"));
        assert!(contact.attachments.is_empty());
    }

    #[test]
    fn user_supplied_text_is_escaped() {
        let message = confirmation_email(
            &settings(),
            "lead@example.com",
            "<script>alert(1)</script>",
            ConfirmationKind::ContactForm,
        );
        assert!(!message.html.contains("<script>"));
        assert!(message.html.contains("&lt;script&gt;"));
    }
}
