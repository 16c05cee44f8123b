//! Contact form model: validation rules, the webhook payload, and the
//! `mailto:` fallback. All pure and host-testable; the component in
//! `app::contact` owns the signals and the network call.

use std::sync::OnceLock;

use regex::Regex;

/// Webhook endpoints tried in order; the first 2xx wins.
pub const WEBHOOK_URLS: &[&str] = &["https://n8n.srv1170036.hstgr.cloud/webhook/getintouch"];

/// Address the `mailto:` fallback targets.
pub const CONTACT_EMAIL: &str = "thorataditya859@gmail.com";

/// Marker sent with every submission so the inbox can tell sources apart.
pub const FORM_SOURCE: &str = "portfolio_contact_form";

/// How long the confirmation stays up before the modal resets and closes.
pub const CONFIRMATION_MS: u64 = 3000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Field-level validation messages. `None` means the field passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }

    pub fn count(&self) -> usize {
        [self.name, self.phone, self.email]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Where the submission lifecycle currently is. Validation failures stay in
/// `Idle` with errors set; both delivery paths end in `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Submitted,
}

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Optional country code, 3-3-4..6 grouping, separators optional.
    RE.get_or_init(|| {
        Regex::new(r"^\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$")
            .expect("phone pattern should compile")
    })
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
    })
}

/// Checks the three required fields. Company and message are optional and
/// never produce errors.
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = fields.name.trim();
    if name.is_empty() {
        errors.name = Some("Name is required");
    } else if name.chars().count() < 2 {
        errors.name = Some("Name must be at least 2 characters");
    }

    let phone = fields.phone.trim();
    if phone.is_empty() {
        errors.phone = Some("Phone number is required");
    } else {
        let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        if !phone_pattern().is_match(&compact) {
            errors.phone = Some("Please enter a valid phone number");
        }
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.email = Some("Email is required");
    } else if !email_pattern().is_match(email) {
        errors.email = Some("Please enter a valid email address");
    }

    errors
}

/// Key/value pairs POSTed to the webhook, in wire order.
pub fn webhook_pairs(fields: &ContactFields, timestamp: &str) -> Vec<(&'static str, String)> {
    let company = if fields.company.trim().is_empty() {
        "Not provided".to_string()
    } else {
        fields.company.clone()
    };
    let message = if fields.message.trim().is_empty() {
        "No message".to_string()
    } else {
        fields.message.clone()
    };
    vec![
        ("name", fields.name.clone()),
        ("company", company),
        ("phone", fields.phone.clone()),
        ("email", fields.email.clone()),
        ("message", message),
        ("timestamp", timestamp.to_string()),
        ("source", FORM_SOURCE.to_string()),
    ]
}

/// `application/x-www-form-urlencoded` body for the webhook POST.
pub fn encode_form(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Pre-filled `mailto:` URI used when every webhook attempt fails. There is
/// no way to confirm delivery on this path either; the UI reports success
/// regardless and the miss is only logged.
pub fn mailto_url(fields: &ContactFields, sent_at: &str) -> String {
    let subject = urlencoding::encode("Portfolio Contact Form Submission");
    let company = if fields.company.trim().is_empty() {
        "Not provided"
    } else {
        fields.company.as_str()
    };
    let message = if fields.message.trim().is_empty() {
        "No message provided"
    } else {
        fields.message.as_str()
    };
    let body = format!(
        "Hi Aditya,\n\nSomeone filled out your portfolio contact form:\n\n\
         Name: {}\nCompany: {}\nPhone: {}\nEmail: {}\nMessage: {}\n\n\
         Sent: {}\nSource: Portfolio Website Contact Form",
        fields.name, company, fields.phone, fields.email, message, sent_at
    );
    format!(
        "mailto:{}?subject={}&body={}",
        CONTACT_EMAIL,
        subject,
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Jo".to_string(),
            company: String::new(),
            phone: "+1 415-555-2671".to_string(),
            email: "a@b.com".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn all_bad_fields_yield_three_errors() {
        let errors = validate(&ContactFields {
            name: "A".to_string(),
            phone: "123".to_string(),
            email: "bad".to_string(),
            ..Default::default()
        });
        assert_eq!(errors.count(), 3);
        assert_eq!(errors.name, Some("Name must be at least 2 characters"));
        assert_eq!(errors.phone, Some("Please enter a valid phone number"));
        assert_eq!(errors.email, Some("Please enter a valid email address"));
    }

    #[test]
    fn minimal_valid_submission_passes() {
        let errors = validate(&filled());
        assert!(errors.is_clean());
        assert_eq!(errors.count(), 0);
    }

    #[test]
    fn empty_required_fields_report_required() {
        let errors = validate(&ContactFields::default());
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.phone, Some("Phone number is required"));
        assert_eq!(errors.email, Some("Email is required"));
    }

    #[test]
    fn phone_accepts_common_shapes() {
        for phone in [
            "4155552671",
            "415-555-2671",
            "415.555.2671",
            "(415) 555-2671",
            "+14155552671",
            "+91 9876543210",
        ] {
            let mut fields = filled();
            fields.phone = phone.to_string();
            assert!(validate(&fields).phone.is_none(), "rejected {phone}");
        }
        for phone in ["12", "555-CALL-NOW", "415 555"] {
            let mut fields = filled();
            fields.phone = phone.to_string();
            assert!(validate(&fields).phone.is_some(), "accepted {phone}");
        }
    }

    #[test]
    fn email_requires_local_domain_tld() {
        for email in ["a@b", "a b@c.com", "@c.com", "a@.com"] {
            let mut fields = filled();
            fields.email = email.to_string();
            assert!(validate(&fields).email.is_some(), "accepted {email}");
        }
    }

    #[test]
    fn webhook_pairs_default_optional_fields() {
        let pairs = webhook_pairs(&filled(), "2026-01-01T00:00:00.000Z");
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("company"), "Not provided");
        assert_eq!(get("message"), "No message");
        assert_eq!(get("source"), FORM_SOURCE);
        assert_eq!(get("timestamp"), "2026-01-01T00:00:00.000Z");
    }

    #[test]
    fn form_encoding_escapes_reserved_characters() {
        let pairs = vec![("name", "Jo & Co".to_string()), ("email", "a@b.com".to_string())];
        let body = encode_form(&pairs);
        assert_eq!(body, "name=Jo%20%26%20Co&email=a%40b.com");
    }

    #[test]
    fn mailto_carries_submitted_identity() {
        let url = mailto_url(&filled(), "1/1/2026, 12:00:00 AM");
        assert!(url.starts_with(&format!("mailto:{CONTACT_EMAIL}?subject=")));
        assert!(url.contains("Jo"));
        assert!(url.contains(&urlencoding::encode("a@b.com").into_owned()));
        assert!(url.contains(&urlencoding::encode("No message provided").into_owned()));
    }
}
