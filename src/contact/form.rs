use serde::Serialize;
use thiserror::Error;

pub const MIN_MESSAGE_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Informe seu nome.")]
    MissingName,
    #[error("Informe seu e-mail.")]
    MissingEmail,
    #[error("E-mail inválido.")]
    InvalidEmail,
    #[error("A mensagem deve ter pelo menos {} caracteres.", MIN_MESSAGE_LEN)]
    MessageTooShort,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Trimmed copy of the form, or the first problem found.
    pub fn validate(&self) -> Result<ContactForm, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if message.chars().count() < MIN_MESSAGE_LEN {
            return Err(ContactError::MessageTooShort);
        }

        Ok(ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_form_is_trimmed() {
        let ok = form("  Ana  ", " ana@fazenda.com.br ", "  Quero saber mais sobre sensores.  ")
            .validate()
            .unwrap();
        assert_eq!(ok, form("Ana", "ana@fazenda.com.br", "Quero saber mais sobre sensores."));
    }

    #[test]
    fn reports_first_problem() {
        assert_eq!(form(" ", "", "").validate(), Err(ContactError::MissingName));
        assert_eq!(form("Ana", "  ", "").validate(), Err(ContactError::MissingEmail));
        assert_eq!(
            form("Ana", "ana@fazenda.com", "oi").validate(),
            Err(ContactError::MessageTooShort)
        );
    }

    #[test]
    fn rejects_malformed_emails() {
        for email in ["ana", "@fazenda.com", "ana@fazenda", "ana@.com", "ana@fazenda.", "a@b@c.com", "a na@b.com"] {
            assert_eq!(
                form("Ana", email, "Mensagem longa o bastante").validate(),
                Err(ContactError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn message_length_counts_characters() {
        // ten characters, some multi-byte
        assert!(form("Ana", "ana@x.io", "ção irrigá").validate().is_ok());
        assert_eq!(
            ContactError::MessageTooShort.to_string(),
            "A mensagem deve ter pelo menos 10 caracteres."
        );
    }
}
