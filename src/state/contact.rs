//! Contact form feedback.
//!
//! Maps a submission result to the text and styling of `#formMessage`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::contact::ContactError;

pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso! Em breve entrarei em contato.";
pub const GENERIC_ERROR_MESSAGE: &str = "Ocorreu um erro ao enviar a mensagem. Por favor, tente novamente.";
pub const CONNECTIVITY_ERROR_MESSAGE: &str =
    "Não foi possível conectar ao servidor. Verifique sua conexão e tente novamente.";

/// Base class applied while a message is shown.
pub const MESSAGE_CLASS: &str = "form-message";
pub const MESSAGE_VISIBLE_CLASS: &str = "show";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Every class added when a message of this kind is shown.
    #[must_use]
    pub fn classes(self) -> [&'static str; 3] {
        [MESSAGE_CLASS, self.class(), MESSAGE_VISIBLE_CLASS]
    }
}

/// What the page shows after a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub kind: MessageKind,
    /// Clear the form fields before showing the message.
    pub reset_form: bool,
}

impl Feedback {
    #[must_use]
    pub fn from_result(result: &Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => Self { text: SUCCESS_MESSAGE.to_owned(), kind: MessageKind::Success, reset_form: true },
            Err(err) => Self { text: err.user_message(), kind: MessageKind::Error, reset_form: false },
        }
    }
}
