/// Display strings the session manager puts into its `error` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    InvalidCredentials,
    LoginFailed,
    RegistrationFailed,
    ProfileUpdateFailed,
    CommentFailed,
}

impl ErrorMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Неправильные учетные данные",
            Self::LoginFailed => "Ошибка при входе",
            Self::RegistrationFailed => "Ошибка при регистрации",
            Self::ProfileUpdateFailed => "Ошибка при обновлении профиля",
            Self::CommentFailed => "Ошибка при добавлении комментария",
        }
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorMessage> for String {
    fn from(message: ErrorMessage) -> Self {
        message.as_str().to_string()
    }
}
