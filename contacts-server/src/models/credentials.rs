//! Admin login payload

use serde::Deserialize;

use super::ValidationError;

/// Raw `POST /login` body; either field may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login credentials with both fields present and non-empty
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for Credentials {
    type Error = ValidationError;

    fn try_from(req: LoginRequest) -> Result<Self, Self::Error> {
        match (req.username, req.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok(Self { email, password })
            }
            _ => Err(ValidationError::MissingFields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: Option<&str>, password: Option<&str>) -> LoginRequest {
        LoginRequest {
            username: username.map(str::to_owned),
            password: password.map(str::to_owned),
        }
    }

    #[test]
    fn accepts_both_fields() {
        let creds = Credentials::try_from(request(Some("admin@example.com"), Some("pw"))).unwrap();
        assert_eq!(creds.email, "admin@example.com");
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn rejects_missing_or_empty() {
        for req in [
            request(None, Some("pw")),
            request(Some("admin@example.com"), None),
            request(Some(""), Some("pw")),
            request(None, None),
        ] {
            let err = Credentials::try_from(req).unwrap_err();
            assert_eq!(err, ValidationError::MissingFields);
        }
    }
}
