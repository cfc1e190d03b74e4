use std::sync::Arc;

use tracing::{info, warn};

use crate::database::UserRepository;
use crate::dto::user_dto::{AuthResponse, LoginPayload, SignupPayload};
use crate::error::{Error, Result};
use crate::models::user::NewUser;
use crate::utils::{crypto, token};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    jwt_secret: Arc<str>,
    token_ttl_hours: i64,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, jwt_secret: &str, token_ttl_hours: i64) -> Self {
        Self {
            repo,
            jwt_secret: Arc::from(jwt_secret),
            token_ttl_hours,
        }
    }

    pub async fn signup(&self, payload: SignupPayload) -> Result<AuthResponse> {
        let signup = payload.into_signup()?;
        let email = signup.email;
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(Error::BadRequest("Email already in use".to_string()));
        }

        let password_hash = crypto::hash_password(&signup.password)
            .map_err(|e| Error::Internal(format!("password hashing failed: {}", e)))?;
        let user = self
            .repo
            .insert(NewUser {
                name: signup.name,
                email,
                password_hash,
                phone_number: signup.phone_number,
                gender: signup.gender,
                date_of_birth: signup.date_of_birth,
                membership_status: signup.membership_status,
            })
            .await?;
        info!(user_id = %user.id, "user signed up");

        let token = self.issue(user.id, &user.email)?;
        Ok(AuthResponse {
            email: user.email,
            token,
        })
    }

    pub async fn login(&self, payload: LoginPayload) -> Result<AuthResponse> {
        let (email, password) = payload.into_credentials()?;
        let invalid = || Error::Unauthorized("Invalid email or password".to_string());

        let Some(user) = self.repo.find_by_email(&email).await? else {
            warn!("login attempt for unknown email");
            return Err(invalid());
        };
        let matches = crypto::verify_password(&password, &user.password_hash)
            .map_err(|e| Error::Internal(format!("stored password hash unreadable: {}", e)))?;
        if !matches {
            warn!(user_id = %user.id, "login attempt with wrong password");
            return Err(invalid());
        }

        let token = self.issue(user.id, &user.email)?;
        Ok(AuthResponse {
            email: user.email,
            token,
        })
    }

    fn issue(&self, user_id: uuid::Uuid, email: &str) -> Result<String> {
        token::issue_token(user_id, email, &self.jwt_secret, self.token_ttl_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::users::MockUserRepository;
    use crate::database::InMemoryUserRepository;

    fn signup_payload() -> SignupPayload {
        SignupPayload {
            name: Some("Bob Doe".into()),
            email: Some("Bob@Mail.com".into()),
            password: Some("R3g5T7#gh".into()),
            phone_number: Some("1234567890".into()),
            gender: Some("Male".into()),
            date_of_birth: Some("1990-01-01".into()),
            membership_status: Some("Inactive".into()),
        }
    }

    fn login_payload(password: &str) -> LoginPayload {
        LoginPayload {
            email: Some("bob@mail.com".into()),
            password: Some(password.into()),
        }
    }

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()), "secret", 1)
    }

    #[tokio::test]
    async fn signup_then_login_issue_valid_tokens() {
        let svc = service();
        let signed_up = svc.signup(signup_payload()).await.unwrap();
        assert_eq!(signed_up.email, "bob@mail.com");
        assert!(token::decode_token(&signed_up.token, "secret").is_ok());

        let logged_in = svc
            .login(login_payload("R3g5T7#gh"))
            .await
            .unwrap();
        let claims = token::decode_token(&logged_in.token, "secret").unwrap();
        assert_eq!(claims.email, "bob@mail.com");
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let svc = service();
        svc.signup(signup_payload()).await.unwrap();
        assert!(matches!(
            svc.signup(signup_payload()).await,
            Err(Error::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let svc = service();
        svc.signup(signup_payload()).await.unwrap();
        let res = svc
            .login(login_payload("Wr0ng#pass"))
            .await;
        assert!(matches!(res, Err(Error::Unauthorized(_))));
    }

    #[tokio::test]
    async fn weak_password_never_reaches_the_store() {
        let mut mock = MockUserRepository::new();
        mock.expect_find_by_email().never();
        mock.expect_insert().never();
        let svc = UserService::new(Arc::new(mock), "secret", 1);

        let payload = SignupPayload {
            password: Some("password".into()),
            ..signup_payload()
        };
        assert!(matches!(
            svc.signup(payload).await,
            Err(Error::Validation(_))
        ));
    }

    #[tokio::test]
    async fn incomplete_signup_never_reaches_the_store() {
        let mut mock = MockUserRepository::new();
        mock.expect_find_by_email().never();
        mock.expect_insert().never();
        let svc = UserService::new(Arc::new(mock), "secret", 1);

        let payload = SignupPayload {
            phone_number: None,
            date_of_birth: None,
            ..signup_payload()
        };
        assert!(matches!(
            svc.signup(payload).await,
            Err(Error::Validation(_))
        ));
    }
}
