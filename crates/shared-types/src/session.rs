use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated identity as the remote service reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// A live authenticated-identity context maintained by the remote service.
///
/// Holding a `Session` does NOT imply dashboard access: authorization is a
/// separate check against the staff directory, and a session can be reverted
/// (signed back out) when that check fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}
