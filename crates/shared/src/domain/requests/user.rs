use serde::{Deserialize, Serialize};

// Built by the register service after hashing; never deserialized from a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}
