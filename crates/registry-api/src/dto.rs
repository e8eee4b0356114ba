//! Request/response payloads. Missing fields bind as empty strings.

use registry_core::domain::UserInput;
use serde::{Deserialize, Serialize};

/// Body of `POST /users` and `PUT /users`, echoed back on success
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub nik: String,
    pub name: String,
    pub company: String,
}

impl From<UserRequest> for UserInput {
    fn from(req: UserRequest) -> Self {
        UserInput {
            nik: req.nik,
            name: req.name,
            company: req.company,
        }
    }
}

/// `{nik}` selector used by `GET /users` and `DELETE /users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NikRequest {
    pub nik: String,
}
