use serde::{Deserialize, Serialize};

/// Liveness payload served on `/health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
}

/// Root banner served on `/`.
#[derive(Serialize, Debug)]
pub struct Banner {
    pub message: String,
    pub version: &'static str,
    pub docs: &'static str,
}

/// Static service description served on `/api/info`.
#[derive(Serialize, Debug)]
pub struct ApiInfo {
    pub name: String,
    pub description: String,
    pub version: &'static str,
    pub features: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
