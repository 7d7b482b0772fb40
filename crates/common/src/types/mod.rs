use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain acknowledgement body, e.g. `{"message":"ok"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn ok() -> Self {
        Self { message: "ok".to_string() }
    }
}
