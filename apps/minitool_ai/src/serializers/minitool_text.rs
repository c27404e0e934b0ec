use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MinitoolTextIn {
    /// text to summarize or proofread
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MinitoolTextOut {
    /// model output, verbatim
    pub result: String,
}
