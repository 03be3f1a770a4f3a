//! Question reporting endpoint.

use crate::QbReaderClient;
use qbreader_core::{QbError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ReportBody<'b> {
    #[serde(rename = "_id")]
    id: &'b str,
    reason: &'b str,
    description: &'b str,
}

/// Question reporting endpoints
pub struct ReportApi<'a> {
    client: &'a QbReaderClient,
}

impl<'a> ReportApi<'a> {
    pub(crate) fn new(client: &'a QbReaderClient) -> Self {
        Self { client }
    }

    /// Report a malformed question by its database id
    ///
    /// `reason` is a short tag such as `"wrong-category"` or `"text-error"`;
    /// `description` is free text for the maintainers.
    pub async fn question(&self, id: &str, reason: &str, description: &str) -> Result<()> {
        if id.is_empty() {
            return Err(QbError::InvalidValue {
                kind: "question id",
                value: String::new(),
            });
        }

        let body = ReportBody {
            id,
            reason,
            description,
        };
        self.client.post_json("/report-question", &body).await
    }
}
