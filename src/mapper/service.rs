//! Service health decoding

use super::records::ApiStatusRecord;
use super::{DomainMapper, Fields};
use crate::error::{kind_name, Error, Result};
use serde_json::Value;

impl DomainMapper {
    /// Decode the service status document
    ///
    /// The status endpoint answers with a bare object, without the
    /// `response` envelope of the media API.
    pub fn decode_api_status(&self, document: &Value) -> Result<ApiStatusRecord> {
        let Value::Object(obj) = document else {
            return Err(Error::shape("status", kind_name(document)));
        };
        let status = Fields::new(obj);

        Ok(ApiStatusRecord {
            status: status.text("status")?,
            status_code: status.text("status_code")?,
            incident: status.text("incident")?,
        })
    }
}
