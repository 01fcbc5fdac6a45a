use serde::{Deserialize, Serialize};

use crate::endpoint;

// messages

// deliver a message from the contact form
//
// the three fields mirror the form exactly; the remote side decides what to do with
// them (forward by mail, store, etc.) and only reports success or failure
endpoint!(SendContact);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SendContactReq {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SendContactResp {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_the_three_form_fields() {
        let req = SendContactReq {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            message: "Hello".into(),
        };

        let value = serde_json::to_value(&req).unwrap();

        assert_eq!(value["name"], "Jane");
        assert_eq!(value["email"], "jane@x.com");
        assert_eq!(value["message"], "Hello");
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn empty_response_body_decodes() {
        let resp: SendContactResp = serde_json::from_str("{}").unwrap();
        let _ = resp;
    }
}
