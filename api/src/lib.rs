pub mod contact;

// root of the http api, relative to the site origin
pub const API_ROOT: &str = "/api";

// generate an async client function for an endpoint
//
// endpoint!(SendContact) expands to
//
//   pub async fn send_contact(req: &SendContactReq) -> anyhow::Result<SendContactResp>
//
// which POSTs the json-encoded request to {API_ROOT}/SendContact.  any non-2xx
// response is turned into an error carrying the response body, so that callers only
// ever have to distinguish between Ok and Err
#[macro_export]
macro_rules! endpoint {
    ($name:ident) => {
        paste::paste! {
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let resp = gloo_net::http::Request::post(
                    format!("{}/{}", $crate::API_ROOT, stringify!([<$name:camel>])).as_str(),
                )
                .json(&req.clone())?
                .send()
                .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    Err(anyhow::Error::msg(resp.text().await?))
                }
            }
        }
    };
}
