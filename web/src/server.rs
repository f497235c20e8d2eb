use demographics::DemographicsResponse;
use leptos::prelude::*;
use leptos::server;

#[server]
pub async fn lookup_demographics(address: String) -> Result<DemographicsResponse, ServerFnError> {
    use demographics::LookupError;

    if address.trim().is_empty() {
        return Err(ServerFnError::new(LookupError::EmptyAddress.to_string()));
    }

    let base_url = crate::api::base_url_from_env();
    tracing::debug!(%address, %base_url, "looking up demographics");

    match crate::api::lookup(&base_url, &address).await {
        Ok(response) => Ok(response),
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}
