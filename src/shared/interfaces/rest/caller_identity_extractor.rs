use std::sync::Arc;

use axum::http::HeaderMap;

use crate::{
    access_policy::domain::model::value_objects::caller_identity::CallerIdentity,
    auth_integration::interfaces::acl::authentication_facade::AuthenticationFacade,
};

const DEFAULT_ROLE_NAME: &str = "regular_user";

#[derive(Debug, thiserror::Error)]
pub enum CallerIdentityError {
    #[error("invalid bearer credentials: {0}")]
    InvalidBearerCredentials(String),
}

pub async fn extract_caller_identity(
    authentication_facade: &Arc<dyn AuthenticationFacade>,
    headers: &HeaderMap,
) -> Result<CallerIdentity, CallerIdentityError> {
    if let Some(authorization) = header_value(headers, "authorization") {
        let token = authorization
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                CallerIdentityError::InvalidBearerCredentials(
                    "authorization header must carry a bearer token".to_string(),
                )
            })?;

        let verified = authentication_facade
            .verify_access_token(token)
            .await
            .map_err(|e| CallerIdentityError::InvalidBearerCredentials(e.to_string()))?;

        return Ok(CallerIdentity::new(
            verified.role_name,
            Some(verified.user_id),
        ));
    }

    let role_name =
        header_value(headers, "x-role").unwrap_or_else(|| DEFAULT_ROLE_NAME.to_string());
    let user_id = header_value(headers, "x-user-id").and_then(|raw| raw.parse::<i64>().ok());

    Ok(CallerIdentity::new(role_name, user_id))
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
