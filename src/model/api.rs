use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope wrapping every API payload.
///
/// `message` carries the client-facing Spanish status text and is omitted when
/// an endpoint has nothing to say beyond the payload. `data` is omitted for
/// message-only responses such as logout.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Body served at the root path so load balancers and the mobile client can
/// probe the server.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HealthDto {
    pub ok: bool,
    pub name: String,
    pub version: String,
}

/// Body served by the router fallback for unknown paths.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RouteNotFoundDto {
    pub success: bool,
    pub message: String,
    pub path: String,
    pub method: String,
}

/// Error envelope; `success` is always `false`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
