use crate::auth::authenticate;
use crate::server::error::ApiError;
use crate::server::guard::AuthUser;
use crate::server::AppStateArc;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use log::{info, warn};
use serde::Deserialize;
use serde_json::{json, Value};

pub fn routes() -> Router<AppStateArc> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/logout", post(logout))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

async fn login(
    State(state): State<AppStateArc>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(req) = payload?;

    let (email, password) = match (req.email, req.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Please provide email and password".to_string(),
            ))
        }
    };

    info!("Login attempt: {}", email);

    let Some(user) = authenticate(&email, &password) else {
        warn!("Invalid credentials for {}", email);
        return Err(ApiError::unauthorized("Invalid email or password", "INVALID_CREDENTIALS"));
    };

    let token = state
        .auth
        .issue(user)
        .map_err(|e| ApiError::Internal(format!("Login failed: {}", e)))?;

    info!("{} login successful", user.role.as_str());

    Ok(Json(json!({
        "success": true,
        "token": token,
        "user": {
            "id": user.id,
            "email": user.email,
            "role": user.role,
            "name": user.name,
        }
    })))
}

async fn me(AuthUser(claims): AuthUser) -> Json<Value> {
    Json(json!({
        "success": true,
        "user": {
            "userId": claims.user_id,
            "email": claims.email,
            "role": claims.role,
        }
    }))
}

// Tokens are stateless; the client drops its copy
async fn logout() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Logged out successfully",
    }))
}
