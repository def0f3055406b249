use crate::{
    entity::user,
    error::{ApiError, AuthorizationError},
    permission::global_permission::GlobalPermission,
    state::{AppState, CachedAuth},
};
use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use licensure_types::anyhow;
use sea_orm::EntityTrait;

#[derive(Debug, Clone)]
pub struct OpenIDUser {
    pub sub: String,
    pub access_token: String,
}

#[derive(Debug, Clone)]
pub enum AppUser {
    OpenID(OpenIDUser),
    Unauthorized,
}

impl AppUser {
    pub fn sub(&self) -> Result<String, AuthorizationError> {
        match self {
            AppUser::OpenID(user) => Ok(user.sub.clone()),
            AppUser::Unauthorized => Err(AuthorizationError::from(anyhow!(
                "Unauthorized user does not have a sub"
            ))),
        }
    }

    pub async fn get_user(&self, state: &AppState) -> Result<user::Model, AuthorizationError> {
        let sub = self.sub()?;
        user::Entity::find_by_id(&sub)
            .one(&state.db)
            .await?
            .ok_or_else(|| AuthorizationError::from(anyhow!("User not found")))
    }

    pub async fn global_permission(&self, state: &AppState) -> Result<GlobalPermission, ApiError> {
        let user = self.get_user(state).await?;
        let permission = GlobalPermission::from_bits(user.permission)
            .ok_or_else(|| anyhow!("Invalid permission bits"))?;
        Ok(permission)
    }

    pub async fn check_global_permission(
        &self,
        state: &AppState,
        permission: GlobalPermission,
    ) -> Result<GlobalPermission, ApiError> {
        let global_permission = self.global_permission(state).await?;
        let has_permission = global_permission.contains(permission)
            || global_permission.contains(GlobalPermission::Admin);
        if has_permission {
            Ok(global_permission)
        } else {
            Err(ApiError::FORBIDDEN)
        }
    }
}

fn token_hash(token: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(token.as_bytes());
    hasher.finalize().to_hex().to_string().to_lowercase()
}

pub async fn jwt_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response<Body>, AuthorizationError> {
    let mut request = request;

    if let Some(auth_header) = request.headers().get(AUTHORIZATION)
        && let Ok(token) = auth_header.to_str()
    {
        let token = if token.starts_with("Bearer ") {
            &token[7..]
        } else {
            token
        };
        let token = token.trim();

        let hash = token_hash(token);
        if let Some(cached) = state.auth_cache.get(&hash) {
            match cached {
                CachedAuth::OpenID { sub } => {
                    let user = AppUser::OpenID(OpenIDUser {
                        sub,
                        access_token: token.to_string(),
                    });
                    request.extensions_mut().insert::<AppUser>(user);
                    return Ok(next.run(request).await);
                }
                CachedAuth::Invalid => {
                    return Err(AuthorizationError::unauthorized("Invalid token"));
                }
            }
        }

        let claims = match state.validate_token(token) {
            Ok(claims) => claims,
            Err(err) => {
                state.auth_cache.insert(hash, CachedAuth::Invalid);
                return Err(AuthorizationError::from(err));
            }
        };
        let sub = claims.get("sub").ok_or(anyhow!("sub not found"))?;
        let sub = sub.as_str().ok_or(anyhow!("sub not a string"))?;

        state.auth_cache.insert(
            hash,
            CachedAuth::OpenID {
                sub: sub.to_string(),
            },
        );

        let user = AppUser::OpenID(OpenIDUser {
            sub: sub.to_string(),
            access_token: token.to_string(),
        });
        request.extensions_mut().insert::<AppUser>(user);
        return Ok(next.run(request).await);
    }

    request.extensions_mut().insert(AppUser::Unauthorized);
    Ok(next.run(request).await)
}
