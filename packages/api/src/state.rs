use jsonwebtoken::{
    DecodingKey, Validation, decode,
    jwk::{AlgorithmParameters, JwkSet},
};
use licensure_types::{Result, Value, bail};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::{collections::HashMap, sync::Arc, time::Duration};

pub type AppState = Arc<State>;

/// Cached auth result keyed by token hash
#[derive(Clone, Debug)]
pub enum CachedAuth {
    /// OpenID user with sub
    OpenID { sub: String },
    /// Invalid/expired token
    Invalid,
}

pub struct State {
    pub db: DatabaseConnection,
    pub jwks: JwkSet,
    pub stripe_client: Option<stripe::Client>,
    /// Named-key response cache; mutations invalidate the keys they touch
    pub response_cache: moka::sync::Cache<String, Value>,
    /// Auth token cache: token_hash -> CachedAuth
    /// Short TTL to balance security vs performance
    pub auth_cache: moka::sync::Cache<String, CachedAuth>,
}

impl State {
    pub async fn new() -> Self {
        let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let mut opt = ConnectOptions::new(db_url.to_owned());
        opt.max_connections(10)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(std::env::var("SQLX_LOGGING").is_ok());

        let db = Database::connect(opt)
            .await
            .expect("Failed to connect to database");

        let jwks = load_jwks().expect("Failed to load JWKS");

        let stripe_client = std::env::var("STRIPE_SECRET_KEY")
            .ok()
            .map(stripe::Client::new);
        if stripe_client.is_none() {
            tracing::warn!("STRIPE_SECRET_KEY not set, gateway refunds disabled");
        }

        let response_cache = moka::sync::Cache::builder()
            .max_capacity(64 * 1024 * 1024)
            .time_to_live(Duration::from_secs(60))
            .build();

        Self {
            db,
            jwks,
            stripe_client,
            response_cache,
            // Entries are keyed by token hash to avoid storing raw tokens
            auth_cache: moka::sync::Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(240))
                .build(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<HashMap<String, Value>> {
        let header = jsonwebtoken::decode_header(token)?;
        let Some(kid) = header.kid else {
            return Err(licensure_types::anyhow!("Missing kid in token header"));
        };
        let Some(jwk) = self.jwks.find(&kid) else {
            return Err(licensure_types::anyhow!("JWK not found for kid: {}", kid));
        };
        let alg = decoding_key_for_algorithm(&jwk.algorithm)?;
        let mut validation = Validation::new(header.alg);
        validation.validate_aud = false;
        let decoded = decode::<HashMap<String, Value>>(token, &alg, &validation)?;
        let claims = decoded.claims;
        Ok(claims)
    }

    pub fn get_cache<T>(&self, key: &str) -> Option<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.response_cache
            .get(key)
            .and_then(|json_value| serde_json::from_value(json_value).ok())
    }

    pub fn set_cache<T>(&self, key: String, value: T)
    where
        T: serde::Serialize,
    {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.response_cache.insert(key, json_value);
        }
    }

    pub fn invalidate_cache(&self, key: &str) {
        self.response_cache.invalidate(key);
    }
}

/// Cache key for a course's authoring content (units + lessons).
pub fn course_content_cache_key(course_id: &str) -> String {
    format!("course-content:{}", course_id)
}

/// Cache key for a page's builder tree (sections + blocks).
pub fn page_tree_cache_key(page_id: &str) -> String {
    format!("page-tree:{}", page_id)
}

pub const ANALYTICS_SUMMARY_CACHE_KEY: &str = "analytics:summary";

fn load_jwks() -> Result<JwkSet> {
    if let Ok(inline) = std::env::var("JWKS") {
        return Ok(licensure_types::json::from_str::<JwkSet>(&inline)?);
    }
    let path = std::env::var("JWKS_PATH")
        .map_err(|_| licensure_types::anyhow!("Neither JWKS nor JWKS_PATH is set"))?;
    let raw = std::fs::read_to_string(&path)?;
    Ok(licensure_types::json::from_str::<JwkSet>(&raw)?)
}

fn decoding_key_for_algorithm(alg: &AlgorithmParameters) -> Result<DecodingKey> {
    let key = match alg {
        AlgorithmParameters::RSA(rsa) => DecodingKey::from_rsa_components(&rsa.n, &rsa.e),
        AlgorithmParameters::EllipticCurve(ec) => DecodingKey::from_ec_components(&ec.x, &ec.y),
        AlgorithmParameters::OctetKeyPair(octet) => DecodingKey::from_ed_components(&octet.x),
        _ => bail!("Unsupported algorithm"),
    }?;
    Ok(key)
}
