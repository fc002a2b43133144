//! Schema versioning for the persisted ecosystem blob
//!
//! | Version | Change |
//! |---------|--------|
//! | 1 | nine namespaces, no `version` field |
//! | 2 | adds `favorites` and `reviews`, `version` written on every save |
//!
//! Each step rewrites the raw JSON object in place. The result is then decoded
//! one namespace at a time: a `null` or unreadable namespace falls back to its
//! default without touching the others.

use super::events::Namespace;
use super::state::EcosystemState;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Version assumed for blobs written before versioning existed
pub const LEGACY_SCHEMA_VERSION: u32 = 1;

const VERSION_FIELD: &str = "version";

type Step = fn(&mut Map<String, Value>);

/// `STEPS[n]` upgrades version `n + 1` to `n + 2`
const STEPS: &[Step] = &[v1_to_v2];

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("State root is not a JSON object")]
    NotAnObject,

    #[error("Invalid schema version: {0}")]
    InvalidVersion(Value),

    #[error("Unsupported schema version {found} (current {current})")]
    UnsupportedVersion { found: u32, current: u32 },

    #[error("Malformed state: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<MigrationError> for AppError {
    fn from(err: MigrationError) -> Self {
        let code = match err {
            MigrationError::UnsupportedVersion { .. } => ErrorCode::SchemaUnsupported,
            _ => ErrorCode::StorageCorrupted,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Read the `version` field; absent means legacy
pub fn stored_version(raw: &Value) -> Result<u32, MigrationError> {
    match raw.get(VERSION_FIELD) {
        None | Some(Value::Null) => Ok(LEGACY_SCHEMA_VERSION),
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| MigrationError::InvalidVersion(v.clone())),
    }
}

/// Upgrade a raw blob written at `stored_version` to the current state shape
pub fn migrate(stored_version: u32, raw: Value) -> Result<EcosystemState, MigrationError> {
    if stored_version > CURRENT_SCHEMA_VERSION {
        return Err(MigrationError::UnsupportedVersion {
            found: stored_version,
            current: CURRENT_SCHEMA_VERSION,
        });
    }
    let Value::Object(mut root) = raw else {
        return Err(MigrationError::NotAnObject);
    };
    root.remove(VERSION_FIELD);

    // version 0 never shipped, treat it as legacy
    let from = stored_version.max(LEGACY_SCHEMA_VERSION);
    for step in &STEPS[(from - 1) as usize..] {
        step(&mut root);
    }

    if from < CURRENT_SCHEMA_VERSION {
        tracing::info!(from, to = CURRENT_SCHEMA_VERSION, "Ecosystem state migrated");
    }

    Ok(assemble(root))
}

fn assemble(mut root: Map<String, Value>) -> EcosystemState {
    EcosystemState {
        recently_viewed: namespace(&mut root, Namespace::RecentlyViewed),
        compare: namespace(&mut root, Namespace::Compare),
        rewards: namespace(&mut root, Namespace::Rewards),
        orders: namespace(&mut root, Namespace::Orders),
        returns: namespace(&mut root, Namespace::Returns),
        feedback: namespace(&mut root, Namespace::Feedback),
        cms: namespace(&mut root, Namespace::Cms),
        seller: namespace(&mut root, Namespace::Seller),
        catalog: namespace(&mut root, Namespace::Catalog),
        favorites: namespace(&mut root, Namespace::Favorites),
        reviews: namespace(&mut root, Namespace::Reviews),
    }
}

fn namespace<T: DeserializeOwned + Default>(root: &mut Map<String, Value>, ns: Namespace) -> T {
    match root.remove(ns.as_str()) {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::warn!(namespace = %ns, error = %e, "Dropping unreadable namespace");
            T::default()
        }),
    }
}

/// Parse and migrate a stored blob
pub fn decode(raw: &str) -> Result<EcosystemState, MigrationError> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(MigrationError::NotAnObject);
    }
    let version = stored_version(&value)?;
    migrate(version, value)
}

#[derive(Serialize)]
struct VersionedState<'a> {
    version: u32,
    #[serde(flatten)]
    state: &'a EcosystemState,
}

/// Serialize with the current version stamp
pub fn encode(state: &EcosystemState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&VersionedState {
        version: CURRENT_SCHEMA_VERSION,
        state,
    })
}

fn v1_to_v2(root: &mut Map<String, Value>) {
    root.entry("favorites")
        .or_insert_with(|| json!({ "byUserId": {} }));
    root.entry("reviews").or_insert_with(|| json!({ "items": [] }));

    // v1 point totals were plain JS numbers: floor fractions, clamp negatives
    if let Some(points) = root
        .get_mut("rewards")
        .and_then(|r| r.get_mut("pointsByUserId"))
        .and_then(Value::as_object_mut)
    {
        for total in points.values_mut() {
            if total.as_u64().is_none() {
                let coerced = total.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0);
                *total = json!(coerced.max(0.0).floor() as u64);
            }
        }
    }
}
