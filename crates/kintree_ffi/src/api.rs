//! FFI use-case API for UI-shell-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions for the add-person form, the
//!   file download/upload buttons and the drag-capable canvas.
//! - Keep error semantics simple: response envelopes, never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide service instance; all calls are serialized through it
//!   (the host UI is single-threaded and event-driven anyway).

use kintree_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    FamilyTreeService, Gender, Person,
};
use std::sync::{Mutex, OnceLock};

static SERVICE: OnceLock<Mutex<FamilyTreeService>> = OnceLock::new();

fn with_service<T>(f: impl FnOnce(&mut FamilyTreeService) -> T) -> T {
    let mutex = SERVICE.get_or_init(|| Mutex::new(FamilyTreeService::new()));
    let mut guard = match mutex.lock() {
        Ok(guard) => guard,
        // A panic mid-call leaves consistent core state; keep serving.
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

/// Minimal health-check API for shell smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; conflicting
///   re-initialization returns the error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for command-style calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Optional id of the person the operation created or touched.
    pub person_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, person_id: Option<String>) -> Self {
        Self {
            ok: true,
            person_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            person_id: None,
            message: message.into(),
        }
    }
}

fn parse_gender(value: &str) -> Option<Gender> {
    match value.trim().to_ascii_lowercase().as_str() {
        "male" => Some(Gender::Male),
        "female" => Some(Gender::Female),
        "other" => Some(Gender::Other),
        _ => None,
    }
}

/// Adds one person from the add-person form.
///
/// Empty parent selections arrive as `None`; the core tolerates parent ids
/// that do not resolve.
///
/// # FFI contract
/// - Sync call; triggers a full rebuild before returning.
/// - Never throws; validation problems come back as `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn add_person(
    name: String,
    birth_year: i32,
    gender: String,
    father_id: Option<String>,
    mother_id: Option<String>,
) -> ActionResponse {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return ActionResponse::failure("name must not be blank");
    }
    let Some(gender) = parse_gender(&gender) else {
        return ActionResponse::failure(format!(
            "unsupported gender `{gender}`; expected Male|Female|Other"
        ));
    };

    let mut person = Person::new(trimmed, birth_year, gender);
    person.father_id = father_id.filter(|id| !id.is_empty());
    person.mother_id = mother_id.filter(|id| !id.is_empty());
    let id = person.id.clone();

    with_service(|service| service.add_person(person));
    ActionResponse::success("person added", Some(id))
}

/// Clears every person, gated on the shell's confirmation dialog result.
///
/// # FFI contract
/// - Sync call, never throws. `ok = false` means the clear was declined and
///   all data is intact.
#[flutter_rust_bridge::frb(sync)]
pub fn clear_people(confirmed: bool) -> ActionResponse {
    let cleared = with_service(|service| service.clear_people(confirmed));
    if cleared {
        ActionResponse::success("all persons cleared", None)
    } else {
        ActionResponse::failure("clear declined; data left intact")
    }
}

/// Exports the person store as the download payload.
///
/// # FFI contract
/// - Sync call, never throws; returns a JSON array string.
#[flutter_rust_bridge::frb(sync)]
pub fn export_people_json() -> String {
    with_service(|service| service.export_json().unwrap_or_else(|_| "[]".to_string()))
}

/// Replaces the person store from an uploaded JSON payload.
///
/// # FFI contract
/// - Sync call, never throws. A malformed payload rejects the whole load
///   (`ok = false`) and leaves the store untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn import_people_json(payload: String) -> ActionResponse {
    with_service(|service| match service.import_json(&payload) {
        Ok(count) => ActionResponse::success(format!("loaded {count} persons"), None),
        Err(err) => ActionResponse::failure(err.to_string()),
    })
}

/// Returns the current positioned scene as JSON for the renderer.
///
/// Shape: `{ "nodes": [...], "edges": [...] }` with camelCase fields per
/// the rendering contract.
///
/// # FFI contract
/// - Sync call, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn scene_json() -> String {
    with_service(|service| {
        serde_json::to_string(service.scene()).unwrap_or_else(|_| "{}".to_string())
    })
}

/// Returns father/mother options for the add-person form as JSON.
///
/// Shape: `{ "fathers": [{"id","name","birthYear"}], "mothers": [...] }`.
///
/// # FFI contract
/// - Sync call, never throws.
#[flutter_rust_bridge::frb(sync)]
pub fn form_options_json() -> String {
    with_service(|service| {
        let option = |person: &Person| {
            serde_json::json!({
                "id": person.id,
                "name": person.name,
                "birthYear": person.birth_year,
            })
        };
        let fathers: Vec<_> = service
            .store()
            .eligible_fathers()
            .into_iter()
            .map(option)
            .collect();
        let mothers: Vec<_> = service
            .store()
            .eligible_mothers()
            .into_iter()
            .map(option)
            .collect();
        serde_json::json!({ "fathers": fathers, "mothers": mothers }).to_string()
    })
}

/// Starts a drag gesture on one rendered node.
///
/// # FFI contract
/// - Sync call, never throws; `false` means unknown node or a gesture is
///   already active.
#[flutter_rust_bridge::frb(sync)]
pub fn begin_drag(person_id: String, pointer_x: f64, pointer_y: f64) -> bool {
    with_service(|service| service.begin_drag(&person_id, pointer_x, pointer_y))
}

/// Applies one pointer-move sample of the active gesture.
///
/// # FFI contract
/// - Sync call, never throws; no-op (`false`) when no gesture is active.
///   Intermediate samples may be dropped by the shell; only the latest one
///   matters.
#[flutter_rust_bridge::frb(sync)]
pub fn drag_move(pointer_x: f64, pointer_y: f64) -> bool {
    with_service(|service| service.drag_to(pointer_x, pointer_y).is_some())
}

/// Ends the active gesture and commits the node position.
///
/// # FFI contract
/// - Sync call; triggers a full rebuild before returning. `ok = false`
///   means no gesture was active.
#[flutter_rust_bridge::frb(sync)]
pub fn end_drag() -> ActionResponse {
    with_service(|service| match service.end_drag() {
        Some(position) => ActionResponse::success(
            format!("position committed at ({}, {})", position.x, position.y),
            None,
        ),
        None => ActionResponse::failure("no active drag gesture"),
    })
}
