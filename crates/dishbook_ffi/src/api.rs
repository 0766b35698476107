//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Carry picked photo bytes from the platform picker into the core form
//!   flow; the picker widget itself lives on the Dart side.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The catalogue DB path is pinned once per process.

use dishbook_core::db::{open_db, SqliteSlotStore};
use dishbook_core::{
    core_version as core_version_inner, group_by_category, init_logging as init_logging_inner,
    ping as ping_inner, Category, Dish, DishForm, DishStore, FormSignal,
};
use log::info;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const CATALOG_DB_FILE_NAME: &str = "dishbook.sqlite3";
static CATALOG_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Flat dish record for Dart-side rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishView {
    /// Stable dish ID in string form.
    pub id: String,
    pub name: String,
    /// Inline image payload (JPEG-style bytes).
    pub photo: Vec<u8>,
    pub description: String,
    pub recipe: String,
    /// Category tag (`Antipasto|Primo|Secondo`).
    pub category: String,
    pub duration: String,
    pub difficulty: String,
}

/// One list section in fixed category order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroupView {
    /// Category tag (`Antipasto|Primo|Secondo`).
    pub category: String,
    /// Dishes in original collection order.
    pub dishes: Vec<DishView>,
}

/// Response envelope for catalogue listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogResponse {
    /// Exactly three groups in fixed order when `ok`.
    pub groups: Vec<CatalogGroupView>,
    /// Whether the catalogue could be read.
    pub ok: bool,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for form submission flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Created dish ID on success.
    pub dish_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl DishActionResponse {
    fn success(message: impl Into<String>, dish_id: String) -> Self {
        Self {
            ok: true,
            dish_id: Some(dish_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            dish_id: None,
            message: message.into(),
        }
    }
}

/// Response envelope for the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishDetailResponse {
    pub ok: bool,
    pub dish: Option<DishView>,
    pub message: String,
}

/// Pins the catalogue database under the app documents directory.
///
/// # FFI contract
/// - Sync call; the first successful call wins, repeated calls with the
///   same directory are idempotent, conflicting calls return an error
///   message.
/// - A failed open does not pin anything; the call may be retried with a
///   usable directory.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn open_catalog(app_dir: String) -> String {
    let trimmed = app_dir.trim();
    if trimmed.is_empty() {
        return "open_catalog failed: app_dir cannot be empty".to_string();
    }
    let requested = PathBuf::from(trimmed).join(CATALOG_DB_FILE_NAME);

    if let Some(pinned) = CATALOG_DB_PATH.get() {
        if pinned != &requested {
            return format!(
                "open_catalog failed: catalogue already pinned at `{}`",
                pinned.display()
            );
        }
        return String::new();
    }

    // Open eagerly so migration failures surface at startup, and pin the
    // path only once the database is known to be usable.
    match open_db(&requested) {
        Ok(_) => {
            let pinned = CATALOG_DB_PATH.get_or_init(|| requested.clone());
            if pinned != &requested {
                return format!(
                    "open_catalog failed: catalogue already pinned at `{}`",
                    pinned.display()
                );
            }
            info!(
                "event=catalog_open module=ffi status=ok path={}",
                pinned.display()
            );
            String::new()
        }
        Err(err) => format!("open_catalog failed: {err}"),
    }
}

/// Submits the creation form with a photo already picked on the Dart side.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Rejects empty `name`, empty `photo`, or an unknown `category` tag with
///   a failure envelope; free-form fields may be empty.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_dish(
    name: String,
    photo: Vec<u8>,
    description: String,
    recipe: String,
    category: String,
    duration: String,
    difficulty: String,
) -> DishActionResponse {
    let Some(category) = Category::parse(&category) else {
        return DishActionResponse::failure(format!("submit_dish failed: unknown category `{category}`"));
    };
    if photo.is_empty() {
        return DishActionResponse::failure("submit_dish failed: photo is required");
    }

    let result = with_store(|store| {
        let mut form = DishForm::new();
        form.set_name(name);
        form.set_description(description);
        form.set_recipe(recipe);
        form.set_category(category);
        form.set_duration(duration);
        form.set_difficulty(difficulty);

        // Marshal the Dart-picked payload through the one-shot delivery so
        // the core form flow stays the single submission path.
        let (_request, sender) = form.begin_photo_pick();
        sender.resolve(Some(photo));
        form.poll_photo();

        match form.submit(store) {
            FormSignal::Close => {
                let dish = store.dishes().last().map(|dish| dish.id.to_string());
                Ok(dish.unwrap_or_default())
            }
            FormSignal::Stay => Err("submission is gated: name and photo are required".to_string()),
        }
    });

    match result {
        Ok(dish_id) => DishActionResponse::success("Dish saved.", dish_id),
        Err(err) => DishActionResponse::failure(format!("submit_dish failed: {err}")),
    }
}

/// Lists the catalogue grouped by the three fixed categories.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Always returns three groups in fixed order when `ok`, including empty
///   ones.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn list_dishes() -> CatalogResponse {
    let result = with_store(|store| {
        let groups = group_by_category(store.dishes())
            .into_iter()
            .map(|group| CatalogGroupView {
                category: group.category.as_str().to_string(),
                dishes: group.dishes.into_iter().map(to_dish_view).collect(),
            })
            .collect::<Vec<_>>();
        Ok(groups)
    });

    match result {
        Ok(groups) => {
            let count: usize = groups.iter().map(|group| group.dishes.len()).sum();
            CatalogResponse {
                groups,
                ok: true,
                message: format!("{count} dish(es)."),
            }
        }
        Err(err) => CatalogResponse {
            groups: Vec::new(),
            ok: false,
            message: format!("list_dishes failed: {err}"),
        },
    }
}

/// Fetches one dish for the detail view.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Unknown or malformed IDs yield a failure envelope, not an exception.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn get_dish(id: String) -> DishDetailResponse {
    let parsed = match Uuid::parse_str(id.trim()) {
        Ok(parsed) => parsed,
        Err(err) => {
            return DishDetailResponse {
                ok: false,
                dish: None,
                message: format!("get_dish failed: invalid id `{id}`: {err}"),
            };
        }
    };

    let result = with_store(|store| {
        Ok(dishbook_core::find_dish(store.dishes(), parsed).map(to_dish_view))
    });

    match result {
        Ok(Some(dish)) => DishDetailResponse {
            ok: true,
            dish: Some(dish),
            message: String::new(),
        },
        Ok(None) => DishDetailResponse {
            ok: false,
            dish: None,
            message: format!("get_dish failed: no dish with id `{parsed}`"),
        },
        Err(err) => DishDetailResponse {
            ok: false,
            dish: None,
            message: format!("get_dish failed: {err}"),
        },
    }
}

fn to_dish_view(dish: &Dish) -> DishView {
    DishView {
        id: dish.id.to_string(),
        name: dish.name.clone(),
        photo: dish.photo.clone(),
        description: dish.description.clone(),
        recipe: dish.recipe.clone(),
        category: dish.category.as_str().to_string(),
        duration: dish.duration.clone(),
        difficulty: dish.difficulty.clone(),
    }
}

fn resolve_catalog_db_path() -> PathBuf {
    CATALOG_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("DISHBOOK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(CATALOG_DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(
    f: impl FnOnce(&mut DishStore<SqliteSlotStore<'_>>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_catalog_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("catalogue DB open failed: {err}"))?;
    let mut store = DishStore::new(SqliteSlotStore::new(&conn));
    store.load();
    f(&mut store)
}
