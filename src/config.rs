//! Startup Configuration
//!
//! The seed list is compiled in from `seed.json`.

use task_store::TaskList;
use tracing::{info, warn};

const SEED_JSON: &str = include_str!("../seed.json");

/// Store contents at application start
pub fn initial_task_list() -> TaskList {
    match TaskList::from_seed_json(SEED_JSON) {
        Ok(list) => {
            info!(tasks = list.len(), "loaded seed list");
            list
        }
        Err(err) => {
            warn!(error = %err, "invalid seed.json, using built-in seed");
            TaskList::seeded()
        }
    }
}
