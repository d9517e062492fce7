use std::collections::{HashMap, HashSet};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub fn load_special_words() -> HashMap<String, String> {
    let data = include_str!("../data/special_words.json");
    parse_table("special_words", data)
}

pub fn load_stop_words() -> HashSet<String> {
    let data = include_str!("../data/stop_words.json");
    parse_table("stop_words", data)
}

pub fn load_irregular_forms() -> HashMap<String, String> {
    let data = include_str!("../data/irregular_forms.json");
    parse_table("irregular_forms", data)
}

fn parse_table<T: DeserializeOwned + Default>(name: &str, data: &str) -> T {
    match serde_json::from_str(data) {
        Ok(table) => {
            debug!(table = name, "loaded override table");
            table
        }
        Err(e) => {
            warn!(table = name, error = %e, "override table failed to parse, using an empty one");
            T::default()
        }
    }
}
