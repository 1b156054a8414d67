use std::collections::HashMap;

/// Param key that names the owning table instead of configuring the vindex
pub const OWNER_PARAM: &str = "owner";

/// Splits raw `key=value` params on the first '=' into (owner, params).
/// A param without '=' maps to an empty value; later keys win.
pub fn parse_params(raw: &[String]) -> (String, HashMap<String, String>) {
    let mut owner = String::new();
    let mut params: HashMap<String, String> = HashMap::new();
    for p in raw {
        let (key, value) = p.split_once('=').unwrap_or((p.as_str(), ""));
        if key == OWNER_PARAM {
            owner = value.to_string();
        } else {
            params.insert(key.to_string(), value.to_string());
        }
    }
    (owner, params)
}
