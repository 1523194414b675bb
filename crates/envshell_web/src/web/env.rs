//! Reading the runtime env object off the page.
//!
//! Deployment attaches `window._env_` before the bundle runs. We snapshot it
//! through `JSON.stringify` and let the core decode the string map; anything
//! missing or malformed degrades to an empty config.

use envshell::config::EnvConfig;
use wasm_bindgen::prelude::*;

const ENV_GLOBAL_KEY: &str = "_env_";

pub(super) fn load_env_config() -> EnvConfig {
    read_env_json()
        .and_then(|raw| EnvConfig::from_json_str(&raw))
        .unwrap_or_default()
}

fn read_env_json() -> Option<String> {
    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(ENV_GLOBAL_KEY)).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&env).ok().map(String::from)
}
