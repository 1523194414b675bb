use envshell::shell::AppShell;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::ui_model::AppPage;

mod env;
mod history;
mod render;

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    // The env object is attached by the deployment bootstrap before the app
    // starts; snapshot it exactly once and hand it to the shell.
    let shell = StoredValue::new(AppShell::routed(env::load_env_config()));

    let (path, set_path) = signal(history::current_path());
    history::on_popstate(move || set_path.set(history::current_path()));

    view! {
        <nav class="App-nav">
            {AppPage::all()
                .iter()
                .map(|&page| {
                    let to = page.path();
                    view! {
                        <a
                            href=to
                            class=move || {
                                if path.get() == to { "App-nav-link active" } else { "App-nav-link" }
                            }
                            on:click=move |ev: MouseEvent| {
                                ev.prevent_default();
                                history::push(to);
                                set_path.set(history::current_path());
                            }
                        >
                            {page.label()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
        {move || render::node_view(shell.with_value(|s| s.render(&path.get())))}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envshell::config::EnvConfig;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    fn host_element() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();
        host.unchecked_into()
    }

    #[wasm_bindgen_test]
    fn routed_app_mounts_and_unmounts() {
        let handle = leptos::mount::mount_to(host_element(), || view! { <App /> });
        drop(handle);
    }

    #[wasm_bindgen_test]
    fn minimal_shell_mounts_and_unmounts() {
        let shell = AppShell::minimal(EnvConfig::new());
        let node = shell.render("/");
        let handle =
            leptos::mount::mount_to(host_element(), move || render::node_view(node.clone()));
        drop(handle);
    }
}
