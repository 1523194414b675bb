//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! navigation/page inventory on the host.

/// Pages the navigation bar links to. The catch-all view is reachable only by
/// typing an unknown URL, so it is not part of the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    Home,
    Nestable,
    NestableNested,
}

impl AppPage {
    pub fn label(self) -> &'static str {
        match self {
            AppPage::Home => "Home",
            AppPage::Nestable => "Nestable",
            AppPage::NestableNested => "Nested",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            AppPage::Home => "/",
            AppPage::Nestable => "/nestable",
            AppPage::NestableNested => "/nestable/nested",
        }
    }

    pub fn all() -> &'static [AppPage] {
        &[AppPage::Home, AppPage::Nestable, AppPage::NestableNested]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_inventory_is_stable() {
        let all = AppPage::all();
        assert_eq!(all.len(), 3);

        let mut paths: Vec<&'static str> = all.iter().copied().map(AppPage::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), 3);

        for page in all {
            assert!(page.path().starts_with('/'));
            assert!(!page.label().trim().is_empty());
        }
    }

    #[test]
    fn every_page_resolves_in_the_routed_shell() {
        let shell = envshell::shell::AppShell::routed(envshell::config::EnvConfig::new());
        for page in AppPage::all() {
            assert!(
                !shell.render(page.path()).is_empty(),
                "no view for {}",
                page.path()
            );
        }
    }
}
