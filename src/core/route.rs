//! Ordered route matching.
//!
//! A [`RouteTable`] is an ordered list of [`Route`] entries evaluated against
//! the current location string. The first entry whose pattern matches wins;
//! declaration order is the only priority. Matching is a pure function of
//! (table, location); navigation state lives outside this module.

/// A literal path template plus an exactness flag.
///
/// Exact patterns match by full string equality. Non-exact patterns match
/// segment-aligned prefixes: `/nestable` matches `/nestable` and
/// `/nestable/nested`, but not `/nestablex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    path: String,
    exact: bool,
}

impl PathPattern {
    /// A pattern requiring full path equality.
    pub fn exact(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            exact: true,
        }
    }

    /// A pattern matching the path itself and any sub-path under it.
    pub fn prefix(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            exact: false,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn matches(&self, location: &str) -> bool {
        if self.exact {
            return location == self.path;
        }

        let Some(rest) = location.strip_prefix(self.path.as_str()) else {
            return false;
        };

        // Segment alignment: "/nest" must not claim "/nestable". A pattern
        // that already ends in '/' (the root pattern) accepts any remainder.
        rest.is_empty() || rest.starts_with('/') || self.path.ends_with('/')
    }
}

/// One entry of a route table: a pattern bound to a view payload.
///
/// An entry without a pattern is the fallback; it matches any location and is
/// meant to be declared last as the catch-all.
#[derive(Debug, Clone)]
pub struct Route<V> {
    pattern: Option<PathPattern>,
    view: V,
}

impl<V> Route<V> {
    pub fn new(pattern: PathPattern, view: V) -> Self {
        Self {
            pattern: Some(pattern),
            view,
        }
    }

    pub fn fallback(view: V) -> Self {
        Self {
            pattern: None,
            view,
        }
    }

    pub fn pattern(&self) -> Option<&PathPattern> {
        self.pattern.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn matches(&self, location: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.matches(location),
            None => true,
        }
    }
}

/// An ordered list of routes with first-match-wins resolution.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    entries: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry bound to `pattern`.
    pub fn route(mut self, pattern: PathPattern, view: V) -> Self {
        self.entries.push(Route::new(pattern, view));
        self
    }

    /// Append the catch-all entry. Anything declared after it is unreachable.
    pub fn fallback(mut self, view: V) -> Self {
        self.entries.push(Route::fallback(view));
        self
    }

    pub fn entries(&self) -> &[Route<V>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `location` to the view of the first matching entry.
    ///
    /// Returns `None` when nothing matches and no fallback is declared; the
    /// caller renders nothing in that case, it is not an error.
    pub fn resolve(&self, location: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|route| route.matches(location))
            .map(Route::view)
    }
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&'static str, bool, &'static str)]) -> RouteTable<&'static str> {
        let mut t = RouteTable::new();
        for &(path, exact, view) in entries {
            let pattern = if exact {
                PathPattern::exact(path)
            } else {
                PathPattern::prefix(path)
            };
            t = t.route(pattern, view);
        }
        t
    }

    #[test]
    fn exact_pattern_requires_full_equality() {
        let p = PathPattern::exact("/about");
        assert!(p.matches("/about"));
        assert!(!p.matches("/about/team"));
        assert!(!p.matches("/about/"));
        assert!(!p.matches("/abou"));
    }

    #[test]
    fn prefix_pattern_is_segment_aligned() {
        let p = PathPattern::prefix("/nestable");
        assert!(p.matches("/nestable"));
        assert!(p.matches("/nestable/nested"));
        assert!(!p.matches("/nestablex"));
        assert!(!p.matches("/nest"));
    }

    #[test]
    fn root_prefix_matches_everything() {
        let p = PathPattern::prefix("/");
        assert!(p.matches("/"));
        assert!(p.matches("/anything"));
        assert!(p.matches("/deeply/nested/path"));

        let root_exact = PathPattern::exact("/");
        assert!(root_exact.matches("/"));
        assert!(!root_exact.matches("/anything"));
    }

    #[test]
    fn first_match_wins_in_declaration_order() {
        // Broad prefix declared first shadows the later exact entry.
        let shadowing = table(&[("/", false, "home"), ("/about", true, "about")]);
        assert_eq!(shadowing.resolve("/about"), Some(&"home"));

        // Exact entry declared first is reachable.
        let ordered = table(&[("/about", true, "about"), ("/", false, "home")]);
        assert_eq!(ordered.resolve("/about"), Some(&"about"));
        assert_eq!(ordered.resolve("/"), Some(&"home"));
        assert_eq!(ordered.resolve("/other"), Some(&"home"));
    }

    #[test]
    fn fallback_catches_everything_unmatched() {
        let t = table(&[("/", true, "home"), ("/nestable", false, "nestable")])
            .fallback("not found");
        assert_eq!(t.resolve("/"), Some(&"home"));
        assert_eq!(t.resolve("/nestable/deep"), Some(&"nestable"));
        assert_eq!(t.resolve("/missing"), Some(&"not found"));
        assert_eq!(t.resolve(""), Some(&"not found"));
    }

    #[test]
    fn no_match_without_fallback_resolves_to_none() {
        let t = table(&[("/", true, "home")]);
        assert_eq!(t.resolve("/missing"), None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let t = table(&[("/", true, "home"), ("/nestable", false, "nestable")])
            .fallback("not found");
        for location in ["/", "/nestable", "/nestable/nested", "/missing"] {
            assert_eq!(t.resolve(location), t.resolve(location));
        }
    }

    #[test]
    fn empty_table_matches_nothing() {
        let t: RouteTable<&str> = RouteTable::new();
        assert!(t.is_empty());
        assert_eq!(t.resolve("/"), None);
    }
}
