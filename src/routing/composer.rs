//! URL composition from routes and controller/action triples.
//!
//! # Responsibilities
//! - Join module, controller, action and params onto the base URL
//! - Expand named route templates with caller-supplied values
//!
//! # Design Decisions
//! - Straight string concatenation; no slash normalization
//! - Route tokens are expanded in a single pass, so replacement values are
//!   never re-scanned for tokens
//! - Metadata stored on the route entry is not read back here; only the
//!   caller's arguments take part in substitution

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::routing::table::{RouteError, RouteTable};

/// Tokens recognized inside a route path template.
pub const ROUTE_TOKENS: [&str; 5] = [":language", ":module", ":controller", ":action", ":params"];

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = ROUTE_TOKENS
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).expect("route token pattern is valid")
    })
}

/// Values substituted into a route template.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteArgs<'a> {
    pub controller: Option<&'a str>,
    pub action: Option<&'a str>,
    pub params: &'a [&'a str],
    pub module: Option<&'a str>,
    pub language: Option<&'a str>,
}

impl RouteArgs<'_> {
    fn value_for(&self, token: &str) -> String {
        match token {
            ":language" => self.language.unwrap_or_default().to_string(),
            ":module" => self.module.unwrap_or_default().to_string(),
            ":controller" => self.controller.unwrap_or_default().to_string(),
            ":action" => self.action.unwrap_or_default().to_string(),
            ":params" => self.params.join("/"),
            _ => String::new(),
        }
    }
}

/// Expand every route token in `template` in one pass.
///
/// Tokens missing from the template are ignored; tokens without a value
/// become empty strings.
pub fn expand_template(template: &str, args: &RouteArgs<'_>) -> String {
    token_pattern()
        .replace_all(template, |caps: &Captures<'_>| args.value_for(&caps[0]))
        .into_owned()
}

/// Builds absolute URLs against a base URL and a route table.
#[derive(Debug, Clone, Copy)]
pub struct UrlMaker<'a> {
    base_url: &'a str,
    routes: &'a RouteTable,
}

impl<'a> UrlMaker<'a> {
    pub fn new(base_url: &'a str, routes: &'a RouteTable) -> Self {
        Self { base_url, routes }
    }

    /// The base URL every composed URL starts with.
    pub fn base_url(&self) -> &str {
        self.base_url
    }

    /// `base + [module/] + controller/ + [action/] + params joined by "/"`.
    ///
    /// Empty optional segments count as absent.
    pub fn to_action(
        &self,
        controller: &str,
        action: Option<&str>,
        params: &[&str],
        module: Option<&str>,
    ) -> String {
        let mut url = String::from(self.base_url);
        if let Some(module) = present(module) {
            url.push_str(module);
            url.push('/');
        }
        self.push_tail(&mut url, controller, action, params);
        tracing::trace!(%url, "Composed action URL");
        url
    }

    /// Same as [`to_action`](Self::to_action) with the module always present.
    pub fn to_module_action(
        &self,
        module: &str,
        controller: &str,
        action: Option<&str>,
        params: &[&str],
    ) -> String {
        let mut url = String::from(self.base_url);
        url.push_str(module);
        url.push('/');
        self.push_tail(&mut url, controller, action, params);
        tracing::trace!(%url, "Composed module action URL");
        url
    }

    /// Expand the named route's template with `args` and prepend the base URL.
    pub fn to_route(&self, name: &str, args: RouteArgs<'_>) -> Result<String, RouteError> {
        let route = self.routes.route(name)?;
        let url = format!("{}{}", self.base_url, expand_template(&route.path, &args));
        tracing::trace!(route = %name, %url, "Composed route URL");
        Ok(url)
    }

    fn push_tail(&self, url: &mut String, controller: &str, action: Option<&str>, params: &[&str]) {
        url.push_str(controller);
        url.push('/');
        if let Some(action) = present(action) {
            url.push_str(action);
            url.push('/');
        }
        url.push_str(&params.join("/"));
    }
}

fn present(segment: Option<&str>) -> Option<&str> {
    segment.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::RouteEntry;

    const BASE: &str = "http://h/";

    #[test]
    fn test_to_action_segment_order() {
        let routes = RouteTable::new();
        let maker = UrlMaker::new(BASE, &routes);

        assert_eq!(
            maker.to_action("users", Some("edit"), &["7"], Some("admin")),
            "http://h/admin/users/edit/7"
        );
    }

    #[test]
    fn test_to_action_optional_segments() {
        let routes = RouteTable::new();
        let maker = UrlMaker::new(BASE, &routes);

        assert_eq!(maker.to_action("users", None, &[], None), "http://h/users/");
        assert_eq!(maker.to_action("users", Some("list"), &[], None), "http://h/users/list/");
        // No action: params follow the controller's slash directly
        assert_eq!(maker.to_action("users", None, &["7", "8"], None), "http://h/users/7/8");
        assert_eq!(maker.to_action("users", Some(""), &[], Some("")), "http://h/users/");
    }

    #[test]
    fn test_no_slash_normalization() {
        let routes = RouteTable::new();
        let maker = UrlMaker::new("http://h", &routes);
        assert_eq!(maker.to_action("users", None, &[], None), "http://husers/");

        let maker = UrlMaker::new("http://h//", &routes);
        assert_eq!(maker.to_action("", None, &[], None), "http://h///");
    }

    #[test]
    fn test_to_module_action() {
        let routes = RouteTable::new();
        let maker = UrlMaker::new(BASE, &routes);

        assert_eq!(
            maker.to_module_action("admin", "users", Some("edit"), &["7"]),
            "http://h/admin/users/edit/7"
        );
        // Module is always written, even when empty
        assert_eq!(maker.to_module_action("", "users", None, &[]), "http://h//users/");
    }

    #[test]
    fn test_to_route_follows_template_order() {
        let mut routes = RouteTable::new();
        routes.add_path("profile", ":module/:controller/:action/:params");
        routes.add_path("localized", "/:language/:action/:controller");
        let maker = UrlMaker::new(BASE, &routes);

        let args = RouteArgs {
            controller: Some("users"),
            action: Some("view"),
            params: &["42"],
            module: Some("app"),
            language: Some("en"),
        };
        assert_eq!(
            maker.to_route("profile", args).unwrap(),
            "http://h/app/users/view/42"
        );
        assert_eq!(
            maker.to_route("localized", args).unwrap(),
            "http://h/en/view/users"
        );
    }

    #[test]
    fn test_to_route_missing_values_are_empty() {
        let mut routes = RouteTable::new();
        routes.add_path("r", ":language/:controller/:params");
        let maker = UrlMaker::new(BASE, &routes);

        let url = maker
            .to_route(
                "r",
                RouteArgs {
                    controller: Some("pages"),
                    ..RouteArgs::default()
                },
            )
            .unwrap();
        assert_eq!(url, "http://h//pages/");
    }

    #[test]
    fn test_to_route_ignores_entry_metadata() {
        let mut routes = RouteTable::new();
        routes.add_route(
            "r",
            RouteEntry::new(":controller/:action")
                .with_controller("stored")
                .with_action("stored"),
        );
        let maker = UrlMaker::new(BASE, &routes);

        assert_eq!(maker.to_route("r", RouteArgs::default()).unwrap(), "http://h//");
    }

    #[test]
    fn test_to_route_single_pass() {
        let mut routes = RouteTable::new();
        routes.add_path("r", ":controller/:action");
        let maker = UrlMaker::new(BASE, &routes);

        let url = maker
            .to_route(
                "r",
                RouteArgs {
                    controller: Some(":action"),
                    action: Some(":params"),
                    params: &["never"],
                    ..RouteArgs::default()
                },
            )
            .unwrap();
        assert_eq!(url, "http://h/:action/:params");
    }

    #[test]
    fn test_to_route_literal_segments_kept() {
        let mut routes = RouteTable::new();
        routes.add_path("r", "/blog/:action/page-:params.html");
        let maker = UrlMaker::new(BASE, &routes);

        let url = maker
            .to_route(
                "r",
                RouteArgs {
                    action: Some("archive"),
                    params: &["2024", "03"],
                    ..RouteArgs::default()
                },
            )
            .unwrap();
        assert_eq!(url, "http://h/blog/archive/page-2024/03.html");
    }

    #[test]
    fn test_to_route_unknown_name() {
        let routes = RouteTable::new();
        let maker = UrlMaker::new(BASE, &routes);

        assert!(matches!(
            maker.to_route("missing", RouteArgs::default()),
            Err(RouteError::NotFound { name }) if name == "missing"
        ));
    }
}
