//! Navigation graph.
//!
//! Routes are a tagged enum; the detail route carries the place name as a
//! typed payload. Paths use the same identifiers as the route table
//! (`inicio`, `details/{place}`, ...) and escape `/` and `%` inside the
//! payload so every route survives a path round-trip.

use anyhow::{bail, Result};
use std::fmt;

/// A navigation destination
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Splash,
    Login,
    SignUp,
    Home,
    Explore,
    Profile,
    Notifications,
    Review,
    EditProfile,
    Details { place: String },
}

/// Payload-free route discriminant, used to match back-stack entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Splash,
    Login,
    SignUp,
    Home,
    Explore,
    Profile,
    Notifications,
    Review,
    EditProfile,
    Details,
}

const DETAILS_PREFIX: &str = "details/";

/// Stands in for an empty place name. `escape_segment` never emits `%00`
/// otherwise, since every literal `%` becomes `%25`.
const EMPTY_SEGMENT: &str = "%00";

impl Route {
    pub fn details(place: impl Into<String>) -> Self {
        Route::Details {
            place: place.into(),
        }
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Splash => RouteKind::Splash,
            Route::Login => RouteKind::Login,
            Route::SignUp => RouteKind::SignUp,
            Route::Home => RouteKind::Home,
            Route::Explore => RouteKind::Explore,
            Route::Profile => RouteKind::Profile,
            Route::Notifications => RouteKind::Notifications,
            Route::Review => RouteKind::Review,
            Route::EditProfile => RouteKind::EditProfile,
            Route::Details { .. } => RouteKind::Details,
        }
    }

    /// Path identifier for this route
    pub fn path(&self) -> String {
        match self {
            Route::Details { place } => format!("{}{}", DETAILS_PREFIX, escape_segment(place)),
            other => other.kind().pattern().to_string(),
        }
    }

    /// Parse a path identifier back into a route
    ///
    /// Surrounding whitespace is ignored for the fixed identifiers. A detail
    /// segment is taken exactly as written, spaces included.
    pub fn parse(path: &str) -> Result<Route> {
        if let Some(segment) = path.trim_start().strip_prefix(DETAILS_PREFIX) {
            if segment.is_empty() {
                bail!("Route 'details' needs a place, e.g. details/Cartagena");
            }
            if segment.contains('/') {
                bail!("Route '{}' has an unescaped '/' in its place name", path);
            }
            return Ok(Route::details(unescape_segment(segment)));
        }

        Ok(match path.trim() {
            "inicio" | "splash" => Route::Splash,
            "login" => Route::Login,
            "signup" => Route::SignUp,
            "home" => Route::Home,
            "explore" => Route::Explore,
            "profile" => Route::Profile,
            "notifications" => Route::Notifications,
            "review" => Route::Review,
            "edit_profile" => Route::EditProfile,
            other => bail!("Unknown route '{}'. Run `condor routes` to list them", other),
        })
    }

    /// Routes that show the bottom navigation bar
    pub fn shows_bottom_bar(&self) -> bool {
        matches!(
            self,
            Route::Home | Route::Explore | Route::Profile | Route::Notifications
        )
    }

    /// Screen title for headers and logs
    pub fn title(&self) -> String {
        match self {
            Route::Splash => "Inicio".to_string(),
            Route::Login => "Iniciar sesión".to_string(),
            Route::SignUp => "Registro".to_string(),
            Route::Home => "Home".to_string(),
            Route::Explore => "Explorar".to_string(),
            Route::Profile => "Perfil".to_string(),
            Route::Notifications => "Notificaciones".to_string(),
            Route::Review => "Reseña".to_string(),
            Route::EditProfile => "Editar perfil".to_string(),
            Route::Details { place } => place.clone(),
        }
    }

    /// The static route table: path pattern and what the screen shows
    pub fn table() -> Vec<(&'static str, &'static str)> {
        RouteKind::ALL
            .iter()
            .map(|kind| (kind.pattern(), kind.description()))
            .collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl RouteKind {
    pub const ALL: [RouteKind; 10] = [
        RouteKind::Splash,
        RouteKind::Login,
        RouteKind::SignUp,
        RouteKind::Home,
        RouteKind::Explore,
        RouteKind::Profile,
        RouteKind::Notifications,
        RouteKind::Review,
        RouteKind::EditProfile,
        RouteKind::Details,
    ];

    pub fn pattern(&self) -> &'static str {
        match self {
            RouteKind::Splash => "inicio",
            RouteKind::Login => "login",
            RouteKind::SignUp => "signup",
            RouteKind::Home => "home",
            RouteKind::Explore => "explore",
            RouteKind::Profile => "profile",
            RouteKind::Notifications => "notifications",
            RouteKind::Review => "review",
            RouteKind::EditProfile => "edit_profile",
            RouteKind::Details => "details/{place}",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RouteKind::Splash => "Splash screen with the start button",
            RouteKind::Login => "Email and password sign in",
            RouteKind::SignUp => "Create an account",
            RouteKind::Home => "Feed of traveller posts",
            RouteKind::Explore => "Map, categories and recommended places",
            RouteKind::Profile => "Traveller profile and photo grid",
            RouteKind::Notifications => "Recent activity",
            RouteKind::Review => "Rate and comment on an adventure",
            RouteKind::EditProfile => "Edit username, name and bio",
            RouteKind::Details => "Place details and community reviews",
        }
    }
}

fn escape_segment(segment: &str) -> String {
    if segment.is_empty() {
        return EMPTY_SEGMENT.to_string();
    }
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        match c {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            other => out.push(other),
        }
    }
    out
}

/// Reverse of `escape_segment`; unknown `%` sequences are kept verbatim
fn unescape_segment(segment: &str) -> String {
    if segment == EMPTY_SEGMENT {
        return String::new();
    }
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let code = tail.get(..3).map(str::to_ascii_uppercase);
        match code.as_deref() {
            Some("%25") => {
                out.push('%');
                rest = &tail[3..];
            }
            Some("%2F") => {
                out.push('/');
                rest = &tail[3..];
            }
            _ => {
                out.push('%');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Options for a navigation request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Pop entries above the most recent entry of this kind first.
    /// With `inclusive`, that entry is popped too.
    pub pop_up_to: Option<(RouteKind, bool)>,
    /// Do not push a route equal to the current top entry
    pub single_top: bool,
}

impl NavOptions {
    /// Plain push
    pub fn push() -> Self {
        Self::default()
    }

    /// Replace everything up to and including `kind`, e.g. leaving login
    pub fn replacing(kind: RouteKind) -> Self {
        Self {
            pop_up_to: Some((kind, true)),
            single_top: false,
        }
    }

    /// Bottom bar switching: keep Home at the root and never stack a tab twice
    pub fn bottom_bar() -> Self {
        Self {
            pop_up_to: Some((RouteKind::Home, false)),
            single_top: true,
        }
    }
}

/// Back-stack of visited routes. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Number of entries including the current one
    pub fn depth(&self) -> usize {
        self.history.len() + 1
    }

    /// Entries from the root to the current route
    pub fn entries(&self) -> Vec<&Route> {
        self.history.iter().chain(std::iter::once(&self.current)).collect()
    }

    /// Navigate to `route`. Returns true when a new entry was pushed and
    /// false when single-top kept the existing top entry.
    pub fn navigate(&mut self, route: Route, opts: NavOptions) -> bool {
        let mut entries = std::mem::take(&mut self.history);
        entries.push(std::mem::replace(&mut self.current, Route::Splash));

        if let Some((kind, inclusive)) = opts.pop_up_to {
            if let Some(index) = entries.iter().rposition(|r| r.kind() == kind) {
                entries.truncate(if inclusive { index } else { index + 1 });
            }
        }

        let kept = if opts.single_top && entries.last() == Some(&route) {
            entries.pop()
        } else {
            None
        };
        let pushed = kept.is_none();
        self.current = kept.unwrap_or(route);
        self.history = entries;
        pushed
    }

    /// Go back one entry. Returns false at the root.
    pub fn pop(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths_round_trip() {
        for kind in RouteKind::ALL {
            if kind == RouteKind::Details {
                continue;
            }
            let route = Route::parse(kind.pattern()).unwrap();
            assert_eq!(route.kind(), kind);
            assert_eq!(route.path(), kind.pattern());
        }
    }

    #[test]
    fn test_details_path_interpolates_place() {
        let route = Route::details("Valle del Cocora");
        assert_eq!(route.path(), "details/Valle del Cocora");
        assert_eq!(Route::parse("details/Valle del Cocora").unwrap(), route);
    }

    #[test]
    fn test_details_payload_with_separator_round_trips() {
        let route = Route::details("Bogotá/Usaquén 100%");
        let path = route.path();
        assert_eq!(path, "details/Bogotá%2FUsaquén 100%25");
        assert_eq!(Route::parse(&path).unwrap(), route);
    }

    #[test]
    fn test_details_payload_keeps_whitespace() {
        for place in ["Valle del Cocora ", "  Guatapé", " ", "\tSalento\n"] {
            let route = Route::details(place);
            assert_eq!(Route::parse(&route.path()).unwrap(), route, "{:?}", place);
        }
        assert_eq!(Route::parse("  home \n").unwrap(), Route::Home);
    }

    #[test]
    fn test_empty_place_round_trips() {
        let route = Route::details("");
        assert_eq!(route.path(), "details/%00");
        assert_eq!(Route::parse(&route.path()).unwrap(), route);

        // A literal "%00" is escaped and stays distinct from the empty place
        let literal = Route::details("%00");
        assert_eq!(literal.path(), "details/%2500");
        assert_eq!(Route::parse(&literal.path()).unwrap(), literal);
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert!(Route::parse("settings").is_err());
        assert!(Route::parse("details/").is_err());
        assert!(Route::parse("details/a/b").is_err());
    }

    #[test]
    fn test_splash_alias() {
        assert_eq!(Route::parse("splash").unwrap(), Route::Splash);
    }

    #[test]
    fn test_unescape_keeps_stray_percent() {
        assert_eq!(unescape_segment("50%off"), "50%off");
        assert_eq!(unescape_segment("a%2fb"), "a/b");
    }

    #[test]
    fn test_push_and_pop() {
        let mut nav = Navigator::new(Route::Home);
        assert!(nav.navigate(Route::details("Cartagena"), NavOptions::push()));
        assert_eq!(nav.depth(), 2);
        assert!(nav.pop());
        assert_eq!(nav.current(), &Route::Home);
        assert!(!nav.pop());
        assert_eq!(nav.current(), &Route::Home);
    }

    #[test]
    fn test_replacing_login_removes_it_from_history() {
        let mut nav = Navigator::new(Route::Splash);
        nav.navigate(Route::Login, NavOptions::push());
        nav.navigate(Route::Home, NavOptions::replacing(RouteKind::Login));
        assert_eq!(nav.entries(), vec![&Route::Splash, &Route::Home]);
    }

    #[test]
    fn test_bottom_bar_pops_to_home_and_is_single_top() {
        let mut nav = Navigator::new(Route::Home);
        nav.navigate(Route::Explore, NavOptions::bottom_bar());
        nav.navigate(Route::Profile, NavOptions::bottom_bar());
        assert_eq!(nav.entries(), vec![&Route::Home, &Route::Profile]);

        assert!(!nav.navigate(Route::Home, NavOptions::bottom_bar()));
        assert_eq!(nav.entries(), vec![&Route::Home]);
    }

    #[test]
    fn test_pop_up_to_missing_kind_just_pushes() {
        let mut nav = Navigator::new(Route::Splash);
        nav.navigate(Route::Explore, NavOptions::bottom_bar());
        assert_eq!(nav.entries(), vec![&Route::Splash, &Route::Explore]);
    }

    #[test]
    fn test_bottom_bar_routes() {
        assert!(Route::Home.shows_bottom_bar());
        assert!(Route::Notifications.shows_bottom_bar());
        assert!(!Route::details("x").shows_bottom_bar());
        assert!(!Route::Login.shows_bottom_bar());
    }
}
