//! # Route Table
//!
//! Static route descriptors and path matching.

use std::collections::BTreeMap;

/// Application views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Landing page with the latest posts
    Home,
    /// Post listing with search
    Posts,
    /// Single post with comments and likes
    PostDetail,
    /// Post editor
    NewPost,
    /// Category listing with post counts
    Categories,
    /// Posts of one category
    CategoryPosts,
    /// Downloadable resources
    Resources,
    /// Email/password and Google login
    Login,
    /// Account creation
    Signup,
    /// Own profile
    Profile,
    /// Author dashboard (own posts and resources)
    Dashboard,
    /// Contact form
    Contact,
}

impl View {
    pub fn all() -> &'static [View] {
        &[
            View::Home,
            View::Posts,
            View::PostDetail,
            View::NewPost,
            View::Categories,
            View::CategoryPosts,
            View::Resources,
            View::Login,
            View::Signup,
            View::Profile,
            View::Dashboard,
            View::Contact,
        ]
    }

    /// Page title
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Posts => "Posts",
            View::PostDetail => "Post",
            View::NewPost => "New Post",
            View::Categories => "Categories",
            View::CategoryPosts => "Category",
            View::Resources => "Resources",
            View::Login => "Log In",
            View::Signup => "Sign Up",
            View::Profile => "Profile",
            View::Dashboard => "Dashboard",
            View::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// Route descriptor: a path pattern, the view it renders and its access policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Pattern, e.g. `/posts/:id`
    pub path: String,
    pub view: View,
    pub requires_auth: bool,
    segments: Vec<Segment>,
}

impl Route {
    /// Public route
    pub fn new(path: &str, view: View) -> Self {
        let segments = split_path(path)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Static(segment.to_string()),
            })
            .collect();
        Self {
            path: path.to_string(),
            view,
            requires_auth: false,
            segments,
        }
    }

    /// Route that requires an authenticated session
    pub fn protected(path: &str, view: View) -> Self {
        Self {
            requires_auth: true,
            ..Self::new(path, view)
        }
    }

    pub fn is_home(&self) -> bool {
        self.segments.is_empty()
    }

    fn static_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Static(_)))
            .count()
    }

    /// Match a concrete path (already normalized into segments).
    fn match_segments(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }
        Some(params)
    }
}

/// A route matched against a concrete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    /// Concrete path, normalized
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn view(&self) -> View {
        self.route.view
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|segment| !segment.is_empty())
}

/// `/posts/42/?tab=comments` → `/posts/42`
pub fn normalize_path(path: &str) -> String {
    let joined = split_path(path).collect::<Vec<_>>().join("/");
    format!("/{}", joined)
}

/// Find the route for `path`. Static segments win over parameters; among
/// equally specific routes the first declared wins.
pub fn resolve(routes: &[Route], path: &str) -> Option<RouteMatch> {
    let parts: Vec<&str> = split_path(path).collect();

    let mut best: Option<(usize, &Route, BTreeMap<String, String>)> = None;
    for route in routes {
        if let Some(params) = route.match_segments(&parts) {
            let score = route.static_count();
            if best.as_ref().map_or(true, |(top, _, _)| score > *top) {
                best = Some((score, route, params));
            }
        }
    }

    best.map(|(_, route, params)| RouteMatch {
        route: route.clone(),
        path: normalize_path(path),
        params,
    })
}

/// Route table of the blog.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("/", View::Home),
        Route::new("/posts", View::Posts),
        Route::protected("/posts/new", View::NewPost),
        Route::new("/posts/:id", View::PostDetail),
        Route::new("/categories", View::Categories),
        Route::new("/categories/:slug", View::CategoryPosts),
        Route::new("/resources", View::Resources),
        Route::new("/login", View::Login),
        Route::new("/signup", View::Signup),
        Route::protected("/profile", View::Profile),
        Route::protected("/dashboard", View::Dashboard),
        Route::protected("/contact", View::Contact),
    ]
}
