//! Server-rendered pages.
//!
//! Templates are compiled into the binary and share `layout.html`.

use minijinja::{Environment, Value};

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("_errors.html", include_str!("../../templates/_errors.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("about.html", include_str!("../../templates/about.html")),
    ("contact.html", include_str!("../../templates/contact.html")),
    ("detail.html", include_str!("../../templates/detail.html")),
    ("add_contact.html", include_str!("../../templates/add_contact.html")),
    ("edit_contact.html", include_str!("../../templates/edit_contact.html")),
];

/// Percent-encode a value for use as one URL path segment.
fn path_segment(value: String) -> String {
    urlencoding::encode(&value).into_owned()
}

/// The template environment used by every handler.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Load all templates, failing on the first one that does not parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_filter("path_segment", path_segment);

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    /// Render `name` with `ctx`.
    pub fn render(&self, name: &str, ctx: Value) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

impl std::fmt::Debug for Views {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Views")
            .field("templates", &TEMPLATES.len())
            .finish()
    }
}
