//! Templates and standards compiled into the binary.
//!
//! Used whenever no template or specs directory is configured, so an
//! installed `sola` works without the source tree next to it. A configured
//! directory always wins over these.

use sola_core::domain::Standards;

use crate::template_store::InMemoryStore;

/// `(name, content)` for every template of the standard layout.
pub const BUILTIN_TEMPLATES: [(&str, &str); 7] = [
    ("Makefile.j2", include_str!("../../../templates/Makefile.j2")),
    ("README.md.j2", include_str!("../../../templates/README.md.j2")),
    ("pyproject.toml.j2", include_str!("../../../templates/pyproject.toml.j2")),
    ("main.py.j2", include_str!("../../../templates/main.py.j2")),
    ("health_router.py.j2", include_str!("../../../templates/health_router.py.j2")),
    ("Dockerfile.j2", include_str!("../../../templates/Dockerfile.j2")),
    ("docker-compose.yml.j2", include_str!("../../../templates/docker-compose.yml.j2")),
];

const ARCHITECTURE: &str = include_str!("../../../specs/ARCHITECTURE.md");
const AI_ENGINEERING: &str = include_str!("../../../specs/AI_ENGINEERING.md");

/// A store holding [`BUILTIN_TEMPLATES`].
pub fn builtin_store() -> InMemoryStore {
    BUILTIN_TEMPLATES
        .into_iter()
        .fold(InMemoryStore::new(), |store, (name, content)| {
            store.with_template(name, content)
        })
}

/// The bundled `ARCHITECTURE.md` and `AI_ENGINEERING.md`.
pub fn builtin_standards() -> Standards {
    Standards::new(ARCHITECTURE, AI_ENGINEERING)
}
