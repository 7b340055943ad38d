//! Template sources compiled into the binary
//!
//! Paths are relative to this file. Every identifier used by a blueprint in
//! `template.yaml` must have an entry in [`TEMPLATES`].

/// Bundle layout shared by both project variants
pub const ROOT_MANIFEST: &str = include_str!("../../templates/template.yaml");

/// Template identifier and body, one per generated file
pub const TEMPLATES: &[(&str, &str)] = &[
    ("main.go", include_str!("../../templates/go/main.go.tmpl")),
    (
        "apis/router.go",
        include_str!("../../templates/go/apis/router.go.tmpl"),
    ),
    (
        "apis/common/handler.go",
        include_str!("../../templates/go/apis/common/handler.go.tmpl"),
    ),
    (
        "cmds/root.go",
        include_str!("../../templates/go/cmds/root.go.tmpl"),
    ),
    (
        "cmds/api/api.go",
        include_str!("../../templates/go/cmds/api/api.go.tmpl"),
    ),
    (
        "cmds/db/db.go",
        include_str!("../../templates/go/cmds/db/db.go.tmpl"),
    ),
    (
        "configs/config.go",
        include_str!("../../templates/go/configs/config.go.tmpl"),
    ),
    (
        "configs/env.go",
        include_str!("../../templates/go/configs/env.go.tmpl"),
    ),
    (
        "configs/database.json",
        include_str!("../../templates/go/configs/database.json.tmpl"),
    ),
    (
        "configs/config.json",
        include_str!("../../templates/go/configs/config.json.tmpl"),
    ),
    ("dbs/dbs.go", include_str!("../../templates/go/dbs/dbs.go.tmpl")),
    (
        "dbs/models/model.go",
        include_str!("../../templates/go/dbs/models/model.go.tmpl"),
    ),
    (
        "services/common/logs/common.go",
        include_str!("../../templates/go/services/common/logs/common.go.tmpl"),
    ),
    (
        "services/common/logs/logs.go",
        include_str!("../../templates/go/services/common/logs/logs.go.tmpl"),
    ),
    (
        "utils/minireq.go",
        include_str!("../../templates/go/utils/minireq.go.tmpl"),
    ),
    (
        "utils/tools.go",
        include_str!("../../templates/go/utils/tools.go.tmpl"),
    ),
    (
        "utils/version.go",
        include_str!("../../templates/go/utils/version.go.tmpl"),
    ),
];

/// Body of an embedded template, if one is registered under `id`
pub fn template_source(id: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, body)| *body)
}
