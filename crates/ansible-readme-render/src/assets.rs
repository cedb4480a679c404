//! Built-in README template.
//!
//! Used when no `--template` is given. Template variables:
//!
//! - `meta`: parsed `meta/main.yml`, always carrying `galaxy_info`
//! - `defaults`: parsed `defaults/main.yml`
//! - `docs`: parsed `docs/main.yml` (`docs.defaults.<name>.help` documents a variable)
//! - `extras.role_name`: the role directory name

/// Registration name of the built-in template.
pub const BUILTIN_TEMPLATE_NAME: &str = "readme.md.j2";

/// Built-in README template source.
pub const BUILTIN_TEMPLATE: &str = include_str!("../templates/readme.md.j2");
