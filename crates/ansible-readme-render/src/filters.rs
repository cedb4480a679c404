//! MiniJinja filters for role documentation.
//!
//! - `listify` - Render a sequence as a Markdown bullet list, or a scalar as inline code
//! - `quicklistify` - Render a mapping's keys as comma-joined anchor links
//!
//! ```jinja
//! Variables: {{ defaults | quicklistify }}
//!
//! Default: {{ value | listify }}
//! ```

use minijinja::value::ValueKind;
use minijinja::{Environment, Error, Value};

/// Registers the documentation filters on a MiniJinja environment.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("listify", listify);
    env.add_filter("quicklistify", quicklistify);
}

/// Turns a sequence into an indented Markdown list, one inline-code item per line.
///
/// The list starts on a new line so it can follow a label. Anything that is
/// not a sequence is rendered as a single inline-code span.
pub fn listify(value: Value) -> Result<String, Error> {
    if value.kind() != ValueKind::Seq {
        return Ok(format!("``{}``", value));
    }

    let items: Vec<String> = value
        .try_iter()?
        .map(|item| format!("  * ``{}``", item))
        .collect();
    Ok(format!("\n{}", items.join("\n")))
}

/// Links every key of a mapping to its same-named anchor: `[key](#key), ...`.
pub fn quicklistify(value: Value) -> Result<String, Error> {
    if value.is_undefined() || value.is_none() {
        return Ok(String::new());
    }

    let links: Vec<String> = value
        .try_iter()?
        .map(|key| format!("[{key}](#{key})"))
        .collect();
    Ok(links.join(", "))
}
