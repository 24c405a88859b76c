//! Rendering UDF metadata into Sphinx `py function` markup.
//!
//! The produced tree mirrors what Sphinx emits for a documented Python
//! function so the theme's CSS (`sig-param`, `sig-name descname`,
//! `field-list simple`, ...) applies unchanged.

use crate::html::{Node, Props, el, text};
use crate::types::{Parameter, ProjectId, ProjectUdfs, Udf};

/// Id of the section every rendered project is appended to.
pub const SECTION_ID: &str = "udfs";

const PERMALINK: &str = "¶";

/// Anchor id of one UDF: `PROJECT:{id}_FUNCTION:{NAME}`.
pub fn function_anchor(project_id: &ProjectId, name: &str) -> String {
    format!("PROJECT:{}_FUNCTION:{}", project_id, name.to_uppercase())
}

/// Anchor id of a project heading: `PROJECT_{id}`.
pub fn project_anchor(project_id: &ProjectId) -> String {
    format!("PROJECT_{}", project_id)
}

fn header_link(target: &str) -> Node {
    el(
        "a",
        Props::new()
            .class("headerLink")
            .href(format!("#{}", target))
            .text(PERMALINK),
        [],
    )
}

/// Split `s` on newlines into text nodes separated by `<br>`.
fn lines(s: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    for (i, line) in s.split('\n').enumerate() {
        if i > 0 {
            nodes.push(el("br", Props::new(), []));
        }
        nodes.push(text(line.trim_end_matches('\r')));
    }
    nodes
}

fn span(class: Option<&str>, content: &str) -> Node {
    let props = match class {
        Some(class) => Props::new().class(class),
        None => Props::new(),
    };
    el("span", props.text(content), [])
}

/// Render the `<dt>` signature line of a UDF.
///
/// Optional parameters are written as `[, name]`; required ones are
/// comma-separated among themselves.
pub fn render_signature(udf: &Udf, project_id: &ProjectId) -> Node {
    let mut params = Vec::new();
    let mut first = true;

    for param in &udf.ordered_function_params {
        let name = el("em", Props::new().class("sig-param").text(&param.name), []);
        if param.is_optional {
            params.push(span(Some("optional"), "["));
            params.push(span(None, ", "));
            params.push(name);
            params.push(span(Some("optional"), "]"));
        } else {
            if first {
                first = false;
            } else {
                params.push(span(None, ", "));
            }
            params.push(name);
        }
    }

    let id = function_anchor(project_id, &udf.name);
    let prefix = udf
        .module_name
        .as_deref()
        .map(|m| format!("{}.", m.to_uppercase()))
        .unwrap_or_default();

    let mut children = vec![
        el(
            "code",
            Props::new()
                .class("sig-name descname")
                .text(format!("{}{}", prefix, udf.name.to_uppercase())),
            [],
        ),
        span(Some("sig-paren"), "("),
    ];
    children.extend(params);
    children.push(span(Some("sig-paren"), ")"));
    children.push(header_link(&id));

    el("dt", Props::new().id(id), children)
}

/// Render one `<li>` per parameter: `**name** - (data_type) description`.
pub fn render_params(params: &[Parameter]) -> Vec<Node> {
    params
        .iter()
        .map(|p| {
            let mut line = vec![
                el("strong", Props::new().text(&p.name), []),
                text(format!(" - ({}) ", p.data_type)),
            ];
            line.extend(lines(&p.description));
            el("li", Props::new(), [el("p", Props::new(), line)])
        })
        .collect()
}

/// Render the full `dl.py.function` definition block of a UDF.
pub fn render_udf(udf: &Udf, project_id: &ProjectId) -> Node {
    let fields = el(
        "dl",
        Props::new().class("field-list simple"),
        [
            el("dt", Props::new().class("field-odd").text("Parameters"), []),
            el(
                "dd",
                Props::new().class("field-odd"),
                [el(
                    "ul",
                    Props::new().class("simple"),
                    render_params(&udf.ordered_function_params),
                )],
            ),
            el("dt", Props::new().class("field-even").text("Return type"), []),
            el(
                "dd",
                Props::new().class("field-even"),
                [el("b", Props::new().text("Boolean"), [])],
            ),
        ],
    );

    el(
        "dl",
        Props::new().class("py function"),
        [
            render_signature(udf, project_id),
            el(
                "dd",
                Props::new(),
                [el("p", Props::new(), lines(&udf.description)), fields],
            ),
        ],
    )
}

/// Render a project heading followed by one definition block per UDF.
pub fn render_project(entry: &ProjectUdfs) -> Vec<Node> {
    let id = &entry.project.id;
    let anchor = project_anchor(id);

    let heading = el(
        "h2",
        Props::new()
            .id(anchor.clone())
            .text(format!("Project {} UDFs", id)),
        [header_link(&anchor)],
    );

    std::iter::once(heading)
        .chain(entry.udfs.iter().map(|udf| render_udf(udf, id)))
        .collect()
}

/// Render the whole `div.section#udfs` for the given projects.
pub fn render_section(entries: &[ProjectUdfs]) -> Node {
    let heading = el("h1", Props::new().text("UDFs"), [header_link(SECTION_ID)]);

    let children = std::iter::once(heading).chain(entries.iter().flat_map(render_project));

    el("div", Props::new().class("section").id(SECTION_ID), children)
}
