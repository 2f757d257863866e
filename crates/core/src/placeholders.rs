//! Placeholder scanning and substitution for memorized commands.
//!
//! A command template may embed parameter markers of the form `{{name}}`.
//! [`get_placeholders`] extracts them left to right; [`render`] substitutes
//! user-supplied values according to per-placeholder [`RenderOpts`].

/// A parameter marker found in a command template.
///
/// `pattern` is the exact substring to replace, delimiters included, so for a
/// marker named `host` the pattern is `{{host}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub pattern: String,
}

/// Substitution behavior for a single placeholder position.
///
/// A non-optional placeholder with no value is left untouched in the output.
/// An optional placeholder with no value is removed, collapsing surrounding
/// spaces when the marker sits between two of them. A present value is
/// substituted as `prefix + value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOpts {
    pub optional: bool,
    pub prefix: String,
}

/// Extracts all placeholders from a template, in order of appearance.
///
/// The scan looks for `{{`, then accumulates every character up to the next
/// `}}` into the placeholder name. A `{{` seen while already inside a
/// placeholder is ordinary name text, a `}}` with no prior opener is ordinary
/// template text, and an unterminated `{{` yields nothing.
pub fn get_placeholders(template: &str) -> Vec<Placeholder> {
    let chars: Vec<char> = template.chars().collect();
    let mut placeholders = Vec::new();
    let mut inside = false;
    let mut name = String::new();

    let mut i = 0;
    while i < chars.len() {
        if inside {
            if chars[i] == '}' && chars.get(i + 1) == Some(&'}') {
                let pattern = format!("{{{{{name}}}}}");
                placeholders.push(Placeholder {
                    name: std::mem::take(&mut name),
                    pattern,
                });
                inside = false;
                i += 2;
                continue;
            }
            name.push(chars[i]);
        } else if chars[i] == '{' && chars.get(i + 1) == Some(&'{') {
            inside = true;
            i += 2;
            continue;
        }
        i += 1;
    }

    placeholders
}

/// Number of placeholders in a template.
pub fn count_placeholders(template: &str) -> usize {
    get_placeholders(template).len()
}

/// Substitutes a single placeholder in `original`.
///
/// All occurrences of the placeholder's pattern are replaced at once.
pub fn replace_placeholder(
    original: &str,
    placeholder: &Placeholder,
    value: &str,
    opts: &RenderOpts,
) -> String {
    let pattern = placeholder.pattern.as_str();

    if value.is_empty() {
        if !opts.optional {
            return original.to_string();
        }

        let spaced = format!(" {pattern} ");
        if original.contains(&spaced) {
            return original.replace(&spaced, " ");
        }
        return original.replace(pattern, "");
    }

    original.replace(pattern, &format!("{}{}", opts.prefix, value))
}

/// Renders a template by substituting every placeholder in order.
///
/// The i-th placeholder takes the i-th entry of `user_inputs` (empty string
/// when out of range) and the i-th entry of `opts` (default options when out
/// of range).
pub fn render(template: &str, user_inputs: &[String], opts: &[RenderOpts]) -> String {
    let default_opts = RenderOpts::default();
    let mut rendered = template.to_string();

    for (i, placeholder) in get_placeholders(template).iter().enumerate() {
        let value = user_inputs.get(i).map_or("", String::as_str);
        let placeholder_opts = opts.get(i).unwrap_or(&default_opts);
        rendered = replace_placeholder(&rendered, placeholder, value, placeholder_opts);
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(name: &str) -> Placeholder {
        Placeholder {
            name: name.to_string(),
            pattern: format!("{{{{{name}}}}}"),
        }
    }

    #[test]
    fn test_count_placeholders() {
        assert_eq!(count_placeholders("foo"), 0);
        assert_eq!(count_placeholders("foo {{bar}} baz"), 1);
        assert_eq!(count_placeholders("foo {{bar}} {{baz}}"), 2);
        assert_eq!(count_placeholders("{{foo}} {{bar}} {{baz}}"), 3);
        assert_eq!(count_placeholders("{{foo}} bar {{baz}}"), 2);
        assert_eq!(count_placeholders("{{foo}} bar {baz}}"), 1);
        assert_eq!(count_placeholders("}} bar {{baz}}"), 1);
        assert_eq!(count_placeholders("{{ bar {{baz}}"), 1);
        assert_eq!(count_placeholders("{ bar {{baz}}}"), 1);
        assert_eq!(count_placeholders("{foo} bar {baz}}"), 0);
        assert_eq!(count_placeholders("unterminated {{foo"), 0);
    }

    #[test]
    fn test_get_placeholders() {
        assert_eq!(get_placeholders("foo"), vec![]);
        assert_eq!(get_placeholders("foo {{bar}} baz"), vec![placeholder("bar")]);
        assert_eq!(
            get_placeholders("foo {{bar}} {{baz}}"),
            vec![placeholder("bar"), placeholder("baz")]
        );
        assert_eq!(
            get_placeholders("{{foo}} {{bar}} {{baz}}"),
            vec![placeholder("foo"), placeholder("bar"), placeholder("baz")]
        );
        assert_eq!(
            get_placeholders("{{foo}} bar {{baz}}"),
            vec![placeholder("foo"), placeholder("baz")]
        );
        assert_eq!(get_placeholders("{{foo}} bar {baz}}"), vec![placeholder("foo")]);
        assert_eq!(get_placeholders("}} bar {{baz}}"), vec![placeholder("baz")]);
        assert_eq!(get_placeholders("{ bar {{baz}}}"), vec![placeholder("baz")]);
        assert_eq!(get_placeholders("{foo} bar {baz}}"), vec![]);
    }

    #[test]
    fn test_get_placeholders_nested_opener_is_name_text() {
        // A second `{{` inside an open placeholder is ordinary name text.
        let placeholders = get_placeholders("{{ bar {{baz}}");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].name, " bar {{baz");
        assert_eq!(placeholders[0].pattern, "{{ bar {{baz}}");
    }

    #[test]
    fn test_replace_placeholder() {
        let cases: Vec<(&str, Placeholder, &str, RenderOpts, &str)> = vec![
            (
                "echo {{foo}}",
                placeholder("foo"),
                "baz",
                RenderOpts::default(),
                "echo baz",
            ),
            (
                "echo {{foo}} bar",
                placeholder("foo"),
                "baz",
                RenderOpts::default(),
                "echo baz bar",
            ),
            (
                "{{foo}} bar baz",
                placeholder("foo"),
                "foo",
                RenderOpts::default(),
                "foo bar baz",
            ),
            (
                "foo {{bar}} baz",
                placeholder("bar"),
                "",
                RenderOpts {
                    optional: true,
                    prefix: String::new(),
                },
                "foo baz",
            ),
            (
                "foo{{bar}} baz",
                placeholder("bar"),
                "",
                RenderOpts {
                    optional: true,
                    prefix: String::new(),
                },
                "foo baz",
            ),
            (
                "foo {{bar}} baz",
                placeholder("bar"),
                "",
                RenderOpts::default(),
                "foo {{bar}} baz",
            ),
            (
                "foo {{bar}} {{baz}}",
                placeholder("bar"),
                "val",
                RenderOpts {
                    optional: false,
                    prefix: "--foo=".to_string(),
                },
                "foo --foo=val {{baz}}",
            ),
            (
                "foo {{bar}} {{baz}}",
                placeholder("baz"),
                "val",
                RenderOpts {
                    optional: false,
                    prefix: "--foo=".to_string(),
                },
                "foo {{bar}} --foo=val",
            ),
            (
                "foo {{baz}}",
                placeholder("baz"),
                "val",
                RenderOpts {
                    optional: true,
                    prefix: "--foo=".to_string(),
                },
                "foo --foo=val",
            ),
        ];

        for (original, placeholder, value, opts, expected) in cases {
            assert_eq!(
                replace_placeholder(original, &placeholder, value, &opts),
                expected,
                "replacing `{}` in `{original}`",
                placeholder.pattern,
            );
        }
    }

    #[test]
    fn test_render() {
        let optional = RenderOpts {
            optional: true,
            prefix: String::new(),
        };
        let exclude_dir = RenderOpts {
            optional: true,
            prefix: "--exclude-dir=".to_string(),
        };

        let cases: Vec<(&str, Vec<&str>, Vec<RenderOpts>, &str)> = vec![
            ("echo {{foo}}", vec!["bar"], vec![RenderOpts::default()], "echo bar"),
            (
                "echo {{foo}} bar",
                vec!["baz"],
                vec![RenderOpts::default()],
                "echo baz bar",
            ),
            (
                "{{foo}} bar baz",
                vec![],
                vec![RenderOpts::default()],
                "{{foo}} bar baz",
            ),
            ("{{foo}} bar baz", vec![], vec![optional.clone()], " bar baz"),
            (
                "{{foo}} bar {{baz}}",
                vec!["baz", "foo", "boz"],
                vec![RenderOpts::default()],
                "baz bar foo",
            ),
            (
                "grep {{f-exclude-dir}} foo .",
                vec![""],
                vec![exclude_dir.clone()],
                "grep foo .",
            ),
            (
                "grep {{f-exclude-dir}} foo .",
                vec!["baz"],
                vec![exclude_dir],
                "grep --exclude-dir=baz foo .",
            ),
            (
                "grep {{what}} .",
                vec![""],
                vec![RenderOpts::default()],
                "grep {{what}} .",
            ),
            (
                "grep {{what}} .",
                vec!["foo"],
                vec![RenderOpts::default()],
                "grep foo .",
            ),
        ];

        for (template, inputs, opts, expected) in cases {
            let inputs: Vec<String> = inputs.into_iter().map(String::from).collect();
            assert_eq!(render(template, &inputs, &opts), expected, "rendering `{template}`");
        }
    }

    #[test]
    fn test_render_no_placeholders_returns_template_unchanged() {
        let inputs = vec!["ignored".to_string()];
        let opts = vec![RenderOpts::default()];
        assert_eq!(render("ls -la", &inputs, &opts), "ls -la");
    }

    #[test]
    fn test_render_is_idempotent_on_rendered_output() {
        let inputs = vec!["x".to_string(), "y".to_string()];
        let rendered = render("cp {{src}} {{dst}}", &inputs, &[]);
        assert_eq!(rendered, "cp x y");

        // No patterns remain, so re-rendering with empty optional inputs is a no-op.
        let optional = vec![
            RenderOpts {
                optional: true,
                prefix: String::new(),
            };
            2
        ];
        assert_eq!(render(&rendered, &[], &optional), rendered);
    }
}
