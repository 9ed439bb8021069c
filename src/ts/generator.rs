use crate::extractor::ast::EnumDefinition;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Write;

/// A fully rendered TypeScript enum declaration, ready for concatenation.
#[derive(Debug, Clone, PartialEq)]
pub struct TranspiledEnum {
    /// The TypeScript enum name, e.g. `GeniusPacketType`.
    pub name: String,
    /// The complete `export enum` block, terminated by `}` and one newline.
    pub body: String,
}

lazy_static! {
    static ref MEMBER_PREFIX_RE: Regex = Regex::new(r"^[A-Z]{2,3}_").unwrap();
}

/// Convert a C++ enum tag name to its TypeScript enum name.
///
/// Strips one trailing `_t` suffix if present, then PascalCases the
/// remaining underscore-separated segments. Semantic prefixes such as
/// `genius_` are kept: `sensor_state_t` becomes `SensorState`,
/// `genius_mode` becomes `GeniusMode`.
pub fn ts_enum_name(enum_name: &str) -> String {
    let clean = enum_name.strip_suffix("_t").unwrap_or(enum_name);
    pascal_case(clean)
}

/// Convert a C++ enum member name to its TypeScript member name.
///
/// A leading scoped prefix of exactly 2 or 3 uppercase letters followed by
/// an underscore (`HR_`, `HAE_`, `GSD_`) is removed first; the prefix is
/// redundant once the member lives inside a scoped TypeScript enum. The
/// 2-3 letter bound is a heuristic: `WIFI_CONNECTED` keeps its segment, but
/// any 3-letter word such as `USB_` is stripped too. The bound is kept
/// as-is for compatibility with identifiers already generated.
pub fn ts_member_name(member_name: &str) -> String {
    let stripped = match MEMBER_PREFIX_RE.find(member_name) {
        Some(prefix) => &member_name[prefix.end()..],
        None => member_name,
    };
    pascal_case(stripped)
}

/// Render one extracted enum definition as a TypeScript `export enum` block.
///
/// Members keep their declaration order. A member with a captured comment
/// gets a `/** ... */` doc line immediately above it; a member with an
/// explicit value keeps that value expression verbatim. The output is a pure
/// function of the definition, so unchanged input renders byte-identically.
pub fn transpile_enum(definition: &EnumDefinition) -> TranspiledEnum {
    let name = ts_enum_name(&definition.name);
    let mut body = String::new();

    writeln!(body, "export enum {} {{", name).unwrap();

    for member in &definition.members {
        if let Some(ref comment) = member.comment {
            writeln!(body, "  /** {} */", sanitize_comment(comment)).unwrap();
        }

        let member_name = ts_member_name(&member.name);
        match member.value {
            Some(ref value) => writeln!(body, "  {} = {},", member_name, value).unwrap(),
            None => writeln!(body, "  {},", member_name).unwrap(),
        }
    }

    writeln!(body, "}}").unwrap();

    TranspiledEnum { name, body }
}

/// PascalCase an underscore-separated identifier: first letter of each
/// segment uppercased, the rest lowercased, segments joined without
/// separator.
fn pascal_case(name: &str) -> String {
    name.split('_').map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Defuse a block-comment terminator inside comment text so a hostile
/// source comment cannot end the generated `/** ... */` line early.
fn sanitize_comment(comment: &str) -> String {
    comment.replace("*/", r"*\/")
}
