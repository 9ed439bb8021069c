/// A single member of a C++ enum definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    /// The member name as written in the header, e.g. `HPT_ALARM_START`.
    pub name: String,
    /// Verbatim value expression, e.g. `0x01` or `-1`. Never evaluated.
    pub value: Option<String>,
    /// Trailing line-comment text, trimmed.
    pub comment: Option<String>,
}

/// A named C++ enum and its members in declaration order.
///
/// Declaration order is semantically meaningful: it is reproduced in the
/// generated output, and members without explicit values take their numbers
/// from their position.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDefinition {
    /// The enum tag name as written after `typedef enum`.
    pub name: String,
    pub members: Vec<EnumMember>,
}

impl EnumDefinition {
    /// Create an empty definition for the given tag name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        EnumDefinition {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Whether any member of this definition carries the given name.
    pub fn contains_member(&self, name: &str) -> bool {
        self.members.iter().any(|member| member.name == name)
    }
}
