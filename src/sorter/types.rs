/// A recognized dependency-declaration keyword. Declaration order is the
/// fixed output-priority order of the groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Require,
    RequireRelative,
    Include,
    Extend,
    Autoload,
    Using,
}

impl DeclarationKind {
    /// All kinds, in output-priority order.
    pub const ALL: [DeclarationKind; 6] = [
        DeclarationKind::Require,
        DeclarationKind::RequireRelative,
        DeclarationKind::Include,
        DeclarationKind::Extend,
        DeclarationKind::Autoload,
        DeclarationKind::Using,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            DeclarationKind::Require => "require",
            DeclarationKind::RequireRelative => "require_relative",
            DeclarationKind::Include => "include",
            DeclarationKind::Extend => "extend",
            DeclarationKind::Autoload => "autoload",
            DeclarationKind::Using => "using",
        }
    }

    /// Position in the output order; indexes the per-kind group table.
    pub fn rank(self) -> usize {
        self as usize
    }
}

/// One declaration line plus the comment block scanned in front of it.
/// The sort key is always the declaration, never a comment.
#[derive(Debug, Clone)]
pub struct Entry {
    pub comments: Vec<String>,
    pub declaration: String,
}

impl Entry {
    pub fn sort_key(&self) -> &str {
        self.declaration.trim()
    }
}
