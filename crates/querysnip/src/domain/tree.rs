//! Tree node kinds and their nesting rules.

/// Node kinds of the console's project and data-center trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeNodeKind {
    // Project tree
    Project,
    ProjectGroup,
    // Data-center tree
    Region,
    Zone,
    Pool,
}

impl TreeNodeKind {
    /// Whether this kind may sit at the root of its tree.
    pub const fn is_root_able(self) -> bool {
        matches!(self, TreeNodeKind::ProjectGroup)
    }

    /// Leaf nodes never take children in the UI tree.
    pub const fn is_leaf(self) -> bool {
        matches!(self, TreeNodeKind::Project)
    }

    /// Whether a node of this kind accepts `child` beneath it.
    pub const fn accepts(self, child: TreeNodeKind) -> bool {
        match self {
            TreeNodeKind::ProjectGroup => {
                matches!(child, TreeNodeKind::ProjectGroup | TreeNodeKind::Project)
            }
            TreeNodeKind::Region => matches!(child, TreeNodeKind::Zone),
            TreeNodeKind::Zone => matches!(child, TreeNodeKind::Pool),
            TreeNodeKind::Project | TreeNodeKind::Pool => false,
        }
    }
}
