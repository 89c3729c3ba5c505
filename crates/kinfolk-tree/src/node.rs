//! Person nodes and the nested forest handed to layout

use kinfolk_domain::{AssertionId, PersonId, Placement, RelationCode};
use serde::{Deserialize, Serialize};

/// What a node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The person the tree is drawn for
    Viewer,

    /// A person named by an assertion
    Relative,

    /// A synthetic stand-in for an implied, unrecorded relative
    Placeholder,
}

/// One person in a built tree
///
/// Children are held by id; the same child id may sit under several
/// parents (both parents of the viewer, say) without the child being
/// duplicated in the arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonNode {
    /// Person identifier
    pub id: PersonId,

    /// Node kind
    pub kind: NodeKind,

    /// Name shown on the node (empty when no profile is known)
    pub display_name: String,

    /// Avatar reference, if any
    pub avatar_ref: Option<String>,

    /// Relation word from the viewer's perspective
    pub relation_label: String,

    /// Viewer-relative relation code (`None` for the viewer)
    pub relation: Option<RelationCode>,

    /// Assertion that introduced this node
    pub assertion_id: Option<AssertionId>,

    /// Generation band, `None` when the relation has no band
    pub placement: Option<Placement>,

    /// Child ids, never repeated
    pub children: Vec<PersonId>,
}

impl PersonNode {
    pub(crate) fn viewer(id: PersonId, display_name: String, avatar_ref: Option<String>, label: &str) -> Self {
        Self {
            id,
            kind: NodeKind::Viewer,
            display_name,
            avatar_ref,
            relation_label: label.to_string(),
            relation: None,
            assertion_id: None,
            placement: Some(Placement::VIEWER),
            children: Vec::new(),
        }
    }

    pub(crate) fn placeholder(id: PersonId, label: &str, relation: RelationCode) -> Self {
        let placement = relation.placement();
        Self {
            id,
            kind: NodeKind::Placeholder,
            display_name: String::new(),
            avatar_ref: None,
            relation_label: label.to_string(),
            relation: Some(relation),
            assertion_id: None,
            placement,
            children: Vec::new(),
        }
    }

    /// Generation level, if placed
    pub fn level(&self) -> Option<i32> {
        self.placement.map(|p| p.level)
    }

    /// Generation offset, if placed
    pub fn generation(&self) -> Option<i32> {
        self.placement.map(|p| p.generation)
    }

    /// Whether this is a synthetic node
    pub fn is_placeholder(&self) -> bool {
        self.kind == NodeKind::Placeholder
    }

    /// Whether `id` is already among the children
    pub fn has_child(&self, id: &PersonId) -> bool {
        self.children.iter().any(|child| child == id)
    }
}

/// Owned, nested view of a node for the layout collaborator
///
/// Shared children are repeated under every parent that holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Person identifier
    pub id: PersonId,

    /// Node kind
    pub kind: NodeKind,

    /// Name shown on the node
    pub display_name: String,

    /// Avatar reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,

    /// Relation word from the viewer's perspective
    pub relation_label: String,

    /// Generation level (`None` = unplaced)
    pub level: Option<i32>,

    /// Generation offset (`None` = unplaced)
    pub generation: Option<i32>,

    /// Nested children
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub(crate) fn leaf(node: &PersonNode) -> Self {
        Self {
            id: node.id.clone(),
            kind: node.kind,
            display_name: node.display_name.clone(),
            avatar_ref: node.avatar_ref.clone(),
            relation_label: node.relation_label.clone(),
            level: node.level(),
            generation: node.generation(),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, repeats included
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}
