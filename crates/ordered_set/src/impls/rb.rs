use crate::OrderedSet;

const NIL: u32 = u32::MAX;

/// Red-black tree set over an index arena.
///
/// Nodes live in a `Vec` and address each other by index; `parent` is a
/// back-index used by the upward repair walk after insertion. Slots are never
/// freed (there is no remove operation), so arena length equals the number of
/// distinct values held.
///
/// Invariants restored after every `put`:
/// 1. every node is red or black,
/// 2. the root is black,
/// 3. absent children count as black leaves,
/// 4. a red node never has a red child,
/// 5. every path from a node down to an absent child crosses the same number
///    of black nodes.
///
/// Together these bound the height at `2 * log2(len + 1)`.
pub struct RbTreeSet<V: Ord> {
    nodes: Vec<Node<V>>,
    root: u32,
    repair_fallbacks: u64,
}

/// Handle to a node inside the tree that produced it.
///
/// Handles stay valid for the life of the tree: nodes are recolored and
/// relinked, but never moved or dropped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeRef(u32);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

struct Node<V> {
    value: V,
    color: Color,
    parent: u32, // NIL for the root
    left: u32,
    right: u32,
}

impl<V: Ord> RbTreeSet<V> {
    /// Exact-value lookup. Plain BST descent, no mutation.
    pub fn find(&self, value: &V) -> Option<NodeRef> {
        let mut cur = self.root;
        while cur != NIL {
            let node = &self.nodes[cur as usize];
            match value.cmp(&node.value) {
                std::cmp::Ordering::Less => cur = node.left,
                std::cmp::Ordering::Greater => cur = node.right,
                std::cmp::Ordering::Equal => return Some(NodeRef(cur)),
            }
        }
        None
    }

    /// Reads the value held by `node`.
    pub fn value(&self, node: NodeRef) -> &V {
        &self.nodes[node.0 as usize].value
    }

    /// BST descent to the insertion point. Returns the new node, or `None`
    /// when the value is already present (the tree is left untouched).
    fn insert_node(&mut self, value: V) -> Option<u32> {
        if self.root == NIL {
            let id = self.alloc(value, NIL);
            self.root = id;
            return Some(id);
        }

        let mut cur = self.root;
        loop {
            match value.cmp(&self.nodes[cur as usize].value) {
                std::cmp::Ordering::Less => {
                    let left = self.nodes[cur as usize].left;
                    if left == NIL {
                        let id = self.alloc(value, cur);
                        self.nodes[cur as usize].left = id;
                        return Some(id);
                    }
                    cur = left;
                }
                std::cmp::Ordering::Greater => {
                    let right = self.nodes[cur as usize].right;
                    if right == NIL {
                        let id = self.alloc(value, cur);
                        self.nodes[cur as usize].right = id;
                        return Some(id);
                    }
                    cur = right;
                }
                std::cmp::Ordering::Equal => return None,
            }
        }
    }

    fn alloc(&mut self, value: V, parent: u32) -> u32 {
        debug_assert!(self.nodes.len() < NIL as usize);
        let id = self.nodes.len() as u32;
        self.nodes.push(Node {
            value,
            color: Color::Red,
            parent,
            left: NIL,
            right: NIL,
        });
        id
    }

    /// Restores the coloring invariants after `node` was inserted.
    ///
    /// Walks upward from the new node. Each step classifies the node against
    /// its parent, grandparent, and uncle, then either recolors and retries
    /// two levels up, or rotates and retries from the repositioned node.
    fn repair(&mut self, node: u32) {
        let mut cur = node;
        loop {
            if cur == NIL {
                return;
            }
            let parent = self.nodes[cur as usize].parent;
            if parent == NIL {
                return;
            }
            if self.nodes[parent as usize].color == Color::Black {
                return;
            }
            let grandparent = self.nodes[parent as usize].parent;
            if grandparent == NIL {
                return;
            }

            let uncle = self.uncle(parent);
            // uncle red: recoloring may push the violation two levels up
            if uncle != NIL && self.nodes[uncle as usize].color == Color::Red {
                self.nodes[parent as usize].color = Color::Black;
                self.nodes[uncle as usize].color = Color::Black;
                self.nodes[grandparent as usize].color = Color::Red;
                cur = grandparent;
                continue;
            }

            // uncle black or absent from here on
            if self.forms_triangle(parent, cur) {
                // inner grandchild: straighten the triangle into a line
                if self.nodes[parent as usize].left == cur {
                    self.rotate_right(parent);
                } else {
                    self.rotate_left(parent);
                }
                cur = parent;
                continue;
            }
            if self.forms_line(parent, cur) {
                // flat line: rotate the grandparent against it and swap colors
                if self.nodes[parent as usize].left == cur {
                    self.rotate_right(grandparent);
                } else {
                    self.rotate_left(grandparent);
                }
                self.nodes[grandparent as usize].color = Color::Red;
                self.nodes[parent as usize].color = Color::Black;
                cur = self.nodes[cur as usize].parent;
                continue;
            }

            // No pattern matched; retry one level up.
            self.repair_fallbacks += 1;
            cur = parent;
        }
    }

    /// The parent's sibling at the grandparent level. Panics if the recorded
    /// links are mutually inconsistent; that is unrecoverable corruption.
    fn uncle(&self, parent: u32) -> u32 {
        let grandparent = self.nodes[parent as usize].parent;
        let g = &self.nodes[grandparent as usize];
        if g.left == parent {
            g.right
        } else if g.right == parent {
            g.left
        } else {
            panic!("parent is not a child of its recorded grandparent");
        }
    }

    /// `child` is the inner grandchild: the grandparent-to-parent and
    /// parent-to-child links point in opposite directions.
    fn forms_triangle(&self, parent: u32, child: u32) -> bool {
        let grandparent = self.nodes[parent as usize].parent;
        if grandparent == NIL {
            return false;
        }
        let p = &self.nodes[parent as usize];
        let g = &self.nodes[grandparent as usize];
        (p.left == child && g.right == parent) || (p.right == child && g.left == parent)
    }

    /// Both links point the same way: `child` is the outer grandchild.
    fn forms_line(&self, parent: u32, child: u32) -> bool {
        let grandparent = self.nodes[parent as usize].parent;
        if grandparent == NIL {
            return false;
        }
        let p = &self.nodes[parent as usize];
        let g = &self.nodes[grandparent as usize];
        (p.right == child && g.right == parent) || (p.left == child && g.left == parent)
    }

    /// Promotes `node`'s left child into `node`'s position. The child's right
    /// subtree crosses over to become `node`'s new left subtree. In-order
    /// sequence is unchanged. With no left child this degenerates to a relink.
    fn rotate_right(&mut self, node: u32) {
        let left_child = self.nodes[node as usize].left;
        let parent = self.nodes[node as usize].parent;
        let left_right_child = if left_child == NIL {
            NIL
        } else {
            self.nodes[left_child as usize].right
        };

        if parent != NIL {
            if self.nodes[parent as usize].right == node {
                self.nodes[parent as usize].right = left_child;
            } else if self.nodes[parent as usize].left == node {
                self.nodes[parent as usize].left = left_child;
            }
        }
        if left_child != NIL {
            self.nodes[left_child as usize].right = node;
            self.nodes[left_child as usize].parent = parent;
        }
        if node == self.root {
            self.root = left_child;
        }
        self.nodes[node as usize].parent = left_child;
        self.nodes[node as usize].left = left_right_child;
        if left_right_child != NIL {
            self.nodes[left_right_child as usize].parent = node;
        }
    }

    /// Mirror image of [`Self::rotate_right`].
    fn rotate_left(&mut self, node: u32) {
        let right_child = self.nodes[node as usize].right;
        let parent = self.nodes[node as usize].parent;
        let right_left_child = if right_child == NIL {
            NIL
        } else {
            self.nodes[right_child as usize].left
        };

        if parent != NIL {
            if self.nodes[parent as usize].right == node {
                self.nodes[parent as usize].right = right_child;
            } else if self.nodes[parent as usize].left == node {
                self.nodes[parent as usize].left = right_child;
            }
        }
        if right_child != NIL {
            self.nodes[right_child as usize].left = node;
            self.nodes[right_child as usize].parent = parent;
        }
        if node == self.root {
            self.root = right_child;
        }
        self.nodes[node as usize].parent = right_child;
        self.nodes[node as usize].right = right_left_child;
        if right_left_child != NIL {
            self.nodes[right_left_child as usize].parent = node;
        }
    }
}

impl<V: Ord> OrderedSet for RbTreeSet<V> {
    type Value = V;

    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: NIL,
            repair_fallbacks: 0,
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn put(&mut self, value: Self::Value) {
        if let Some(inserted) = self.insert_node(value) {
            self.repair(inserted);
        }
        if self.root != NIL {
            self.nodes[self.root as usize].color = Color::Black;
        }
    }

    fn contains(&self, value: &Self::Value) -> bool {
        self.find(value).is_some()
    }
}
