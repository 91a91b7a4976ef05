use crate::span::Span;
use crate::syntax::{NodeKind, SyntaxTree, dump};

fn sp() -> Span {
    Span::empty(0)
}

#[test]
fn root_only_tree() {
    let tree = SyntaxTree::new(
        NodeKind::Class {
            name: "C".to_string(),
        },
        sp(),
    );
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.first_child(tree.root()), None);
    assert_eq!(dump(&tree), "Class C\n");
}

#[test]
fn siblings_keep_insertion_order() {
    let mut tree = SyntaxTree::new(NodeKind::Block, sp());
    let root = tree.root();
    let a = tree.push_child(
        root,
        NodeKind::Variable {
            name: "a".to_string(),
        },
        sp(),
    );
    let b = tree.push_child(
        root,
        NodeKind::Variable {
            name: "b".to_string(),
        },
        sp(),
    );
    let c = tree.push_child(
        root,
        NodeKind::Variable {
            name: "c".to_string(),
        },
        sp(),
    );

    let children: Vec<_> = tree.children(root).collect();
    assert_eq!(children, vec![a, b, c]);
    assert_eq!(tree.child_count(root), 3);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.next_sibling(c), None);
}

#[test]
fn detached_nodes_attach_later() {
    let mut tree = SyntaxTree::new(NodeKind::Block, sp());
    let root = tree.root();
    let inner = tree.alloc(NodeKind::Block, sp());
    let leaf = tree.push_child(
        inner,
        NodeKind::Number {
            value: "1".to_string(),
        },
        sp(),
    );
    // Not reachable from the root until appended.
    assert_eq!(tree.child_count(root), 0);

    tree.append_child(root, inner);
    assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![inner]);
    assert_eq!(tree.first_child(inner), Some(leaf));
}

#[test]
fn dump_indents_by_depth() {
    let mut tree = SyntaxTree::new(
        NodeKind::Class {
            name: "C".to_string(),
        },
        sp(),
    );
    let root = tree.root();
    let block = tree.push_child(root, NodeKind::Block, sp());
    tree.push_child(
        block,
        NodeKind::Number {
            value: "42".to_string(),
        },
        sp(),
    );

    assert_eq!(dump(&tree), "Class C\n  Block\n    Number 42\n");
}
