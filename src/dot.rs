use std::fmt::{Display, Write};

use crate::{
    bst::Bst,
    node::{Color, NodeId},
};

/// Render `t` as a Graphviz digraph.
///
/// Nodes are named by their [`NodeId`] (keys may repeat) and labelled with
/// their key.
pub(crate) fn print_dot<K, V>(t: &Bst<K, V>) -> String
where
    K: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"bgcolor = "transparent";"#).unwrap();
    writeln!(
        buf,
        r#"node [shape = circle; style = filled; fontcolor = white;];"#
    )
    .unwrap();
    if let Some(root) = t.root() {
        recurse(t, root, &mut buf);
    }
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<K, V, W>(t: &Bst<K, V>, id: NodeId, buf: &mut W)
where
    W: Write,
    K: Display,
{
    let n = &t[id];
    let fill = match n.color() {
        Color::Red => "red",
        Color::Black => "black",
    };

    writeln!(
        buf,
        r#""{}" [label="{}"; fillcolor = {}];"#,
        id.0,
        n.key(),
        fill,
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(buf, "\"{}\" -> \"{}\";", id.0, v.0).unwrap();
                recurse(t, v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", id.0).unwrap();
                writeln!(buf, "\"{}\" -> \"null_{}\" [style=invis];", id.0, id.0).unwrap();
            }
        };
    }
}
