// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG debug drawing of a tree and its segments.

use std::fmt::Write;

use quadrant_tree::{QuadTree, Segment};

/// Render every node outline, the stored segments, and any extra `highlight` segments.
///
/// Leaves are outlined in grey, internal nodes in blue. Highlights are drawn last in red.
pub fn render(tree: &QuadTree, highlight: &[Segment]) -> Result<String, std::fmt::Error> {
    let b = tree.bounds();
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        b.x0,
        b.y0,
        b.width(),
        b.height()
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="black"/>"#)?;

    let mut result = Ok(());
    tree.visit(|node| {
        if result.is_err() {
            return;
        }
        let r = node.bounds();
        let stroke = if node.is_leaf() { "#555" } else { "#36c" };
        result = writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{stroke}"/>"#,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        )
        .and_then(|()| {
            node.segments()
                .iter()
                .try_for_each(|s| line(&mut out, s, "white"))
        });
    });
    result?;

    for s in highlight {
        line(&mut out, s, "red")?;
    }
    writeln!(out, "</svg>")?;
    Ok(out)
}

fn line(out: &mut String, s: &Segment, stroke: &str) -> std::fmt::Result {
    writeln!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}"/>"#,
        s.start().x,
        s.start().y,
        s.end().x,
        s.end().y
    )
}
