use std::fmt::Write as _;

use crate::{Color, Modifier, Semantics};

pub type ViewId = u64;

/// Where an image icon's pixels come from. Decoding is the renderer's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Uri(String),
    Asset(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Box,
    Row,
    Text {
        text: String,
        color: Color,
        font_size: f32,
        line_height: f32,
        font_family: String,
    },
    Image {
        source: ImageSource,
        tint: Option<Color>,
    },
}

/// A node of the declarative view tree produced by `render` functions.
#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first search for the first node carrying `tag`.
    pub fn find_tagged(&self, tag: u64) -> Option<&View> {
        if self.modifier.tag == Some(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_tagged(tag))
    }

    /// Compact indented dump of the tree, one node per line.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, 0);
        out
    }

    fn write_outline(&self, out: &mut String, depth: usize) {
        let _ = write!(out, "{:indent$}", "", indent = depth * 2);
        match &self.kind {
            ViewKind::Box => out.push_str("Box"),
            ViewKind::Row => out.push_str("Row"),
            ViewKind::Text {
                text,
                color,
                font_size,
                ..
            } => {
                let _ = write!(out, "Text {text:?} {} {font_size:.1}", color.to_hex());
            }
            ViewKind::Image { source, tint } => {
                let _ = write!(out, "Image {source:?}");
                if let Some(t) = tint {
                    let _ = write!(out, " tint={}", t.to_hex());
                }
            }
        }
        let m = &self.modifier;
        if let Some(tag) = m.tag {
            let _ = write!(out, " tag={tag}");
        }
        if let Some(w) = m.width {
            let _ = write!(out, " w={w:.1}");
        }
        if let Some(h) = m.height {
            let _ = write!(out, " h={h:.1}");
        }
        if let Some(bg) = m.background {
            let _ = write!(out, " bg={}", bg.to_hex());
        }
        if let Some(a) = m.alpha {
            let _ = write!(out, " alpha={a:.1}");
        }
        if let Some(t) = m.transform {
            let _ = write!(out, " dx={:.1}", t.translate_x);
        }
        if m.click {
            out.push_str(" click");
        }
        out.push('\n');
        for child in &self.children {
            child.write_outline(out, depth + 1);
        }
    }
}
