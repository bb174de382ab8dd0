use serde::Serialize;

/// One vector drawing primitive. A render call produces a tree of these;
/// later children paint over earlier ones.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Node {
    Group(Vec<Node>),
    Rect(Rect),
    Circle(Circle),
    Text(Text),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

/// Axis-aligned rectangle, optionally rounded and stroked. Coordinates are
/// the top-left corner in drawing units.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub radius: f64,
    pub fill: String,
    pub opacity: Option<f64>,
    pub stroke: Option<Stroke>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub size: f64,
    pub fill: String,
}

/// A rendered scene: the root group plus the drawing-surface size the
/// embedding viewport must use (`board width/height × square size`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub root: Node,
    pub width: f64,
    pub height: f64,
}

impl Node {
    fn write_svg(&self, s: &mut String) {
        match self {
            Node::Group(children) => {
                s.push_str("<g>\n");
                for child in children {
                    child.write_svg(s);
                }
                s.push_str("</g>\n");
            }
            Node::Rect(r) => {
                s.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"",
                    r.x, r.y, r.w, r.h
                ));
                if r.radius > 0.0 {
                    s.push_str(&format!(" rx=\"{:.2}\" ry=\"{:.2}\"", r.radius, r.radius));
                }
                s.push_str(&format!(" fill=\"{}\"", r.fill));
                if let Some(op) = r.opacity {
                    s.push_str(&format!(" opacity=\"{}\"", op));
                }
                if let Some(st) = &r.stroke {
                    s.push_str(&format!(
                        " stroke=\"{}\" stroke-width=\"{:.2}\"",
                        st.color, st.width
                    ));
                }
                s.push_str("/>\n");
            }
            Node::Circle(c) => {
                s.push_str(&format!(
                    "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>\n",
                    c.cx, c.cy, c.r, c.fill
                ));
            }
            Node::Text(t) => {
                s.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"{}\" fill=\"{}\">{}</text>\n",
                    t.x,
                    t.y,
                    t.size,
                    t.fill,
                    svg_escape(&t.content)
                ));
            }
        }
    }
}

/// Serialize a scene into a standalone SVG document sized to its bounding
/// box. The tree itself is the contract; this is the embedding wrapper.
pub fn to_svg_document(scene: &Scene) -> String {
    let mut s = String::new();
    s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    s.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\">\n",
        w = scene.width,
        h = scene.height
    ));
    scene.root.write_svg(&mut s);
    s.push_str("</svg>\n");
    s
}

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_declares_bounding_box_viewport() {
        let scene = Scene {
            root: Node::Group(vec![]),
            width: 120.0,
            height: 80.0,
        };
        let svg = to_svg_document(&scene);
        assert!(svg.contains("viewBox=\"0 0 120 80\""));
        assert!(svg.contains("width=\"120\" height=\"80\""));
    }

    #[test]
    fn text_content_is_escaped() {
        let scene = Scene {
            root: Node::Text(Text {
                x: 0.0,
                y: 0.0,
                content: "<a&b>".to_string(),
                size: 10.0,
                fill: "#ffffff".to_string(),
            }),
            width: 10.0,
            height: 10.0,
        };
        let svg = to_svg_document(&scene);
        assert!(svg.contains("&lt;a&amp;b&gt;"));
    }
}
