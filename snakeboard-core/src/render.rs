use crate::error::RenderError;
use crate::models::{BoardState, Cell, Entity};
use crate::scene::{Circle, Node, Rect, Scene, Stroke, Text};
use crate::style::{StyleConfig, body_color};

/// Default edge length of one grid square, in drawing units. All shape
/// geometry derives from the square size, so the whole scene scales
/// uniformly with it.
pub const DEFAULT_SQUARE_SIZE: f64 = 40.0;

/// Top-left corner of a cell's square on the drawing surface. The logical
/// grid has a bottom-left origin while the drawing surface is top-left, so
/// the row axis flips; columns are unflipped.
///
/// Out-of-range cells are a caller precondition, not checked here.
pub fn cell_origin(cell: Cell, grid_height: u32, square_size: f64) -> (f64, f64) {
    let draw_row = grid_height as i32 - 1 - cell.y;
    (
        cell.x as f64 * square_size,
        draw_row as f64 * square_size,
    )
}

/// Pure board-to-scene renderer. Holds only its configuration; every call
/// builds a fresh scene of three ordered layers (grid, entities, labels).
pub struct BoardRenderer {
    style: StyleConfig,
    square_size: f64,
}

impl BoardRenderer {
    pub fn new(style: StyleConfig) -> Self {
        Self::with_square_size(style, DEFAULT_SQUARE_SIZE)
    }

    pub fn with_square_size(style: StyleConfig, square_size: f64) -> Self {
        BoardRenderer { style, square_size }
    }

    /// Render one board into a scene. Fails before emitting any node when
    /// the focus id resolves to no entity or the body palette is empty, so
    /// the output is always a complete scene or none at all.
    pub fn render(&self, board: &BoardState) -> Result<Scene, RenderError> {
        if self.style.entity_body_colors.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        let focus = board
            .focus_entity()
            .ok_or_else(|| RenderError::UnknownFocusEntity(board.focus_entity_id.clone()))?;
        let root = Node::Group(vec![
            self.grid_layer(board),
            self.entity_layer(board, focus),
            self.label_layer(board),
        ]);
        Ok(Scene {
            root,
            width: board.width as f64 * self.square_size,
            height: board.height as f64 * self.square_size,
        })
    }

    /// One square per cell, tiling the full drawing surface. Draw order
    /// among squares is immaterial since they never overlap.
    fn grid_layer(&self, board: &BoardState) -> Node {
        let s = self.square_size;
        let mut squares = Vec::with_capacity((board.width * board.height) as usize);
        for row in 0..board.height {
            for col in 0..board.width {
                squares.push(Node::Rect(Rect {
                    x: col as f64 * s,
                    y: row as f64 * s,
                    w: s,
                    h: s,
                    radius: 0.0,
                    fill: self.style.square_color.clone(),
                    opacity: None,
                    stroke: Some(Stroke {
                        color: "#FFFFFF".to_string(),
                        width: s / 20.0,
                    }),
                }));
            }
        }
        Node::Group(squares)
    }

    /// Z-order policy: non-primary entities in board order, then the
    /// primary entity on top of them, then items, then hazards on top of
    /// everything.
    fn entity_layer(&self, board: &BoardState, focus: &Entity) -> Node {
        let palette = &self.style.entity_body_colors;
        let mut nodes = Vec::new();
        let mut slot = 0usize;
        for entity in &board.entities {
            if entity.id == focus.id {
                continue;
            }
            self.push_entity(&mut nodes, board, entity, body_color(slot, palette));
            slot += 1;
        }
        self.push_entity(&mut nodes, board, focus, &palette[0]);
        for item in &board.items {
            nodes.push(self.item_shape(board, item.position));
        }
        for hazard in &board.hazards {
            nodes.push(self.hazard_shape(board, hazard.position));
        }
        Node::Group(nodes)
    }

    /// Every body segment, then the head atop its own body.
    fn push_entity(&self, nodes: &mut Vec<Node>, board: &BoardState, entity: &Entity, color: &str) {
        for seg in &entity.segments {
            nodes.push(self.body_shape(board, *seg, color));
        }
        nodes.push(self.head_shape(board, entity.head));
    }

    fn body_shape(&self, board: &BoardState, cell: Cell, color: &str) -> Node {
        let s = self.square_size;
        let (x, y) = cell_origin(cell, board.height, s);
        Node::Rect(Rect {
            x,
            y,
            w: s,
            h: s,
            radius: s / 4.0,
            fill: color.to_string(),
            opacity: None,
            stroke: None,
        })
    }

    /// Smaller rounded square centered in the cell, translucent so the head
    /// reads even when head and body colors coincide.
    fn head_shape(&self, board: &BoardState, cell: Cell) -> Node {
        let s = self.square_size;
        let (x, y) = cell_origin(cell, board.height, s);
        let inner = s / 2.5;
        let offset = (s - inner) / 2.0;
        Node::Rect(Rect {
            x: x + offset,
            y: y + offset,
            w: inner,
            h: inner,
            radius: s / 8.0,
            fill: self.style.entity_head_color.clone(),
            opacity: Some(0.8),
            stroke: None,
        })
    }

    fn item_shape(&self, board: &BoardState, cell: Cell) -> Node {
        let s = self.square_size;
        let (x, y) = cell_origin(cell, board.height, s);
        Node::Circle(Circle {
            cx: x + s / 2.0,
            cy: y + s / 2.0,
            r: s / 4.0,
            fill: self.style.item_color.clone(),
        })
    }

    fn hazard_shape(&self, board: &BoardState, cell: Cell) -> Node {
        let s = self.square_size;
        let (x, y) = cell_origin(cell, board.height, s);
        Node::Rect(Rect {
            x,
            y,
            w: s,
            h: s,
            radius: s / 4.0,
            fill: self.style.hazard_color.clone(),
            opacity: Some(self.style.hazard_opacity),
            stroke: None,
        })
    }

    /// Row numbers down the leftmost column (1-indexed from the bottom) and
    /// letter labels along the bottom drawn row. Empty group when labels
    /// are disabled, so the scene always has three layers.
    fn label_layer(&self, board: &BoardState) -> Node {
        let mut labels = Vec::new();
        if !self.style.show_coordinate_labels {
            return Node::Group(labels);
        }
        let s = self.square_size;
        for row in 0..board.height {
            for col in 0..board.width {
                let x = col as f64 * s;
                let y = row as f64 * s;
                if col == 0 {
                    labels.push(Node::Text(Text {
                        x: x + 1.0,
                        y: y + 10.0,
                        content: (board.height - row).to_string(),
                        size: 10.0,
                        fill: "#ffffff".to_string(),
                    }));
                }
                if row == board.height - 1 {
                    labels.push(Node::Text(Text {
                        x: x + s - 7.0,
                        y: y + s - 2.0,
                        content: column_letter(col),
                        size: 10.0,
                        fill: "#ffffff".to_string(),
                    }));
                }
            }
        }
        Node::Group(labels)
    }
}

fn column_letter(col: u32) -> String {
    char::from_u32(u32::from('a') + col)
        .unwrap_or('?')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bottom_left_cell_maps_to_bottom_left_drawing_position() {
        let (x, y) = cell_origin(Cell { x: 0, y: 0 }, 11, 40.0);
        assert_eq!((x, y), (0.0, 400.0));
    }

    #[test]
    fn top_row_maps_to_drawing_row_zero() {
        let (x, y) = cell_origin(Cell { x: 3, y: 10 }, 11, 40.0);
        assert_eq!((x, y), (120.0, 0.0));
    }

    #[test]
    fn origin_is_distinct_for_every_cell() {
        let mut seen = HashSet::new();
        for y in 0..7 {
            for x in 0..5 {
                let (ox, oy) = cell_origin(Cell { x, y }, 7, 40.0);
                assert!(seen.insert((ox as i64, oy as i64)));
            }
        }
        assert_eq!(seen.len(), 35);
    }

    #[test]
    fn column_letters_start_at_a() {
        assert_eq!(column_letter(0), "a");
        assert_eq!(column_letter(1), "b");
        assert_eq!(column_letter(25), "z");
    }
}
