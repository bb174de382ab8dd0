use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Logical grid coordinate. Row 0 is the bottom row of the board; the
/// renderer flips the vertical axis when mapping to drawing space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// A segmented board occupant (a snake): ordered body cells plus a head
/// cell drawn on top of its own body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub head: Cell,
    #[serde(default)]
    pub segments: Vec<Cell>,
}

/// A single-cell collectible (food).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub position: Cell,
}

/// A single-cell danger zone, rendered as a translucent overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub position: Cell,
}

/// Validated board state handed to the renderer. Read-only input; one
/// entity must match `focus_entity_id` and is treated as primary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub hazards: Vec<Hazard>,
    pub focus_entity_id: String,
}

impl BoardState {
    /// The entity matching `focus_entity_id`, if any.
    pub fn focus_entity(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == self.focus_entity_id)
    }

    /// Check the structural invariant: positive dimensions, every cell in
    /// range, and a resolvable focus id. The renderer assumes this has
    /// already passed.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.width == 0 || self.height == 0 {
            return Err(BoardError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        let check = |c: Cell| -> Result<(), BoardError> {
            if c.x < 0 || c.x >= self.width as i32 || c.y < 0 || c.y >= self.height as i32 {
                return Err(BoardError::CellOutOfRange {
                    x: c.x,
                    y: c.y,
                    width: self.width,
                    height: self.height,
                });
            }
            Ok(())
        };
        for e in &self.entities {
            check(e.head)?;
            for seg in &e.segments {
                check(*seg)?;
            }
        }
        for it in &self.items {
            check(it.position)?;
        }
        for hz in &self.hazards {
            check(hz.position)?;
        }
        if self.focus_entity().is_none() {
            return Err(BoardError::UnknownFocusEntity(self.focus_entity_id.clone()));
        }
        Ok(())
    }
}

/// Battlesnake game document as exported by the engine or pasted into a
/// fenced code block: `{ board: {...}, you: {...} }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameDoc {
    pub board: WireBoard,
    pub you: WireSnake,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WireBoard {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub snakes: Vec<WireSnake>,
    #[serde(default)]
    pub food: Vec<Cell>,
    #[serde(default)]
    pub hazards: Vec<Cell>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WireSnake {
    pub id: String,
    #[serde(default)]
    pub head: Cell,
    #[serde(default)]
    pub body: Vec<Cell>,
}

impl GameDoc {
    pub fn from_json(text: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Flatten the wire document into a [`BoardState`] focused on `you`.
    /// Some exports omit `you` from `board.snakes`; it is appended then so
    /// the focus id always resolves.
    pub fn into_board(self) -> BoardState {
        let you_id = self.you.id.clone();
        let mut entities: Vec<Entity> = self
            .board
            .snakes
            .into_iter()
            .map(|s| Entity {
                id: s.id,
                head: s.head,
                segments: s.body,
            })
            .collect();
        if !entities.iter().any(|e| e.id == you_id) {
            entities.push(Entity {
                id: you_id.clone(),
                head: self.you.head,
                segments: self.you.body,
            });
        }
        BoardState {
            width: self.board.width,
            height: self.board.height,
            entities,
            items: self
                .board
                .food
                .iter()
                .map(|&position| Item { position })
                .collect(),
            hazards: self
                .board
                .hazards
                .iter()
                .map(|&position| Hazard { position })
                .collect(),
            focus_entity_id: you_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "board": {
            "width": 5,
            "height": 4,
            "snakes": [
                {"id": "you", "head": {"x": 1, "y": 1}, "body": [{"x": 1, "y": 1}, {"x": 1, "y": 0}]},
                {"id": "rival", "head": {"x": 3, "y": 2}, "body": [{"x": 3, "y": 2}]}
            ],
            "food": [{"x": 0, "y": 3}],
            "hazards": [{"x": 4, "y": 0}]
        },
        "you": {"id": "you", "head": {"x": 1, "y": 1}, "body": [{"x": 1, "y": 1}, {"x": 1, "y": 0}]}
    }"#;

    #[test]
    fn decodes_wire_document() {
        let board = GameDoc::from_json(DOC).unwrap().into_board();
        assert_eq!(board.width, 5);
        assert_eq!(board.height, 4);
        assert_eq!(board.entities.len(), 2);
        assert_eq!(board.items.len(), 1);
        assert_eq!(board.hazards.len(), 1);
        assert_eq!(board.focus_entity_id, "you");
        board.validate().unwrap();
    }

    #[test]
    fn appends_you_when_missing_from_snakes() {
        let doc = GameDoc {
            board: WireBoard {
                width: 3,
                height: 3,
                snakes: vec![],
                food: vec![],
                hazards: vec![],
            },
            you: WireSnake {
                id: "solo".into(),
                head: Cell { x: 0, y: 0 },
                body: vec![Cell { x: 0, y: 0 }],
            },
        };
        let board = doc.into_board();
        assert_eq!(board.entities.len(), 1);
        assert!(board.focus_entity().is_some());
    }

    #[test]
    fn validate_rejects_out_of_range_cell() {
        let mut board = GameDoc::from_json(DOC).unwrap().into_board();
        board.items.push(Item {
            position: Cell { x: 5, y: 0 },
        });
        assert!(matches!(
            board.validate(),
            Err(BoardError::CellOutOfRange { x: 5, .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_dimension() {
        let board = BoardState {
            width: 0,
            height: 4,
            ..Default::default()
        };
        assert!(matches!(
            board.validate(),
            Err(BoardError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn validate_rejects_unknown_focus_id() {
        let mut board = GameDoc::from_json(DOC).unwrap().into_board();
        board.focus_entity_id = "nobody".into();
        assert!(matches!(
            board.validate(),
            Err(BoardError::UnknownFocusEntity(id)) if id == "nobody"
        ));
    }
}
