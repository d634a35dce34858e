//! Text rendering of a board snapshot.
//!
//! Pure functions of a [`BoardView`](crate::board::BoardView); no game rules
//! live here. `BoardView` also implements `Display` with the full drawing.

mod text;

pub use text::{draw_board, draw_kraken_track, draw_lane, draw_ship_lane};
