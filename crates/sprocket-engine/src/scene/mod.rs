//! Scene (draw stream) types.
//!
//! A canvas paints itself into a [`DrawList`]; hosts replay the list with
//! whatever graphics backend they own. Commands are kept in paint order
//! (back-to-front), which for sprites is canvas membership order.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
