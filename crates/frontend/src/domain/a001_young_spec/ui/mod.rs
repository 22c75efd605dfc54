pub mod editor;
pub mod list;

pub use list::YoungSpecList;
