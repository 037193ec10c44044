pub mod element;
pub mod event;
pub mod markup;
pub mod query;
pub mod render;
pub mod text;

pub use element::{find_element, find_element_mut, Content, Element};
pub use event::{Event, MouseButton};
pub use query::{contains_element, query_tag, query_tag_ids};
pub use render::{format_grid, table_grid};
