mod album_artwork;
mod album_list;
mod fetch_operation;

pub use album_artwork::*;
pub use album_list::*;
pub use fetch_operation::*;
