//! HTML and terminal rendering of the catalog.

pub mod cards;
pub mod page;
pub mod stars;
pub mod terminal;

pub use cards::{count_label, render_card, render_grid};
pub use page::{PageContext, render_page};
pub use stars::{StarRating, clamp_rating, rating_to_stars};
