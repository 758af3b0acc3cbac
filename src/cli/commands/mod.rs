mod add;
mod list;
mod serve;
mod status;

pub use add::cmd_add_movie;
pub use list::cmd_list_movies;
pub use serve::cmd_serve;
pub use status::cmd_status;
