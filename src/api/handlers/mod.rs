// src/api/handlers/mod.rs
mod assets;
mod convert;
mod health;
mod sessions;

pub use assets::static_file_handler;
pub use convert::{convert, get_example};
pub use health::health_check;
pub use sessions::{
    clear, create_session, delete_session, get_session, load_example, set_input, submit,
    InputRequest, SessionResponse,
};
