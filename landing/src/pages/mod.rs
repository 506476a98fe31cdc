// Landing page routes

mod contact;
mod home;

pub use contact::ContactPage;
pub use home::{HomePage, NotFound};
