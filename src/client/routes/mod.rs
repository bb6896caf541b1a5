pub mod course;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;

pub use course::Course;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use signup::SignUp;
