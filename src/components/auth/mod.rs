//! Login screen and sign-in error mapping.

mod login;

pub use login::LoginView;
