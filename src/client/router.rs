use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_logger::tracing;

use crate::client::{
    components::Navbar,
    flow::{Destination, Navigate},
    routes::{Course, Home, Login, NotFound, SignUp},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/SignUp")]
    SignUp {},

    #[route("/course")]
    Course {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
            Destination::Login => Route::Login {},
            Destination::SignUp => Route::SignUp {},
            Destination::Course => Route::Course {},
        }
    }
}

impl Navigate for Navigator {
    fn navigate(&self, to: Destination) {
        if let Some(failure) = self.push(Route::from(to)) {
            tracing::warn!("Navigation to {:?} failed: {:?}", to, failure);
        }
    }
}
