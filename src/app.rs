//! Gateway Frontend App
//!
//! Root component: composes the entity stores, the navigation shell, and the
//! route table.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{
    CarDetail, CarForm, CarList, DealerDetail, DealerForm, DealerList, ErrorBanner, Footer, Home,
    NavBar,
};
use crate::models::{Car, Dealer};
use crate::store::EntityStore;

#[component]
pub fn App() -> impl IntoView {
    // One store per entity, composed at startup and shared through context.
    provide_context(EntityStore::<Car>::new());
    provide_context(EntityStore::<Dealer>::new());

    view! {
        <Router>
            <NavBar/>
            <ErrorBanner/>
            <main class="main-content">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/car") view=CarList/>
                    <Route path=path!("/car/new") view=CarForm/>
                    <Route path=path!("/car/:id") view=CarDetail/>
                    <Route path=path!("/car/:id/edit") view=CarForm/>
                    <Route path=path!("/dealer") view=DealerList/>
                    <Route path=path!("/dealer/new") view=DealerForm/>
                    <Route path=path!("/dealer/:id") view=DealerDetail/>
                    <Route path=path!("/dealer/:id/edit") view=DealerForm/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
